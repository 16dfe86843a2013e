use std::convert;
use std::error;
use std::fmt;
use std::fmt::Formatter;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;

const STR_NONE: &str = "NONE";
const STR_ASC: &str = "ASC";
const STR_DESC: &str = "DESC";

#[derive(Serialize, Deserialize, Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Direction {
    #[serde(rename = "NONE")]
    None,
    #[serde(rename = "ASC")]
    Asc,
    #[serde(rename = "DESC")]
    Desc,
}

impl Direction {
    pub fn name(&self) -> &'static str {
        match self {
            Direction::None => STR_NONE,
            Direction::Asc => STR_ASC,
            Direction::Desc => STR_DESC,
        }
    }
}

impl Default for Direction {
    fn default() -> Self {
        Direction::None
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        f.write_str(self.name())
    }
}

impl convert::TryFrom<&str> for Direction {
    type Error = PagingFormatError;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            STR_NONE => Ok(Direction::None),
            STR_ASC => Ok(Direction::Asc),
            STR_DESC => Ok(Direction::Desc),
            _ => Err(format!("Direction '{}' does not match one predefined value", value).into())
        }
    }
}

impl From<Direction> for String {
    fn from(direction: Direction) -> Self {
        direction.name().to_string()
    }
}


/// Sort directive sent along with a page request: which field, which way.
///
/// The field name is taken as given. Whether it names a real column is up to
/// whoever executes the query.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Default)]
#[serde(default)]
pub struct OrderBy {
    #[serde(rename = "fieldName")]
    #[serde(deserialize_with = "deserialize_or_default")]
    field_name: String,
    #[serde(deserialize_with = "deserialize_or_default")]
    direction: Direction,
}

fn deserialize_or_default<'de, D, T>(des: D) -> Result<T, D::Error>
    where D: Deserializer<'de>, T: Deserialize<'de> + Default {
    let value = Option::<T>::deserialize(des)?;
    Ok(value.unwrap_or_default())
}

impl OrderBy {
    pub fn new<S: Into<String>>(field_name: S, direction: Direction) -> Self {
        Self { field_name: field_name.into(), direction }
    }

    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    /// Direction as its wire name: `"NONE"`, `"ASC"` or `"DESC"`.
    pub fn direction(&self) -> &'static str {
        self.direction.name()
    }

    pub fn sort_direction(&self) -> Direction {
        self.direction
    }
}


#[derive(Debug, Serialize, Clone, Eq, PartialEq)]
pub struct PagingFormatError { pub error: String }

impl From<&str> for PagingFormatError {
    fn from(error: &str) -> Self { Self { error: error.to_string() } }
}

impl From<String> for PagingFormatError {
    fn from(error: String) -> Self { Self { error } }
}

impl fmt::Display for PagingFormatError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        f.write_str(&self.error)
    }
}

impl error::Error for PagingFormatError {}
