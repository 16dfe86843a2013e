use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::model::order_by::OrderBy;
use crate::model::page_summary::{DEFAULT_PAGE_SIZE, PageSummary};

/// A request for one page of a larger result set.
///
/// Nothing here is validated: negative indices, a zero page size or an
/// unknown filter key are stored as given and handed to whatever answers
/// the request.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Default)]
#[serde(default)]
pub struct PagingRequest {
    #[serde(rename = "pageIndex")]
    page_index: i32,
    #[serde(rename = "pageSize")]
    page_size: i32,
    #[serde(rename = "orderBy")]
    order_by: Option<OrderBy>,
    #[serde(deserialize_with = "deserialize_filter")]
    filter: HashMap<String, String>,
}

fn deserialize_filter<'de, D>(des: D) -> Result<HashMap<String, String>, D::Error> where D: Deserializer<'de> {
    let filter = Option::<HashMap<String, String>>::deserialize(des)?;
    Ok(filter.unwrap_or_default())
}

impl PagingRequest {
    pub fn new(page_index: i32, page_size: i32) -> Self {
        Self { page_index, page_size, ..Self::default() }
    }

    /// First page at the widget's default page size.
    pub fn first_page() -> Self {
        Self::new(0, DEFAULT_PAGE_SIZE)
    }

    pub fn set_page_index(&mut self, page_index: i32) {
        self.page_index = page_index;
    }

    pub fn page_index(&self) -> i32 {
        self.page_index
    }

    pub fn set_page_size(&mut self, page_size: i32) {
        self.page_size = page_size;
    }

    pub fn page_size(&self) -> i32 {
        self.page_size
    }

    /// Zero-based index of the first item on the requested page.
    ///
    /// Widened to `i64`, so the product is exact for any index and size.
    pub fn offset(&self) -> i64 {
        i64::from(self.page_index) * i64::from(self.page_size)
    }

    pub fn set_order_by(&mut self, order_by: Option<OrderBy>) {
        self.order_by = order_by;
    }

    pub fn order_by(&self) -> Option<&OrderBy> {
        self.order_by.as_ref()
    }

    pub fn set_filter(&mut self, filter: HashMap<String, String>) {
        self.filter = filter;
    }

    pub fn filter(&self) -> &HashMap<String, String> {
        &self.filter
    }

    pub fn filter_mut(&mut self) -> &mut HashMap<String, String> {
        &mut self.filter
    }

    pub fn summary(&self, total: i32) -> PageSummary {
        PageSummary::new(self, total)
    }
}
