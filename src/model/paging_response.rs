use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;

use crate::model::page_summary::PageSummary;
use crate::model::paging_request::PagingRequest;

/// One page of items together with the size of the whole result set.
///
/// `total` counts every matching item, not just the ones in `items`. The
/// item order is whatever the producer chose.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct PagingResponse<T> {
    #[serde(default)]
    total: i32,
    #[serde(default = "Vec::new")]
    #[serde(deserialize_with = "deserialize_items")]
    items: Vec<T>,
}

fn deserialize_items<'de, D, T>(des: D) -> Result<Vec<T>, D::Error>
    where D: Deserializer<'de>, T: Deserialize<'de> {
    let items = Option::<Vec<T>>::deserialize(des)?;
    Ok(items.unwrap_or_else(Vec::new))
}

impl<T> Default for PagingResponse<T> {
    fn default() -> Self {
        Self { total: 0, items: Vec::new() }
    }
}

impl<T> PagingResponse<T> {
    pub fn new(total: i32, items: Vec<T>) -> Self {
        Self { total, items }
    }

    pub fn set_total(&mut self, total: i32) {
        self.total = total;
    }

    pub fn total(&self) -> i32 {
        self.total
    }

    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    pub fn summary(&self, request: &PagingRequest) -> PageSummary {
        PageSummary::new(request, self.total)
    }
}


#[cfg(test)]
mod paging_response_tests {
    use crate::model::paging_request::PagingRequest;
    use crate::model::paging_response::PagingResponse;

    #[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Eq, PartialEq)]
    struct Animal {
        id: u32,
        name: String,
    }

    #[test]
    fn getters_return_set_values() {
        let response = PagingResponse::new(100, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(response.total(), 100);
        assert_eq!(response.items(), ["a".to_string(), "b".to_string()]);

        let mut response = PagingResponse::default();
        response.set_total(-1);
        response.set_items(vec![3, 1, 2]);
        assert_eq!(response.total(), -1);
        assert_eq!(response.items(), [3, 1, 2]);
        assert_eq!(response.into_items(), vec![3, 1, 2]);
    }

    #[test]
    fn more_items_than_total_is_kept() {
        let response = PagingResponse::new(1, vec![1, 2, 3]);
        assert_eq!(response.total(), 1);
        assert_eq!(response.items().len(), 3);
    }

    #[test]
    fn default_response_has_no_items() {
        let response: PagingResponse<Animal> = PagingResponse::default();
        assert_eq!(response.total(), 0);
        assert_eq!(response.items().is_empty(), true);
    }

    #[test]
    fn response_to_json() {
        let response = PagingResponse::new(8, vec![
            Animal { id: 1, name: "Hard Working Ant".to_string() },
            Animal { id: 2, name: "Nice, Stubord Ass".to_string() },
        ]);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json, serde_json::json!({
            "total": 8,
            "items": [
                {"id": 1, "name": "Hard Working Ant"},
                {"id": 2, "name": "Nice, Stubord Ass"}
            ]
        }));
    }

    #[test]
    fn response_from_json() {
        let response: PagingResponse<String> = serde_json::from_str(r#"{"total":100,"items":["a","b"]}"#).unwrap();
        assert_eq!(response, PagingResponse::new(100, vec!["a".to_string(), "b".to_string()]));

        let response: PagingResponse<String> = serde_json::from_str(r#"{"total":3,"items":null}"#).unwrap();
        assert_eq!(response.items().is_empty(), true);

        let response: PagingResponse<String> = serde_json::from_str(r#"{"total":3}"#).unwrap();
        assert_eq!(response.total(), 3);
        assert_eq!(response.items().is_empty(), true);
    }

    #[test]
    fn summary_uses_response_total() {
        let response = PagingResponse::new(8, vec![7, 8]);
        let summary = response.summary(&PagingRequest::new(2, 3));
        assert_eq!(summary.pages_count, 3);
        assert_eq!(summary.last_item, 8);
    }
}
