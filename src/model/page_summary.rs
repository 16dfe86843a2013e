use std::cmp;
use std::convert::TryFrom;
use std::ops::Range;

use serde::Deserialize;
use serde::Serialize;

use crate::model::paging_request::PagingRequest;

pub const DEFAULT_PAGE_SIZE: i32 = 8;
pub const DEFAULT_INDEX_SLOTS: usize = 5;

/// What a paging control displays for one page: how many pages exist and
/// which items the current one covers. Item ordinals are 1-based.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageSummary {
    pub page_index: i32,
    pub page_size: i32,
    pub total: i32,
    pub pages_count: i64,
    pub first_item: i64,
    pub last_item: i64,
}

impl PageSummary {
    pub fn new(request: &PagingRequest, total: i32) -> Self {
        let page_size = i64::from(request.page_size());
        let total_items = i64::from(total);
        let pages_count = if page_size > 0 && total_items > 0 {
            (total_items + page_size - 1) / page_size
        } else {
            0
        };
        let first_item = request.offset() + 1;
        let last_item = cmp::min((i64::from(request.page_index()) + 1) * page_size, total_items);

        Self {
            page_index: request.page_index(),
            page_size: request.page_size(),
            total,
            pages_count,
            first_item,
            last_item,
        }
    }

    /// True when the page holds no item, e.g. an index past the last page.
    pub fn is_empty(&self) -> bool {
        self.first_item > self.last_item
    }

    pub fn has_previous(&self) -> bool {
        self.page_index > 0
    }

    pub fn has_next(&self) -> bool {
        i64::from(self.page_index) < self.pages_count - 1
    }

    /// Zero-based indices of the pages a control with `slots` index buttons
    /// shows, centered on the current page when there are more pages than
    /// buttons.
    pub fn index_window(&self, slots: usize) -> Range<i64> {
        let slots = i64::try_from(slots).unwrap_or(i64::MAX);
        if self.pages_count <= slots {
            return 0..self.pages_count;
        }
        let mut start = i64::from(self.page_index) - slots / 2;
        if start < 0 {
            start = 0;
        }
        if start + slots >= self.pages_count {
            start = self.pages_count - slots;
        }
        start..start + slots
    }

    pub fn index_buttons(&self) -> Range<i64> {
        self.index_window(DEFAULT_INDEX_SLOTS)
    }
}
