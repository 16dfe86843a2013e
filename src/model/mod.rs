pub mod order_by;
pub mod page_summary;
pub mod paging_request;
pub mod paging_response;
