#[macro_use]
extern crate log;

pub mod model;
pub mod responder;

pub use crate::model::order_by::{Direction, OrderBy, PagingFormatError};
pub use crate::model::page_summary::{PageSummary, DEFAULT_INDEX_SLOTS, DEFAULT_PAGE_SIZE};
pub use crate::model::paging_request::PagingRequest;
pub use crate::model::paging_response::PagingResponse;

/// Runs `f` on the success value and passes the result through untouched.
pub trait LogExtensionOk<T> {
    fn log_if_ok<F: FnOnce(&T)>(self, f: F) -> Self;
}

/// Runs `f` on the error value and passes the result through untouched.
pub trait LogExtensionErr<E> {
    fn log_if_err<F: FnOnce(&E)>(self, f: F) -> Self;
}

impl<T, E> LogExtensionOk<T> for Result<T, E> {
    fn log_if_ok<F: FnOnce(&T)>(self, f: F) -> Self {
        if let Ok(value) = &self {
            f(value);
        }
        self
    }
}

impl<T, E> LogExtensionErr<E> for Result<T, E> {
    fn log_if_err<F: FnOnce(&E)>(self, f: F) -> Self {
        if let Err(err) = &self {
            f(err);
        }
        self
    }
}

#[cfg(test)]
pub fn init_logger() {
    use log::LevelFilter;
    use simplelog::{Config, TermLogger, TerminalMode};

    let _ = TermLogger::init(LevelFilter::Debug,
                             Config::default(),
                             TerminalMode::Mixed).unwrap_or_else(|_| ());
}
