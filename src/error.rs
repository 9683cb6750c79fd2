//! Domain errors

use thiserror::Error;

/// Errors raised when listing inputs break their contract
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("page size must be greater than zero")]
    ZeroPageSize,

    #[error("current page {current_page} is outside 1..={page_count}")]
    InvalidPageContext {
        current_page: usize,
        page_count: usize,
    },

    #[error("unknown type: {0}. Available: post, page, tag, category")]
    UnknownListType(String),

    #[error("{path} is claimed by both {first} and {second}")]
    PathCollision {
        path: String,
        first: String,
        second: String,
    },
}
