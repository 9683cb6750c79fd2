//! Helper functions shared by the query layer and templates

mod date;
mod url;

pub use date::*;
pub use url::*;
