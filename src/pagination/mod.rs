//! Page-context producer for the posts listing

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::helpers::join_path;

/// Per-page parameters handed to the posts listing template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageContext {
    /// Route prefix for pagination links
    pub base: String,
    /// 1-based number of the page being rendered
    pub current_page: usize,
    pub page_count: usize,
    /// Query offset for this page
    pub skip: usize,
    /// Query page size
    pub limit: usize,
}

impl PageContext {
    /// Build a context, checking `1 <= current_page <= page_count` and `limit > 0`
    pub fn new(
        base: impl Into<String>,
        current_page: usize,
        page_count: usize,
        limit: usize,
    ) -> Result<Self, Error> {
        if limit == 0 {
            return Err(Error::ZeroPageSize);
        }
        if current_page == 0 || current_page > page_count {
            return Err(Error::InvalidPageContext {
                current_page,
                page_count,
            });
        }

        Ok(Self {
            base: base.into(),
            current_page,
            page_count,
            skip: (current_page - 1) * limit,
            limit,
        })
    }

    /// URL path of this page
    pub fn path(&self) -> String {
        self.page_path(self.current_page)
    }

    /// URL path of page `n`: the base itself for the first page, `base/n/` after
    pub fn page_path(&self, n: usize) -> String {
        page_path(&self.base, n)
    }
}

/// URL path of page `n` under `base`
pub fn page_path(base: &str, n: usize) -> String {
    if n <= 1 {
        join_path(base, "")
    } else {
        join_path(base, &format!("{}/", n))
    }
}

/// Split `total_posts` into listing pages of `per_page` posts.
///
/// An empty blog still gets a single (empty) page.
pub fn paginate(
    total_posts: usize,
    per_page: usize,
    base: &str,
) -> Result<Vec<PageContext>, Error> {
    if per_page == 0 {
        return Err(Error::ZeroPageSize);
    }

    let page_count = total_posts.div_ceil(per_page).max(1);
    (1..=page_count)
        .map(|current_page| PageContext::new(base, current_page, page_count, per_page))
        .collect()
}
