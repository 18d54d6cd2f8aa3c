use chrono::NaiveDate;

use crate::error::MktResult;
use crate::validation::{self, trim_optional};

/// Query parameters for a list request. Empty values are left off the URL.
/// Expand/collapse state never leaves the client, so there is no status here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListParams {
    pub search: Option<String>,
    pub page: Option<usize>,
    pub limit: Option<usize>,
    pub since: Option<NaiveDate>,
    pub until: Option<NaiveDate>,
}

impl ListParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, text: &str) -> Self {
        self.search = trim_optional(Some(text));
        self
    }

    pub fn page(mut self, page: usize, limit: usize) -> Self {
        self.page = Some(page);
        self.limit = Some(limit);
        self
    }

    pub fn between(mut self, since: Option<NaiveDate>, until: Option<NaiveDate>) -> Self {
        self.since = since;
        self.until = until;
        self
    }

    /// Pairs in a fixed order so URLs are stable across calls.
    pub fn to_query_pairs(&self) -> MktResult<Vec<(&'static str, String)>> {
        let page = validation::optional_positive(self.page, "page")?;
        let limit = validation::optional_positive(self.limit, "limit")?;

        let mut pairs = Vec::new();
        if let Some(search) = trim_optional(self.search.as_deref()) {
            pairs.push(("search", search));
        }
        if let Some(page) = page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(limit) = limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(since) = self.since {
            pairs.push(("since", since.format("%Y-%m-%d").to_string()));
        }
        if let Some(until) = self.until {
            pairs.push(("until", until.format("%Y-%m-%d").to_string()));
        }
        Ok(pairs)
    }
}
