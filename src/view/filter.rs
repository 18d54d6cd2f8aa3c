use serde::{Deserialize, Serialize};

use crate::model::Record;

/// The tabs above a list: everything, expanded rows only, or collapsed rows only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Visible,
    Hidden,
}

impl StatusFilter {
    pub const ALL: &'static [StatusFilter] =
        &[StatusFilter::All, StatusFilter::Visible, StatusFilter::Hidden];

    pub fn display_name(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Visible => "visible",
            StatusFilter::Hidden => "hidden",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        StatusFilter::ALL
            .iter()
            .copied()
            .find(|f| f.display_name().eq_ignore_ascii_case(s.trim()))
    }

    pub fn admits(&self, visible: bool) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Visible => visible,
            StatusFilter::Hidden => !visible,
        }
    }
}

/// True when `record` passes both the text search and the status tab.
pub fn matches<R: Record>(record: &R, query: &str, status: StatusFilter) -> bool {
    status.admits(record.is_visible()) && matches_text(record, query)
}

fn matches_text<R: Record>(record: &R, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    std::iter::once(record.primary_label())
        .chain(record.searchable_fields())
        .any(|field| field.to_lowercase().contains(&needle))
}
