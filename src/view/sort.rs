use std::cmp::Ordering;

use crate::model::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Insertion order.
    #[default]
    None,
    Ascending,
    Descending,
}

impl SortDirection {
    /// Next state when the sort button is tapped. Once engaged, sorting
    /// flips between A→Z and Z→A and never returns to insertion order.
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::None | SortDirection::Descending => SortDirection::Ascending,
            SortDirection::Ascending => SortDirection::Descending,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortDirection::None => "unsorted",
            SortDirection::Ascending => "A-Z",
            SortDirection::Descending => "Z-A",
        }
    }
}

/// Compares labels ignoring case. `None` treats everything as equal so a
/// stable sort leaves insertion order alone.
pub fn compare<R: Record>(a: &R, b: &R, direction: SortDirection) -> Ordering {
    let ordering = match direction {
        SortDirection::None => return Ordering::Equal,
        _ => compare_labels(a.primary_label(), b.primary_label()),
    };
    match direction {
        SortDirection::Descending => ordering.reverse(),
        _ => ordering,
    }
}

fn compare_labels(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Stable-sorts borrowed records in place; ties keep their original order.
pub fn sort_records<R: Record>(records: &mut [&R], direction: SortDirection) {
    if direction == SortDirection::None {
        return;
    }
    records.sort_by(|a, b| compare(*a, *b, direction));
}
