use std::fmt::Debug;

use super::ids::Id;

/// Suffix appended to the label of a duplicated record.
pub const COPY_SUFFIX: &str = " (copy)";

/// The capabilities a list screen needs from a record. Campaigns and contacts
/// look different but share this shape, so one view manager serves both.
pub trait Record: Clone + Debug + Sized {
    /// The fields a form supplies before an id exists.
    type Draft: Clone + Debug;

    /// Builds a new, visible record from a draft.
    fn from_draft(id: Id<Self>, draft: Self::Draft) -> Self;

    fn id(&self) -> Id<Self>;

    /// Re-keys the record. Only the owning collection should call this.
    fn set_id(&mut self, id: Id<Self>);

    /// Name shown in the list; search target and sort key.
    fn primary_label(&self) -> &str;

    fn set_primary_label(&mut self, label: String);

    /// Secondary text matched by search, in display order.
    fn searchable_fields(&self) -> Vec<&str>;

    /// Whether the record's details are expanded.
    fn is_visible(&self) -> bool;

    fn set_visible(&mut self, visible: bool);

    /// A copy under a fresh id with a suffixed label. The source is untouched.
    fn duplicate(&self, id: Id<Self>) -> Self {
        let mut copy = self.clone();
        copy.set_id(id);
        copy.set_primary_label(format!("{}{}", self.primary_label(), COPY_SUFFIX));
        copy.set_visible(true);
        copy
    }
}

pub(crate) fn default_visible() -> bool {
    true
}
