use crate::model::Id;

/// What changed in a collection. Delivered to subscribers after the change
/// is applied, so a listener can re-render straight away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent<R> {
    QueryChanged,
    FilterChanged,
    SortChanged,
    PageChanged { page: usize },
    Hydrated { count: usize },
    Created { id: Id<R> },
    Deleted { id: Id<R> },
    Restored { id: Id<R> },
    Replaced { old: Id<R>, new: Id<R> },
    Copied { source: Id<R>, copy: Id<R> },
    VisibilityToggled { id: Id<R>, visible: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener<R> = Box<dyn FnMut(&ViewEvent<R>)>;

/// Plain callback list.
pub struct Listeners<R> {
    next_id: u64,
    entries: Vec<(SubscriptionId, Listener<R>)>,
}

impl<R> Default for Listeners<R> {
    fn default() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }
}

impl<R> Listeners<R> {
    pub fn add(&mut self, listener: impl FnMut(&ViewEvent<R>) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(listener)));
        id
    }

    pub fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(sid, _)| *sid != id);
        self.entries.len() != before
    }

    pub fn emit(&mut self, event: ViewEvent<R>) {
        for (_, listener) in self.entries.iter_mut() {
            listener(&event);
        }
    }
}

impl<R> std::fmt::Debug for Listeners<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.entries.len())
            .finish()
    }
}
