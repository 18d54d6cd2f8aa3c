use std::collections::HashSet;
use std::num::NonZeroUsize;

use tracing::debug;

use crate::error::MktResult;
use crate::model::{Id, IdGenerator, Record};
use crate::validation;

use super::events::{Listeners, SubscriptionId, ViewEvent};
use super::filter::{self, StatusFilter};
use super::pagination;
use super::sort::{self, SortDirection};

/// The slice of a collection a screen renders right now.
#[derive(Debug, Clone, PartialEq)]
pub struct VisiblePage<'a, R> {
    pub items: Vec<&'a R>,
    pub current_page: usize,
    pub total_pages: usize,
    /// Matches across all pages.
    pub total_items: usize,
}

impl<R> VisiblePage<'_, R> {
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }
}

/// Owns a screen's working set and what the user is looking at: search text,
/// status tab, sort order and page. Every operation is synchronous and total;
/// ids that no longer exist are ignored rather than reported.
#[derive(Debug)]
pub struct CollectionView<R: Record> {
    working_set: Vec<R>,
    query: String,
    status_filter: StatusFilter,
    sort_direction: SortDirection,
    current_page: usize,
    page_size: NonZeroUsize,
    ids: IdGenerator,
    listeners: Listeners<R>,
}

impl<R: Record> CollectionView<R> {
    pub fn new(page_size: usize) -> MktResult<Self> {
        let page_size = validation::non_zero(page_size, "page size")?;
        Ok(Self {
            working_set: Vec::new(),
            query: String::new(),
            status_filter: StatusFilter::All,
            sort_direction: SortDirection::None,
            current_page: 1,
            page_size,
            ids: IdGenerator::new(),
            listeners: Listeners::default(),
        })
    }

    /// Builds a view over records that already exist, in the given order.
    pub fn with_records(page_size: usize, records: Vec<R>) -> MktResult<Self> {
        let mut view = Self::new(page_size)?;
        view.load(records);
        Ok(view)
    }

    // ----------------------------------------------------------------------
    // Accessors
    // ----------------------------------------------------------------------

    pub fn records(&self) -> &[R] {
        &self.working_set
    }

    pub fn len(&self) -> usize {
        self.working_set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.working_set.is_empty()
    }

    pub fn get(&self, id: Id<R>) -> Option<&R> {
        self.working_set.iter().find(|r| r.id() == id)
    }

    pub fn position_of(&self, id: Id<R>) -> Option<usize> {
        self.working_set.iter().position(|r| r.id() == id)
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn status_filter(&self) -> StatusFilter {
        self.status_filter
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    /// The stored page. May run past the last page until the next mutation
    /// clamps it; `visible_page` always reports the clamped value.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size.get()
    }

    pub fn total_pages(&self) -> usize {
        self.window(self.current_page as i64).total_pages
    }

    // ----------------------------------------------------------------------
    // Derivation
    // ----------------------------------------------------------------------

    /// Records passing the search and status tab, in display order.
    pub fn filtered(&self) -> Vec<&R> {
        let mut rows: Vec<&R> = self
            .working_set
            .iter()
            .filter(|r| filter::matches(*r, &self.query, self.status_filter))
            .collect();
        sort::sort_records(&mut rows, self.sort_direction);
        rows
    }

    pub fn visible_page(&self) -> VisiblePage<'_, R> {
        let rows = self.filtered();
        let window = pagination::compute(rows.len(), self.page_size, self.current_page as i64);
        VisiblePage {
            items: rows[window.range()].to_vec(),
            current_page: window.clamped_page,
            total_pages: window.total_pages,
            total_items: rows.len(),
        }
    }

    fn window(&self, requested: i64) -> pagination::PageWindow {
        let matching = self
            .working_set
            .iter()
            .filter(|r| filter::matches(*r, &self.query, self.status_filter))
            .count();
        pagination::compute(matching, self.page_size, requested)
    }

    // ----------------------------------------------------------------------
    // View state
    // ----------------------------------------------------------------------

    pub fn set_query(&mut self, text: &str) {
        self.query = text.to_string();
        self.current_page = 1;
        debug!(query = %self.query, "search changed");
        self.listeners.emit(ViewEvent::QueryChanged);
    }

    pub fn set_status_filter(&mut self, status: StatusFilter) {
        self.status_filter = status;
        self.current_page = 1;
        debug!(filter = status.display_name(), "status filter changed");
        self.listeners.emit(ViewEvent::FilterChanged);
    }

    pub fn toggle_sort_direction(&mut self) -> SortDirection {
        self.sort_direction = self.sort_direction.toggled();
        self.current_page = 1;
        debug!(sort = self.sort_direction.display_name(), "sort toggled");
        self.listeners.emit(ViewEvent::SortChanged);
        self.sort_direction
    }

    /// Moves to page `n`, clamped into range. Returns the page landed on.
    pub fn set_page(&mut self, n: i64) -> usize {
        let page = self.window(n).clamped_page;
        if page != self.current_page {
            self.current_page = page;
            self.listeners.emit(ViewEvent::PageChanged { page });
        }
        page
    }

    pub fn next_page(&mut self) -> usize {
        self.set_page(self.current_page as i64 + 1)
    }

    pub fn prev_page(&mut self) -> usize {
        self.set_page(self.current_page as i64 - 1)
    }

    // ----------------------------------------------------------------------
    // Working set
    // ----------------------------------------------------------------------

    /// Replaces the working set with records from the server, keeping their
    /// order. Later duplicates of an id are dropped. Records already on
    /// screen keep their expand state.
    pub fn hydrate(&mut self, mut records: Vec<R>) {
        for record in records.iter_mut() {
            if let Some(existing) = self.get(record.id()) {
                record.set_visible(existing.is_visible());
            }
        }
        self.load(records);
        self.current_page = 1;
        let count = self.working_set.len();
        debug!(count, "working set hydrated");
        self.listeners.emit(ViewEvent::Hydrated { count });
    }

    fn load(&mut self, records: Vec<R>) {
        let mut seen = HashSet::new();
        self.working_set = records
            .into_iter()
            .filter(|r| {
                let fresh = seen.insert(r.id());
                if !fresh {
                    debug!(id = %r.id(), "dropping duplicate record");
                }
                fresh
            })
            .collect();
        for record in &self.working_set {
            self.ids.observe(record.id());
        }
    }

    /// Adds a new visible record at the front under a fresh id.
    pub fn create(&mut self, draft: R::Draft) -> &R {
        let id = self.fresh_id();
        self.working_set.insert(0, R::from_draft(id, draft));
        debug!(%id, "record created");
        self.listeners.emit(ViewEvent::Created { id });
        &self.working_set[0]
    }

    fn fresh_id(&mut self) -> Id<R> {
        loop {
            let id = self.ids.next();
            if self.position_of(id).is_none() {
                return id;
            }
        }
    }

    /// Removes the record and returns it. Unknown ids are a no-op.
    pub fn delete(&mut self, id: Id<R>) -> Option<R> {
        let Some(pos) = self.position_of(id) else {
            debug!(%id, "delete ignored, record not present");
            return None;
        };
        let removed = self.working_set.remove(pos);
        self.current_page = self.window(self.current_page as i64).clamped_page;
        debug!(%id, page = self.current_page, "record deleted");
        self.listeners.emit(ViewEvent::Deleted { id });
        Some(removed)
    }

    /// Duplicates a record at the front of the list. Returns the copy's id.
    pub fn copy(&mut self, id: Id<R>) -> Option<Id<R>> {
        let Some(pos) = self.position_of(id) else {
            debug!(%id, "copy ignored, record not present");
            return None;
        };
        let copy_id = self.fresh_id();
        let duplicate = self.working_set[pos].duplicate(copy_id);
        self.working_set.insert(0, duplicate);
        debug!(source = %id, copy = %copy_id, "record copied");
        self.listeners.emit(ViewEvent::Copied {
            source: id,
            copy: copy_id,
        });
        Some(copy_id)
    }

    /// Expands or collapses a record. Returns the new state.
    pub fn toggle_visibility(&mut self, id: Id<R>) -> Option<bool> {
        let Some(record) = self.working_set.iter_mut().find(|r| r.id() == id) else {
            debug!(%id, "toggle ignored, record not present");
            return None;
        };
        let visible = !record.is_visible();
        record.set_visible(visible);
        debug!(%id, visible, "visibility toggled");
        self.listeners
            .emit(ViewEvent::VisibilityToggled { id, visible });
        Some(visible)
    }

    /// Puts a deleted record back at `index` (or the end, if the list has
    /// shrunk). Refuses if its id is already present.
    pub fn restore(&mut self, index: usize, record: R) -> bool {
        let id = record.id();
        if self.position_of(id).is_some() {
            return false;
        }
        self.ids.observe(id);
        let index = index.min(self.working_set.len());
        self.working_set.insert(index, record);
        debug!(%id, index, "record restored");
        self.listeners.emit(ViewEvent::Restored { id });
        true
    }

    /// Swaps a record for its confirmed form in place, keeping the local
    /// expand state. Refuses if the new id belongs to a different record.
    pub fn replace(&mut self, id: Id<R>, mut record: R) -> bool {
        let Some(pos) = self.position_of(id) else {
            return false;
        };
        let new_id = record.id();
        if new_id != id && self.position_of(new_id).is_some() {
            debug!(old = %id, new = %new_id, "replace refused, id collision");
            return false;
        }
        self.ids.observe(new_id);
        record.set_visible(self.working_set[pos].is_visible());
        self.working_set[pos] = record;
        self.listeners.emit(ViewEvent::Replaced { old: id, new: new_id });
        true
    }

    // ----------------------------------------------------------------------
    // Subscriptions
    // ----------------------------------------------------------------------

    pub fn subscribe(&mut self, listener: impl FnMut(&ViewEvent<R>) + 'static) -> SubscriptionId {
        self.listeners.add(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.remove(id)
    }
}
