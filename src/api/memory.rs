use std::cell::RefCell;

use tracing::debug;

use crate::error::{MktError, MktResult};
use crate::model::{Id, IdGenerator};
use crate::view::{filter, StatusFilter};

use super::params::ListParams;
use super::{RecordApi, Resource};

/// A server that lives in the process. Backs the offline REPL and lets tests
/// drive the controller, including one-shot failures.
#[derive(Debug)]
pub struct MemoryApi<R: Resource> {
    records: RefCell<Vec<R>>,
    ids: RefCell<IdGenerator>,
    pending_failure: RefCell<Option<MktError>>,
    calls: RefCell<Vec<String>>,
}

impl<R: Resource> Default for MemoryApi<R> {
    fn default() -> Self {
        Self {
            records: RefCell::new(Vec::new()),
            ids: RefCell::new(IdGenerator::new()),
            pending_failure: RefCell::new(None),
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl<R: Resource> MemoryApi<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with records created from drafts, listed in the given order.
    pub fn seeded(drafts: Vec<R::Draft>) -> Self {
        let api = Self::new();
        {
            let mut ids = api.ids.borrow_mut();
            let mut records = api.records.borrow_mut();
            for draft in drafts {
                records.push(R::from_draft(ids.next(), draft));
            }
        }
        api
    }

    /// Makes the next call fail with `error`.
    pub fn fail_next(&self, error: MktError) {
        *self.pending_failure.borrow_mut() = Some(error);
    }

    pub fn records(&self) -> Vec<R> {
        self.records.borrow().clone()
    }

    /// Log of calls made, e.g. `"create"`, `"delete 17"`.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn begin(&self, call: String) -> MktResult<()> {
        self.calls.borrow_mut().push(call);
        match self.pending_failure.borrow_mut().take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

impl<R: Resource> RecordApi<R> for MemoryApi<R> {
    fn list(&self, params: &ListParams) -> MktResult<Vec<R>> {
        self.begin("list".into())?;
        let pairs = params.to_query_pairs()?;
        let search = params.search.as_deref().unwrap_or("");
        let matching: Vec<R> = self
            .records
            .borrow()
            .iter()
            .filter(|r| filter::matches(*r, search, StatusFilter::All))
            .cloned()
            .collect();

        let records = match params.limit {
            Some(limit) => {
                let page = params.page.unwrap_or(1);
                matching
                    .into_iter()
                    .skip((page - 1) * limit)
                    .take(limit)
                    .collect()
            }
            None => matching,
        };
        debug!(count = records.len(), params = ?pairs, "memory list");
        Ok(records)
    }

    fn create(&self, draft: &R::Draft) -> MktResult<R> {
        self.begin("create".into())?;
        let record = R::from_draft(self.ids.borrow_mut().next(), draft.clone());
        self.records.borrow_mut().insert(0, record.clone());
        Ok(record)
    }

    fn delete(&self, id: Id<R>) -> MktResult<()> {
        self.begin(format!("delete {}", id))?;
        self.records.borrow_mut().retain(|r| r.id() != id);
        Ok(())
    }
}
