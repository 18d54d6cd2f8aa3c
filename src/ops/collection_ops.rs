use tracing::{info, warn};

use crate::api::{ListParams, RecordApi, Resource};
use crate::error::MktResult;
use crate::model::Id;
use crate::view::CollectionView;

/// Outcome of a mutation that went to the server.
#[derive(Debug, Clone, PartialEq)]
pub enum Reconciled<R> {
    /// The server accepted it; the local record now carries this id.
    Confirmed(Id<R>),
    /// The server accepted it but its id clashed locally, so the optimistic
    /// record was kept under this local id.
    KeptLocal(Id<R>),
    /// Nothing to do: the id was not in the working set.
    Skipped,
}

/// One screen's collection: the view state plus the API that backs it.
/// Mutations land locally first; a failed server call undoes the local change
/// and hands back the error.
pub struct Collection<R: Resource, A: RecordApi<R>> {
    view: CollectionView<R>,
    api: A,
}

impl<R: Resource, A: RecordApi<R>> Collection<R, A> {
    pub fn new(view: CollectionView<R>, api: A) -> Self {
        Self { view, api }
    }

    pub fn view(&self) -> &CollectionView<R> {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut CollectionView<R> {
        &mut self.view
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Reloads the working set. On failure the current records stay put.
    #[tracing::instrument(skip(self), fields(resource = R::PATH))]
    pub fn refresh(&mut self, params: &ListParams) -> MktResult<usize> {
        let records = self.api.list(params)?;
        let count = records.len();
        self.view.hydrate(records);
        info!(count, "refreshed");
        Ok(count)
    }

    /// Reloads the full, unfiltered list. Search text, status tab and
    /// expand state are local and survive the reload.
    pub fn reload(&mut self) -> MktResult<usize> {
        self.refresh(&ListParams::new())
    }

    #[tracing::instrument(skip(self, draft), fields(resource = R::PATH))]
    pub fn create(&mut self, draft: R::Draft) -> MktResult<Reconciled<R>> {
        let local_id = self.view.create(draft.clone()).id();

        match self.api.create(&draft) {
            Ok(confirmed) => {
                let server_id = confirmed.id();
                if self.view.replace(local_id, confirmed) {
                    Ok(Reconciled::Confirmed(server_id))
                } else {
                    warn!(%local_id, %server_id, "server id already in use locally");
                    Ok(Reconciled::KeptLocal(local_id))
                }
            }
            Err(e) => {
                warn!(%local_id, error = %e, "create failed, rolling back");
                self.view.delete(local_id);
                Err(e)
            }
        }
    }

    #[tracing::instrument(skip(self), fields(resource = R::PATH))]
    pub fn delete(&mut self, id: Id<R>) -> MktResult<Reconciled<R>> {
        let Some(index) = self.view.position_of(id) else {
            return Ok(Reconciled::Skipped);
        };
        let Some(removed) = self.view.delete(id) else {
            return Ok(Reconciled::Skipped);
        };

        match self.api.delete(id) {
            Ok(()) => Ok(Reconciled::Confirmed(id)),
            Err(e) => {
                warn!(%id, error = %e, "delete failed, restoring");
                self.view.restore(index, removed);
                Err(e)
            }
        }
    }

    /// Local only; the copy is not sent to the server.
    pub fn copy(&mut self, id: Id<R>) -> Option<Id<R>> {
        self.view.copy(id)
    }

    /// Local only; expand state never leaves the device.
    pub fn toggle_visibility(&mut self, id: Id<R>) -> Option<bool> {
        self.view.toggle_visibility(id)
    }
}
