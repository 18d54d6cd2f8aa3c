pub mod auth;
pub mod http;
pub mod memory;
pub mod params;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::MktResult;
use crate::model::{Campaign, Contact, Id, Record};

pub use auth::{EnvToken, StaticToken, TokenProvider};
pub use http::HttpApi;
pub use memory::MemoryApi;
pub use params::ListParams;

/// A record type the REST API serves.
pub trait Resource: Record + Serialize + DeserializeOwned {
    /// Collection path under the API root.
    const PATH: &'static str;
    /// Name used in messages.
    const ENTITY: &'static str;
}

impl Resource for Campaign {
    const PATH: &'static str = "campaigns";
    const ENTITY: &'static str = "Campaign";
}

impl Resource for Contact {
    const PATH: &'static str = "contacts";
    const ENTITY: &'static str = "Contact";
}

/// The remote side of a collection. The view manager never calls this; the
/// controller in `ops` does.
pub trait RecordApi<R: Resource> {
    fn list(&self, params: &ListParams) -> MktResult<Vec<R>>;
    fn create(&self, draft: &R::Draft) -> MktResult<R>;
    fn delete(&self, id: Id<R>) -> MktResult<()>;
}

impl<R: Resource, A: RecordApi<R> + ?Sized> RecordApi<R> for Box<A> {
    fn list(&self, params: &ListParams) -> MktResult<Vec<R>> {
        (**self).list(params)
    }

    fn create(&self, draft: &R::Draft) -> MktResult<R> {
        (**self).create(draft)
    }

    fn delete(&self, id: Id<R>) -> MktResult<()> {
        (**self).delete(id)
    }
}
