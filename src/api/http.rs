use std::time::Duration;

use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{MktError, MktResult};
use crate::model::Id;

use super::auth::{bearer_header, TokenProvider};
use super::params::ListParams;
use super::{RecordApi, Resource};

const MAX_ERROR_BODY: usize = 200;

/// Blocking REST client. Every request carries a fresh bearer token from the
/// injected provider.
pub struct HttpApi {
    base_url: String,
    token: Box<dyn TokenProvider>,
    agent: ureq::Agent,
}

impl HttpApi {
    pub fn new(base_url: &str, token: Box<dyn TokenProvider>, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
            agent,
        }
    }

    /// `{base}/{path}` or `{base}/{path}/{id}`.
    pub fn url(&self, path: &str, id: Option<i64>) -> String {
        match id {
            Some(id) => format!("{}/{}/{}", self.base_url, path, id),
            None => format!("{}/{}", self.base_url, path),
        }
    }

    fn authorized(&self, request: ureq::Request) -> MktResult<ureq::Request> {
        let header = bearer_header(self.token.as_ref())?;
        Ok(request
            .set("Authorization", &header)
            .set("Accept", "application/json"))
    }
}

impl<R> RecordApi<R> for HttpApi
where
    R: Resource,
    R::Draft: Serialize,
{
    #[tracing::instrument(skip(self), fields(resource = R::PATH))]
    fn list(&self, params: &ListParams) -> MktResult<Vec<R>> {
        let mut request = self.authorized(self.agent.get(&self.url(R::PATH, None)))?;
        for (key, value) in params.to_query_pairs()? {
            request = request.query(key, &value);
        }
        let response = request.call().map_err(map_error)?;
        let records: Vec<R> = response.into_json()?;
        debug!(count = records.len(), "listed records");
        Ok(records)
    }

    #[tracing::instrument(skip(self, draft), fields(resource = R::PATH))]
    fn create(&self, draft: &R::Draft) -> MktResult<R> {
        let request = self
            .authorized(self.agent.post(&self.url(R::PATH, None)))?
            .set("Idempotency-Key", &Uuid::new_v4().to_string());
        let response = request.send_json(draft).map_err(map_error)?;
        let record: R = response.into_json()?;
        info!(id = %record.id(), "created on server");
        Ok(record)
    }

    #[tracing::instrument(skip(self), fields(resource = R::PATH))]
    fn delete(&self, id: Id<R>) -> MktResult<()> {
        let request = self.authorized(self.agent.delete(&self.url(R::PATH, Some(id.value))))?;
        match request.call() {
            Ok(_) => Ok(()),
            // Already gone is what we wanted.
            Err(ureq::Error::Status(404, _)) => {
                debug!(%id, "server had no such record");
                Ok(())
            }
            Err(e) => Err(map_error(e)),
        }
    }
}

/// Converts a ureq failure into the crate's error, keeping a short excerpt of
/// any error body for the user.
pub fn map_error(e: ureq::Error) -> MktError {
    match e {
        ureq::Error::Status(401, _) => MktError::Unauthorized,
        ureq::Error::Status(status, resp) => {
            let body = resp.into_string().unwrap_or_default();
            MktError::Http {
                status,
                body: body.chars().take(MAX_ERROR_BODY).collect(),
            }
        }
        ureq::Error::Transport(t) => MktError::Transport(t.to_string()),
    }
}
