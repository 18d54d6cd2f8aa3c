use thiserror::Error;

#[derive(Debug, Error)]
pub enum MktError {
    #[error("{field} cannot be blank")]
    BlankField { field: String },

    #[error("{field} must be positive")]
    NonPositive { field: String },

    #[error("{field} is invalid: {reason}")]
    InvalidField { field: String, reason: String },

    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: String, id: String },

    #[error("No API token found in ${var}")]
    MissingToken { var: String },

    #[error("API rejected the token (HTTP 401)")]
    Unauthorized,

    #[error("API request failed (HTTP {status}): {body}")]
    Http { status: u16, body: String },

    #[error("Could not reach the API: {0}")]
    Transport(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

pub type MktResult<T> = Result<T, MktError>;
