pub mod ids;
pub mod record;
pub mod campaign;
pub mod contact;

// Re-exports for convenience
pub use ids::{Id, IdGenerator};
pub use record::{Record, COPY_SUFFIX};
pub use campaign::{Campaign, CampaignDraft, Channel};
pub use contact::{Contact, ContactDraft};
