pub mod campaign_ops;
pub mod collection_ops;
pub mod contact_ops;

pub use collection_ops::{Collection, Reconciled};
