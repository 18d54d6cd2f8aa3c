pub mod events;
pub mod filter;
pub mod manager;
pub mod pagination;
pub mod sort;

pub use events::{SubscriptionId, ViewEvent};
pub use filter::StatusFilter;
pub use manager::{CollectionView, VisiblePage};
pub use pagination::PageWindow;
pub use sort::SortDirection;
