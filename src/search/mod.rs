// Search module: pure filters shared by every page controller.

pub mod filter;
pub mod chips;
pub mod pagination;

// Re-export the pieces the controllers reach for.
pub use chips::ChipSelection;
pub use filter::{filter, PostField, ProductField};
pub use pagination::paginate;
