//! Client-side filtering, pagination and request ordering for the listing.

mod engine;
mod filter;
mod pagination;
mod sequence;

pub use engine::ListingEngine;
pub use filter::{EmptyState, FilterMode, Recovery};
pub use pagination::{PageItem, Pagination, WINDOW_RADIUS};
pub use sequence::{RequestSequence, Ticket};
