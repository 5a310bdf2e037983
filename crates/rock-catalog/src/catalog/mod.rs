//! Laptop catalog module.
//!
//! Contains the API record, the display view model and category types.

mod category;
mod laptop;

pub use category::{CategoryKey, CategoryOption};
pub use laptop::{DisplayLaptop, ExternalLaptopRecord};
