//! Section renderers for the listing page.

mod empty;
mod escape;
mod filters;
mod pagination;
mod results;
mod search_box;
mod states;

pub use empty::*;
pub use escape::*;
pub use filters::*;
pub use pagination::*;
pub use results::*;
pub use search_box::*;
pub use states::*;
