//! Site content: the profile and license documents, the source they come
//! from, and the loaders that turn raw responses into view state.

mod load;
mod model;
mod source;

pub use load::*;
pub use model::*;
pub use source::{ContentSource, DataDir};
