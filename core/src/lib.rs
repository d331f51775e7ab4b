//! Game-state store for a picture trivia game: curated images are checked,
//! distributed over rounds and played through a simple round lifecycle, while
//! named setups can be saved to and restored from a key-value [`Storage`].

pub use config::*;
pub use error::*;
pub use image::*;
pub use lifecycle::*;
pub use persistence::*;
pub use rounds::*;
pub use store::*;
pub use types::*;
pub use validation::{ValidationIssue, has_duplicate_names};

pub mod validation;

mod config;
mod error;
mod image;
mod lifecycle;
mod persistence;
mod rounds;
mod store;
mod types;
