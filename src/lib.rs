pub mod config;
pub mod error;
pub mod inference;

pub use error::{Error, Result};
