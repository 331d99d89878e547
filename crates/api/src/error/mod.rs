//! Error handling for the recrypto public API

pub mod traits;
pub mod types;

pub use traits::ResultExt;
pub use types::{Error, Result};
