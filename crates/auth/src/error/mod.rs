//! Error handling for the authentication protocol
//!
//! Protocol code reports the public [`recrypto_api::Error`] directly;
//! primitive errors are converted at the decode boundary with a context.

pub use recrypto_api::{Error, Result, ResultExt};

pub mod validate;
