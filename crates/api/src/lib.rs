//! Public API types for the recrypto library
//!
//! Every fallible operation in the authentication layer reports one of the
//! errors defined here, so callers match on a single taxonomy regardless of
//! which primitive rejected the input.

pub mod error;

pub use error::{Error, Result, ResultExt};
