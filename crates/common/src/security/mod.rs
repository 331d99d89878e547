//! Security primitives and memory safety utilities
//!
//! Foundational types that make sure key material and intermediate secrets
//! are wiped when they go out of scope.

pub mod secret;

pub use secret::{EphemeralSecret, SecretBuffer};
