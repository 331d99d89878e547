//! Cryptographic primitives with constant-time implementation
//!
//! This crate provides the arithmetic the recrypto authentication protocol
//! rests on: the NIST P-192 prime field, scalars modulo the group order,
//! curve points with constant-time scalar multiplication, and SHA-256.
//!
//! # Security Features
//!
//! - Secret scalars and hash state are zeroized when dropped
//! - Field arithmetic and scalar multiplication use conditional selection
//!   instead of branches on secret data
//! - Malformed field elements and off-curve points are rejected, never clamped

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Hash function implementations
pub mod hash;
pub use hash::{HashFunction, Sha256};

// Elliptic curve primitives
pub mod ec;
