//! Constant values for recrypto cryptographic operations
//!
//! Curve parameters, hash sizes and the fixed lengths and domain-separation
//! tags of the authentication protocol live here so every crate in the
//! workspace agrees on them.

#![no_std]

pub mod auth;
pub mod traditional;
pub mod utils;
