//! Common implementations and shared functionality for the recrypto library
//!
//! This crate provides the secret-holding containers used across the
//! recrypto crates.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod security;

pub use security::{EphemeralSecret, SecretBuffer};
