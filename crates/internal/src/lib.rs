//! Internal utilities for the recrypto library
//!
//! Not part of the stable API. Other recrypto crates use these helpers to
//! keep comparisons and selections on secret data free of data-dependent
//! branches.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod constant_time;

pub use constant_time::{ct_eq, ct_eq_choice, ct_is_zero, ct_select_bytes};
