//! Elliptic Curve Primitives
//!
//! Constant-time arithmetic on NIST P-192, the curve used by the
//! authentication protocol.

pub mod p192;

pub use p192::{Point as P192Point, Scalar as P192Scalar};
