//! NIST P-192 Elliptic Curve Primitives
//!
//! Curve equation: y² = x³ − 3x + b over 𝔽ₚ, where
//! - p = 2¹⁹² − 2⁶⁴ − 1,
//! - n = 0xFFFFFFFFFFFFFFFFFFFFFFFF99DEF836146BC9B1B4D22831 (prime order, cofactor 1).
//!
//! Implements:
//! - fast NIST reduction for 𝔽ₚ (2¹⁹² ≡ 2⁶⁴ + 1),
//! - Jacobian projective coordinates for point operations,
//! - constant-time scalar multiplication,
//! - SEC1 compressed point encoding.

mod constants;
mod field;
mod point;
mod scalar;

pub use constants::{
    P192_FIELD_ELEMENT_SIZE, P192_POINT_COMPRESSED_SIZE, P192_SCALAR_SIZE, P192_TAG_EVEN,
    P192_TAG_ODD,
};
pub use field::FieldElement;
pub use point::Point;
pub use scalar::Scalar;

use recrypto_params::traditional::ecdsa::NIST_P192;
use subtle::Choice;

use constants::be_bytes_to_limbs;

/// The standard base point G of the P-192 curve
pub fn base_point_g() -> Point {
    Point {
        is_identity: Choice::from(0),
        x: FieldElement(be_bytes_to_limbs(&NIST_P192.g_x)),
        y: FieldElement(be_bytes_to_limbs(&NIST_P192.g_y)),
    }
}

/// Scalar multiplication with the base point: scalar · G
pub fn scalar_mult_base_g(scalar: &Scalar) -> Point {
    base_point_g().mul(scalar)
}

/// General scalar multiplication: scalar · point
pub fn scalar_mult(scalar: &Scalar, point: &Point) -> Point {
    point.mul(scalar)
}
