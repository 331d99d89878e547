//! P-192 elliptic curve point operations

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use crate::ec::p192::{
    constants::{
        P192_FIELD_ELEMENT_SIZE, P192_POINT_COMPRESSED_SIZE, P192_TAG_EVEN, P192_TAG_ODD,
    },
    field::FieldElement,
    scalar::Scalar,
};
use crate::error::{validate, Error, Result};

/// P-192 curve point in affine coordinates (x, y).
///
/// The point at infinity is carried as a flag; its coordinates are zero.
#[derive(Clone, Copy, Debug)]
pub struct Point {
    pub(crate) is_identity: Choice,
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
}

/// Jacobian coordinates (X:Y:Z) with x = X/Z², y = Y/Z³.
/// Z = 0 is the point at infinity.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ProjectivePoint {
    x: FieldElement,
    y: FieldElement,
    z: FieldElement,
}

impl Point {
    /// Build a point from big-endian affine coordinates, checking the curve
    /// equation.
    pub fn new_uncompressed(
        x: &[u8; P192_FIELD_ELEMENT_SIZE],
        y: &[u8; P192_FIELD_ELEMENT_SIZE],
    ) -> Result<Self> {
        let x = FieldElement::from_bytes(x)?;
        let y = FieldElement::from_bytes(y)?;
        if !bool::from(Self::is_on_curve(&x, &y)) {
            return Err(Error::NotOnCurve {
                context: "P-192 point",
            });
        }
        Ok(Point {
            is_identity: Choice::from(0),
            x,
            y,
        })
    }

    /// The point at infinity
    pub fn identity() -> Self {
        Point {
            is_identity: Choice::from(1),
            x: FieldElement::ZERO,
            y: FieldElement::ZERO,
        }
    }

    /// Is this the point at infinity?
    pub fn is_identity(&self) -> bool {
        self.is_identity.into()
    }

    /// Big-endian x-coordinate
    pub fn x_coordinate_bytes(&self) -> [u8; P192_FIELD_ELEMENT_SIZE] {
        self.x.to_bytes()
    }

    /// Big-endian y-coordinate
    pub fn y_coordinate_bytes(&self) -> [u8; P192_FIELD_ELEMENT_SIZE] {
        self.y.to_bytes()
    }

    /// Parity of the y-coordinate
    pub fn y_is_odd(&self) -> bool {
        self.y.is_odd().into()
    }

    /// y² = x³ − 3x + b
    fn is_on_curve(x: &FieldElement, y: &FieldElement) -> Choice {
        y.square().ct_eq(&FieldElement::curve_rhs(x))
    }

    /// SEC1 compressed encoding: 0x02/0x03 by y parity, then x.
    ///
    /// The point at infinity has no compressed form here.
    pub fn serialize_compressed(&self) -> Result<[u8; P192_POINT_COMPRESSED_SIZE]> {
        if self.is_identity() {
            return Err(Error::Processing {
                operation: "P-192 point compression",
                details: "point at infinity has no compressed encoding",
            });
        }
        let mut out = [0u8; P192_POINT_COMPRESSED_SIZE];
        out[0] = if self.y_is_odd() {
            P192_TAG_ODD
        } else {
            P192_TAG_EVEN
        };
        out[1..].copy_from_slice(&self.x.to_bytes());
        Ok(out)
    }

    /// Decode a SEC1 compressed point, recovering y from the curve equation.
    pub fn deserialize_compressed(bytes: &[u8]) -> Result<Self> {
        validate::length(
            "P-192 compressed point",
            bytes.len(),
            P192_POINT_COMPRESSED_SIZE,
        )?;
        let tag = bytes[0];
        validate::parameter(
            tag == P192_TAG_EVEN || tag == P192_TAG_ODD,
            "P-192 compressed point",
            "tag must be 0x02 or 0x03",
        )?;

        let mut x_bytes = [0u8; P192_FIELD_ELEMENT_SIZE];
        x_bytes.copy_from_slice(&bytes[1..]);
        let x = FieldElement::from_bytes(&x_bytes)?;

        let y = FieldElement::curve_rhs(&x)
            .sqrt()
            .ok_or(Error::NotOnCurve {
                context: "P-192 compressed point",
            })?;

        let want_odd = Choice::from(tag & 1);
        let flip = y.is_odd() ^ want_odd;
        let y = FieldElement::conditional_select(&y, &y.negate(), flip);

        Ok(Point {
            is_identity: Choice::from(0),
            x,
            y,
        })
    }

    /// Point addition
    pub fn add(&self, other: &Self) -> Self {
        ProjectivePoint::from(self)
            .add(&ProjectivePoint::from(other))
            .to_affine()
    }

    /// Point doubling
    pub fn double(&self) -> Self {
        ProjectivePoint::from(self).double().to_affine()
    }

    /// Additive inverse (x, −y)
    pub fn negate(&self) -> Self {
        Point {
            is_identity: self.is_identity,
            x: self.x,
            y: self.y.negate(),
        }
    }

    /// Scalar multiplication `scalar · self`.
    ///
    /// Double-and-always-add over all 192 bits: every iteration performs one
    /// doubling and one addition and picks the result with a conditional
    /// select, so the sequence of field operations never depends on the
    /// scalar.
    pub fn mul(&self, scalar: &Scalar) -> Self {
        let base = ProjectivePoint::from(self);
        let mut acc = ProjectivePoint::identity();

        for byte in scalar.as_secret_buffer().as_array().iter() {
            for i in (0..8).rev() {
                acc = acc.double();
                let sum = acc.add(&base);
                let bit = Choice::from((byte >> i) & 1);
                acc = ProjectivePoint::conditional_select(&acc, &sum, bit);
            }
        }

        acc.to_affine()
    }
}

impl ConstantTimeEq for Point {
    fn ct_eq(&self, other: &Self) -> Choice {
        let both_identity = self.is_identity & other.is_identity;
        let neither_identity = !self.is_identity & !other.is_identity;
        both_identity | (neither_identity & self.x.ct_eq(&other.x) & self.y.ct_eq(&other.y))
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Point {}

impl From<&Point> for ProjectivePoint {
    fn from(p: &Point) -> Self {
        let id = p.is_identity;
        ProjectivePoint {
            x: FieldElement::conditional_select(&p.x, &FieldElement::ONE, id),
            y: FieldElement::conditional_select(&p.y, &FieldElement::ONE, id),
            z: FieldElement::conditional_select(&FieldElement::ONE, &FieldElement::ZERO, id),
        }
    }
}

impl ProjectivePoint {
    fn identity() -> Self {
        ProjectivePoint {
            x: FieldElement::ONE,
            y: FieldElement::ONE,
            z: FieldElement::ZERO,
        }
    }

    fn is_identity(&self) -> Choice {
        self.z.is_zero()
    }

    /// Doubling for a = −3 (dbl-2001-b). Maps Z = 0 to Z = 0.
    fn double(&self) -> Self {
        let delta = self.z.square();
        let gamma = self.y.square();
        let beta = self.x.mul(&gamma);

        let t = self.x.sub(&delta).mul(&self.x.add(&delta));
        let alpha = t.double().add(&t);

        let beta4 = beta.double().double();
        let x3 = alpha.square().sub(&beta4.double());

        let z3 = self.y.add(&self.z).square().sub(&gamma).sub(&delta);

        let gamma_sq8 = gamma.square().double().double().double();
        let y3 = alpha.mul(&beta4.sub(&x3)).sub(&gamma_sq8);

        ProjectivePoint {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// Full Jacobian addition (add-1998-cmo-2).
    ///
    /// The special cases (equal inputs, either input at infinity) are
    /// resolved with conditional selects after the generic formula.
    fn add(&self, other: &Self) -> Self {
        let z1z1 = self.z.square();
        let z2z2 = other.z.square();
        let u1 = self.x.mul(&z2z2);
        let u2 = other.x.mul(&z1z1);
        let s1 = self.y.mul(&other.z).mul(&z2z2);
        let s2 = other.y.mul(&self.z).mul(&z1z1);

        let h = u2.sub(&u1);
        let r = s2.sub(&s1);

        let hh = h.square();
        let hhh = h.mul(&hh);
        let v = u1.mul(&hh);

        let x3 = r.square().sub(&hhh).sub(&v.double());
        let y3 = r.mul(&v.sub(&x3)).sub(&s1.mul(&hhh));
        // h = 0, r ≠ 0 means P = −Q and yields Z3 = 0
        let z3 = self.z.mul(&other.z).mul(&h);

        let generic = ProjectivePoint {
            x: x3,
            y: y3,
            z: z3,
        };

        let same = h.is_zero() & r.is_zero();
        let mut out = Self::conditional_select(&generic, &self.double(), same);
        out = Self::conditional_select(&out, other, self.is_identity());
        out = Self::conditional_select(&out, self, other.is_identity());
        out
    }

    /// Convert to affine; the point at infinity maps to the identity flag.
    fn to_affine(&self) -> Point {
        let z_inv = self.z.invert_or_zero();
        let z_inv2 = z_inv.square();
        let z_inv3 = z_inv2.mul(&z_inv);
        Point {
            is_identity: self.is_identity(),
            x: self.x.mul(&z_inv2),
            y: self.y.mul(&z_inv3),
        }
    }
}

impl ConditionallySelectable for ProjectivePoint {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        ProjectivePoint {
            x: FieldElement::conditional_select(&a.x, &b.x, choice),
            y: FieldElement::conditional_select(&a.y, &b.y, choice),
            z: FieldElement::conditional_select(&a.z, &b.z, choice),
        }
    }
}
