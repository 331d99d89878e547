//! P-192 field arithmetic implementation

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use zeroize::Zeroize;

use recrypto_params::traditional::ecdsa::NIST_P192;

use crate::ec::p192::constants::{
    adc3, be_bytes_to_limbs, limbs_to_be_bytes, sbb3, NLIMBS, P192_FIELD_ELEMENT_SIZE,
};
use crate::error::{Error, Result};

/// p − 2, the inversion exponent
const P_MINUS_2: [u64; NLIMBS] = [
    0xFFFF_FFFF_FFFF_FFFD,
    0xFFFF_FFFF_FFFF_FFFE,
    0xFFFF_FFFF_FFFF_FFFF,
];

/// (p + 1) / 4, the square-root exponent (p ≡ 3 mod 4)
const SQRT_EXP: [u64; NLIMBS] = [
    0xC000_0000_0000_0000,
    0xFFFF_FFFF_FFFF_FFFF,
    0x3FFF_FFFF_FFFF_FFFF,
];

/// P-192 field element representing values in 𝔽ₚ, where
/// p = 2¹⁹² − 2⁶⁴ − 1.
///
/// Stored as three little-endian 64-bit limbs, always fully reduced.
#[derive(Clone, Copy, Debug, Default, Zeroize)]
pub struct FieldElement(pub(crate) [u64; NLIMBS]);

impl FieldElement {
    /// p = 0xFFFFFFFFFFFFFFFF FFFFFFFFFFFFFFFE FFFFFFFFFFFFFFFF
    pub(crate) const MOD_LIMBS: [u64; NLIMBS] = be_bytes_to_limbs(&NIST_P192.p);

    /// a = −3 mod p
    pub(crate) const A_M3: FieldElement = FieldElement([
        0xFFFF_FFFF_FFFF_FFFC,
        0xFFFF_FFFF_FFFF_FFFE,
        0xFFFF_FFFF_FFFF_FFFF,
    ]);

    /// Curve coefficient b
    pub(crate) const B: FieldElement = FieldElement(be_bytes_to_limbs(&NIST_P192.b));

    /// The additive identity
    pub const ZERO: FieldElement = FieldElement([0, 0, 0]);

    /// The multiplicative identity
    pub const ONE: FieldElement = FieldElement([1, 0, 0]);

    /// Build a field element from a small integer
    #[inline]
    pub fn from_u64(n: u64) -> Self {
        FieldElement([n, 0, 0])
    }

    /// Decode big-endian bytes.
    ///
    /// Values ≥ p are rejected rather than reduced, so every element has
    /// exactly one encoding.
    pub fn from_bytes(bytes: &[u8; P192_FIELD_ELEMENT_SIZE]) -> Result<Self> {
        let limbs = be_bytes_to_limbs(bytes);
        let (_, borrow) = sbb3(limbs, Self::MOD_LIMBS);
        if borrow == 0 {
            return Err(Error::param("P-192 field element", "value is not below the modulus"));
        }
        Ok(FieldElement(limbs))
    }

    /// Encode as big-endian bytes
    pub fn to_bytes(&self) -> [u8; P192_FIELD_ELEMENT_SIZE] {
        limbs_to_be_bytes(&self.0)
    }

    /// Constant-time zero test
    #[inline]
    pub fn is_zero(&self) -> Choice {
        self.ct_eq(&Self::ZERO)
    }

    /// Constant-time parity of the canonical value
    #[inline]
    pub fn is_odd(&self) -> Choice {
        Choice::from((self.0[0] & 1) as u8)
    }

    /// (self + other) mod p
    pub fn add(&self, other: &Self) -> Self {
        let (sum, carry) = adc3(self.0, other.0);
        let (reduced, borrow) = sbb3(sum, Self::MOD_LIMBS);
        // Subtract p when the sum overflowed 2¹⁹² or is still ≥ p
        let use_reduced = Choice::from(((carry | (borrow ^ 1)) & 1) as u8);
        Self::select_limbs(&sum, &reduced, use_reduced)
    }

    /// (self − other) mod p
    pub fn sub(&self, other: &Self) -> Self {
        let (diff, borrow) = sbb3(self.0, other.0);
        let (wrapped, _) = adc3(diff, Self::MOD_LIMBS);
        Self::select_limbs(&diff, &wrapped, Choice::from(borrow as u8))
    }

    /// −self mod p
    pub fn negate(&self) -> Self {
        Self::ZERO.sub(self)
    }

    /// 2·self mod p
    #[inline]
    pub fn double(&self) -> Self {
        self.add(self)
    }

    /// (self · other) mod p: schoolbook 3×3 product, then NIST reduction
    pub fn mul(&self, other: &Self) -> Self {
        let a = &self.0;
        let b = &other.0;
        let mut w = [0u64; 2 * NLIMBS];
        for i in 0..NLIMBS {
            let mut carry = 0u64;
            for j in 0..NLIMBS {
                let t = (w[i + j] as u128) + (a[i] as u128) * (b[j] as u128) + (carry as u128);
                w[i + j] = t as u64;
                carry = (t >> 64) as u64;
            }
            w[i + NLIMBS] = carry;
        }
        let r = Self::reduce_wide(&w);
        w.zeroize();
        r
    }

    /// self² mod p
    #[inline]
    pub fn square(&self) -> Self {
        self.mul(self)
    }

    /// Exponentiation by a public exponent (little-endian limbs).
    ///
    /// Runtime depends on the exponent only, never on `self`.
    pub fn pow_vartime(&self, exp: &[u64; NLIMBS]) -> Self {
        let mut acc = Self::ONE;
        for limb in exp.iter().rev() {
            for bit in (0..64).rev() {
                acc = acc.square();
                if (limb >> bit) & 1 == 1 {
                    acc = acc.mul(self);
                }
            }
        }
        acc
    }

    /// Multiplicative inverse via Fermat: a^(p−2) mod p
    pub fn invert(&self) -> Result<Self> {
        if bool::from(self.is_zero()) {
            return Err(Error::Processing {
                operation: "P-192 field inversion",
                details: "inverse of zero",
            });
        }
        Ok(self.invert_or_zero())
    }

    /// a^(p−2) mod p, which is 0 for a = 0
    pub(crate) fn invert_or_zero(&self) -> Self {
        self.pow_vartime(&P_MINUS_2)
    }

    /// Square root for p ≡ 3 (mod 4): sqrt(x) = x^((p+1)/4).
    ///
    /// Returns `None` when `self` is not a quadratic residue.
    pub fn sqrt(&self) -> Option<Self> {
        let root = self.pow_vartime(&SQRT_EXP);
        if bool::from(root.square().ct_eq(self)) {
            Some(root)
        } else {
            None
        }
    }

    #[inline(always)]
    fn select_limbs(a: &[u64; NLIMBS], b: &[u64; NLIMBS], choice: Choice) -> Self {
        let mut out = [0u64; NLIMBS];
        for i in 0..NLIMBS {
            out[i] = u64::conditional_select(&a[i], &b[i], choice);
        }
        FieldElement(out)
    }

    /// Reduce a 6-limb (384-bit) product modulo p = 2¹⁹² − 2⁶⁴ − 1.
    ///
    /// Uses 2¹⁹² ≡ 2⁶⁴ + 1 to fold the high half into the low half
    /// (FIPS 186-4 D.2.1), then a single conditional subtraction of p.
    fn reduce_wide(w: &[u64; 2 * NLIMBS]) -> Self {
        let acc0 = (w[0] as u128) + (w[3] as u128) + (w[5] as u128);
        let acc1 = (w[1] as u128) + (w[3] as u128) + (w[4] as u128) + (w[5] as u128) + (acc0 >> 64);
        let acc2 = (w[2] as u128) + (w[4] as u128) + (w[5] as u128) + (acc1 >> 64);

        let r = [acc0 as u64, acc1 as u64, acc2 as u64];
        let top = (acc2 >> 64) as u64;

        // top·2¹⁹² ≡ top·(2⁶⁴ + 1); the second fold cannot carry again
        let (r, top) = adc3(r, [top, top, 0]);
        let (r, _) = adc3(r, [top, top, 0]);

        let (reduced, borrow) = sbb3(r, Self::MOD_LIMBS);
        Self::select_limbs(&reduced, &r, Choice::from(borrow as u8))
    }

    /// Right-hand side of the curve equation: x³ − 3x + b
    pub(crate) fn curve_rhs(x: &Self) -> Self {
        x.square().mul(x).add(&Self::A_M3.mul(x)).add(&Self::B)
    }
}

impl ConstantTimeEq for FieldElement {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[..].ct_eq(&other.0[..])
    }
}

impl ConditionallySelectable for FieldElement {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self::select_limbs(&a.0, &b.0, choice)
    }
}

impl PartialEq for FieldElement {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for FieldElement {}

