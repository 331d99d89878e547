//! P-192 scalars: integers modulo the group order n

use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop};

use recrypto_common::security::SecretBuffer;
use recrypto_internal::constant_time::{ct_is_zero, ct_select_bytes};
use recrypto_params::traditional::ecdsa::NIST_P192;

use crate::ec::p192::constants::{be_bytes_to_limbs, limbs_to_be_bytes, sbb3, P192_SCALAR_SIZE};
use crate::error::{validate, Error, Result};

/// A non-zero scalar in [1, n−1], stored big-endian in a zeroizing buffer.
#[derive(Clone, Zeroize, ZeroizeOnDrop, Debug)]
pub struct Scalar(SecretBuffer<P192_SCALAR_SIZE>);

impl Scalar {
    /// Create a scalar from 24 raw bytes with reduction mod n.
    ///
    /// Any 192-bit value is below 2n, so a single constant-time conditional
    /// subtraction suffices. Errors if the reduced value is zero.
    pub fn new(mut data: [u8; P192_SCALAR_SIZE]) -> Result<Self> {
        let limbs = be_bytes_to_limbs(&data);
        let (diff, borrow) = sbb3(limbs, be_bytes_to_limbs(&NIST_P192.n));
        let mut reduced = limbs_to_be_bytes(&diff);
        // borrow set means data < n: keep data
        let out = ct_select_bytes(&reduced, &data, Choice::from(borrow as u8));
        reduced.zeroize();
        data.zeroize();
        Self::from_reduced(out)
    }

    /// Decode a canonical big-endian scalar.
    ///
    /// Unlike [`Scalar::new`], values ≥ n are rejected instead of reduced.
    pub fn from_canonical_bytes(bytes: &[u8]) -> Result<Self> {
        validate::length("P-192 scalar", bytes.len(), P192_SCALAR_SIZE)?;
        let mut tmp = [0u8; P192_SCALAR_SIZE];
        tmp.copy_from_slice(bytes);

        let (_, borrow) = sbb3(be_bytes_to_limbs(&tmp), be_bytes_to_limbs(&NIST_P192.n));
        if borrow == 0 {
            tmp.zeroize();
            return Err(Error::param("P-192 scalar", "value is not below the group order"));
        }
        Self::from_reduced(tmp)
    }

    fn from_reduced(mut bytes: [u8; P192_SCALAR_SIZE]) -> Result<Self> {
        let buffer = SecretBuffer::new(bytes);
        bytes.zeroize();
        if bool::from(ct_is_zero(buffer.as_ref())) {
            return Err(Error::param("P-192 scalar", "scalar reduces to zero"));
        }
        Ok(Scalar(buffer))
    }

    /// Access the underlying big-endian bytes
    pub fn as_secret_buffer(&self) -> &SecretBuffer<P192_SCALAR_SIZE> {
        &self.0
    }

    /// Always false for a constructed scalar; kept for callers that
    /// re-check before use.
    pub fn is_zero(&self) -> bool {
        ct_is_zero(self.0.as_ref()).into()
    }
}

impl ConstantTimeEq for Scalar {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.as_ref().ct_eq(other.0.as_ref())
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Scalar {}
