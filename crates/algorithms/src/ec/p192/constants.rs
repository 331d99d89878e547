//! Shared constants and limb helpers for P-192 operations

/// Size of a P-192 scalar in bytes (24 bytes = 192 bits)
pub const P192_SCALAR_SIZE: usize = 24;

/// Size of a P-192 field element in bytes (24 bytes = 192 bits)
pub const P192_FIELD_ELEMENT_SIZE: usize = 24;

/// Size of a compressed P-192 point in bytes:
/// format byte (0x02/0x03) + x-coordinate
pub const P192_POINT_COMPRESSED_SIZE: usize = 1 + P192_FIELD_ELEMENT_SIZE;

/// SEC1 tag of a compressed point with even y
pub const P192_TAG_EVEN: u8 = 0x02;

/// SEC1 tag of a compressed point with odd y
pub const P192_TAG_ODD: u8 = 0x03;

/// Number of 64-bit limbs in a 192-bit value
pub(crate) const NLIMBS: usize = 3;

/// Big-endian bytes to little-endian 64-bit limbs
pub(crate) const fn be_bytes_to_limbs(bytes: &[u8; 24]) -> [u64; NLIMBS] {
    let mut limbs = [0u64; NLIMBS];
    let mut i = 0;
    while i < NLIMBS {
        let offset = (NLIMBS - 1 - i) * 8;
        let mut word = 0u64;
        let mut j = 0;
        while j < 8 {
            word = (word << 8) | bytes[offset + j] as u64;
            j += 1;
        }
        limbs[i] = word;
        i += 1;
    }
    limbs
}

/// Little-endian 64-bit limbs to big-endian bytes
pub(crate) fn limbs_to_be_bytes(limbs: &[u64; NLIMBS]) -> [u8; 24] {
    let mut out = [0u8; 24];
    for (i, limb) in limbs.iter().enumerate() {
        let offset = (NLIMBS - 1 - i) * 8;
        out[offset..offset + 8].copy_from_slice(&limb.to_be_bytes());
    }
    out
}

/// Add with carry: returns (sum, carry-out)
#[inline(always)]
pub(crate) fn adc(a: u64, b: u64, carry: u64) -> (u64, u64) {
    let t = (a as u128) + (b as u128) + (carry as u128);
    (t as u64, (t >> 64) as u64)
}

/// Subtract with borrow: returns (difference, borrow-out)
#[inline(always)]
pub(crate) fn sbb(a: u64, b: u64, borrow: u64) -> (u64, u64) {
    let t = (a as u128).wrapping_sub((b as u128) + (borrow as u128));
    (t as u64, (t >> 127) as u64)
}

/// 3-limb addition with carry
#[inline(always)]
pub(crate) fn adc3(a: [u64; NLIMBS], b: [u64; NLIMBS]) -> ([u64; NLIMBS], u64) {
    let mut r = [0u64; NLIMBS];
    let mut carry = 0;
    for i in 0..NLIMBS {
        let (s, c) = adc(a[i], b[i], carry);
        r[i] = s;
        carry = c;
    }
    (r, carry)
}

/// 3-limb subtraction with borrow; borrow is 1 iff a < b
#[inline(always)]
pub(crate) fn sbb3(a: [u64; NLIMBS], b: [u64; NLIMBS]) -> ([u64; NLIMBS], u64) {
    let mut r = [0u64; NLIMBS];
    let mut borrow = 0;
    for i in 0..NLIMBS {
        let (d, b_out) = sbb(a[i], b[i], borrow);
        r[i] = d;
        borrow = b_out;
    }
    (r, borrow)
}
