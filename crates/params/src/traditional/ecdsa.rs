//! Short Weierstrass curve parameters

/// Parameters of a prime-field curve y² = x³ + ax + b with a = −3
///
/// All values are big-endian.
pub struct CurveParams<const N: usize> {
    /// Field prime p
    pub p: [u8; N],
    /// Coefficient b
    pub b: [u8; N],
    /// x-coordinate of the base point G
    pub g_x: [u8; N],
    /// y-coordinate of the base point G
    pub g_y: [u8; N],
    /// Order n of the base point
    pub n: [u8; N],
    /// Cofactor h
    pub h: u32,
}

/// NIST P-192 (secp192r1), FIPS 186-4 D.1.2.1
pub const NIST_P192: CurveParams<24> = CurveParams {
    p: [
        0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFE, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    ],
    b: [
        0x64, 0x21, 0x05, 0x19, 0xE5, 0x9C, 0x80, 0xE7, 0x0F, 0xA7, 0xE9, 0xAB, 0x72, 0x24, 0x30,
        0x49, 0xFE, 0xB8, 0xDE, 0xEC, 0xC1, 0x46, 0xB9, 0xB1,
    ],
    g_x: [
        0x18, 0x8D, 0xA8, 0x0E, 0xB0, 0x30, 0x90, 0xF6, 0x7C, 0xBF, 0x20, 0xEB, 0x43, 0xA1, 0x88,
        0x00, 0xF4, 0xFF, 0x0A, 0xFD, 0x82, 0xFF, 0x10, 0x12,
    ],
    g_y: [
        0x07, 0x19, 0x2B, 0x95, 0xFF, 0xC8, 0xDA, 0x78, 0x63, 0x10, 0x11, 0xED, 0x6B, 0x24, 0xCD,
        0xD5, 0x73, 0xF9, 0x77, 0xA1, 0x1E, 0x79, 0x48, 0x11,
    ],
    n: [
        0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x99, 0xDE, 0xF8,
        0x36, 0x14, 0x6B, 0xC9, 0xB1, 0xB4, 0xD2, 0x28, 0x31,
    ],
    h: 1,
};
