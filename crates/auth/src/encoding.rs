//! Textual encodings of keys, challenges and answers
//!
//! | value | form |
//! |---|---|
//! | private key | 48 lowercase hex characters (big-endian scalar) |
//! | public key, challenge | `+` or `-` (y parity) then 48 lowercase hex characters of x |
//! | answer | 64 lowercase hex characters (SHA-256 digest) |

use recrypto_algorithms::ec::p192::{
    Point, Scalar, P192_FIELD_ELEMENT_SIZE, P192_POINT_COMPRESSED_SIZE, P192_SCALAR_SIZE,
    P192_TAG_EVEN, P192_TAG_ODD,
};
use recrypto_common::security::EphemeralSecret;
use recrypto_params::auth::{
    ANSWER_TEXT_LEN, POINT_SIGN_EVEN, POINT_SIGN_ODD, POINT_TEXT_LEN, PRIVATE_KEY_TEXT_LEN,
};
use recrypto_params::utils::hash::SHA256_OUTPUT_SIZE;

use crate::error::{validate, Error, Result, ResultExt};

/// True when every byte is in `[0-9a-f]`
pub(crate) fn is_lower_hex(text: &str) -> bool {
    text.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

/// Hex-encode a private scalar
pub(crate) fn encode_private_key(scalar: &Scalar) -> String {
    hex::encode(scalar.as_secret_buffer())
}

/// Decode a private key string into a scalar in [1, n−1]
pub(crate) fn decode_private_key(text: &str) -> Result<Scalar> {
    const CONTEXT: &str = "private key";
    validate::text_length(CONTEXT, text, PRIVATE_KEY_TEXT_LEN)?;
    validate::encoding(is_lower_hex(text), CONTEXT, "expected lowercase hex digits")?;

    let mut bytes = EphemeralSecret::new([0u8; P192_SCALAR_SIZE]);
    hex::decode_to_slice(text, &mut bytes[..])
        .map_err(|e| Error::encoding(CONTEXT, e.to_string()))?;
    Scalar::from_canonical_bytes(&bytes[..]).with_context(CONTEXT)
}

/// Encode a point as its parity sign followed by hex x.
///
/// Every point reaching this function is k·Q with k in [1, n−1] and Q a
/// non-identity point of the prime-order group, so it is never the identity.
pub(crate) fn encode_point(point: &Point) -> String {
    debug_assert!(!point.is_identity());
    let mut out = String::with_capacity(POINT_TEXT_LEN);
    out.push(if point.y_is_odd() {
        POINT_SIGN_ODD
    } else {
        POINT_SIGN_EVEN
    });
    out.push_str(&hex::encode(point.x_coordinate_bytes()));
    out
}

/// Decode a signed-x point string, recovering y from the curve equation
pub(crate) fn decode_point(text: &str, context: &'static str) -> Result<Point> {
    validate::text_length(context, text, POINT_TEXT_LEN)?;

    let tag = match text.as_bytes()[0] {
        b if b == POINT_SIGN_EVEN as u8 => P192_TAG_EVEN,
        b if b == POINT_SIGN_ODD as u8 => P192_TAG_ODD,
        _ => return Err(Error::encoding(context, "expected '+' or '-' prefix")),
    };
    // The sign is ASCII, so byte 1 is a char boundary
    let x_hex = &text[1..];
    validate::encoding(is_lower_hex(x_hex), context, "expected lowercase hex digits")?;

    let mut sec1 = [0u8; P192_POINT_COMPRESSED_SIZE];
    sec1[0] = tag;
    hex::decode_to_slice(x_hex, &mut sec1[1..1 + P192_FIELD_ELEMENT_SIZE])
        .map_err(|e| Error::encoding(context, e.to_string()))?;
    Point::deserialize_compressed(&sec1).with_context(context)
}

/// Hex-encode an answer digest
pub(crate) fn encode_answer(digest: &[u8; SHA256_OUTPUT_SIZE]) -> String {
    hex::encode(digest)
}

/// Decode an answer string; `None` when it is not 64 lowercase hex digits
pub(crate) fn decode_answer(text: &str) -> Option<EphemeralSecret<[u8; SHA256_OUTPUT_SIZE]>> {
    if text.len() != ANSWER_TEXT_LEN || !is_lower_hex(text) {
        return None;
    }
    let mut digest = EphemeralSecret::new([0u8; SHA256_OUTPUT_SIZE]);
    hex::decode_to_slice(text, &mut digest[..]).ok()?;
    Some(digest)
}
