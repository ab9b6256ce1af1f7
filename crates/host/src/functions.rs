//! The two builtin scalar functions, with typed null-propagating signatures.

use base64url_codec as codec;

/// `base64url_encode(blob) -> text`
///
/// Encodes a byte buffer as unpadded base64url text. Absent input yields
/// absent output. Deterministic.
pub fn base64url_encode(input: Option<&[u8]>) -> Option<String> {
    input.map(codec::encode)
}

/// `base64url_decode(text) -> blob`
///
/// Decodes base64url text into the byte buffer it represents. Absent input
/// yields absent output. Deterministic; lenient on malformed text (see
/// [`base64url_codec::decode`]).
pub fn base64url_decode(input: Option<&str>) -> Option<Vec<u8>> {
    input.map(codec::decode)
}
