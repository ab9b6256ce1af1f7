//! Unpadded base64url encoding.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::encoded_len;

const PAD: char = '=';

/// Encodes a byte slice as unpadded base64url text.
///
/// The bytes are run through the standard padded base64 encoding, then `+`
/// and `/` are substituted with `-` and `_` and the trailing `=` padding is
/// stripped. The result never contains `+`, `/`, or `=`, and its length is
/// exactly [`encoded_len()`] of the input length.
///
/// # Example
///
/// ```
/// use base64url_codec::encode;
///
/// assert_eq!(encode(b"hello world"), "aGVsbG8gd29ybGQ");
/// assert_eq!(encode(&[]), "");
/// ```
pub fn encode(data: &[u8]) -> String {
    let padded = STANDARD.encode(data);
    let unpadded = padded.trim_end_matches(PAD);

    let mut out = String::with_capacity(encoded_len(data.len()));
    for ch in unpadded.chars() {
        out.push(match ch {
            '+' => '-',
            '/' => '_',
            ch => ch,
        });
    }
    out
}
