//! Lenient base64url decoding.

use base64::alphabet;
use base64::engine::{GeneralPurpose, GeneralPurposeConfig};
use base64::Engine as _;

const PAD: char = '=';

/// Standard-alphabet engine that, unlike the default, accepts a final symbol
/// whose discarded low bits are non-zero.
const STANDARD_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

/// Decodes base64url text into the byte buffer it represents.
///
/// `-` and `_` are translated back to `+` and `/`, the `=` padding implied
/// by the text length is synthesized, and the padded string is decoded with
/// the standard base64 primitive. The output length follows from the input
/// length and the synthesized padding count, so trailing zero bytes in the
/// payload survive intact.
///
/// Decoding never fails. Input already carrying padding is accepted.
/// Characters outside the base64url alphabet are discarded and the
/// remainder decoded; a length congruent to 1 mod 4 is not reachable from
/// any byte sequence, so a dangling final character is dropped. Malformed
/// input thus yields deterministic best-effort output rather than an error.
///
/// # Example
///
/// ```
/// use base64url_codec::decode;
///
/// assert_eq!(decode("aGVsbG8gd29ybGQ"), b"hello world");
/// assert_eq!(decode(""), b"");
/// ```
pub fn decode(text: &str) -> Vec<u8> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut translated = String::with_capacity(text.len() + 3);
    for ch in text.chars() {
        translated.push(match ch {
            '-' => '+',
            '_' => '/',
            ch => ch,
        });
    }

    // A length of 1 mod 4 gets three pad characters here, which no decoder
    // accepts; the scrub pass below resolves it.
    let pad = (4 - translated.len() % 4) % 4;
    for _ in 0..pad {
        translated.push(PAD);
    }

    match STANDARD_LENIENT.decode(&translated) {
        Ok(bytes) => bytes,
        Err(_) => decode_scrubbed(&translated),
    }
}

/// Fallback for text the engine rejects: keep only standard-alphabet bytes,
/// drop a dangling final character, re-pad, and decode that.
fn decode_scrubbed(translated: &str) -> Vec<u8> {
    let mut kept: Vec<u8> = translated
        .bytes()
        .filter(|b| b.is_ascii_alphanumeric() || *b == b'+' || *b == b'/')
        .collect();

    if kept.len() % 4 == 1 {
        kept.pop();
    }
    let pad = (4 - kept.len() % 4) % 4;
    for _ in 0..pad {
        kept.push(PAD as u8);
    }

    // Alphabet-only input with canonical padding cannot be rejected.
    STANDARD_LENIENT.decode(&kept).unwrap_or_default()
}
