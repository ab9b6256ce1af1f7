//! Length law for decoding.

/// Returns the number of bytes represented by unpadded base64url text of
/// length `text_len`.
///
/// Follows the RFC 4648 padding table: a whole quantum carries 3 bytes, a
/// 3-character remainder carries 2, a 2-character remainder carries 1. A
/// 1-character remainder is not reachable from any byte sequence and
/// carries nothing (see [`decode()`](crate::decode())).
///
/// # Example
///
/// ```
/// use base64url_codec::decoded_len;
///
/// assert_eq!(decoded_len(0), 0);
/// assert_eq!(decoded_len(2), 1);
/// assert_eq!(decoded_len(3), 2);
/// assert_eq!(decoded_len(4), 3);
/// assert_eq!(decoded_len(6), 4);
/// ```
pub const fn decoded_len(text_len: usize) -> usize {
    match text_len % 4 {
        2 => text_len / 4 * 3 + 1,
        3 => text_len / 4 * 3 + 2,
        _ => text_len / 4 * 3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverts_encoded_len() {
        for n in 0..1000 {
            assert_eq!(decoded_len(crate::encoded_len(n)), n);
        }
    }
}
