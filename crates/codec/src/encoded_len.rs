//! Length law for encoding.

/// Returns the length of the unpadded base64url text encoding `byte_len`
/// bytes: `ceil(4 * byte_len / 3)`.
///
/// Each full 3-byte group yields 4 characters; a final group of 1 or 2
/// bytes yields 2 or 3 characters with the padding dropped.
///
/// # Example
///
/// ```
/// use base64url_codec::encoded_len;
///
/// assert_eq!(encoded_len(0), 0);
/// assert_eq!(encoded_len(1), 2);
/// assert_eq!(encoded_len(2), 3);
/// assert_eq!(encoded_len(3), 4);
/// ```
pub const fn encoded_len(byte_len: usize) -> usize {
    match byte_len % 3 {
        1 => byte_len / 3 * 4 + 2,
        2 => byte_len / 3 * 4 + 3,
        _ => byte_len / 3 * 4,
    }
}
