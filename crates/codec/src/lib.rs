//! Unpadded base64url encoding and decoding.
//!
//! This crate implements the URL- and filename-safe base64 variant of
//! RFC 4648 §5: `-` and `_` in place of `+` and `/`, with the trailing `=`
//! padding omitted. Encoding is exact; decoding is deliberately lenient and
//! never fails (see [`decode()`]).
//!
//! # Example
//!
//! ```
//! use base64url_codec::{decode, encode};
//!
//! let data = &[0xDE, 0xAD, 0xBE, 0xEF];
//! let text = encode(data);
//! assert_eq!(text, "3q2-7w");
//! assert_eq!(decode(&text), data);
//! ```

mod decode;
mod decoded_len;
mod encode;
mod encoded_len;

pub use decode::decode;
pub use decoded_len::decoded_len;
pub use encode::encode;
pub use encoded_len::encoded_len;
