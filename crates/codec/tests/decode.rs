//! Tests for lenient base64url decoding.

use base64url_codec::{decode, encode};
use rand::Rng;

fn generate_blob() -> Vec<u8> {
    let mut rng = rand::thread_rng();
    let length = rng.gen_range(0..=100);
    (0..length).map(|_| rng.gen::<u8>()).collect()
}

#[test]
fn works() {
    for _ in 0..100 {
        let blob = generate_blob();
        assert_eq!(decode(&encode(&blob)), blob);
    }
}

#[test]
fn empty_input() {
    assert_eq!(decode(""), b"");
}

#[test]
fn hello_world() {
    assert_eq!(decode("aGVsbG8gd29ybGQ"), b"hello world");
}

#[test]
fn rfc_vectors() {
    assert_eq!(decode("Zg"), b"f");
    assert_eq!(decode("Zm8"), b"fo");
    assert_eq!(decode("Zm9v"), b"foo");
    assert_eq!(decode("Zm9vYg"), b"foob");
}

#[test]
fn known_vector() {
    assert_eq!(decode("3q2-7w"), [0xDE, 0xAD, 0xBE, 0xEF]);
}

#[test]
fn zero_bytes_survive() {
    // Output length is derived from the encoded length, never by scanning
    // for trailing zeros, so zero bytes are ordinary payload.
    assert_eq!(decode(&encode(&[0x00, 0x00, 0x00])), [0x00, 0x00, 0x00]);
    assert_eq!(decode(&encode(&[0x00])), [0x00]);
    assert_eq!(decode(&encode(&[0x01, 0x00])), [0x01, 0x00]);
    assert_eq!(decode("AAAA"), [0x00, 0x00, 0x00]);
}

#[test]
fn accepts_padded_input() {
    assert_eq!(decode("Zg=="), b"f");
    assert_eq!(decode("Zm8="), b"fo");
    assert_eq!(decode("aGVsbG8gd29ybGQ="), b"hello world");
}

#[test]
fn tolerates_nonzero_trailing_bits() {
    // 'h' leaves a non-zero low nibble behind; strict decoders reject this.
    assert_eq!(decode("Zh"), b"f");
}

#[test]
fn dangling_character_is_dropped() {
    // Length 1 mod 4 is unreachable from any byte sequence.
    assert_eq!(decode("AAAAB"), [0x00, 0x00, 0x00]);
    assert_eq!(decode("Z"), b"");
}

#[test]
fn out_of_alphabet_characters_are_discarded() {
    assert_eq!(decode("Zm 8"), b"fo");
    assert_eq!(decode("Zm\n9v"), b"foo");
    assert_eq!(decode("3q2-7w!!"), [0xDE, 0xAD, 0xBE, 0xEF]);
}

#[test]
fn garbage_is_deterministic() {
    assert_eq!(decode("===="), b"");
    assert_eq!(decode("!!"), b"");
    assert_eq!(decode("Zm8\u{20AC}"), b"fo");
}

#[test]
fn random_text_never_panics() {
    let mut rng = rand::thread_rng();
    for _ in 0..100 {
        let length = rng.gen_range(0..=64);
        let text: String = (0..length)
            .map(|_| rng.gen_range(0x20u8..0x7F) as char)
            .collect();
        let first = decode(&text);
        let second = decode(&text);
        assert_eq!(first, second);
    }
}
