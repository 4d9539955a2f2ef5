//! Bounded hex decoding into caller-owned buffers.
//!
//! [`decode_hex`] is the fast path: no validation, no allocation, no errors. It writes as many
//! bytes as both the input and the output buffer allow and returns that count. [`try_decode_hex`]
//! does the same but checks every character it consumes.
#![warn(clippy::pedantic)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod checked;
mod hex;
mod hex_ext;

pub use checked::{try_decode_hex, try_decode_nibble, HexError};
pub use hex::{decode_hex, decode_nibble, decoded_len};
pub use hex_ext::HexExt;

/// Lowercase or uppercase hex for building test inputs.
#[cfg(test)]
fn hex_encode<B: AsRef<[u8]>>(data: B, upper: bool) -> String {
    data.as_ref()
        .iter()
        .flat_map(|byte| [byte >> 4, byte & 0b0000_1111])
        .map(|nibble| {
            if nibble < 10 {
                b'0' + nibble
            } else if upper {
                b'A' + nibble - 10
            } else {
                b'a' + nibble - 10
            }
        })
        .map(|c| c as char)
        .collect()
}

#[cfg(test)]
fn gen_random_bytes(len: usize) -> Vec<u8> {
    use rand::Rng;
    (0..len).map(|_| rand::thread_rng().gen()).collect()
}
