//! Unchecked hex decoding.
//!
//! Both functions assume their input consists of hex digits only. Anything else decodes to an
//! unspecified value, but never panics.

const LOW_4_BITS: u8 = 0b0000_1111;

/// Decode a single case-insensitive hex digit to its value in `0..=15`.
///
/// The low four bits of `0`-`9` are already the digit's value. The low four bits of `a`-`f` and
/// `A`-`F` are `1`-`6`, and only letters have bit 6 set, so `c >> 6` is 1 for letters and 0 for
/// digits.
///
/// ```
/// assert_eq!(hex2bin::decode_nibble(b'0'), 0);
/// assert_eq!(hex2bin::decode_nibble(b'a'), 10);
/// assert_eq!(hex2bin::decode_nibble(b'F'), 15);
/// ```
#[must_use]
#[inline]
pub const fn decode_nibble(c: u8) -> u8 {
    // max is 15 + 3 * 9, so this can't overflow for any byte
    (c & LOW_4_BITS) + (c >> 6) * 9
}

/// Number of bytes [`decode_hex`] writes for `hlen` input characters and a buffer of `blen` bytes.
#[must_use]
pub const fn decoded_len(hlen: usize, blen: usize) -> usize {
    let pairs = hlen / 2;
    if pairs < blen {
        pairs
    } else {
        blen
    }
}

/// Decode pairs of hex digits from `hex` into `bin`, starting at `bin[0]`.
///
/// Stops when `bin` is full or fewer than two characters remain, and returns the number of bytes
/// written. A trailing odd character is ignored. Bytes of `bin` past the returned count are left
/// alone.
pub fn decode_hex<H: AsRef<[u8]>>(hex: H, bin: &mut [u8]) -> usize {
    let mut written = 0;
    for (byte, pair) in bin.iter_mut().zip(hex.as_ref().chunks_exact(2)) {
        *byte = (decode_nibble(pair[0]) << 4) | decode_nibble(pair[1]);
        written += 1;
    }
    written
}
