//! Hex decoding that validates each character before using it.

use crate::hex::decoded_len;

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum HexError {
    /// `index` is the offset of `byte` in the hex input.
    #[error("invalid hex character {byte:#04x} at index {index}")]
    InvalidCharacter { byte: u8, index: usize },
}

/// Decode a single hex digit, or `None` if `c` isn't one.
#[must_use]
pub const fn try_decode_nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

fn nibble_at(c: u8, index: usize) -> Result<u8, HexError> {
    try_decode_nibble(c).ok_or_else(|| {
        log::debug!("rejecting hex character {c:#04x} at index {index}");
        HexError::InvalidCharacter { byte: c, index }
    })
}

/// Like [`decode_hex`](crate::decode_hex), but fails on the first non-hex character it would
/// consume.
///
/// Characters past the point where decoding stops (a trailing odd character, or input beyond the
/// capacity of `bin`) are not inspected. On error, bytes decoded before the bad pair remain in
/// `bin`.
///
/// # Errors
///
/// [`HexError::InvalidCharacter`] with the offending byte and its offset in `hex`.
pub fn try_decode_hex<H: AsRef<[u8]>>(hex: H, bin: &mut [u8]) -> Result<usize, HexError> {
    let hex = hex.as_ref();
    let len = decoded_len(hex.len(), bin.len());
    if len < hex.len() / 2 {
        log::trace!(
            "output holds {} bytes, ignoring {} trailing hex characters",
            len,
            hex.len() - 2 * len
        );
    }

    for (i, (byte, pair)) in bin.iter_mut().zip(hex.chunks_exact(2)).enumerate() {
        let hi = nibble_at(pair[0], 2 * i)?;
        let lo = nibble_at(pair[1], 2 * i + 1)?;
        *byte = (hi << 4) | lo;
    }

    Ok(len)
}
