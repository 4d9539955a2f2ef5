use crate::checked::{try_decode_hex, HexError};
use crate::hex::decode_hex;

pub trait HexExt {
    /// Decode self as hex into `bin`, returning the number of bytes written. See
    /// [`decode_hex`](crate::decode_hex).
    fn decode_hex_into(&self, bin: &mut [u8]) -> usize;

    /// Decode self as hex into `bin`, rejecting non-hex characters. See
    /// [`try_decode_hex`](crate::try_decode_hex).
    ///
    /// # Errors
    ///
    /// [`HexError::InvalidCharacter`] on the first non-hex character consumed.
    fn try_decode_hex_into(&self, bin: &mut [u8]) -> Result<usize, HexError>;
}

impl HexExt for [u8] {
    fn decode_hex_into(&self, bin: &mut [u8]) -> usize {
        decode_hex(self, bin)
    }

    fn try_decode_hex_into(&self, bin: &mut [u8]) -> Result<usize, HexError> {
        try_decode_hex(self, bin)
    }
}

impl HexExt for str {
    fn decode_hex_into(&self, bin: &mut [u8]) -> usize {
        self.as_bytes().decode_hex_into(bin)
    }

    fn try_decode_hex_into(&self, bin: &mut [u8]) -> Result<usize, HexError> {
        self.as_bytes().try_decode_hex_into(bin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_hex_into() {
        let input = b"4a4b";
        let mut buf = [0u8; 2];

        let written = input.decode_hex_into(&mut buf);
        assert_eq!(written, 2);
        assert_eq!(&buf, b"JK");
    }

    #[test]
    fn test_str_decode_hex_into() {
        let mut buf = [0u8; 8];

        let written = "68656c6c6f".decode_hex_into(&mut buf);
        assert_eq!(&buf[..written], b"hello");
    }

    #[test]
    fn test_try_decode_hex_into() {
        let mut buf = [0u8; 8];

        assert_eq!("0aFF".try_decode_hex_into(&mut buf), Ok(2));
        assert_eq!(
            "0x".try_decode_hex_into(&mut buf),
            Err(HexError::InvalidCharacter {
                byte: b'x',
                index: 1
            })
        );
    }
}
