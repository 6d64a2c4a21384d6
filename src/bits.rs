//! Byte ↔ bit-sequence packing, plus the '0'/'1' text representation.
//!
//! Bit sequences use `Msb0` ordering throughout: the first bit of a byte's
//! expansion is its most significant bit. Sequences carry an explicit length,
//! so zero bits are ordinary values rather than terminators.

use crate::error::Error;
use crate::Result;
use bitvec::prelude::*;

/// Expands a byte slice into its bit sequence, most significant bit first.
///
/// The output length is exactly `8 * bytes.len()`; an empty input yields an
/// empty sequence.
pub fn bytes_to_bits(bytes: &[u8]) -> BitVec<u8, Msb0> {
    bytes.view_bits::<Msb0>().to_bitvec()
}

/// Packs a bit sequence back into bytes, first bit most significant.
///
/// Fails with [`Error::MalformedLength`] unless the length is a multiple
/// of 8.
pub fn bits_to_bytes(bits: &BitSlice<u8, Msb0>) -> Result<Vec<u8>> {
    if bits.len() % 8 != 0 {
        return Err(Error::MalformedLength {
            len: bits.len(),
            multiple: 8,
        });
    }

    let mut bytes = Vec::with_capacity(bits.len() / 8);
    for chunk in bits.chunks(8) {
        let mut byte = 0u8;
        for i in 0..8 {
            byte = (byte << 1) | u8::from(chunk[i]);
        }
        bytes.push(byte);
    }
    Ok(bytes)
}

/// Renders a bit sequence as ASCII '0'/'1' characters, one per bit.
///
/// This is the wire/display form of encoded output; no framing or length
/// prefix is added.
pub fn bits_to_binary_string(bits: &BitSlice<u8, Msb0>) -> String {
    bits.iter().map(|bit| if *bit { '1' } else { '0' }).collect()
}

/// Parses a '0'/'1' character string into a bit sequence.
///
/// Fails with [`Error::InvalidBit`] on the first character that is neither
/// '0' nor '1'.
pub fn binary_string_to_bits(text: &str) -> Result<BitVec<u8, Msb0>> {
    let mut bits = BitVec::with_capacity(text.len());
    for (index, ch) in text.chars().enumerate() {
        match ch {
            '0' => bits.push(false),
            '1' => bits.push(true),
            _ => return Err(Error::InvalidBit { ch, index }),
        }
    }
    Ok(bits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes_to_bits_msb_first() {
        let bits = bytes_to_bits(&[0x41]);
        assert_eq!(bits_to_binary_string(&bits), "01000001");

        let bits = bytes_to_bits(&[0x80, 0x01]);
        assert_eq!(bits_to_binary_string(&bits), "1000000000000001");
    }

    #[test]
    fn test_empty_input() {
        assert!(bytes_to_bits(&[]).is_empty());
        assert!(bits_to_bytes(BitSlice::empty()).unwrap().is_empty());
    }

    #[test]
    fn test_pack_round_trip() {
        let data = b"The quick brown fox";
        let bits = bytes_to_bits(data);
        assert_eq!(bits.len(), data.len() * 8);
        assert_eq!(bits_to_bytes(&bits).unwrap(), data);
    }

    #[test]
    fn test_bits_to_bytes_rejects_ragged_length() {
        let bits = bitvec![u8, Msb0; 0; 13];
        assert_eq!(
            bits_to_bytes(&bits),
            Err(Error::MalformedLength {
                len: 13,
                multiple: 8
            })
        );
    }

    #[test]
    fn test_binary_string_round_trip() {
        let text = "01000001110";
        let bits = binary_string_to_bits(text).unwrap();
        assert_eq!(bits.len(), 11);
        assert_eq!(bits_to_binary_string(&bits), text);
    }

    #[test]
    fn test_binary_string_rejects_non_bit_characters() {
        assert_eq!(
            binary_string_to_bits("0102"),
            Err(Error::InvalidBit { ch: '2', index: 3 })
        );
        assert_eq!(
            binary_string_to_bits(" 01"),
            Err(Error::InvalidBit { ch: ' ', index: 0 })
        );
    }
}
