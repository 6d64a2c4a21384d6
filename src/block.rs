//! The (7,4) block code: one 4-bit block ↔ one 7-bit codeword.
//!
//! A codeword is laid out `[p1, p2, d0, p3, d1, d2, d3]`, with parity bits
//! placed at the power-of-two positions of the classic Hamming construction:
//!
//! - p1 = d0 ⊕ d1 ⊕ d3
//! - p2 = d0 ⊕ d2 ⊕ d3
//! - p3 = d1 ⊕ d2 ⊕ d3
//!
//! On decode, the three parity checks are recomputed over the received bits
//! and combined into a syndrome whose nonzero value is the 1-based position
//! of the flipped bit. A single flip anywhere in the codeword (data or
//! parity) is corrected exactly; two or more flips alias onto some other
//! single-flip syndrome and are silently miscorrected.

use bitvec::prelude::*;
use log::trace;

/// Data bits per block.
pub const DATA_BITS: usize = 4;

/// Bits per encoded codeword.
pub const CODE_BITS: usize = 7;

/// Encodes one 4-bit block into the 7-bit codeword written to `out`.
///
/// `data` must be exactly [`DATA_BITS`] long and `out` exactly [`CODE_BITS`].
pub fn encode_block(data: &BitSlice<u8, Msb0>, out: &mut BitSlice<u8, Msb0>) {
    debug_assert_eq!(data.len(), DATA_BITS);
    debug_assert_eq!(out.len(), CODE_BITS);

    let (d0, d1, d2, d3) = (data[0], data[1], data[2], data[3]);

    out.set(0, d0 ^ d1 ^ d3);
    out.set(1, d0 ^ d2 ^ d3);
    out.set(2, d0);
    out.set(3, d1 ^ d2 ^ d3);
    out.set(4, d1);
    out.set(5, d2);
    out.set(6, d3);
}

/// Decodes one received 7-bit codeword, correcting at most one flipped bit.
///
/// Writes the corrected data bits to `out` and returns the syndrome: 0 when
/// the codeword checked out clean, otherwise the 1-based position of the bit
/// that was flipped back.
///
/// `code` must be exactly [`CODE_BITS`] long and `out` exactly [`DATA_BITS`].
pub fn decode_block(code: &BitSlice<u8, Msb0>, out: &mut BitSlice<u8, Msb0>) -> usize {
    debug_assert_eq!(code.len(), CODE_BITS);
    debug_assert_eq!(out.len(), DATA_BITS);

    let c1 = code[0] ^ code[2] ^ code[4] ^ code[6];
    let c2 = code[1] ^ code[2] ^ code[5] ^ code[6];
    let c3 = code[3] ^ code[4] ^ code[5] ^ code[6];
    let syndrome = usize::from(c1) + 2 * usize::from(c2) + 4 * usize::from(c3);

    let mut corrected = code.to_bitvec();
    if syndrome != 0 {
        trace!("correcting flipped bit at codeword position {}", syndrome);
        let pos = syndrome - 1;
        corrected.set(pos, !code[pos]);
    }

    out.set(0, corrected[2]);
    out.set(1, corrected[4]);
    out.set(2, corrected[5]);
    out.set(3, corrected[6]);
    syndrome
}

/// Owned-value variant of [`encode_block`] for block-level callers.
pub fn encode_block_bits(data: &BitSlice<u8, Msb0>) -> BitVec<u8, Msb0> {
    let mut code = bitvec![u8, Msb0; 0; CODE_BITS];
    encode_block(data, &mut code);
    code
}

/// Owned-value variant of [`decode_block`]; returns the corrected block and
/// the syndrome.
pub fn decode_block_bits(code: &BitSlice<u8, Msb0>) -> (BitVec<u8, Msb0>, usize) {
    let mut data = bitvec![u8, Msb0; 0; DATA_BITS];
    let syndrome = decode_block(code, &mut data);
    (data, syndrome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bits::binary_string_to_bits;

    fn block(value: u8) -> BitVec<u8, Msb0> {
        (0..DATA_BITS).map(|i| (value >> (3 - i)) & 1 == 1).collect()
    }

    #[test]
    fn test_encode_known_vector() {
        // d = 1011: p1 = 1^0^1 = 0, p2 = 1^1^1 = 1, p3 = 0^1^1 = 0
        let data = binary_string_to_bits("1011").unwrap();
        let code = encode_block_bits(&data);
        assert_eq!(code, binary_string_to_bits("0110011").unwrap());
    }

    #[test]
    fn test_decode_clean_codeword_is_identity() {
        for value in 0..16u8 {
            let data = block(value);
            let code = encode_block_bits(&data);
            let (decoded, syndrome) = decode_block_bits(&code);
            assert_eq!(decoded, data);
            assert_eq!(syndrome, 0);
        }
    }

    #[test]
    fn test_single_bit_flip_corrected_at_every_position() {
        for value in 0..16u8 {
            let data = block(value);
            let code = encode_block_bits(&data);
            for pos in 0..CODE_BITS {
                let mut damaged = code.clone();
                damaged.set(pos, !code[pos]);

                let (decoded, syndrome) = decode_block_bits(&damaged);
                assert_eq!(decoded, data, "block {:04b}, flipped bit {}", value, pos);
                assert_eq!(syndrome, pos + 1);
            }
        }
    }

    #[test]
    fn test_known_corruption_scenario() {
        // 1011 encodes to 0110011; flipping bit index 2 gives 0100011, and
        // the syndrome must point at position 3.
        let damaged = binary_string_to_bits("0100011").unwrap();
        let (decoded, syndrome) = decode_block_bits(&damaged);
        assert_eq!(decoded, binary_string_to_bits("1011").unwrap());
        assert_eq!(syndrome, 3);
    }
}
