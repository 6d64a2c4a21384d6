//! Block-wise application of the (7,4) code over a whole bit sequence.

use crate::block::{decode_block, encode_block, CODE_BITS, DATA_BITS};
use crate::error::Error;
use crate::Result;
use bitvec::prelude::*;
use log::debug;

/// Encodes a bit sequence by splitting it into consecutive 4-bit blocks and
/// concatenating their 7-bit codewords in order.
///
/// Fails with [`Error::MalformedLength`] unless the length is a multiple of
/// 4. The output length is `7/4` times the input length.
pub fn encode_stream(bits: &BitSlice<u8, Msb0>) -> Result<BitVec<u8, Msb0>> {
    if bits.len() % DATA_BITS != 0 {
        return Err(Error::MalformedLength {
            len: bits.len(),
            multiple: DATA_BITS,
        });
    }

    let blocks = bits.len() / DATA_BITS;
    let mut encoded = bitvec![u8, Msb0; 0; blocks * CODE_BITS];
    for block_idx in 0..blocks {
        let input_start = block_idx * DATA_BITS;
        let output_start = block_idx * CODE_BITS;
        encode_block(
            &bits[input_start..input_start + DATA_BITS],
            &mut encoded[output_start..output_start + CODE_BITS],
        );
    }
    Ok(encoded)
}

/// Decodes a bit sequence by splitting it into consecutive 7-bit codewords
/// and concatenating their corrected 4-bit blocks in order.
///
/// Fails with [`Error::MalformedLength`] unless the length is a multiple of
/// 7. The output length is `4/7` times the input length. Up to one flipped
/// bit per codeword is corrected; heavier corruption decodes to wrong bits
/// without notice.
pub fn decode_stream(bits: &BitSlice<u8, Msb0>) -> Result<BitVec<u8, Msb0>> {
    if bits.len() % CODE_BITS != 0 {
        return Err(Error::MalformedLength {
            len: bits.len(),
            multiple: CODE_BITS,
        });
    }

    let blocks = bits.len() / CODE_BITS;
    let mut decoded = bitvec![u8, Msb0; 0; blocks * DATA_BITS];
    let mut corrections = 0usize;
    for block_idx in 0..blocks {
        let input_start = block_idx * CODE_BITS;
        let output_start = block_idx * DATA_BITS;
        let syndrome = decode_block(
            &bits[input_start..input_start + CODE_BITS],
            &mut decoded[output_start..output_start + DATA_BITS],
        );
        if syndrome != 0 {
            corrections += 1;
        }
    }
    if corrections > 0 {
        debug!("corrected {} of {} codewords", corrections, blocks);
    }
    Ok(decoded)
}
