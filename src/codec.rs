//! Byte-level encode/decode facades over the packing and stream layers.

use crate::bits::{bits_to_binary_string, bits_to_bytes, binary_string_to_bits, bytes_to_bits};
use crate::stream::{decode_stream, encode_stream};
use crate::Result;
use bitvec::prelude::*;

/// Encodes a byte string into its Hamming(7,4) bit sequence.
///
/// Every byte becomes two 4-bit blocks and therefore two 7-bit codewords, so
/// the output holds exactly `14 * bytes.len()` bits. Empty input yields an
/// empty sequence.
pub fn encode(bytes: &[u8]) -> BitVec<u8, Msb0> {
    // 8 bits per byte is always a multiple of 4, so the stream precondition
    // cannot fail here.
    encode_stream(&bytes_to_bits(bytes)).unwrap()
}

/// Decodes a Hamming(7,4) bit sequence back into bytes, correcting up to one
/// flipped bit per 7-bit codeword.
///
/// Fails with [`Error::MalformedLength`](crate::Error::MalformedLength) when
/// the input length is not a multiple of 7, or when the corrected bit count
/// is not a multiple of 8 (an encoded length of 7 or 21 bits, for example,
/// cannot have come from whole bytes).
pub fn decode(bits: &BitSlice<u8, Msb0>) -> Result<Vec<u8>> {
    let corrected = decode_stream(bits)?;
    bits_to_bytes(&corrected)
}

/// [`encode`] with the output rendered as a '0'/'1' character string.
pub fn encode_to_string(bytes: &[u8]) -> String {
    bits_to_binary_string(&encode(bytes))
}

/// [`decode`] over a '0'/'1' character string.
///
/// Fails with [`Error::InvalidBit`](crate::Error::InvalidBit) on characters
/// outside '0'/'1', in addition to the length errors of [`decode`].
pub fn decode_from_str(text: &str) -> Result<Vec<u8>> {
    decode(&binary_string_to_bits(text)?)
}
