//! Self-delimiting frames over the core codec.
//!
//! The core encode/decode pair carries no framing: the caller must know the
//! exact encoded bit count out of band. This layer removes that requirement
//! by padding the payload to a whole number of blocks and recording the pad
//! length in a trailer, so a frame can be handed around as plain bytes.
//!
//! Frame layout, in bit order:
//!
//! ```text
//! [ codewords (7 bits each) | pad length (3 bits, MSB first) | marker 1 | zero fill to a byte boundary ]
//! ```
//!
//! The marker bit is the last `1` in the frame; everything after it is
//! alignment fill, so the trailer can be located from the tail without a
//! length prefix.

use crate::bits::{bits_to_bytes, bytes_to_bits};
use crate::block::DATA_BITS;
use crate::error::Error;
use crate::stream::{decode_stream, encode_stream};
use crate::Result;
use bitvec::prelude::*;

/// Width of the pad-length field in the trailer.
const PAD_FIELD_BITS: usize = 3;

/// Encodes a bit sequence of any length into a byte-aligned, self-delimiting
/// frame.
pub fn encode_framed(bits: &BitSlice<u8, Msb0>) -> BitVec<u8, Msb0> {
    let pad = (DATA_BITS - bits.len() % DATA_BITS) % DATA_BITS;

    let mut padded = bits.to_bitvec();
    padded.resize(bits.len() + pad, false);

    // Padded to a multiple of 4 above, so the stream precondition holds.
    let mut frame = encode_stream(&padded).unwrap();

    for shift in (0..PAD_FIELD_BITS).rev() {
        frame.push((pad >> shift) & 1 == 1);
    }
    frame.push(true);

    let fill = (8 - frame.len() % 8) % 8;
    frame.resize(frame.len() + fill, false);
    frame
}

/// Decodes a frame produced by [`encode_framed`], correcting up to one
/// flipped bit per codeword, and returns the original bit sequence.
///
/// Fails with [`Error::MissingFrameMarker`] when no marker bit is present,
/// [`Error::MalformedLength`] when the codeword body is not a whole number
/// of codewords, and [`Error::TruncatedFrame`] when the recorded pad length
/// exceeds the decoded body.
pub fn decode_framed(bits: &BitSlice<u8, Msb0>) -> Result<BitVec<u8, Msb0>> {
    let marker = bits.last_one().ok_or(Error::MissingFrameMarker)?;
    if marker < PAD_FIELD_BITS {
        return Err(Error::MissingFrameMarker);
    }

    let pad_field = &bits[marker - PAD_FIELD_BITS..marker];
    let pad = pad_field
        .iter()
        .fold(0usize, |acc, bit| (acc << 1) | usize::from(*bit));

    let body = &bits[..marker - PAD_FIELD_BITS];
    let decoded = decode_stream(body)?;
    if pad > decoded.len() {
        return Err(Error::TruncatedFrame);
    }
    Ok(decoded[..decoded.len() - pad].to_bitvec())
}

/// Encodes a byte string into a framed byte string.
pub fn encode_framed_bytes(bytes: &[u8]) -> Vec<u8> {
    let frame = encode_framed(&bytes_to_bits(bytes));
    // Frames are zero-filled to a byte boundary, so the raw storage is
    // exactly the frame.
    frame.as_raw_slice().to_vec()
}

/// Decodes a framed byte string back into the original bytes.
///
/// In addition to the errors of [`decode_framed`], fails with
/// [`Error::MalformedLength`] when the recovered payload is not a whole
/// number of bytes.
pub fn decode_framed_bytes(bytes: &[u8]) -> Result<Vec<u8>> {
    let payload = decode_framed(bytes.view_bits::<Msb0>())?;
    bits_to_bytes(&payload)
}
