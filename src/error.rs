//! Error types for codec operations.

use thiserror::Error;

/// Errors reported by the codec layers.
///
/// Note that uncorrectable corruption (two or more flipped bits in one
/// codeword) is not represented here: decoding always yields some block, and
/// multi-bit damage surfaces as silently wrong output, not as an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Input length is not a multiple of the block size a stage requires
    /// (8 bits for byte packing, 4 for encoding, 7 for decoding).
    #[error("input length {len} is not a multiple of {multiple} bits")]
    MalformedLength { len: usize, multiple: usize },

    /// The text form contained a character other than '0' or '1'.
    #[error("invalid bit character {ch:?} at index {index}")]
    InvalidBit { ch: char, index: usize },

    /// A framed input contained no marker bit terminating the trailer.
    #[error("framed input contains no trailer marker bit")]
    MissingFrameMarker,

    /// A framed input records more padding bits than its decoded body holds.
    #[error("framed input is shorter than its recorded padding")]
    TruncatedFrame,
}
