//! Hamming(7,4) error correction codec.
//!
//! This crate implements the classic (7,4) Hamming code over arbitrary byte
//! strings: input bytes are expanded into bits, grouped into 4-bit blocks,
//! and each block is encoded into a 7-bit codeword carrying 3 parity bits.
//! Decoding recomputes the parity checks, combines them into a syndrome, and
//! corrects at most one flipped bit per codeword before reassembling bytes.
//!
//! The crate is layered as small, stateless components:
//! - [`bits`] — byte ↔ bit-sequence packing and the '0'/'1' text form
//! - [`block`] — the (7,4) code on a single 4-bit block
//! - [`stream`] — block-wise application over a whole bit sequence
//! - [`codec`] — byte-in/bits-out facades over the layers above
//! - [`framed`] — optional self-delimiting frame with padding trailer
//!
//! Bit sequences are [`bitvec`] containers with [`Msb0`](bitvec::order::Msb0)
//! ordering, matching the most-significant-bit-first expansion of each byte.
//!
//! # Limitations
//!
//! A (7,4) codeword corrects exactly one flipped bit. Two or more flips in
//! the same codeword are indistinguishable from a single flip elsewhere, so
//! decoding silently produces a wrong block rather than reporting an error.
//!
//! # Examples
//!
//! ```
//! use hamming74::{decode, encode};
//!
//! let encoded = encode(b"A");
//! assert_eq!(encoded.len(), 14);
//! assert_eq!(decode(&encoded).unwrap(), b"A");
//! ```
//!
//! Single-bit errors are transparently corrected:
//!
//! ```
//! use hamming74::{decode, encode};
//!
//! let mut noisy = encode(b"Hi");
//! let bit = noisy[3];
//! noisy.set(3, !bit);
//! assert_eq!(decode(&noisy).unwrap(), b"Hi");
//! ```

pub mod bits;
pub mod block;
pub mod codec;
pub mod error;
pub mod framed;
pub mod stream;

pub use bits::{binary_string_to_bits, bits_to_binary_string, bits_to_bytes, bytes_to_bits};
pub use block::{decode_block, decode_block_bits, encode_block, encode_block_bits};
pub use codec::{decode, decode_from_str, encode, encode_to_string};
pub use error::Error;
pub use framed::{decode_framed, decode_framed_bytes, encode_framed, encode_framed_bytes};
pub use stream::{decode_stream, encode_stream};

/// Result type for codec operations
pub type Result<T> = std::result::Result<T, Error>;
