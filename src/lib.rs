//! Base62 encoding of `u64` values and arbitrary byte sequences.
//!
//! Digits are drawn from `0-9A-Za-z`, most significant first:
//!
//! ```
//! assert_eq!(base62::encode(124), "20");
//! assert_eq!(base62::decode("20"), Ok(124));
//! assert_eq!(base62::encode_bytes([0x01, 0x02, 0x03]), "HBL");
//! assert_eq!(base62::decode_bytes("HBL"), Ok(vec![0x01, 0x02, 0x03]));
//! ```
//!
//! Byte sequences are read as one big-endian unsigned integer, so leading zero
//! bytes do not survive a round trip:
//!
//! ```
//! assert_eq!(base62::encode_bytes([0x00, 0x01]), "1");
//! assert_eq!(base62::decode_bytes("1"), Ok(vec![0x01]));
//! ```

pub mod base62;
pub mod base_common;
pub mod token;

pub use self::{
    base62::{decode, decode_bytes, decode_bytes_into, encode, encode_bytes, encode_bytes_into, encoded_len, Decoder, Encoder, ALPHABET},
    base_common::Alphabet,
    token::Token,
};
