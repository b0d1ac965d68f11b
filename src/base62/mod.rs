pub mod decode;
pub mod encode;
pub use crate::base_common::Alphabet;

pub use decode::{decode, decode_bytes, decode_bytes_into, Decoder};
pub use encode::{encode, encode_bytes, encode_bytes_into, encoded_len, Encoder};

const BASE: usize = 62;

pub const ALPHABET: Alphabet<62> = match Alphabet::new(b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz") {
    Ok(alphabet) => alphabet,
    Err(_) => panic!("Could not build alphabet"),
};
