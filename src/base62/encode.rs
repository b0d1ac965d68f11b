use super::{Alphabet, ALPHABET, BASE};
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The output buffer was too small to contain the entire input.
    BufferTooSmall,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BufferTooSmall => write!(f, "Output buffer too small"),
        }
    }
}

// "LygHa16AHYF" is u64::MAX.
const U64_DIGITS: usize = 11;

/// Upper bound on the number of digits `encode_bytes_into` writes for an input of `len` bytes.
pub const fn encoded_len(len: usize) -> usize {
    (len * 8) / 5 + 1
}

pub struct Encoder<'a> {
    alphabet: &'a Alphabet<62>,
}

impl<'a> Encoder<'a> {
    pub const fn new(alphabet: &'a Alphabet<62>) -> Self {
        Self { alphabet }
    }

    pub fn encode(&self, value: u64) -> String {
        let mut output = [0u8; U64_DIGITS];
        let mut index = output.len();
        let mut value = value;
        loop {
            index -= 1;
            output[index] = self.alphabet.encode((value % BASE as u64) as usize);
            value /= BASE as u64;
            if value == 0 {
                break;
            }
        }
        output[index..].iter().copied().map(char::from).collect()
    }

    /// Writes the digits of `input`, read as a big-endian unsigned integer, into `output`.
    ///
    /// Leading zero bytes carry no value and produce no digits, an all-zero input
    /// encodes to a single zero digit and an empty input to nothing.
    pub fn encode_bytes_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        let input = input.as_ref();
        let output = output.as_mut();
        if input.is_empty() {
            return Ok(0);
        }
        let mut index = 0;
        for &value in input {
            let mut carry = value as usize;
            for digit in &mut output[..index] {
                carry += (*digit as usize) << 8;
                *digit = (carry % BASE) as u8;
                carry /= BASE;
            }
            while carry > 0 {
                *output.get_mut(index).ok_or(Error::BufferTooSmall)? = (carry % BASE) as u8;
                index += 1;
                carry /= BASE;
            }
        }
        if index == 0 {
            *output.get_mut(index).ok_or(Error::BufferTooSmall)? = 0;
            index += 1;
        }
        for digit in &mut output[..index] {
            *digit = self.alphabet.encode(*digit as usize);
        }
        output[..index].reverse();
        Ok(index)
    }

    pub fn encode_bytes(&self, input: impl AsRef<[u8]>) -> String {
        let input = input.as_ref();
        let mut output = vec![0u8; encoded_len(input.len())];
        let len = self.encode_bytes_into(input, &mut output).expect("encoded_len bounds the digit count");
        output[..len].iter().copied().map(char::from).collect()
    }

    pub fn default() -> &'static Self {
        &ENCODER
    }
}

const ENCODER: Encoder = Encoder::new(&ALPHABET);

pub fn encode(value: u64) -> String {
    Encoder::default().encode(value)
}

pub fn encode_bytes(input: impl AsRef<[u8]>) -> String {
    Encoder::default().encode_bytes(input)
}

pub fn encode_bytes_into(input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    Encoder::default().encode_bytes_into(input, output)
}
