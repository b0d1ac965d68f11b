use super::{Alphabet, ALPHABET, BASE};
use crate::base_common::alphabet;
use std::{error, fmt};
use tracing::debug;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    BufferTooSmall,
    InvalidCharacter { character: char, index: usize },
    /// Applying the digit at `index` would take the value past `u64::MAX`.
    Overflow { index: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BufferTooSmall => write!(f, "Output buffer too small"),
            Error::InvalidCharacter { character, index } => write!(f, "Invalid character '{}' at index {}", character, index),
            Error::Overflow { index } => write!(f, "Overflow decoding u64 at index {}", index),
        }
    }
}

impl From<alphabet::DecodeError> for Error {
    fn from(error: alphabet::DecodeError) -> Self {
        match error {
            alphabet::DecodeError::InvalidCharacter { character, index } => Error::InvalidCharacter { character, index },
        }
    }
}

pub struct Decoder<'a> {
    alphabet: &'a Alphabet<62>,
}

impl<'a> Decoder<'a> {
    pub const fn new(alphabet: &'a Alphabet<62>) -> Self {
        Self { alphabet }
    }

    pub fn decode(&self, input: impl AsRef<str>) -> Result<u64, Error> {
        let input = input.as_ref();
        self.accumulate(input).map_err(|error| {
            debug!(input, %error, "rejected base62 integer");
            error
        })
    }

    fn accumulate(&self, input: &str) -> Result<u64, Error> {
        const LIMIT: u64 = u64::MAX / BASE as u64;

        let mut result: u64 = 0;
        for (index, character) in input.chars().enumerate() {
            let digit = self.alphabet.decode(character, index)?;
            if result > LIMIT {
                return Err(Error::Overflow { index });
            }
            // The multiplication cannot wrap once past the check, the addition still can.
            result = (result * BASE as u64)
                .checked_add(digit as u64)
                .ok_or(Error::Overflow { index })?;
        }
        Ok(result)
    }

    /// Writes the minimal big-endian bytes of the value `input` represents into `output`.
    ///
    /// A zero value yields no bytes, so leading zero bytes given to the encoder are not restored.
    pub fn decode_bytes_into(&self, input: impl AsRef<str>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        let input = input.as_ref();
        self.accumulate_bytes(input, output.as_mut()).map_err(|error| {
            debug!(input, %error, "rejected base62 bytes");
            error
        })
    }

    fn accumulate_bytes(&self, input: &str, output: &mut [u8]) -> Result<usize, Error> {
        let mut output_index = 0;

        for (input_index, character) in input.chars().enumerate() {
            let mut carry = self.alphabet.decode(character, input_index)? as usize;

            for value in &mut output[..output_index] {
                carry += (*value as usize) * BASE;
                *value = (carry & 0xFF) as u8;
                carry >>= 8;
            }

            while carry > 0 {
                let value = output.get_mut(output_index).ok_or(Error::BufferTooSmall)?;
                *value = (carry & 0xFF) as u8;
                output_index += 1;
                carry >>= 8;
            }
        }

        output[..output_index].reverse();
        Ok(output_index)
    }

    pub fn decode_bytes(&self, input: impl AsRef<str>) -> Result<Vec<u8>, Error> {
        // Each digit is worth less than a byte, so the input length bounds the output.
        let mut output = vec![0u8; input.as_ref().len()];
        let len = self.decode_bytes_into(input, &mut output)?;
        output.truncate(len);
        Ok(output)
    }

    pub fn default() -> &'static Self {
        &DECODER
    }
}

const DECODER: Decoder = Decoder::new(&ALPHABET);

pub fn decode(input: impl AsRef<str>) -> Result<u64, Error> {
    Decoder::default().decode(input)
}

pub fn decode_bytes(input: impl AsRef<str>) -> Result<Vec<u8>, Error> {
    Decoder::default().decode_bytes(input)
}

pub fn decode_bytes_into(input: impl AsRef<str>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    Decoder::default().decode_bytes_into(input, output)
}

#[cfg(test)]
mod tests {
    use super::{Decoder, Error};
    use crate::base62::Alphabet;

    #[test]
    fn decode() {
        assert_eq!(super::decode(""), Ok(0));
        assert_eq!(super::decode("0"), Ok(0));
        assert_eq!(super::decode("1"), Ok(1));
        assert_eq!(super::decode("9"), Ok(9));
        assert_eq!(super::decode("A"), Ok(10));
        assert_eq!(super::decode("Z"), Ok(35));
        assert_eq!(super::decode("a"), Ok(36));
        assert_eq!(super::decode("z"), Ok(61));
        assert_eq!(super::decode("10"), Ok(62));
        assert_eq!(super::decode("11"), Ok(63));
        assert_eq!(super::decode("20"), Ok(124));
        assert_eq!(super::decode("0020"), Ok(124));
        assert_eq!(super::decode("8M0kX"), Ok(123456789));
        assert_eq!(super::decode("LygHa16AHYF"), Ok(u64::MAX));
        assert_eq!(super::decode(String::from("G7")), Ok(999));
    }

    #[test]
    fn decode_invalid_character() {
        assert_eq!(super::decode("ABC!"), Err(Error::InvalidCharacter { character: '!', index: 3 }));
        assert_eq!(super::decode(" 1"), Err(Error::InvalidCharacter { character: ' ', index: 0 }));
        assert_eq!(super::decode("1é2"), Err(Error::InvalidCharacter { character: 'é', index: 1 }));
        assert_eq!(super::decode("LygHa16AHYF!z"), Err(Error::InvalidCharacter { character: '!', index: 11 }));
    }

    #[test]
    fn decode_overflow() {
        assert_eq!(super::decode("LygHa16AHYFz"), Err(Error::Overflow { index: 11 }));
        assert_eq!(super::decode("LygHa16AHYF0"), Err(Error::Overflow { index: 11 }));
        assert_eq!(super::decode("LygHa16AHYG"), Err(Error::Overflow { index: 10 }));
        assert_eq!(super::decode("zzzzzzzzzzzz"), Err(Error::Overflow { index: 10 }));
        assert_eq!(super::decode("LygHa16AHYFz!"), Err(Error::Overflow { index: 11 }));
        assert_eq!(super::decode("00000000000000LygHa16AHYF"), Ok(u64::MAX));
    }

    #[test]
    fn decode_bytes() {
        assert_eq!(super::decode_bytes(""), Ok(vec![]));
        assert_eq!(super::decode_bytes("0"), Ok(vec![]));
        assert_eq!(super::decode_bytes("000"), Ok(vec![]));
        assert_eq!(super::decode_bytes("1"), Ok(vec![0x01]));
        assert_eq!(super::decode_bytes("HBL"), Ok(vec![0x01, 0x02, 0x03]));
        assert_eq!(super::decode_bytes("4fX27B"), Ok(vec![0xff, 0x00, 0xab, 0xcd]));
        assert_eq!(super::decode_bytes("529YuKie"), Ok(vec![0x10, 0x20, 0x30, 0x40, 0x50, 0x60]));
        assert_eq!(super::decode_bytes("GSymlCCOkCPLMyV0SL5xTrvcaDn"), Ok(b"simply a long string".to_vec()));
        assert_eq!(super::decode_bytes("LygHa16AHYF"), Ok(u64::MAX.to_be_bytes().to_vec()));
        assert_eq!(super::decode_bytes("LygHa16AHYG"), Ok(vec![0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]));
        assert_eq!(super::decode_bytes("abc!"), Err(Error::InvalidCharacter { character: '!', index: 3 }));
    }

    #[test]
    fn decode_bytes_into() {
        let mut output = [0u8; 3];
        assert_eq!(super::decode_bytes_into("HBL", &mut output), Ok(3));
        assert_eq!(output, [0x01, 0x02, 0x03]);

        let mut output = [0u8; 2];
        assert_eq!(super::decode_bytes_into("HBL", &mut output), Err(Error::BufferTooSmall));
    }

    #[test]
    fn custom_alphabet() {
        let alphabet = match Alphabet::new(b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ") {
            Ok(alphabet) => alphabet,
            Err(error) => panic!("{}", error),
        };
        let decoder = Decoder::new(&alphabet);
        assert_eq!(decoder.decode("a"), Ok(10));
        assert_eq!(decoder.decode("Z"), Ok(61));
        assert_eq!(decoder.decode_bytes("hbl"), Ok(vec![0x01, 0x02, 0x03]));
    }
}
