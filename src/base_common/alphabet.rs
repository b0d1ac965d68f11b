use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    DuplicateCharacter { character: char, first: usize, second: usize },
    NonAsciiCharacter { character: u8, index: usize },
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DecodeError {
    InvalidCharacter { character: char, index: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateCharacter { character, first, second } => {
                write!(f, "Duplicate character '{}' at indexes {} and {}", character, first, second)
            }
            Self::NonAsciiCharacter { character, index } => write!(f, "Non-ascii character {:#02x} at index {}", character, index),
        }
    }
}

impl error::Error for DecodeError {}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCharacter { character, index } => write!(f, "Invalid character '{}' at index {}", character, index),
        }
    }
}

/// Ordered digit symbols together with their inverse lookup table.
///
/// Built by a `const fn`, so an alphabet bound to a `const` is complete before
/// any encode or decode call and is never mutated afterwards.
pub struct Alphabet<const N: usize> {
    encode: [u8; N],
    decode: [Option<u8>; 128],
}

impl<const N: usize> Alphabet<N> {
    pub fn encode(&self, value: usize) -> u8 {
        self.encode[value]
    }

    /// Digit value of `character`; `index` is its position in the input, used for error reporting.
    pub fn decode(&self, character: char, index: usize) -> Result<u8, DecodeError> {
        let value = if character.is_ascii() { self.decode[character as usize] } else { None };
        value.ok_or(DecodeError::InvalidCharacter { character, index })
    }

    pub const fn new(characters: &[u8; N]) -> Result<Self, Error> {
        let mut encode = [0u8; N];
        let mut decode: [Option<u8>; 128] = [None; 128];

        let mut index = 0;
        while index < encode.len() {
            let character = characters[index];
            if character >= 128 {
                return Err(Error::NonAsciiCharacter { index, character });
            }
            if let Some(v) = decode[character as usize] {
                return Err(Error::DuplicateCharacter {
                    character: character as char,
                    first: v as usize,
                    second: index,
                });
            }
            encode[index] = character;
            decode[character as usize] = Some(index as u8);
            index += 1;
        }

        Ok(Self { encode, decode })
    }

    pub const fn len(&self) -> usize {
        self.encode.len()
    }
}
