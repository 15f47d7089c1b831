use crate::data::err::GetCode;
use std::{error::Error, fmt};

/// Error type for codon and amino acid lookups. Each variant keeps the token
/// that failed.
#[non_exhaustive]
#[derive(Clone, Eq, PartialEq, Hash)]
pub enum TranslationError {
    /// An amino acid code was neither 1 nor 3 characters long.
    InvalidLength(String),
    /// An amino acid code of the right length was not one of the 21 symbols.
    UnknownAminoAcid(String),
    /// A codon was not one of the 64 triples over `ACGT` (after `U` to `T`).
    UnknownCodon(String),
}

impl TranslationError {
    /// The token that could not be translated.
    #[inline]
    #[must_use]
    pub fn token(&self) -> &str {
        match self {
            TranslationError::InvalidLength(t)
            | TranslationError::UnknownAminoAcid(t)
            | TranslationError::UnknownCodon(t) => t,
        }
    }
}

impl fmt::Display for TranslationError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TranslationError::InvalidLength(t) => write!(
                f,
                "'{t}' does not seem to be an appropriate amino acid string (expected a 1 or 3 letter code)"
            ),
            TranslationError::UnknownAminoAcid(t) => write!(f, "Can't convert '{t}' to an amino acid"),
            TranslationError::UnknownCodon(t) => write!(f, "Can not translate codon '{t}' to an amino acid"),
        }
    }
}

impl fmt::Debug for TranslationError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl Error for TranslationError {}
impl GetCode for TranslationError {}
