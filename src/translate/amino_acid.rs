use super::TranslationError;
use crate::data::{
    alphas::{AMINO_ACIDS_THREE_LETTER, AMINO_ACIDS_WITH_STOP_UC, GENETIC_CODE_BASE_ORDER},
    mappings::{NO_INDEX, TO_AMINO_ACID_INDEX, TO_GENETIC_CODE_INDEX},
};
use std::{fmt, str::FromStr};

/// One of the 20 standard amino acids or the stop signal.
///
/// Each [`AminoAcid`] has a single-letter code (`*` for stop) and a
/// three-letter code (`Ter` for stop), and the two are a bijection over the 21
/// symbols.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct AminoAcid(pub(crate) u8);

impl AminoAcid {
    /// The number of distinct symbols, including stop.
    pub const COUNT: usize = 21;

    /// The stop signal, `*` / `Ter`.
    pub const STOP: AminoAcid = AminoAcid(20);

    /// Looks up a single-letter code, ignoring case.
    #[inline]
    #[must_use]
    pub fn from_single(code: u8) -> Option<Self> {
        let index = TO_AMINO_ACID_INDEX[code as usize];
        (index != NO_INDEX).then_some(AminoAcid(index))
    }

    /// Looks up a three-letter code, ignoring case (`ala`, `ALA`, and `Ala`
    /// are all alanine).
    #[must_use]
    pub fn from_three(code: &[u8]) -> Option<Self> {
        if code.len() != 3 {
            return None;
        }

        AMINO_ACIDS_THREE_LETTER
            .iter()
            .position(|three| three.as_bytes().eq_ignore_ascii_case(code))
            // There are only 21 codes
            .and_then(|i| u8::try_from(i).ok())
            .map(AminoAcid)
    }

    /// The upper case single-letter code as a byte.
    #[inline]
    #[must_use]
    pub fn single(self) -> u8 {
        AMINO_ACIDS_WITH_STOP_UC[self.index()]
    }

    /// The upper case single-letter code.
    #[inline]
    #[must_use]
    pub fn single_char(self) -> char {
        char::from(self.single())
    }

    /// The title case three-letter code.
    #[inline]
    #[must_use]
    pub fn three(self) -> &'static str {
        AMINO_ACIDS_THREE_LETTER[self.index()]
    }

    #[inline]
    #[must_use]
    pub fn is_stop(self) -> bool {
        self == AminoAcid::STOP
    }

    /// Iterates over all 21 symbols in alphabet order, with stop last.
    pub fn all() -> impl Iterator<Item = AminoAcid> {
        (0..Self::COUNT).filter_map(|i| u8::try_from(i).ok()).map(AminoAcid)
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl FromStr for AminoAcid {
    type Err = TranslationError;

    /// Parses a single- or three-letter code, ignoring case.
    fn from_str(code: &str) -> Result<Self, Self::Err> {
        let found = match code.chars().count() {
            1 => code.bytes().next().and_then(AminoAcid::from_single),
            3 => AminoAcid::from_three(code.as_bytes()),
            _ => return Err(TranslationError::InvalidLength(code.to_string())),
        };

        found.ok_or_else(|| TranslationError::UnknownAminoAcid(code.to_string()))
    }
}

impl fmt::Display for AminoAcid {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.single_char())
    }
}

impl fmt::Debug for AminoAcid {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.three())
    }
}

/// Converts a single-letter amino acid code to its three-letter code, or a
/// three-letter code to its single-letter code.
///
/// Case is ignored on input. Output uses upper case for single letters and
/// title case for three letters.
///
/// ```
/// # use bioscripts::translate::convert_amino_acid_code;
/// assert_eq!(convert_amino_acid_code("m").unwrap(), "Met");
/// assert_eq!(convert_amino_acid_code("TER").unwrap(), "*");
/// assert!(convert_amino_acid_code("XY").is_err());
/// ```
///
/// ## Errors
///
/// [`TranslationError::InvalidLength`] if `code` is not 1 or 3 characters,
/// and [`TranslationError::UnknownAminoAcid`] if it is not one of the 21
/// recognized codes.
pub fn convert_amino_acid_code(code: &str) -> Result<String, TranslationError> {
    let amino_acid: AminoAcid = code.parse()?;

    if code.chars().count() == 1 {
        Ok(amino_acid.three().to_string())
    } else {
        Ok(amino_acid.single_char().to_string())
    }
}

/// A codon of three upper case DNA bases.
///
/// Construction normalizes case and RNA `U` to `T`, so every [`Codon`] is one
/// of the 64 triples over `ACGT`.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Codon(pub(crate) [u8; 3]);

impl Codon {
    /// The number of distinct codons.
    pub const COUNT: usize = 64;

    /// Gets the codon as bytes.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; 3] {
        &self.0
    }

    /// The position of the codon in the genetic code table, which is laid out
    /// over the base ordering `T`, `C`, `A`, `G`.
    #[inline]
    #[must_use]
    pub fn table_index(&self) -> usize {
        let [a, b, c] = self.0.map(|base| TO_GENETIC_CODE_INDEX[base as usize] as usize);
        a * 16 + b * 4 + c
    }

    /// The codon at position `index` of the genetic code table.
    ///
    /// ## Panics
    ///
    /// `index` must be less than [`Codon::COUNT`].
    #[inline]
    #[must_use]
    pub(crate) const fn from_table_index(index: usize) -> Self {
        assert!(index < Self::COUNT);
        Codon([
            GENETIC_CODE_BASE_ORDER[index / 16],
            GENETIC_CODE_BASE_ORDER[(index / 4) % 4],
            GENETIC_CODE_BASE_ORDER[index % 4],
        ])
    }
}

impl TryFrom<&[u8]> for Codon {
    type Error = TranslationError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let unknown = || TranslationError::UnknownCodon(String::from_utf8_lossy(bytes).into_owned());

        let [a, b, c] = <[u8; 3]>::try_from(bytes).map_err(|_| unknown())?;
        let mut index = 0;
        for base in [a, b, c] {
            let i = TO_GENETIC_CODE_INDEX[base as usize];
            if i == NO_INDEX {
                return Err(unknown());
            }
            index = index * 4 + i as usize;
        }

        Ok(Codon::from_table_index(index))
    }
}

impl FromStr for Codon {
    type Err = TranslationError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Codon::try_from(s.as_bytes())
    }
}

impl fmt::Display for Codon {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let [a, b, c] = self.0.map(char::from);
        write!(f, "{a}{b}{c}")
    }
}

impl fmt::Debug for Codon {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{self}")
    }
}
