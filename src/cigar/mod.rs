//! ## CIGAR strings and soft clips
//!
//! A validated [`Cigar`] and the queries needed to pull soft-clipped bases
//! out of a read.

use crate::data::mappings::IS_CIGAR_OP;
use std::{fmt, str::FromStr};

mod error;

#[cfg(test)]
mod test;

pub use error::*;

/// A [CIGAR string] of length-opcode pairs used in sequence alignment. The
/// empty CIGAR is displayed as `*`.
///
/// [CIGAR string]: https://en.wikipedia.org/wiki/Sequence_alignment#CIGAR_Format
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Cigar(pub(crate) Vec<u8>);

/// A single increment and operation of a [`Cigar`], such as `5S`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ciglet {
    pub inc: usize,
    pub op:  u8,
}

impl Cigar {
    /// Creates a new empty CIGAR string
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Cigar(Vec::new())
    }

    /// Gets the CIGAR as bytes (empty for `*`).
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator of [`Ciglet`] for the CIGAR.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> CigletIterator<'_> {
        CigletIterator { buffer: &self.0 }
    }

    /// The length of the soft clip ending the CIGAR, or `None` if the last
    /// operation is not `S`. Only the final soft-clipped chunk is counted.
    ///
    /// ```
    /// # use bioscripts::cigar::Cigar;
    /// let cigar: Cigar = "3S10M5S".parse().unwrap();
    /// assert_eq!(cigar.trailing_soft_clip(), Some(5));
    /// ```
    #[inline]
    #[must_use]
    pub fn trailing_soft_clip(&self) -> Option<usize> {
        self.iter().last().filter(|c| c.op == b'S').map(|c| c.inc)
    }

    /// The length of the soft clip starting the CIGAR, or `None` if the first
    /// operation is not `S`.
    #[inline]
    #[must_use]
    pub fn leading_soft_clip(&self) -> Option<usize> {
        self.iter().next().filter(|c| c.op == b'S').map(|c| c.inc)
    }

    /// The read bases covered by the trailing soft clip. Empty if there is no
    /// trailing clip; the whole sequence if the clip is longer than it.
    ///
    /// ```
    /// # use bioscripts::cigar::Cigar;
    /// let cigar: Cigar = "7M3S".parse().unwrap();
    /// assert_eq!(cigar.soft_clipped_tail(b"ACGTACGTAC"), b"TAC");
    /// ```
    #[must_use]
    pub fn soft_clipped_tail<'a>(&self, seq: &'a [u8]) -> &'a [u8] {
        match self.trailing_soft_clip() {
            Some(clip) => &seq[seq.len().saturating_sub(clip)..],
            None => &[],
        }
    }

    /// The read bases covered by the leading soft clip.
    #[must_use]
    pub fn soft_clipped_head<'a>(&self, seq: &'a [u8]) -> &'a [u8] {
        match self.leading_soft_clip() {
            Some(clip) => &seq[..clip.min(seq.len())],
            None => &[],
        }
    }
}

impl<'a> IntoIterator for &'a Cigar {
    type Item = Ciglet;
    type IntoIter = CigletIterator<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Cigar {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.0.is_empty() {
            f.write_str("*")
        } else {
            f.write_str(&String::from_utf8_lossy(&self.0))
        }
    }
}

impl fmt::Debug for Cigar {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl TryFrom<&[u8]> for Cigar {
    type Error = CigarError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let bytes = bytes.trim_ascii();
        if bytes == b"*" {
            return Ok(Cigar::new());
        }

        let mut num: usize = 0;
        let mut has_number = false;

        for (offset, &b) in bytes.iter().enumerate() {
            if b.is_ascii_digit() {
                num = num
                    .checked_mul(10)
                    .and_then(|n| n.checked_add((b - b'0') as usize))
                    .ok_or(CigarError::IncOverflow)?;
                has_number = true;
            } else if IS_CIGAR_OP[b as usize] {
                if !has_number {
                    return Err(CigarError::MissingInc { offset });
                }
                if num == 0 {
                    return Err(CigarError::IncZero { offset });
                }
                num = 0;
                has_number = false;
            } else {
                return Err(CigarError::InvalidOperation { op: b, offset });
            }
        }

        if has_number {
            return Err(CigarError::MissingOp);
        }

        Ok(Cigar(bytes.to_vec()))
    }
}

impl FromStr for Cigar {
    type Err = CigarError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Cigar::try_from(s.as_bytes())
    }
}

/// An iterator over the [`Ciglet`] values of a validated [`Cigar`].
#[derive(Clone, Debug)]
pub struct CigletIterator<'a> {
    buffer: &'a [u8],
}

impl Iterator for CigletIterator<'_> {
    type Item = Ciglet;

    fn next(&mut self) -> Option<Self::Item> {
        let mut inc: usize = 0;

        for (index, &b) in self.buffer.iter().enumerate() {
            if b.is_ascii_digit() {
                inc = inc.checked_mul(10)?.checked_add(usize::from(b - b'0'))?;
            } else if IS_CIGAR_OP[b as usize] && inc > 0 {
                self.buffer = &self.buffer[index + 1..];
                return Some(Ciglet { inc, op: b });
            } else {
                self.buffer = &[];
                return None;
            }
        }

        self.buffer = &[];
        None
    }
}

impl std::iter::FusedIterator for CigletIterator<'_> {}
