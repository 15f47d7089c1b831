use crate::data::err::GetCode;
use std::{error::Error, fmt};

/// Why a CIGAR field from a SAM line could not be parsed. Offsets are 0-based
/// byte positions in the trimmed field.
#[non_exhaustive]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum CigarError {
    /// A byte that is neither a digit nor one of `MIDNSHP=X`.
    InvalidOperation { op: u8, offset: usize },
    /// An operation whose length is zero, such as `0M`.
    IncZero { offset: usize },
    IncOverflow,
    /// An operation without a length, such as the `M` in `M10`.
    MissingInc { offset: usize },
    /// A trailing length without an operation, such as `10M5`.
    MissingOp,
}

impl CigarError {
    /// The byte offset of the failure, when it points at a single operation.
    #[must_use]
    pub fn offset(&self) -> Option<usize> {
        match *self {
            CigarError::InvalidOperation { offset, .. }
            | CigarError::IncZero { offset }
            | CigarError::MissingInc { offset } => Some(offset),
            CigarError::IncOverflow | CigarError::MissingOp => None,
        }
    }
}

impl fmt::Display for CigarError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            CigarError::InvalidOperation { op, offset } => write!(
                f,
                "unknown CIGAR operation '{}' at position {offset} (expected one of M, I, D, N, S, H, P, =, X)",
                op.escape_ascii()
            ),
            CigarError::IncZero { offset } => write!(f, "zero-length CIGAR operation at position {offset}"),
            CigarError::IncOverflow => write!(f, "CIGAR operation length exceeds {}", usize::MAX),
            CigarError::MissingInc { offset } => write!(f, "CIGAR operation at position {offset} has no length"),
            CigarError::MissingOp => f.write_str("CIGAR ends with a length but no operation"),
        }
    }
}

impl fmt::Debug for CigarError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl Error for CigarError {}
impl GetCode for CigarError {}
