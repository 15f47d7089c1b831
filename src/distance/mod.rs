//! ## Edit distances
//!
//! String distances between sequences, and the report comparing every
//! sequence of a counts file to the most abundant one.

mod report;

#[cfg(test)]
mod test;

pub use report::*;

/// Calculates the number of differences at the byte (or base/residue) level.
/// Hamming distance is only defined for sequences of equal length, so `None`
/// is returned otherwise.
///
/// # Example
/// ```
/// use bioscripts::distance::hamming;
///
/// let s1 = b"ATGCATCGATCGATCGATCGATCGATCGATGC";
/// let s2 = b"ATGCATnGATCGATCGATCGAnCGATCGATnC";
///
/// assert_eq!(hamming(s1, s2), Some(3));
/// assert_eq!(hamming(b"ACGT", b"ACG"), None);
/// ```
#[must_use]
pub fn hamming(x: &[u8], y: &[u8]) -> Option<usize> {
    (x.len() == y.len()).then(|| x.iter().zip(y).filter(|(a, b)| a != b).count())
}

/// The Levenshtein (edit) distance: the minimum number of single character
/// insertions, deletions, and substitutions turning `x` into `y`.
///
/// # Example
/// ```
/// use bioscripts::distance::levenshtein;
///
/// assert_eq!(levenshtein("kitten", "sitting"), 3);
/// ```
#[inline]
#[must_use]
pub fn levenshtein(x: &str, y: &str) -> usize {
    strsim::levenshtein(x, y)
}
