//! ## HGVS protein notation
//!
//! Rewrites HGVSp descriptions between the short, single-letter form
//! (`p.V600E`) and the long, three-letter form (`p.Val600Glu`). Only residue
//! symbols change; positions, keywords such as `del`, `ins`, `dup`, `fs`, and
//! `ext`, and any accession prefix (`NP_004324.2:p.`) are copied through.

use crate::{data::err::GetCode, translate::AminoAcid};
use std::{error::Error, fmt};

#[cfg(test)]
mod test;

#[non_exhaustive]
#[derive(Clone, Eq, PartialEq, Hash)]
pub enum HgvsError {
    /// The description was empty.
    Empty,
    /// An upper case letter (or three-letter code) that is not an amino acid
    /// was found at the given byte offset.
    UnknownResidue { residue: String, offset: usize },
}

impl fmt::Display for HgvsError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            HgvsError::Empty => write!(f, "The HGVSp description was empty"),
            HgvsError::UnknownResidue { residue, offset } => {
                write!(f, "'{residue}' at position {offset} is not an amino acid")
            }
        }
    }
}

impl fmt::Debug for HgvsError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl Error for HgvsError {}
impl GetCode for HgvsError {}

/// Splits off everything up to and including the `p.` marker. Descriptions
/// without a marker are treated as a bare change.
fn split_prefix(hgvs: &str) -> (&str, &str) {
    if hgvs.starts_with("p.") {
        hgvs.split_at(2)
    } else if let Some(i) = hgvs.find(":p.") {
        hgvs.split_at(i + 3)
    } else {
        ("", hgvs)
    }
}

/// Reads a three-letter code at the start of `bytes`: one upper case letter
/// followed by two lower case letters.
fn three_letter_at(bytes: &[u8]) -> Option<AminoAcid> {
    match bytes {
        [a, b, c, ..] if a.is_ascii_uppercase() && b.is_ascii_lowercase() && c.is_ascii_lowercase() => {
            AminoAcid::from_three(&[*a, *b, *c])
        }
        _ => None,
    }
}

/// Converts an HGVSp description from single-letter to three-letter residues.
/// Stop (`*`) becomes `Ter`. Residues that are already written with
/// three-letter codes are left alone, so mixed input is accepted.
///
/// ```
/// # use bioscripts::hgvs::protein_short_to_long;
/// assert_eq!(protein_short_to_long("p.V600E").unwrap(), "p.Val600Glu");
/// assert_eq!(protein_short_to_long("NP_000537.3:p.R175*").unwrap(), "NP_000537.3:p.Arg175Ter");
/// assert_eq!(protein_short_to_long("p.E746_A750del").unwrap(), "p.Glu746_Ala750del");
/// ```
///
/// ## Errors
///
/// [`HgvsError::Empty`] for empty input and [`HgvsError::UnknownResidue`] for
/// an upper case letter that is not an amino acid (such as `X` or `B`).
pub fn protein_short_to_long(hgvs: &str) -> Result<String, HgvsError> {
    if hgvs.is_empty() {
        return Err(HgvsError::Empty);
    }

    let (prefix, change) = split_prefix(hgvs);
    let bytes = change.as_bytes();
    let mut out = String::with_capacity(hgvs.len() * 2);
    out.push_str(prefix);

    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];

        if let Some(aa) = three_letter_at(&bytes[i..]) {
            out.push_str(aa.three());
            i += 3;
            continue;
        }

        if b.is_ascii_uppercase() || b == b'*' {
            let aa = AminoAcid::from_single(b).ok_or_else(|| HgvsError::UnknownResidue {
                residue: char::from(b).to_string(),
                offset:  prefix.len() + i,
            })?;
            out.push_str(aa.three());
            i += 1;
            continue;
        }

        // Copy everything else, which may include multi-byte characters
        let next = change[i..].chars().next().map_or(1, char::len_utf8);
        out.push_str(&change[i..i + next]);
        i += next;
    }

    Ok(out)
}

/// Converts an HGVSp description from three-letter to single-letter residues.
/// `Ter` becomes `*`. Single-letter residues are left alone.
///
/// ```
/// # use bioscripts::hgvs::protein_long_to_short;
/// assert_eq!(protein_long_to_short("p.Val600Glu").unwrap(), "p.V600E");
/// assert_eq!(protein_long_to_short("p.Gln61Ter").unwrap(), "p.Q61*");
/// ```
///
/// ## Errors
///
/// [`HgvsError::Empty`] for empty input and [`HgvsError::UnknownResidue`] for
/// an upper case letter that starts neither a three-letter code nor a
/// single-letter amino acid.
pub fn protein_long_to_short(hgvs: &str) -> Result<String, HgvsError> {
    if hgvs.is_empty() {
        return Err(HgvsError::Empty);
    }

    let (prefix, change) = split_prefix(hgvs);
    let bytes = change.as_bytes();
    let mut out = String::with_capacity(hgvs.len());
    out.push_str(prefix);

    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];

        if let Some(aa) = three_letter_at(&bytes[i..]) {
            out.push(aa.single_char());
            i += 3;
            continue;
        }

        if b.is_ascii_uppercase() && AminoAcid::from_single(b).is_none() {
            let end = (i + 3).min(bytes.len());
            return Err(HgvsError::UnknownResidue {
                residue: String::from_utf8_lossy(&bytes[i..end]).into_owned(),
                offset:  prefix.len() + i,
            });
        }

        let next = change[i..].chars().next().map_or(1, char::len_utf8);
        out.push_str(&change[i..i + next]);
        i += next;
    }

    Ok(out)
}
