use crate::data::alphas::{AMINO_ACIDS_WITH_STOP_UC, CODON_BASES, GENETIC_CODE_BASE_ORDER};

/// Marks an invalid entry in the index mappings below.
pub(crate) const NO_INDEX: u8 = u8::MAX;

/// A boolean mapping of the bytes allowed in a codon (`ACGTU`, either case).
/// Used to decide whether a token should be read as a codon.
pub(crate) const IS_CODON_BASE: [bool; 256] = make_is_alpha_mapping(CODON_BASES);

/// Maps a nucleotide byte to its position in the genetic code base ordering
/// (`T`, `C`, `A`, `G`). `U` is treated as `T` and case is ignored. All other
/// bytes map to [`NO_INDEX`].
#[allow(clippy::cast_possible_truncation)]
pub(crate) const TO_GENETIC_CODE_INDEX: [u8; 256] = {
    let mut v = [NO_INDEX; 256];
    let mut i = 0;

    while i < GENETIC_CODE_BASE_ORDER.len() {
        let b = GENETIC_CODE_BASE_ORDER[i];
        // Cannot truncate, there are only four bases
        v[b as usize] = i as u8;
        v[b.to_ascii_lowercase() as usize] = i as u8;
        i += 1;
    }

    v[b'U' as usize] = v[b'T' as usize];
    v[b'u' as usize] = v[b'T' as usize];
    v
};

/// Maps a single-letter amino acid (either case, or `*`) to its index in the
/// 21-symbol alphabet. All other bytes map to [`NO_INDEX`].
#[allow(clippy::cast_possible_truncation)]
pub(crate) const TO_AMINO_ACID_INDEX: [u8; 256] = {
    let mut v = [NO_INDEX; 256];
    let mut i = 0;

    while i < AMINO_ACIDS_WITH_STOP_UC.len() {
        let b = AMINO_ACIDS_WITH_STOP_UC[i];
        v[b as usize] = i as u8;
        v[b.to_ascii_lowercase() as usize] = i as u8;
        i += 1;
    }
    v
};

/// A boolean mapping of the CIGAR operations (not counting `*`).
pub(crate) const IS_CIGAR_OP: [bool; 256] = make_is_alpha_mapping(b"MDNX=ISHP");

/// Utility function for building *is alpha*-like maps
const fn make_is_alpha_mapping<const N: usize>(alpha: &[u8; N]) -> [bool; 256] {
    let mut mapping = [false; 256];
    let mut i = 0;

    while i < N {
        mapping[alpha[i] as usize] = true;
        i += 1;
    }
    mapping
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn genetic_code_index_ignores_case_and_rna() {
        for (b, expected) in [(b'T', 0), (b'c', 1), (b'A', 2), (b'g', 3), (b'U', 0), (b'u', 0)] {
            assert_eq!(TO_GENETIC_CODE_INDEX[b as usize], expected);
        }

        for b in 0..=u8::MAX {
            if !IS_CODON_BASE[b as usize] {
                assert_eq!(TO_GENETIC_CODE_INDEX[b as usize], NO_INDEX);
            }
        }
    }

    #[test]
    fn amino_acid_index() {
        assert_eq!(TO_AMINO_ACID_INDEX[b'A' as usize], 0);
        assert_eq!(TO_AMINO_ACID_INDEX[b'y' as usize], 19);
        assert_eq!(TO_AMINO_ACID_INDEX[b'*' as usize], 20);
        assert_eq!(TO_AMINO_ACID_INDEX[b'X' as usize], NO_INDEX);
        assert_eq!(TO_AMINO_ACID_INDEX[b'B' as usize], NO_INDEX);
    }

    #[test]
    fn cigar_ops() {
        let ops: Vec<u8> = (0..=u8::MAX).filter(|b| IS_CIGAR_OP[*b as usize]).collect();
        assert_eq!(ops, b"=DHIMNPSX");
    }
}
