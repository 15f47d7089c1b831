/// Nucleotide bases accepted when reading a codon, including RNA `U` and
/// lowercase.
pub(crate) const CODON_BASES: &[u8; 10] = b"acgtuACGTU";

/// The base ordering used to lay out the standard genetic code table. Codon
/// `i` of the table is `TCAG[i / 16]`, `TCAG[(i / 4) % 4]`, `TCAG[i % 4]`.
pub(crate) const GENETIC_CODE_BASE_ORDER: &[u8; 4] = b"TCAG";

/// The standard genetic code, one amino acid per codon in
/// [`GENETIC_CODE_BASE_ORDER`] order.
pub(crate) const STD_GENETIC_CODE_AA: &[u8; 64] = b"FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG";

/// The 20 standard amino acids and the stop symbol, in upper case.
pub(crate) const AMINO_ACIDS_WITH_STOP_UC: &[u8; 21] = b"ACDEFGHIKLMNPQRSTVWY*";

/// Three-letter amino acid codes, parallel to [`AMINO_ACIDS_WITH_STOP_UC`].
pub(crate) const AMINO_ACIDS_THREE_LETTER: [&str; 21] = [
    "Ala", "Cys", "Asp", "Glu", "Phe", "Gly", "His", "Ile", "Lys", "Leu", "Met", "Asn", "Pro", "Gln", "Arg", "Ser", "Thr",
    "Val", "Trp", "Tyr", "Ter",
];
