use super::{AminoAcid, Codon, TranslationError};
use crate::data::{
    alphas::STD_GENETIC_CODE_AA,
    mappings::{NO_INDEX, TO_AMINO_ACID_INDEX},
};

/// The standard code resolved to [`AminoAcid`] values at compile time.
const STD_FORWARD: [AminoAcid; Codon::COUNT] = {
    let mut forward = [AminoAcid::STOP; Codon::COUNT];
    let mut i = 0;

    while i < Codon::COUNT {
        let index = TO_AMINO_ACID_INDEX[STD_GENETIC_CODE_AA[i] as usize];
        assert!(index != NO_INDEX, "The standard genetic code contains an invalid amino acid.");
        forward[i] = AminoAcid(index);
        i += 1;
    }
    forward
};

/// A genetic code: a total mapping from all 64 codons to the 21 amino acid
/// symbols, together with its inverse.
///
/// A [`GeneticCode`] is immutable once built. Build one at startup and lend it
/// to a [`Translator`](super::Translator).
///
/// ```
/// # use bioscripts::translate::{AminoAcid, GeneticCode};
/// let code = GeneticCode::standard();
/// let stops: Vec<String> = code.codons(AminoAcid::STOP).iter().map(ToString::to_string).collect();
/// assert_eq!(stops, ["TAA", "TAG", "TGA"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneticCode {
    forward:  [AminoAcid; Codon::COUNT],
    synonyms: [Vec<Codon>; AminoAcid::COUNT],
}

impl GeneticCode {
    /// The standard genetic code.
    #[must_use]
    pub fn standard() -> Self {
        Self::from_forward(STD_FORWARD)
    }

    /// Builds a genetic code from 64 single-letter amino acids listed in table
    /// order (`TTT`, `TTC`, `TTA`, `TTG`, `TCT`, ..., `GGG`). This is the layout
    /// of the NCBI translation tables, so alternative codes can be used.
    ///
    /// ## Errors
    ///
    /// [`TranslationError::UnknownAminoAcid`] if any entry is not one of the 21
    /// amino acid symbols.
    pub fn from_table(table: &[u8; Codon::COUNT]) -> Result<Self, TranslationError> {
        let mut forward = [AminoAcid::STOP; Codon::COUNT];

        for (slot, &aa) in forward.iter_mut().zip(table) {
            *slot = AminoAcid::from_single(aa)
                .ok_or_else(|| TranslationError::UnknownAminoAcid(char::from(aa).to_string()))?;
        }

        Ok(Self::from_forward(forward))
    }

    fn from_forward(forward: [AminoAcid; Codon::COUNT]) -> Self {
        let mut synonyms: [Vec<Codon>; AminoAcid::COUNT] = std::array::from_fn(|_| Vec::new());
        for (i, aa) in forward.iter().enumerate() {
            synonyms[aa.index()].push(Codon::from_table_index(i));
        }

        GeneticCode { forward, synonyms }
    }

    /// Translates a codon. Every codon has exactly one translation.
    #[inline]
    #[must_use]
    pub fn translate(&self, codon: Codon) -> AminoAcid {
        self.forward[codon.table_index()]
    }

    /// All codons translating to `amino_acid`, in table order rather than
    /// alphabetical order. May be empty for an alternative code.
    #[inline]
    #[must_use]
    pub fn codons(&self, amino_acid: AminoAcid) -> &[Codon] {
        &self.synonyms[amino_acid.index()]
    }

    /// Iterates over every codon and its translation in table order.
    pub fn iter(&self) -> impl Iterator<Item = (Codon, AminoAcid)> + '_ {
        self.forward
            .iter()
            .enumerate()
            .map(|(i, aa)| (Codon::from_table_index(i), *aa))
    }
}

impl Default for GeneticCode {
    #[inline]
    fn default() -> Self {
        Self::standard()
    }
}
