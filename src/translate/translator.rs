use super::{AminoAcid, Codon, GeneticCode, TranslationError};
use crate::data::mappings::IS_CODON_BASE;
use std::fmt;

/// How a token handed to [`Translator::translate_as`] should be read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Interpretation {
    /// Codon first: a token made only of `A`, `C`, `G`, `T`, and `U` (any
    /// case) is a codon, anything else is an amino acid code. Under this rule
    /// the single-letter codes `A`, `C`, `G`, and `T` are read as (invalid)
    /// codons.
    #[default]
    Auto,
    /// Always read the token as a codon.
    Codon,
    /// Always read the token as a single- or three-letter amino acid code.
    #[value(name = "aa", alias = "amino-acid")]
    AminoAcid,
}

/// The full result for one token: the amino acid and every codon that
/// translates to it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Translation {
    pub amino_acid: AminoAcid,
    pub codons:     Vec<Codon>,
}

impl Translation {
    /// The upper case single-letter code.
    #[inline]
    #[must_use]
    pub fn single(&self) -> char {
        self.amino_acid.single_char()
    }

    /// The title case three-letter code.
    #[inline]
    #[must_use]
    pub fn three(&self) -> &'static str {
        self.amino_acid.three()
    }
}

/// Writes the tab-delimited row: single letter, three letter, and the
/// comma-joined codons.
impl fmt::Display for Translation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}\t{}\t", self.single(), self.three())?;
        for (i, codon) in self.codons.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{codon}")?;
        }
        Ok(())
    }
}

/// Translates between codons and amino acids using a borrowed
/// [`GeneticCode`].
///
/// ```
/// # use bioscripts::translate::{GeneticCode, Translator};
/// let code = GeneticCode::standard();
/// let translator = Translator::new(&code);
///
/// let met = translator.classify_and_translate("AUG").unwrap();
/// assert_eq!((met.single(), met.three()), ('M', "Met"));
/// assert_eq!(met.to_string(), "M\tMet\tATG");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Translator<'a> {
    code: &'a GeneticCode,
}

impl<'a> Translator<'a> {
    #[inline]
    #[must_use]
    pub fn new(code: &'a GeneticCode) -> Self {
        Translator { code }
    }

    /// The genetic code used for lookups.
    #[inline]
    #[must_use]
    pub fn genetic_code(&self) -> &'a GeneticCode {
        self.code
    }

    /// Translates a codon to its amino acid. `U` is accepted in place of `T`
    /// and case is ignored.
    ///
    /// ## Errors
    ///
    /// [`TranslationError::UnknownCodon`] if the normalized codon is not three
    /// bases from `ACGT`.
    #[inline]
    pub fn translate_codon(&self, codon: &str) -> Result<AminoAcid, TranslationError> {
        let codon: Codon = codon.parse()?;
        Ok(self.code.translate(codon))
    }

    /// All codons for a single- or three-letter amino acid code, in genetic
    /// code table order.
    ///
    /// ## Errors
    ///
    /// [`TranslationError::InvalidLength`] if the code is not 1 or 3
    /// characters, and [`TranslationError::UnknownAminoAcid`] if it is not a
    /// recognized code or no codon translates to it.
    pub fn codons_for(&self, amino_acid: &str) -> Result<&'a [Codon], TranslationError> {
        let aa: AminoAcid = amino_acid.parse()?;
        let codons = self.code.codons(aa);

        if codons.is_empty() {
            Err(TranslationError::UnknownAminoAcid(amino_acid.to_string()))
        } else {
            Ok(codons)
        }
    }

    /// Classifies a token as a codon or an amino acid code using
    /// [`Interpretation::Auto`] and returns the full [`Translation`].
    ///
    /// ## Errors
    ///
    /// Any [`TranslationError`] from the lookup the token was routed to.
    #[inline]
    pub fn classify_and_translate(&self, token: &str) -> Result<Translation, TranslationError> {
        self.translate_as(token, Interpretation::Auto)
    }

    /// Translates a token read according to `interpretation`.
    ///
    /// ## Errors
    ///
    /// Any [`TranslationError`] from the codon or amino acid lookup. An empty
    /// token has no bases outside `ACGTU`, so it is read as a codon and fails
    /// with [`TranslationError::UnknownCodon`] unless forced to
    /// [`Interpretation::AminoAcid`].
    pub fn translate_as(&self, token: &str, interpretation: Interpretation) -> Result<Translation, TranslationError> {
        let amino_acid = match interpretation {
            Interpretation::Auto if is_nucleotide_token(token) => self.translate_codon(token)?,
            Interpretation::Codon => self.translate_codon(token)?,
            Interpretation::Auto | Interpretation::AminoAcid => token.parse::<AminoAcid>()?,
        };

        let codons = self.code.codons(amino_acid);
        if codons.is_empty() {
            return Err(TranslationError::UnknownAminoAcid(token.to_string()));
        }

        Ok(Translation {
            amino_acid,
            codons: codons.to_vec(),
        })
    }

    /// Splits a comma-separated list and translates each token independently,
    /// in input order. Whitespace around tokens is ignored.
    ///
    /// The translator does not decide what to do with failures; see
    /// [`collect_translations`](super::collect_translations).
    #[must_use]
    pub fn translate_list(&self, input: &str, interpretation: Interpretation) -> Vec<Result<Translation, TranslationError>> {
        input
            .split(',')
            .map(|token| self.translate_as(token.trim(), interpretation))
            .collect()
    }
}

/// Whether every byte of the token is one of `ACGTU`, ignoring case. True for
/// the empty token.
#[inline]
#[must_use]
pub fn is_nucleotide_token(token: &str) -> bool {
    token.bytes().all(|b| IS_CODON_BASE[b as usize])
}
