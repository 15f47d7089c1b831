//! ## Codon and amino acid translation
//!
//! Converts between three representations of a residue: the single-letter
//! amino acid code, the three-letter code, and the set of codons that encode
//! it under a [`GeneticCode`].
//!
//! The genetic code is an ordinary value. Build it once, then lend it to a
//! [`Translator`]:
//!
//! ```
//! # use bioscripts::translate::*;
//! let code = GeneticCode::standard();
//! let translator = Translator::new(&code);
//!
//! let rows = translator.translate_list("ATG,Trp,*", Interpretation::Auto);
//! let rows = collect_translations(rows, BatchPolicy::Abort).unwrap();
//!
//! let singles: String = rows.iter().map(Translation::single).collect();
//! assert_eq!(singles, "MW*");
//! ```
//!
//! ## Codons versus single letters
//!
//! The nucleotide alphabet overlaps the amino acid alphabet (`A`, `C`, `G`,
//! and `T` are valid in both). Automatic classification always prefers the
//! codon reading for tokens made only of `ACGTU`, so `"A"` fails as a
//! one-base codon rather than becoming alanine. Pass
//! [`Interpretation::AminoAcid`] to read such tokens as amino acids.

mod amino_acid;
mod batch;
mod error;
mod genetic_code;
mod translator;


pub use amino_acid::*;
pub use batch::*;
pub use error::*;
pub use genetic_code::*;
pub use translator::*;
