#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::wildcard_imports)]

/// CIGAR strings and soft clips.
pub mod cigar;
/// Data helpers, alphabets, and error handling.
pub mod data;
/// Hamming and Levenshtein distances.
pub mod distance;
/// HGVS protein notation.
pub mod hgvs;
/// Gene and pathway lookups from a local JSON mapping.
pub mod pathway;
/// Record types for I/O.
pub mod records;
/// Codon and amino acid translation.
pub mod translate;

/// Logging setup for the command-line tools.
pub mod logging;

/// Generate random sequences and codons.
#[cfg(feature = "rand")]
pub mod generate;

/// Common structures and traits re-exported
pub mod prelude {
    pub use crate::cigar::Cigar;
    pub use crate::data::err::{GetCode, OrFail, WithErrorContext};
    pub use crate::distance::{EditDistanceReport, hamming, levenshtein};
    pub use crate::hgvs::{protein_long_to_short, protein_short_to_long};
    pub use crate::pathway::PathwayMap;
    pub use crate::records::sam::{SamReader, SamRecord};
    pub use crate::translate::{
        AminoAcid, BatchPolicy, Codon, GeneticCode, Interpretation, Translation, Translator, collect_translations,
        convert_amino_acid_code,
    };
}
