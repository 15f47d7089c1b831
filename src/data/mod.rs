//! ## Shared data helpers
//!
//! Alphabets and byte lookup tables used across the crate, plus the error
//! plumbing used by the command-line tools.
//!
//! ## Errors
//!
//! The library does not adopt an error handling crate. Lookups return
//! enum-style errors such as [`TranslationError`] or [`CigarError`] that can
//! be matched on or displayed, while file and record parsing uses
//! [`std::io::Error`] with [`ErrorKind::InvalidData`]. All of them implement
//! [`GetCode`], so a binary can finish with [`unwrap_or_fail`] or
//! [`unwrap_or_die`] to print the message and exit with a status code.
//!
//! [`TranslationError`]: crate::translate::TranslationError
//! [`CigarError`]: crate::cigar::CigarError
//! [`ErrorKind::InvalidData`]: std::io::ErrorKind::InvalidData
//! [`GetCode`]: err::GetCode
//! [`unwrap_or_fail`]: err::OrFail::unwrap_or_fail
//! [`unwrap_or_die`]: err::OrFail::unwrap_or_die

#[cfg(feature = "fuzzing")]
mod arbitrary;
/// A module with error types and convenience traits for handling [`Result`].
pub mod err;
/// Reading from a file or `stdin`, and writing to a file or `stdout`.
pub mod io;

/// A private module for helper alphabets and maps that can be used within
/// public methods.
pub(crate) mod constants;

pub(crate) use constants::{alphas, mappings};
