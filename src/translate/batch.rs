use super::{Translation, TranslationError};
use std::io::{self, Write};

/// The header of the translation table written by [`write_table`].
pub const TABLE_HEADER: &str = "Single\tThree\tCodon(s)";

/// What a caller does when one token of a list fails to translate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum BatchPolicy {
    /// Stop at the first failure and return its error.
    #[default]
    Abort,
    /// Report the failure as a warning and keep going.
    Skip,
}

/// Applies a [`BatchPolicy`] to per-token results, such as those from
/// [`Translator::translate_list`](super::Translator::translate_list).
///
/// ## Errors
///
/// Under [`BatchPolicy::Abort`], the first [`TranslationError`] encountered.
/// Under [`BatchPolicy::Skip`] this never fails; skipped tokens are logged.
pub fn collect_translations<I>(results: I, policy: BatchPolicy) -> Result<Vec<Translation>, TranslationError>
where
    I: IntoIterator<Item = Result<Translation, TranslationError>>, {
    let mut translations = Vec::new();

    for result in results {
        match result {
            Ok(translation) => translations.push(translation),
            Err(e) if policy == BatchPolicy::Skip => {
                tracing::warn!(token = e.token(), "Skipping: {e}");
            }
            Err(e) => return Err(e),
        }
    }

    Ok(translations)
}

/// Writes [`TABLE_HEADER`] followed by one tab-delimited row per
/// translation.
///
/// ## Errors
///
/// Any IO error from `writer`.
pub fn write_table<W: Write>(mut writer: W, translations: &[Translation]) -> io::Result<()> {
    writeln!(writer, "{TABLE_HEADER}")?;
    for translation in translations {
        writeln!(writer, "{translation}")?;
    }
    writer.flush()
}
