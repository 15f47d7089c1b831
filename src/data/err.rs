use std::fmt::Display;

/// Trait for specifying getting exit codes from errors.
pub trait GetCode {
    fn get_code(&self) -> i32 {
        1
    }
}

impl GetCode for std::io::Error {
    #[inline]
    fn get_code(&self) -> i32 {
        self.raw_os_error().unwrap_or(1)
    }
}

/// Trait for providing more graceful [`expect()`](std::result::Result::expect)
/// behavior but with a status code provided by [`GetCode`].
///
/// The command-line tools use this as their last stop for errors: the message
/// goes to `stderr` and the process exits with the error's code.
pub trait OrFail<T> {
    fn unwrap_or_fail(self) -> T;
    fn unwrap_or_die(self, msg: &str) -> T;
}

impl<T, E> OrFail<T> for Result<T, E>
where
    E: GetCode + Display,
{
    fn unwrap_or_fail(self) -> T {
        match self {
            Ok(result) => result,
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(e.get_code());
            }
        }
    }

    fn unwrap_or_die(self, msg: &str) -> T {
        match self {
            Ok(result) => result,
            Err(e) => {
                eprintln!("Error: {msg}\n\n{e}");
                std::process::exit(e.get_code());
            }
        }
    }
}

/// Adds context to an [`std::io::Error`] while keeping the original error
/// available through [`Error::source`](std::error::Error::source).
#[derive(Debug)]
pub struct ErrorWithContext {
    description: String,
    source:      std::io::Error,
}

impl ErrorWithContext {
    #[inline]
    #[must_use]
    pub fn new(description: impl Into<String>, source: std::io::Error) -> Self {
        ErrorWithContext {
            description: description.into(),
            source,
        }
    }
}

impl Display for ErrorWithContext {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}\n\nCaused by:\n    {}", self.description, self.source)
    }
}

impl std::error::Error for ErrorWithContext {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

impl GetCode for ErrorWithContext {
    #[inline]
    fn get_code(&self) -> i32 {
        self.source.get_code()
    }
}

/// Extension trait for attaching a description to [`std::io::Result`].
pub trait WithErrorContext<T> {
    /// Wraps the error with a message naming the file that was being read.
    ///
    /// ## Errors
    ///
    /// Returns the original error, wrapped, if `self` is `Err`.
    fn with_file_context(self, action: &str, path: impl AsRef<std::path::Path>) -> Result<T, ErrorWithContext>;
}

impl<T> WithErrorContext<T> for std::io::Result<T> {
    #[inline]
    fn with_file_context(self, action: &str, path: impl AsRef<std::path::Path>) -> Result<T, ErrorWithContext> {
        self.map_err(|e| ErrorWithContext::new(format!("{action}: {}", path.as_ref().display()), e))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn context_keeps_source() {
        let result: std::io::Result<()> = Err(Error::new(ErrorKind::NotFound, "missing"));
        let err = result.with_file_context("Failed to open", "counts.txt").unwrap_err();

        assert!(err.to_string().starts_with("Failed to open: counts.txt"));
        assert_eq!(std::error::Error::source(&err).unwrap().to_string(), "missing");
        assert_eq!(err.get_code(), 1);
    }

    #[test]
    fn os_errors_use_os_code() {
        let err = Error::from_raw_os_error(2);
        assert_eq!(err.get_code(), 2);
    }
}
