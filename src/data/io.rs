use super::err::{ErrorWithContext, WithErrorContext};
use std::{
    fs::File,
    io::{self, BufWriter, Read, Stdin, Stdout, Write},
    path::Path,
};

/// Either a file or `stdin`. A path of `-` selects `stdin`.
#[derive(Debug)]
pub enum ReadFileStdin {
    File(File),
    Stdin(Stdin),
}

impl ReadFileStdin {
    /// Opens `path` for reading, or `stdin` for `-`.
    ///
    /// ## Errors
    ///
    /// Failure to open the file, with the path added to the message.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, ErrorWithContext> {
        let path = path.as_ref();
        if path == Path::new("-") {
            Ok(ReadFileStdin::Stdin(io::stdin()))
        } else {
            File::open(path)
                .map(ReadFileStdin::File)
                .with_file_context("Failed to open input", path)
        }
    }
}

impl Read for ReadFileStdin {
    #[inline]
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            ReadFileStdin::File(f) => f.read(buf),
            ReadFileStdin::Stdin(s) => s.read(buf),
        }
    }
}

/// Either a buffered file or buffered `stdout`. A path of `-` selects
/// `stdout`.
#[derive(Debug)]
pub enum WriteFileStdout {
    File(BufWriter<File>),
    Stdout(BufWriter<Stdout>),
}

impl WriteFileStdout {
    /// Creates (or truncates) `path` for writing, or uses `stdout` for `-`.
    ///
    /// ## Errors
    ///
    /// Failure to create the file, with the path added to the message.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self, ErrorWithContext> {
        let path = path.as_ref();
        if path == Path::new("-") {
            Ok(WriteFileStdout::stdout())
        } else {
            File::create(path)
                .map(|f| WriteFileStdout::File(BufWriter::new(f)))
                .with_file_context("Failed to create output", path)
        }
    }

    #[must_use]
    pub fn stdout() -> Self {
        WriteFileStdout::Stdout(BufWriter::new(io::stdout()))
    }
}

impl Write for WriteFileStdout {
    #[inline]
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            WriteFileStdout::File(f) => f.write(buf),
            WriteFileStdout::Stdout(s) => s.write(buf),
        }
    }

    #[inline]
    fn flush(&mut self) -> io::Result<()> {
        match self {
            WriteFileStdout::File(f) => f.flush(),
            WriteFileStdout::Stdout(s) => s.flush(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn missing_file_names_the_path() {
        let err = ReadFileStdin::open("does/not/exist.sam").unwrap_err();
        assert!(err.to_string().contains("does/not/exist.sam"));
    }

    #[test]
    fn dash_is_stdin() {
        assert!(matches!(ReadFileStdin::open("-"), Ok(ReadFileStdin::Stdin(_))));
        assert!(matches!(WriteFileStdout::create("-"), Ok(WriteFileStdout::Stdout(_))));
    }
}
