//! Writes the value of one optional tag for every read in a SAM file.

use bioscripts::{
    data::{
        err::OrFail,
        io::{ReadFileStdin, WriteFileStdout},
    },
    logging::init_tracing,
    records::sam::SamReader,
};
use clap::Parser;
use std::{io::Write, path::PathBuf};

#[derive(Parser, Debug)]
#[command(name = "get_tag_info", version)]
#[command(about = "Write the value of a SAM tag for every read, one per line")]
struct Cli {
    /// SAM file to process (use - for stdin)
    sam: PathBuf,

    /// Two character tag to report, e.g. CS or NM
    #[arg(short, long, value_parser = parse_tag)]
    tag: String,

    /// Output file (use - for stdout)
    #[arg(short, long, default_value = "tags.txt")]
    output: PathBuf,
}

fn parse_tag(tag: &str) -> Result<String, String> {
    match tag.as_bytes() {
        [a, b] if a.is_ascii_alphabetic() && b.is_ascii_alphanumeric() => Ok(tag.to_string()),
        _ => Err(format!("'{tag}' is not a SAM tag (one letter then a letter or digit)")),
    }
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let reader = SamReader::new(ReadFileStdin::open(&cli.sam).unwrap_or_fail());
    let mut output = WriteFileStdout::create(&cli.output).unwrap_or_fail();

    let mut missing = 0usize;
    for record in reader {
        let record = record.unwrap_or_die(&format!("Could not read {}", cli.sam.display()));
        if let Some(value) = record.tag(&cli.tag) {
            writeln!(output, "{value}").unwrap_or_fail();
        } else {
            missing += 1;
            tracing::debug!(read = %record.qname, tag = %cli.tag, "Read has no tag");
        }
    }

    output.flush().unwrap_or_fail();

    if missing > 0 {
        tracing::warn!("{missing} reads did not have the {} tag", cli.tag);
    }
}
