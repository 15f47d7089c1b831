//! Reads a counts file of `SEQUENCE COUNT` lines and writes the Hamming and
//! Levenshtein distance of every sequence to the first (most abundant) one.

use bioscripts::{
    data::{
        err::OrFail,
        io::{ReadFileStdin, WriteFileStdout},
    },
    distance::EditDistanceReport,
    logging::init_tracing,
};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "calc_hamming", version)]
#[command(about = "Hamming and Levenshtein distances of each sequence in a counts file to the first sequence")]
struct Cli {
    /// Counts file with one 'SEQUENCE COUNT' pair per line, most abundant first
    /// (use - for stdin)
    counts: PathBuf,

    /// Output CSV (use - for stdout)
    #[arg(short, long, default_value = "edit_distances.csv")]
    output: PathBuf,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let input = ReadFileStdin::open(&cli.counts).unwrap_or_fail();
    let report = EditDistanceReport::from_reader(input).unwrap_or_die(&format!(
        "Could not read the counts file {}",
        cli.counts.display()
    ));

    let output = WriteFileStdout::create(&cli.output).unwrap_or_fail();
    report.write_csv(output).unwrap_or_fail();

    tracing::info!(
        sequences = report.rows().len(),
        output = %cli.output.display(),
        "Wrote edit distances"
    );
}
