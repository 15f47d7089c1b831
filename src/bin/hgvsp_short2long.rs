//! Converts HGVSp descriptions from single-letter to three-letter amino acid
//! codes (or back with `--reverse`), one description per line.

use bioscripts::{
    data::{
        err::OrFail,
        io::{ReadFileStdin, WriteFileStdout},
    },
    hgvs::{protein_long_to_short, protein_short_to_long},
    logging::init_tracing,
};
use clap::Parser;
use std::{
    io::{BufRead, BufReader, Write},
    path::PathBuf,
};

#[derive(Parser, Debug)]
#[command(name = "hgvsp_short2long", version)]
#[command(about = "Convert HGVSp short notation (p.V600E) to long notation (p.Val600Glu)")]
struct Cli {
    /// File with one HGVSp description per line (use - for stdin)
    input: PathBuf,

    /// Convert long notation to short notation instead
    #[arg(short, long)]
    reverse: bool,

    /// Output file (use - for stdout)
    #[arg(short, long, default_value = "-")]
    output: PathBuf,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let convert = if cli.reverse {
        protein_long_to_short
    } else {
        protein_short_to_long
    };

    let input = BufReader::new(ReadFileStdin::open(&cli.input).unwrap_or_fail());
    let mut output = WriteFileStdout::create(&cli.output).unwrap_or_fail();

    for (i, line) in input.lines().enumerate() {
        let line = line.unwrap_or_fail();
        let hgvs = line.trim();

        if hgvs.is_empty() {
            writeln!(output).unwrap_or_fail();
            continue;
        }

        let converted = convert(hgvs).unwrap_or_die(&format!("Could not convert line {}: '{hgvs}'", i + 1));
        writeln!(output, "{converted}").unwrap_or_fail();
    }

    output.flush().unwrap_or_fail();
}
