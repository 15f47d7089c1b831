//! Prints the trailing soft-clipped bases of every read in a SAM file, along
//! with the `CS` and `MB` tags.

use bioscripts::{
    data::{err::OrFail, io::ReadFileStdin},
    logging::init_tracing,
    records::sam::SamReader,
};
use clap::Parser;
use std::{
    io::{BufWriter, Write},
    path::PathBuf,
};

const HEADER: &str = "name\tseq\tsc_seq\tcigar\tcs\tmb";

#[derive(Parser, Debug)]
#[command(name = "get_softclipped_bases", version)]
#[command(about = "Get the soft-clipped sequence at the end of each read in a SAM file")]
#[command(long_about = "Get the soft-clipped sequence at the end of each read in a SAM file.

BAM input can be piped through samtools:
  samtools view sample.bam | get_softclipped_bases -")]
struct Cli {
    /// SAM file to process (use - for stdin)
    sam: PathBuf,

    /// Print the whole read name instead of its second '-' separated field
    /// (the amplicon in '<prefix>-<amplicon>-...')
    #[arg(long)]
    full_name: bool,
}

/// Amplicon reads are named `<prefix>-<amplicon>[-...]`; keep the amplicon.
/// Names without a `-` are kept whole.
fn short_name(qname: &str) -> &str {
    qname.split('-').nth(1).unwrap_or(qname)
}

#[cfg(test)]
mod test {
    use super::short_name;

    #[test]
    fn amplicon_is_the_second_field() {
        assert_eq!(short_name("run1-BRAF_1"), "BRAF_1");
        assert_eq!(short_name("run1-BRAF_1-dup"), "BRAF_1");
        assert_eq!(short_name("run1-"), "");
        assert_eq!(short_name("read42"), "read42");
    }
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let reader = SamReader::new(ReadFileStdin::open(&cli.sam).unwrap_or_fail());
    let mut out = BufWriter::new(std::io::stdout().lock());

    writeln!(out, "{HEADER}").unwrap_or_fail();
    for record in reader {
        let record = record.unwrap_or_die(&format!("Could not read {}", cli.sam.display()));
        let name = if cli.full_name {
            record.qname.as_str()
        } else {
            short_name(&record.qname)
        };

        writeln!(
            out,
            "{name}\t{}\t{}\t{}\t{}\t{}",
            String::from_utf8_lossy(&record.seq),
            String::from_utf8_lossy(record.soft_clipped_tail()),
            record.cigar,
            record.tag("CS").unwrap_or_default(),
            record.tag("MB").unwrap_or_default(),
        )
        .unwrap_or_fail();
    }

    out.flush().unwrap_or_fail();
}
