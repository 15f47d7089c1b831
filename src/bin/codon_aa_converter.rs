//! Converts between codons and amino acids.
//!
//! Given a three base codon, prints the amino acid it encodes. Given a single-
//! or three-letter amino acid code, prints every codon that encodes it.

use bioscripts::{
    data::err::OrFail,
    logging::init_tracing,
    translate::{BatchPolicy, GeneticCode, Interpretation, Translator, collect_translations, write_table},
};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "codon_aa_converter", version)]
#[command(about = "Convert between a codon and an amino acid (single or three letter code)")]
#[command(long_about = "Convert between a codon and an amino acid (single or three letter code).

A 3 base codon (DNA or RNA) is translated to its amino acid. An amino acid is
translated to every codon that encodes it. Several queries may be given as a
comma separated list.

Tokens made only of A, C, G, T, and U are read as codons, so single-letter
A, C, G, and T need `--as aa`.

Examples:
  codon_aa_converter ATG
  codon_aa_converter Met,W,UAA
  codon_aa_converter --as aa A,C,G,T")]
struct Cli {
    /// Codon or amino acid to convert, or a comma separated list of them
    #[arg(value_name = "CODON | AMINO_ACID")]
    query: String,

    /// What to do when a query cannot be converted
    #[arg(long, value_enum, default_value_t = BatchPolicy::Abort)]
    on_error: BatchPolicy,

    /// How to read each query
    #[arg(long = "as", value_enum, default_value_t = Interpretation::Auto)]
    interpretation: Interpretation,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let code = GeneticCode::standard();
    let translator = Translator::new(&code);

    let results = translator.translate_list(&cli.query, cli.interpretation);
    let translations = collect_translations(results, cli.on_error).unwrap_or_fail();

    write_table(std::io::stdout().lock(), &translations).unwrap_or_fail();
}
