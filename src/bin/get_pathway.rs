//! Looks up the pathways of one or more genes, or the genes of a pathway, in a
//! local JSON mapping and writes the result as CSV.

use bioscripts::{
    data::{
        err::OrFail,
        io::{ReadFileStdin, WriteFileStdout},
    },
    logging::init_tracing,
    pathway::{PathwayMap, write_rows},
};
use clap::{ArgGroup, Parser};
use std::{io::Write, path::PathBuf};

/// Pathway argument that lists the valid pathway names.
const LIST_PATHWAYS: &str = "?";

#[derive(Parser, Debug)]
#[command(name = "get_pathway", version)]
#[command(about = "Get the pathways for a set of genes, or the genes in a pathway")]
#[command(group(ArgGroup::new("query").required(true).args(["gene", "pathway"])))]
struct Cli {
    /// Gene or comma separated list of genes to look up
    #[arg(short, long, value_name = "GENE")]
    gene: Option<String>,

    /// Pathway whose genes to return. Quote names that contain spaces; use
    /// '?' to list the valid pathways
    #[arg(short, long, value_name = "PATHWAY")]
    pathway: Option<String>,

    /// JSON file mapping pathway names to genes (use - for stdin)
    #[arg(short, long, value_name = "JSON", default_value = "resources/pathways.json")]
    json: PathBuf,

    /// Output CSV file (use - for stdout)
    #[arg(short, long, default_value = "-")]
    output: PathBuf,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let json = ReadFileStdin::open(&cli.json).unwrap_or_fail();
    let map = PathwayMap::from_reader(json).unwrap_or_die(&format!("Could not load {}", cli.json.display()));

    let rows = if let Some(genes) = &cli.gene {
        map.pathways_for_genes(genes)
    } else {
        // clap requires one of --gene or --pathway
        let pathway = cli.pathway.as_deref().unwrap_or(LIST_PATHWAYS);
        if pathway == LIST_PATHWAYS {
            eprintln!("Valid pathways are:");
            let mut stdout = WriteFileStdout::stdout();
            for name in map.names() {
                writeln!(stdout, "\t{name}").unwrap_or_fail();
            }
            stdout.flush().unwrap_or_fail();
            return;
        }
        vec![map.genes_in(pathway).unwrap_or_fail()]
    };

    if cli.output.as_os_str() != "-" {
        tracing::info!(output = %cli.output.display(), "Writing output");
    }

    let output = WriteFileStdout::create(&cli.output).unwrap_or_fail();
    write_rows(output, &rows).unwrap_or_fail();
}
