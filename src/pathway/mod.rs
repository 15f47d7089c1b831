//! ## Gene and pathway lookups
//!
//! A [`PathwayMap`] is read from a local JSON object whose keys are pathway
//! names and whose values are arrays of gene symbols:
//!
//! ```text
//! {
//!   "file_info": { "source": "...", "date": "..." },
//!   "MAPK signaling": ["BRAF", "KRAS", "NRAS"],
//!   "PI3K/AKT signaling": ["PIK3CA", "PTEN", "KRAS"]
//! }
//! ```
//!
//! The `file_info` entry describes the source of the mapping and is not a
//! pathway. Lookups are exact and case sensitive. Results are written as CSV
//! rows of a key (gene or pathway) followed by its matches.

use crate::data::err::GetCode;
use serde_json::Value;
use std::{
    collections::BTreeMap,
    error::Error,
    fmt,
    io::{BufReader, Read, Write},
};

#[cfg(test)]
mod test;

/// The metadata entry of a pathway file, skipped when loading.
pub const FILE_INFO_KEY: &str = "file_info";

/// Written in place of the pathway list for a gene without any pathway.
pub const NO_PATHWAY: &str = "NA";

#[non_exhaustive]
pub enum PathwayError {
    /// The input was not valid JSON.
    Json(serde_json::Error),
    /// The JSON was valid but was not an object keyed by pathway.
    NotAnObject,
    /// A pathway whose value is not an array of strings.
    InvalidGeneList { pathway: String },
    /// A pathway that is not in the file.
    NoSuchPathway(String),
    Csv(csv::Error),
}

impl fmt::Display for PathwayError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PathwayError::Json(e) => write!(f, "Could not parse the pathway JSON: {e}"),
            PathwayError::NotAnObject => {
                write!(f, "The pathway JSON must be an object mapping pathway names to genes")
            }
            PathwayError::InvalidGeneList { pathway } => {
                write!(f, "Pathway '{pathway}' must map to a list of gene symbols")
            }
            PathwayError::NoSuchPathway(pathway) => write!(f, "No such pathway '{pathway}'!"),
            PathwayError::Csv(e) => write!(f, "Could not write the CSV output: {e}"),
        }
    }
}

impl fmt::Debug for PathwayError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl Error for PathwayError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PathwayError::Json(e) => Some(e),
            PathwayError::Csv(e) => Some(e),
            _ => None,
        }
    }
}

impl GetCode for PathwayError {}

impl From<serde_json::Error> for PathwayError {
    #[inline]
    fn from(e: serde_json::Error) -> Self {
        PathwayError::Json(e)
    }
}

impl From<csv::Error> for PathwayError {
    #[inline]
    fn from(e: csv::Error) -> Self {
        PathwayError::Csv(e)
    }
}

/// One output row: a gene with the pathways containing it, or a pathway with
/// its genes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PathwayRow {
    pub key:     String,
    pub matches: Vec<String>,
}

/// Pathway names mapped to their genes, kept in name order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PathwayMap {
    pathways: BTreeMap<String, Vec<String>>,
}

impl PathwayMap {
    /// Reads a pathway JSON file. The [`FILE_INFO_KEY`] entry is skipped.
    ///
    /// ## Errors
    ///
    /// [`PathwayError::Json`] for invalid JSON or IO failures,
    /// [`PathwayError::NotAnObject`] if the top level is not an object, and
    /// [`PathwayError::InvalidGeneList`] if a pathway does not map to an
    /// array of strings.
    pub fn from_reader<R: Read>(read: R) -> Result<Self, PathwayError> {
        let Value::Object(entries) = serde_json::from_reader::<_, Value>(BufReader::new(read))? else {
            return Err(PathwayError::NotAnObject);
        };

        let mut pathways = BTreeMap::new();
        for (name, genes) in entries {
            if name == FILE_INFO_KEY {
                continue;
            }

            let genes = genes
                .as_array()
                .and_then(|genes| {
                    genes
                        .iter()
                        .map(|g| g.as_str().map(str::to_string))
                        .collect::<Option<Vec<_>>>()
                })
                .ok_or_else(|| PathwayError::InvalidGeneList { pathway: name.clone() })?;
            pathways.insert(name, genes);
        }

        Ok(PathwayMap { pathways })
    }

    /// All pathway names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.pathways.keys().map(String::as_str)
    }

    /// The pathways that list `gene`, in name order.
    #[must_use]
    pub fn pathways_for(&self, gene: &str) -> Vec<&str> {
        self.pathways
            .iter()
            .filter(|(_, genes)| genes.iter().any(|g| g == gene))
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Looks up every gene of a comma-separated list. Rows follow the input
    /// order; blank entries are ignored and a repeated gene is reported once.
    /// A gene that is in no pathway still gets a row, with no matches.
    #[must_use]
    pub fn pathways_for_genes(&self, genes: &str) -> Vec<PathwayRow> {
        let mut rows: Vec<PathwayRow> = Vec::new();

        for gene in genes.split(',').map(str::trim).filter(|g| !g.is_empty()) {
            if rows.iter().any(|row| row.key == gene) {
                continue;
            }

            let matches = self.pathways_for(gene).into_iter().map(str::to_string).collect();
            rows.push(PathwayRow {
                key: gene.to_string(),
                matches,
            });
        }

        rows
    }

    /// The genes of one pathway, as listed in the file.
    ///
    /// ## Errors
    ///
    /// [`PathwayError::NoSuchPathway`] if the name is not in the file.
    pub fn genes_in(&self, pathway: &str) -> Result<PathwayRow, PathwayError> {
        let genes = self
            .pathways
            .get(pathway)
            .ok_or_else(|| PathwayError::NoSuchPathway(pathway.to_string()))?;

        Ok(PathwayRow {
            key:     pathway.to_string(),
            matches: genes.clone(),
        })
    }
}

/// Writes one CSV record per row: the key followed by each match, or by
/// [`NO_PATHWAY`] when there are none. Records have varying lengths.
///
/// ## Errors
///
/// [`PathwayError::Csv`] if writing fails.
pub fn write_rows<W: Write>(writer: W, rows: &[PathwayRow]) -> Result<(), PathwayError> {
    let mut out = csv::WriterBuilder::new().flexible(true).from_writer(writer);

    for PathwayRow { key, matches } in rows {
        out.write_field(key)?;
        if matches.is_empty() {
            out.write_field(NO_PATHWAY)?;
        } else {
            for m in matches {
                out.write_field(m)?;
            }
        }
        out.write_record(None::<&[u8]>)?;
    }

    out.flush().map_err(csv::Error::from)?;
    Ok(())
}
