use super::{hamming, levenshtein};
use std::{
    collections::HashMap,
    io::{BufRead, BufReader, Error as IOError, ErrorKind, Read, Write},
};

/// The header written by [`EditDistanceReport::write_csv`].
pub const CSV_HEADER: &str = "sequence,counts,hamming_distance,levenshtein_distance";

/// One sequence of a counts file and its distances to the reference.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EditDistanceRow {
    pub sequence:    String,
    pub count:       u64,
    /// `None` when the sequence length differs from the reference.
    pub hamming:     Option<usize>,
    pub levenshtein: usize,
}

/// Edit distances from every sequence in a counts file to the first one,
/// which is taken as the reference.
///
/// The counts file has one `SEQUENCE COUNT` pair per line separated by
/// whitespace, ordered so that the most abundant sequence comes first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditDistanceReport {
    rows: Vec<EditDistanceRow>,
}

fn parse_counts_line(line: &str, line_number: usize) -> std::io::Result<(&str, u64)> {
    let mut fields = line.split_whitespace();
    match (fields.next(), fields.next(), fields.next()) {
        (Some(sequence), Some(count), None) => {
            let count = count.parse::<u64>().map_err(|e| {
                IOError::new(
                    ErrorKind::InvalidData,
                    format!("line {line_number}: invalid count '{count}': {e}"),
                )
            })?;
            Ok((sequence, count))
        }
        _ => Err(IOError::new(
            ErrorKind::InvalidData,
            format!("line {line_number}: expected 'SEQUENCE COUNT' but found '{line}'"),
        )),
    }
}

impl EditDistanceReport {
    /// Builds the report from a counts file. Blank lines are ignored. A
    /// sequence listed twice keeps its first position and its last count.
    ///
    /// ## Errors
    ///
    /// IO errors are propagated. Lines that are not a sequence and an integer
    /// count, or input without any sequences, give
    /// [`ErrorKind::InvalidData`].
    pub fn from_reader<R: Read>(read: R) -> std::io::Result<Self> {
        let mut rows: Vec<EditDistanceRow> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();

        for (i, line) in BufReader::new(read).lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let (sequence, count) = parse_counts_line(&line, i + 1)?;
            let row = match rows.first() {
                Some(reference) => EditDistanceRow {
                    sequence: sequence.to_string(),
                    count,
                    hamming: hamming(reference.sequence.as_bytes(), sequence.as_bytes()),
                    levenshtein: levenshtein(&reference.sequence, sequence),
                },
                None => EditDistanceRow {
                    sequence: sequence.to_string(),
                    count,
                    hamming: Some(0),
                    levenshtein: 0,
                },
            };

            if let Some(&position) = positions.get(sequence) {
                tracing::debug!(sequence, "Duplicate sequence replaces an earlier count");
                // The reference row keeps its zero distances
                rows[position].count = row.count;
            } else {
                positions.insert(row.sequence.clone(), rows.len());
                rows.push(row);
            }
        }

        if rows.is_empty() {
            return Err(IOError::new(ErrorKind::InvalidData, "No sequences were found in the counts file!"));
        }

        Ok(EditDistanceReport { rows })
    }

    /// The reference row, which is always first.
    #[inline]
    #[must_use]
    pub fn reference(&self) -> &EditDistanceRow {
        &self.rows[0]
    }

    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[EditDistanceRow] {
        &self.rows
    }

    /// Writes the report as CSV with [`CSV_HEADER`]. An undefined Hamming
    /// distance is written as `NA`.
    ///
    /// ## Errors
    ///
    /// Any IO error from `writer`.
    pub fn write_csv<W: Write>(&self, writer: W) -> std::io::Result<()> {
        let mut buff = itoa::Buffer::new();
        let mut out = csv::Writer::from_writer(writer);

        out.write_record(CSV_HEADER.split(','))?;
        for row in &self.rows {
            out.write_field(&row.sequence)?;
            out.write_field(buff.format(row.count))?;
            match row.hamming {
                Some(d) => out.write_field(buff.format(d))?,
                None => out.write_field("NA")?,
            }
            out.write_field(buff.format(row.levenshtein))?;
            out.write_record(None::<&[u8]>)?;
        }
        out.flush()
    }
}
