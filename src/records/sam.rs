use crate::cigar::Cigar;
use std::io::{BufRead, BufReader, Error as IOError, ErrorKind, Read};

/// One alignment line of a SAM file, with the optional `TAG:TYPE:VALUE`
/// fields kept as text.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct SamRecord {
    pub qname: String,
    pub flag:  u16,
    pub rname: String,
    pub pos:   usize,
    pub mapq:  u8,
    pub cigar: Cigar,
    pub rnext: String,
    pub pnext: usize,
    pub tlen:  i64,
    pub seq:   Vec<u8>,
    pub qual:  Vec<u8>,
    pub tags:  Vec<String>,
}

impl SamRecord {
    /// Gets the value of the optional field `tag`, e.g. `"NM"` for
    /// `NM:i:3`.
    ///
    /// ```
    /// # use bioscripts::records::sam::SamRecord;
    /// let line = "r1\t0\tchr1\t100\t60\t4M\t*\t0\t0\tACGT\tFFFF\tNM:i:0\tCS:Z::4";
    /// let record: SamRecord = line.parse().unwrap();
    /// assert_eq!(record.tag("CS"), Some(":4"));
    /// assert_eq!(record.tag("MB"), None);
    /// ```
    #[must_use]
    pub fn tag(&self, tag: &str) -> Option<&str> {
        self.tags.iter().find_map(|field| {
            let rest = field.strip_prefix(tag)?.strip_prefix(':')?;
            let (_type, value) = rest.split_once(':')?;
            Some(value)
        })
    }

    /// The read bases covered by the trailing soft clip.
    #[inline]
    #[must_use]
    pub fn soft_clipped_tail(&self) -> &[u8] {
        self.cigar.soft_clipped_tail(&self.seq)
    }
}

fn invalid(msg: String) -> IOError {
    IOError::new(ErrorKind::InvalidData, msg)
}

fn parse_field<T: std::str::FromStr>(field: &str, name: &str) -> std::io::Result<T>
where
    T::Err: std::fmt::Display, {
    field
        .parse::<T>()
        .map_err(|e| invalid(format!("Error: {e}, invalid SAM {name} '{field}'")))
}

impl std::str::FromStr for SamRecord {
    type Err = IOError;

    /// Parses a tab-delimited SAM data line.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let r: Vec<&str> = line.split('\t').collect();
        if r.len() < 11 {
            return Err(invalid("SAM file did not have at least 11 fields!".to_string()));
        }

        let cigar = r[5]
            .parse::<Cigar>()
            .map_err(|e| invalid(format!("Error: {e}, invalid SAM CIGAR '{}'", r[5])))?;

        let seq = if r[9] == "*" { Vec::new() } else { r[9].as_bytes().to_vec() };
        let qual = if r[10] == "*" { Vec::new() } else { r[10].as_bytes().to_vec() };

        Ok(SamRecord {
            qname: r[0].to_owned(),
            flag: parse_field(r[1], "bit flag")?,
            rname: r[2].to_owned(),
            // In SAM text the 1-based reference position
            pos: parse_field(r[3], "reference position")?,
            mapq: parse_field(r[4], "mapq")?,
            cigar,
            rnext: r[6].to_owned(),
            pnext: parse_field(r[7], "mate position")?,
            tlen: parse_field(r[8], "template length")?,
            seq,
            qual,
            tags: r[11..].iter().map(|s| (*s).to_owned()).collect(),
        })
    }
}

/// An iterator for buffered reading of a SAM text file. Header lines and blank
/// lines are skipped.
#[derive(Debug)]
pub struct SamReader<R: Read> {
    lines: std::io::Lines<BufReader<R>>,
    line:  usize,
}

impl<R: Read> SamReader<R> {
    /// Creates an iterator over SAM data, wrapping the input in a buffered
    /// reader. Empty input gives an empty iterator.
    pub fn new(inner: R) -> Self {
        SamReader {
            lines: BufReader::new(inner).lines(),
            line:  0,
        }
    }
}

impl<R: Read> Iterator for SamReader<R> {
    type Item = std::io::Result<SamRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(e)),
            };
            self.line += 1;

            if line.starts_with('@') || line.trim().is_empty() {
                continue;
            }

            let record = line
                .parse::<SamRecord>()
                .map_err(|e| IOError::new(e.kind(), format!("line {}: {e}", self.line)));
            return Some(record);
        }
    }
}
