use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};
use std::io::BufRead;
use std::path::Path;
use std::str::FromStr;

use crate::errors::PeakQcError;
use crate::utils::get_dynamic_reader;

///
/// Strand of a called peak: `+`, `-`, or `.` for unstranded calls.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strand {
    Plus,
    Minus,
    Unstranded,
}

impl FromStr for Strand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Strand::Plus),
            "-" => Ok(Strand::Minus),
            "." => Ok(Strand::Unstranded),
            _ => Err(format!("invalid strand value '{}'", s)),
        }
    }
}

impl Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strand::Plus => write!(f, "+"),
            Strand::Minus => write!(f, "-"),
            Strand::Unstranded => write!(f, "."),
        }
    }
}

///
/// One record of a narrowPeak-style peak call: ten fixed tab-separated
/// columns, no header. The score, signal, p-value and q-value columns are
/// opaque to the pipeline and pass through to the output unchanged.
///
/// `summit` is the summit offset relative to `start`; peak callers emit `-1`
/// when no point-source was called.
///
#[derive(Debug, Clone)]
pub struct Peak {
    pub chr: String,
    pub start: u32,
    pub end: u32,
    pub name: String,
    pub score: f64,
    pub strand: Strand,
    pub signal: f64,
    pub p_value: f64,
    pub q_value: f64,
    pub summit: i32,
}

impl Peak {
    ///
    /// Get file string of the record: the ten columns joined by tabs.
    ///
    pub fn as_row(&self) -> String {
        format!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            self.chr,
            self.start,
            self.end,
            self.name,
            self.score,
            self.strand,
            self.signal,
            self.p_value,
            self.q_value,
            self.summit,
        )
    }
}

impl Display for Peak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_row())
    }
}

// Float columns compare and hash by bit pattern so that records can sit in a
// HashSet for duplicate removal.
impl PartialEq for Peak {
    fn eq(&self, other: &Self) -> bool {
        self.chr == other.chr
            && self.start == other.start
            && self.end == other.end
            && self.name == other.name
            && self.score.to_bits() == other.score.to_bits()
            && self.strand == other.strand
            && self.signal.to_bits() == other.signal.to_bits()
            && self.p_value.to_bits() == other.p_value.to_bits()
            && self.q_value.to_bits() == other.q_value.to_bits()
            && self.summit == other.summit
    }
}

impl Eq for Peak {}

impl Hash for Peak {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.chr.hash(state);
        self.start.hash(state);
        self.end.hash(state);
        self.name.hash(state);
        self.score.to_bits().hash(state);
        self.strand.hash(state);
        self.signal.to_bits().hash(state);
        self.p_value.to_bits().hash(state);
        self.q_value.to_bits().hash(state);
        self.summit.hash(state);
    }
}

fn parse_field<T: FromStr>(value: &str, column: &str) -> Result<T, String> {
    value
        .parse::<T>()
        .map_err(|_| format!("invalid {} value '{}'", column, value))
}

impl FromStr for Peak {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split('\t').collect();
        if fields.len() != 10 {
            return Err(format!(
                "expected 10 tab-separated columns, found {}",
                fields.len()
            ));
        }

        Ok(Peak {
            chr: fields[0].to_string(),
            start: parse_field(fields[1], "start")?,
            end: parse_field(fields[2], "end")?,
            name: fields[3].to_string(),
            score: parse_field(fields[4], "score")?,
            strand: fields[5].parse::<Strand>()?,
            signal: parse_field(fields[6], "signal")?,
            p_value: parse_field(fields[7], "p_value")?,
            q_value: parse_field(fields[8], "q_value")?,
            summit: parse_field(fields[9], "summit")?,
        })
    }
}

///
/// Read all peak records from a narrowPeak-style file, plain or gzip'd.
/// Blank lines are skipped; any malformed row aborts with a parse error
/// naming the file and line.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn read_peaks(path: &Path) -> Result<Vec<Peak>, PeakQcError> {
    if !path.exists() {
        return Err(PeakQcError::MissingResource(path.to_path_buf()));
    }

    let reader = get_dynamic_reader(path)?;

    let mut peaks = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        let peak = line.parse::<Peak>().map_err(|reason| PeakQcError::Parse {
            path: path.to_path_buf(),
            line: index + 1,
            reason,
        })?;
        peaks.push(peak);
    }

    Ok(peaks)
}
