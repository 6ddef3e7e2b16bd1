use std::collections::HashMap;
use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::errors::PeakQcError;

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> Result<BufReader<Box<dyn Read>>, PeakQcError> {
    let is_gzipped = path.extension() == Some(OsStr::new("gz"));
    let file = File::open(path).map_err(|source| PeakQcError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    let file: Box<dyn Read> = match is_gzipped {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    let reader = BufReader::new(file);

    Ok(reader)
}

///
/// Read a chromosome sizes table into a map of chromosome name to size.
///
/// Rows are whitespace-delimited `chrom size` pairs with no header; columns
/// past the second are ignored. The file may be plain or gzip'd.
///
/// # Arguments
///
/// - path: path to the chrom.sizes file
///
pub fn read_chrom_sizes(path: &Path) -> Result<HashMap<String, u32>, PeakQcError> {
    if !path.exists() {
        return Err(PeakQcError::MissingResource(path.to_path_buf()));
    }

    let reader = get_dynamic_reader(path)?;

    let mut chrom_sizes = HashMap::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.is_empty() {
            continue;
        }

        let mut fields = line.split_whitespace();
        let (chrom, size) = match (fields.next(), fields.next()) {
            (Some(chrom), Some(size)) => (chrom, size),
            _ => {
                return Err(PeakQcError::Parse {
                    path: path.to_path_buf(),
                    line: index + 1,
                    reason: "expected 'chrom size' pair".to_string(),
                });
            }
        };
        let size = size.parse::<u32>().map_err(|_| PeakQcError::Parse {
            path: path.to_path_buf(),
            line: index + 1,
            reason: format!("invalid chromosome size '{}'", size),
        })?;

        chrom_sizes.insert(chrom.to_string(), size);
    }

    Ok(chrom_sizes)
}
