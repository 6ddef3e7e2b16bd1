//! Write surviving peak records back out as ten-column rows.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use peakqc_core::errors::PeakQcError;
use peakqc_core::models::ScoredPeak;

///
/// Write the records of the surviving peaks to a tab-delimited file, one
/// ten-column row per peak, no header, in the order given. Parent directories
/// are created if needed.
///
/// # Arguments
///
/// - peaks: surviving peaks, in trimmed order
/// - path: the path to the file to dump to
///
pub fn write_peaks(peaks: &[ScoredPeak], path: &Path) -> Result<(), PeakQcError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file = File::create(path).map_err(|source| PeakQcError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);

    for peak in peaks {
        writeln!(writer, "{}", peak.window.peak.as_row())?;
    }
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use peakqc_core::models::{Peak, PeakWindow, Strand, read_peaks};
    use pretty_assertions::assert_eq;
    use rstest::*;

    fn scored_peak(name: &str) -> ScoredPeak {
        let peak = Peak {
            chr: "chr1".to_string(),
            start: 100,
            end: 400,
            name: name.to_string(),
            score: 611.0,
            strand: Strand::Unstranded,
            signal: 4.6,
            p_value: 21.5,
            q_value: 18.2,
            summit: 150,
        };
        ScoredPeak {
            window: PeakWindow {
                summit_pos: 250,
                start: 200,
                end: 300,
                peak,
            },
            track_counts: vec![10.0],
            avg_count: 10.0,
        }
    }

    #[rstest]
    fn test_written_rows_parse_back() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("trimmed.bed");
        let peaks = vec![scored_peak("peak_0"), scored_peak("peak_1")];

        write_peaks(&peaks, &out).unwrap();
        let reread = read_peaks(&out).unwrap();

        assert_eq!(reread.len(), 2);
        assert_eq!(reread[0], peaks[0].window.peak);
        assert_eq!(reread[1].name, "peak_1");
    }

    #[rstest]
    fn test_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested/deeper/trimmed.bed");

        write_peaks(&[scored_peak("peak_0")], &out).unwrap();
        assert!(out.exists());
    }
}
