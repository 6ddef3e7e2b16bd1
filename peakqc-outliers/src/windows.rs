//! Peak window extraction: read peak sources, keep the wanted chromosomes,
//! widen each record to a summit-centered window, validate the windows
//! against chromosome sizes, and sort each source by (chrom, window_end).

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use log::info;

use peakqc_core::errors::PeakQcError;
use peakqc_core::models::{PeakWindow, read_peaks};

///
/// Build summit-centered peak windows from the declared peak sources.
///
/// Sources are processed in declared order; each source's windows are sorted
/// by (chrom, window_end) before concatenation, so the per-source blocks stay
/// in declared order. When `drop_duplicates` is set, records whose ten parsed
/// fields are all equal are removed, keeping the first occurrence.
///
/// # Arguments
///
/// - sources: paths to narrowPeak-style peak files, in declared order
/// - chroms: chromosomes to keep; records elsewhere are dropped silently
/// - chrom_sizes: map of chromosome name to size in bases
/// - flank: window half-width in bases
/// - drop_duplicates: remove exact duplicate records after concatenation
///
pub fn extract_peak_windows(
    sources: &[PathBuf],
    chroms: &HashSet<String>,
    chrom_sizes: &HashMap<String, u32>,
    flank: u32,
    drop_duplicates: bool,
) -> Result<Vec<PeakWindow>, PeakQcError> {
    let mut windows = Vec::new();
    for source in sources {
        let source_windows = windows_from_source(source, chroms, chrom_sizes, flank)?;
        info!(
            "{}: {} usable peak windows",
            source.display(),
            source_windows.len()
        );
        windows.extend(source_windows);
    }

    if drop_duplicates {
        let before = windows.len();
        let mut seen = HashSet::new();
        windows.retain(|w| seen.insert(w.peak.clone()));
        if windows.len() < before {
            info!("dropped {} duplicate peak records", before - windows.len());
        }
    }

    Ok(windows)
}

fn windows_from_source(
    source: &Path,
    chroms: &HashSet<String>,
    chrom_sizes: &HashMap<String, u32>,
    flank: u32,
) -> Result<Vec<PeakWindow>, PeakQcError> {
    let peaks = read_peaks(source)?;

    let mut windows = Vec::new();
    for peak in peaks {
        if !chroms.contains(&peak.chr) {
            continue;
        }

        let size = *chrom_sizes.get(&peak.chr).ok_or_else(|| {
            PeakQcError::Configuration(format!(
                "chromosome {} is not present in the chromosome sizes table",
                peak.chr
            ))
        })?;

        // signed arithmetic: the summit offset may be -1 and flank may push
        // the window below zero
        let summit_pos = peak.start as i64 + peak.summit as i64;
        let start = summit_pos - flank as i64;
        let end = summit_pos + flank as i64;
        if start < 0 || end > size as i64 {
            continue;
        }

        windows.push(PeakWindow {
            summit_pos: summit_pos as u32,
            start: start as u32,
            end: end as u32,
            peak,
        });
    }

    windows.sort_by(|a, b| a.peak.chr.cmp(&b.peak.chr).then_with(|| a.end.cmp(&b.end)));

    Ok(windows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_peak_file(rows: &[&str]) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        for row in rows {
            writeln!(f, "{}", row).unwrap();
        }
        f.flush().unwrap();
        f
    }

    #[fixture]
    fn chrom_sizes() -> HashMap<String, u32> {
        HashMap::from([("chr1".to_string(), 1000), ("chr2".to_string(), 600)])
    }

    #[fixture]
    fn chroms() -> HashSet<String> {
        HashSet::from(["chr1".to_string(), "chr2".to_string()])
    }

    #[rstest]
    fn test_window_arithmetic(chroms: HashSet<String>, chrom_sizes: HashMap<String, u32>) {
        let f = write_peak_file(&["chr1\t100\t400\tpeak_0\t611\t.\t4.6\t21.5\t18.2\t150"]);
        let windows =
            extract_peak_windows(&[f.path().to_path_buf()], &chroms, &chrom_sizes, 50, true)
                .unwrap();

        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0].summit_pos, 250);
        assert_eq!(windows[0].start, 200);
        assert_eq!(windows[0].end, 300);
        assert_eq!(windows[0].width(), 100);
    }

    #[rstest]
    fn test_windows_stay_within_chromosome_bounds(
        chroms: HashSet<String>,
        chrom_sizes: HashMap<String, u32>,
    ) {
        let f = write_peak_file(&[
            // summit_pos 30, flank pushes the window below zero
            "chr1\t0\t60\tlow\t0\t.\t0\t0\t0\t30",
            // summit_pos 580, window end 630 > 600
            "chr2\t500\t590\thigh\t0\t.\t0\t0\t0\t80",
            // summit_pos 300, window [250, 350) fits
            "chr2\t280\t320\tok\t0\t.\t0\t0\t0\t20",
        ]);
        let windows =
            extract_peak_windows(&[f.path().to_path_buf()], &chroms, &chrom_sizes, 50, true)
                .unwrap();

        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0].peak.name, "ok");
        assert!(windows[0].end <= 600);
    }

    #[rstest]
    fn test_unknown_summit_near_chromosome_start_is_dropped(
        chroms: HashSet<String>,
        chrom_sizes: HashMap<String, u32>,
    ) {
        // summit -1 at start 0 puts the window below zero for any flank
        let f = write_peak_file(&["chr1\t0\t200\tpeak_0\t0\t.\t0\t0\t0\t-1"]);
        let windows =
            extract_peak_windows(&[f.path().to_path_buf()], &chroms, &chrom_sizes, 10, true)
                .unwrap();

        assert!(windows.is_empty());
    }

    #[rstest]
    fn test_unwanted_chromosomes_are_dropped_before_the_size_check(
        chrom_sizes: HashMap<String, u32>,
    ) {
        // chrEBV has no size entry, but it is outside the wanted set, so it
        // must be filtered out silently rather than raise
        let f = write_peak_file(&[
            "chr1\t100\t400\tpeak_0\t611\t.\t4.6\t21.5\t18.2\t150",
            "chrEBV\t100\t400\tpeak_1\t611\t.\t4.6\t21.5\t18.2\t150",
        ]);
        let chroms = HashSet::from(["chr1".to_string()]);
        let windows =
            extract_peak_windows(&[f.path().to_path_buf()], &chroms, &chrom_sizes, 50, true)
                .unwrap();

        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0].peak.chr, "chr1");
    }

    #[rstest]
    fn test_wanted_chromosome_missing_from_sizes_raises(chrom_sizes: HashMap<String, u32>) {
        let f = write_peak_file(&["chrZ\t100\t400\tpeak_0\t611\t.\t4.6\t21.5\t18.2\t150"]);
        let chroms = HashSet::from(["chrZ".to_string()]);

        let err = extract_peak_windows(&[f.path().to_path_buf()], &chroms, &chrom_sizes, 50, true)
            .unwrap_err();
        match err {
            PeakQcError::Configuration(msg) => assert!(msg.contains("chrZ")),
            other => panic!("expected configuration error, got {:?}", other),
        }
    }

    #[rstest]
    fn test_each_source_is_sorted_by_chrom_then_window_end(
        chroms: HashSet<String>,
        chrom_sizes: HashMap<String, u32>,
    ) {
        let f = write_peak_file(&[
            "chr2\t280\t320\tc\t0\t.\t0\t0\t0\t20",
            "chr1\t500\t600\tb\t0\t.\t0\t0\t0\t50",
            "chr1\t100\t400\ta\t0\t.\t0\t0\t0\t150",
        ]);
        let windows =
            extract_peak_windows(&[f.path().to_path_buf()], &chroms, &chrom_sizes, 50, true)
                .unwrap();

        let names: Vec<&str> = windows.iter().map(|w| w.peak.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
        assert!(windows[0].end <= windows[1].end);
    }

    #[rstest]
    fn test_sources_concatenate_in_declared_order(
        chroms: HashSet<String>,
        chrom_sizes: HashMap<String, u32>,
    ) {
        // second source sorts before the first by coordinate; declared order
        // must still win across sources
        let first = write_peak_file(&["chr2\t280\t320\tfrom_first\t0\t.\t0\t0\t0\t20"]);
        let second = write_peak_file(&["chr1\t100\t400\tfrom_second\t0\t.\t0\t0\t0\t150"]);

        let windows = extract_peak_windows(
            &[first.path().to_path_buf(), second.path().to_path_buf()],
            &chroms,
            &chrom_sizes,
            50,
            true,
        )
        .unwrap();

        let names: Vec<&str> = windows.iter().map(|w| w.peak.name.as_str()).collect();
        assert_eq!(names, vec!["from_first", "from_second"]);
    }

    #[rstest]
    fn test_drop_duplicates_keeps_first_occurrence(
        chroms: HashSet<String>,
        chrom_sizes: HashMap<String, u32>,
    ) {
        let row = "chr1\t100\t400\tpeak_0\t611\t.\t4.6\t21.5\t18.2\t150";
        let other = "chr1\t500\t600\tpeak_1\t100\t.\t1.0\t2.0\t3.0\t50";
        let f = write_peak_file(&[row, other, row]);

        let deduped =
            extract_peak_windows(&[f.path().to_path_buf()], &chroms, &chrom_sizes, 50, true)
                .unwrap();
        assert_eq!(deduped.len(), 2);
        assert_eq!(deduped[0].peak.name, "peak_0");
        assert_eq!(deduped[1].peak.name, "peak_1");

        let kept = extract_peak_windows(&[f.path().to_path_buf()], &chroms, &chrom_sizes, 50, false)
            .unwrap();
        assert_eq!(kept.len(), 3);
    }

    #[rstest]
    fn test_missing_peak_source(chroms: HashSet<String>, chrom_sizes: HashMap<String, u32>) {
        let missing = PathBuf::from("/does/not/exist.narrowPeak");
        let err = extract_peak_windows(&[missing.clone()], &chroms, &chrom_sizes, 50, true)
            .unwrap_err();

        match err {
            PeakQcError::MissingResource(path) => assert_eq!(path, missing),
            other => panic!("expected missing resource error, got {:?}", other),
        }
    }

    #[rstest]
    fn test_drop_duplicates_is_idempotent(
        chroms: HashSet<String>,
        chrom_sizes: HashMap<String, u32>,
    ) {
        let row = "chr1\t100\t400\tpeak_0\t611\t.\t4.6\t21.5\t18.2\t150";
        let f = write_peak_file(&[row, row, row]);

        let once = extract_peak_windows(&[f.path().to_path_buf()], &chroms, &chrom_sizes, 50, true)
            .unwrap();
        assert_eq!(once.len(), 1);

        // feeding an already-deduplicated set through again changes nothing
        let mut seen = HashSet::new();
        let mut again = once.clone();
        again.retain(|w| seen.insert(w.peak.clone()));
        assert_eq!(again, once);
    }
}
