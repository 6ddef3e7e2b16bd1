//! Pipeline orchestration: extract windows, score them against the signal
//! tracks, and trim the outliers.

use std::collections::{HashMap, HashSet};

use log::info;

use peakqc_core::errors::PeakQcError;
use peakqc_core::models::{ScoredPeak, TrimStats};

use crate::config::Task;
use crate::counts::aggregate_track_counts;
use crate::trim::trim_outlier_peaks;
use crate::windows::extract_peak_windows;

///
/// Tunables of one outlier-filter run.
///
#[derive(Debug, Clone)]
pub struct OutlierParams {
    pub flank: u32,
    pub quantile: f64,
    pub scale_factor: f64,
    pub drop_duplicates: bool,
}

///
/// Run the full outlier filter for one task: windows from the task's loci
/// sources, counts from its signal tracks, then the quantile trim. Returns
/// the surviving peaks in ascending count order plus the trim diagnostics.
/// Nothing is written to disk; pair with [crate::writing::write_peaks].
///
pub fn filter_outlier_peaks(
    task: &Task,
    chroms: &HashSet<String>,
    chrom_sizes: &HashMap<String, u32>,
    params: &OutlierParams,
) -> Result<(Vec<ScoredPeak>, TrimStats), PeakQcError> {
    let windows = extract_peak_windows(
        &task.loci.source,
        chroms,
        chrom_sizes,
        params.flank,
        params.drop_duplicates,
    )?;
    info!("total peaks {}", windows.len());

    let scored = aggregate_track_counts(windows, &task.signal.source)?;
    let (kept, stats) = trim_outlier_peaks(scored, params.quantile, params.scale_factor)?;

    info!("{} quantile {}", params.quantile, stats.quantile_value);
    if let Some(idx) = stats.quantile_idx {
        info!("quantile idx {}", idx);
    }
    info!("scaled value {}", stats.scaled_value);
    info!("trim boundary {}", stats.trim_boundary);
    info!("original size {}", stats.n_input);
    info!("new size {}", stats.trim_boundary);

    Ok((kept, stats))
}
