//! Outlier trimming: rank scored peaks by average count, locate a scaled
//! quantile cutoff, and keep only the peaks at or below it.

use peakqc_core::errors::PeakQcError;
use peakqc_core::models::{ScoredPeak, TrimStats};

/// Linear-interpolation quantile of already-sorted data.
fn quantile_sorted(data: &[f64], q: f64) -> f64 {
    let pos = (data.len() - 1) as f64 * q;
    let base = pos.floor() as usize;
    let rest = pos - base as f64;
    if (base + 1) < data.len() {
        data[base] + rest * (data[base + 1] - data[base])
    } else {
        data[base]
    }
}

///
/// Trim outlier peaks from a scored set.
///
/// Peaks are stably sorted by `avg_count` ascending. The cutoff is the
/// observed count closest to the interpolated `quantile` of the ranking,
/// multiplied by `scale_factor`; the first count strictly above the cutoff
/// marks the trim boundary and everything from there on is discarded. When no
/// count exceeds the cutoff the boundary is 0 and the whole set is discarded.
///
/// Returns the surviving peaks, still in ascending count order, together with
/// the diagnostics of the pass. Empty input yields an empty result and NaN
/// diagnostics.
///
/// # Arguments
///
/// - scored: scored peaks to rank and trim
/// - quantile: ranking quantile, strictly between 0 and 1
/// - scale_factor: multiplier applied to the quantile count
///
pub fn trim_outlier_peaks(
    mut scored: Vec<ScoredPeak>,
    quantile: f64,
    scale_factor: f64,
) -> Result<(Vec<ScoredPeak>, TrimStats), PeakQcError> {
    if !(quantile > 0.0 && quantile < 1.0) {
        return Err(PeakQcError::InvalidArgument(format!(
            "quantile must be strictly between 0 and 1, got {}",
            quantile
        )));
    }
    if !(scale_factor.is_finite() && scale_factor > 0.0) {
        return Err(PeakQcError::InvalidArgument(format!(
            "quantile value scale factor must be finite and positive, got {}",
            scale_factor
        )));
    }

    if scored.is_empty() {
        let stats = TrimStats {
            n_input: 0,
            quantile_value: f64::NAN,
            quantile_idx: None,
            scaled_value: f64::NAN,
            trim_boundary: 0,
        };
        return Ok((scored, stats));
    }

    // stable sort: ties keep their prior relative order
    scored.sort_by(|a, b| a.avg_count.total_cmp(&b.avg_count));
    let counts: Vec<f64> = scored.iter().map(|s| s.avg_count).collect();

    let n_input = counts.len();
    let quantile_value = quantile_sorted(&counts, quantile);

    // first index minimizing the distance to the interpolated quantile
    let mut quantile_idx = 0;
    let mut best = (counts[0] - quantile_value).abs();
    for (i, count) in counts.iter().enumerate().skip(1) {
        let distance = (count - quantile_value).abs();
        if distance < best {
            best = distance;
            quantile_idx = i;
        }
    }

    let scaled_value = counts[quantile_idx] * scale_factor;

    // first count strictly above the cutoff; when nothing exceeds it the
    // boundary falls back to 0 and every peak is discarded
    let trim_boundary = counts.iter().position(|c| *c > scaled_value).unwrap_or(0);

    scored.truncate(trim_boundary);

    let stats = TrimStats {
        n_input,
        quantile_value,
        quantile_idx: Some(quantile_idx),
        scaled_value,
        trim_boundary,
    };

    Ok((scored, stats))
}
