use crate::models::Peak;

///
/// A peak record widened to a fixed summit-centered window: the absolute
/// summit position plus `summit_pos - flank` and `summit_pos + flank`.
/// Coordinates are 0-based with an exclusive end, like the record itself.
///
#[derive(Debug, Clone, PartialEq)]
pub struct PeakWindow {
    pub peak: Peak,
    pub summit_pos: u32,
    pub start: u32,
    pub end: u32,
}

impl PeakWindow {
    pub fn width(&self) -> u32 {
        self.end - self.start
    }
}

///
/// A peak window scored against the signal tracks: one summed count per
/// track, in declared track order, and their arithmetic mean.
///
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredPeak {
    pub window: PeakWindow,
    pub track_counts: Vec<f64>,
    pub avg_count: f64,
}

/// Diagnostics of one outlier-trim pass.
///
/// For empty input `quantile_idx` is `None` and the value fields are NaN;
/// `trim_boundary` is the number of records kept.
#[derive(Debug, Clone, Copy)]
pub struct TrimStats {
    pub n_input: usize,
    pub quantile_value: f64,
    pub quantile_idx: Option<usize>,
    pub scaled_value: f64,
    pub trim_boundary: usize,
}
