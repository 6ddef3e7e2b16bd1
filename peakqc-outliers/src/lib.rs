//! Outlier trimming for peak-call sets.
//!
//! Peak records are widened to fixed summit-centered windows, validated
//! against chromosome sizes, and scored by their summed signal across one or
//! more bigWig tracks. Peaks are ranked by average signal and everything above
//! a scaled quantile cutoff is discarded; the survivors are written back in
//! the ten-column row format they arrived in.
//!
//! # Example
//!
//! ```no_run
//! use std::collections::HashSet;
//! use std::path::Path;
//!
//! use peakqc_core::utils::read_chrom_sizes;
//! use peakqc_outliers::config::TaskConfig;
//! use peakqc_outliers::filter::{OutlierParams, filter_outlier_peaks};
//! use peakqc_outliers::writing::write_peaks;
//!
//! let config = TaskConfig::from_file(Path::new("input_data.json")).unwrap();
//! let task = config.task("0").unwrap();
//! let chrom_sizes = read_chrom_sizes(Path::new("hg38.chrom.sizes")).unwrap();
//! let chroms = HashSet::from(["chr1".to_string(), "chr2".to_string()]);
//!
//! let params = OutlierParams {
//!     flank: 500,
//!     quantile: 0.99,
//!     scale_factor: 1.2,
//!     drop_duplicates: true,
//! };
//!
//! let (kept, stats) = filter_outlier_peaks(task, &chroms, &chrom_sizes, &params).unwrap();
//! write_peaks(&kept, Path::new("peaks.trimmed.bed")).unwrap();
//! println!("kept {} of {} peaks", stats.trim_boundary, stats.n_input);
//! ```

pub mod config;
pub mod consts;
pub mod counts;
pub mod filter;
pub mod trim;
pub mod windows;
pub mod writing;

// re-exports
pub use filter::{OutlierParams, filter_outlier_peaks};
