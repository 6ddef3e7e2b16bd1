//! Signal aggregation: sum per-base bigWig signal over each peak window,
//! one count per declared track, and average the counts per window.

use std::path::PathBuf;

use bigtools::BigWigRead;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;

use peakqc_core::errors::PeakQcError;
use peakqc_core::models::{PeakWindow, ScoredPeak};

///
/// Score each window by its summed signal in every declared track.
///
/// All declared track paths are checked for existence and opened before the
/// first window is read; each handle stays open for the whole pass. Positions
/// a track does not cover count as zero. `track_counts` follows the declared
/// track order and `avg_count` is the arithmetic mean across tracks.
///
/// # Arguments
///
/// - windows: peak windows to score
/// - tracks: paths to bigWig signal tracks, in declared order
///
pub fn aggregate_track_counts(
    windows: Vec<PeakWindow>,
    tracks: &[PathBuf],
) -> Result<Vec<ScoredPeak>, PeakQcError> {
    if tracks.is_empty() {
        return Err(PeakQcError::Configuration(
            "no signal tracks declared".to_string(),
        ));
    }
    for track in tracks {
        if !track.exists() {
            return Err(PeakQcError::MissingResource(track.clone()));
        }
    }

    let mut readers = Vec::with_capacity(tracks.len());
    for track in tracks {
        let reader = BigWigRead::open_file(track).map_err(|e| PeakQcError::SignalTrack {
            path: track.clone(),
            reason: e.to_string(),
        })?;
        readers.push(reader);
    }
    info!("opened {} signal tracks", readers.len());

    let pb = ProgressBar::new(windows.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} peaks ({eta})")
            .unwrap()
            .progress_chars("##-"),
    );

    let mut scored = Vec::with_capacity(windows.len());
    for window in windows {
        let mut track_counts = Vec::with_capacity(readers.len());
        for (track, reader) in tracks.iter().zip(readers.iter_mut()) {
            let values = reader
                .values(&window.peak.chr, window.start, window.end)
                .map_err(|e| PeakQcError::SignalTrack {
                    path: track.clone(),
                    reason: format!(
                        "failed to read {}:{}-{}: {}",
                        window.peak.chr, window.start, window.end, e
                    ),
                })?;

            // uncovered positions come back as NaN and count as zero
            let count: f64 = values
                .iter()
                .map(|v| if v.is_nan() { 0.0 } else { *v as f64 })
                .sum();
            track_counts.push(count);
        }

        let avg_count = track_counts.iter().sum::<f64>() / track_counts.len() as f64;
        scored.push(ScoredPeak {
            window,
            track_counts,
            avg_count,
        });
        pb.inc(1);
    }
    pb.finish_and_clear();

    Ok(scored)
}
