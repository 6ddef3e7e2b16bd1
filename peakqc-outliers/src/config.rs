//! Task configuration: a JSON object mapping task names to their declared
//! peak (loci) and signal sources.
//!
//! ```json
//! {
//!     "0": {
//!         "loci": { "source": ["peaks.narrowPeak"] },
//!         "signal": { "source": ["plus.bw", "minus.bw"] }
//!     }
//! }
//! ```
//!
//! Unknown keys inside a task are ignored so that richer experiment
//! descriptions can share the file.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use peakqc_core::errors::PeakQcError;
use peakqc_core::utils::get_dynamic_reader;

#[derive(Debug, Clone, Deserialize)]
pub struct SourceList {
    pub source: Vec<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Task {
    pub loci: SourceList,
    pub signal: SourceList,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TaskConfig(HashMap<String, Task>);

impl TaskConfig {
    ///
    /// Load a task configuration from a JSON file, plain or gzip'd.
    ///
    pub fn from_file(path: &Path) -> Result<Self, PeakQcError> {
        if !path.exists() {
            return Err(PeakQcError::MissingResource(path.to_path_buf()));
        }

        let reader = get_dynamic_reader(path)?;
        serde_json::from_reader(reader).map_err(|e| {
            PeakQcError::Configuration(format!(
                "unable to load {}, valid JSON expected: {}",
                path.display(),
                e
            ))
        })
    }

    ///
    /// Look up a task by name. The task must declare at least one loci source
    /// and one signal source.
    ///
    pub fn task(&self, name: &str) -> Result<&Task, PeakQcError> {
        let task = self.0.get(name).ok_or_else(|| {
            PeakQcError::Configuration(format!("task '{}' not found in the configuration", name))
        })?;

        if task.loci.source.is_empty() {
            return Err(PeakQcError::Configuration(format!(
                "task '{}' declares no loci sources",
                name
            )));
        }
        if task.signal.source.is_empty() {
            return Err(PeakQcError::Configuration(format!(
                "task '{}' declares no signal sources",
                name
            )));
        }

        Ok(task)
    }
}
