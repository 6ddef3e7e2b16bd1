pub mod peak;
pub mod window;

// re-export for cleaner imports
pub use self::peak::{Peak, Strand, read_peaks};
pub use self::window::{PeakWindow, ScoredPeak, TrimStats};
