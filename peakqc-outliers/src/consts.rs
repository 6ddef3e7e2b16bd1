pub const OUTLIERS_CMD: &str = "outliers";
pub const DEFAULT_QUANTILE: &str = "0.99";
pub const DEFAULT_SCALE_FACTOR: &str = "1.2";
