use clap::{Arg, ArgAction, Command};

pub use peakqc_outliers::consts::*;

pub fn create_outliers_cli() -> Command {
    Command::new(OUTLIERS_CMD)
        .author("Databio")
        .about("Remove outlier peaks from a peak-call set using bigWig signal counts.")
        .arg(
            Arg::new("input-data")
                .long("input-data")
                .required(true)
                .help("Path to the JSON task configuration"),
        )
        .arg(
            Arg::new("task")
                .long("task")
                .required(true)
                .help("Name of the task whose peaks to filter"),
        )
        .arg(
            Arg::new("chrom-sizes")
                .long("chrom-sizes")
                .required(true)
                .help("Path to chrom.sizes file"),
        )
        .arg(
            Arg::new("chroms")
                .long("chroms")
                .required(true)
                .num_args(1..)
                .help("One or more chromosomes to keep"),
        )
        .arg(
            Arg::new("sequence-len")
                .long("sequence-len")
                .required(true)
                .help("Window width in bases; each summit gets half of this on either side"),
        )
        .arg(
            Arg::new("quantile")
                .long("quantile")
                .required(false)
                .default_value(DEFAULT_QUANTILE)
                .help("Ranking quantile that anchors the cutoff"),
        )
        .arg(
            Arg::new("quantile-value-scale-factor")
                .long("quantile-value-scale-factor")
                .required(false)
                .default_value(DEFAULT_SCALE_FACTOR)
                .help("Multiplier applied to the quantile count"),
        )
        .arg(
            Arg::new("keep-duplicates")
                .long("keep-duplicates")
                .action(ArgAction::SetTrue)
                .help("Keep exact duplicate peak records instead of dropping them"),
        )
        .arg(
            Arg::new("output-bed")
                .long("output-bed")
                .required(true)
                .help("Path for the trimmed peaks file"),
        )
}
