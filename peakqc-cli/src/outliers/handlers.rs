use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;

use peakqc_core::utils::read_chrom_sizes;
use peakqc_outliers::config::TaskConfig;
use peakqc_outliers::filter::{OutlierParams, filter_outlier_peaks};
use peakqc_outliers::writing::write_peaks;

pub fn run_outliers(matches: &ArgMatches) -> Result<()> {
    let input_data = matches
        .get_one::<String>("input-data")
        .expect("--input-data is required");
    let task_name = matches
        .get_one::<String>("task")
        .expect("--task is required");
    let chrom_sizes_path = matches
        .get_one::<String>("chrom-sizes")
        .expect("--chrom-sizes is required");
    let chroms: HashSet<String> = matches
        .get_many::<String>("chroms")
        .expect("--chroms is required")
        .cloned()
        .collect();
    let sequence_len: u32 = matches
        .get_one::<String>("sequence-len")
        .expect("--sequence-len is required")
        .parse()
        .context("--sequence-len must be a positive integer")?;
    let quantile: f64 = matches
        .get_one::<String>("quantile")
        .unwrap()
        .parse()
        .context("--quantile must be a number")?;
    let scale_factor: f64 = matches
        .get_one::<String>("quantile-value-scale-factor")
        .unwrap()
        .parse()
        .context("--quantile-value-scale-factor must be a number")?;
    let keep_duplicates = matches.get_flag("keep-duplicates");
    let output_bed = matches
        .get_one::<String>("output-bed")
        .expect("--output-bed is required");

    let config = TaskConfig::from_file(Path::new(input_data))?;
    let task = config.task(task_name)?;
    let chrom_sizes = read_chrom_sizes(Path::new(chrom_sizes_path))?;

    let params = OutlierParams {
        flank: sequence_len / 2,
        quantile,
        scale_factor,
        drop_duplicates: !keep_duplicates,
    };

    let (kept, stats) = filter_outlier_peaks(task, &chroms, &chrom_sizes, &params)?;
    write_peaks(&kept, Path::new(output_bed))?;

    eprintln!(
        "Kept {} of {} peaks. Output written to {}",
        stats.trim_boundary, stats.n_input, output_bed
    );

    Ok(())
}
