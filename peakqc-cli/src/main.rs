mod outliers;

use anyhow::Result;
use clap::Command;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const PKG_NAME: &str = "peakqc";
    pub const BIN_NAME: &str = "peakqc";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .author("Databio")
        .about("Quality-control tools for genomic peak-call sets.")
        .subcommand_required(true)
        .subcommand(outliers::cli::create_outliers_cli())
}

fn main() -> Result<()> {
    pretty_env_logger::formatted_builder()
        .parse_filters(&std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()))
        .init();

    let app = build_parser();
    let matches = app.get_matches();

    match matches.subcommand() {
        //
        // OUTLIERS
        //
        Some((outliers::cli::OUTLIERS_CMD, matches)) => {
            outliers::handlers::run_outliers(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
