use clap::Parser;
use std::path::PathBuf;

use crate::application::dto::TriggerMode;
use crate::config::DEFAULT_CONFIG_FILENAME;

/// Turn asset-disposition reports into asset-management import files
#[derive(Parser, Debug)]
#[command(name = "secure-erase-export")]
#[command(version)]
#[command(
    about = "Turn asset-disposition reports into asset-management import files",
    long_about = None
)]
pub struct Args {
    /// Path to the JSON config file
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_CONFIG_FILENAME)]
    pub config: PathBuf,

    /// Keep running and process reports as they arrive
    #[arg(short, long)]
    pub watch: bool,

    /// What starts a sweep in watch mode: notify or poll
    #[arg(short, long, default_value_t = TriggerMode::Notify, requires = "watch")]
    pub trigger: TriggerMode,

    /// Seconds between sweeps with --trigger poll (overrides the config file)
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub poll_interval: Option<u64>,

    /// Append the diagnostic log to this file (overrides the config file)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
