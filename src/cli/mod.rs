use clap::Parser;
use std::path::PathBuf;

pub mod commands;

#[derive(Parser, Debug)]
#[command(name = "geosave")]
#[command(about = "Resolve your address once and keep its coordinates in a dotfile")]
#[command(version)]
pub struct Cli {
    /// Configuration file (defaults to ~/.saveConfig.json)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Geocoding endpoint
    #[arg(long, hide = true, default_value = crate::geocoding::google::DEFAULT_ENDPOINT)]
    pub geocode_url: String,
}
