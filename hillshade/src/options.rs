use clap::Parser;
use std::path::PathBuf;

/// Render a shaded relief image from a 16-bit grayscale heightmap.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Settings file (JSON).
    #[arg(default_value = "hillshade_settings.json")]
    pub settings: PathBuf,

    /// Output image, overrides the settings' `outPath`.
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Don't display a progress bar.
    #[arg(short, long)]
    pub quiet: bool,
}
