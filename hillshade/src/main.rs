mod options;
mod progress;
mod settings;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use options::Cli;
use settings::Settings;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    run(&Cli::parse())
}

fn run(cli: &Cli) -> Result<()> {
    let settings = Settings::load(&cli.settings)?;
    debug!("{settings:?}");

    // Reject bad settings before touching any raster.
    let relief = settings
        .relief()
        .with_context(|| format!("invalid settings in {}", cli.settings.display()))?;

    let grid = heightmap::load(&settings.image_path).with_context(|| {
        format!(
            "failed to load heightmap {}",
            settings.image_path.display()
        )
    })?;
    let grid = heightmap::resize(grid, settings.out_scale)
        .with_context(|| format!("failed to resize heightmap by {}", settings.out_scale))?;

    #[allow(clippy::cast_possible_truncation)]
    let pb = progress::bar("Rendering".to_string(), grid.height() as u64, !cli.quiet);
    let image = relief.render_with_progress(&grid, || pb.inc(1))?;
    pb.finish_and_clear();

    let out = cli.out.as_ref().unwrap_or(&settings.out_path);
    heightmap::save(out, image)
        .with_context(|| format!("failed to write {}", out.display()))?;
    info!("done");
    Ok(())
}
