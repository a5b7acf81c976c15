use anyhow::{Context, Result};
use relief::{ColorStop, Gradient, HeightRange, Light, Relief, ReliefError};
use serde::Deserialize;
use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

/// Rendering settings, as read from a JSON settings file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Settings {
    /// 16-bit grayscale heightmap.
    pub image_path: PathBuf,

    /// Elevation of raw sample `0`.
    pub min_height: f64,

    /// Elevation one step past raw sample `65535`.
    pub max_height: f64,

    #[serde(default)]
    pub water_height: f64,

    /// Ground distance per heightmap pixel, in elevation units.
    pub height_pixel_ratio: f64,

    /// Light angle above the horizon, in degrees.
    #[serde(rename = "lightPitch")]
    pub light_pitch_deg: f64,

    /// Light compass bearing, in degrees.
    #[serde(rename = "lightYaw")]
    pub light_yaw_deg: f64,

    /// Leave pixels at or below `water_height` unshaded.
    #[serde(default)]
    pub no_light_under_water: bool,

    /// Sorted by ascending height.
    pub height_color_stops: Vec<HeightColorStop>,

    pub out_path: PathBuf,

    /// Heightmap resize factor applied before rendering.
    #[serde(default = "default_out_scale")]
    pub out_scale: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HeightColorStop {
    pub height: f64,
    pub color: [u8; 3],
}

fn default_out_scale() -> f64 {
    1.0
}

impl Settings {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("failed to open settings {}", path.display()))?;
        let settings = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("failed to parse settings {}", path.display()))?;
        Ok(settings)
    }

    /// Returns a renderer configured from these settings.
    pub fn relief(&self) -> Result<Relief, ReliefError> {
        let stops = self
            .height_color_stops
            .iter()
            .map(|stop| ColorStop::new(stop.height, stop.color))
            .collect();
        Relief::builder()
            .height_range(HeightRange::new(self.min_height, self.max_height)?)
            .gradient(Gradient::new(stops)?)
            .light(Light::from_degrees(self.light_pitch_deg, self.light_yaw_deg))
            .height_pixel_ratio(self.height_pixel_ratio)
            .out_scale(self.out_scale)
            .water(self.no_light_under_water.then_some(self.water_height))
            .build()
    }
}
