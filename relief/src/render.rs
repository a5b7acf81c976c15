//! Per-pixel compositing of elevation color and hillshade.

use crate::{
    color::{Hsla, Rgba},
    gradient::Gradient,
    height::HeightRange,
    illumination::{Illuminator, Light},
    surface::SurfaceGradient,
    ElevationGrid, ReliefError, RgbaGrid,
};
use log::debug;
use rayon::prelude::*;

/// Smallest grid dimension that fits a full shading window.
const MIN_DIMENSION: usize = 3;

/// A configured shaded relief renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct Relief {
    range: HeightRange,
    gradient: Gradient,
    illuminator: Illuminator,
    /// Pixels at or below this elevation are left unshaded.
    water: Option<f64>,
}

impl Relief {
    pub fn builder() -> ReliefBuilder {
        ReliefBuilder {
            height_range: None,
            gradient: None,
            light: None,
            height_pixel_ratio: None,
            out_scale: 1.0,
            water: None,
        }
    }

    pub fn height_range(&self) -> HeightRange {
        self.range
    }

    pub fn gradient(&self) -> &Gradient {
        &self.gradient
    }

    pub fn illuminator(&self) -> &Illuminator {
        &self.illuminator
    }

    /// Returns the final color of the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside `grid` or if a shaded pixel's
    /// grid is smaller than 3x3. [`Relief::render`] checks both up
    /// front.
    pub fn pixel(&self, grid: &ElevationGrid, x: usize, y: usize) -> Rgba {
        let elevation = self.range.elevation(grid.get(x, y));
        let base = self.gradient.color_at(elevation);
        if self.is_under_water(elevation) {
            return base;
        }
        let shade = self
            .illuminator
            .shade(SurfaceGradient::estimate(grid, x, y));
        let mut hsla = Hsla::from(base);
        hsla.l *= shade;
        Rgba::from(hsla).to_opaque()
    }

    /// Renders every pixel of `grid`.
    pub fn render(&self, grid: &ElevationGrid) -> Result<RgbaGrid, ReliefError> {
        self.render_with_progress(grid, || ())
    }

    /// Renders every pixel of `grid`, calling `on_row` as each row
    /// completes.
    ///
    /// Rows are computed in parallel and may complete in any order.
    pub fn render_with_progress<F>(
        &self,
        grid: &ElevationGrid,
        on_row: F,
    ) -> Result<RgbaGrid, ReliefError>
    where
        F: Fn() + Sync,
    {
        let (width, height) = (grid.width(), grid.height());
        if width < MIN_DIMENSION || height < MIN_DIMENSION {
            return Err(ReliefError::GridTooSmall { width, height });
        }

        let now = std::time::Instant::now();
        let mut pixels = vec![Rgba::default(); width * height];
        pixels
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, pixel) in row.iter_mut().enumerate() {
                    *pixel = self.pixel(grid, x, y);
                }
                on_row();
            });
        debug!("rendered {width}x{height} in {:?}", now.elapsed());

        Ok(RgbaGrid::from_pixels(width, height, pixels))
    }

    fn is_under_water(&self, elevation: f64) -> bool {
        self.water.map_or(false, |water| elevation <= water)
    }
}

pub struct ReliefBuilder {
    /// Physical range of the raw samples (required).
    height_range: Option<HeightRange>,

    /// Elevation to color mapping (required).
    gradient: Option<Gradient>,

    /// Light direction (required).
    light: Option<Light>,

    /// Ground distance per source pixel, in elevation units (required).
    height_pixel_ratio: Option<f64>,

    /// Factor the heightmap was resized by.
    out_scale: f64,

    /// Water elevation, if pixels under water are left unshaded.
    water: Option<f64>,
}

impl ReliefBuilder {
    pub fn height_range(mut self, range: HeightRange) -> Self {
        self.height_range = Some(range);
        self
    }

    pub fn gradient(mut self, gradient: Gradient) -> Self {
        self.gradient = Some(gradient);
        self
    }

    pub fn light(mut self, light: Light) -> Self {
        self.light = Some(light);
        self
    }

    pub fn height_pixel_ratio(mut self, ratio: f64) -> Self {
        self.height_pixel_ratio = Some(ratio);
        self
    }

    pub fn out_scale(mut self, scale: f64) -> Self {
        self.out_scale = scale;
        self
    }

    pub fn water(mut self, elevation: Option<f64>) -> Self {
        self.water = elevation;
        self
    }

    pub fn build(&self) -> Result<Relief, ReliefError> {
        let range = self
            .height_range
            .ok_or(ReliefError::Builder("height_range"))?;
        let gradient = self
            .gradient
            .clone()
            .ok_or(ReliefError::Builder("gradient"))?;
        let light = self.light.ok_or(ReliefError::Builder("light"))?;
        let height_pixel_ratio = self
            .height_pixel_ratio
            .ok_or(ReliefError::Builder("height_pixel_ratio"))?;
        if let Some(water) = self.water.filter(|w| !w.is_finite()) {
            return Err(ReliefError::WaterHeight(water));
        }

        let illuminator =
            Illuminator::new(light, range.scale(), height_pixel_ratio, self.out_scale)?;

        Ok(Relief {
            range,
            gradient,
            illuminator,
            water: self.water,
        })
    }
}
