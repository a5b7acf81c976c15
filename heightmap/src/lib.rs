//! Raster boundary for shaded relief rendering.
//!
//! Heightmaps are single-channel 16-bit images, typically PNG. Rendered
//! output is written as 8-bit RGBA PNG.

mod error;

pub use crate::error::HeightmapError;
use image::{
    codecs::png::PngEncoder,
    imageops::{self, FilterType},
    io::Reader,
    ColorType, DynamicImage, ImageBuffer, ImageEncoder, Luma,
};
use log::{debug, info, warn};
use relief::{ElevationGrid, RgbaGrid};
use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::Path,
};

type Luma16Image = ImageBuffer<Luma<u16>, Vec<u16>>;

/// Returns the heightmap decoded from the image at `path`.
pub fn load<P: AsRef<Path>>(path: P) -> Result<ElevationGrid, HeightmapError> {
    let path = path.as_ref();
    let image = Reader::open(path)?.with_guessed_format()?.decode()?;
    let grid = from_image(image)?;
    info!(
        "loaded {}x{} heightmap from {}",
        grid.width(),
        grid.height(),
        path.display()
    );
    Ok(grid)
}

/// Converts a decoded image into a heightmap.
///
/// Only 16-bit single-channel images are accepted, other layouts would
/// silently lose or invent elevation precision.
pub fn from_image(image: DynamicImage) -> Result<ElevationGrid, HeightmapError> {
    match image {
        DynamicImage::ImageLuma16(buf) => {
            let (width, height) = buf.dimensions();
            Ok(ElevationGrid::new(
                width as usize,
                height as usize,
                buf.into_raw(),
            )?)
        }
        other => Err(HeightmapError::Format(other.color())),
    }
}

/// Resamples `grid` by `out_scale` with bilinear filtering.
///
/// Output dimensions are the input dimensions times `out_scale`,
/// rounded down. A scale of exactly `1.0` returns `grid` untouched.
pub fn resize(grid: ElevationGrid, out_scale: f64) -> Result<ElevationGrid, HeightmapError> {
    if (out_scale - 1.0).abs() < f64::EPSILON {
        return Ok(grid);
    }
    if !(out_scale.is_finite() && out_scale > 0.0) {
        return Err(HeightmapError::Scale(out_scale));
    }

    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    let (width, height) = (
        (grid.width() as f64 * out_scale) as usize,
        (grid.height() as f64 * out_scale) as usize,
    );
    if width == 0 || height == 0 {
        return Err(HeightmapError::Scale(out_scale));
    }

    let (src_width, src_height) = dimensions(grid.width(), grid.height())?;
    let (dst_width, dst_height) = dimensions(width, height)?;
    let src = Luma16Image::from_raw(src_width, src_height, grid.samples().to_vec()).ok_or(
        HeightmapError::Dimensions {
            width: grid.width(),
            height: grid.height(),
        },
    )?;
    let dst = imageops::resize(&src, dst_width, dst_height, FilterType::Triangle);
    debug!(
        "resized heightmap {}x{} -> {width}x{height}",
        grid.width(),
        grid.height()
    );

    Ok(ElevationGrid::new(width, height, dst.into_raw())?)
}

/// Writes `image` to `path` as an RGBA PNG.
///
/// The file is written beside `path` first and moved into place once
/// encoding succeeds, so a failed run never leaves a partial image.
pub fn save<P: AsRef<Path>>(path: P, image: RgbaGrid) -> Result<(), HeightmapError> {
    let path = path.as_ref();
    let (width, height) = dimensions(image.width(), image.height())?;
    let tmp_path = {
        let mut p = path.to_owned();
        p.set_extension("tmp");
        p
    };

    let written = (|| {
        let mut file = BufWriter::new(File::create(&tmp_path)?);
        PngEncoder::new(&mut file).write_image(
            &image.into_raw(),
            width,
            height,
            ColorType::Rgba8,
        )?;
        file.flush()?;
        Ok::<(), HeightmapError>(())
    })();

    match written {
        Ok(()) => {
            fs::rename(&tmp_path, path)?;
            info!("wrote {width}x{height} image to {}", path.display());
            Ok(())
        }
        Err(e) => {
            match fs::remove_file(&tmp_path) {
                Err(rm) if rm.kind() != io::ErrorKind::NotFound => {
                    warn!("failed to remove {}: {rm}", tmp_path.display());
                }
                _ => (),
            }
            Err(e)
        }
    }
}

fn dimensions(width: usize, height: usize) -> Result<(u32, u32), HeightmapError> {
    match (u32::try_from(width), u32::try_from(height)) {
        (Ok(w), Ok(h)) => Ok((w, h)),
        _ => Err(HeightmapError::Dimensions { width, height }),
    }
}
