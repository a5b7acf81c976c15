use image::ColorType;
use relief::ReliefError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HeightmapError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Image(#[from] image::ImageError),

    #[error("expected a 16-bit grayscale heightmap, found {0:?}")]
    Format(ColorType),

    #[error("invalid output scale {0}")]
    Scale(f64),

    #[error("{width}x{height} image exceeds supported dimensions")]
    Dimensions { width: usize, height: usize },

    #[error("{0}")]
    Relief(#[from] ReliefError),
}
