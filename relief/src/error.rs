use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ReliefError {
    #[error("missing required parameter '{0}'")]
    Builder(&'static str),

    #[error("gradient requires at least one color stop")]
    NoColorStops,

    #[error("color stop {index} has non-finite height {height}")]
    NonFiniteStop { index: usize, height: f64 },

    #[error("color stop {index} is lower than the stop before it")]
    UnsortedStops { index: usize },

    #[error("invalid height range [{min}, {max}]")]
    HeightRange { min: f64, max: f64 },

    #[error("invalid {name} {value}, expected a finite positive number")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("invalid water height {0}")]
    WaterHeight(f64),

    #[error("{width}x{height} grid does not match {len} samples")]
    Dimensions {
        width: usize,
        height: usize,
        len: usize,
    },

    #[error("{width}x{height} grid is smaller than the 3x3 shading window")]
    GridTooSmall { width: usize, height: usize },
}
