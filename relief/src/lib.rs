//! # Shaded Relief
//!
//! `relief` colors a 16-bit elevation grid by height and darkens each
//! pixel by a simulated directional light.
//!
//! Each output pixel depends only on the input grid and the renderer's
//! configuration, so [`Relief::render`] computes rows in parallel.

pub mod color;
mod error;
pub mod gradient;
mod grid;
pub mod height;
pub mod illumination;
mod render;
pub mod surface;

pub use crate::{
    color::{Hsla, Rgba},
    error::ReliefError,
    gradient::{ColorStop, Gradient},
    grid::{ElevationGrid, RgbaGrid},
    height::HeightRange,
    illumination::{Illuminator, Light},
    render::{Relief, ReliefBuilder},
    surface::SurfaceGradient,
};
