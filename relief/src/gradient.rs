//! Elevation to color mapping.
//!
//! A [`Gradient`] is an ordered list of [`ColorStop`]s. Elevations
//! between two stops blend the neighbors in HSL space, taking the
//! short way around the hue circle. Elevations outside the list are
//! clamped to the nearest end stop.

use crate::{
    color::{Hsla, Rgba, HUE_TURN},
    ReliefError,
};

/// An elevation threshold paired with a color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    pub height: f64,
    pub color: Rgba,
}

impl ColorStop {
    pub fn new(height: f64, color: impl Into<Rgba>) -> Self {
        Self {
            height,
            color: color.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    /// Sorted by ascending height, never empty.
    stops: Box<[ColorStop]>,
}

impl Gradient {
    pub fn new(stops: Vec<ColorStop>) -> Result<Self, ReliefError> {
        if stops.is_empty() {
            return Err(ReliefError::NoColorStops);
        }
        for (index, stop) in stops.iter().enumerate() {
            if !stop.height.is_finite() {
                return Err(ReliefError::NonFiniteStop {
                    index,
                    height: stop.height,
                });
            }
        }
        if let Some(index) = stops
            .windows(2)
            .position(|pair| pair[1].height < pair[0].height)
        {
            return Err(ReliefError::UnsortedStops { index: index + 1 });
        }
        Ok(Self {
            stops: stops.into_boxed_slice(),
        })
    }

    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    /// Returns the color for `elevation`.
    pub fn color_at(&self, elevation: f64) -> Rgba {
        match self.stops.iter().position(|stop| elevation <= stop.height) {
            Some(0) => self.stops[0].color.to_opaque(),
            Some(i) => blend(&self.stops[i - 1], &self.stops[i], elevation),
            None => self.stops[self.stops.len() - 1].color.to_opaque(),
        }
    }
}

/// Blends `prev` and `curr` for an elevation in `(prev.height, curr.height]`.
fn blend(prev: &ColorStop, curr: &ColorStop, elevation: f64) -> Rgba {
    // 1 at `prev`, 0 at `curr`.
    let f = (curr.height - elevation) / (curr.height - prev.height);
    let p = Hsla::from(prev.color);
    let c = Hsla::from(curr.color);
    Rgba::from(Hsla {
        h: blend_hue(p.h, c.h, f),
        s: p.s * f + c.s * (1.0 - f),
        l: p.l * f + c.l * (1.0 - f),
        a: 1.0,
    })
}

/// Interpolates between two hues along the shorter arc.
pub(crate) fn blend_hue(prev: f64, curr: f64, f: f64) -> f64 {
    let half_turn = HUE_TURN / 2.0;
    let (prev, curr) = match prev - curr {
        d if d < -half_turn => (prev + HUE_TURN, curr),
        d if d >= half_turn => (prev, curr + HUE_TURN),
        _ => (prev, curr),
    };
    (prev * f + curr * (1.0 - f)).rem_euclid(HUE_TURN)
}
