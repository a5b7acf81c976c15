//! Lambertian hillshading.

use crate::{surface::SurfaceGradient, ReliefError};
use std::f64::consts::FRAC_PI_2;

/// Direction of a distant light source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    /// Angle from vertical, in radians.
    pub zenith: f64,
    /// Math-convention angle (counterclockwise from east), in radians.
    pub azimuth: f64,
}

impl Light {
    /// Creates a light from a pitch above the horizon and a compass
    /// yaw (clockwise from north), both in degrees.
    pub fn from_degrees(pitch_deg: f64, yaw_deg: f64) -> Self {
        Self {
            zenith: (90.0 - pitch_deg).to_radians(),
            azimuth: (450.0 - yaw_deg).rem_euclid(360.0).to_radians(),
        }
    }
}

/// Converts surface gradients into illumination factors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Illuminator {
    light: Light,
    cos_zenith: f64,
    sin_zenith: f64,
    /// Converts raw gradient magnitude into rise over run.
    slope_scale: f64,
}

impl Illuminator {
    /// `height_scale` is elevation per raw sample step,
    /// `height_pixel_ratio` is ground distance per source pixel, and
    /// `out_scale` is the resize factor applied to the heightmap.
    pub fn new(
        light: Light,
        height_scale: f64,
        height_pixel_ratio: f64,
        out_scale: f64,
    ) -> Result<Self, ReliefError> {
        check_positive("height pixel ratio", height_pixel_ratio)?;
        check_positive("output scale", out_scale)?;
        Ok(Self {
            light,
            cos_zenith: light.zenith.cos(),
            sin_zenith: light.zenith.sin(),
            slope_scale: height_scale / height_pixel_ratio * out_scale,
        })
    }

    pub fn light(&self) -> Light {
        self.light
    }

    /// Angle between the surface normal and vertical, in radians.
    pub fn slope(&self, gradient: SurfaceGradient) -> f64 {
        (self.slope_scale * gradient.magnitude()).atan()
    }

    /// Returns the illumination factor in `[0, 1]`.
    pub fn shade(&self, gradient: SurfaceGradient) -> f64 {
        let slope = self.slope(gradient);
        let shade = self.cos_zenith * slope.cos()
            + self.sin_zenith * slope.sin() * (self.light.azimuth - aspect(gradient)).cos();
        shade.clamp(0.0, 1.0)
    }
}

/// Direction the surface faces, in radians.
///
/// A flat surface has no aspect and reports `0`; its slope is also `0`
/// so the value never reaches [`Illuminator::shade`]'s result.
pub fn aspect(SurfaceGradient { dzdx, dzdy }: SurfaceGradient) -> f64 {
    if dzdx != 0.0 {
        dzdy.atan2(-dzdx)
    } else if dzdy > 0.0 {
        FRAC_PI_2
    } else if dzdy < 0.0 {
        3.0 * FRAC_PI_2
    } else {
        0.0
    }
}

fn check_positive(name: &'static str, value: f64) -> Result<(), ReliefError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ReliefError::InvalidParameter { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::{aspect, Illuminator, Light};
    use crate::{surface::SurfaceGradient, ReliefError};
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    fn gradient(dzdx: f64, dzdy: f64) -> SurfaceGradient {
        SurfaceGradient { dzdx, dzdy }
    }

    #[test]
    fn test_light_from_degrees() {
        let overhead = Light::from_degrees(90.0, 0.0);
        assert_relative_eq!(overhead.zenith, 0.0);
        // North is straight up in math convention.
        assert_relative_eq!(overhead.azimuth, FRAC_PI_2);

        let nw = Light::from_degrees(45.0, 315.0);
        assert_relative_eq!(nw.zenith, FRAC_PI_4);
        assert_relative_eq!(nw.azimuth, 135f64.to_radians());

        let east = Light::from_degrees(30.0, 90.0);
        assert_relative_eq!(east.azimuth, 0.0);
    }

    #[test]
    fn test_flat_shade_is_cos_zenith() {
        for pitch in [0.0, 15.0, 45.0, 60.0, 90.0] {
            for yaw in [0.0, 90.0, 180.0, 271.0] {
                let light = Light::from_degrees(pitch, yaw);
                let illum = Illuminator::new(light, 1.0, 30.0, 1.0).unwrap();
                assert_eq!(illum.shade(gradient(0.0, 0.0)), light.zenith.cos().clamp(0.0, 1.0));
            }
        }
    }

    #[test]
    fn test_shade_in_unit_range() {
        let values = [-1e6, -250.0, -3.5, 0.0, 0.25, 17.0, 4096.0, 1e6];
        for pitch in (-90..=90).step_by(30) {
            for yaw in (0..360).step_by(45) {
                let light = Light::from_degrees(f64::from(pitch), f64::from(yaw));
                let illum = Illuminator::new(light, 0.5, 10.0, 2.0).unwrap();
                for dzdx in values {
                    for dzdy in values {
                        let shade = illum.shade(gradient(dzdx, dzdy));
                        assert!((0.0..=1.0).contains(&shade), "shade {shade} out of range");
                    }
                }
            }
        }
    }

    #[test]
    fn test_slope_scaling() {
        let light = Light::from_degrees(45.0, 315.0);
        // One raw step per pixel, one meter per step, one meter per pixel.
        let illum = Illuminator::new(light, 1.0, 1.0, 1.0).unwrap();
        assert_relative_eq!(illum.slope(gradient(1.0, 0.0)), FRAC_PI_4);
        // Upscaling by 2 cancels twice the ground distance per pixel.
        let resized = Illuminator::new(light, 1.0, 2.0, 2.0).unwrap();
        assert_relative_eq!(resized.slope(gradient(1.0, 0.0)), FRAC_PI_4);
    }

    #[test]
    fn test_aspect() {
        assert_relative_eq!(aspect(gradient(1.0, 0.0)), PI);
        assert_relative_eq!(aspect(gradient(-1.0, 0.0)), 0.0);
        assert_relative_eq!(aspect(gradient(0.0, 2.0)), FRAC_PI_2);
        assert_relative_eq!(aspect(gradient(0.0, -2.0)), 3.0 * FRAC_PI_2);
        assert_eq!(aspect(gradient(0.0, 0.0)), 0.0);
        assert_relative_eq!(aspect(gradient(-1.0, -1.0)), -FRAC_PI_4);
    }

    #[test]
    fn test_facing_light_is_brighter() {
        // Light from the west at 45 degrees.
        let light = Light::from_degrees(45.0, 270.0);
        let illum = Illuminator::new(light, 1.0, 1.0, 1.0).unwrap();
        // Surface rising to the east faces west.
        let facing = illum.shade(gradient(1.0, 0.0));
        let away = illum.shade(gradient(-1.0, 0.0));
        assert_relative_eq!(facing, 1.0, epsilon = 1e-12);
        assert_relative_eq!(away, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_invalid_parameters() {
        let light = Light::from_degrees(45.0, 315.0);
        assert_eq!(
            Illuminator::new(light, 1.0, 0.0, 1.0),
            Err(ReliefError::InvalidParameter {
                name: "height pixel ratio",
                value: 0.0
            })
        );
        assert!(Illuminator::new(light, 1.0, 1.0, f64::NAN).is_err());
    }
}
