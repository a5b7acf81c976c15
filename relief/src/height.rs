use crate::ReliefError;

/// Number of distinct raw sample values in a 16-bit heightmap.
const RAW_SPAN: f64 = 65536.0;

/// Maps raw 16-bit samples onto a physical elevation range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeightRange {
    min: f64,
    max: f64,
}

impl HeightRange {
    pub fn new(min: f64, max: f64) -> Result<Self, ReliefError> {
        if min.is_finite() && max.is_finite() && min < max {
            Ok(Self { min, max })
        } else {
            Err(ReliefError::HeightRange { min, max })
        }
    }

    /// Elevation units per raw sample step.
    pub fn scale(&self) -> f64 {
        (self.max - self.min) / RAW_SPAN
    }

    /// Elevation of raw sample `0`.
    pub fn offset(&self) -> f64 {
        self.min
    }

    /// Returns the elevation represented by `raw`.
    pub fn elevation(&self, raw: u16) -> f64 {
        f64::from(raw) * self.scale() + self.offset()
    }
}

#[cfg(test)]
mod tests {
    use super::HeightRange;
    use crate::ReliefError;
    use approx::assert_relative_eq;

    #[test]
    fn test_elevation() {
        let range = HeightRange::new(-100.0, 65436.0).unwrap();
        assert_relative_eq!(range.scale(), 1.0);
        assert_relative_eq!(range.elevation(0), -100.0);
        assert_relative_eq!(range.elevation(32768), 32668.0);
        assert_relative_eq!(range.elevation(u16::MAX), 65435.0);
    }

    #[test]
    fn test_invalid_range() {
        assert_eq!(
            HeightRange::new(10.0, 10.0),
            Err(ReliefError::HeightRange {
                min: 10.0,
                max: 10.0
            })
        );
        assert!(HeightRange::new(f64::NAN, 10.0).is_err());
        assert!(HeightRange::new(0.0, f64::INFINITY).is_err());
    }
}
