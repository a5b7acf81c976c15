use crate::ElevationGrid;

/// Local elevation change per pixel, in raw sample units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SurfaceGradient {
    pub dzdx: f64,
    pub dzdy: f64,
}

impl SurfaceGradient {
    /// Estimates the gradient at `(x, y)` with a 3x3 Horn kernel.
    ///
    /// Edge pixels borrow the full window of their inward neighbor
    /// rather than shrinking or padding the kernel. `grid` must be at
    /// least 3x3.
    pub fn estimate(grid: &ElevationGrid, x: usize, y: usize) -> Self {
        let tx = sampling_center(x, grid.width());
        let ty = sampling_center(y, grid.height());
        let z = |dx: usize, dy: usize| f64::from(grid.get(tx + dx - 1, ty + dy - 1));

        let (a, b, c) = (z(0, 0), z(1, 0), z(2, 0));
        let (d, f) = (z(0, 1), z(2, 1));
        let (g, h, i) = (z(0, 2), z(1, 2), z(2, 2));

        Self {
            dzdx: ((c + 2.0 * f + i) - (a + 2.0 * d + g)) / 8.0,
            dzdy: ((g + 2.0 * h + i) - (a + 2.0 * b + c)) / 8.0,
        }
    }

    /// Gradient magnitude.
    pub fn magnitude(&self) -> f64 {
        self.dzdx.hypot(self.dzdy)
    }

    pub fn is_flat(&self) -> bool {
        self.dzdx == 0.0 && self.dzdy == 0.0
    }
}

/// Returns the kernel center used for position `pos` along an axis of
/// `len` samples.
pub fn sampling_center(pos: usize, len: usize) -> usize {
    if pos == 0 {
        pos + 1
    } else if pos + 1 == len {
        pos - 1
    } else {
        pos
    }
}

#[cfg(test)]
mod tests {
    use super::{sampling_center, SurfaceGradient};
    use crate::ElevationGrid;
    use approx::assert_relative_eq;

    /// Builds a grid where each sample is `f(x, y)`.
    fn grid_from(width: usize, height: usize, f: impl Fn(usize, usize) -> u16) -> ElevationGrid {
        let samples = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .map(|(x, y)| f(x, y))
            .collect();
        ElevationGrid::new(width, height, samples).unwrap()
    }

    #[test]
    fn test_sampling_center() {
        assert_eq!(sampling_center(0, 5), 1);
        assert_eq!(sampling_center(1, 5), 1);
        assert_eq!(sampling_center(3, 5), 3);
        assert_eq!(sampling_center(4, 5), 3);
        assert_eq!(sampling_center(0, 3), 1);
        assert_eq!(sampling_center(2, 3), 1);
    }

    #[test]
    fn test_flat() {
        let grid = ElevationGrid::filled(3, 3, 32768).unwrap();
        for y in 0..3 {
            for x in 0..3 {
                let g = SurfaceGradient::estimate(&grid, x, y);
                assert!(g.is_flat());
            }
        }
    }

    #[test]
    fn test_planar_ramps() {
        let east = grid_from(4, 4, |x, _| 100 + 10 * x as u16);
        let g = SurfaceGradient::estimate(&east, 2, 1);
        assert_relative_eq!(g.dzdx, 10.0);
        assert_relative_eq!(g.dzdy, 0.0);

        let south = grid_from(4, 4, |_, y| 100 + 7 * y as u16);
        let g = SurfaceGradient::estimate(&south, 1, 2);
        assert_relative_eq!(g.dzdx, 0.0);
        assert_relative_eq!(g.dzdy, 7.0);
        assert_relative_eq!(g.magnitude(), 7.0);
    }

    #[test]
    fn test_edges_reuse_inner_window() {
        // Curved surface so neighboring windows differ.
        let grid = grid_from(5, 5, |x, y| (x * x * 10 + y * 3) as u16);
        assert_eq!(
            SurfaceGradient::estimate(&grid, 0, 0),
            SurfaceGradient::estimate(&grid, 1, 1)
        );
        assert_eq!(
            SurfaceGradient::estimate(&grid, 4, 2),
            SurfaceGradient::estimate(&grid, 3, 2)
        );
        assert_eq!(
            SurfaceGradient::estimate(&grid, 2, 4),
            SurfaceGradient::estimate(&grid, 2, 3)
        );
        assert_ne!(
            SurfaceGradient::estimate(&grid, 1, 1),
            SurfaceGradient::estimate(&grid, 2, 1)
        );
    }

    #[test]
    fn test_kernel_weights() {
        // Single raised sample east of center.
        let grid = grid_from(3, 3, |x, y| if (x, y) == (2, 1) { 80 } else { 0 });
        let g = SurfaceGradient::estimate(&grid, 1, 1);
        assert_relative_eq!(g.dzdx, 20.0);
        assert_relative_eq!(g.dzdy, 0.0);
    }
}
