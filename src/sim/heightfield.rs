//! Seafloor height sampling
//!
//! Heightfields are sampled in their own coordinates, `[0, 2 * half_size]` on
//! both axes. World (0, 0) sits at the centre of that square.

use thiserror::Error;

/// Rejected heightfield construction input
#[derive(Debug, Error, PartialEq)]
pub enum HeightfieldError {
    #[error("heightfield half size must be positive and finite, got {0}")]
    InvalidHalfSize(f32),
}

/// Seafloor elevation function
pub trait Heightfield {
    /// Elevation at heightfield coordinates `(x, z)`
    fn sample_height(&self, x: f32, z: f32) -> f32;

    /// Horizontal half-extent of the field
    fn half_size(&self) -> f32;

    /// Whether heightfield coordinates lie in the sampled domain
    fn in_domain(&self, hx: f32, hz: f32) -> bool {
        let size = self.half_size() * 2.0;
        (0.0..=size).contains(&hx) && (0.0..=size).contains(&hz)
    }

    /// Elevation under a world position, `None` outside the domain
    fn height_at_world(&self, x: f32, z: f32) -> Option<f32> {
        let (hx, hz) = (x + self.half_size(), z + self.half_size());
        self.in_domain(hx, hz).then(|| self.sample_height(hx, hz))
    }

    /// Elevation under a world position, clamping the query into the domain
    fn height_at_world_clamped(&self, x: f32, z: f32) -> f32 {
        let size = self.half_size() * 2.0;
        let hx = (x + self.half_size()).max(0.0).min(size);
        let hz = (z + self.half_size()).max(0.0).min(size);
        self.sample_height(hx, hz)
    }
}

/// Level seafloor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatSeafloor {
    pub height: f32,
    pub half_size: f32,
}

impl FlatSeafloor {
    pub fn new(height: f32, half_size: f32) -> Self {
        Self { height, half_size }
    }
}

impl Heightfield for FlatSeafloor {
    fn sample_height(&self, _x: f32, _z: f32) -> f32 {
        self.height
    }

    fn half_size(&self) -> f32 {
        self.half_size
    }
}

/// Gentle dunes from a few summed sines (headless runs)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RollingSeafloor {
    /// Mean seafloor elevation
    pub base: f32,
    /// Peak deviation from `base`
    pub amplitude: f32,
    pub half_size: f32,
}

impl Default for RollingSeafloor {
    fn default() -> Self {
        Self {
            base: -60.0,
            amplitude: 8.0,
            half_size: 400.0,
        }
    }
}

impl Heightfield for RollingSeafloor {
    fn sample_height(&self, x: f32, z: f32) -> f32 {
        let dunes = (x * 0.021).sin() * 0.5
            + (z * 0.017).cos() * 0.3
            + ((x + z) * 0.043).sin() * 0.2;
        self.base + dunes * self.amplitude
    }

    fn half_size(&self) -> f32 {
        self.half_size
    }
}

/// Row-major grid of samples covering `[0, 2 * half_size]²`, bilinear between nodes
#[derive(Debug, Clone, PartialEq)]
pub struct GridHeightfield {
    heights: Vec<f32>,
    resolution: usize,
    half_size: f32,
}

impl GridHeightfield {
    /// `heights` must hold `resolution * resolution` samples (resolution >= 2);
    /// a short buffer is padded with zeros
    pub fn new(
        mut heights: Vec<f32>,
        resolution: usize,
        half_size: f32,
    ) -> Result<Self, HeightfieldError> {
        if !(half_size.is_finite() && half_size > 0.0) {
            return Err(HeightfieldError::InvalidHalfSize(half_size));
        }
        let resolution = resolution.max(2);
        if heights.len() < resolution * resolution {
            log::warn!(
                "Heightfield has {} samples, expected {}; padding with 0",
                heights.len(),
                resolution * resolution
            );
        }
        heights.resize(resolution * resolution, 0.0);
        Ok(Self {
            heights,
            resolution,
            half_size,
        })
    }

    #[inline]
    fn node(&self, col: usize, row: usize) -> f32 {
        self.heights[row * self.resolution + col]
    }
}

impl Heightfield for GridHeightfield {
    fn sample_height(&self, x: f32, z: f32) -> f32 {
        let cells = (self.resolution - 1) as f32;
        let step = self.half_size * 2.0 / cells;
        let gx = (x / step).clamp(0.0, cells);
        let gz = (z / step).clamp(0.0, cells);

        let c0 = (gx.floor() as usize).min(self.resolution - 2);
        let r0 = (gz.floor() as usize).min(self.resolution - 2);
        let fx = gx - c0 as f32;
        let fz = gz - r0 as f32;

        let top = self.node(c0, r0) * (1.0 - fx) + self.node(c0 + 1, r0) * fx;
        let bottom = self.node(c0, r0 + 1) * (1.0 - fx) + self.node(c0 + 1, r0 + 1) * fx;
        top * (1.0 - fz) + bottom * fz
    }

    fn half_size(&self) -> f32 {
        self.half_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_world_to_heightfield_offset() {
        let grid = GridHeightfield::new(vec![0.0, 1.0, 2.0, 3.0], 2, 10.0).unwrap();
        // World origin is the middle of the field
        assert_eq!(grid.height_at_world(0.0, 0.0), Some(1.5));
        assert_eq!(grid.height_at_world(-10.0, -10.0), Some(0.0));
        assert_eq!(grid.height_at_world(10.0, 10.0), Some(3.0));
    }

    #[test]
    fn test_outside_domain() {
        let floor = FlatSeafloor::new(-20.0, 100.0);
        assert_eq!(floor.height_at_world(100.0, 0.0), Some(-20.0));
        assert_eq!(floor.height_at_world(100.5, 0.0), None);
        assert_eq!(floor.height_at_world(0.0, -101.0), None);
        assert_eq!(floor.height_at_world_clamped(500.0, -500.0), -20.0);
    }

    #[test]
    fn test_grid_nodes_and_interpolation() {
        // 3x3 grid, step 5
        let heights = vec![
            0.0, 1.0, 2.0, //
            3.0, 4.0, 5.0, //
            6.0, 7.0, 8.0,
        ];
        let grid = GridHeightfield::new(heights, 3, 5.0).unwrap();
        assert_eq!(grid.sample_height(5.0, 5.0), 4.0);
        assert_eq!(grid.sample_height(10.0, 10.0), 8.0);
        assert!((grid.sample_height(2.5, 0.0) - 0.5).abs() < 1e-6);
        assert!((grid.sample_height(5.0, 7.5) - 5.5).abs() < 1e-6);
    }

    #[test]
    fn test_short_grid_is_padded() {
        let grid = GridHeightfield::new(vec![1.0], 2, 1.0).unwrap();
        assert_eq!(grid.sample_height(0.0, 0.0), 1.0);
        assert_eq!(grid.sample_height(2.0, 2.0), 0.0);
    }

    #[test]
    fn test_grid_rejects_bad_half_size() {
        for half_size in [f32::NAN, -1.0, 0.0, f32::INFINITY] {
            let err = GridHeightfield::new(vec![0.0; 4], 2, half_size).unwrap_err();
            assert!(matches!(err, HeightfieldError::InvalidHalfSize(_)));
        }
    }

    #[test]
    fn test_clamped_query_with_unsized_floor() {
        let floor = FlatSeafloor::new(-20.0, f32::NAN);
        assert_eq!(floor.height_at_world_clamped(5.0, -5.0), -20.0);
    }

    #[test]
    fn test_rolling_floor_stays_near_base() {
        let floor = RollingSeafloor::default();
        for i in 0..100 {
            let h = floor.sample_height(i as f32 * 7.3, i as f32 * 3.1);
            assert!((h - floor.base).abs() <= floor.amplitude + 1e-4);
        }
    }
}
