//! Terrain: one ground height per horizontal playfield unit.

use rand::Rng;

use barrage_core::constants::*;

/// Destructible heightfield. Heights are offsets from the top of the
/// playfield, so a larger value is lower ground.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Terrain {
    heights: Vec<f64>,
}

impl Terrain {
    /// Generate rolling hills for a playfield of the given size.
    ///
    /// Two fixed sine components give the shape; per-sample jitter from
    /// `rng` gives the detail, which a box blur then softens.
    pub fn generate<R: Rng>(width: usize, playfield_height: f64, rng: &mut R) -> Self {
        let base = playfield_height * TERRAIN_BASE_FRACTION;
        let heights = (0..width.max(1))
            .map(|i| {
                let i = i as f64;
                base + (i * TERRAIN_FREQ_1).sin() * TERRAIN_AMP_1
                    + (i * TERRAIN_FREQ_2).sin() * TERRAIN_AMP_2
                    + rng.gen::<f64>() * TERRAIN_NOISE
            })
            .collect();

        let mut terrain = Self { heights };
        terrain.smooth(TERRAIN_SMOOTH_RADIUS);
        terrain
    }

    /// Build a terrain from explicit heights.
    pub fn from_heights(heights: Vec<f64>) -> Self {
        Self { heights }
    }

    /// Flat ground at `height` across `width` samples.
    pub fn flat(width: usize, height: f64) -> Self {
        Self {
            heights: vec![height; width.max(1)],
        }
    }

    pub fn len(&self) -> usize {
        self.heights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }

    pub fn heights(&self) -> &[f64] {
        &self.heights
    }

    /// Ground height at horizontal position `x`.
    ///
    /// `x` is clamped into the terrain and truncated to a sample index.
    /// An empty terrain reports `f64::INFINITY` (no ground anywhere).
    pub fn height_at(&self, x: f64) -> f64 {
        match self.index_of(x) {
            Some(i) => self.heights[i],
            None => f64::INFINITY,
        }
    }

    /// Carve a semicircular crater centred on `center_x`.
    ///
    /// Every sample in `[center_x - radius, center_x + radius)` is pushed down
    /// by `sqrt(radius² - dx²) * shape_factor`. Samples outside the terrain
    /// are clipped. `_center_y` is carried for symmetry with impact points;
    /// the crater is always cut from the surface down.
    pub fn deform(&mut self, center_x: f64, _center_y: f64, radius: f64, shape_factor: f64) {
        let len = self.heights.len();
        if len == 0 || radius <= 0.0 {
            return;
        }
        let start = (center_x - radius).max(0.0).floor() as usize;
        let end = (center_x + radius).min(len as f64).floor().max(0.0) as usize;

        for i in start..end.min(len) {
            let dx = i as f64 - center_x;
            let dy = (radius * radius - dx * dx).max(0.0).sqrt();
            self.heights[i] += dy * shape_factor;
        }
    }

    /// Symmetric box blur: each sample becomes the mean of its neighbours
    /// within `radius` (fewer at the edges).
    pub fn smooth(&mut self, radius: usize) {
        let len = self.heights.len();
        let smoothed = (0..len)
            .map(|i| {
                let lo = i.saturating_sub(radius);
                let hi = (i + radius).min(len - 1);
                let window = &self.heights[lo..=hi];
                window.iter().sum::<f64>() / window.len() as f64
            })
            .collect();
        self.heights = smoothed;
    }

    /// Clamp-and-truncate `x` to a sample index.
    fn index_of(&self, x: f64) -> Option<usize> {
        let last = self.heights.len().checked_sub(1)?;
        if x.is_nan() {
            return Some(0);
        }
        Some((x.max(0.0).floor() as usize).min(last))
    }
}
