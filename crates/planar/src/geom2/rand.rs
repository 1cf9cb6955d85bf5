//! Random point clouds and segment pairs (replay tokens).
//!
//! Purpose
//! - Deterministic, indexable inputs for benches, demos and the `sample`
//!   CLI command.
//!
//! Model
//! - Points are uniform in the square `[-half_extent, half_extent]^2`.
//! - Optional grid snapping rounds coordinates to multiples of `grid`, which
//!   makes duplicates and exactly collinear triples common.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::Segment;

/// Point count distribution.
#[derive(Clone, Copy, Debug)]
pub enum PointCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}
impl PointCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            PointCount::Fixed(n) => n,
            PointCount::Uniform { min, max } => {
                let hi = max.max(min);
                rng.gen_range(min..=hi)
            }
        }
    }
}

/// Point-cloud sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct CloudCfg {
    pub count: PointCount,
    /// Half side length of the sampling square (centered at the origin).
    /// A non-finite value draws every point at the origin.
    pub half_extent: f64,
    /// Snap coordinates to multiples of this step, if set, finite and positive.
    pub grid: Option<f64>,
}
impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            count: PointCount::Fixed(16),
            half_extent: 10.0,
            grid: None,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

fn draw_point<R: Rng>(rng: &mut R, cfg: &CloudCfg) -> Vector2<f64> {
    // Non-finite extents collapse to the origin.
    let h = if cfg.half_extent.is_finite() {
        cfg.half_extent.abs()
    } else {
        0.0
    };
    let mut coord = || {
        // Sample on [-1, 1] and scale: `-h..=h` overflows its width for h near f64::MAX.
        let v = if h > 0.0 {
            rng.gen_range(-1.0f64..=1.0) * h
        } else {
            0.0
        };
        match cfg.grid {
            Some(step) if step.is_finite() && step > 0.0 => {
                let snapped = (v / step).round() * step;
                if snapped.is_finite() {
                    snapped
                } else {
                    v
                }
            }
            _ => v,
        }
    };
    let x = coord();
    let y = coord();
    Vector2::new(x, y)
}

/// Draw a point cloud.
pub fn draw_points(cfg: CloudCfg, tok: ReplayToken) -> Vec<Vector2<f64>> {
    let mut rng = tok.to_std_rng();
    let n = cfg.count.sample(&mut rng);
    (0..n).map(|_| draw_point(&mut rng, &cfg)).collect()
}

/// Draw two segments; `cfg.count` is ignored.
pub fn draw_segment_pair(cfg: CloudCfg, tok: ReplayToken) -> (Segment, Segment) {
    let mut rng = tok.to_std_rng();
    let s1 = Segment::new(draw_point(&mut rng, &cfg), draw_point(&mut rng, &cfg));
    let s2 = Segment::new(draw_point(&mut rng, &cfg), draw_point(&mut rng, &cfg));
    (s1, s2)
}
