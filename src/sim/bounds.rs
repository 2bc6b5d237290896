//! Rectangular play regions
//!
//! A wanderer lives inside an axis-aligned rectangle that is resolved once,
//! at spawn, either from a box centered on the spawn point or from the
//! camera's visible area minus a pixel margin.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, require_non_negative};

/// Inclusive axis-aligned rectangle in world units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    /// Build from corners. Zero, negative or non-finite extent on either axis is rejected.
    pub fn new(min: Vec2, max: Vec2) -> Result<Self, ConfigError> {
        let size = max - min;
        // `!(x > 0)` so NaN extents are rejected too
        let finite = min.is_finite() && max.is_finite() && size.is_finite();
        if !(size.x > 0.0 && size.y > 0.0) || !finite {
            return Err(ConfigError::DegenerateBounds {
                width: size.x,
                height: size.y,
            });
        }
        Ok(Self { min, max })
    }

    /// Box of `size` centered on `center`
    pub fn centered(center: Vec2, size: Vec2) -> Result<Self, ConfigError> {
        let half = size * 0.5;
        Self::new(center - half, center + half)
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Inclusive containment test
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Clamp each axis independently into the rectangle
    #[inline]
    pub fn clamp(&self, p: Vec2) -> Vec2 {
        p.clamp(self.min, self.max)
    }

    /// Uniform random point, honoring the respawn area's inset and half-plane rule
    pub fn random_point<R: Rng + ?Sized>(&self, rng: &mut R, area: RespawnArea) -> Vec2 {
        let (x_lo, x_hi) = inset_range(self.min.x, self.max.x, area.inset());
        let (y_lo, y_hi) = match area {
            RespawnArea::Symmetric { inset } => inset_range(self.min.y, self.max.y, inset),
            // Upper half only: [center + inset, max - inset]
            RespawnArea::BiasedY { inset } => {
                let (_, hi) = inset_range(self.min.y, self.max.y, inset);
                let lo = (self.center().y + inset).min(hi);
                (lo, hi)
            }
        };
        Vec2::new(rng.random_range(x_lo..=x_hi), rng.random_range(y_lo..=y_hi))
    }
}

/// Shrink `[lo, hi]` by `inset` on both ends, collapsing to the midpoint if it would invert
fn inset_range(lo: f32, hi: f32, inset: f32) -> (f32, f32) {
    let a = lo + inset;
    let b = hi - inset;
    if a <= b {
        (a, b)
    } else {
        let mid = (lo + hi) * 0.5;
        (mid, mid)
    }
}

/// Where a respawned wanderer may reappear
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RespawnArea {
    /// Anywhere in the bounds, `inset` away from every edge
    Symmetric { inset: f32 },
    /// Upper half of the bounds only (Y restricted to `[center + inset, max - inset]`)
    BiasedY { inset: f32 },
}

impl Default for RespawnArea {
    fn default() -> Self {
        RespawnArea::Symmetric { inset: 0.0 }
    }
}

impl RespawnArea {
    pub fn inset(&self) -> f32 {
        match *self {
            RespawnArea::Symmetric { inset } | RespawnArea::BiasedY { inset } => inset,
        }
    }
}

/// Orthographic camera mapping screen pixels to world units
///
/// Pixel (0, 0) is the bottom-left corner of the screen, `screen_px` the
/// top-right; the camera looks at `center`, and `half_extents` is the world
/// distance from center to the top-right corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub screen_px: Vec2,
    pub center: Vec2,
    pub half_extents: Vec2,
}

impl Default for Viewport {
    fn default() -> Self {
        // 1080p with an orthographic size of 5
        Self {
            screen_px: Vec2::new(1920.0, 1080.0),
            center: Vec2::ZERO,
            half_extents: Vec2::new(5.0 * 16.0 / 9.0, 5.0),
        }
    }
}

impl Viewport {
    /// Project a screen pixel into world space
    pub fn screen_to_world(&self, px: Vec2) -> Vec2 {
        self.center + (px / self.screen_px * 2.0 - Vec2::ONE) * self.half_extents
    }

    /// World length of a horizontal run of `px` pixels
    pub fn px_to_world(&self, px: f32) -> f32 {
        self.screen_to_world(Vec2::new(px, 0.0)).x - self.screen_to_world(Vec2::ZERO).x
    }

    /// Visible world rectangle
    pub fn world_rect(&self) -> (Vec2, Vec2) {
        (self.center - self.half_extents, self.center + self.half_extents)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let ok = self.screen_px.x > 0.0
            && self.screen_px.y > 0.0
            && self.half_extents.x > 0.0
            && self.half_extents.y > 0.0
            && self.screen_px.is_finite()
            && self.half_extents.is_finite()
            && self.center.is_finite();
        if ok { Ok(()) } else { Err(ConfigError::DegenerateViewport) }
    }
}

/// How to derive a wanderer's bounds at spawn
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BoundsSpec {
    /// Box of `size` world units centered on the spawn position
    Anchored { size: Vec2 },
    /// Whole visible area shrunk by `margin_px` screen pixels on every side
    Viewport { viewport: Viewport, margin_px: f32 },
}

impl Default for BoundsSpec {
    fn default() -> Self {
        BoundsSpec::Viewport {
            viewport: Viewport::default(),
            margin_px: crate::consts::LASER_EDGE_MARGIN_PX,
        }
    }
}

impl BoundsSpec {
    /// Anchored square of `size_px` pixels at the sprite import scale
    pub fn anchored_px(size_px: f32) -> Self {
        BoundsSpec::Anchored {
            size: Vec2::splat(crate::px_to_world(size_px)),
        }
    }

    /// Resolve to a concrete rectangle for an entity spawned at `start`
    pub fn resolve(&self, start: Vec2) -> Result<Bounds, ConfigError> {
        match *self {
            BoundsSpec::Anchored { size } => Bounds::centered(start, size),
            BoundsSpec::Viewport {
                viewport,
                margin_px,
            } => {
                viewport.validate()?;
                require_non_negative(margin_px, ConfigError::NegativeMargin)?;
                // Converted once; the x-axis scale is used for both axes
                let margin = viewport.px_to_world(margin_px);
                let (min, max) = viewport.world_rect();
                Bounds::new(min + Vec2::splat(margin), max - Vec2::splat(margin))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_bounds_rejects_degenerate() {
        assert_eq!(
            Bounds::new(Vec2::ZERO, Vec2::new(0.0, 1.0)),
            Err(ConfigError::DegenerateBounds {
                width: 0.0,
                height: 1.0
            })
        );
        assert!(Bounds::new(Vec2::ZERO, Vec2::new(1.0, -1.0)).is_err());
        assert!(Bounds::new(Vec2::ZERO, Vec2::new(f32::NAN, 1.0)).is_err());
    }

    #[test]
    fn test_anchored_centered_on_start() {
        let spec = BoundsSpec::anchored_px(50.0);
        let bounds = spec.resolve(Vec2::new(1.0, 2.0)).unwrap();
        assert!((bounds.min - Vec2::new(0.75, 1.75)).length() < 1e-6);
        assert!((bounds.max - Vec2::new(1.25, 2.25)).length() < 1e-6);
        assert_eq!(bounds.center(), Vec2::new(1.0, 2.0));
    }

    #[test]
    fn test_viewport_margin_conversion() {
        let viewport = Viewport {
            screen_px: Vec2::new(200.0, 100.0),
            center: Vec2::ZERO,
            half_extents: Vec2::new(2.0, 1.0),
        };
        // 200 px span 4 world units -> 0.02 units per px
        assert!((viewport.px_to_world(10.0) - 0.2).abs() < 1e-6);

        let bounds = BoundsSpec::Viewport {
            viewport,
            margin_px: 10.0,
        }
        .resolve(Vec2::new(50.0, 50.0))
        .unwrap();
        assert!((bounds.min - Vec2::new(-1.8, -0.8)).length() < 1e-6);
        assert!((bounds.max - Vec2::new(1.8, 0.8)).length() < 1e-6);
    }

    #[test]
    fn test_viewport_margin_too_wide() {
        let viewport = Viewport {
            screen_px: Vec2::new(100.0, 100.0),
            center: Vec2::ZERO,
            half_extents: Vec2::new(1.0, 1.0),
        };
        let err = BoundsSpec::Viewport {
            viewport,
            margin_px: 50.0,
        }
        .resolve(Vec2::ZERO);
        assert!(matches!(err, Err(ConfigError::DegenerateBounds { .. })));
    }

    #[test]
    fn test_degenerate_viewport() {
        let viewport = Viewport {
            screen_px: Vec2::new(0.0, 100.0),
            ..Viewport::default()
        };
        let err = BoundsSpec::Viewport {
            viewport,
            margin_px: 0.0,
        }
        .resolve(Vec2::ZERO);
        assert_eq!(err, Err(ConfigError::DegenerateViewport));
    }

    #[test]
    fn test_infinite_extents_rejected() {
        let err = BoundsSpec::Anchored {
            size: Vec2::splat(f32::INFINITY),
        }
        .resolve(Vec2::ZERO);
        assert!(matches!(err, Err(ConfigError::DegenerateBounds { .. })));

        // Finite corners whose span overflows
        assert!(Bounds::new(Vec2::splat(-f32::MAX), Vec2::splat(f32::MAX)).is_err());

        let viewport = Viewport {
            half_extents: Vec2::new(f32::INFINITY, 5.0),
            ..Viewport::default()
        };
        let err = BoundsSpec::Viewport {
            viewport,
            margin_px: 10.0,
        }
        .resolve(Vec2::ZERO);
        assert_eq!(err, Err(ConfigError::DegenerateViewport));

        let err = BoundsSpec::Viewport {
            viewport: Viewport::default(),
            margin_px: f32::INFINITY,
        }
        .resolve(Vec2::ZERO);
        assert_eq!(err, Err(ConfigError::NegativeMargin(f32::INFINITY)));
    }

    #[test]
    fn test_clamp_per_axis() {
        let bounds = Bounds::centered(Vec2::ZERO, Vec2::splat(2.0)).unwrap();
        assert_eq!(bounds.clamp(Vec2::new(1.5, -3.0)), Vec2::new(1.0, -1.0));
        assert_eq!(bounds.clamp(Vec2::new(0.5, 0.5)), Vec2::new(0.5, 0.5));
        assert!(bounds.contains(Vec2::new(1.0, -1.0)));
        assert!(!bounds.contains(Vec2::new(1.0001, 0.0)));
    }

    #[test]
    fn test_random_point_symmetric_inset() {
        let bounds = Bounds::centered(Vec2::ZERO, Vec2::splat(2.0)).unwrap();
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..500 {
            let p = bounds.random_point(&mut rng, RespawnArea::Symmetric { inset: 0.25 });
            assert!(p.x >= -0.75 && p.x <= 0.75);
            assert!(p.y >= -0.75 && p.y <= 0.75);
        }
    }

    #[test]
    fn test_random_point_biased_y_upper_half() {
        let bounds = Bounds::centered(Vec2::ZERO, Vec2::splat(2.0)).unwrap();
        let mut rng = Pcg32::seed_from_u64(11);
        for _ in 0..500 {
            let p = bounds.random_point(&mut rng, RespawnArea::BiasedY { inset: 0.1 });
            assert!(p.x >= -0.9 && p.x <= 0.9);
            assert!(p.y >= 0.1 && p.y <= 0.9);
        }
    }

    #[test]
    fn test_random_point_oversized_inset_collapses() {
        let bounds = Bounds::centered(Vec2::new(3.0, 4.0), Vec2::splat(1.0)).unwrap();
        let mut rng = Pcg32::seed_from_u64(1);
        let p = bounds.random_point(&mut rng, RespawnArea::Symmetric { inset: 5.0 });
        assert_eq!(p, Vec2::new(3.0, 4.0));
    }
}
