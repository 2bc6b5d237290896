//! Bounded wanderer: the laser pointer and the wandering box
//!
//! Moves in a straight line at constant speed, picks a fresh random heading
//! whenever the driver's retimer fires, and is kept inside a rectangle by a
//! [`ContainmentPolicy`]. Hits hide it for a while, then it reappears at a
//! random spot.

use glam::Vec2;
use log::{debug, trace};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

use super::bounds::{Bounds, BoundsSpec, RespawnArea};
use super::containment::ContainmentPolicy;
use super::respawn::{Contact, HitFilter, RespawnCycle};
use crate::consts::*;
use crate::direction_from_angle;
use crate::error::{ConfigError, require_non_negative, require_positive};

/// What a hidden wanderer does with its heading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HiddenDirectionPolicy {
    /// Zero the heading while hidden; a fresh one is drawn on respawn
    #[default]
    Freeze,
    /// Keep the last heading and resume with it on respawn
    Retain,
}

/// Construction-time tuning, fixed for the entity's lifetime
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WandererConfig {
    /// World units per second
    pub speed: f32,
    /// Seconds between heading changes
    pub retimer_period: f32,
    /// Seconds spent hidden after a hit
    pub hide_duration: f32,
    pub bounds: BoundsSpec,
    pub containment: ContainmentPolicy,
    pub hidden_direction: HiddenDirectionPolicy,
    pub hit_filter: HitFilter,
    pub respawn_area: RespawnArea,
}

impl Default for WandererConfig {
    fn default() -> Self {
        Self::laser_pointer()
    }
}

impl WandererConfig {
    /// The sporadic laser pointer: roams the whole screen, hides when touched
    pub fn laser_pointer() -> Self {
        Self {
            speed: LASER_SPEED,
            retimer_period: LASER_RETIMER_PERIOD,
            hide_duration: LASER_RESPAWN_DELAY,
            bounds: BoundsSpec::default(),
            containment: ContainmentPolicy::ClampOnly,
            hidden_direction: HiddenDirectionPolicy::Freeze,
            hit_filter: HitFilter::RequireBody,
            respawn_area: RespawnArea::default(),
        }
    }

    /// The wandering box: bounces around a small square around its spawn point
    pub fn wandering_box() -> Self {
        Self {
            speed: BOX_SPEED,
            retimer_period: LASER_RETIMER_PERIOD,
            hide_duration: 0.0,
            bounds: BoundsSpec::anchored_px(BOX_SIZE_PX),
            containment: ContainmentPolicy::EdgeReflect {
                edge_buffer: BOX_EDGE_BUFFER,
            },
            hidden_direction: HiddenDirectionPolicy::Retain,
            hit_filter: HitFilter::Tag("Player".to_string()),
            respawn_area: RespawnArea::default(),
        }
    }

    /// Check scalar fields and resolve bounds for a spawn at `start`
    pub fn validate(&self, start: Vec2) -> Result<Bounds, ConfigError> {
        require_positive(self.speed, ConfigError::NonPositiveSpeed)?;
        require_positive(self.retimer_period, ConfigError::NonPositiveRetimerPeriod)?;
        require_non_negative(self.hide_duration, ConfigError::NegativeHideDuration)?;
        require_non_negative(self.respawn_area.inset(), ConfigError::NegativeMargin)?;

        let bounds = self.bounds.resolve(start)?;

        if let ContainmentPolicy::EdgeReflect { edge_buffer } = self.containment {
            require_non_negative(edge_buffer, ConfigError::NegativeEdgeBuffer)?;
            // A buffer reaching the middle would make both edges "near" at once
            let half_extent = bounds.width().min(bounds.height()) * 0.5;
            if edge_buffer >= half_extent {
                return Err(ConfigError::EdgeBufferTooWide {
                    edge_buffer,
                    half_extent,
                });
            }
        }

        Ok(bounds)
    }
}

/// A single wandering entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoundedWanderer {
    position: Vec2,
    direction: Vec2,
    speed: f32,
    bounds: Bounds,
    retimer_period: f32,
    cycle: RespawnCycle,
    containment: ContainmentPolicy,
    hidden_direction: HiddenDirectionPolicy,
    hit_filter: HitFilter,
    respawn_area: RespawnArea,
}

impl BoundedWanderer {
    /// Spawn at `start`. A start outside the resolved bounds is clamped in.
    ///
    /// The initial heading is +X until the first [`retime`](Self::retime).
    pub fn new(start: Vec2, config: &WandererConfig) -> Result<Self, ConfigError> {
        let bounds = config.validate(start).inspect_err(|e| {
            log::warn!("Rejected wanderer config: {}", e);
        })?;

        let position = bounds.clamp(start);
        if position != start {
            debug!("Spawn {:?} outside bounds, clamped to {:?}", start, position);
        }

        log::info!(
            "Wanderer spawned at {:?} in [{:?}, {:?}] ({:?})",
            position,
            bounds.min,
            bounds.max,
            config.containment
        );

        Ok(Self {
            position,
            direction: Vec2::X,
            speed: config.speed,
            bounds,
            retimer_period: config.retimer_period,
            cycle: RespawnCycle::new(config.hide_duration),
            containment: config.containment,
            hidden_direction: config.hidden_direction,
            hit_filter: config.hit_filter.clone(),
            respawn_area: config.respawn_area,
        })
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn direction(&self) -> Vec2 {
        self.direction
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.cycle.is_visible()
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn retimer_period(&self) -> f32 {
        self.retimer_period
    }

    pub fn containment(&self) -> ContainmentPolicy {
        self.containment
    }

    pub fn respawn(&self) -> &RespawnCycle {
        &self.cycle
    }

    /// Teleport, clamped into bounds
    pub fn set_position(&mut self, position: Vec2) {
        self.position = self.bounds.clamp(position);
    }

    /// Override the heading. Zero-length input is ignored.
    pub fn set_direction(&mut self, direction: Vec2) {
        if let Some(dir) = direction.try_normalize() {
            self.direction = dir;
        }
    }

    /// Advance by `elapsed` seconds and apply containment.
    ///
    /// Returns the new heading if containment changed it. Hidden wanderers don't move.
    pub fn tick(&mut self, elapsed: f32) -> Option<Vec2> {
        if !self.is_visible() {
            return None;
        }
        let elapsed = elapsed.max(0.0);

        let moved = self.position + self.direction * self.speed * elapsed;
        let result = self.containment.apply(&self.bounds, moved, self.direction);
        self.position = result.position;
        self.direction = result.direction;

        trace!("Wanderer at {:?} heading {:?}", self.position, self.direction);
        result.redirected.then_some(self.direction)
    }

    /// Pick a new heading uniformly on the unit circle (visible only)
    pub fn retime<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.is_visible() {
            self.direction = random_direction(rng);
        } else if self.hidden_direction == HiddenDirectionPolicy::Freeze {
            self.direction = Vec2::ZERO;
        }
    }

    /// Unconditional hit. Returns false if already hidden.
    pub fn on_hit(&mut self) -> bool {
        if !self.cycle.on_hit() {
            debug!("Hit ignored, wanderer already hidden");
            return false;
        }
        if self.hidden_direction == HiddenDirectionPolicy::Freeze {
            self.direction = Vec2::ZERO;
        }
        debug!(
            "Wanderer hit at {:?}, hidden for {}s",
            self.position,
            self.cycle.hide_duration()
        );
        true
    }

    /// Collision event from the physics layer, passed through the hit filter
    pub fn on_collision(&mut self, contact: &Contact) -> bool {
        if !self.hit_filter.accepts(contact) {
            trace!("Contact {:?} filtered out", contact);
            return false;
        }
        self.on_hit()
    }

    /// Drain the hide countdown. Returns the new position on the step it respawns.
    pub fn advance_respawn<R: Rng + ?Sized>(&mut self, dt: f32, rng: &mut R) -> Option<Vec2> {
        if !self.cycle.advance(dt) {
            return None;
        }
        self.reposition(rng);
        if self.hidden_direction == HiddenDirectionPolicy::Freeze {
            self.direction = random_direction(rng);
        }
        debug!("Wanderer respawned at {:?}", self.position);
        Some(self.position)
    }

    /// Jump to a uniformly random point in the respawn area
    pub fn reposition<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.position = self.bounds.random_point(rng, self.respawn_area);
    }
}

/// Heading at θ ~ U[0, 2π)
pub fn random_direction<R: Rng + ?Sized>(rng: &mut R) -> Vec2 {
    direction_from_angle(rng.random_range(0.0..TAU))
}
