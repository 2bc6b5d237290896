//! Player locomotion
//!
//! Side-on platformer movement: horizontal velocity is set directly from the
//! input axis every physics step, vertical velocity is left to gravity except
//! when jumping. The physics engine integrates; this only decides velocities.

use glam::Vec2;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{ConfigError, require_positive};

/// Player tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocomotionConfig {
    /// Horizontal speed at full input (world units/s)
    pub move_speed: f32,
    /// Vertical velocity set on jump
    pub jump_force: f32,
    /// Footstep loop volume (0.0 - 1.0)
    pub walk_volume: f32,
}

impl Default for LocomotionConfig {
    fn default() -> Self {
        Self {
            move_speed: PLAYER_MOVE_SPEED,
            jump_force: PLAYER_JUMP_FORCE,
            walk_volume: PLAYER_WALK_VOLUME,
        }
    }
}

impl LocomotionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive(self.move_speed, ConfigError::NonPositiveSpeed)?;
        Ok(())
    }
}

/// Input sampled once per frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlayerInput {
    /// Horizontal axis, -1 (left) to 1 (right)
    pub horizontal: f32,
    /// Jump button went down this frame
    pub jump_pressed: bool,
}

/// Footstep audio requests for the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FootstepCue {
    Start { volume: f32 },
    Stop,
}

/// Player body and facing state
#[derive(Debug, Clone, PartialEq)]
pub struct LinearLocomotion {
    config: LocomotionConfig,
    velocity: Vec2,
    horizontal_input: f32,
    facing_right: bool,
    scale_x: f32,
    footsteps_playing: bool,
}

impl LinearLocomotion {
    pub fn new(config: LocomotionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            velocity: Vec2::ZERO,
            horizontal_input: 0.0,
            facing_right: true,
            scale_x: 1.0,
            footsteps_playing: false,
        })
    }

    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Write back the body's velocity after the physics engine integrated it
    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    pub fn facing_right(&self) -> bool {
        self.facing_right
    }

    /// Sprite horizontal scale (negative when facing left)
    pub fn scale_x(&self) -> f32 {
        self.scale_x
    }

    /// On-ground heuristic: vertical speed is near zero.
    ///
    /// This also holds at the apex of a jump; it is not a contact check.
    pub fn is_grounded(&self) -> bool {
        self.velocity.y.abs() < GROUNDED_EPSILON
    }

    /// Per-frame update: sample input, maybe jump, fix facing, drive footsteps
    pub fn update(&mut self, input: PlayerInput) -> Option<FootstepCue> {
        self.horizontal_input = input.horizontal.clamp(-1.0, 1.0);

        if input.jump_pressed {
            self.try_jump();
        }

        self.update_facing(self.horizontal_input);
        self.footstep_cue()
    }

    /// Per-physics-step update: set horizontal velocity, keep vertical
    pub fn fixed_update(&mut self) {
        self.velocity.x = self.horizontal_input * self.config.move_speed;
    }

    /// Jump if grounded. Returns whether the jump fired.
    pub fn try_jump(&mut self) -> bool {
        if !self.is_grounded() {
            return false;
        }
        self.velocity.y = self.config.jump_force;
        debug!("Jump at vx={}", self.velocity.x);
        true
    }

    /// Flip when input sign disagrees with facing. Returns whether a flip happened.
    pub fn update_facing(&mut self, horizontal: f32) -> bool {
        let flip = (horizontal > 0.0 && !self.facing_right) || (horizontal < 0.0 && self.facing_right);
        if flip {
            self.facing_right = !self.facing_right;
            self.scale_x = -self.scale_x;
        }
        flip
    }

    fn footstep_cue(&mut self) -> Option<FootstepCue> {
        let moving = self.horizontal_input != 0.0;
        match (moving, self.footsteps_playing) {
            (true, false) => {
                self.footsteps_playing = true;
                Some(FootstepCue::Start {
                    volume: self.config.walk_volume,
                })
            }
            (false, true) => {
                self.footsteps_playing = false;
                Some(FootstepCue::Stop)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player() -> LinearLocomotion {
        LinearLocomotion::new(LocomotionConfig::default()).unwrap()
    }

    #[test]
    fn test_horizontal_velocity_set_not_accumulated() {
        let mut p = player();
        p.set_velocity(Vec2::new(0.0, -3.0));
        p.update(PlayerInput {
            horizontal: 0.5,
            jump_pressed: false,
        });
        p.fixed_update();
        p.fixed_update();
        assert_eq!(p.velocity(), Vec2::new(2.5, -3.0));
    }

    #[test]
    fn test_input_axis_clamped() {
        let mut p = player();
        p.update(PlayerInput {
            horizontal: 4.0,
            jump_pressed: false,
        });
        p.fixed_update();
        assert_eq!(p.velocity().x, PLAYER_MOVE_SPEED);
    }

    #[test]
    fn test_jump_only_when_grounded() {
        let mut p = player();
        assert!(p.try_jump());
        assert_eq!(p.velocity().y, PLAYER_JUMP_FORCE);
        // Airborne now
        assert!(!p.try_jump());

        p.set_velocity(Vec2::new(1.0, 0.005));
        assert!(p.try_jump());
        assert_eq!(p.velocity(), Vec2::new(1.0, PLAYER_JUMP_FORCE));
    }

    #[test]
    fn test_facing_flip_idempotent() {
        let mut p = player();
        assert!(p.update_facing(-1.0));
        assert_eq!(p.scale_x(), -1.0);
        assert!(!p.facing_right());
        assert!(!p.update_facing(-1.0));
        assert_eq!(p.scale_x(), -1.0);

        // Zero input keeps facing
        assert!(!p.update_facing(0.0));
        assert!(p.update_facing(0.3));
        assert_eq!(p.scale_x(), 1.0);
    }

    #[test]
    fn test_footstep_cues() {
        let mut p = player();
        let walk = PlayerInput {
            horizontal: 1.0,
            jump_pressed: false,
        };
        assert_eq!(
            p.update(walk),
            Some(FootstepCue::Start {
                volume: PLAYER_WALK_VOLUME
            })
        );
        assert_eq!(p.update(walk), None);
        assert_eq!(p.update(PlayerInput::default()), Some(FootstepCue::Stop));
        assert_eq!(p.update(PlayerInput::default()), None);
    }

    #[test]
    fn test_rejects_non_positive_speed() {
        let config = LocomotionConfig {
            move_speed: 0.0,
            ..Default::default()
        };
        assert_eq!(
            LinearLocomotion::new(config).unwrap_err(),
            ConfigError::NonPositiveSpeed(0.0)
        );
    }
}
