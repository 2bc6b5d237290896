//! Laser Chase - a small 2D chase prototype
//!
//! Core modules:
//! - `sim`: Deterministic simulation (wandering hazards, player locomotion, scene flow)
//! - `settings`: Data-driven tuning, loaded from JSON
//! - `error`: Configuration and loading errors

pub mod error;
pub mod settings;
pub mod sim;

pub use error::{ConfigError, WanderError};
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame delta the driver will accept (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Sprite import scale: pixels per world unit
    pub const PIXELS_PER_UNIT: f32 = 100.0;

    /// Tolerance for unit-length checks
    pub const UNIT_EPSILON: f32 = 1e-5;

    /// Laser pointer defaults
    pub const LASER_SPEED: f32 = 5.0;
    pub const LASER_RETIMER_PERIOD: f32 = 1.0;
    pub const LASER_RESPAWN_DELAY: f32 = 2.0;
    pub const LASER_EDGE_MARGIN_PX: f32 = 10.0;

    /// Wandering box defaults
    pub const BOX_SPEED: f32 = 2.0;
    pub const BOX_SIZE_PX: f32 = 50.0;
    pub const BOX_EDGE_BUFFER: f32 = 0.05;

    /// Player defaults
    pub const PLAYER_MOVE_SPEED: f32 = 5.0;
    pub const PLAYER_JUMP_FORCE: f32 = 10.0;
    pub const PLAYER_WALK_VOLUME: f32 = 0.5;
    /// Vertical speed below which the player counts as grounded
    pub const GROUNDED_EPSILON: f32 = 0.01;
}

/// Unit vector at `theta` radians
#[inline]
pub fn direction_from_angle(theta: f32) -> Vec2 {
    Vec2::new(theta.cos(), theta.sin())
}

/// Whether `v` has unit length within [`consts::UNIT_EPSILON`]
#[inline]
pub fn is_unit(v: Vec2) -> bool {
    (v.length() - 1.0).abs() <= consts::UNIT_EPSILON
}

/// Convert a length in pixels to world units at the sprite import scale
#[inline]
pub fn px_to_world(px: f32) -> f32 {
    px / consts::PIXELS_PER_UNIT
}
