//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Explicit timestep only
//! - Seeded RNG only, injected by the caller
//! - No rendering, audio or platform dependencies

pub mod bounds;
pub mod containment;
pub mod locomotion;
pub mod respawn;
pub mod scene;
pub mod tick;
pub mod wanderer;

pub use bounds::{Bounds, BoundsSpec, RespawnArea, Viewport};
pub use containment::{Containment, ContainmentPolicy, reflect_at_edges};
pub use locomotion::{FootstepCue, LinearLocomotion, LocomotionConfig, PlayerInput};
pub use respawn::{Contact, HitFilter, RespawnCycle, Visibility};
pub use scene::{Key, Scene, SceneCommand, SceneFlow};
pub use tick::{Driver, FrameOutput, TickInput, WanderEvent};
pub use wanderer::{BoundedWanderer, HiddenDirectionPolicy, WandererConfig, random_direction};
