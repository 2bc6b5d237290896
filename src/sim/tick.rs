//! Fixed timestep driver
//!
//! Owns one wanderer plus the timers the engine used to run as coroutines:
//! the heading retimer and the respawn countdown. Dropping the driver drops
//! both timers with it.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::respawn::Contact;
use super::wanderer::BoundedWanderer;
use crate::consts::*;
use crate::error::WanderError;
use crate::settings::Settings;

/// Collision events for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub contacts: Vec<Contact>,
}

/// Side effects for the host to mirror onto sprite and physics body
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WanderEvent {
    /// Hide the sprite
    Hidden,
    /// Show the sprite, body moved to `position`
    Respawned { position: Vec2 },
    /// Retimer picked a new heading
    Retimed { direction: Vec2 },
    /// Containment changed the heading
    Redirected { direction: Vec2 },
}

/// What the host reads back after a frame
#[derive(Debug, Clone, PartialEq)]
pub struct FrameOutput {
    pub position: Vec2,
    pub visible: bool,
    pub events: Vec<WanderEvent>,
}

/// Runs a wanderer at a fixed timestep
#[derive(Debug, Clone)]
pub struct Driver {
    wanderer: BoundedWanderer,
    rng: Pcg32,
    retimer_remaining: f32,
    accumulator: f32,
    time: f64,
    events: Vec<WanderEvent>,
}

impl Driver {
    /// Take ownership of `wanderer` and pick its first heading
    pub fn new(mut wanderer: BoundedWanderer, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        wanderer.retime(&mut rng);
        let retimer_remaining = wanderer.retimer_period();
        log::info!("Driver started with seed: {}", seed);
        Self {
            wanderer,
            rng,
            retimer_remaining,
            accumulator: 0.0,
            time: 0.0,
            events: Vec::new(),
        }
    }

    /// Validate settings and spawn the configured wanderer
    pub fn from_settings(settings: &Settings) -> Result<Self, WanderError> {
        let wanderer = BoundedWanderer::new(settings.start_position, &settings.wanderer)?;
        Ok(Self::new(wanderer, settings.seed))
    }

    pub fn wanderer(&self) -> &BoundedWanderer {
        &self.wanderer
    }

    /// Simulated seconds so far
    pub fn elapsed(&self) -> f64 {
        self.time
    }

    /// Seconds until the next heading change
    pub fn retimer_remaining(&self) -> f32 {
        self.retimer_remaining
    }

    /// Feed a collision. Returns whether it started a hide cycle.
    pub fn hit(&mut self, contact: &Contact) -> bool {
        let hidden = self.wanderer.on_collision(contact);
        if hidden {
            self.events.push(WanderEvent::Hidden);
        }
        hidden
    }

    /// Advance one fixed step of `dt` seconds
    pub fn step(&mut self, dt: f32) {
        let dt = dt.max(0.0);
        self.time += dt as f64;

        if let Some(position) = self.wanderer.advance_respawn(dt, &mut self.rng) {
            self.events.push(WanderEvent::Respawned { position });
        }

        self.retimer_remaining -= dt;
        if self.retimer_remaining <= 0.0 {
            // Several periods may have elapsed in one step; only the last heading
            // is ever observed, so fire once and keep the phase.
            let period = self.wanderer.retimer_period();
            let phase = self.retimer_remaining.rem_euclid(period);
            self.retimer_remaining = if phase > 0.0 { phase } else { period };
            self.wanderer.retime(&mut self.rng);
            if self.wanderer.is_visible() {
                self.events.push(WanderEvent::Retimed {
                    direction: self.wanderer.direction(),
                });
            }
        }

        if let Some(direction) = self.wanderer.tick(dt) {
            self.events.push(WanderEvent::Redirected { direction });
        }
    }

    /// Run one rendered frame: apply contacts, then as many fixed steps as fit
    pub fn advance(&mut self, input: &TickInput, frame_dt: f32) -> FrameOutput {
        for contact in &input.contacts {
            self.hit(contact);
        }

        self.accumulator += frame_dt.clamp(0.0, MAX_FRAME_DT);
        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.step(SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;
        }

        FrameOutput {
            position: self.wanderer.position(),
            visible: self.wanderer.is_visible(),
            events: std::mem::take(&mut self.events),
        }
    }
}
