//! Hide/respawn cycle
//!
//! Visible -> (hit) -> Hidden for `hide_duration` -> (reposition) -> Visible.
//! The wait is a countdown stored in the state and drained by the driver's
//! ticks; there is at most one countdown in flight.

use serde::{Deserialize, Serialize};

/// Slack for the countdown reaching zero
const COUNTDOWN_EPSILON: f64 = 1e-6;

/// Visibility state of a hittable entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Visibility {
    Visible,
    /// Hidden, waiting `remaining` seconds before respawning
    Hidden { remaining: f64 },
}

/// One-shot hide timer with a re-entry guard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RespawnCycle {
    hide_duration: f32,
    state: Visibility,
}

impl RespawnCycle {
    pub fn new(hide_duration: f32) -> Self {
        Self {
            hide_duration,
            state: Visibility::Visible,
        }
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        matches!(self.state, Visibility::Visible)
    }

    #[inline]
    pub fn state(&self) -> Visibility {
        self.state
    }

    pub fn hide_duration(&self) -> f32 {
        self.hide_duration
    }

    /// Seconds left before respawn, if hidden
    pub fn remaining(&self) -> Option<f32> {
        match self.state {
            Visibility::Visible => None,
            Visibility::Hidden { remaining } => Some(remaining as f32),
        }
    }

    /// Start hiding. Returns false (and leaves the pending timer alone) if already hidden.
    pub fn on_hit(&mut self) -> bool {
        if !self.is_visible() {
            return false;
        }
        self.state = Visibility::Hidden {
            remaining: self.hide_duration as f64,
        };
        true
    }

    /// Drain the countdown. Returns true exactly once, on the step the entity becomes visible.
    pub fn advance(&mut self, dt: f32) -> bool {
        let Visibility::Hidden { remaining } = self.state else {
            return false;
        };
        // f64 plus a small slack so many fixed steps summing to the hide
        // duration expire on the last of them, not one step late
        let remaining = remaining - dt as f64;
        if remaining <= COUNTDOWN_EPSILON {
            self.state = Visibility::Visible;
            true
        } else {
            self.state = Visibility::Hidden { remaining };
            false
        }
    }
}

/// The other party of a collision/overlap event
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Identity tag of the colliding entity (e.g. "Player")
    pub tag: Option<String>,
    /// Whether the colliding entity carries a physics body
    pub has_body: bool,
}

impl Contact {
    pub fn tagged(tag: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            has_body: true,
        }
    }
}

/// Which contacts start a hide cycle
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum HitFilter {
    /// Every contact counts
    Any,
    /// Only contacts carrying a physics body
    #[default]
    RequireBody,
    /// Only contacts whose tag matches exactly
    Tag(String),
}

impl HitFilter {
    pub fn accepts(&self, contact: &Contact) -> bool {
        match self {
            HitFilter::Any => true,
            HitFilter::RequireBody => contact.has_body,
            HitFilter::Tag(tag) => contact.tag.as_deref() == Some(tag.as_str()),
        }
    }
}
