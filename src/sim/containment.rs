//! Keeping a wanderer inside its bounds
//!
//! Three interchangeable policies, chosen per entity:
//! - clamp-only: pin the position, keep heading (the entity "sticks" to the edge)
//! - clamp-redirect: pin the position and re-aim toward the region center
//! - edge-reflect: mirror the heading axis that points into a nearby edge, then pin
//!
//! Axes are handled independently, so a corner just applies both axes at once.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::bounds::Bounds;

/// Containment strategy for one wanderer
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContainmentPolicy {
    #[default]
    ClampOnly,
    ClampRedirect,
    /// Reflect when within `edge_buffer` world units of an edge and heading into it
    EdgeReflect { edge_buffer: f32 },
}

/// Result of applying a containment policy after a move
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Containment {
    /// Position, always inside the bounds
    pub position: Vec2,
    /// Heading after any redirect or reflection
    pub direction: Vec2,
    /// Whether the heading changed
    pub redirected: bool,
}

impl ContainmentPolicy {
    /// Apply the policy to a freshly moved position
    pub fn apply(&self, bounds: &Bounds, position: Vec2, direction: Vec2) -> Containment {
        match *self {
            ContainmentPolicy::ClampOnly => Containment {
                position: bounds.clamp(position),
                direction,
                redirected: false,
            },
            ContainmentPolicy::ClampRedirect => clamp_redirect(bounds, position, direction),
            ContainmentPolicy::EdgeReflect { edge_buffer } => {
                let reflected = reflect_at_edges(bounds, position, direction, edge_buffer);
                Containment {
                    position: bounds.clamp(position),
                    direction: reflected,
                    redirected: reflected != direction,
                }
            }
        }
    }
}

/// Clamp, and if anything was clamped point back at the region center
fn clamp_redirect(bounds: &Bounds, position: Vec2, direction: Vec2) -> Containment {
    let clamped = bounds.clamp(position);
    if clamped == position {
        return Containment {
            position,
            direction,
            redirected: false,
        };
    }

    // The clamped point sits on an edge, so it never equals the center of a
    // non-degenerate rectangle; the fallback only guards NaN input.
    let inward = (bounds.center() - clamped).try_normalize().unwrap_or(-direction);
    Containment {
        position: clamped,
        direction: inward,
        redirected: true,
    }
}

/// Flip each heading component that points into an edge the position is within `buffer` of
pub fn reflect_at_edges(bounds: &Bounds, position: Vec2, direction: Vec2, buffer: f32) -> Vec2 {
    let mut dir = direction;

    if position.x <= bounds.min.x + buffer && dir.x < 0.0 {
        dir.x = dir.x.abs();
    } else if position.x >= bounds.max.x - buffer && dir.x > 0.0 {
        dir.x = -dir.x.abs();
    }

    if position.y <= bounds.min.y + buffer && dir.y < 0.0 {
        dir.y = dir.y.abs();
    } else if position.y >= bounds.max.y - buffer && dir.y > 0.0 {
        dir.y = -dir.y.abs();
    }

    // Sign flips preserve length; renormalize anyway to scrub drift
    dir.normalize_or_zero()
}
