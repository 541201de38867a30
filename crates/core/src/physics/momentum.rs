//! Momentum, impulse and collisions
//!
//! # Formula
//! ```text
//! elastic:    v1' = ((m1-m2)·v1 + 2·m2·v2) / (m1+m2)
//!             v2' = ((m2-m1)·v2 + 2·m1·v1) / (m1+m2)
//! inelastic:  v'  = (m1·v1 + m2·v2) / (m1+m2)
//! partial:    v1' = (m1·v1 + m2·v2 - m2·e·(v1-v2)) / (m1+m2)
//!             v2' = (m1·v1 + m2·v2 + m1·e·(v1-v2)) / (m1+m2)
//! ```

use crate::config::SolverConfig;
use crate::core_types::validation::{finite, positive, unit_interval};
use crate::core_types::vector::Vec2;
use crate::error::{DomainError, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// `p = m·v`
pub fn momentum(mass: f64, velocity: f64) -> Result<f64> {
    let mass = positive("mass", mass)?;
    let velocity = finite("velocity", velocity)?;
    Ok(mass * velocity)
}

/// Momentum change over an interval
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Impulse {
    pub initial_momentum: f64,
    pub final_momentum: f64,
    /// `I = Δp`
    pub impulse: f64,
    /// `F_avg = I / Δt`
    pub average_force: f64,
}

/// Impulse on a body of `mass` whose velocity changes from `v1` to `v2` over `dt`
pub fn impulse(mass: f64, v1: f64, v2: f64, dt: f64) -> Result<Impulse> {
    let initial_momentum = momentum(mass, v1)?;
    let final_momentum = momentum(mass, v2)?;
    let dt = positive("time interval", dt)?;

    let impulse = final_momentum - initial_momentum;
    debug!(mass, v1, v2, dt, impulse, "impulse");
    Ok(Impulse {
        initial_momentum,
        final_momentum,
        impulse,
        average_force: impulse / dt,
    })
}

/// Body moving along a line
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body1D {
    pub mass: f64,
    pub velocity: f64,
}

impl Body1D {
    #[must_use]
    pub fn new(mass: f64, velocity: f64) -> Self {
        Self { mass, velocity }
    }

    #[must_use]
    pub fn momentum(&self) -> f64 {
        self.mass * self.velocity
    }

    #[must_use]
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity * self.velocity
    }

    fn validate(&self) -> Result<()> {
        positive("mass", self.mass)?;
        finite("velocity", self.velocity)?;
        Ok(())
    }
}

/// Body moving in a plane
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body2D {
    pub mass: f64,
    pub velocity: Vec2,
}

impl Body2D {
    #[must_use]
    pub fn new(mass: f64, vx: f64, vy: f64) -> Self {
        Self {
            mass,
            velocity: Vec2::new(vx, vy),
        }
    }

    #[must_use]
    pub fn momentum(&self) -> Vec2 {
        self.velocity * self.mass
    }

    #[must_use]
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.norm_squared()
    }

    fn validate(&self) -> Result<()> {
        positive("mass", self.mass)?;
        finite("velocity x", self.velocity.x)?;
        finite("velocity y", self.velocity.y)?;
        Ok(())
    }
}

/// How much kinetic energy a collision keeps
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CollisionKind {
    /// Kinetic energy conserved
    Elastic,
    /// Bodies stick together
    PerfectlyInelastic,
    /// Coefficient of restitution `e ∈ [0, 1]`
    Partial { restitution: f64 },
}

/// Outcome of a head-on collision
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Collision1D {
    pub first_velocity: f64,
    pub second_velocity: f64,
    pub momentum_before: f64,
    pub momentum_after: f64,
    pub kinetic_before: f64,
    pub kinetic_after: f64,
    pub energy_loss: f64,
    /// Share of the initial kinetic energy lost, 0 when there was none
    pub energy_loss_percent: f64,
}

fn loss_percent(before: f64, after: f64) -> f64 {
    if before > 0.0 {
        (before - after) / before * 100.0
    } else {
        0.0
    }
}

/// Head-on collision of two bodies
pub fn collide(
    first: Body1D,
    second: Body1D,
    kind: CollisionKind,
    config: &SolverConfig,
) -> Result<Collision1D> {
    first.validate()?;
    second.validate()?;

    let Body1D { mass: m1, velocity: v1 } = first;
    let Body1D { mass: m2, velocity: v2 } = second;
    let total_mass = m1 + m2;
    let total_momentum = first.momentum() + second.momentum();

    let (u1, u2) = match kind {
        CollisionKind::Elastic => (
            ((m1 - m2) * v1 + 2.0 * m2 * v2) / total_mass,
            ((m2 - m1) * v2 + 2.0 * m1 * v1) / total_mass,
        ),
        CollisionKind::PerfectlyInelastic => {
            let v = total_momentum / total_mass;
            (v, v)
        }
        CollisionKind::Partial { restitution } => {
            let e = unit_interval("restitution", restitution)?;
            let relative = v1 - v2;
            if relative.abs() <= config.relative_velocity_epsilon {
                return Err(DomainError::NoRelativeMotion.into());
            }
            (
                (total_momentum - m2 * e * relative) / total_mass,
                (total_momentum + m1 * e * relative) / total_mass,
            )
        }
    };

    let kinetic_before = first.kinetic_energy() + second.kinetic_energy();
    let kinetic_after =
        Body1D::new(m1, u1).kinetic_energy() + Body1D::new(m2, u2).kinetic_energy();

    debug!(m1, v1, m2, v2, ?kind, u1, u2, "1D collision");
    Ok(Collision1D {
        first_velocity: u1,
        second_velocity: u2,
        momentum_before: total_momentum,
        momentum_after: m1 * u1 + m2 * u2,
        kinetic_before,
        kinetic_after,
        energy_loss: kinetic_before - kinetic_after,
        energy_loss_percent: loss_percent(kinetic_before, kinetic_after),
    })
}

/// Outcome of a planar collision where the bodies merge
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Collision2D {
    pub velocity: Vec2,
    pub speed: f64,
    pub momentum_before: Vec2,
    pub momentum_after: Vec2,
    pub kinetic_before: f64,
    pub kinetic_after: f64,
    pub energy_loss: f64,
    pub energy_loss_percent: f64,
}

/// Planar collision
///
/// Only the perfectly inelastic case has a closed form from masses and
/// velocities alone. Any other kind needs the contact geometry and is
/// reported as [`DomainError::RequiresCollisionGeometry`].
pub fn collide_2d(first: Body2D, second: Body2D, kind: CollisionKind) -> Result<Collision2D> {
    first.validate()?;
    second.validate()?;

    if kind != CollisionKind::PerfectlyInelastic {
        return Err(DomainError::RequiresCollisionGeometry.into());
    }

    let total_mass = first.mass + second.mass;
    let momentum_before = first.momentum() + second.momentum();
    let velocity = momentum_before / total_mass;
    let merged = Body2D {
        mass: total_mass,
        velocity,
    };

    let kinetic_before = first.kinetic_energy() + second.kinetic_energy();
    let kinetic_after = merged.kinetic_energy();

    debug!(vx = velocity.x, vy = velocity.y, "2D inelastic collision");
    Ok(Collision2D {
        velocity,
        speed: velocity.norm(),
        momentum_before,
        momentum_after: merged.momentum(),
        kinetic_before,
        kinetic_after,
        energy_loss: kinetic_before - kinetic_after,
        energy_loss_percent: loss_percent(kinetic_before, kinetic_after),
    })
}
