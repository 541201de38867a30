//! Classical Mechanics Core Library
//!
//! Closed-form solvers for introductory classical mechanics: unit conversion,
//! vector algebra, kinematics, dynamics, work and energy, momentum and
//! collisions, statics and rotation, and simple harmonic motion.
//!
//! Every solver is a pure function of its named inputs and a [`SolverConfig`].
//! Results are structured values, usually paired with a sampled
//! [`Trajectory`] for plotting. Nothing in this crate formats text for
//! display or keeps state between calls.
//!
//! ## Failure modes
//!
//! - Physically impossible inputs and unreachable states return [`MechanicsError`]
//! - Degraded-accuracy conditions attach a [`Warning`] to an otherwise valid result

// Core types and utilities
pub mod core_types;

pub mod config;
pub mod error;

// Solvers, one module per topic
pub mod physics;

// Tagged dispatch over the solvers
pub mod calculation;

// Re-export core types
pub use core_types::{linspace, Degrees, Radians, Trajectory, Vec2, Vec3, Vector};

pub use calculation::{evaluate_batch, Calculation, Outcome, Topic};
pub use config::{SamplingQuality, SolverConfig};
pub use error::{DomainError, MechanicsError, Result, Warning};
