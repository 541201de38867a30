//! Core types and utilities

pub mod sampling;
pub mod units;
pub mod validation;
pub mod vector;

// Re-export
pub use sampling::{linspace, Trajectory};
pub use units::{Degrees, Radians};
pub use vector::{Vec2, Vec3, Vector};
