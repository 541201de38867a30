//! Closed-form classical mechanics solvers
//!
//! One submodule per topic. Every solver is a pure function of its inputs
//! and a [`SolverConfig`](crate::config::SolverConfig).

pub mod conversion;
pub mod dynamics;
pub mod energy;
pub mod kinematics;
pub mod momentum;
pub mod oscillations;
pub mod statics;
pub mod vectors;

pub use conversion::{convert, UnitCategory};
pub use dynamics::{
    atwood, friction, inclined_plane, solve_newton, Atwood, AtwoodDirection, Friction,
    FrictionState, InclinedPlane, NewtonSolution, NewtonUnknown, Surface,
};
pub use energy::{
    gravitational_energy, kinetic_energy, pendulum_swing, power_from_force, power_from_work,
    roller_coaster, spring_energy, work, EnergyCurve, PendulumSwing, Power, RollerCoaster, Work,
    WorkKind,
};
pub use kinematics::{
    centripetal, constant_acceleration, constant_velocity, free_fall, horizontal_launch,
    projectile, river_crossing, uniform_circular_motion, CircularMotion, FreeFall,
    HorizontalLaunch, Projectile, RiverCrossing, RotationRate,
};
pub use momentum::{
    collide, collide_2d, impulse, momentum, Body1D, Body2D, Collision1D, Collision2D,
    CollisionKind, Impulse,
};
pub use oscillations::{
    pendulum, spring_mass, PendulumOscillation, SimplePendulum, SpringMass, SpringOscillation,
};
pub use statics::{
    center_of_mass, composite_centroid, moment_of_inertia, rotational_energy, shape_centroid,
    solve_beam, solve_rotation, torque, Beam, BeamReactions, CenterOfMass, InertiaShape,
    PointLoad, PointMass, Rectangle, RotationSense, RotationalSolution, RotationalUnknown, Shape,
    Torque,
};
