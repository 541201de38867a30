use clap::{Parser, Subcommand, ValueEnum};
use mechanics_core::physics::vectors;
use mechanics_core::physics::{
    atwood, collide, convert, free_fall, inclined_plane, pendulum, projectile, roller_coaster,
    solve_beam, spring_mass, AtwoodDirection, Beam, Body1D, CollisionKind, PointLoad, SpringMass,
    UnitCategory,
};
use mechanics_core::{Degrees, SolverConfig, Trajectory, Vector};
use std::error::Error;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Classical mechanics calculator
#[derive(Parser, Debug)]
#[command(name = "mechanics-demo")]
#[command(about = "Closed-form classical mechanics solvers", long_about = None)]
struct Args {
    /// Gravitational acceleration in m/s²
    #[arg(short, long, global = true, default_value_t = 9.81)]
    gravity: f64,

    /// Points per sampled trajectory
    #[arg(short, long, global = true, default_value_t = 200)]
    samples: usize,

    /// Rows printed from each sample table (0 = none)
    #[arg(short, long, global = true, default_value_t = 8)]
    rows: usize,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a value between units of one category
    Convert {
        value: f64,
        #[arg(value_enum)]
        category: Category,
        from: String,
        to: String,
    },

    /// Vector algebra on 2D or 3D vectors given as comma-separated components
    Vector {
        #[arg(value_enum)]
        op: VectorOp,
        /// First operand, e.g. `3,4` or `1,0,-2`
        #[arg(allow_hyphen_values = true)]
        a: String,
        /// Second operand for binary operations
        #[arg(allow_hyphen_values = true)]
        b: Option<String>,
    },

    /// Angled launch
    Projectile {
        /// Launch speed in m/s
        speed: f64,
        /// Launch angle above horizontal in degrees
        angle: f64,
        /// Launch height in m
        #[arg(long, default_value_t = 0.0)]
        height: f64,
    },

    /// Vertical drop or throw until impact
    FreeFall {
        /// Initial height in m
        height: f64,
        /// Initial vertical velocity in m/s (up positive)
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        velocity: f64,
    },

    /// Block on an inclined plane with friction
    Incline {
        mass: f64,
        /// Slope angle in degrees
        angle: f64,
        /// Friction coefficient
        mu: f64,
        /// Initial velocity in m/s (up the slope positive)
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        velocity: f64,
    },

    /// Two masses over an ideal pulley
    Atwood { m1: f64, m2: f64 },

    /// Cart moving between two heights without friction
    Coaster {
        mass: f64,
        /// Start height in m
        h1: f64,
        /// Start speed in m/s
        v1: f64,
        /// End height in m
        h2: f64,
    },

    /// Head-on collision; omit --restitution for elastic, 0 for perfectly inelastic
    Collide {
        m1: f64,
        #[arg(allow_hyphen_values = true)]
        v1: f64,
        m2: f64,
        #[arg(allow_hyphen_values = true)]
        v2: f64,
        #[arg(short = 'e', long)]
        restitution: Option<f64>,
    },

    /// Support reactions of a uniform beam
    Beam {
        /// Beam length in m
        length: f64,
        /// Beam mass in kg
        mass: f64,
        /// Support positions from the left end in m
        support_a: f64,
        support_b: f64,
        /// Point load as POSITION:FORCE, repeatable
        #[arg(short, long = "load", value_parser = parse_load)]
        loads: Vec<PointLoad>,
    },

    /// Mass on a spring
    Shm {
        mass: f64,
        stiffness: f64,
        amplitude: f64,
        /// Phase in degrees
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        phase: f64,
        /// Simulated interval in s
        #[arg(long, default_value_t = 5.0)]
        duration: f64,
    },

    /// Simple pendulum released from rest
    Pendulum {
        mass: f64,
        length: f64,
        /// Release angle in degrees
        amplitude: f64,
        /// Simulated interval in s
        #[arg(long, default_value_t = 5.0)]
        duration: f64,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Category {
    Length,
    Mass,
    Time,
    Force,
    Energy,
    Velocity,
    Acceleration,
}

impl From<Category> for UnitCategory {
    fn from(category: Category) -> Self {
        match category {
            Category::Length => UnitCategory::Length,
            Category::Mass => UnitCategory::Mass,
            Category::Time => UnitCategory::Time,
            Category::Force => UnitCategory::Force,
            Category::Energy => UnitCategory::Energy,
            Category::Velocity => UnitCategory::Velocity,
            Category::Acceleration => UnitCategory::Acceleration,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum VectorOp {
    Add,
    Subtract,
    Dot,
    Cross,
    Magnitude,
    Normalize,
    Polar,
    Spherical,
}

fn parse_load(text: &str) -> Result<PointLoad, String> {
    let (position, force) = text
        .split_once(':')
        .ok_or_else(|| format!("expected POSITION:FORCE, got '{text}'"))?;
    let position = position
        .trim()
        .parse()
        .map_err(|e| format!("bad load position '{position}': {e}"))?;
    let force = force
        .trim()
        .parse()
        .map_err(|e| format!("bad load force '{force}': {e}"))?;
    Ok(PointLoad { position, force })
}

fn parse_vector(text: &str) -> Result<Vector, String> {
    let components = text
        .split(',')
        .map(|part| part.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("bad vector '{text}': {e}"))?;
    match components.as_slice() {
        [x, y] => Ok(Vector::planar(*x, *y)),
        [x, y, z] => Ok(Vector::spatial(*x, *y, *z)),
        other => Err(format!("vectors need 2 or 3 components, got {}", other.len())),
    }
}

fn format_vector(v: &Vector) -> String {
    match v {
        Vector::Planar(p) => format!("({:.4}, {:.4})", p.x, p.y),
        Vector::Spatial(s) => format!("({:.4}, {:.4}, {:.4})", s.x, s.y, s.z),
    }
}

/// Print `rows` evenly spaced samples from a trajectory
fn print_table<S>(
    trajectory: &Trajectory<S>,
    rows: usize,
    header: &[&str],
    row: impl Fn(&S) -> Vec<f64>,
) {
    if rows == 0 || trajectory.is_empty() {
        return;
    }
    println!();
    println!(
        "{}",
        header.iter().map(|h| format!("{h:>12}")).collect::<String>()
    );
    let shown = rows.min(trajectory.len());
    let last = trajectory.len() - 1;
    for i in 0..shown {
        let index = if shown == 1 { 0 } else { i * last / (shown - 1) };
        let line: String = row(&trajectory[index])
            .iter()
            .map(|value| format!("{value:>12.4}"))
            .collect();
        println!("{line}");
    }
}

fn run(args: &Args, config: &SolverConfig) -> Result<(), Box<dyn Error>> {
    match &args.command {
        Command::Convert {
            value,
            category,
            from,
            to,
        } => {
            let converted = convert(*value, (*category).into(), from, to)?;
            println!("{value} {from} = {converted} {to}");
        }

        Command::Vector { op, a, b } => {
            let a = parse_vector(a)?;
            let b = b.as_deref().map(parse_vector).transpose()?;
            let needs_second = matches!(
                op,
                VectorOp::Add | VectorOp::Subtract | VectorOp::Dot | VectorOp::Cross
            );
            let second = match b {
                Some(b) => b,
                None if needs_second => return Err(format!("{op:?} needs a second vector").into()),
                None => a,
            };
            match op {
                VectorOp::Add => println!("A + B = {}", format_vector(&vectors::add(&a, &second))),
                VectorOp::Subtract => {
                    println!("A - B = {}", format_vector(&vectors::subtract(&a, &second)));
                }
                VectorOp::Dot => {
                    let product = vectors::dot(&a, &second);
                    println!("A · B = {:.4}", product.value);
                    match product.angle {
                        Some(angle) => println!("angle = {}", angle.to_degrees()),
                        None => println!("angle undefined for a zero vector"),
                    }
                }
                VectorOp::Cross => {
                    let c = vectors::cross(&a, &second)?;
                    println!("A × B = {}", format_vector(&Vector::Spatial(c)));
                }
                VectorOp::Magnitude => println!("|A| = {:.4}", vectors::magnitude(&a)),
                VectorOp::Normalize => println!("Â = {}", format_vector(&vectors::normalize(&a)?)),
                VectorOp::Polar => {
                    let polar = vectors::to_polar(&a.to_spatial().xy());
                    println!("r = {:.4}, θ = {}", polar.magnitude, polar.angle.to_degrees());
                }
                VectorOp::Spherical => {
                    let spherical = vectors::to_spherical(&a.to_spatial());
                    println!(
                        "r = {:.4}, θ = {}, φ = {}",
                        spherical.radius,
                        spherical.polar.to_degrees(),
                        spherical.azimuth.to_degrees()
                    );
                }
            }
        }

        Command::Projectile {
            speed,
            angle,
            height,
        } => {
            let shot = projectile(*speed, Degrees::new(*angle), *height, config)?;
            println!("=== Projectile ===");
            println!(
                "Velocity components: vx = {:.3} m/s, vy = {:.3} m/s",
                shot.horizontal_velocity, shot.vertical_velocity
            );
            println!(
                "Apex: t = {:.3} s at ({:.3} m, {:.3} m)",
                shot.time_to_apex, shot.apex_distance, shot.max_height
            );
            println!("Flight time: {:.3} s", shot.flight_time);
            println!("Range: {:.3} m", shot.range);
            print_table(
                &shot.trajectory,
                args.rows,
                &["t (s)", "x (m)", "y (m)", "vx", "vy"],
                |s| vec![s.time, s.x, s.y, s.vx, s.vy],
            );
        }

        Command::FreeFall { height, velocity } => {
            let fall = free_fall(*height, *velocity, config)?;
            println!("=== Free fall ===");
            println!("Time to impact: {:.3} s", fall.time_to_impact);
            println!("Impact velocity: {:.3} m/s", fall.impact_velocity);
            print_table(&fall.trajectory, args.rows, &["t (s)", "h (m)", "v (m/s)"], |s| {
                vec![s.time, s.position, s.velocity]
            });
        }

        Command::Incline {
            mass,
            angle,
            mu,
            velocity,
        } => {
            let plane = inclined_plane(*mass, Degrees::new(*angle), *mu, *velocity, config)?;
            println!("=== Inclined plane ===");
            println!("Weight: {:.3} N", plane.weight);
            println!("Normal force: {:.3} N", plane.normal_force);
            println!("Down-slope component: {:.3} N", plane.parallel_component);
            println!("Friction: {:.3} N", plane.friction);
            println!(
                "Net force: {:.3} N, acceleration {:.3} m/s²",
                plane.net_force, plane.acceleration
            );
            if let Some(stop) = plane.stop {
                println!(
                    "Comes to rest after {:.3} s, {:.3} m up the slope",
                    stop.time, stop.distance
                );
            }
            print_table(&plane.trajectory, args.rows, &["t (s)", "s (m)", "v (m/s)"], |s| {
                vec![s.time, s.position, s.velocity]
            });
        }

        Command::Atwood { m1, m2 } => {
            let machine = atwood(*m1, *m2, config)?;
            let direction = match machine.direction {
                AtwoodDirection::FirstDescends => "first mass descends",
                AtwoodDirection::SecondDescends => "second mass descends",
                AtwoodDirection::Balanced => "balanced",
            };
            println!("=== Atwood machine ===");
            println!("Acceleration: {:.4} m/s² ({direction})", machine.acceleration.abs());
            println!("Tension: {:.4} N", machine.tension);
        }

        Command::Coaster { mass, h1, v1, h2 } => {
            let ride = roller_coaster(*mass, *h1, *v1, *h2, config)?;
            println!("=== Roller coaster ===");
            println!("Total energy: {:.2} J", ride.total_energy);
            println!("Final PE: {:.2} J, KE: {:.2} J", ride.final_potential, ride.final_kinetic);
            println!("Final speed: {:.3} m/s", ride.final_speed);
        }

        Command::Collide {
            m1,
            v1,
            m2,
            v2,
            restitution,
        } => {
            let kind = match restitution {
                None => CollisionKind::Elastic,
                Some(e) if *e == 0.0 => CollisionKind::PerfectlyInelastic,
                Some(e) => CollisionKind::Partial { restitution: *e },
            };
            let result = collide(Body1D::new(*m1, *v1), Body1D::new(*m2, *v2), kind, config)?;
            println!("=== Collision ({kind:?}) ===");
            println!(
                "Final velocities: v1' = {:.4} m/s, v2' = {:.4} m/s",
                result.first_velocity, result.second_velocity
            );
            println!(
                "Momentum: {:.4} -> {:.4} kg·m/s",
                result.momentum_before, result.momentum_after
            );
            println!(
                "Kinetic energy: {:.4} -> {:.4} J ({:.2}% lost)",
                result.kinetic_before, result.kinetic_after, result.energy_loss_percent
            );
        }

        Command::Beam {
            length,
            mass,
            support_a,
            support_b,
            loads,
        } => {
            let beam = Beam {
                length: *length,
                mass: *mass,
                support_a: *support_a,
                support_b: *support_b,
                loads: loads.clone(),
            };
            let reactions = solve_beam(&beam, config)?;
            println!("=== Beam ===");
            println!("Beam weight: {:.3} N", reactions.beam_weight);
            println!("Total downward load: {:.3} N", reactions.total_downward);
            println!("Reaction at A: {:.3} N", reactions.reaction_a);
            println!("Reaction at B: {:.3} N", reactions.reaction_b);
        }

        Command::Shm {
            mass,
            stiffness,
            amplitude,
            phase,
            duration,
        } => {
            let system =
                SpringMass::new(*mass, *stiffness, *amplitude).with_phase(Degrees::new(*phase));
            let oscillation = spring_mass(system, *duration, config)?;
            println!("=== Spring-mass oscillator ===");
            println!(
                "ω = {:.4} rad/s, T = {:.4} s, f = {:.4} Hz",
                oscillation.angular_frequency, oscillation.period, oscillation.frequency
            );
            println!(
                "Max speed: {:.4} m/s, max acceleration {:.4} m/s²",
                oscillation.max_speed, oscillation.max_acceleration
            );
            println!("Total energy: {:.4} J", oscillation.total_energy);
            print_table(
                &oscillation.samples,
                args.rows,
                &["t (s)", "x (m)", "v (m/s)", "a", "KE (J)", "PE (J)"],
                |s| {
                    vec![
                        s.time,
                        s.position,
                        s.velocity,
                        s.acceleration,
                        s.kinetic,
                        s.potential,
                    ]
                },
            );
        }

        Command::Pendulum {
            mass,
            length,
            amplitude,
            duration,
        } => {
            let oscillation =
                pendulum(*mass, *length, Degrees::new(*amplitude), *duration, config)?;
            println!("=== Simple pendulum ===");
            if let Some(warning) = &oscillation.warning {
                println!("Warning: {warning}");
            }
            println!(
                "ω = {:.4} rad/s, T = {:.4} s, f = {:.4} Hz",
                oscillation.angular_frequency, oscillation.period, oscillation.frequency
            );
            println!("Total energy: {:.4} J", oscillation.total_energy);
            print_table(
                &oscillation.samples,
                args.rows,
                &["t (s)", "θ (deg)", "x (m)", "y (m)", "KE (J)", "PE (J)"],
                |s| vec![s.time, *s.angle.to_degrees(), s.x, s.y, s.kinetic, s.potential],
            );
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config = SolverConfig::default()
        .with_gravity(args.gravity)
        .with_samples(args.samples);
    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {e}");
        return ExitCode::FAILURE;
    }
    debug!(?config, command = ?args.command, "solver configuration");

    match run(&args, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
