//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `SystemConfig` (YAML-facing) and produces the runtime bundle
//! (`Scenario`) containing:
//! - system state (`System` with bodies at t = 0)
//! - active force set (`AccelSet`)
//!
//! `Scenario::step` is the per-frame entry point the renderer calls: it
//! advances the system by one RK4 step and returns a read-only snapshot

use log::info;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

use crate::configuration::config::{BodySpec, SystemConfig, SystemKind, UnknownSystemType};
use crate::simulation::forces::{AccelSet, NewtonianGravity};
use crate::simulation::integrator::rk4_integrator;
use crate::simulation::states::{Body, BodyError, BodyState, NVec2, System};

/// Generator seed used when the configuration does not supply one
pub const DEFAULT_SEED: u64 = 42;

/// Configuration failures fatal to scenario construction; no partial
/// system is produced
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    UnknownSystemType(#[from] UnknownSystemType),

    #[error("custom system requires a non-empty body specification")]
    MissingCustomBodies,

    #[error("number of bodies must be at least 1")]
    NonPositiveBodyCount,

    #[error("body `{name}`: {source}")]
    InvalidBody { name: String, source: BodyError },
}

/// Stepping failures surfaced to the rendering collaborator
#[derive(Debug, Error)]
pub enum StepError {
    #[error("time step must be a positive finite value, got {0}")]
    InvalidTimeStep(f64),
}

/// A fully-initialized simulation scenario
///
/// This is the runtime bundle constructed from a [`SystemConfig`]: the
/// current system state and the set of active force laws. The rendering
/// collaborator drives it one `step` per animation frame and owns the
/// notion of how many frames to run.
pub struct Scenario {
    pub system: System,
    pub forces: AccelSet,
}

impl Scenario {
    /// Build a scenario from configuration
    ///
    /// The body ensemble comes from the configured construction strategy:
    /// the two-body elliptical preset, a seeded random ensemble, or the
    /// caller-supplied custom specification.
    pub fn build(cfg: &SystemConfig) -> Result<Self, ConfigError> {
        let bodies = match cfg.system_type {
            SystemKind::Binary => binary_bodies(),
            SystemKind::Random => {
                random_bodies(cfg.num_bodies, cfg.seed.unwrap_or(DEFAULT_SEED))?
            }
            SystemKind::Custom => custom_bodies(cfg.bodies.as_deref())?,
        };

        // Initial system state: bodies at t = 0
        let system = System::new(cfg.system_type, bodies);
        info!(
            "initialised {:?} system with {} bodies",
            system.kind,
            system.num_bodies()
        );

        // Forces: construct an AccelSet and register Newtonian gravity
        let forces = AccelSet::new().with(NewtonianGravity::default());

        Ok(Self { system, forces })
    }

    /// Advance the system by one RK4 step of size `dt` and return the
    /// post-step `(position, velocity, mass)` snapshot in stable body order
    pub fn step(&mut self, dt: f64) -> Result<Vec<BodyState>, StepError> {
        if !dt.is_finite() || dt <= 0.0 {
            return Err(StepError::InvalidTimeStep(dt));
        }

        rk4_integrator(&mut self.system, &self.forces, dt);
        Ok(self.system.snapshot())
    }
}

/// The fixed two-body preset: a light body moving past a heavier
/// companion on an unstable elliptical trajectory inside the unit domain
fn binary_bodies() -> Vec<Body> {
    let b1 = Body {
        x: NVec2::new(0.2, 0.5),
        v: NVec2::new(0.3, 0.5),
        m: 2e9,
    };
    let b2 = Body {
        x: NVec2::new(0.5, 0.5),
        v: NVec2::new(1e-4, 1e-4),
        m: 2e10,
    };
    vec![b1, b2]
}

/// Draw a random ensemble: `count` bodies (or a bounded random count when
/// unspecified), masses in a plausible planetary range, positions uniform
/// in the unit square, starting at rest
fn random_bodies(count: Option<usize>, seed: u64) -> Result<Vec<Body>, ConfigError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let n = match count {
        Some(0) => return Err(ConfigError::NonPositiveBodyCount),
        Some(n) => n,
        None => rng.gen_range(1..50),
    };

    let mut bodies = Vec::with_capacity(n);
    for _ in 0..n {
        bodies.push(Body {
            x: NVec2::new(rng.gen(), rng.gen()),
            v: NVec2::zeros(),
            m: rng.gen_range(1e9..=1e12),
        });
    }
    Ok(bodies)
}

/// Map the externally supplied specification 1:1 onto bodies, preserving
/// its order; validation failures name the offending record
fn custom_bodies(specs: Option<&[BodySpec]>) -> Result<Vec<Body>, ConfigError> {
    let specs = match specs {
        Some(s) if !s.is_empty() => s,
        _ => return Err(ConfigError::MissingCustomBodies),
    };

    let mut bodies = Vec::with_capacity(specs.len());
    for spec in specs {
        let body = Body::new(
            spec.m,
            NVec2::new(spec.x[0], spec.x[1]),
            NVec2::new(spec.v[0], spec.v[1]),
        )
        .map_err(|source| ConfigError::InvalidBody {
            name: spec.name.clone(),
            source,
        })?;
        bodies.push(body);
    }
    Ok(bodies)
}
