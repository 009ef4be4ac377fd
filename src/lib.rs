pub mod simulation;
pub mod configuration;

pub use simulation::states::{Body, BodyError, BodyState, NVec2, System};
pub use simulation::forces::{AccelSet, Acceleration, NewtonianGravity, G, MIN_SEPARATION};
pub use simulation::integrator::rk4_integrator;
pub use simulation::scenario::{ConfigError, Scenario, StepError, DEFAULT_SEED};

pub use configuration::config::{BodySpec, SystemConfig, SystemKind, UnknownSystemType};
