//! Configuration types for describing a simulation scenario.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario, consumed from the input-collection front-end:
//!
//! - [`SystemKind`]   – which construction strategy builds the bodies
//! - [`BodySpec`]     – one custom body's initial state
//! - [`SystemConfig`] – top-level wrapper used to load a scenario
//!
//! # YAML format
//! An example custom scenario matching these types:
//!
//! ```yaml
//! system_type: custom
//! bodies:
//!   - name: A
//!     m: 5.0
//!     x: [ 0.0, 0.0 ]
//!     v: [ 0.0, 0.0 ]
//!   - name: B
//!     m: 5.0
//!     x: [ 1.0, 0.0 ]
//!     v: [ 0.0, 0.0 ]
//! ```
//!
//! And a random scenario:
//!
//! ```yaml
//! system_type: random
//! num_bodies: 12
//! seed: 42
//! ```
//!
//! The engine maps this configuration into its runtime system
//! representation; body order in the specification is preserved 1:1.

use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

/// Which construction strategy builds the initial body ensemble
/// `system_type: "binary"`, `"random"` or `"custom"`
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemKind {
    #[serde(rename = "binary")] // fixed two-body elliptical preset
    Binary,

    #[serde(rename = "random")] // seeded random ensemble
    Random,

    #[serde(rename = "custom")] // bodies supplied by the caller
    Custom,
}

/// Raised when a system type string matches none of the recognized kinds
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unrecognized system type `{0}`, expected one of: binary, random, custom")]
pub struct UnknownSystemType(pub String);

impl FromStr for SystemKind {
    type Err = UnknownSystemType;

    // Case-insensitive, matching the lowercase names serde accepts
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "binary" => Ok(Self::Binary),
            "random" => Ok(Self::Random),
            "custom" => Ok(Self::Custom),
            _ => Err(UnknownSystemType(s.to_string())),
        }
    }
}

/// Initial state for one custom body
/// The fixed-arity arrays make two-component vectors a parse-time
/// guarantee
#[derive(Deserialize, Debug, Clone)]
pub struct BodySpec {
    pub name: String, // identifier, used to report validation failures
    pub m: f64,       // mass
    pub x: [f64; 2],  // initial position
    pub v: [f64; 2],  // initial velocity
}

/// Top-level scenario configuration
#[derive(Deserialize, Debug, Clone)]
pub struct SystemConfig {
    pub system_type: SystemKind, // construction strategy

    #[serde(default)]
    pub num_bodies: Option<usize>, // body count for random systems; drawn when absent

    #[serde(default)]
    pub seed: Option<u64>, // generator seed for random systems

    #[serde(default)]
    pub bodies: Option<Vec<BodySpec>>, // custom body specification, order preserved
}
