//! Core state types for the N-body simulation.
//!
//! Defines the 2D body/system structs:
//! - `Body` with validated construction (`BodyError`)
//! - `System` owning the list of bodies and the current simulation time `t`
//! - `BodyState`, the read-only per-body record handed to the renderer

use log::debug;
use nalgebra::Vector2;
use thiserror::Error;

use crate::configuration::config::SystemKind;

pub type NVec2 = Vector2<f64>;

/// Validation failure for a single body's initial state
#[derive(Debug, Error, PartialEq)]
pub enum BodyError {
    #[error("mass must be a positive finite value, got {0}")]
    NonPositiveMass(f64),

    #[error("{field} components must be finite")]
    NonFinite { field: &'static str },
}

#[derive(Debug, Clone)]
pub struct Body {
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub m: f64, // mass
}

impl Body {
    /// Construct a body, rejecting non-positive mass and non-finite
    /// position/velocity components
    pub fn new(m: f64, x: NVec2, v: NVec2) -> Result<Self, BodyError> {
        if !m.is_finite() || m <= 0.0 {
            return Err(BodyError::NonPositiveMass(m));
        }
        if !(x.x.is_finite() && x.y.is_finite()) {
            return Err(BodyError::NonFinite { field: "position" });
        }
        if !(v.x.is_finite() && v.y.is_finite()) {
            return Err(BodyError::NonFinite { field: "velocity" });
        }
        Ok(Self { x, v, m })
    }
}

#[derive(Debug, Clone)]
pub struct System {
    pub kind: SystemKind, // construction strategy the system was built with
    pub bodies: Vec<Body>, // collection of bodies, index = stable body order
    pub t: f64, // time
}

impl System {
    /// New system at t = 0 holding `bodies` in their given order
    pub fn new(kind: SystemKind, bodies: Vec<Body>) -> Self {
        Self {
            kind,
            bodies,
            t: 0.0,
        }
    }

    /// Number of bodies currently in the system
    pub fn num_bodies(&self) -> usize {
        self.bodies.len()
    }

    /// Read-only per-body state, in stable body order
    pub fn snapshot(&self) -> Vec<BodyState> {
        self.bodies
            .iter()
            .map(|b| BodyState {
                x: b.x,
                v: b.v,
                m: b.m,
            })
            .collect()
    }

    /// Empty the body list and rewind `t`, returning the system to a
    /// re-initializable state once a run ends
    pub fn clear(&mut self) {
        debug!("clearing {} bodies at t = {}", self.bodies.len(), self.t);
        self.bodies.clear();
        self.t = 0.0;
    }
}

/// One body's `(position, velocity, mass)` as read back by the renderer
/// after each step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyState {
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub m: f64, // mass
}
