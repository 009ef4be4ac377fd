//! Fixed-step time integration for the N-body system
//!
//! Provides the classical fourth-order Runge–Kutta step, driven by an
//! `AccelSet` force field evaluated against whole-system trial states

use super::forces::AccelSet;
use super::states::{NVec2, System};

/// Advance the system by one RK4 step of size `dt`
///
/// Gravitational acceleration on any body depends on the instantaneous
/// positions of all bodies, so each of the four stages evaluates the force
/// field against a trial copy of the entire system displaced by the
/// previous stage's increments. Position and velocity updates are held
/// back until every body's combined delta is known, then applied in one
/// pass; no body ever sees a partially updated neighbour mid-step.
///
/// Four O(n²) force evaluations per call. `dt` is assumed positive and
/// finite; callers validate it at the stepping boundary.
pub fn rk4_integrator(sys: &mut System, forces: &AccelSet, dt: f64) {
    let n = sys.bodies.len();
    if n == 0 { // no bodies, return
        return;
    }

    let half_dt = 0.5 * dt;

    // Acceleration buffer, reused across the four stages
    let mut a = vec![NVec2::zeros(); n];

    // Stage 1: accelerations from the current state x_n, v_n
    // k1v = a(x_n) dt, k1x = v_n dt
    forces.accumulate_accels(sys.t, &*sys, &mut a);
    let k1v: Vec<NVec2> = a.iter().map(|ai| *ai * dt).collect();
    let k1x: Vec<NVec2> = sys.bodies.iter().map(|b| b.v * dt).collect();

    // Stage 2: every body displaced by half its stage-1 increments
    let trial = displaced(sys, &k1x, &k1v, 0.5);
    forces.accumulate_accels(sys.t + half_dt, &trial, &mut a);
    let k2v: Vec<NVec2> = a.iter().map(|ai| *ai * dt).collect();
    let k2x: Vec<NVec2> = trial.bodies.iter().map(|b| b.v * dt).collect();

    // Stage 3: half-step again, now from the stage-2 increments
    let trial = displaced(sys, &k2x, &k2v, 0.5);
    forces.accumulate_accels(sys.t + half_dt, &trial, &mut a);
    let k3v: Vec<NVec2> = a.iter().map(|ai| *ai * dt).collect();
    let k3x: Vec<NVec2> = trial.bodies.iter().map(|b| b.v * dt).collect();

    // Stage 4: full step from the stage-3 increments
    let trial = displaced(sys, &k3x, &k3v, 1.0);
    forces.accumulate_accels(sys.t + dt, &trial, &mut a);
    let k4v: Vec<NVec2> = a.iter().map(|ai| *ai * dt).collect();
    let k4x: Vec<NVec2> = trial.bodies.iter().map(|b| b.v * dt).collect();

    // Weighted combine over the pre-step state:
    // v_n+1 = v_n + (k1v + 2 k2v + 2 k3v + k4v) / 6
    // x_n+1 = x_n + (k1x + 2 k2x + 2 k3x + k4x) / 6
    for (i, b) in sys.bodies.iter_mut().enumerate() {
        b.v += (k1v[i] + 2.0 * k2v[i] + 2.0 * k3v[i] + k4v[i]) / 6.0;
        b.x += (k1x[i] + 2.0 * k2x[i] + 2.0 * k3x[i] + k4x[i]) / 6.0;
    }

    // Increment the system time by one full step
    sys.t += dt;
}

/// Trial copy of `sys` with every body shifted by `scale` times its stage
/// increments (`scale` is 0.5 for the half-step stages, 1.0 for stage 4)
fn displaced(sys: &System, kx: &[NVec2], kv: &[NVec2], scale: f64) -> System {
    let mut trial = sys.clone();
    for (i, b) in trial.bodies.iter_mut().enumerate() {
        b.x += scale * kx[i];
        b.v += scale * kv[i];
    }
    trial
}
