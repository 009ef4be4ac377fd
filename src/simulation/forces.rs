//! Force / acceleration contributors for the n-body engine
//!
//! Defines the 2D acceleration trait and the direct Newtonian gravity
//! term, with a hard minimum-separation cutoff near coincident bodies

use crate::simulation::states::{NVec2, System};

/// Gravitational constant (m³ kg⁻¹ s⁻²)
pub const G: f64 = 6.6743e-11;

/// Separations below this threshold produce zero pairwise force
pub const MIN_SEPARATION: f64 = 1e-6;

/// Collection of 2D acceleration terms (gravity, drag, etc.)
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per body
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations at time `t` for all bodies in `sys`
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_accels(&self, t: f64, sys: &System, out: &mut [NVec2]) {
        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec2::zeros();
        }
        // Iterate over all acceleration contributors
        for term in &self.terms {
            term.acceleration(t, sys, out);
        }
    }
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for 2D acceleration sources operating on [`System`]
/// Implementations add their contribution into `out[i]` for each body
pub trait Acceleration {
    fn acceleration(&self, t: f64, sys: &System, out: &mut [NVec2]);
}

/// 2D Newtonian gravity with a minimum-separation cutoff
/// Pairs closer than `min_separation` exert no force on each other, which
/// absorbs near-coincident bodies without NaN or unbounded force spikes
pub struct NewtonianGravity {
    pub g: f64, // gravitational constant
    pub min_separation: f64, // softening threshold
}

impl Default for NewtonianGravity {
    fn default() -> Self {
        Self {
            g: G,
            min_separation: MIN_SEPARATION,
        }
    }
}

impl NewtonianGravity {
    /// Gravitational force exerted on the first body by the second:
    /// `F = G m1 m2 / r²` along the unit separation vector
    ///
    /// Returns the zero vector when the separation falls below
    /// `min_separation`. Antisymmetric in its arguments: swapping the two
    /// bodies negates the result, up to floating-point rounding
    pub fn force(&self, m1: f64, m2: f64, x1: NVec2, x2: NVec2) -> NVec2 {
        // r points from body 1 to body 2; body 1 is pulled along +r
        let r_vec = x2 - x1;
        let r = r_vec.norm();

        // Near-coincident pair: zero force rather than a division blowup
        if r < self.min_separation {
            return NVec2::zeros();
        }

        let magnitude = self.g * m1 * m2 / (r * r);
        magnitude * (r_vec / r)
    }
}

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, _t: f64, sys: &System, out: &mut [NVec2]) {
        let n = sys.bodies.len();
        if n == 0 { // No bodies, return
            return;
        }

        // Loop over each unordered pair (i, j) with i < j, evaluating the
        // pairwise force once and applying it to both sides
        for i in 0..n {
            // bi: body i (left side of the pair)
            let bi = &sys.bodies[i];

            for j in (i + 1)..n {
                // bj: body j (right side of the pair)
                let bj = &sys.bodies[j];

                // Force on i exerted by j; j feels the equal and opposite
                let f = self.force(bi.m, bj.m, bi.x, bj.x);

                // a = F / m on each side of the pair
                // (masses are validated positive at construction time)
                out[i] += f / bi.m;
                out[j] -= f / bj.m;
            }
        }
    }
}
