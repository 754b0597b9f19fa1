//! Pairwise force laws for the orbit integrators
//!
//! Defines the [`PairLaw`] trait and its two implementations:
//! plain Newtonian gravity (used between orbiting bodies) and
//! Newtonian gravity scaled by the post-Newtonian-like correction
//! factor (used for every pair that involves the Sun)

use crate::simulation::params::{Correction, Parameters};
use crate::simulation::states::{Body, NVec3};

/// An attractive inverse-square interaction between two point masses,
/// optionally scaled by a distance-dependent factor
///
/// For bodies A, B with `d = xA - xB` the force on A is
/// `F = -factor(|d|) * G * mA * mB / |d|^2 * d / |d|`
/// and the force on B is exactly `-F`
///
/// Coincident bodies (`|d| = 0`) are not handled and yield non-finite output
pub trait PairLaw {
    /// Gravitational constant
    fn gravity(&self) -> f64;

    /// Multiplier on top of the Newtonian magnitude at separation `dist`
    fn factor(&self, dist: f64) -> f64;

    /// Force on `a` exerted by `b`
    fn force_on(&self, a: &Body, b: &Body) -> NVec3 {
        // d points from b to a, so attraction acts along -d
        let d = a.x - b.x;
        let dist = d.norm();

        // mA * mB grouped so the magnitude does not depend on argument order
        let magnitude = self.factor(dist) * self.gravity() * (a.m * b.m) / (dist * dist);

        -magnitude * (d / dist)
    }

    /// Accelerations `(a_a, a_b)` the pair induces on both bodies
    ///
    /// Equivalent to `(F / mA, -F / mB)` but never divides by a mass,
    /// so a massless body is a finite test particle and exerts exactly zero
    fn accelerations(&self, a: &Body, b: &Body) -> (NVec3, NVec3) {
        let d = a.x - b.x;
        let dist = d.norm();

        // Acceleration per unit mass of the attractor, pointing from b to a
        let pull = self.factor(dist) * self.gravity() / (dist * dist) * (d / dist);

        (-b.m * pull, a.m * pull)
    }
}

/// Plain Newtonian gravity (`factor = 1`)
#[allow(non_snake_case)]
#[derive(Debug, Clone, Copy)]
pub struct NewtonianGravity {
    pub G: f64, // gravitational constant
}

impl NewtonianGravity {
    pub fn from_parameters(params: &Parameters) -> Self {
        Self { G: params.G }
    }
}

impl PairLaw for NewtonianGravity {
    fn gravity(&self) -> f64 {
        self.G
    }

    fn factor(&self, _dist: f64) -> f64 {
        1.0
    }
}

/// Newtonian gravity scaled by `c = 1 + alpha * rs / r + beta * rl2 / r^2`
///
/// Models strong-field effects near the dominant mass, so it is only
/// applied to pairs that involve the Sun
#[allow(non_snake_case)]
#[derive(Debug, Clone, Copy)]
pub struct CorrectedGravity {
    pub G: f64, // gravitational constant
    pub rs: f64, // Schwarzschild radius
    pub rl2: f64, // specific angular momentum term
    pub alpha: f64, // weight of the 1/r term
    pub beta: f64, // weight of the 1/r^2 term
}

impl CorrectedGravity {
    pub fn from_parameters(params: &Parameters, correction: &Correction) -> Self {
        Self {
            G: params.G,
            rs: params.rs,
            rl2: params.rl2,
            alpha: correction.alpha,
            beta: correction.beta,
        }
    }
}

impl PairLaw for CorrectedGravity {
    fn gravity(&self) -> f64 {
        self.G
    }

    fn factor(&self, dist: f64) -> f64 {
        1.0 + self.alpha * self.rs / dist + self.beta * self.rl2 / (dist * dist)
    }
}
