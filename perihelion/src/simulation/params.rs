//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds run-wide constants in scaled units
//! (length 1e10 m, time 1 day, mass 1 solar mass):
//! - gravitational constant `G`,
//! - correction constants `rs` (Schwarzschild radius) and `rl2` (specific angular momentum term),
//! - fixed step size and end time.
//!
//! `Correction` holds the per-run weights of the correction terms.

/// G' * M0 * T0^2 / R0^3 with G' = 6.6738e-11 m^3 / kg / s^2
pub const G_SCALED: f64 = 0.99;

/// Schwarzschild radius of the Sun
pub const RS_SUN: f64 = 2.95e-7;

/// Specific angular momentum term of Mercury's orbit
pub const RL2_MERCURY: f64 = 8.19e-7;

#[allow(non_snake_case)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    pub t_end: f64, // time end
    pub h0: f64, // step size
    pub G: f64, // gravitational constant
    pub rs: f64, // Schwarzschild radius of the Sun
    pub rl2: f64, // specific angular momentum correction constant
}

/// Step size used when none is configured: `2 |v0| / G / 100`
#[allow(non_snake_case)]
pub fn step_from_speed(speed: f64, G: f64) -> f64 {
    2.0 * speed / G / 100.0
}

/// Weights of the `1/r` (`alpha`) and `1/r^2` (`beta`) correction terms
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Correction {
    pub alpha: f64,
    pub beta: f64,
}

impl Correction {
    pub fn new(alpha: f64, beta: f64) -> Self {
        Self { alpha, beta }
    }

    /// Plain Newtonian gravity
    pub fn none() -> Self {
        Self::default()
    }
}
