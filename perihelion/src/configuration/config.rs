//! Configuration types for loading orbit scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – viewer options (step rate, trails, scale)
//! - [`ParametersConfig`] – physical constants and time stepping
//! - [`CorrectionConfig`] – weights of the correction terms
//! - [`BodyConfig`]       – initial state for each body, central body first
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! The single-planet run in scaled units
//! (length 1e10 m, time 1 day, mass 1 solar mass):
//!
//! ```yaml
//! engine:
//!   rate: 100               # integrator steps per second in the viewer
//!   trail: true             # draw orbit trails
//!
//! parameters:
//!   t_end: 440.0            # total simulated time (days)
//!   G: 0.99                 # gravitational constant
//!   rs: 2.95e-7             # Schwarzschild radius of the Sun
//!   rl2: 8.19e-7            # specific angular momentum term
//!   # dt: 0.01              # optional, derived from the first planet's speed
//!
//! correction:
//!   alpha: 5.0e6
//!   beta: 0.0
//!
//! bodies:
//!   - name: sun             # velocity omitted: balances total momentum
//!     x: [0.0, 0.0, 0.0]
//!     m: 1.0
//!     radius: 0.8
//!     color: [1.0, 1.0, 0.0]
//!   - name: mercury
//!     x: [0.0, 4.6, 0.0]
//!     v: [0.51, 0.0, 0.0]
//!     m: 1.66e-7
//!     radius: 0.2
//!     color: [1.0, 0.0, 0.0]
//! ```
//!
//! The scenario builder validates this and maps it into the runtime
//! [`Scenario`](crate::simulation::scenario::Scenario).

use serde::Deserialize;

/// Viewer configuration
#[derive(Deserialize, Debug, Clone)]
pub struct EngineConfig {
    #[serde(default = "default_rate")]
    pub rate: f64, // integrator steps per second of wall-clock time
    #[serde(default = "default_trail")]
    pub trail: bool, // append every position to a persistent orbit trail
    #[serde(default = "default_scale")]
    pub scale: f32, // world-space units per simulation length unit
}

fn default_rate() -> f64 {
    100.0
}

fn default_trail() -> bool {
    true
}

fn default_scale() -> f32 {
    50.0
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rate: default_rate(),
            trail: default_trail(),
            scale: default_scale(),
        }
    }
}

/// Physical constants and time stepping for a scenario
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub t_end: f64, // time end
    pub G: f64,     // gravitational constant
    pub rs: f64,    // Schwarzschild radius of the Sun
    pub rl2: f64,   // specific angular momentum correction constant
    #[serde(default)]
    pub dt: Option<f64>, // fixed step, derived from the first planet's speed when absent
}

/// Weights of the correction terms, zero means plain Newtonian gravity
#[derive(Deserialize, Debug, Clone, Copy, Default)]
pub struct CorrectionConfig {
    #[serde(default)]
    pub alpha: f64,
    #[serde(default)]
    pub beta: f64,
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub name: String, // label used in logs and errors
    pub x: Vec<f64>, // Initial position vector `x` in simulation units
    #[serde(default)]
    pub v: Option<Vec<f64>>, // Initial velocity, required for planets, derived for the central body if absent
    pub m: f64, // Mass of the body
    #[serde(default = "default_radius")]
    pub radius: f64, // Visual radius of the marker sphere
    #[serde(default = "default_color")]
    pub color: [f32; 3], // Marker color, sRGB
}

fn default_radius() -> f64 {
    0.2
}

fn default_color() -> [f32; 3] {
    [1.0, 1.0, 1.0]
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig, // Viewer configuration
    pub parameters: ParametersConfig, // Physical constants and time stepping
    #[serde(default)]
    pub correction: CorrectionConfig, // Correction weights
    pub bodies: Vec<BodyConfig>, // Central body first, then one or two planets
}
