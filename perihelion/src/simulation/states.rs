//! Core state types for the orbit simulation.
//!
//! Defines the point-mass `Body` and the two fixed scenario shapes:
//! - `TwoBodyState`   Sun + one orbiting body (Mercury)
//! - `ThreeBodyState` Sun + two orbiting bodies (Mercury, Venus)
//!
//! `System` wraps either shape together with the current simulation time `t`.
//! States are plain values: integrators take a snapshot and return a new one.

use nalgebra::Vector3;
pub type NVec3 = Vector3<f64>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub x: NVec3, // position
    pub v: NVec3, // velocity
    pub m: f64, // mass, fixed for the whole run
}

impl Body {
    pub fn new(x: NVec3, v: NVec3, m: f64) -> Self {
        Self { x, v, m }
    }

    /// Linear momentum `m v`
    pub fn momentum(&self) -> NVec3 {
        self.m * self.v
    }

    /// Kinetic energy `1/2 m v^2`
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.m * self.v.norm_squared()
    }

    /// Angular momentum `m (x cross v)` about the origin
    pub fn angular_momentum(&self) -> NVec3 {
        self.m * self.x.cross(&self.v)
    }
}

/// Sun + one orbiting body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwoBodyState {
    pub planet: Body,
    pub sun: Body,
}

/// Sun + two orbiting bodies. `inner` is Mercury, `outer` is Venus.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThreeBodyState {
    pub inner: Body,
    pub outer: Body,
    pub sun: Body,
}

/// Either scenario shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OrbitState {
    TwoBody(TwoBodyState),
    ThreeBody(ThreeBodyState),
}

impl OrbitState {
    /// Bodies in scenario order: the Sun first, then the orbiters
    pub fn bodies(&self) -> Vec<Body> {
        match self {
            OrbitState::TwoBody(s) => vec![s.sun, s.planet],
            OrbitState::ThreeBody(s) => vec![s.sun, s.inner, s.outer],
        }
    }

    pub fn sun(&self) -> &Body {
        match self {
            OrbitState::TwoBody(s) => &s.sun,
            OrbitState::ThreeBody(s) => &s.sun,
        }
    }

    /// The innermost orbiter (Mercury in both scenarios)
    pub fn primary(&self) -> &Body {
        match self {
            OrbitState::TwoBody(s) => &s.planet,
            OrbitState::ThreeBody(s) => &s.inner,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.bodies()
            .iter()
            .all(|b| b.x.iter().chain(b.v.iter()).all(|c| c.is_finite()))
    }
}

#[derive(Debug, Clone)]
pub struct System {
    pub state: OrbitState, // current bodies
    pub t: f64, // time
}
