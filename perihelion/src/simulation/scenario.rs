//! Build fully-initialized orbit scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing), validates it and produces the
//! runtime `Scenario` bundle containing:
//! - viewer settings (`Engine`) and per-body markers
//! - physical constants and step size (`Parameters`)
//! - correction weights (`Correction`)
//! - system state (`System` with bodies at t = 0)
//!
//! The scenario is also the simulation driver: `advance` threads the state
//! through the integrator one fixed step at a time until `t_end`.
//! It is inserted into Bevy as a `Resource` by the viewer.

use bevy::prelude::Resource;

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::error::{ScenarioError, ScenarioResult};
use crate::simulation::engine::{Engine, Marker};
use crate::simulation::integrator::orbit_step;
use crate::simulation::params::{step_from_speed, Correction, Parameters};
use crate::simulation::states::{Body, NVec3, OrbitState, System, ThreeBodyState, TwoBodyState};

/// Bevy resource representing a fully-initialized orbit scenario
#[derive(Resource, Debug, Clone)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub correction: Correction,
    pub system: System,
    pub markers: Vec<Marker>, // Sun first, then planets
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> ScenarioResult<Self> {
        let n = cfg.bodies.len();
        if !(2..=3).contains(&n) {
            return Err(ScenarioError::BodyCount(n));
        }

        let p_cfg = &cfg.parameters;
        positive("G", p_cfg.G)?;
        positive("t_end", p_cfg.t_end)?;
        non_negative("rs", p_cfg.rs)?;
        non_negative("rl2", p_cfg.rl2)?;

        // Planets: map `BodyConfig` -> runtime `Body`, velocity required
        let planets = cfg.bodies[1..]
            .iter()
            .map(|bc| {
                let v = bc
                    .v
                    .as_deref()
                    .ok_or_else(|| ScenarioError::MissingVelocity(bc.name.clone()))?;
                if !(bc.m.is_finite() && bc.m >= 0.0) {
                    return Err(ScenarioError::InvalidMass { name: bc.name.clone(), m: bc.m });
                }
                Ok(Body::new(vec3(bc, "x", &bc.x)?, vec3(bc, "v", v)?, bc.m))
            })
            .collect::<ScenarioResult<Vec<Body>>>()?;

        // Central body: velocity balances the planets' momentum unless given
        let sun_cfg = &cfg.bodies[0];
        if !(sun_cfg.m.is_finite() && sun_cfg.m > 0.0) {
            return Err(ScenarioError::InvalidMass { name: sun_cfg.name.clone(), m: sun_cfg.m });
        }
        let sun_v = match sun_cfg.v.as_deref() {
            Some(v) => vec3(sun_cfg, "v", v)?,
            None => balancing_velocity(&planets, sun_cfg.m),
        };
        let sun = Body::new(vec3(sun_cfg, "x", &sun_cfg.x)?, sun_v, sun_cfg.m);

        // No two bodies may start on top of each other
        let all: Vec<(&BodyConfig, &Body)> = cfg
            .bodies
            .iter()
            .zip(std::iter::once(&sun).chain(planets.iter()))
            .collect();
        for (i, (ci, bi)) in all.iter().enumerate() {
            for (cj, bj) in &all[i + 1..] {
                if bi.x == bj.x {
                    return Err(ScenarioError::CoincidentBodies(ci.name.clone(), cj.name.clone()));
                }
            }
        }

        // Step size: configured, or derived from the first planet's initial speed
        let h0 = p_cfg.dt.unwrap_or_else(|| step_from_speed(planets[0].v.norm(), p_cfg.G));
        positive("dt", h0)?;

        let parameters = Parameters {
            t_end: p_cfg.t_end,
            h0,
            G: p_cfg.G,
            rs: p_cfg.rs,
            rl2: p_cfg.rl2,
        };

        let correction = checked_correction(cfg.correction.alpha, cfg.correction.beta)?;

        let state = match planets.as_slice() {
            [planet] => OrbitState::TwoBody(TwoBodyState { planet: *planet, sun }),
            [inner, outer] => OrbitState::ThreeBody(ThreeBodyState { inner: *inner, outer: *outer, sun }),
            _ => return Err(ScenarioError::BodyCount(n)),
        };

        // Engine (runtime) from EngineConfig
        let e_cfg = cfg.engine;
        positive("rate", e_cfg.rate)?;
        let engine = Engine {
            rate: e_cfg.rate,
            trail: e_cfg.trail,
            scale: e_cfg.scale,
        };

        let markers = cfg
            .bodies
            .iter()
            .map(|bc| Marker {
                name: bc.name.clone(),
                radius: bc.radius,
                color: bc.color,
            })
            .collect();

        Ok(Self {
            engine,
            parameters,
            correction,
            system: System { state, t: 0.0 },
            markers,
        })
    }

    /// Replace the correction weights, e.g. from command-line overrides
    pub fn with_correction(mut self, correction: Correction) -> ScenarioResult<Self> {
        self.correction = checked_correction(correction.alpha, correction.beta)?;
        Ok(self)
    }

    /// `true` once simulated time has reached `t_end`
    pub fn is_finished(&self) -> bool {
        self.system.t >= self.parameters.t_end
    }

    /// Advance the system by one fixed step, unless the run is over.
    /// Returns whether a step was taken.
    pub fn advance(&mut self) -> bool {
        if self.is_finished() {
            return false;
        }
        self.system.state = orbit_step(&self.system.state, &self.parameters, &self.correction);
        self.system.t += self.parameters.h0;
        true
    }
}

/// Sun velocity giving zero total momentum: `-sum(m_i v_i) / m_sun`
pub fn balancing_velocity(planets: &[Body], sun_mass: f64) -> NVec3 {
    let p: NVec3 = planets.iter().map(|b| b.v * b.m).sum();
    -p / sun_mass
}

fn vec3(bc: &BodyConfig, field: &'static str, xs: &[f64]) -> ScenarioResult<NVec3> {
    match xs {
        [x, y, z] => Ok(NVec3::new(*x, *y, *z)),
        _ => Err(ScenarioError::Dimension {
            name: bc.name.clone(),
            field,
            len: xs.len(),
        }),
    }
}

/// Correction weights may be zero or negative, but never NaN or infinite
fn checked_correction(alpha: f64, beta: f64) -> ScenarioResult<Correction> {
    finite("alpha", alpha)?;
    finite("beta", beta)?;
    Ok(Correction::new(alpha, beta))
}

fn finite(name: &'static str, value: f64) -> ScenarioResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ScenarioError::InvalidParameter { name, value })
    }
}

fn positive(name: &'static str, value: f64) -> ScenarioResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ScenarioError::InvalidParameter { name, value })
    }
}

fn non_negative(name: &'static str, value: f64) -> ScenarioResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ScenarioError::InvalidParameter { name, value })
    }
}
