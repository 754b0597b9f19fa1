//! Fixed-step time integrators for the Sun-planet systems
//!
//! Both integrators use the semi-implicit (symplectic) Euler rule:
//! velocities are kicked first, then positions drift with the new velocities.
//! They are pure functions of their inputs: a state snapshot in, the state
//! one step `params.h0` later out.

use super::forces::{CorrectedGravity, NewtonianGravity, PairLaw};
use super::params::{Correction, Parameters};
use super::states::{Body, NVec3, OrbitState, ThreeBodyState, TwoBodyState};

/// Kick then drift a single body:
/// v_n+1 = v_n + dt * a_n
/// x_n+1 = x_n + dt * v_n+1
fn kick_drift(body: &Body, a: NVec3, dt: f64) -> Body {
    let v = body.v + dt * a;
    let x = body.x + dt * v;
    Body { x, v, m: body.m }
}

/// Advance Sun + one planet by one step
///
/// The Sun-planet pair uses the corrected force law; the Sun feels the
/// equal and opposite reaction.
pub fn two_body_step(state: &TwoBodyState, params: &Parameters, correction: &Correction) -> TwoBodyState {
    let dt = params.h0; // time step dt
    let sun_law = CorrectedGravity::from_parameters(params, correction);

    // a_planet = F / m_planet, a_sun = -F / m_sun
    let (a_planet, a_sun) = sun_law.accelerations(&state.planet, &state.sun);

    TwoBodyState {
        planet: kick_drift(&state.planet, a_planet, dt),
        sun: kick_drift(&state.sun, a_sun, dt),
    }
}

/// Advance Sun + two planets by one step
///
/// Each planet sums its corrected interaction with the Sun and its plain
/// Newtonian interaction with the other planet. The Sun only sums the two
/// corrected reactions.
pub fn three_body_step(state: &ThreeBodyState, params: &Parameters, correction: &Correction) -> ThreeBodyState {
    let dt = params.h0; // time step dt
    let sun_law = CorrectedGravity::from_parameters(params, correction);
    let planet_law = NewtonianGravity::from_parameters(params);

    // Sun pairs (corrected)
    let (a_inner_sun, a_sun_inner) = sun_law.accelerations(&state.inner, &state.sun);
    let (a_outer_sun, a_sun_outer) = sun_law.accelerations(&state.outer, &state.sun);

    // Planet pair (uncorrected)
    let (a_inner_outer, a_outer_inner) = planet_law.accelerations(&state.inner, &state.outer);

    let a_inner = a_inner_sun + a_inner_outer;
    let a_outer = a_outer_sun + a_outer_inner;
    let a_sun = a_sun_inner + a_sun_outer;

    ThreeBodyState {
        inner: kick_drift(&state.inner, a_inner, dt),
        outer: kick_drift(&state.outer, a_outer, dt),
        sun: kick_drift(&state.sun, a_sun, dt),
    }
}

/// Dispatch one step on whichever scenario shape `state` holds
pub fn orbit_step(state: &OrbitState, params: &Parameters, correction: &Correction) -> OrbitState {
    match state {
        OrbitState::TwoBody(s) => OrbitState::TwoBody(two_body_step(s, params, correction)),
        OrbitState::ThreeBody(s) => OrbitState::ThreeBody(three_body_step(s, params, correction)),
    }
}
