//! Conserved quantities and orbit diagnostics
//!
//! Energy and momenta are evaluated with plain Newtonian gravity, so they
//! are conserved (up to integration error) only when the correction is off.
//! `PerihelionTracker` watches the planet-Sun distance and records every
//! closest approach, which is how the correction shows up visually.

use std::f64::consts::PI;

use log::{debug, info, warn};

use crate::simulation::scenario::Scenario;
use crate::simulation::states::{Body, NVec3};

/// Total energy: sum of 1/2 m v^2 minus G mA mB / r over all pairs
#[allow(non_snake_case)]
pub fn total_energy(bodies: &[Body], G: f64) -> f64 {
    let kinetic: f64 = bodies.iter().map(Body::kinetic_energy).sum();

    let mut potential = 0.0;
    for (i, bi) in bodies.iter().enumerate() {
        for bj in &bodies[i + 1..] {
            potential -= G * bi.m * bj.m / (bi.x - bj.x).norm();
        }
    }

    kinetic + potential
}

/// Total angular momentum about the origin
pub fn angular_momentum(bodies: &[Body]) -> NVec3 {
    bodies.iter().map(Body::angular_momentum).sum()
}

/// Total linear momentum
pub fn linear_momentum(bodies: &[Body]) -> NVec3 {
    bodies.iter().map(Body::momentum).sum()
}

/// `|current - initial| / |initial|`
pub fn relative_drift(initial: f64, current: f64) -> f64 {
    ((current - initial) / initial).abs()
}

/// One closest approach of a planet to the Sun
#[derive(Debug, Clone, Copy)]
pub struct Perihelion {
    pub t: f64, // time of the sample closest to the Sun
    pub dist: f64, // planet-Sun distance at that sample
    pub angle: f64, // in-plane angle of the planet relative to the Sun, in the sense of motion
}

/// Detects perihelion passages from a stream of samples
///
/// A passage is a sample strictly closer than its predecessor and no
/// farther than its successor.
#[derive(Debug, Default)]
pub struct PerihelionTracker {
    sense: Option<f64>, // +1 counter-clockwise, -1 clockwise around +z
    before: Option<f64>, // distance two samples back
    last: Option<(f64, f64, NVec3)>, // (t, dist, relative position) of the previous sample
    passages: Vec<Perihelion>,
}

impl PerihelionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the state at time `t`, returns a passage if the previous sample was one
    pub fn observe(&mut self, t: f64, planet: &Body, sun: &Body) -> Option<Perihelion> {
        let rel = planet.x - sun.x;
        let dist = rel.norm();

        let sense = *self.sense.get_or_insert_with(|| {
            let lz = rel.cross(&(planet.v - sun.v)).z;
            if lz < 0.0 { -1.0 } else { 1.0 }
        });

        let mut found = None;
        if let (Some(before), Some((t_last, d_last, rel_last))) = (self.before, self.last) {
            if d_last < before && d_last <= dist {
                let p = Perihelion {
                    t: t_last,
                    dist: d_last,
                    angle: sense * rel_last.y.atan2(rel_last.x),
                };
                self.passages.push(p);
                found = Some(p);
            }
        }

        self.before = self.last.map(|(_, d, _)| d);
        self.last = Some((t, dist, rel));
        found
    }

    pub fn passages(&self) -> &[Perihelion] {
        &self.passages
    }

    /// Mean angle the perihelion moves per orbit, positive along the motion
    pub fn advance_per_orbit(&self) -> Option<f64> {
        if self.passages.len() < 2 {
            return None;
        }
        let total: f64 = self
            .passages
            .windows(2)
            .map(|w| wrap_angle(w[1].angle - w[0].angle))
            .sum();
        Some(total / (self.passages.len() - 1) as f64)
    }
}

/// Map an angle difference into (-pi, pi]
fn wrap_angle(a: f64) -> f64 {
    let mut a = a % (2.0 * PI);
    if a <= -PI {
        a += 2.0 * PI;
    } else if a > PI {
        a -= 2.0 * PI;
    }
    a
}

/// Outcome of a headless run
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub steps: usize,
    pub t: f64, // final simulation time
    pub energy_drift: f64, // relative Newtonian energy drift
    pub angular_momentum_drift: f64, // relative drift of the z component
    pub perihelia: Vec<Perihelion>,
    pub advance_per_orbit: Option<f64>,
    pub finite: bool, // false if the run stopped on a non-finite state
}

/// Drive `scenario` to its end time without rendering, logging diagnostics
pub fn run_headless(scenario: &mut Scenario) -> RunSummary {
    let g = scenario.parameters.G;
    let start = scenario.system.state.bodies();
    let e0 = total_energy(&start, g);
    let lz0 = angular_momentum(&start).z;

    info!(
        "headless run: {} bodies, dt = {:.6}, t_end = {}, alpha = {:e}, beta = {:e}",
        start.len(),
        scenario.parameters.h0,
        scenario.parameters.t_end,
        scenario.correction.alpha,
        scenario.correction.beta,
    );

    let mut tracker = PerihelionTracker::new();
    tracker.observe(scenario.system.t, scenario.system.state.primary(), scenario.system.state.sun());

    let mut steps = 0;
    let mut finite = true;
    while scenario.advance() {
        steps += 1;
        let state = &scenario.system.state;
        if !state.is_finite() {
            warn!("state became non-finite at t = {:.4}, stopping", scenario.system.t);
            finite = false;
            break;
        }
        if let Some(p) = tracker.observe(scenario.system.t, state.primary(), state.sun()) {
            debug!("perihelion at t = {:.3}: r = {:.5}, angle = {:.5} rad", p.t, p.dist, p.angle);
        }
    }

    let end = scenario.system.state.bodies();
    let summary = RunSummary {
        steps,
        t: scenario.system.t,
        energy_drift: relative_drift(e0, total_energy(&end, g)),
        angular_momentum_drift: relative_drift(lz0, angular_momentum(&end).z),
        perihelia: tracker.passages().to_vec(),
        advance_per_orbit: tracker.advance_per_orbit(),
        finite,
    };

    info!(
        "finished after {} steps at t = {:.3}: energy drift {:.3e}, Lz drift {:.3e}, {} perihelion passages",
        summary.steps,
        summary.t,
        summary.energy_drift,
        summary.angular_momentum_drift,
        summary.perihelia.len(),
    );
    if let Some(adv) = summary.advance_per_orbit {
        info!("perihelion advance: {:.5} rad per orbit", adv);
    }

    summary
}
