use std::hint::black_box;
use std::time::Instant;

use crate::simulation::integrator::{three_body_step, two_body_step};
use crate::simulation::params::{step_from_speed, Correction, Parameters, G_SCALED, RL2_MERCURY, RS_SUN};
use crate::simulation::scenario::balancing_velocity;
use crate::simulation::states::{Body, NVec3, ThreeBodyState, TwoBodyState};

/// Mercury at perihelion
fn mercury() -> Body {
    Body::new(NVec3::new(0.0, 4.6, 0.0), NVec3::new(0.51, 0.0, 0.0), 1.66e-7)
}

/// Venus at perihelion
fn venus() -> Body {
    Body::new(NVec3::new(0.0, 10.7, 0.0), NVec3::new(0.30, 0.0, 0.0), 2.448e-6)
}

fn sun_for(planets: &[Body]) -> Body {
    Body::new(NVec3::zeros(), balancing_velocity(planets, 1.0), 1.0)
}

fn make_params() -> Parameters {
    Parameters {
        t_end: 440.0,
        h0: step_from_speed(0.51, G_SCALED),
        G: G_SCALED,
        rs: RS_SUN,
        rl2: RL2_MERCURY,
    }
}

/// Time both integrators over a range of step counts
/// Paste output directly into excel to graph
pub fn bench_integrators() {
    let params = make_params();
    let correction = Correction::new(5.0e6, 0.0);

    println!("steps,two_body_ns,three_body_ns");

    for steps in [10_000usize, 100_000, 1_000_000] {
        // Two-body
        let mut two = TwoBodyState { planet: mercury(), sun: sun_for(&[mercury()]) };

        let t0 = Instant::now();
        for _ in 0..steps {
            two = two_body_step(black_box(&two), &params, &correction);
        }
        let ns_two = t0.elapsed().as_secs_f64() * 1e9 / steps as f64;
        black_box(two);

        // Three-body
        let mut three = ThreeBodyState {
            inner: mercury(),
            outer: venus(),
            sun: sun_for(&[mercury(), venus()]),
        };

        let t1 = Instant::now();
        for _ in 0..steps {
            three = three_body_step(black_box(&three), &params, &correction);
        }
        let ns_three = t1.elapsed().as_secs_f64() * 1e9 / steps as f64;
        black_box(three);

        println!("{},{:.2},{:.2}", steps, ns_two, ns_three);
    }
}
