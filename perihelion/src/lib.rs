pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;
pub mod error;

pub use simulation::states::{Body, NVec3, OrbitState, System, ThreeBodyState, TwoBodyState};
pub use simulation::params::{Correction, Parameters};
pub use simulation::forces::{CorrectedGravity, NewtonianGravity, PairLaw};
pub use simulation::integrator::{orbit_step, three_body_step, two_body_step};
pub use simulation::scenario::Scenario;
pub use simulation::diagnostics::{run_headless, RunSummary};

pub use configuration::config::{BodyConfig, CorrectionConfig, EngineConfig, ParametersConfig, ScenarioConfig};

pub use error::{ScenarioError, ScenarioResult};

pub use visualization::orbit_vis3d::run_3d;

pub use benchmark::bench::bench_integrators;
