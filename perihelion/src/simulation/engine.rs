//! High-level runtime engine settings
//!
//! Step pacing, trail drawing and scaling used by the viewer
//! when running a `Scenario`

#[derive(Debug, Clone)]
pub struct Engine {
    pub rate: f64, // integrator steps per second
    pub trail: bool, // draw orbit trails
    pub scale: f32, // world units per simulation length unit
}

/// Visual marker for one body, in scenario order
#[derive(Debug, Clone)]
pub struct Marker {
    pub name: String,
    pub radius: f64,
    pub color: [f32; 3],
}
