pub mod orbit_vis3d;
