//! # Core Module
//!
//! Fundamental building blocks shared by the scan engine and the workflows.
//!
//! - **Trajectory Representation** ([`models`]) - Atoms, species labels, frames and the periodic cell
//! - **File I/O** ([`io`]) - Streaming XYZ trajectories and writing profile/summary tables
//! - **Geometry** ([`utils`]) - Minimum-image displacements under orthorhombic periodic boundaries
//! - **Thermodynamics** ([`thermo`]) - Insertion probability to free-energy conversion

pub mod io;
pub mod models;
pub mod thermo;
pub mod utils;
