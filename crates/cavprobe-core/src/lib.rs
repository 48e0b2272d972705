//! # CAVPROBE Core Library
//!
//! Estimates, from a molecular-dynamics trajectory, the probability that a spherical probe
//! can be inserted without overlapping any solvent atom at points on a grid near an
//! interface, resolved by height above a reference plane, and derives the corresponding
//! cavitation free energy for a sweep of probe radii.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture:
//!
//! - **[`core`]: The Foundation.** Stateless data models (`Frame`, `SimulationBox`,
//!   `Species`), periodic geometry, thermodynamic relations, and trajectory/result I/O.
//!
//! - **[`engine`]: The Logic Core.** The probe-insertion scan: grid construction, the
//!   per-frame classification of probe points, histogram accumulation, and reference-plane
//!   tracking.
//!
//! - **[`workflows`]: The Public API.** Complete procedures tying `engine` and `core`
//!   together: a single-radius cavity profile and a multi-radius free-energy sweep.

pub mod core;
pub mod engine;
pub mod workflows;
