//! # Workflows Module
//!
//! Top-level entry points that drive the engine over a trajectory.
//!
//! - **Cavity Workflow** ([`cavity`]) - Height-resolved insertion probability for one probe radius
//! - **Sweep Workflow** ([`sweep`]) - Cavity profiles and free energies across a list of probe radii

pub mod cavity;
pub mod sweep;
