//! # Core Models Module
//!
//! Data structures describing a trajectory snapshot as the scan engine sees it.
//!
//! - [`atom`] - Atom records and validated species labels
//! - [`frame`] - A single trajectory snapshot and its derived atom subsets
//! - [`cell`] - The orthorhombic periodic simulation box

pub mod atom;
pub mod cell;
pub mod frame;
