//! # Engine Module
//!
//! The probe-insertion scan for a single probe radius.
//!
//! ## Overview
//!
//! A fixed [`grid::ProbeGrid`] of probe points is tested against the solvent atoms of every
//! frame. Each frame is classified independently by a [`scan::FrameScanner`], producing a
//! [`scan::FrameContribution`]; contributions are folded into an
//! [`histogram::OccupancyHistogram`] and a [`reference::ReferencePlane`], and the result is
//! finalized as a [`profile::CavityProfile`] expressed relative to the average reference
//! height.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Validated scan, selection and sweep parameters
//! - **Probe Grid** ([`grid`]) - Probe points per z-layer and bin centers
//! - **Frame Scanning** ([`scan`]) - Per-frame classification of probe points and the running fold
//! - **Occupancy Histogram** ([`histogram`]) - Per-bin counts of tested and unobstructed probes
//! - **Reference Plane** ([`reference`]) - Per-frame reference heights and their average
//! - **Results** ([`profile`]) - The finalized height-resolved profile for one radius
//! - **Error Handling** ([`error`]) - Source- and run-level failures
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress events

pub mod config;
pub mod error;
pub mod grid;
pub mod histogram;
pub mod profile;
pub mod progress;
pub mod reference;
pub mod scan;
