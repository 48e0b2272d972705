//! Provides input/output functionality for trajectories and scan results.
//!
//! Trajectories are consumed as streams of [`Frame`](crate::core::models::frame::Frame)s
//! through the [`traits::TrajectorySource`] trait; results are written as plain-text
//! profile tables and a CSV summary.

pub mod profile;
pub mod summary;
pub mod traits;
pub mod xyz;
