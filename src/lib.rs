//! Telemetry-processing and control engine for an RF power meter monitor.
//!
//! The monitor drains the meter's ASCII telemetry stream, carves it into
//! fixed-width frames, folds each decoded sample into a circular averaging
//! window, and answers a small text command protocol on a TCP control
//! socket.

pub mod config;
pub mod control;
pub mod error;
pub mod models;
pub mod stats;
pub mod telemetry;
pub mod transport;
pub mod utils;
