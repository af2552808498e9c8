//! Measures the audio clips listed in a CSV annotation and produces a
//! duration-sorted manifest plus a diagnostic chart.

pub mod audio;
pub mod chart;
pub mod error;
pub mod manifest;
pub mod pipeline;

pub use error::{Error, Result};
