//! # avproc-dsp
//!
//! Frequency-domain evaluation for the configuration console: turns a
//! speaker's PEQ bands into the magnitude-response curve the chart renders.
//! Pure computation, no I/O.

pub mod response;

pub use response::{
    plot_frequencies, response_curve, ResponseCurve, ResponseError, PLOT_POINTS, SAMPLE_RATE,
};
