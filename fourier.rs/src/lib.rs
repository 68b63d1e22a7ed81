//! Fourier synthesis and sampling: harmonic amplitudes (or a Gaussian spectrum) in,
//! plot-ready point sequences and axis scales out.

pub mod amplitude_fn;
pub mod axis_tables;
pub mod charts;
pub mod equation;
pub mod model;

mod error;
pub use error::*;

mod domain;
pub use domain::*;

mod series_type;
pub use series_type::*;

mod sample;
pub use sample::*;

mod harmonic;
pub use harmonic::*;

mod fourier_series;
pub use fourier_series::*;

mod waveform;
pub use waveform::*;

mod wave_packet;
pub use wave_packet::*;

mod axis_description;
pub use axis_description::*;

mod zoom;
pub use zoom::*;

mod config;
pub use config::*;

pub use math_utils::{discrete_interval::DiscreteInterval, range::Range};
pub use rustfft::num_complex;
