#![allow(clippy::cast_precision_loss)]

use std::f64::consts::{PI, TAU};

use derive_more::derive::Display;
use math_utils::{
	discrete_interval::DiscreteInterval,
	parity::{alternating_sign, is_odd},
	range::Range,
};
use serde::{Deserialize, Serialize};

use crate::{Domain, SampleSequence, SeriesType};

/// Order of the most prominent harmonic of the wave packet preset.
const WAVE_PACKET_CENTER_ORDER: f64 = 6.;
/// Spread of the wave packet preset, in orders.
const WAVE_PACKET_SPREAD: f64 = 2.;

/// Amplitude presets of the discrete Fourier series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Waveform {
	#[default]
	#[display("sinusoid")]
	Sinusoid,
	#[display("triangle")]
	Triangle,
	#[display("square")]
	Square,
	#[display("sawtooth")]
	Sawtooth,
	#[display("wave packet")]
	WavePacket,
	/// Amplitudes set by hand.
	#[display("custom")]
	Custom,
}

impl Waveform {
	/// A sawtooth cannot be built out of cosines.
	#[must_use]
	pub const fn supports(&self, series_type: SeriesType) -> bool {
		!matches!((self, series_type), (Self::Sawtooth, SeriesType::Cos))
	}

	/// Preset amplitude of harmonic `order`, `None` for [`Waveform::Custom`] or an
	/// unsupported series type.
	#[must_use]
	pub fn amplitude(&self, order: usize, series_type: SeriesType) -> Option<f64> {
		debug_assert!(order >= 1);
		if !self.supports(series_type) {
			return None;
		}
		let n = order as f64;
		// (-1)^((n-1)/2), only meaningful for odd orders
		let odd_sign = alternating_sign((order - 1) / 2);
		let amplitude = match self {
			Self::Sinusoid => {
				if order == 1 {
					1.
				} else {
					0.
				}
			}
			Self::Triangle => {
				if is_odd(order) {
					let magnitude = 8. / (PI * PI * n * n);
					match series_type {
						SeriesType::Sin => odd_sign * magnitude,
						SeriesType::Cos => magnitude,
					}
				} else {
					0.
				}
			}
			Self::Square => {
				if is_odd(order) {
					let magnitude = 4. / (PI * n);
					match series_type {
						SeriesType::Sin => magnitude,
						SeriesType::Cos => odd_sign * magnitude,
					}
				} else {
					0.
				}
			}
			Self::Sawtooth => alternating_sign(order - 1) * 2. / (PI * n),
			Self::WavePacket => {
				let distance = n - WAVE_PACKET_CENTER_ORDER;
				(-distance * distance / (2. * WAVE_PACKET_SPREAD * WAVE_PACKET_SPREAD)).exp()
			}
			Self::Custom => return None,
		};
		Some(amplitude)
	}

	/// Preset amplitudes of all `n_of_harmonics` harmonics, with only the first
	/// `n_of_relevant` allowed to be non-zero.
	#[must_use]
	pub fn amplitudes(
		&self,
		n_of_relevant: usize,
		n_of_harmonics: usize,
		series_type: SeriesType,
	) -> Option<Vec<f64>> {
		debug_assert!(n_of_relevant <= n_of_harmonics);
		(1..=n_of_harmonics)
			.map(|order| {
				if order <= n_of_relevant {
					self.amplitude(order, series_type)
				} else {
					self.amplitude(order, series_type).map(|_| 0.)
				}
			})
			.collect()
	}

	/// Value at phase `θ` of the waveform the preset converges to as the number of
	/// harmonics grows, `None` if there is no such closed form.
	#[must_use]
	pub fn infinite_harmonics_value(&self, theta: f64, series_type: SeriesType) -> Option<f64> {
		if !self.supports(series_type) {
			return None;
		}
		let value = match self {
			Self::Sinusoid => series_type.apply(theta),
			Self::Triangle => 2. / PI * series_type.apply(theta).asin(),
			Self::Square => sign(series_type.apply(theta)),
			Self::Sawtooth => wrap_angle(theta) / PI,
			Self::WavePacket | Self::Custom => return None,
		};
		Some(value)
	}

	/// The infinite-harmonics waveform sampled at `n_of_points` positions of `x_range`,
	/// empty when the preset has no closed form.
	#[allow(clippy::too_many_arguments)]
	#[must_use]
	pub fn create_infinite_harmonics_data_set(
		&self,
		n_of_points: usize,
		wavelength: f64,
		period: f64,
		x_range: Range,
		domain: Domain,
		series_type: SeriesType,
		t: f64,
	) -> SampleSequence {
		if matches!(self, Self::WavePacket | Self::Custom) || !self.supports(series_type) {
			return SampleSequence::default();
		}
		let interval = DiscreteInterval::new(x_range, n_of_points);
		SampleSequence::sample(&interval, |x| {
			let theta = TAU
				* match domain {
					Domain::Space => x / wavelength,
					Domain::Time => x / period,
					Domain::SpaceAndTime => x / wavelength - t / period,
				};
			self.infinite_harmonics_value(theta, series_type)
				.unwrap_or_default()
		})
	}
}

fn sign(value: f64) -> f64 {
	if value > 0. {
		1.
	} else if value < 0. {
		-1.
	} else {
		0.
	}
}

/// Map `theta` to `(-π, π]`.
fn wrap_angle(theta: f64) -> f64 {
	let wrapped = theta - TAU * (theta / TAU).round();
	if wrapped <= -PI {
		wrapped + TAU
	} else {
		wrapped
	}
}
