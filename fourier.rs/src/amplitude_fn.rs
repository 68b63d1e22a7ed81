//! Closed-form contribution of a single harmonic at a point.
//!
//! There is one function per `(Domain, SeriesType)` pair:
//!
//! | domain         | sin                          | cos                          |
//! |----------------|------------------------------|------------------------------|
//! | space          | `A·sin(2πnx/L)`              | `A·cos(2πnx/L)`              |
//! | time           | `A·sin(2πnt/T)`              | `A·cos(2πnt/T)`              |
//! | space & time   | `A·sin(2πn(x/L − t/T))`      | `A·cos(2πn(x/L − t/T))`      |
//!
//! In the time domain the horizontal coordinate `x` is the time itself.

use std::f64::consts::TAU;

use crate::{Domain, SeriesType};

/// Signature shared by all amplitude functions:
/// `(amplitude, order, x, t, wavelength, period) -> y`.
pub type AmplitudeFn = fn(f64, usize, f64, f64, f64, f64) -> f64;

#[allow(clippy::cast_precision_loss)]
#[inline]
fn check_preconditions(order: usize, wavelength: f64, period: f64) -> f64 {
	debug_assert!(order >= 1, "harmonic order must be at least 1, got {order}");
	debug_assert!(wavelength > 0., "wavelength must be positive, got {wavelength}");
	debug_assert!(period > 0., "period must be positive, got {period}");
	order as f64
}

#[must_use]
pub fn sin_space(
	amplitude: f64,
	order: usize,
	x: f64,
	_t: f64,
	wavelength: f64,
	period: f64,
) -> f64 {
	let n = check_preconditions(order, wavelength, period);
	amplitude * (TAU * n * x / wavelength).sin()
}

#[must_use]
pub fn cos_space(
	amplitude: f64,
	order: usize,
	x: f64,
	_t: f64,
	wavelength: f64,
	period: f64,
) -> f64 {
	let n = check_preconditions(order, wavelength, period);
	amplitude * (TAU * n * x / wavelength).cos()
}

#[must_use]
pub fn sin_time(
	amplitude: f64,
	order: usize,
	x: f64,
	_t: f64,
	wavelength: f64,
	period: f64,
) -> f64 {
	let n = check_preconditions(order, wavelength, period);
	amplitude * (TAU * n * x / period).sin()
}

#[must_use]
pub fn cos_time(
	amplitude: f64,
	order: usize,
	x: f64,
	_t: f64,
	wavelength: f64,
	period: f64,
) -> f64 {
	let n = check_preconditions(order, wavelength, period);
	amplitude * (TAU * n * x / period).cos()
}

#[must_use]
pub fn sin_space_and_time(
	amplitude: f64,
	order: usize,
	x: f64,
	t: f64,
	wavelength: f64,
	period: f64,
) -> f64 {
	let n = check_preconditions(order, wavelength, period);
	amplitude * (TAU * n * (x / wavelength - t / period)).sin()
}

#[must_use]
pub fn cos_space_and_time(
	amplitude: f64,
	order: usize,
	x: f64,
	t: f64,
	wavelength: f64,
	period: f64,
) -> f64 {
	let n = check_preconditions(order, wavelength, period);
	amplitude * (TAU * n * (x / wavelength - t / period)).cos()
}

/// Select the amplitude function for a `(Domain, SeriesType)` pair.
#[must_use]
pub fn amplitude_fn(domain: Domain, series_type: SeriesType) -> AmplitudeFn {
	match (domain, series_type) {
		(Domain::Space, SeriesType::Sin) => sin_space,
		(Domain::Space, SeriesType::Cos) => cos_space,
		(Domain::Time, SeriesType::Sin) => sin_time,
		(Domain::Time, SeriesType::Cos) => cos_time,
		(Domain::SpaceAndTime, SeriesType::Sin) => sin_space_and_time,
		(Domain::SpaceAndTime, SeriesType::Cos) => cos_space_and_time,
	}
}

#[cfg(test)]
mod tests {
	use std::f64::consts::FRAC_PI_2;

	use super::*;

	const L: f64 = 1.;
	const T: f64 = 1000. / 440.;

	#[test]
	fn test_periodic_in_x() {
		for series_type in SeriesType::ALL {
			for order in 1..=11 {
				let f = amplitude_fn(Domain::Space, series_type);
				let g = amplitude_fn(Domain::Time, series_type);
				for i in 0..50 {
					let x = f64::from(i) * 0.037 - 0.8;
					let space_shift = f(1.3, order, x + L, 0., L, T);
					let time_shift = g(1.3, order, x + T, 0., L, T);
					assert!((f(1.3, order, x, 0., L, T) - space_shift).abs() < 1e-9);
					assert!((g(1.3, order, x, 0., L, T) - time_shift).abs() < 1e-9);
				}
			}
		}
	}

	#[test]
	fn test_sin_and_cos_are_phase_shifted() {
		for domain in Domain::ALL {
			let sin = amplitude_fn(domain, SeriesType::Sin);
			let cos = amplitude_fn(domain, SeriesType::Cos);
			let fundamental = if domain.is_spatial() { L } else { T };
			for order in 1..=5 {
				#[allow(clippy::cast_precision_loss)]
				let quarter = fundamental / (4. * order as f64);
				for i in 0..20 {
					let x = f64::from(i) * 0.05;
					let t = 0.3;
					let shifted = sin(0.7, order, x + quarter, t, L, T);
					assert!(
						(cos(0.7, order, x, t, L, T) - shifted).abs() < 1e-9,
						"{domain} order {order} x {x}"
					);
				}
			}
		}
	}

	#[test]
	fn test_space_and_time_at_t0_matches_space() {
		for i in 0..20 {
			let x = f64::from(i) * 0.05;
			let travelling = sin_space_and_time(1., 3, x, 0., L, T);
			assert!((travelling - sin_space(1., 3, x, 0., L, T)).abs() < 1e-12);
		}
	}

	#[test]
	fn test_space_and_time_travels_right() {
		// After one quarter period, the wave has moved by a quarter wavelength.
		let t = T / 4.;
		for i in 0..20 {
			let x = f64::from(i) * 0.05;
			let travelling = cos_space_and_time(1., 1, x + L / 4., t, L, T);
			assert!((travelling - cos_space(1., 1, x, 0., L, T)).abs() < 1e-9);
		}
	}

	#[test]
	fn test_known_values() {
		assert!((sin_space(2., 1, 0.25, 0., L, T) - 2.).abs() < 1e-12);
		assert!((cos_time(1., 2, T / 2., 0., L, T) - 1.).abs() < 1e-12);
		assert!((sin_time(1., 1, T / 4., 0., L, T) - (FRAC_PI_2).sin()).abs() < 1e-12);
	}
}
