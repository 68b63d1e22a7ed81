#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use math_utils::{discrete_interval::DiscreteInterval, range::Range};

use crate::{amplitude_fn::amplitude_fn, Domain, SampleSequence, SeriesType};

/// One term of a discrete Fourier series.
///
/// Harmonics are owned by a [`crate::FourierSeries`], which is the only place
/// where their amplitude can change.
#[derive(Debug, Clone, PartialEq)]
pub struct Harmonic {
	order: usize,
	fundamental_frequency: f64,
	fundamental_wavelength: f64,
	amplitude: f64,
	amplitude_range: Range,
	color_tag: usize,
}

impl Harmonic {
	/// # Panics
	/// - if `order` is 0
	/// - if the fundamental frequency or wavelength is not positive
	/// - if `amplitude` is outside `amplitude_range`
	#[must_use]
	pub fn new(
		order: usize,
		fundamental_frequency: f64,
		fundamental_wavelength: f64,
		amplitude: f64,
		amplitude_range: Range,
	) -> Self {
		assert!(order >= 1, "harmonic order must be at least 1");
		assert!(
			fundamental_frequency > 0.,
			"fundamental frequency must be positive, got {fundamental_frequency}"
		);
		assert!(
			fundamental_wavelength > 0.,
			"fundamental wavelength must be positive, got {fundamental_wavelength}"
		);
		assert!(
			amplitude_range.contains(amplitude),
			"amplitude {amplitude} is outside of {amplitude_range}"
		);
		Self {
			order,
			fundamental_frequency,
			fundamental_wavelength,
			amplitude,
			amplitude_range,
			color_tag: order - 1,
		}
	}

	#[must_use]
	pub const fn order(&self) -> usize {
		self.order
	}

	/// Hz
	#[must_use]
	pub fn frequency(&self) -> f64 {
		self.fundamental_frequency * self.order as f64
	}

	#[must_use]
	pub fn wavelength(&self) -> f64 {
		self.fundamental_wavelength / self.order as f64
	}

	/// Milliseconds
	#[must_use]
	pub fn period(&self) -> f64 {
		1000. / self.frequency()
	}

	#[must_use]
	pub const fn amplitude(&self) -> f64 {
		self.amplitude
	}

	#[must_use]
	pub const fn amplitude_range(&self) -> Range {
		self.amplitude_range
	}

	/// Index into the renderer's harmonic palette.
	#[must_use]
	pub const fn color_tag(&self) -> usize {
		self.color_tag
	}

	/// Returns whether the amplitude actually changed.
	pub(crate) fn set_amplitude(&mut self, amplitude: f64) -> bool {
		debug_assert!(
			self.amplitude_range.contains(amplitude),
			"amplitude {amplitude} is outside of {}",
			self.amplitude_range
		);
		if self.amplitude == amplitude {
			false
		} else {
			self.amplitude = amplitude;
			true
		}
	}

	/// Sample this harmonic at `n_of_points` evenly spaced positions of `x_range`, both
	/// ends included.
	///
	/// `wavelength` and `period` are the fundamental ones, the order of the harmonic
	/// is applied by the amplitude function.
	#[allow(clippy::too_many_arguments)]
	#[must_use]
	pub fn create_data_set(
		&self,
		n_of_points: usize,
		wavelength: f64,
		period: f64,
		x_range: Range,
		domain: Domain,
		series_type: SeriesType,
		t: f64,
	) -> SampleSequence {
		let f = amplitude_fn(domain, series_type);
		let interval = DiscreteInterval::new(x_range, n_of_points);
		SampleSequence::sample(&interval, |x| {
			f(self.amplitude, self.order, x, t, wavelength, period)
		})
	}
}

/// Number of points used to plot harmonic `order` out of `n_of_harmonics`.
///
/// Higher harmonics oscillate faster and get proportionally more points, so that
/// every curve looks equally smooth.
#[must_use]
pub fn n_of_points_for_order(max_points: usize, order: usize, n_of_harmonics: usize) -> usize {
	debug_assert!(order >= 1 && order <= n_of_harmonics);
	(max_points * order).div_ceil(n_of_harmonics).max(2)
}
