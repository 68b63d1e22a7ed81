use math_utils::{discrete_interval::DiscreteInterval, range::Range};

use crate::{
	amplitude_fn::amplitude_fn, AxisDescription, DiscreteConfig, Domain, Harmonic,
	SampleSequence, SeriesType,
};

/// A discrete Fourier series with a fixed number of harmonics sharing the same
/// fundamental wavelength `L` and period `T`.
///
/// Only the first [`FourierSeries::n_of_relevant_harmonics`] harmonics may have a
/// non-zero amplitude, the others are kept at 0.
///
/// Amplitude changes are reflected in the derived [`FourierSeries::amplitudes`] vector,
/// whose [`FourierSeries::revision`] increases by one every time it is recomputed.
/// Bulk mutations recompute it once, see [`FourierSeries::with_batch`].
#[derive(Debug, Clone)]
pub struct FourierSeries {
	harmonics: Vec<Harmonic>,
	fundamental_frequency: f64,
	fundamental_wavelength: f64,
	amplitude_range: Range,
	max_points_per_data_set: usize,
	n_of_relevant_harmonics: usize,
	amplitudes: Vec<f64>,
	revision: u64,
	batch_depth: usize,
	dirty: bool,
}

impl FourierSeries {
	/// Create a series whose harmonics all have amplitude 0, with only the fundamental
	/// marked as relevant.
	///
	/// # Panics
	/// - if `config` is invalid, see [`DiscreteConfig::validate`]
	#[must_use]
	pub fn new(config: &DiscreteConfig) -> Self {
		assert!(
			config.validate().is_ok(),
			"invalid configuration: {config:?}"
		);
		let amplitude_range = config.amplitude_range();
		let harmonics: Vec<Harmonic> = (1..=config.max_harmonics)
			.map(|order| {
				Harmonic::new(
					order,
					config.fundamental_frequency,
					config.fundamental_wavelength,
					0.,
					amplitude_range,
				)
			})
			.collect();
		let amplitudes = vec![0.; harmonics.len()];
		Self {
			harmonics,
			fundamental_frequency: config.fundamental_frequency,
			fundamental_wavelength: config.fundamental_wavelength,
			amplitude_range,
			max_points_per_data_set: config.max_points_per_data_set,
			n_of_relevant_harmonics: 1,
			amplitudes,
			revision: 0,
			batch_depth: 0,
			dirty: false,
		}
	}

	#[must_use]
	pub fn harmonics(&self) -> &[Harmonic] {
		&self.harmonics
	}

	/// # Panics
	/// - if there is no harmonic of the given order
	#[must_use]
	pub fn harmonic(&self, order: usize) -> &Harmonic {
		assert!(
			order >= 1 && order <= self.harmonics.len(),
			"no harmonic of order {order}"
		);
		&self.harmonics[order - 1]
	}

	/// The harmonics that can currently have a non-zero amplitude.
	#[must_use]
	pub fn relevant_harmonics(&self) -> &[Harmonic] {
		&self.harmonics[..self.n_of_relevant_harmonics]
	}

	#[must_use]
	pub const fn fundamental_frequency(&self) -> f64 {
		self.fundamental_frequency
	}

	/// `L`
	#[must_use]
	pub const fn fundamental_wavelength(&self) -> f64 {
		self.fundamental_wavelength
	}

	/// `T`, in milliseconds.
	#[must_use]
	pub fn fundamental_period(&self) -> f64 {
		1000. / self.fundamental_frequency
	}

	#[must_use]
	pub const fn amplitude_range(&self) -> Range {
		self.amplitude_range
	}

	#[must_use]
	pub const fn max_points_per_data_set(&self) -> usize {
		self.max_points_per_data_set
	}

	#[must_use]
	pub const fn n_of_relevant_harmonics(&self) -> usize {
		self.n_of_relevant_harmonics
	}

	/// One amplitude per harmonic, in order.
	#[must_use]
	pub fn amplitudes(&self) -> &[f64] {
		&self.amplitudes
	}

	/// Number of times [`FourierSeries::amplitudes`] has been recomputed.
	#[must_use]
	pub const fn revision(&self) -> u64 {
		self.revision
	}

	/// The unit of the horizontal axis for `domain`: `L` for space, `T` for time.
	#[must_use]
	pub fn x_unit(&self, domain: Domain) -> f64 {
		if domain.is_spatial() {
			self.fundamental_wavelength
		} else {
			self.fundamental_period()
		}
	}

	/// Run `op` with change notification deferred: however many amplitudes `op` touches,
	/// the derived amplitudes are recomputed at most once, when the outermost batch ends.
	pub fn with_batch<O>(&mut self, op: impl FnOnce(&mut Self) -> O) -> O {
		self.batch_depth += 1;
		let output = op(self);
		self.batch_depth -= 1;
		self.flush();
		output
	}

	fn flush(&mut self) {
		if self.batch_depth > 0 || !self.dirty {
			return;
		}
		self.amplitudes.clear();
		self.amplitudes
			.extend(self.harmonics.iter().map(Harmonic::amplitude));
		self.dirty = false;
		self.revision += 1;
		log::trace!(
			"amplitudes recomputed (revision {}): {:?}",
			self.revision,
			self.amplitudes
		);
	}

	/// # Panics
	/// - if there is no harmonic of the given order
	/// - in debug builds, if a harmonic that is not relevant would get a non-zero
	///   amplitude or if `amplitude` is outside of the amplitude range
	pub fn set_amplitude(&mut self, order: usize, amplitude: f64) {
		assert!(
			order >= 1 && order <= self.harmonics.len(),
			"no harmonic of order {order}"
		);
		debug_assert!(
			order <= self.n_of_relevant_harmonics || amplitude == 0.,
			"harmonic {order} is not relevant, its amplitude must stay 0"
		);
		if self.harmonics[order - 1].set_amplitude(amplitude) {
			self.dirty = true;
		}
		self.flush();
	}

	/// Set the amplitude of every harmonic, in order.
	///
	/// # Panics
	/// - if `amplitudes` does not have exactly one value per harmonic
	pub fn set_amplitudes(&mut self, amplitudes: &[f64]) {
		assert_eq!(
			amplitudes.len(),
			self.harmonics.len(),
			"expected one amplitude per harmonic"
		);
		self.with_batch(|series| {
			for (i, amplitude) in amplitudes.iter().enumerate() {
				series.set_amplitude(i + 1, *amplitude);
			}
		});
	}

	/// Set every relevant harmonic to `amplitude`.
	pub fn set_all_amplitudes(&mut self, amplitude: f64) {
		self.with_batch(|series| {
			for order in 1..=series.n_of_relevant_harmonics {
				series.set_amplitude(order, amplitude);
			}
		});
	}

	/// Change the number of relevant harmonics. Harmonics that stop being relevant are
	/// zeroed in a single batch.
	///
	/// # Panics
	/// - if `n` is 0 or greater than the number of harmonics
	pub fn set_n_of_relevant_harmonics(&mut self, n: usize) {
		assert!(
			n >= 1 && n <= self.harmonics.len(),
			"the number of relevant harmonics must be between 1 and {}, got {n}",
			self.harmonics.len()
		);
		let previous = self.n_of_relevant_harmonics;
		self.n_of_relevant_harmonics = n;
		if n < previous {
			self.with_batch(|series| {
				for order in n + 1..=previous {
					series.set_amplitude(order, 0.);
				}
			});
		}
	}

	/// Sum all harmonics at `max_points_per_data_set + 1` evenly spaced positions of
	/// the axis, both ends included.
	///
	/// `x_axis_description` is expressed in multiples of the fundamental wavelength
	/// (or period, for the time domain).
	#[must_use]
	pub fn create_sum_data_set(
		&self,
		x_axis_description: &AxisDescription,
		domain: Domain,
		series_type: SeriesType,
		t: f64,
	) -> SampleSequence {
		let x_range = x_axis_description.range().scaled(self.x_unit(domain));
		let interval = DiscreteInterval::new(x_range, self.max_points_per_data_set + 1);
		let f = amplitude_fn(domain, series_type);
		let wavelength = self.fundamental_wavelength;
		let period = self.fundamental_period();
		let active: Vec<&Harmonic> = self
			.harmonics
			.iter()
			.filter(|h| h.amplitude() != 0.)
			.collect();

		SampleSequence::sample(&interval, |x| {
			active
				.iter()
				.map(|h| f(h.amplitude(), h.order(), x, t, wavelength, period))
				.sum()
		})
	}
}
