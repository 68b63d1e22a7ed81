use std::f64::consts::PI;

use math_utils::range::Range;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn ensure_positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
	if value > 0. {
		Ok(())
	} else {
		Err(ConfigError::NotPositive { name, value })
	}
}

fn ensure_within(name: &'static str, value: f64, range: Range) -> Result<(), ConfigError> {
	if range.contains(value) {
		Ok(())
	} else {
		Err(ConfigError::DefaultOutOfRange { name, value, range })
	}
}

/// Parameters of the discrete (harmonics) Fourier series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscreteConfig {
	/// Number of harmonics held by the series, relevant or not.
	pub max_harmonics: usize,
	/// Fundamental wavelength `L`, in meters.
	pub fundamental_wavelength: f64,
	/// Fundamental frequency, in Hz. The fundamental period `T` is `1000 / frequency` ms.
	pub fundamental_frequency: f64,
	/// Amplitudes are constrained to `[-max_amplitude, max_amplitude]`.
	pub max_amplitude: f64,
	/// Point budget of the sum data set and of the highest harmonic.
	pub max_points_per_data_set: usize,
	/// How many milliseconds of simulated time elapse per second of animation.
	pub simulation_ms_per_second: f64,
}

impl Default for DiscreteConfig {
	fn default() -> Self {
		Self {
			max_harmonics: 11,
			fundamental_wavelength: 1.,
			fundamental_frequency: 440.,
			max_amplitude: 1.5,
			max_points_per_data_set: 2000,
			// One fundamental period per second
			simulation_ms_per_second: 1000. / 440.,
		}
	}
}

impl DiscreteConfig {
	/// Milliseconds
	#[must_use]
	pub fn fundamental_period(&self) -> f64 {
		1000. / self.fundamental_frequency
	}

	#[must_use]
	pub fn amplitude_range(&self) -> Range {
		Range::symmetric(self.max_amplitude)
	}

	/// # Errors
	/// [`ConfigError`] describing the first invalid field
	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.max_harmonics == 0 {
			return Err(ConfigError::NoHarmonics);
		}
		if self.max_points_per_data_set < 2 {
			return Err(ConfigError::TooFewPoints(self.max_points_per_data_set));
		}
		ensure_positive("fundamental wavelength", self.fundamental_wavelength)?;
		ensure_positive("fundamental frequency", self.fundamental_frequency)?;
		ensure_positive("max amplitude", self.max_amplitude)?;
		ensure_positive("simulation ms per second", self.simulation_ms_per_second)?;
		Ok(())
	}
}

/// Parameters of the Gaussian wave packet. Wavelength and period are both 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WavePacketConfig {
	pub wave_number_range: Range,
	/// Allowed component spacings; 0 means infinitely many components.
	pub component_spacings: Vec<f64>,
	pub default_component_spacing: f64,
	pub center_range: Range,
	pub default_center: f64,
	pub standard_deviation_range: Range,
	pub default_standard_deviation: f64,
	/// Wave-number step used to approximate the continuous spectrum.
	pub continuous_step: f64,
	pub max_points_per_data_set: usize,
}

impl Default for WavePacketConfig {
	fn default() -> Self {
		Self {
			wave_number_range: Range::new(0., 24. * PI),
			component_spacings: vec![0., PI / 4., PI / 2., PI, 2. * PI],
			default_component_spacing: PI,
			center_range: Range::new(9. * PI, 15. * PI),
			default_center: 12. * PI,
			standard_deviation_range: Range::new(PI, 4. * PI),
			default_standard_deviation: 3. * PI,
			continuous_step: PI / 10.,
			max_points_per_data_set: 2000,
		}
	}
}

impl WavePacketConfig {
	/// Range of the conjugate standard deviation, `1/σ`.
	#[must_use]
	pub fn conjugate_standard_deviation_range(&self) -> Range {
		Range::new(
			1. / self.standard_deviation_range.max(),
			1. / self.standard_deviation_range.min(),
		)
	}

	/// # Errors
	/// [`ConfigError`] describing the first invalid field
	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.max_points_per_data_set < 2 {
			return Err(ConfigError::TooFewPoints(self.max_points_per_data_set));
		}
		if self.wave_number_range.min() != 0. {
			return Err(ConfigError::WaveNumberRangeStart(
				self.wave_number_range.min(),
			));
		}
		ensure_positive("wave number range length", self.wave_number_range.length())?;
		if !self.wave_number_range.contains(self.center_range.min())
			|| !self.wave_number_range.contains(self.center_range.max())
		{
			return Err(ConfigError::CenterRangeOutOfBounds {
				center_range: self.center_range,
				wave_number_range: self.wave_number_range,
			});
		}
		ensure_positive("continuous step", self.continuous_step)?;
		ensure_positive(
			"minimum standard deviation",
			self.standard_deviation_range.min(),
		)?;
		if self.component_spacings.is_empty() {
			return Err(ConfigError::NoComponentSpacings);
		}
		if let Some(&negative) = self.component_spacings.iter().find(|s| **s < 0.) {
			return Err(ConfigError::NegativeComponentSpacing(negative));
		}
		if !self
			.component_spacings
			.contains(&self.default_component_spacing)
		{
			return Err(ConfigError::UnknownDefaultComponentSpacing(
				self.default_component_spacing,
			));
		}
		ensure_within("center", self.default_center, self.center_range)?;
		ensure_within(
			"standard deviation",
			self.default_standard_deviation,
			self.standard_deviation_range,
		)?;
		Ok(())
	}
}
