#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use std::f64::consts::{PI, TAU};

use derive_more::derive::Display;
use math_utils::{discrete_interval::DiscreteInterval, range::Range};
use rustfft::num_complex::Complex64;

use crate::{Point, SampleSequence, SeriesType, WavePacketConfig};

/// Tolerance used when counting how many components fit in the wave number range,
/// so that exact multiples of the spacing are not lost to rounding.
const COMPONENT_COUNT_EPSILON: f64 = 1e-9;

/// One discrete term of a wave packet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FourierComponent {
	wave_number: f64,
	amplitude: f64,
}

impl FourierComponent {
	#[must_use]
	pub const fn wave_number(&self) -> f64 {
		self.wave_number
	}

	#[must_use]
	pub const fn amplitude(&self) -> f64 {
		self.amplitude
	}
}

/// How many components a wave packet is decomposed into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum NOfComponents {
	#[display("{_0}")]
	Finite(usize),
	#[display("∞")]
	Infinite,
}

/// A horizontal segment measuring the width of a Gaussian, centered on `position`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidthIndicator {
	pub position: f64,
	pub width: f64,
	pub height: f64,
}

/// A Gaussian wave packet: a continuous spectrum of wave numbers (or angular
/// frequencies) centered on `center` with standard deviation `σ`, optionally sampled
/// every `component_spacing`.
///
/// Wavelength and period are both 1, the domain never changes the numbers, only the
/// symbols used to display them.
///
/// Only `σ` is stored: the conjugate standard deviation is always `1/σ`.
#[derive(Debug, Clone, PartialEq)]
pub struct WavePacket {
	wave_number_range: Range,
	component_spacings: Vec<f64>,
	center_range: Range,
	standard_deviation_range: Range,
	continuous_step: f64,
	component_spacing: f64,
	center: f64,
	standard_deviation: f64,
}

impl WavePacket {
	/// # Panics
	/// - if `config` is invalid, see [`WavePacketConfig::validate`]
	#[must_use]
	pub fn new(config: &WavePacketConfig) -> Self {
		assert!(
			config.validate().is_ok(),
			"invalid configuration: {config:?}"
		);
		Self {
			wave_number_range: config.wave_number_range,
			component_spacings: config.component_spacings.clone(),
			center_range: config.center_range,
			standard_deviation_range: config.standard_deviation_range,
			continuous_step: config.continuous_step,
			component_spacing: config.default_component_spacing,
			center: config.default_center,
			standard_deviation: config.default_standard_deviation,
		}
	}

	#[must_use]
	pub const fn wave_number_range(&self) -> Range {
		self.wave_number_range
	}

	#[must_use]
	pub fn component_spacings(&self) -> &[f64] {
		&self.component_spacings
	}

	#[must_use]
	pub const fn component_spacing(&self) -> f64 {
		self.component_spacing
	}

	#[must_use]
	pub const fn center(&self) -> f64 {
		self.center
	}

	#[must_use]
	pub const fn center_range(&self) -> Range {
		self.center_range
	}

	/// `σ`, the standard deviation in k space.
	#[must_use]
	pub const fn standard_deviation(&self) -> f64 {
		self.standard_deviation
	}

	#[must_use]
	pub const fn standard_deviation_range(&self) -> Range {
		self.standard_deviation_range
	}

	/// `1/σ`, the standard deviation in x space.
	#[must_use]
	pub fn conjugate_standard_deviation(&self) -> f64 {
		1. / self.standard_deviation
	}

	#[must_use]
	pub fn conjugate_standard_deviation_range(&self) -> Range {
		Range::new(
			1. / self.standard_deviation_range.max(),
			1. / self.standard_deviation_range.min(),
		)
	}

	#[must_use]
	pub const fn continuous_step(&self) -> f64 {
		self.continuous_step
	}

	/// Returns whether the value changed.
	///
	/// # Panics
	/// - if `spacing` is not one of [`WavePacket::component_spacings`]
	pub fn set_component_spacing(&mut self, spacing: f64) -> bool {
		assert!(
			self.component_spacings.contains(&spacing),
			"{spacing} is not an allowed component spacing ({:?})",
			self.component_spacings
		);
		let changed = self.component_spacing != spacing;
		self.component_spacing = spacing;
		changed
	}

	/// Returns whether the value changed.
	///
	/// # Panics
	/// - if `center` is outside of [`WavePacket::center_range`]
	pub fn set_center(&mut self, center: f64) -> bool {
		assert!(
			self.center_range.contains(center),
			"center {center} is outside of {}",
			self.center_range
		);
		let changed = self.center != center;
		self.center = center;
		changed
	}

	/// Returns whether the value changed.
	///
	/// # Panics
	/// - if `standard_deviation` is outside of [`WavePacket::standard_deviation_range`]
	pub fn set_standard_deviation(&mut self, standard_deviation: f64) -> bool {
		assert!(
			self.standard_deviation_range.contains(standard_deviation),
			"standard deviation {standard_deviation} is outside of {}",
			self.standard_deviation_range
		);
		let changed = self.standard_deviation != standard_deviation;
		self.standard_deviation = standard_deviation;
		changed
	}

	/// Set `σ` to `1/conjugate`. Returns whether the value changed.
	///
	/// # Panics
	/// - if `conjugate` is outside of [`WavePacket::conjugate_standard_deviation_range`]
	pub fn set_conjugate_standard_deviation(&mut self, conjugate: f64) -> bool {
		let range = self.conjugate_standard_deviation_range();
		assert!(
			range.contains(conjugate),
			"conjugate standard deviation {conjugate} is outside of {range}"
		);
		// The reciprocal of a bound may fall a rounding error outside the range
		let standard_deviation = self.standard_deviation_range.constrain(1. / conjugate);
		let changed = self.standard_deviation != standard_deviation;
		self.standard_deviation = standard_deviation;
		changed
	}

	/// The normalized Gaussian density at wave number `k`.
	#[must_use]
	pub fn component_amplitude(&self, k: f64) -> f64 {
		let sigma = self.standard_deviation;
		let distance = k - self.center;
		(-distance * distance / (2. * sigma * sigma)).exp() / (sigma * TAU.sqrt())
	}

	#[must_use]
	pub fn is_infinite(&self) -> bool {
		self.component_spacing == 0.
	}

	/// `floor(range.length / spacing) + 1`, or [`NOfComponents::Infinite`] when the
	/// spacing is 0.
	#[must_use]
	pub fn n_of_components(&self) -> NOfComponents {
		if self.is_infinite() {
			NOfComponents::Infinite
		} else {
			let ratio = self.wave_number_range.length() / self.component_spacing;
			NOfComponents::Finite((ratio + COMPONENT_COUNT_EPSILON).floor() as usize + 1)
		}
	}

	/// The discrete components `k = i·spacing`, each weighted by the spacing so that
	/// their amplitudes approximate the area under the density. Empty when the
	/// number of components is infinite.
	#[must_use]
	pub fn components(&self) -> Vec<FourierComponent> {
		let NOfComponents::Finite(n) = self.n_of_components() else {
			return Vec::new();
		};
		let spacing = self.component_spacing;
		(0..n)
			.map(|i| {
				let wave_number = i as f64 * spacing;
				FourierComponent {
					wave_number,
					amplitude: self.component_amplitude(wave_number) * spacing,
				}
			})
			.collect()
	}

	/// Wave numbers used to approximate the continuous spectrum: the wave number
	/// range widened by one step on each side.
	#[must_use]
	pub fn continuous_wave_numbers(&self) -> DiscreteInterval {
		DiscreteInterval::with_step(
			self.wave_number_range.expanded(self.continuous_step),
			self.continuous_step,
		)
	}

	/// The density curve of the amplitudes chart. With finitely many components the
	/// curve is scaled by the spacing, so that it envelopes the component bars.
	#[must_use]
	pub fn continuous_amplitudes(&self) -> SampleSequence {
		let scale = self.amplitude_scale();
		SampleSequence::sample(&self.continuous_wave_numbers(), |k| {
			self.component_amplitude(k) * scale
		})
	}

	/// `A·sin(k·x)` (or cosine) sampled at `n_of_points` positions of `x_range`.
	#[must_use]
	pub fn component_data_set(
		component: &FourierComponent,
		n_of_points: usize,
		x_range: Range,
		series_type: SeriesType,
	) -> SampleSequence {
		SampleSequence::sample(&DiscreteInterval::new(x_range, n_of_points), |x| {
			component.amplitude * series_type.apply(component.wave_number * x)
		})
	}

	/// The waveform of the continuous spectrum, `Σ density(k)·Δk·sin(k·x)` (or cosine)
	/// over [`WavePacket::continuous_wave_numbers`].
	#[must_use]
	pub fn continuous_waveform(
		&self,
		n_of_points: usize,
		x_range: Range,
		series_type: SeriesType,
	) -> SampleSequence {
		let terms = self.continuous_terms();
		SampleSequence::sample(&DiscreteInterval::new(x_range, n_of_points), |x| {
			terms
				.iter()
				.map(|(k, a)| a * series_type.apply(k * x))
				.sum()
		})
	}

	/// Amplitude modulation of the waveform, independent of the carrier phase:
	/// `sqrt(sin_sum(x)² + cos_sum(x)²)`, computed as the modulus of `Σ a_k·e^{ikx}`
	/// over the discrete components, or over the continuous spectrum when there are
	/// infinitely many.
	#[must_use]
	pub fn envelope(&self, n_of_points: usize, x_range: Range) -> SampleSequence {
		let terms: Vec<(f64, f64)> = if self.is_infinite() {
			self.continuous_terms()
		} else {
			self.components()
				.iter()
				.map(|c| (c.wave_number, c.amplitude))
				.collect()
		};
		SampleSequence::sample(&DiscreteInterval::new(x_range, n_of_points), |x| {
			terms
				.iter()
				.map(|(k, a)| Complex64::from_polar(*a, k * x))
				.sum::<Complex64>()
				.norm()
		})
	}

	/// Width of the spectrum in k space: `2σ`, centered on the center, at the height
	/// of the (scaled) density one standard deviation away from it.
	#[must_use]
	pub fn amplitudes_width_indicator(&self) -> WidthIndicator {
		WidthIndicator {
			position: self.center,
			width: 2. * self.standard_deviation,
			height: self.component_amplitude(self.center + self.standard_deviation)
				* self.amplitude_scale(),
		}
	}

	/// Width of the packet in x space: `2/σ`, centered on 0, at `e^{-1/2}` times the
	/// peak of the sum waveform.
	#[must_use]
	pub fn sum_width_indicator(&self, peak: f64) -> WidthIndicator {
		WidthIndicator {
			position: 0.,
			width: 2. * self.conjugate_standard_deviation(),
			height: (-0.5_f64).exp() * peak,
		}
	}

	/// Horizontal distance after which the sum of the finite components repeats itself.
	#[must_use]
	pub fn sum_period(&self) -> Option<f64> {
		(!self.is_infinite()).then(|| 2. * PI / self.component_spacing)
	}

	fn amplitude_scale(&self) -> f64 {
		if self.is_infinite() {
			1.
		} else {
			self.component_spacing
		}
	}

	/// `(k, density(k)·Δk)` pairs of the continuous spectrum.
	fn continuous_terms(&self) -> Vec<(f64, f64)> {
		let interval = self.continuous_wave_numbers();
		let dk = interval.step();
		interval
			.points()
			.map(|k| (k, self.component_amplitude(k) * dk))
			.collect()
	}
}

impl From<&FourierComponent> for Point {
	fn from(component: &FourierComponent) -> Self {
		Point::new(component.wave_number, component.amplitude)
	}
}

#[cfg(test)]
mod tests {
	use math_utils::quadrature::trapezoid_fn;

	use super::*;

	fn wave_packet() -> WavePacket {
		WavePacket::new(&WavePacketConfig::default())
	}

	#[test]
	fn test_density_is_normalized() {
		let mut wave_packet = wave_packet();
		for sigma in [PI, 2. * PI, 4. * PI] {
			wave_packet.set_standard_deviation(sigma);
			let c = wave_packet.center();
			let area = trapezoid_fn(
				|k| wave_packet.component_amplitude(k),
				c - 10. * sigma,
				c + 10. * sigma,
				10_000,
			);
			assert!((area - 1.).abs() < 1e-6, "σ={sigma}, area={area}");
		}
	}

	#[test]
	fn test_n_of_components() {
		let mut wave_packet = wave_packet();
		for (spacing, expected) in [(2. * PI, 13), (PI, 25), (PI / 2., 49), (PI / 4., 97)] {
			wave_packet.set_component_spacing(spacing);
			assert_eq!(wave_packet.n_of_components(), NOfComponents::Finite(expected));
			assert_eq!(wave_packet.components().len(), expected);
		}
	}

	#[test]
	fn test_components_at_the_maximum_spacing() {
		let mut wave_packet = wave_packet();
		wave_packet.set_component_spacing(2. * PI);
		let components = wave_packet.components();
		assert!(components[0].wave_number().abs() < f64::EPSILON);
		let last = components.last().unwrap();
		assert!((last.wave_number() - 24. * PI).abs() < 1e-9);
		assert!(wave_packet.wave_number_range().contains(last.wave_number()));
	}

	#[test]
	fn test_components_are_non_negative_multiples_of_the_spacing() {
		let mut wave_packet = wave_packet();
		wave_packet.set_component_spacing(PI / 2.);
		for (i, component) in wave_packet.components().iter().enumerate() {
			assert!(component.wave_number() >= 0.);
			assert!((component.wave_number() - i as f64 * PI / 2.).abs() < 1e-12);
		}
	}

	#[test]
	fn test_sum_period() {
		let mut wave_packet = wave_packet();
		wave_packet.set_component_spacing(PI / 2.);
		let period = wave_packet.sum_period().unwrap();
		assert!((period - 4.).abs() < 1e-12);
		let x_range = Range::new(0., period);
		for component in wave_packet.components() {
			let data_set =
				WavePacket::component_data_set(&component, 3, x_range, SeriesType::Cos);
			let ys: Vec<f64> = data_set.ys().collect();
			assert!((ys[0] - ys[2]).abs() < 1e-9);
		}
	}

	#[test]
	fn test_infinite_components() {
		let mut wave_packet = wave_packet();
		wave_packet.set_component_spacing(0.);
		assert_eq!(wave_packet.n_of_components(), NOfComponents::Infinite);
		assert_eq!(wave_packet.n_of_components().to_string(), "∞");
		assert!(wave_packet.components().is_empty());
		assert_eq!(wave_packet.sum_period(), None);
	}

	#[test]
	fn test_component_amplitudes_approximate_the_area() {
		let mut wave_packet = wave_packet();
		for spacing in [PI / 4., PI / 2., PI] {
			wave_packet.set_component_spacing(spacing);
			let total: f64 = wave_packet
				.components()
				.iter()
				.map(FourierComponent::amplitude)
				.sum();
			assert!((total - 1.).abs() < 1e-3, "spacing={spacing}, total={total}");
		}
	}

	fn product(wave_packet: &WavePacket) -> f64 {
		wave_packet.standard_deviation() * wave_packet.conjugate_standard_deviation()
	}

	#[test]
	fn test_conjugate_standard_deviation() {
		let mut wave_packet = wave_packet();
		for sigma in [PI, 2.5 * PI, 4. * PI] {
			wave_packet.set_standard_deviation(sigma);
			assert!((product(&wave_packet) - 1.).abs() < 1e-12);
		}
		let range = wave_packet.conjugate_standard_deviation_range();
		for dx in [range.min(), range.center(), range.max()] {
			wave_packet.set_conjugate_standard_deviation(dx);
			assert!((product(&wave_packet) - 1.).abs() < 1e-12);
			let sigma = wave_packet.standard_deviation();
			assert!(wave_packet.standard_deviation_range().contains(sigma));
		}
	}

	#[test]
	fn test_setters_report_changes() {
		let mut wave_packet = wave_packet();
		assert!(!wave_packet.set_center(12. * PI));
		assert!(wave_packet.set_center(10. * PI));
		assert!(!wave_packet.set_component_spacing(PI));
		assert!(wave_packet.set_component_spacing(PI / 2.));
	}

	#[test]
	#[should_panic(expected = "not an allowed component spacing")]
	fn test_unknown_spacing() {
		wave_packet().set_component_spacing(3.);
	}

	#[test]
	fn test_continuous_wave_numbers() {
		let interval = wave_packet().continuous_wave_numbers();
		assert_eq!(interval.n_of_points(), 243);
		assert!((interval.range().min() + PI / 10.).abs() < 1e-12);
		assert!((interval.range().max() - (24. * PI + PI / 10.)).abs() < 1e-12);
		assert!((interval.step() - PI / 10.).abs() < 1e-12);
	}

	#[test]
	fn test_continuous_amplitudes_envelope_the_components() {
		let wave_packet = wave_packet();
		let curve = wave_packet.continuous_amplitudes();
		for component in wave_packet.components() {
			let index = wave_packet
				.continuous_wave_numbers()
				.nearest_index(component.wave_number());
			let on_curve = curve.get(index).unwrap();
			assert!((on_curve.x - component.wave_number()).abs() < 1e-9);
			assert!((on_curve.y - component.amplitude()).abs() < 1e-9);
		}
	}

	#[test]
	fn test_envelope_of_the_continuous_spectrum() {
		let mut wave_packet = wave_packet();
		wave_packet.set_component_spacing(0.);
		let sigma = wave_packet.standard_deviation();
		let envelope = wave_packet.envelope(201, Range::symmetric(1.));
		for p in &envelope {
			let expected = (-sigma * sigma * p.x * p.x / 2.).exp();
			assert!((p.y - expected).abs() < 1e-3, "x={}", p.x);
		}
	}

	#[test]
	fn test_envelope_bounds_the_finite_sum() {
		let mut wave_packet = wave_packet();
		wave_packet.set_component_spacing(PI / 4.);
		let x_range = Range::symmetric(1.);
		let sequences: Vec<SampleSequence> = wave_packet
			.components()
			.iter()
			.map(|c| WavePacket::component_data_set(c, 401, x_range, SeriesType::Cos))
			.collect();
		let sum = SampleSequence::pointwise_sum(&sequences);
		let envelope = wave_packet.envelope(401, x_range);
		assert!(sum.is_aligned_with(&envelope));
		for (s, e) in sum.iter().zip(envelope.iter()) {
			assert!(s.y.abs() <= e.y + 1e-9);
		}
		// The carrier is in phase with the envelope at the origin
		let origin = sum.get(200).unwrap();
		assert!((origin.y - envelope.get(200).unwrap().y).abs() < 1e-9);
	}

	#[test]
	fn test_continuous_waveform_peaks_at_the_origin() {
		let mut wave_packet = wave_packet();
		wave_packet.set_component_spacing(0.);
		let waveform = wave_packet.continuous_waveform(201, Range::symmetric(1.), SeriesType::Cos);
		assert!((waveform.get(100).unwrap().y - 1.).abs() < 1e-3);
		assert!((waveform.peak_amplitude() - 1.).abs() < 1e-3);
	}

	#[test]
	fn test_width_indicators() {
		let wave_packet = wave_packet();
		let amplitudes = wave_packet.amplitudes_width_indicator();
		assert!((amplitudes.position - 12. * PI).abs() < 1e-12);
		assert!((amplitudes.width - 6. * PI).abs() < 1e-12);
		let peak = wave_packet.component_amplitude(wave_packet.center()) * PI;
		assert!((amplitudes.height - peak * (-0.5_f64).exp()).abs() < 1e-12);

		let sum = wave_packet.sum_width_indicator(1.);
		assert!(sum.position.abs() < f64::EPSILON);
		assert!((sum.width - 2. / (3. * PI)).abs() < 1e-12);
		assert!((sum.height - 0.606_530_659_712_633_4).abs() < 1e-12);
	}
}
