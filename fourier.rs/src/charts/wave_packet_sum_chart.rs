use math_utils::range::Range;

use crate::{
	charts::ComponentsChart, AxisDescription, AxisDescriptionTable, AxisZoom, SampleSequence,
	SeriesType, WavePacket, WidthIndicator,
};

/// The waveform of the whole wave packet, its envelope and its width in x space.
///
/// With finitely many components the waveform is the sum of the components chart's
/// data sets; otherwise it is computed from the continuous spectrum.
#[derive(Debug, Clone)]
pub struct WavePacketSumChart {
	sum: SampleSequence,
	envelope: SampleSequence,
	width_indicator: WidthIndicator,
	y_zoom: AxisZoom,
	auto_scale: bool,
	revision: u64,
}

impl WavePacketSumChart {
	/// # Panics
	/// - if `y_zoom_level` is not a valid index of `y_axis_descriptions`
	#[must_use]
	pub fn new(y_axis_descriptions: AxisDescriptionTable, y_zoom_level: usize) -> Self {
		Self {
			sum: SampleSequence::default(),
			envelope: SampleSequence::default(),
			width_indicator: WidthIndicator {
				position: 0.,
				width: 0.,
				height: 0.,
			},
			y_zoom: AxisZoom::new(y_axis_descriptions, y_zoom_level),
			auto_scale: false,
			revision: 0,
		}
	}

	#[must_use]
	pub const fn sum(&self) -> &SampleSequence {
		&self.sum
	}

	/// Empty when hidden.
	#[must_use]
	pub const fn envelope(&self) -> &SampleSequence {
		&self.envelope
	}

	#[must_use]
	pub const fn width_indicator(&self) -> WidthIndicator {
		self.width_indicator
	}

	#[must_use]
	pub const fn y_zoom(&self) -> &AxisZoom {
		&self.y_zoom
	}

	#[must_use]
	pub fn y_axis_description(&self) -> &AxisDescription {
		self.y_zoom.axis_description()
	}

	#[must_use]
	pub const fn auto_scale(&self) -> bool {
		self.auto_scale
	}

	#[must_use]
	pub const fn revision(&self) -> u64 {
		self.revision
	}

	/// Change the y zoom by hand. Ignored (returning `false`) while auto-scaling.
	pub fn zoom_y(&mut self, op: impl FnOnce(&mut AxisZoom) -> bool) -> bool {
		if self.auto_scale {
			log::warn!("cannot zoom the y axis of the wave packet sum chart while auto-scaling");
			return false;
		}
		let changed = op(&mut self.y_zoom);
		if changed {
			self.revision += 1;
		}
		changed
	}

	pub(crate) fn reset_y_zoom(&mut self, level: usize) {
		self.y_zoom.set_level(level);
	}

	/// `components` must have been updated with the same `x_range` and `n_of_points`.
	///
	/// # Panics
	/// - if the component data sets do not have `n_of_points` points each
	#[allow(clippy::too_many_arguments)]
	pub fn update(
		&mut self,
		wave_packet: &WavePacket,
		components: &ComponentsChart,
		x_range: Range,
		n_of_points: usize,
		series_type: SeriesType,
		envelope_visible: bool,
		auto_scale: bool,
	) {
		self.sum = if wave_packet.is_infinite() {
			wave_packet.continuous_waveform(n_of_points, x_range, series_type)
		} else {
			assert!(
				components
					.data_sets()
					.iter()
					.all(|d| d.len() == n_of_points),
				"the components chart is out of date"
			);
			SampleSequence::pointwise_sum(components.data_sets())
		};
		self.envelope = if envelope_visible {
			wave_packet.envelope(n_of_points, x_range)
		} else {
			SampleSequence::default()
		};
		let peak = self.sum.peak_amplitude();
		self.width_indicator = wave_packet.sum_width_indicator(peak);
		self.auto_scale = auto_scale;
		if auto_scale {
			self.y_zoom.fit_or_widest(Range::symmetric(peak));
		}
		self.revision += 1;
		log::debug!(
			"wave packet sum chart updated (revision {}): peak {peak}, y zoom level {}",
			self.revision,
			self.y_zoom.level()
		);
	}
}

#[cfg(test)]
mod tests {
	use std::f64::consts::PI;

	use crate::{axis_tables::wave_packet_y_axis_descriptions, WavePacketConfig};

	use super::*;

	const N_OF_POINTS: usize = 801;

	fn charts() -> (ComponentsChart, WavePacketSumChart) {
		(
			ComponentsChart::new(wave_packet_y_axis_descriptions().unwrap(), 2),
			WavePacketSumChart::new(wave_packet_y_axis_descriptions().unwrap(), 2),
		)
	}

	fn update(
		wave_packet: &WavePacket,
		components: &mut ComponentsChart,
		sum: &mut WavePacketSumChart,
		auto_scale: bool,
	) {
		let x_range = Range::symmetric(1.);
		components.update(wave_packet, x_range, N_OF_POINTS, SeriesType::Cos);
		sum.update(
			wave_packet,
			components,
			x_range,
			N_OF_POINTS,
			SeriesType::Cos,
			true,
			auto_scale,
		);
	}

	#[test]
	fn test_finite_and_infinite_sums_agree_near_the_origin() {
		let mut wave_packet = WavePacket::new(&WavePacketConfig::default());
		wave_packet.set_component_spacing(PI / 4.);
		let (mut components, mut chart) = charts();
		update(&wave_packet, &mut components, &mut chart, false);
		let finite = chart.sum().clone();

		wave_packet.set_component_spacing(0.);
		update(&wave_packet, &mut components, &mut chart, false);
		assert!(components.data_sets().is_empty());
		assert!(chart.sum().is_aligned_with(&finite));
		for (a, b) in chart.sum().iter().zip(finite.iter()) {
			assert!((a.y - b.y).abs() < 1e-3, "x={}", a.x);
		}
		assert_eq!(chart.revision(), 2);
	}

	#[test]
	fn test_envelope_and_width() {
		let wave_packet = WavePacket::new(&WavePacketConfig::default());
		let (mut components, mut chart) = charts();
		update(&wave_packet, &mut components, &mut chart, false);
		assert!(chart.envelope().is_aligned_with(chart.sum()));
		let indicator = chart.width_indicator();
		assert!((indicator.width - 2. / wave_packet.standard_deviation()).abs() < 1e-12);
		assert!((indicator.height - (-0.5_f64).exp() * chart.sum().peak_amplitude()).abs() < 1e-12);
	}

	#[test]
	fn test_auto_scale() {
		let mut wave_packet = WavePacket::new(&WavePacketConfig::default());
		let (mut components, mut chart) = charts();
		wave_packet.set_component_spacing(2. * PI);
		update(&wave_packet, &mut components, &mut chart, true);
		// 13 components sum up to about 1 at the origin
		let peak = chart.sum().peak_amplitude();
		assert!((peak - 1.).abs() < 1e-3);
		let level = chart.y_zoom().level();
		assert!(chart.y_axis_description().range().max() >= peak);
		assert!(chart
			.y_zoom()
			.table()
			.get(level + 1)
			.map_or(true, |next| next.range().max() < peak));
		assert!(!chart.zoom_y(AxisZoom::zoom_in));
	}
}
