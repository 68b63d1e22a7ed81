use math_utils::range::Range;

use crate::{
	axis_tables::wave_number_axis_description, AxisDescription, AxisDescriptionTable, AxisZoom,
	Point, SampleSequence, WavePacket, WidthIndicator,
};

/// The spectrum of a wave packet: one bar per component, the continuous density and
/// the `2σ` width indicator.
///
/// The y axis always fits the tallest bar (or the top of the curve).
#[derive(Debug, Clone)]
pub struct AmplitudesChart {
	x_axis_description: AxisDescription,
	components: Vec<Point>,
	continuous: SampleSequence,
	width_indicator: WidthIndicator,
	y_zoom: AxisZoom,
	revision: u64,
}

impl AmplitudesChart {
	/// # Panics
	/// - if `y_zoom_level` is not a valid index of `y_axis_descriptions`
	#[must_use]
	pub fn new(
		wave_number_range: Range,
		y_axis_descriptions: AxisDescriptionTable,
		y_zoom_level: usize,
	) -> Self {
		Self {
			x_axis_description: wave_number_axis_description(wave_number_range),
			components: Vec::new(),
			continuous: SampleSequence::default(),
			width_indicator: WidthIndicator {
				position: 0.,
				width: 0.,
				height: 0.,
			},
			y_zoom: AxisZoom::new(y_axis_descriptions, y_zoom_level),
			revision: 0,
		}
	}

	#[must_use]
	pub const fn x_axis_description(&self) -> &AxisDescription {
		&self.x_axis_description
	}

	/// `(wave number, amplitude)` of every component, empty when infinite.
	#[must_use]
	pub fn components(&self) -> &[Point] {
		&self.components
	}

	/// Empty when hidden. Always shown with infinitely many components, since there
	/// are no bars to draw.
	#[must_use]
	pub const fn continuous(&self) -> &SampleSequence {
		&self.continuous
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
	pub const fn revision(&self) -> u64 {
		self.revision
	}

	pub fn update(&mut self, wave_packet: &WavePacket, continuous_visible: bool) {
		self.components = wave_packet.components().iter().map(Point::from).collect();
		self.continuous = if continuous_visible || wave_packet.is_infinite() {
			wave_packet.continuous_amplitudes()
		} else {
			SampleSequence::default()
		};
		self.width_indicator = wave_packet.amplitudes_width_indicator();
		let peak = self
			.components
			.iter()
			.map(|p| p.y)
			.fold(self.continuous.peak_amplitude(), f64::max);
		self.y_zoom.fit_or_widest(Range::new(0., peak));
		self.revision += 1;
		log::debug!(
			"amplitudes chart updated (revision {}): {} components, σ={}",
			self.revision,
			self.components.len(),
			wave_packet.standard_deviation()
		);
	}
}

#[cfg(test)]
mod tests {
	use std::f64::consts::PI;

	use crate::{axis_tables::wave_packet_amplitudes_y_axis_descriptions, WavePacketConfig};

	use super::*;

	fn chart(config: &WavePacketConfig) -> AmplitudesChart {
		AmplitudesChart::new(
			config.wave_number_range,
			wave_packet_amplitudes_y_axis_descriptions().unwrap(),
			0,
		)
	}

	#[test]
	fn test_bars_and_curve() {
		let config = WavePacketConfig::default();
		let wave_packet = WavePacket::new(&config);
		let mut chart = chart(&config);

		chart.update(&wave_packet, false);
		assert_eq!(chart.components().len(), 25);
		assert_eq!(chart.y_axis_description().range(), Range::new(0., 0.25));
		assert!(chart.continuous().is_empty());
		let tallest = *chart
			.components()
			.iter()
			.max_by(|a, b| a.y.total_cmp(&b.y))
			.unwrap();
		assert!((tallest.x - 12. * PI).abs() < 1e-9);

		chart.update(&wave_packet, true);
		assert_eq!(chart.continuous().len(), 243);
		assert!((chart.continuous().peak_amplitude() - tallest.y).abs() < 1e-9);
		assert_eq!(chart.revision(), 2);
	}

	#[test]
	fn test_infinite_components_always_show_the_curve() {
		let config = WavePacketConfig::default();
		let mut wave_packet = WavePacket::new(&config);
		wave_packet.set_component_spacing(0.);
		let mut chart = chart(&config);
		chart.update(&wave_packet, false);
		assert!(chart.components().is_empty());
		assert!(!chart.continuous().is_empty());
		// The density peaks at 1/(σ√(2π)) ≈ 0.042
		assert_eq!(chart.y_axis_description().range(), Range::new(0., 0.05));
	}

	#[test]
	fn test_x_axis_covers_the_wave_numbers() {
		let config = WavePacketConfig::default();
		let chart = chart(&config);
		assert_eq!(chart.x_axis_description().range(), config.wave_number_range);
		assert_eq!(chart.x_axis_description().tick_label_spacing(), 4. * PI);
	}
}
