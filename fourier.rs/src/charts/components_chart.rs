use math_utils::range::Range;

use crate::{
	AxisDescription, AxisDescriptionTable, AxisZoom, SampleSequence, SeriesType, WavePacket,
};

/// One waveform per Fourier component of a wave packet. Empty when the wave packet
/// has infinitely many components.
#[derive(Debug, Clone)]
pub struct ComponentsChart {
	data_sets: Vec<SampleSequence>,
	y_zoom: AxisZoom,
	revision: u64,
}

impl ComponentsChart {
	/// # Panics
	/// - if `y_zoom_level` is not a valid index of `y_axis_descriptions`
	#[must_use]
	pub fn new(y_axis_descriptions: AxisDescriptionTable, y_zoom_level: usize) -> Self {
		Self {
			data_sets: Vec::new(),
			y_zoom: AxisZoom::new(y_axis_descriptions, y_zoom_level),
			revision: 0,
		}
	}

	/// Index `i` holds the waveform of component `i`, all sampled at the same positions.
	#[must_use]
	pub fn data_sets(&self) -> &[SampleSequence] {
		&self.data_sets
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

	/// Returns whether the zoom level changed, in which case the revision is incremented.
	pub fn zoom_y(&mut self, op: impl FnOnce(&mut AxisZoom) -> bool) -> bool {
		let changed = op(&mut self.y_zoom);
		if changed {
			self.revision += 1;
		}
		changed
	}

	pub(crate) fn reset_y_zoom(&mut self, level: usize) {
		self.y_zoom.set_level(level);
	}

	pub fn update(
		&mut self,
		wave_packet: &WavePacket,
		x_range: Range,
		n_of_points: usize,
		series_type: SeriesType,
	) {
		self.data_sets = wave_packet
			.components()
			.iter()
			.map(|component| {
				WavePacket::component_data_set(component, n_of_points, x_range, series_type)
			})
			.collect();
		self.revision += 1;
		log::debug!(
			"components chart updated (revision {}): {} components, {series_type}",
			self.revision,
			self.data_sets.len()
		);
	}
}
