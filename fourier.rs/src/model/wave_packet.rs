use math_utils::range::Range;

use crate::{
	axis_tables::{
		wave_packet_amplitudes_y_axis_descriptions, wave_packet_y_axis_descriptions,
		x_axis_descriptions, DEFAULT_X_ZOOM_LEVEL,
	},
	charts::{AmplitudesChart, ComponentsChart, WavePacketSumChart},
	AxisZoom, Domain, FourierError, SeriesType, WavePacket, WavePacketConfig,
};

/// Zoom level of the components and sum charts when the model is created: `[-1, 1]`.
const DEFAULT_Y_ZOOM_LEVEL: usize = 2;

/// Display settings of the wave packet screen. The wave packet parameters themselves
/// live in the [`WavePacket`].
#[derive(Debug, Clone, PartialEq)]
pub struct WavePacketInputs {
	/// Only changes symbols: wavelength and period are both 1.
	pub domain: Domain,
	pub series_type: SeriesType,
	pub x_zoom_level: usize,
	pub envelope_visible: bool,
	pub continuous_amplitudes_visible: bool,
	pub sum_auto_scale: bool,
}

impl Default for WavePacketInputs {
	fn default() -> Self {
		Self {
			domain: Domain::Space,
			series_type: SeriesType::Cos,
			x_zoom_level: DEFAULT_X_ZOOM_LEVEL,
			envelope_visible: false,
			continuous_amplitudes_visible: false,
			sum_auto_scale: false,
		}
	}
}

/// A Gaussian wave packet together with the charts derived from it.
#[derive(Debug, Clone)]
pub struct WavePacketModel {
	config: WavePacketConfig,
	wave_packet: WavePacket,
	inputs: WavePacketInputs,
	x_zoom: AxisZoom,
	components_chart: ComponentsChart,
	sum_chart: WavePacketSumChart,
	amplitudes_chart: AmplitudesChart,
}

impl WavePacketModel {
	/// # Errors
	/// [`FourierError`] if `config` or one of the built-in axis tables is invalid
	pub fn new(config: WavePacketConfig) -> Result<Self, FourierError> {
		config.validate()?;
		let mut model = Self {
			wave_packet: WavePacket::new(&config),
			inputs: WavePacketInputs::default(),
			x_zoom: AxisZoom::new(x_axis_descriptions()?, DEFAULT_X_ZOOM_LEVEL),
			components_chart: ComponentsChart::new(
				wave_packet_y_axis_descriptions()?,
				DEFAULT_Y_ZOOM_LEVEL,
			),
			sum_chart: WavePacketSumChart::new(
				wave_packet_y_axis_descriptions()?,
				DEFAULT_Y_ZOOM_LEVEL,
			),
			amplitudes_chart: AmplitudesChart::new(
				config.wave_number_range,
				wave_packet_amplitudes_y_axis_descriptions()?,
				0,
			),
			config,
		};
		model.reset();
		Ok(model)
	}

	#[must_use]
	pub const fn config(&self) -> &WavePacketConfig {
		&self.config
	}

	#[must_use]
	pub const fn wave_packet(&self) -> &WavePacket {
		&self.wave_packet
	}

	#[must_use]
	pub const fn inputs(&self) -> &WavePacketInputs {
		&self.inputs
	}

	#[must_use]
	pub const fn x_zoom(&self) -> &AxisZoom {
		&self.x_zoom
	}

	#[must_use]
	pub const fn components_chart(&self) -> &ComponentsChart {
		&self.components_chart
	}

	#[must_use]
	pub const fn sum_chart(&self) -> &WavePacketSumChart {
		&self.sum_chart
	}

	#[must_use]
	pub const fn amplitudes_chart(&self) -> &AmplitudesChart {
		&self.amplitudes_chart
	}

	/// Apply any number of changes to the inputs and to the wave packet, then
	/// recompute each affected chart once.
	///
	/// # Panics
	/// - if the domain is [`Domain::SpaceAndTime`], which has no wave packet form
	/// - if the x zoom level is not a valid index of the x axis table
	/// - if a wave packet setter panics, see [`WavePacket`]
	pub fn with_changes<O>(
		&mut self,
		op: impl FnOnce(&mut WavePacketInputs, &mut WavePacket) -> O,
	) -> O {
		let previous_inputs = self.inputs.clone();
		let previous_wave_packet = self.wave_packet.clone();
		let output = op(&mut self.inputs, &mut self.wave_packet);
		assert!(
			self.inputs.domain != Domain::SpaceAndTime,
			"a wave packet cannot be plotted in the {} domain",
			self.inputs.domain
		);
		let x_zoom_changed = self.x_zoom.set_level(self.inputs.x_zoom_level);

		let inputs = &self.inputs;
		let wave_packet_changed = self.wave_packet != previous_wave_packet;
		let components_dirty = wave_packet_changed
			|| x_zoom_changed
			|| inputs.series_type != previous_inputs.series_type;
		let sum_dirty = components_dirty
			|| inputs.envelope_visible != previous_inputs.envelope_visible
			|| inputs.sum_auto_scale != previous_inputs.sum_auto_scale;
		let amplitudes_dirty = wave_packet_changed
			|| inputs.continuous_amplitudes_visible
				!= previous_inputs.continuous_amplitudes_visible;

		if components_dirty {
			self.update_components_chart();
		}
		if sum_dirty {
			self.update_sum_chart();
		}
		if amplitudes_dirty {
			self.update_amplitudes_chart();
		}
		output
	}

	/// Change the y zoom of the components chart by hand.
	pub fn zoom_components_y(&mut self, op: impl FnOnce(&mut AxisZoom) -> bool) -> bool {
		self.components_chart.zoom_y(op)
	}

	/// Change the y zoom of the sum chart by hand, see [`WavePacketSumChart::zoom_y`].
	pub fn zoom_sum_y(&mut self, op: impl FnOnce(&mut AxisZoom) -> bool) -> bool {
		self.sum_chart.zoom_y(op)
	}

	/// Restore the initial wave packet, inputs and zoom levels, then recompute every
	/// chart once.
	pub fn reset(&mut self) {
		self.wave_packet = WavePacket::new(&self.config);
		self.inputs = WavePacketInputs::default();
		self.x_zoom.set_level(self.inputs.x_zoom_level);
		self.components_chart.reset_y_zoom(DEFAULT_Y_ZOOM_LEVEL);
		self.sum_chart.reset_y_zoom(DEFAULT_Y_ZOOM_LEVEL);
		self.update_components_chart();
		self.update_sum_chart();
		self.update_amplitudes_chart();
	}

	fn x_range(&self) -> Range {
		self.x_zoom.axis_description().range()
	}

	fn update_components_chart(&mut self) {
		self.components_chart.update(
			&self.wave_packet,
			self.x_range(),
			self.config.max_points_per_data_set,
			self.inputs.series_type,
		);
	}

	fn update_sum_chart(&mut self) {
		self.sum_chart.update(
			&self.wave_packet,
			&self.components_chart,
			self.x_range(),
			self.config.max_points_per_data_set,
			self.inputs.series_type,
			self.inputs.envelope_visible,
			self.inputs.sum_auto_scale,
		);
	}

	fn update_amplitudes_chart(&mut self) {
		self.amplitudes_chart
			.update(&self.wave_packet, self.inputs.continuous_amplitudes_visible);
	}
}
