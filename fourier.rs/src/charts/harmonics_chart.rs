use crate::{
	axis_tables::harmonics_y_axis_description, n_of_points_for_order, AxisDescription, Domain,
	FourierSeries, SampleSequence, SeriesType,
};

/// One curve per relevant harmonic.
#[derive(Debug, Clone)]
pub struct HarmonicsChart {
	y_axis_description: AxisDescription,
	data_sets: Vec<SampleSequence>,
	revision: u64,
}

impl HarmonicsChart {
	#[must_use]
	pub fn new(series: &FourierSeries) -> Self {
		Self {
			y_axis_description: harmonics_y_axis_description(series.amplitude_range()),
			data_sets: Vec::new(),
			revision: 0,
		}
	}

	/// The amplitude axis never zooms.
	#[must_use]
	pub const fn y_axis_description(&self) -> &AxisDescription {
		&self.y_axis_description
	}

	/// Index `i` holds the curve of harmonic `i + 1`.
	#[must_use]
	pub fn data_sets(&self) -> &[SampleSequence] {
		&self.data_sets
	}

	#[must_use]
	pub const fn revision(&self) -> u64 {
		self.revision
	}

	/// Resample every relevant harmonic. Harmonic `n` gets a share of the point budget
	/// proportional to `n`.
	pub fn update(
		&mut self,
		series: &FourierSeries,
		x_axis_description: &AxisDescription,
		domain: Domain,
		series_type: SeriesType,
		t: f64,
	) {
		let x_range = x_axis_description.range().scaled(series.x_unit(domain));
		let n_of_harmonics = series.harmonics().len();
		let wavelength = series.fundamental_wavelength();
		let period = series.fundamental_period();
		self.data_sets = series
			.relevant_harmonics()
			.iter()
			.map(|harmonic| {
				harmonic.create_data_set(
					n_of_points_for_order(
						series.max_points_per_data_set(),
						harmonic.order(),
						n_of_harmonics,
					),
					wavelength,
					period,
					x_range,
					domain,
					series_type,
					t,
				)
			})
			.collect();
		self.revision += 1;
		log::debug!(
			"harmonics chart updated (revision {}): {} harmonics, {domain}, {series_type}, t={t}",
			self.revision,
			self.data_sets.len()
		);
	}
}
