use math_utils::range::Range;

use crate::{
	AxisDescription, AxisDescriptionTable, AxisZoom, Domain, FourierSeries, SampleSequence,
	SeriesType, Waveform,
};

/// The sum of all harmonics, optionally overlaid with the waveform the preset would
/// converge to with infinitely many harmonics.
#[derive(Debug, Clone)]
pub struct SumChart {
	sum: SampleSequence,
	infinite_harmonics: SampleSequence,
	y_zoom: AxisZoom,
	auto_scale: bool,
	revision: u64,
}

impl SumChart {
	/// # Panics
	/// - if `y_zoom_level` is not a valid index of `y_axis_descriptions`
	#[must_use]
	pub fn new(y_axis_descriptions: AxisDescriptionTable, y_zoom_level: usize) -> Self {
		Self {
			sum: SampleSequence::default(),
			infinite_harmonics: SampleSequence::default(),
			y_zoom: AxisZoom::new(y_axis_descriptions, y_zoom_level),
			auto_scale: false,
			revision: 0,
		}
	}

	#[must_use]
	pub const fn sum(&self) -> &SampleSequence {
		&self.sum
	}

	/// Empty when hidden or when the waveform has no infinite-harmonics form.
	#[must_use]
	pub const fn infinite_harmonics(&self) -> &SampleSequence {
		&self.infinite_harmonics
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

	/// Largest `|y|` of the sum.
	#[must_use]
	pub fn peak_amplitude(&self) -> f64 {
		self.sum.peak_amplitude()
	}

	/// Change the y zoom by hand. Ignored (returning `false`) while auto-scaling.
	/// Returns whether the zoom level changed, in which case the revision is
	/// incremented.
	pub fn zoom_y(&mut self, op: impl FnOnce(&mut AxisZoom) -> bool) -> bool {
		if self.auto_scale {
			log::warn!("the y axis of the sum chart cannot be zoomed while auto-scaling");
			return false;
		}
		let changed = op(&mut self.y_zoom);
		if changed {
			self.revision += 1;
		}
		changed
	}

	/// Select `level` without counting as an update; the owner is expected to call
	/// [`SumChart::update`] right after.
	pub(crate) fn reset_y_zoom(&mut self, level: usize) {
		self.y_zoom.set_level(level);
	}

	#[allow(clippy::too_many_arguments)]
	pub fn update(
		&mut self,
		series: &FourierSeries,
		x_axis_description: &AxisDescription,
		domain: Domain,
		series_type: SeriesType,
		t: f64,
		waveform: Waveform,
		infinite_harmonics_visible: bool,
		auto_scale: bool,
	) {
		self.sum = series.create_sum_data_set(x_axis_description, domain, series_type, t);
		self.infinite_harmonics = if infinite_harmonics_visible {
			waveform.create_infinite_harmonics_data_set(
				self.sum.len(),
				series.fundamental_wavelength(),
				series.fundamental_period(),
				x_axis_description.range().scaled(series.x_unit(domain)),
				domain,
				series_type,
				t,
			)
		} else {
			SampleSequence::default()
		};
		self.auto_scale = auto_scale;
		if auto_scale {
			self.y_zoom
				.fit_or_widest(Range::symmetric(self.sum.peak_amplitude()));
		}
		self.revision += 1;
		log::debug!(
			"sum chart revision {}: {domain}, {series_type}, {waveform}, t={t}, y zoom {}",
			self.revision,
			self.y_zoom.level()
		);
	}
}

#[cfg(test)]
mod tests {
	use crate::{axis_tables::sum_y_axis_descriptions, DiscreteConfig};

	use super::*;

	fn x_axis() -> AxisDescription {
		AxisDescription::symmetric(1., 0.25, 0.25, 0.5)
	}

	fn chart() -> SumChart {
		SumChart::new(sum_y_axis_descriptions(16.5).unwrap(), 10)
	}

	#[test]
	fn test_flat_sum() {
		let series = FourierSeries::new(&DiscreteConfig::default());
		let mut chart = chart();
		for domain in Domain::ALL {
			for series_type in SeriesType::ALL {
				chart.update(
					&series,
					&x_axis(),
					domain,
					series_type,
					3.,
					Waveform::Custom,
					true,
					false,
				);
				assert_eq!(chart.sum().len(), 2001);
				assert!(chart.sum().ys().all(|y| y == 0.));
				assert!(chart.infinite_harmonics().is_empty());
			}
		}
	}

	#[test]
	fn test_infinite_harmonics_is_aligned_with_the_sum() {
		let mut series = FourierSeries::new(&DiscreteConfig::default());
		series.with_batch(|series| {
			series.set_n_of_relevant_harmonics(11);
			series.set_amplitudes(&Waveform::Square.amplitudes(11, 11, SeriesType::Sin).unwrap());
		});
		let mut chart = chart();
		chart.update(
			&series,
			&x_axis(),
			Domain::Space,
			SeriesType::Sin,
			0.,
			Waveform::Square,
			true,
			false,
		);
		assert!(chart.infinite_harmonics().is_aligned_with(chart.sum()));

		chart.update(
			&series,
			&x_axis(),
			Domain::Space,
			SeriesType::Sin,
			0.,
			Waveform::Square,
			false,
			false,
		);
		assert!(chart.infinite_harmonics().is_empty());
	}

	#[test]
	fn test_auto_scale() {
		let mut series = FourierSeries::new(&DiscreteConfig::default());
		series.set_amplitude(1, 1.);
		let mut chart = chart();
		chart.update(
			&series,
			&x_axis(),
			Domain::Space,
			SeriesType::Sin,
			0.,
			Waveform::Sinusoid,
			false,
			true,
		);
		assert_eq!(chart.y_axis_description().range(), Range::symmetric(1.));
		assert!(!chart.zoom_y(AxisZoom::zoom_out));

		series.with_batch(|series| {
			series.set_n_of_relevant_harmonics(11);
			series.set_all_amplitudes(1.5);
		});
		chart.update(
			&series,
			&x_axis(),
			Domain::Space,
			SeriesType::Cos,
			0.,
			Waveform::Custom,
			false,
			true,
		);
		assert!((chart.peak_amplitude() - 16.5).abs() < 1e-9);
		assert_eq!(chart.y_axis_description().range(), Range::symmetric(18.));
	}

	#[test]
	fn test_manual_zoom() {
		let series = FourierSeries::new(&DiscreteConfig::default());
		let mut chart = chart();
		chart.update(
			&series,
			&x_axis(),
			Domain::Space,
			SeriesType::Sin,
			0.,
			Waveform::Custom,
			false,
			false,
		);
		let revision = chart.revision();
		assert!(chart.zoom_y(AxisZoom::zoom_in));
		assert_eq!(chart.revision(), revision + 1);
		assert_eq!(chart.y_zoom().level(), 11);
	}
}
