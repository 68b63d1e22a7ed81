use crate::{
	axis_tables::{sum_y_axis_descriptions, x_axis_descriptions, DEFAULT_X_ZOOM_LEVEL},
	charts::{HarmonicsChart, SumChart},
	equation::{harmonic_equation, sum_equation, EquationForm, Term},
	AxisDescription, AxisZoom, DiscreteConfig, Domain, FourierError, FourierSeries, SeriesType,
	Waveform,
};

/// Everything the user can change on the discrete screen, except amplitudes.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscreteInputs {
	pub domain: Domain,
	pub series_type: SeriesType,
	pub waveform: Waveform,
	/// Number of relevant harmonics.
	pub n_of_harmonics: usize,
	/// Simulated time, in milliseconds.
	pub t: f64,
	pub is_playing: bool,
	pub x_zoom_level: usize,
	pub sum_auto_scale: bool,
	pub infinite_harmonics_visible: bool,
	pub equation_form: EquationForm,
}

impl Default for DiscreteInputs {
	fn default() -> Self {
		Self {
			domain: Domain::default(),
			series_type: SeriesType::default(),
			waveform: Waveform::default(),
			n_of_harmonics: 1,
			t: 0.,
			is_playing: false,
			x_zoom_level: DEFAULT_X_ZOOM_LEVEL,
			sum_auto_scale: false,
			infinite_harmonics_visible: false,
			equation_form: EquationForm::default(),
		}
	}
}

/// Zoom level of the sum chart when the model is created: `[-1.5, 1.5]`.
const DEFAULT_SUM_Y_ZOOM_LEVEL: usize = 10;

/// The discrete Fourier series together with the charts derived from it.
///
/// Inputs are changed through [`DiscreteModel::with_changes`], which recomputes every
/// affected chart exactly once, after all the changes have been applied.
#[derive(Debug, Clone)]
pub struct DiscreteModel {
	config: DiscreteConfig,
	series: FourierSeries,
	inputs: DiscreteInputs,
	x_zoom: AxisZoom,
	harmonics_chart: HarmonicsChart,
	sum_chart: SumChart,
	default_sum_y_zoom_level: usize,
}

impl DiscreteModel {
	/// # Errors
	/// [`FourierError`] if `config` or one of the built-in axis tables is invalid
	pub fn new(config: DiscreteConfig) -> Result<Self, FourierError> {
		config.validate()?;
		#[allow(clippy::cast_precision_loss)]
		let largest_sum = config.max_harmonics as f64 * config.max_amplitude;
		let sum_y_table = sum_y_axis_descriptions(largest_sum)?;
		let sum_y_zoom_level = DEFAULT_SUM_Y_ZOOM_LEVEL.min(sum_y_table.len() - 1);
		let x_zoom = AxisZoom::new(x_axis_descriptions()?, DEFAULT_X_ZOOM_LEVEL);

		let series = FourierSeries::new(&config);
		let harmonics_chart = HarmonicsChart::new(&series);
		let mut model = Self {
			config,
			series,
			inputs: DiscreteInputs::default(),
			x_zoom,
			harmonics_chart,
			sum_chart: SumChart::new(sum_y_table, sum_y_zoom_level),
			default_sum_y_zoom_level: sum_y_zoom_level,
		};
		model.reset();
		Ok(model)
	}

	#[must_use]
	pub const fn config(&self) -> &DiscreteConfig {
		&self.config
	}

	#[must_use]
	pub const fn series(&self) -> &FourierSeries {
		&self.series
	}

	#[must_use]
	pub const fn inputs(&self) -> &DiscreteInputs {
		&self.inputs
	}

	/// Shared by the harmonics and sum charts.
	#[must_use]
	pub fn x_axis_description(&self) -> &AxisDescription {
		self.x_zoom.axis_description()
	}

	#[must_use]
	pub const fn x_zoom(&self) -> &AxisZoom {
		&self.x_zoom
	}

	#[must_use]
	pub const fn harmonics_chart(&self) -> &HarmonicsChart {
		&self.harmonics_chart
	}

	#[must_use]
	pub const fn sum_chart(&self) -> &SumChart {
		&self.sum_chart
	}

	/// Apply any number of input changes, then recompute each affected chart once.
	///
	/// A sawtooth cannot be built out of cosines: that combination is coerced to sine.
	/// An equation form that does not apply to the new domain is hidden.
	///
	/// # Panics
	/// - if the number of harmonics is 0 or greater than the configured maximum
	/// - if the x zoom level is not a valid index of the x axis table
	pub fn with_changes<O>(&mut self, op: impl FnOnce(&mut DiscreteInputs) -> O) -> O {
		let previous = self.inputs.clone();
		let output = op(&mut self.inputs);
		self.settle(&previous, false);
		output
	}

	/// Set a single amplitude by hand, which turns the waveform into [`Waveform::Custom`].
	///
	/// # Panics
	/// - if `order` is not one of the relevant harmonics
	/// - if `amplitude` is outside of the amplitude range
	pub fn set_amplitude(&mut self, order: usize, amplitude: f64) {
		assert!(
			order >= 1 && order <= self.inputs.n_of_harmonics,
			"harmonic {order} is not relevant"
		);
		assert!(
			self.series.amplitude_range().contains(amplitude),
			"amplitude {amplitude} is outside of {}",
			self.series.amplitude_range()
		);
		let previous = self.inputs.clone();
		self.series.set_amplitude(order, amplitude);
		self.inputs.waveform = Waveform::Custom;
		self.settle(&previous, true);
	}

	/// Advance the simulated time by `dt` seconds of animation. Time only flows while
	/// playing in the space & time domain.
	pub fn step(&mut self, dt: f64) {
		if self.inputs.is_playing && self.inputs.domain == Domain::SpaceAndTime {
			let elapsed = dt * self.config.simulation_ms_per_second;
			self.with_changes(|inputs| inputs.t += elapsed);
		}
	}

	/// Restore the initial inputs, amplitudes and zoom levels, then recompute every
	/// chart once.
	pub fn reset(&mut self) {
		self.inputs = DiscreteInputs::default();
		self.x_zoom.set_level(self.inputs.x_zoom_level);
		self.sum_chart.reset_y_zoom(self.default_sum_y_zoom_level);
		self.apply_waveform();
		self.update_harmonics_chart();
		self.update_sum_chart();
	}

	/// Change the y zoom of the sum chart by hand, see [`SumChart::zoom_y`].
	pub fn zoom_sum_y(&mut self, op: impl FnOnce(&mut AxisZoom) -> bool) -> bool {
		self.sum_chart.zoom_y(op)
	}

	/// The equation of the whole series in the current equation form.
	#[must_use]
	pub fn sum_equation(&self) -> Option<String> {
		sum_equation(
			self.inputs.equation_form,
			self.inputs.domain,
			self.inputs.series_type,
			self.inputs.n_of_harmonics,
		)
	}

	/// The specific equation of harmonic `order`, with its current amplitude.
	#[must_use]
	pub fn harmonic_equation(&self, order: usize) -> Option<String> {
		harmonic_equation(
			self.inputs.equation_form,
			self.inputs.domain,
			self.inputs.series_type,
			Term::Value(order),
			Term::Value(self.series.harmonic(order).amplitude()),
		)
	}

	/// `amplitudes_edited` marks amplitude changes made outside of
	/// [`DiscreteModel::apply_waveform`].
	fn settle(&mut self, previous: &DiscreteInputs, amplitudes_edited: bool) {
		self.normalize_inputs(previous);
		assert!(
			self.inputs.n_of_harmonics >= 1
				&& self.inputs.n_of_harmonics <= self.config.max_harmonics,
			"the number of harmonics must be between 1 and {}, got {}",
			self.config.max_harmonics,
			self.inputs.n_of_harmonics
		);
		let x_zoom_changed = self.x_zoom.set_level(self.inputs.x_zoom_level);

		let revision = self.series.revision();
		let n_changed = self.inputs.n_of_harmonics != previous.n_of_harmonics;
		if self.inputs.waveform != previous.waveform
			|| self.inputs.series_type != previous.series_type
			|| n_changed
		{
			self.apply_waveform();
		}
		let amplitudes_changed = amplitudes_edited || self.series.revision() != revision;

		// Amplitudes and the x zoom are not part of the inputs
		let forced = x_zoom_changed || amplitudes_changed || n_changed;
		let inputs = &self.inputs;
		let time_changed = inputs.t != previous.t && inputs.domain == Domain::SpaceAndTime;
		let harmonics_dirty = forced
			|| time_changed
			|| inputs.domain != previous.domain
			|| inputs.series_type != previous.series_type;
		let sum_dirty = harmonics_dirty
			|| inputs.waveform != previous.waveform
			|| inputs.infinite_harmonics_visible != previous.infinite_harmonics_visible
			|| inputs.sum_auto_scale != previous.sum_auto_scale;

		if harmonics_dirty {
			self.update_harmonics_chart();
		}
		if sum_dirty {
			self.update_sum_chart();
		}
	}

	fn normalize_inputs(&mut self, previous: &DiscreteInputs) {
		let inputs = &mut self.inputs;
		if !inputs.waveform.supports(inputs.series_type) {
			// Whichever of the two was just selected wins
			if inputs.series_type == previous.series_type {
				log::warn!(
					"{} cannot be built out of {}, switching to {}",
					inputs.waveform,
					inputs.series_type,
					SeriesType::Sin
				);
				inputs.series_type = SeriesType::Sin;
			} else {
				log::warn!(
					"{} cannot be built out of {}, switching to {}",
					inputs.waveform,
					inputs.series_type,
					Waveform::Custom
				);
				inputs.waveform = Waveform::Custom;
			}
		}
		if !inputs.equation_form.is_valid_for(inputs.domain) {
			log::debug!(
				"equation form {} does not apply to {}, hiding the equation",
				inputs.equation_form,
				inputs.domain
			);
			inputs.equation_form = EquationForm::Hidden;
		}
		if inputs.domain != Domain::SpaceAndTime && inputs.domain != previous.domain {
			inputs.t = 0.;
			inputs.is_playing = false;
		}
	}

	/// Batch the number of relevant harmonics and the preset amplitudes into a single
	/// recomputation of the series.
	fn apply_waveform(&mut self) {
		let inputs = &self.inputs;
		let amplitudes = inputs.waveform.amplitudes(
			inputs.n_of_harmonics,
			self.series.harmonics().len(),
			inputs.series_type,
		);
		let n_of_harmonics = inputs.n_of_harmonics;
		self.series.with_batch(|series| {
			series.set_n_of_relevant_harmonics(n_of_harmonics);
			if let Some(amplitudes) = amplitudes {
				series.set_amplitudes(&amplitudes);
			}
		});
	}

	fn update_harmonics_chart(&mut self) {
		self.harmonics_chart.update(
			&self.series,
			self.x_zoom.axis_description(),
			self.inputs.domain,
			self.inputs.series_type,
			self.inputs.t,
		);
	}

	fn update_sum_chart(&mut self) {
		self.sum_chart.update(
			&self.series,
			self.x_zoom.axis_description(),
			self.inputs.domain,
			self.inputs.series_type,
			self.inputs.t,
			self.inputs.waveform,
			self.inputs.infinite_harmonics_visible,
			self.inputs.sum_auto_scale,
		);
	}
}

#[cfg(test)]
mod tests {
	use math_utils::range::Range;

	use super::*;

	fn model() -> DiscreteModel {
		DiscreteModel::new(DiscreteConfig::default()).unwrap()
	}

	#[test]
	fn test_initial_state() {
		let model = model();
		assert_eq!(model.series().amplitudes()[0], 1.);
		assert!(model.series().amplitudes()[1..].iter().all(|a| *a == 0.));
		assert_eq!(model.harmonics_chart().data_sets().len(), 1);
		assert_eq!(model.harmonics_chart().revision(), 1);
		assert_eq!(model.sum_chart().revision(), 1);
		assert_eq!(model.x_axis_description().range(), Range::symmetric(1.));
		assert_eq!(model.sum_chart().y_axis_description().range(), Range::symmetric(1.5));
	}

	#[test]
	fn test_invalid_config() {
		let config = DiscreteConfig {
			fundamental_frequency: -1.,
			..DiscreteConfig::default()
		};
		assert!(matches!(
			DiscreteModel::new(config),
			Err(FourierError::Config(_))
		));
	}

	#[test]
	fn test_many_changes_recompute_once() {
		let mut model = model();
		let revision = model.series().revision();
		model.with_changes(|inputs| {
			inputs.n_of_harmonics = 11;
			inputs.waveform = Waveform::Square;
			inputs.domain = Domain::Time;
			inputs.series_type = SeriesType::Cos;
			inputs.x_zoom_level = 0;
		});
		assert_eq!(model.series().revision(), revision + 1);
		assert_eq!(model.harmonics_chart().revision(), 2);
		assert_eq!(model.sum_chart().revision(), 2);
		assert_eq!(model.harmonics_chart().data_sets().len(), 11);
		assert_eq!(
			model.series().amplitudes(),
			Waveform::Square.amplitudes(11, 11, SeriesType::Cos).unwrap()
		);
		assert_eq!(model.x_axis_description().range(), Range::symmetric(2.));
	}

	#[test]
	fn test_unrelated_changes_do_not_recompute() {
		let mut model = model();
		model.with_changes(|inputs| inputs.t = 10.);
		assert_eq!(model.harmonics_chart().revision(), 1);
		model.with_changes(|inputs| inputs.infinite_harmonics_visible = true);
		assert_eq!(model.harmonics_chart().revision(), 1);
		assert_eq!(model.sum_chart().revision(), 2);
		assert!(!model.sum_chart().infinite_harmonics().is_empty());
	}

	#[test]
	fn test_fewer_harmonics_zero_the_others() {
		let mut model = model();
		model.with_changes(|inputs| {
			inputs.n_of_harmonics = 11;
			inputs.waveform = Waveform::Sawtooth;
		});
		assert!(model.series().amplitudes()[10] != 0.);
		let revision = model.series().revision();
		model.with_changes(|inputs| inputs.n_of_harmonics = 3);
		assert_eq!(model.series().revision(), revision + 1);
		assert!(model.series().amplitudes()[3..].iter().all(|a| *a == 0.));
		assert_eq!(model.harmonics_chart().data_sets().len(), 3);
	}

	#[test]
	fn test_sawtooth_and_cosines() {
		let mut model = model();
		model.with_changes(|inputs| inputs.series_type = SeriesType::Cos);
		model.with_changes(|inputs| inputs.waveform = Waveform::Sawtooth);
		assert_eq!(model.inputs().series_type, SeriesType::Sin);
		assert_eq!(model.inputs().waveform, Waveform::Sawtooth);

		model.with_changes(|inputs| inputs.series_type = SeriesType::Cos);
		assert_eq!(model.inputs().series_type, SeriesType::Cos);
		assert_eq!(model.inputs().waveform, Waveform::Custom);
	}

	#[test]
	fn test_editing_an_amplitude_makes_the_waveform_custom() {
		let mut model = model();
		model.with_changes(|inputs| {
			inputs.n_of_harmonics = 2;
			inputs.waveform = Waveform::Triangle;
		});
		let harmonics_revision = model.harmonics_chart().revision();
		let sum_revision = model.sum_chart().revision();
		model.set_amplitude(2, 0.5);
		assert_eq!(model.inputs().waveform, Waveform::Custom);
		assert_eq!(model.series().amplitudes()[1], 0.5);
		assert_eq!(model.harmonics_chart().revision(), harmonics_revision + 1);
		assert_eq!(model.sum_chart().revision(), sum_revision + 1);
		assert!((model.harmonics_chart().data_sets()[1].peak_amplitude() - 0.5).abs() < 1e-3);
		assert_eq!(
			model.harmonic_equation(2),
			None,
			"the equation is hidden by default"
		);
	}

	#[test]
	#[should_panic(expected = "is not relevant")]
	fn test_irrelevant_amplitude() {
		model().set_amplitude(2, 0.5);
	}

	#[test]
	fn test_step() {
		let mut model = model();
		model.step(1.);
		assert_eq!(model.inputs().t, 0.);

		model.with_changes(|inputs| {
			inputs.domain = Domain::SpaceAndTime;
			inputs.is_playing = true;
		});
		let revision = model.sum_chart().revision();
		model.step(0.5);
		assert!((model.inputs().t - 0.5 * 1000. / 440.).abs() < 1e-12);
		assert_eq!(model.sum_chart().revision(), revision + 1);

		// Half a fundamental period later, the fundamental is inverted
		let first = model.sum_chart().sum().get(250).unwrap().y;
		model.with_changes(|inputs| inputs.t = 0.);
		let initial = model.sum_chart().sum().get(250).unwrap().y;
		assert!((first + initial).abs() < 1e-9);

		model.with_changes(|inputs| inputs.domain = Domain::Space);
		assert!(!model.inputs().is_playing);
	}

	#[test]
	fn test_equations() {
		let mut model = model();
		model.with_changes(|inputs| {
			inputs.domain = Domain::Time;
			inputs.equation_form = EquationForm::Period;
		});
		assert_eq!(model.sum_equation().unwrap(), "F(t) = Σ_{n=1}^{1} A_n sin(2πt/T_n)");
		assert_eq!(model.harmonic_equation(1).unwrap(), "1.00 sin(2πt/T_1)");

		model.with_changes(|inputs| inputs.domain = Domain::Space);
		assert_eq!(model.inputs().equation_form, EquationForm::Hidden);
		assert_eq!(model.sum_equation(), None);
	}

	#[test]
	fn test_reset() {
		let mut model = model();
		model.with_changes(|inputs| {
			inputs.n_of_harmonics = 5;
			inputs.waveform = Waveform::Square;
			inputs.sum_auto_scale = true;
			inputs.x_zoom_level = 5;
		});
		let revision = model.sum_chart().revision();
		model.reset();
		assert_eq!(model.sum_chart().revision(), revision + 1);
		assert_eq!(model.inputs(), &DiscreteInputs::default());
		assert_eq!(model.x_axis_description().range(), Range::symmetric(1.));
		assert_eq!(model.sum_chart().y_axis_description().range(), Range::symmetric(1.5));
		assert_eq!(model.series().amplitudes()[0], 1.);
		assert!(model.series().amplitudes()[1..].iter().all(|a| *a == 0.));

		model.with_changes(|inputs| inputs.n_of_harmonics = 3);
		model.set_amplitude(1, 0.25);
		model.with_changes(|inputs| inputs.n_of_harmonics = 1);
		model.reset();
		assert_eq!(model.series().amplitudes()[0], 1.);
	}

	#[test]
	fn test_auto_scale_and_manual_zoom() {
		let mut model = model();
		model.with_changes(|inputs| {
			inputs.n_of_harmonics = 11;
			inputs.waveform = Waveform::Square;
			inputs.sum_auto_scale = true;
		});
		assert!(!model.zoom_sum_y(AxisZoom::zoom_in));
		let sum_chart = model.sum_chart();
		assert!(sum_chart.y_axis_description().range().max() >= sum_chart.peak_amplitude());

		model.with_changes(|inputs| inputs.sum_auto_scale = false);
		let level = model.sum_chart().y_zoom().level();
		assert!(model.zoom_sum_y(AxisZoom::zoom_out));
		assert_eq!(model.sum_chart().y_zoom().level(), level - 1);
	}
}
