//! Built-in zoom ladders.
//!
//! Horizontal ladders are authored in multiples of the fundamental wavelength (or
//! period) and must be [`AxisDescription::scaled`] before being plotted.

use std::f64::consts::PI;

use math_utils::range::Range;

use crate::{
	axis_description::TableConstraints, error::AxisDescriptionError, AxisDescription,
	AxisDescriptionTable,
};

/// Zoom level of the horizontal axis when a chart is created: `[-1, 1]`.
pub const DEFAULT_X_ZOOM_LEVEL: usize = 2;

/// Half a wavelength must always remain visible.
const MIN_X_RANGE_LENGTH: f64 = 0.5;

fn symmetric_table(
	entries: &[(f64, f64, f64, f64)],
	constraints: TableConstraints,
) -> Result<AxisDescriptionTable, AxisDescriptionError> {
	AxisDescriptionTable::new(
		entries
			.iter()
			.map(|&(max, grid, tick, label)| AxisDescription::symmetric(max, grid, tick, label))
			.collect(),
		TableConstraints {
			symmetric: true,
			..constraints
		},
	)
}

/// # Errors
/// [`AxisDescriptionError`] if the ladder is invalid
pub fn x_axis_descriptions() -> Result<AxisDescriptionTable, AxisDescriptionError> {
	symmetric_table(
		&[
			(2., 0.25, 0.25, 0.5),
			(1.5, 0.25, 0.25, 0.5),
			(1., 0.125, 0.125, 0.25),
			(0.75, 0.125, 0.125, 0.25),
			(0.5, 0.0625, 0.125, 0.25),
			(0.25, 0.0625, 0.0625, 0.125),
		],
		TableConstraints {
			min_range_length: Some(MIN_X_RANGE_LENGTH),
			..TableConstraints::default()
		},
	)
}

/// Ladder of the discrete sum chart. `upper_bound` is the largest possible peak of
/// the sum, i.e. `max_harmonics * max_amplitude`.
///
/// # Errors
/// [`AxisDescriptionError`] if the ladder is invalid or cannot display `upper_bound`
pub fn sum_y_axis_descriptions(
	upper_bound: f64,
) -> Result<AxisDescriptionTable, AxisDescriptionError> {
	symmetric_table(
		&[
			(18., 2., 2., 6.),
			(15., 2.5, 2.5, 5.),
			(12., 2., 2., 4.),
			(10., 2., 2., 5.),
			(8., 1., 1., 4.),
			(6., 1., 1., 2.),
			(5., 1., 1., 5.),
			(4., 1., 1., 2.),
			(3., 0.5, 0.5, 1.),
			(2., 0.5, 0.5, 1.),
			(1.5, 0.5, 0.5, 0.5),
			(1., 0.25, 0.25, 0.5),
			(0.5, 0.125, 0.125, 0.25),
		],
		TableConstraints {
			upper_bound: Some(upper_bound),
			..TableConstraints::default()
		},
	)
}

/// The harmonics chart always displays the full amplitude range.
#[must_use]
pub fn harmonics_y_axis_description(amplitude_range: Range) -> AxisDescription {
	let spacing = amplitude_range.max() / 3.;
	AxisDescription::new(amplitude_range, spacing, spacing, spacing)
}

/// Ladder shared by the wave packet components and sum charts.
///
/// # Errors
/// [`AxisDescriptionError`] if the ladder is invalid
pub fn wave_packet_y_axis_descriptions() -> Result<AxisDescriptionTable, AxisDescriptionError> {
	symmetric_table(
		&[
			(2., 0.5, 0.5, 1.),
			(1.5, 0.25, 0.5, 0.5),
			(1., 0.25, 0.25, 0.5),
			(0.5, 0.1, 0.1, 0.5),
			(0.25, 0.05, 0.05, 0.25),
			(0.1, 0.05, 0.05, 0.1),
			(0.05, 0.01, 0.01, 0.05),
			(0.025, 0.005, 0.005, 0.025),
			(0.01, 0.005, 0.005, 0.01),
		],
		TableConstraints {
			// A normalized wave packet peaks at about 1
			upper_bound: Some(1.),
			..TableConstraints::default()
		},
	)
}

/// Ladder of the wave packet amplitudes chart. Amplitudes are never negative, so the
/// ranges start at 0.
///
/// # Errors
/// [`AxisDescriptionError`] if the ladder is invalid
pub fn wave_packet_amplitudes_y_axis_descriptions(
) -> Result<AxisDescriptionTable, AxisDescriptionError> {
	AxisDescriptionTable::new(
		[
			(1., 0.25, 0.25, 0.5),
			(0.5, 0.1, 0.1, 0.5),
			(0.25, 0.05, 0.05, 0.25),
			(0.1, 0.05, 0.05, 0.1),
			(0.05, 0.01, 0.01, 0.05),
			(0.025, 0.005, 0.005, 0.025),
			(0.01, 0.005, 0.005, 0.01),
		]
		.into_iter()
		.map(|(max, grid, tick, label)| {
			AxisDescription::new(Range::new(0., max), grid, tick, label)
		})
		.collect(),
		TableConstraints::default(),
	)
}

/// Horizontal axis of the wave packet amplitudes chart.
#[must_use]
pub fn wave_number_axis_description(wave_number_range: Range) -> AxisDescription {
	AxisDescription::new(wave_number_range, PI, 2. * PI, 4. * PI)
}
