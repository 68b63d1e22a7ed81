#![allow(clippy::cast_possible_truncation)]

use math_utils::range::Range;
use serde::{Deserialize, Serialize};

use crate::error::AxisDescriptionError;

const TOLERANCE: f64 = 1e-9;

/// Range and spacings of a chart axis at one zoom level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisDescription {
	range: Range,
	grid_line_spacing: f64,
	tick_mark_spacing: f64,
	tick_label_spacing: f64,
}

impl AxisDescription {
	/// # Panics
	/// - if any of the spacings is not positive
	#[must_use]
	pub fn new(
		range: Range,
		grid_line_spacing: f64,
		tick_mark_spacing: f64,
		tick_label_spacing: f64,
	) -> Self {
		assert!(
			grid_line_spacing > 0. && tick_mark_spacing > 0. && tick_label_spacing > 0.,
			"axis spacings must be positive"
		);
		Self {
			range,
			grid_line_spacing,
			tick_mark_spacing,
			tick_label_spacing,
		}
	}

	/// Shorthand for an axis description whose range is `[-max, max]`.
	#[must_use]
	pub fn symmetric(
		max: f64,
		grid_line_spacing: f64,
		tick_mark_spacing: f64,
		tick_label_spacing: f64,
	) -> Self {
		Self::new(
			Range::symmetric(max),
			grid_line_spacing,
			tick_mark_spacing,
			tick_label_spacing,
		)
	}

	#[must_use]
	pub const fn range(&self) -> Range {
		self.range
	}

	#[must_use]
	pub const fn grid_line_spacing(&self) -> f64 {
		self.grid_line_spacing
	}

	#[must_use]
	pub const fn tick_mark_spacing(&self) -> f64 {
		self.tick_mark_spacing
	}

	#[must_use]
	pub const fn tick_label_spacing(&self) -> f64 {
		self.tick_label_spacing
	}

	/// Convert a description authored in multiples of some unit (e.g. the fundamental
	/// wavelength) to that unit.
	#[must_use]
	pub fn scaled(&self, factor: f64) -> Self {
		Self::new(
			self.range.scaled(factor),
			self.grid_line_spacing * factor,
			self.tick_mark_spacing * factor,
			self.tick_label_spacing * factor,
		)
	}

	#[must_use]
	pub fn grid_line_positions(&self) -> Vec<f64> {
		multiples_within(self.range, self.grid_line_spacing)
	}

	#[must_use]
	pub fn tick_mark_positions(&self) -> Vec<f64> {
		multiples_within(self.range, self.tick_mark_spacing)
	}

	#[must_use]
	pub fn tick_label_positions(&self) -> Vec<f64> {
		multiples_within(self.range, self.tick_label_spacing)
	}
}

#[allow(clippy::cast_precision_loss)]
fn multiples_within(range: Range, spacing: f64) -> Vec<f64> {
	let first = (range.min() / spacing - TOLERANCE).ceil() as i64;
	let last = (range.max() / spacing + TOLERANCE).floor() as i64;
	(first..=last).map(|i| i as f64 * spacing).collect()
}

/// Validation rules applied to a table when it is built.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TableConstraints {
	/// Every range must be symmetric about zero.
	pub symmetric: bool,
	/// Every range must be at least this long.
	pub min_range_length: Option<f64>,
	/// The most zoomed-out range must reach at least this value.
	pub upper_bound: Option<f64>,
}

/// A validated zoom-level ladder of [`AxisDescription`]s, ordered from the most
/// zoomed-out (widest range) to the most zoomed-in.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisDescriptionTable {
	entries: Vec<AxisDescription>,
}

impl AxisDescriptionTable {
	/// # Errors
	/// [`AxisDescriptionError`] if `entries` violates the ordering invariant or `constraints`
	pub fn new(
		entries: Vec<AxisDescription>,
		constraints: TableConstraints,
	) -> Result<Self, AxisDescriptionError> {
		let Some(first) = entries.first() else {
			return Err(AxisDescriptionError::EmptyTable);
		};

		if let Some(upper_bound) = constraints.upper_bound {
			if first.range.max() < upper_bound {
				return Err(AxisDescriptionError::InsufficientUpperBound {
					max: first.range.max(),
					upper_bound,
				});
			}
		}

		for (index, entry) in entries.iter().enumerate() {
			if constraints.symmetric && !entry.range.is_symmetric(TOLERANCE) {
				return Err(AxisDescriptionError::NotSymmetric {
					index,
					range: entry.range,
				});
			}
			if let Some(min_length) = constraints.min_range_length {
				if entry.range.length() < min_length - TOLERANCE {
					return Err(AxisDescriptionError::RangeTooNarrow {
						index,
						length: entry.range.length(),
						min_length,
					});
				}
			}
			if index > 0 && entry.range.length() >= entries[index - 1].range.length() {
				return Err(AxisDescriptionError::NotDescending { index });
			}
		}

		Ok(Self { entries })
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Always false, tables are validated to be non-empty.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	#[must_use]
	pub fn get(&self, index: usize) -> Option<&AxisDescription> {
		self.entries.get(index)
	}

	#[must_use]
	pub fn entries(&self) -> &[AxisDescription] {
		&self.entries
	}

	#[must_use]
	pub fn index_of(&self, axis_description: &AxisDescription) -> Option<usize> {
		self.entries.iter().position(|e| e == axis_description)
	}

	/// Index of the most zoomed-in entry that can still display `range.max()`.
	///
	/// # Errors
	/// [`AxisDescriptionError::NoBestFit`] if even the most zoomed-out entry is too narrow.
	pub fn best_fit_index(&self, range: Range) -> Result<usize, AxisDescriptionError> {
		let n_of_fitting = self
			.entries
			.iter()
			.take_while(|entry| entry.range.max() >= range.max())
			.count();
		n_of_fitting
			.checked_sub(1)
			.ok_or(AxisDescriptionError::NoBestFit {
				requested: range.max(),
			})
	}

	/// See [`AxisDescriptionTable::best_fit_index`].
	///
	/// # Errors
	/// [`AxisDescriptionError::NoBestFit`]
	pub fn best_fit(&self, range: Range) -> Result<&AxisDescription, AxisDescriptionError> {
		self.best_fit_index(range).map(|index| &self.entries[index])
	}
}
