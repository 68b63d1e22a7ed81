use math_utils::range::Range;

use crate::{error::AxisDescriptionError, AxisDescription, AxisDescriptionTable};

/// The zoom state of one chart axis.
///
/// The zoom level (an index into the table) is the only stored state, the selected
/// [`AxisDescription`] is derived from it. Writing either one is therefore a single
/// assignment and can never bounce back and forth between the two.
///
/// Level 0 is the most zoomed-out entry.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisZoom {
	table: AxisDescriptionTable,
	level: usize,
}

impl AxisZoom {
	/// # Panics
	/// - if `level` is not a valid index of `table`
	#[must_use]
	pub fn new(table: AxisDescriptionTable, level: usize) -> Self {
		assert!(
			level < table.len(),
			"zoom level {level} is out of range, the table has {} entries",
			table.len()
		);
		Self { table, level }
	}

	#[must_use]
	pub const fn level(&self) -> usize {
		self.level
	}

	#[must_use]
	pub fn n_of_levels(&self) -> usize {
		self.table.len()
	}

	#[must_use]
	pub const fn table(&self) -> &AxisDescriptionTable {
		&self.table
	}

	#[allow(clippy::missing_panics_doc)] // REASON: every setter keeps level < table.len()
	#[must_use]
	pub fn axis_description(&self) -> &AxisDescription {
		self.table
			.get(self.level)
			.expect("internal error: zoom level should always be a valid table index")
	}

	/// Returns whether the level changed.
	///
	/// # Panics
	/// - if `level` is not a valid index of the table
	pub fn set_level(&mut self, level: usize) -> bool {
		assert!(
			level < self.table.len(),
			"zoom level {level} is out of range, the table has {} entries",
			self.table.len()
		);
		let changed = self.level != level;
		self.level = level;
		changed
	}

	/// Select `axis_description`, which must be one of the table entries.
	///
	/// # Errors
	/// [`AxisDescriptionError::NotInTable`]
	pub fn set_axis_description(
		&mut self,
		axis_description: &AxisDescription,
	) -> Result<bool, AxisDescriptionError> {
		let level = self
			.table
			.index_of(axis_description)
			.ok_or(AxisDescriptionError::NotInTable)?;
		Ok(self.set_level(level))
	}

	#[must_use]
	pub fn can_zoom_in(&self) -> bool {
		self.level + 1 < self.table.len()
	}

	#[must_use]
	pub fn can_zoom_out(&self) -> bool {
		self.level > 0
	}

	/// Returns whether the level changed.
	pub fn zoom_in(&mut self) -> bool {
		if self.can_zoom_in() {
			self.level += 1;
			true
		} else {
			false
		}
	}

	/// Returns whether the level changed.
	pub fn zoom_out(&mut self) -> bool {
		if self.can_zoom_out() {
			self.level -= 1;
			true
		} else {
			false
		}
	}

	/// Select the best fit for `range`. Returns whether the level changed.
	///
	/// # Errors
	/// [`AxisDescriptionError::NoBestFit`]; the level is left untouched.
	pub fn fit(&mut self, range: Range) -> Result<bool, AxisDescriptionError> {
		let level = self.table.best_fit_index(range)?;
		Ok(self.set_level(level))
	}

	/// Like [`AxisZoom::fit`], but falls back to the most zoomed-out level when nothing fits.
	pub fn fit_or_widest(&mut self, range: Range) -> bool {
		match self.fit(range) {
			Ok(changed) => changed,
			Err(err) => {
				log::warn!("{err}, falling back to the widest zoom level");
				self.set_level(0)
			}
		}
	}
}
