use std::{borrow::Borrow, cell::Cell};

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatisticsError {
	#[error("common stats are undefined on empty series")]
	EmptySeries,
}

/// Lazily computed statistics of a non-empty series of `f64` values.
///
/// Every statistic is computed at most once and then cached.
#[derive(Debug, Clone)]
pub struct SeriesStatistics<Series: Borrow<[f64]>> {
	series: Series,
	min: Cell<Option<f64>>,
	max: Cell<Option<f64>>,
	peak: Cell<Option<f64>>,
	mean: Cell<Option<f64>>,
}

impl<Series: Borrow<[f64]>> SeriesStatistics<Series> {
	/// # Errors
	/// - on empty series
	pub fn new(series: Series) -> Result<Self, StatisticsError> {
		if series.borrow().is_empty() {
			Err(StatisticsError::EmptySeries)
		} else {
			Ok(Self {
				series,
				min: Cell::default(),
				max: Cell::default(),
				peak: Cell::default(),
				mean: Cell::default(),
			})
		}
	}

	pub fn series(&self) -> &[f64] {
		self.series.borrow()
	}

	fn cached(cell: &Cell<Option<f64>>, compute: impl FnOnce() -> f64) -> f64 {
		if let Some(value) = cell.get() {
			value
		} else {
			let value = compute();
			cell.set(Some(value));
			value
		}
	}

	#[must_use]
	pub fn min(&self) -> f64 {
		Self::cached(&self.min, || {
			self.series().iter().copied().fold(f64::INFINITY, f64::min)
		})
	}

	#[must_use]
	pub fn max(&self) -> f64 {
		Self::cached(&self.max, || {
			self.series()
				.iter()
				.copied()
				.fold(f64::NEG_INFINITY, f64::max)
		})
	}

	/// The largest absolute value in the series.
	#[must_use]
	pub fn peak(&self) -> f64 {
		Self::cached(&self.peak, || self.max().abs().max(self.min().abs()))
	}

	#[must_use]
	#[allow(clippy::cast_precision_loss)]
	pub fn mean(&self) -> f64 {
		Self::cached(&self.mean, || {
			self.series().iter().sum::<f64>() / self.series().len() as f64
		})
	}
}
