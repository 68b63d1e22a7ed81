#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use crate::range::Range;

/// A [`Range`] partitioned into `n_of_points` evenly spaced sampling points.
///
/// The first point is always `range.min()` and the last point is always `range.max()`,
/// so the step between two consecutive points is `range.length() / (n_of_points - 1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiscreteInterval {
	range: Range,
	n_of_points: usize,
}

impl DiscreteInterval {
	/// # Panics
	/// - if `n_of_points < 2`
	/// - if the range is empty
	#[must_use]
	pub fn new(range: Range, n_of_points: usize) -> Self {
		assert!(
			n_of_points >= 2,
			"at least 2 points are required to sample a range, got {n_of_points}"
		);
		assert!(
			range.length() > 0.,
			"cannot sample an empty range {range}"
		);
		Self { range, n_of_points }
	}

	/// Partition `range` so that consecutive points are (approximately) `step` apart.
	///
	/// The number of points is rounded to the closest integer, therefore the effective
	/// [`DiscreteInterval::step`] may slightly differ from the requested one.
	///
	/// ```
	/// use math_utils::{discrete_interval::DiscreteInterval, range::Range};
	///
	/// let interval = DiscreteInterval::with_step(Range::new(0., 1.), 0.25);
	/// assert_eq!(interval.n_of_points(), 5);
	/// ```
	///
	/// # Panics
	/// - if `step` is not positive
	#[must_use]
	pub fn with_step(range: Range, step: f64) -> Self {
		assert!(step > 0., "step must be positive, got {step}");
		let n_of_steps = (range.length() / step).round() as usize;
		Self::new(range, n_of_steps.max(1) + 1)
	}

	#[must_use]
	pub const fn range(&self) -> Range {
		self.range
	}

	#[must_use]
	pub const fn n_of_points(&self) -> usize {
		self.n_of_points
	}

	#[must_use]
	pub fn step(&self) -> f64 {
		self.range.length() / (self.n_of_points - 1) as f64
	}

	#[must_use]
	pub fn point(&self, index: usize) -> f64 {
		debug_assert!(
			index < self.n_of_points,
			"index {} is out of range. n_of_points is {}",
			index,
			self.n_of_points
		);
		// Avoid accumulating rounding errors on the upper bound.
		if index == self.n_of_points - 1 {
			self.range.max()
		} else {
			self.range.min() + self.step() * index as f64
		}
	}

	pub fn points(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
		(0..self.n_of_points).map(|i| self.point(i))
	}

	/// Index of the sampling point closest to `value`. Values outside the range map
	/// to the first or last point.
	#[must_use]
	pub fn nearest_index(&self, value: f64) -> usize {
		let value = self.range.constrain(value);
		(((value - self.range.min()) / self.step()).round() as usize).min(self.n_of_points - 1)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_points_span_the_range() {
		let interval = DiscreteInterval::new(Range::new(-1., 1.), 9);
		let points: Vec<f64> = interval.points().collect();
		assert_eq!(points.len(), 9);
		assert!((points[0] + 1.).abs() < f64::EPSILON);
		assert!((points[4]).abs() < 1e-12);
		assert!((points[8] - 1.).abs() < f64::EPSILON);
		assert!((interval.step() - 0.25).abs() < f64::EPSILON);
	}

	#[test]
	fn test_last_point_is_exact() {
		let interval = DiscreteInterval::new(Range::new(0., 0.1), 2001);
		assert_eq!(interval.point(2000), 0.1);
		assert!(interval.points().zip(interval.points().skip(1)).all(|(a, b)| a < b));
	}

	#[test]
	fn test_with_step() {
		let interval = DiscreteInterval::with_step(Range::new(0., 2.), 0.1);
		assert_eq!(interval.n_of_points(), 21);
		assert!((interval.step() - 0.1).abs() < 1e-12);
	}

	#[test]
	fn test_nearest_index() {
		let interval = DiscreteInterval::new(Range::new(10., 20.), 11);
		assert_eq!(interval.nearest_index(10.), 0);
		assert_eq!(interval.nearest_index(14.4), 4);
		assert_eq!(interval.nearest_index(14.6), 5);
		assert_eq!(interval.nearest_index(20.), 10);
		assert_eq!(interval.nearest_index(200.), 10);
		assert_eq!(interval.nearest_index(-5.), 0);
	}

	#[test]
	#[should_panic(expected = "at least 2 points")]
	fn test_single_point() {
		let _ = DiscreteInterval::new(Range::new(0., 1.), 1);
	}
}
