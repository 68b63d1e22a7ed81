use std::fmt::Display;

/// A closed interval `[min, max]` of floating point values.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
	min: f64,
	max: f64,
}

impl Range {
	/// # Panics
	/// - if `min > max` or any of the bounds is NaN.
	#[must_use]
	pub fn new(min: f64, max: f64) -> Self {
		assert!(min <= max, "invalid range: min {min} is greater than max {max}");
		Self { min, max }
	}

	/// Creates the range `[-half_length, half_length]`.
	///
	/// ```
	/// use math_utils::range::Range;
	///
	/// let range = Range::symmetric(1.5);
	/// assert_eq!(range.min(), -1.5);
	/// assert_eq!(range.length(), 3.);
	/// ```
	#[must_use]
	pub fn symmetric(half_length: f64) -> Self {
		Self::new(-half_length, half_length)
	}

	#[must_use]
	pub const fn min(&self) -> f64 {
		self.min
	}

	#[must_use]
	pub const fn max(&self) -> f64 {
		self.max
	}

	#[must_use]
	pub fn length(&self) -> f64 {
		self.max - self.min
	}

	#[must_use]
	pub fn center(&self) -> f64 {
		(self.min + self.max) / 2.
	}

	#[must_use]
	pub fn contains(&self, value: f64) -> bool {
		value >= self.min && value <= self.max
	}

	/// Clamp `value` so that it falls inside the range.
	#[must_use]
	pub fn constrain(&self, value: f64) -> f64 {
		value.clamp(self.min, self.max)
	}

	/// Whether `min == -max`, within `tolerance`.
	#[must_use]
	pub fn is_symmetric(&self, tolerance: f64) -> bool {
		(self.min + self.max).abs() <= tolerance
	}

	/// Multiply both bounds by `factor`, which must be positive.
	#[must_use]
	pub fn scaled(&self, factor: f64) -> Self {
		debug_assert!(factor > 0., "scale factor must be positive, got {factor}");
		Self::new(self.min * factor, self.max * factor)
	}

	/// Widen the range by `delta` on each side.
	#[must_use]
	pub fn expanded(&self, delta: f64) -> Self {
		Self::new(self.min - delta, self.max + delta)
	}
}

impl Display for Range {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "[{}, {}]", self.min, self.max)
	}
}
