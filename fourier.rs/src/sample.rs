use delegate::delegate;
use derive_more::derive::From;
use math_utils::{discrete_interval::DiscreteInterval, stats::SeriesStatistics};

#[derive(Debug, Clone, Copy, PartialEq, Default, From)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

impl Point {
	#[must_use]
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}
}

/// An ordered sequence of `(x, y)` samples, ready to be plotted.
///
/// Sequences produced by this crate are strictly increasing in `x`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SampleSequence {
	points: Vec<Point>,
}

impl SampleSequence {
	delegate! {
		to self.points {
			#[must_use]
			pub fn len(&self) -> usize;
			#[must_use]
			pub fn is_empty(&self) -> bool;
			#[must_use]
			pub fn first(&self) -> Option<&Point>;
			#[must_use]
			pub fn last(&self) -> Option<&Point>;
			#[must_use]
			pub fn get(&self, index: usize) -> Option<&Point>;
			pub fn iter(&self) -> std::slice::Iter<'_, Point>;
		}
	}

	/// Evaluate `f` at every point of `interval`.
	#[must_use]
	pub fn sample(interval: &DiscreteInterval, f: impl Fn(f64) -> f64) -> Self {
		interval.points().map(|x| Point::new(x, f(x))).collect()
	}

	#[must_use]
	pub fn points(&self) -> &[Point] {
		&self.points
	}

	pub fn xs(&self) -> impl Iterator<Item = f64> + '_ {
		self.points.iter().map(|p| p.x)
	}

	pub fn ys(&self) -> impl Iterator<Item = f64> + '_ {
		self.points.iter().map(|p| p.y)
	}

	/// The largest `|y|` in the sequence, 0 for an empty sequence.
	#[must_use]
	pub fn peak_amplitude(&self) -> f64 {
		SeriesStatistics::new(self.ys().collect::<Vec<_>>())
			.map(|stats| stats.peak())
			.unwrap_or_default()
	}

	#[must_use]
	pub fn is_strictly_increasing(&self) -> bool {
		self.points.windows(2).all(|w| w[0].x < w[1].x)
	}

	/// Whether both sequences have the same number of points, at the same `x` coordinates.
	#[must_use]
	pub fn is_aligned_with(&self, other: &Self) -> bool {
		self.len() == other.len() && self.xs().zip(other.xs()).all(|(a, b)| a == b)
	}

	/// Sum the `y` values of index-aligned sequences.
	///
	/// The result has the `x` coordinates of the inputs. An empty input produces
	/// an empty sequence.
	///
	/// # Panics
	/// - if the sequences do not share the same point count. Identical `x` coordinates
	///   are checked in debug builds only.
	#[must_use]
	pub fn pointwise_sum(sequences: &[SampleSequence]) -> Self {
		let Some((first, others)) = sequences.split_first() else {
			return Self::default();
		};
		let mut points = first.points.clone();
		for sequence in others {
			assert_eq!(
				sequence.len(),
				points.len(),
				"cannot sum sequences with a different number of points"
			);
			debug_assert!(
				sequence.is_aligned_with(first),
				"cannot sum sequences sampled at different x coordinates"
			);
			for (acc, p) in points.iter_mut().zip(sequence.iter()) {
				acc.y += p.y;
			}
		}
		Self { points }
	}
}

impl FromIterator<Point> for SampleSequence {
	fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
		Self {
			points: iter.into_iter().collect(),
		}
	}
}

impl<'a> IntoIterator for &'a SampleSequence {
	type Item = &'a Point;
	type IntoIter = std::slice::Iter<'a, Point>;

	fn into_iter(self) -> Self::IntoIter {
		self.points.iter()
	}
}

impl From<Vec<Point>> for SampleSequence {
	fn from(points: Vec<Point>) -> Self {
		Self { points }
	}
}
