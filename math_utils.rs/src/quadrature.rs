/// Integrate sampled data with the trapezoidal rule.
///
/// `samples` are `(x, y)` pairs ordered by increasing `x`; the spacing does not need
/// to be uniform. Less than two samples integrate to zero.
///
/// ```
/// use math_utils::quadrature::trapezoid;
///
/// let area = trapezoid([(0., 0.), (1., 1.), (2., 0.)]);
/// assert!((area - 1.).abs() < f64::EPSILON);
/// ```
pub fn trapezoid(samples: impl IntoIterator<Item = (f64, f64)>) -> f64 {
	let mut samples = samples.into_iter();
	let Some(mut previous) = samples.next() else {
		return 0.;
	};
	let mut area = 0.;
	for current in samples {
		debug_assert!(
			current.0 >= previous.0,
			"samples must be ordered by increasing x ({} < {})",
			current.0,
			previous.0
		);
		area += (current.0 - previous.0) * (current.1 + previous.1) / 2.;
		previous = current;
	}
	area
}

/// Integrate `f` over `[from, to]` with `n_of_intervals` equally spaced trapezoids.
#[allow(clippy::cast_precision_loss)]
pub fn trapezoid_fn(f: impl Fn(f64) -> f64, from: f64, to: f64, n_of_intervals: usize) -> f64 {
	assert!(n_of_intervals > 0, "at least one interval is required");
	let h = (to - from) / n_of_intervals as f64;
	trapezoid((0..=n_of_intervals).map(|i| {
		let x = from + h * i as f64;
		(x, f(x))
	}))
}

#[cfg(test)]
mod tests {
	use std::f64::consts::PI;

	use super::*;

	#[test]
	fn test_empty_and_single() {
		assert!(trapezoid(Vec::<(f64, f64)>::new()).abs() < f64::EPSILON);
		assert!(trapezoid([(1., 5.)]).abs() < f64::EPSILON);
	}

	#[test]
	fn test_sine_half_period() {
		let area = trapezoid_fn(f64::sin, 0., PI, 10_000);
		assert!((area - 2.).abs() < 1e-6);
	}

	#[test]
	fn test_linear_is_exact() {
		let area = trapezoid_fn(|x| 3. * x + 1., -1., 2., 3);
		assert!((area - 7.5).abs() < 1e-12);
	}
}
