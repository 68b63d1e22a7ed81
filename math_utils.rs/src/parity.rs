#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parity {
	Even,
	Odd,
}

impl Parity {
	#[must_use]
	pub const fn of(n: usize) -> Self {
		if n & 1 == 0 {
			Self::Even
		} else {
			Self::Odd
		}
	}
}

#[must_use]
pub const fn is_odd(n: usize) -> bool {
	matches!(Parity::of(n), Parity::Odd)
}

#[must_use]
pub const fn is_even(n: usize) -> bool {
	matches!(Parity::of(n), Parity::Even)
}

/// `(-1)^k`
///
/// ```
/// use math_utils::parity::alternating_sign;
///
/// assert_eq!(alternating_sign(0), 1.);
/// assert_eq!(alternating_sign(3), -1.);
/// ```
#[must_use]
pub const fn alternating_sign(k: usize) -> f64 {
	match Parity::of(k) {
		Parity::Even => 1.,
		Parity::Odd => -1.,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_a_bunch() {
		let mut toggle = true;
		for n in 0..100 {
			assert_eq!(is_even(n), toggle);
			assert_eq!(is_odd(n), !toggle);
			toggle ^= true;
		}
	}

	#[test]
	fn test_alternating_sign() {
		let signs: Vec<f64> = (0..6).map(alternating_sign).collect();
		assert_eq!(signs, [1., -1., 1., -1., 1., -1.]);
	}
}
