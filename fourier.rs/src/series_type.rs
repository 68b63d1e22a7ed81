use derive_more::derive::Display;
use serde::{Deserialize, Serialize};

/// The trigonometric basis of a Fourier series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesType {
	#[default]
	#[display("sin")]
	Sin,
	#[display("cos")]
	Cos,
}

impl SeriesType {
	pub const ALL: [SeriesType; 2] = [SeriesType::Sin, SeriesType::Cos];

	#[must_use]
	pub fn apply(&self, angle: f64) -> f64 {
		match self {
			Self::Sin => angle.sin(),
			Self::Cos => angle.cos(),
		}
	}
}
