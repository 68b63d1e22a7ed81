use derive_more::derive::Display;
use serde::{Deserialize, Serialize};

use crate::equation::EquationForm;

/// The independent variable of a plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
	#[default]
	#[display("space")]
	Space,
	#[display("time")]
	Time,
	#[display("space & time")]
	SpaceAndTime,
}

impl Domain {
	pub const ALL: [Domain; 3] = [Domain::Space, Domain::Time, Domain::SpaceAndTime];

	/// Whether the horizontal axis is measured in multiples of the fundamental wavelength
	/// (as opposed to the fundamental period).
	#[must_use]
	pub const fn is_spatial(&self) -> bool {
		matches!(self, Self::Space | Self::SpaceAndTime)
	}

	/// Equation forms that make sense for this domain.
	#[must_use]
	pub const fn equation_forms(&self) -> &'static [EquationForm] {
		match self {
			Self::Space => &[
				EquationForm::Hidden,
				EquationForm::Wavelength,
				EquationForm::WaveNumber,
				EquationForm::Mode,
			],
			Self::Time => &[
				EquationForm::Hidden,
				EquationForm::Frequency,
				EquationForm::Period,
				EquationForm::AngularFrequency,
				EquationForm::Mode,
			],
			Self::SpaceAndTime => &[
				EquationForm::Hidden,
				EquationForm::Wavelength,
				EquationForm::WaveNumber,
				EquationForm::Mode,
			],
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_display() {
		assert_eq!(Domain::Space.to_string(), "space");
		assert_eq!(Domain::SpaceAndTime.to_string(), "space & time");
	}

	#[test]
	fn test_every_domain_can_hide_the_equation() {
		for domain in Domain::ALL {
			assert!(domain.equation_forms().contains(&EquationForm::Hidden));
		}
	}
}
