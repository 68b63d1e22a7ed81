//! Plain-text equations of a harmonic and of the Fourier series.
//!
//! The same formatter produces the general form (`A_n sin(2πx/λ_n)`) and the
//! specific form (`0.50 sin(2πx/λ_3)`), depending on whether order and amplitude are
//! given as [`Term::Symbolic`] or [`Term::Value`].

use derive_more::derive::Display;
use serde::{Deserialize, Serialize};

use crate::{Domain, SeriesType};

/// Which quantities describe each harmonic in the displayed equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquationForm {
	#[default]
	#[display("hidden")]
	Hidden,
	/// `λ_n`
	#[display("wavelength")]
	Wavelength,
	/// `k_n`
	#[display("wave number")]
	WaveNumber,
	/// `f_n`
	#[display("frequency")]
	Frequency,
	/// `T_n`
	#[display("period")]
	Period,
	/// `ω_n`
	#[display("angular frequency")]
	AngularFrequency,
	/// The order `n` together with the fundamental `L` and/or `T`.
	#[display("mode")]
	Mode,
}

impl EquationForm {
	#[must_use]
	pub fn is_valid_for(&self, domain: Domain) -> bool {
		domain.equation_forms().contains(self)
	}
}

/// A quantity shown either by its symbol or by its value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Term<T> {
	Symbolic,
	Value(T),
}

fn subscript(order: Term<usize>) -> String {
	match order {
		Term::Symbolic => "n".to_owned(),
		Term::Value(order) => order.to_string(),
	}
}

fn coefficient(amplitude: Term<f64>, order: Term<usize>) -> String {
	match amplitude {
		Term::Symbolic => format!("A_{}", subscript(order)),
		Term::Value(amplitude) => format!("{amplitude:.2}"),
	}
}

/// The argument of the trigonometric function, `None` if `form` is hidden or does
/// not apply to `domain`.
fn argument(form: EquationForm, domain: Domain, order: Term<usize>) -> Option<String> {
	if form == EquationForm::Hidden || !form.is_valid_for(domain) {
		return None;
	}
	let n = subscript(order);
	let argument = match (domain, form) {
		(Domain::Space, EquationForm::Wavelength) => format!("2πx/λ_{n}"),
		(Domain::Space, EquationForm::WaveNumber) => format!("k_{n}x"),
		(Domain::Space, EquationForm::Mode) => format!("2π{n}x/L"),
		(Domain::Time, EquationForm::Frequency) => format!("2πf_{n}t"),
		(Domain::Time, EquationForm::Period) => format!("2πt/T_{n}"),
		(Domain::Time, EquationForm::AngularFrequency) => format!("ω_{n}t"),
		(Domain::Time, EquationForm::Mode) => format!("2π{n}t/T"),
		(Domain::SpaceAndTime, EquationForm::Wavelength) => format!("2π(x/λ_{n} − t/T_{n})"),
		(Domain::SpaceAndTime, EquationForm::WaveNumber) => format!("k_{n}x − ω_{n}t"),
		(Domain::SpaceAndTime, EquationForm::Mode) => format!("2π{n}(x/L − t/T)"),
		_ => return None,
	};
	Some(argument)
}

/// Equation of a single harmonic, e.g. `A_n sin(2πx/λ_n)` or `0.50 cos(k_3x)`.
/// `None` if `form` is hidden or does not apply to `domain`.
#[must_use]
pub fn harmonic_equation(
	form: EquationForm,
	domain: Domain,
	series_type: SeriesType,
	order: Term<usize>,
	amplitude: Term<f64>,
) -> Option<String> {
	let argument = argument(form, domain, order)?;
	Some(format!(
		"{} {series_type}({argument})",
		coefficient(amplitude, order)
	))
}

/// Equation of the whole series, e.g. `F(x) = Σ_{n=1}^{11} A_n sin(2πx/λ_n)`.
#[must_use]
pub fn sum_equation(
	form: EquationForm,
	domain: Domain,
	series_type: SeriesType,
	n_of_harmonics: usize,
) -> Option<String> {
	let term = harmonic_equation(form, domain, series_type, Term::Symbolic, Term::Symbolic)?;
	let variables = match domain {
		Domain::Space => "x",
		Domain::Time => "t",
		Domain::SpaceAndTime => "x,t",
	};
	Some(format!("F({variables}) = Σ_{{n=1}}^{{{n_of_harmonics}}} {term}"))
}
