use math_utils::range::Range;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum AxisDescriptionError {
	#[error("an axis description table needs at least one entry")]
	EmptyTable,
	#[error("entry {index} is not narrower than the previous one")]
	NotDescending { index: usize },
	#[error("entry {index} has range {range}, which is not symmetric about zero")]
	NotSymmetric { index: usize, range: Range },
	#[error("entry {index} has length {length}, the minimum allowed is {min_length}")]
	RangeTooNarrow {
		index: usize,
		length: f64,
		min_length: f64,
	},
	#[error("the most zoomed-out entry ends at {max}, values up to {upper_bound} must fit")]
	InsufficientUpperBound { max: f64, upper_bound: f64 },
	#[error("no entry can display a range ending at {requested}")]
	NoBestFit { requested: f64 },
	#[error("the axis description is not part of the table")]
	NotInTable,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
	#[error("{name} must be positive, got {value}")]
	NotPositive { name: &'static str, value: f64 },
	#[error("at least one harmonic is required")]
	NoHarmonics,
	#[error("at least 2 points per data set are required, got {0}")]
	TooFewPoints(usize),
	#[error("no component spacing values were provided")]
	NoComponentSpacings,
	#[error("component spacing {0} is negative")]
	NegativeComponentSpacing(f64),
	#[error("default {name} {value} is outside of {range}")]
	DefaultOutOfRange {
		name: &'static str,
		value: f64,
		range: Range,
	},
	#[error("default component spacing {0} is not one of the allowed values")]
	UnknownDefaultComponentSpacing(f64),
	#[error("wave number range must start at 0, got {0}")]
	WaveNumberRangeStart(f64),
	#[error("center range {center_range} is outside of the wave number range {wave_number_range}")]
	CenterRangeOutOfBounds {
		center_range: Range,
		wave_number_range: Range,
	},
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum FourierError {
	#[error("invalid axis description table: {0}")]
	AxisDescription(#[from] AxisDescriptionError),
	#[error("invalid configuration: {0}")]
	Config(#[from] ConfigError),
}
