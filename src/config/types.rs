use serde::Deserialize;

/// Top-level configuration from a rules file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
	/// Operations applied to every data row, in declaration order.
	/// When two operations write the same cell, the later one wins.
	#[serde(default)]
	pub operations: Vec<Operation>,
}

/// A named rule: a conjunction of filters and the actions to run when all match.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Operation {
	/// Label used in logs only. Not required to be unique.
	#[serde(default)]
	pub name: String,

	/// All filters must match for the operation to apply. None means every row.
	#[serde(default)]
	pub filters: Vec<Filter>,

	/// Cells written when the operation matches.
	#[serde(default)]
	pub actions: Vec<Action>,
}

/// A column reference paired with a regex pattern.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Filter {
	/// Column letters, e.g. "A".
	#[serde(default)]
	pub column: String,

	/// Regex matched anywhere in the cell text.
	#[serde(default)]
	pub value: String,
}

/// A column reference paired with a literal value to write.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Action {
	/// Column letters, e.g. "B".
	#[serde(default)]
	pub column: String,

	/// Written verbatim.
	#[serde(default)]
	pub value: String,
}

impl Filter {
	pub fn new(column: impl Into<String>, value: impl Into<String>) -> Self {
		Filter {
			column: column.into(),
			value: value.into(),
		}
	}
}

impl Action {
	pub fn new(column: impl Into<String>, value: impl Into<String>) -> Self {
		Action {
			column: column.into(),
			value: value.into(),
		}
	}
}
