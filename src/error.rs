use std::fmt;
use std::path::PathBuf;

/// Library-level structured errors for rowrule.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum RowruleError {
	#[error("Failed to read config file: {path}")]
	ConfigReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse config file: {path}")]
	ConfigParseError {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("Failed to parse config file: {path}")]
	ConfigYamlError {
		path: PathBuf,
		#[source]
		source: serde_yaml::Error,
	},

	#[error("Failed to read workbook: {path}")]
	WorkbookReadError {
		path: PathBuf,
		#[source]
		source: umya_spreadsheet::XlsxError,
	},

	#[error("Failed to write workbook: {path}")]
	WorkbookWriteError {
		path: PathBuf,
		#[source]
		source: umya_spreadsheet::XlsxError,
	},

	#[error("Invalid configuration")]
	Validation(#[from] ValidationError),

	#[error("Processing aborted")]
	Scan(#[from] ScanError),
}

/// Result type alias using RowruleError.
pub type Result<T> = std::result::Result<T, RowruleError>;

/// Position of a filter or action inside the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RulePath {
	/// Index of the operation in declaration order.
	pub operation: usize,

	/// The filter or action within that operation.
	pub item: RuleItem,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleItem {
	Filter(usize),
	Action(usize),
}

impl RulePath {
	pub fn filter(operation: usize, index: usize) -> Self {
		RulePath {
			operation,
			item: RuleItem::Filter(index),
		}
	}

	pub fn action(operation: usize, index: usize) -> Self {
		RulePath {
			operation,
			item: RuleItem::Action(index),
		}
	}
}

impl fmt::Display for RulePath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.item {
			RuleItem::Filter(i) => write!(f, "operations[{}].filters[{}]", self.operation, i),
			RuleItem::Action(i) => write!(f, "operations[{}].actions[{}]", self.operation, i),
		}
	}
}

/// Raised while validating a configuration, before any row is touched.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
	#[error("{path}.column is empty")]
	EmptyColumn { path: RulePath },

	#[error("{path}.value is not a valid pattern: {pattern}")]
	InvalidPattern {
		path: RulePath,
		pattern: String,
		#[source]
		source: regex::Error,
	},
}

impl ValidationError {
	/// Position of the offending filter or action.
	pub fn path(&self) -> RulePath {
		match self {
			ValidationError::EmptyColumn { path }
			| ValidationError::InvalidPattern { path, .. } => *path,
		}
	}
}

/// Failures reported by a sheet accessor.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SheetError {
	#[error("Sheet not found: {name}")]
	SheetNotFound { name: String },

	#[error("Invalid cell address: {address}")]
	InvalidAddress { address: String },
}

/// Raised while scanning rows. Always fatal to the run.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
	#[error("Failed to enumerate rows")]
	Rows(#[source] SheetError),

	#[error("Row {row}, {path}")]
	Cell {
		row: u32,
		path: RulePath,
		#[source]
		source: SheetError,
	},
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_rule_path_display() {
		assert_eq!(RulePath::filter(0, 2).to_string(), "operations[0].filters[2]");
		assert_eq!(RulePath::action(3, 1).to_string(), "operations[3].actions[1]");
	}

	#[test]
	fn test_empty_column_message() {
		let err = ValidationError::EmptyColumn {
			path: RulePath::action(1, 0),
		};
		assert_eq!(err.to_string(), "operations[1].actions[0].column is empty");
		assert_eq!(err.path(), RulePath::action(1, 0));
	}

	#[test]
	fn test_scan_error_names_row_and_position() {
		let err = ScanError::Cell {
			row: 7,
			path: RulePath::filter(0, 1),
			source: SheetError::InvalidAddress {
				address: "1A7".to_string(),
			},
		};
		assert_eq!(err.to_string(), "Row 7, operations[0].filters[1]");
	}
}
