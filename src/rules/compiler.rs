use crate::config::types::{Action, Config, Operation};
use crate::error::{RulePath, ValidationError};
use regex::Regex;

/// A configuration whose filters have all been compiled.
///
/// Only [`validate`] builds this, so holding one means every column is
/// non-empty and every pattern compiled.
#[derive(Debug)]
pub struct CompiledConfig {
	pub operations: Vec<CompiledOperation>,
}

/// An operation ready for matching.
#[derive(Debug)]
pub struct CompiledOperation {
	/// Position in the configuration, for diagnostics.
	pub index: usize,

	pub name: String,

	pub filters: Vec<CompiledFilter>,

	pub actions: Vec<Action>,
}

/// A filter owning its compiled pattern.
#[derive(Debug)]
pub struct CompiledFilter {
	pub column: String,

	pub regex: Regex,
}

impl CompiledConfig {
	pub fn is_empty(&self) -> bool {
		self.operations.is_empty()
	}

	pub fn len(&self) -> usize {
		self.operations.len()
	}
}

/// Check every filter and action and compile every filter pattern.
///
/// Operations are checked in declared order and, within one operation, all
/// filters before all actions. The first problem found is returned.
pub fn validate(config: &Config) -> Result<CompiledConfig, ValidationError> {
	let operations = config
		.operations
		.iter()
		.enumerate()
		.map(|(idx, op)| compile_operation(idx, op))
		.collect::<Result<Vec<_>, _>>()?;

	tracing::debug!(operations = operations.len(), "validated config");
	Ok(CompiledConfig { operations })
}

fn compile_operation(op_idx: usize, op: &Operation) -> Result<CompiledOperation, ValidationError> {
	let mut filters = Vec::with_capacity(op.filters.len());
	for (filter_idx, filter) in op.filters.iter().enumerate() {
		let path = RulePath::filter(op_idx, filter_idx);
		if filter.column.is_empty() {
			return Err(ValidationError::EmptyColumn { path });
		}

		filters.push(CompiledFilter {
			column: filter.column.clone(),
			regex: compile_regex(&filter.value, path)?,
		});
	}

	for (action_idx, action) in op.actions.iter().enumerate() {
		if action.column.is_empty() {
			return Err(ValidationError::EmptyColumn {
				path: RulePath::action(op_idx, action_idx),
			});
		}
	}

	Ok(CompiledOperation {
		index: op_idx,
		name: op.name.clone(),
		filters,
		actions: op.actions.clone(),
	})
}

/// Compile a regex pattern string.
fn compile_regex(pattern: &str, path: RulePath) -> Result<Regex, ValidationError> {
	Regex::new(pattern).map_err(|source| ValidationError::InvalidPattern {
		path,
		pattern: pattern.to_string(),
		source,
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::types::Filter;

	fn op(name: &str, filters: Vec<Filter>, actions: Vec<Action>) -> Operation {
		Operation {
			name: name.to_string(),
			filters,
			actions,
		}
	}

	#[test]
	fn test_compile_valid_config() {
		let config = Config {
			operations: vec![
				op(
					"first",
					vec![Filter::new("A", "^x"), Filter::new("C", r"\d+")],
					vec![Action::new("B", "yes")],
				),
				op("second", vec![], vec![Action::new("D", "all")]),
			],
		};

		let compiled = validate(&config).unwrap();
		assert_eq!(compiled.len(), 2);

		let first = &compiled.operations[0];
		assert_eq!(first.index, 0);
		assert_eq!(first.name, "first");
		assert_eq!(first.filters.len(), 2);
		assert_eq!(first.filters[1].column, "C");
		assert!(first.filters[1].regex.is_match("abc 42"));

		assert_eq!(compiled.operations[1].index, 1);
		assert!(compiled.operations[1].filters.is_empty());
	}

	#[test]
	fn test_empty_config_is_valid() {
		let compiled = validate(&Config::default()).unwrap();
		assert!(compiled.is_empty());
	}

	#[test]
	fn test_empty_filter_column() {
		let config = Config {
			operations: vec![
				op("ok", vec![Filter::new("A", "x")], vec![]),
				op("bad", vec![Filter::new("A", "x"), Filter::new("", "y")], vec![]),
			],
		};

		match validate(&config).unwrap_err() {
			ValidationError::EmptyColumn { path } => assert_eq!(path, RulePath::filter(1, 1)),
			other => panic!("Expected EmptyColumn, got {other:?}"),
		}
	}

	#[test]
	fn test_empty_action_column() {
		let config = Config {
			operations: vec![op("bad", vec![], vec![Action::new("B", "v"), Action::new("", "v")])],
		};

		let err = validate(&config).unwrap_err();
		assert_eq!(err.path(), RulePath::action(0, 1));
		assert_eq!(err.to_string(), "operations[0].actions[1].column is empty");
	}

	#[test]
	fn test_compile_invalid_regex() {
		let config = Config {
			operations: vec![op("bad", vec![Filter::new("A", "[invalid")], vec![])],
		};

		match validate(&config).unwrap_err() {
			ValidationError::InvalidPattern { path, pattern, .. } => {
				assert_eq!(path, RulePath::filter(0, 0));
				assert_eq!(pattern, "[invalid");
			}
			other => panic!("Expected InvalidPattern, got {other:?}"),
		}
	}

	#[test]
	fn test_filters_checked_before_actions() {
		// Both the action column and the filter pattern are bad; the filter is reported
		let config = Config {
			operations: vec![op("bad", vec![Filter::new("A", "(")], vec![Action::new("", "v")])],
		};

		assert!(matches!(
			validate(&config).unwrap_err(),
			ValidationError::InvalidPattern { .. }
		));
	}

	#[test]
	fn test_first_error_in_declared_order() {
		let config = Config {
			operations: vec![
				op("first", vec![], vec![Action::new("", "v")]),
				op("second", vec![Filter::new("A", "[")], vec![]),
			],
		};

		let err = validate(&config).unwrap_err();
		assert!(matches!(err, ValidationError::EmptyColumn { .. }));
		assert_eq!(err.path(), RulePath::action(0, 0));
	}

	#[test]
	fn test_empty_column_checked_before_pattern() {
		let config = Config {
			operations: vec![op("bad", vec![Filter::new("", "[")], vec![])],
		};

		assert!(matches!(
			validate(&config).unwrap_err(),
			ValidationError::EmptyColumn { .. }
		));
	}
}
