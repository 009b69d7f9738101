use crate::config::types::Config;
use crate::error::{Result, RowruleError};
use std::path::Path;

/// Serialization format of a rules file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
	Yaml,
	Toml,
}

impl ConfigFormat {
	/// Pick the format from the file extension. Anything that is not `.toml` is read as YAML.
	pub fn from_path(path: &Path) -> Self {
		match path.extension().and_then(|ext| ext.to_str()) {
			Some(ext) if ext.eq_ignore_ascii_case("toml") => ConfigFormat::Toml,
			_ => ConfigFormat::Yaml,
		}
	}
}

/// Parse a config file from the given path.
pub fn parse_config_file(path: &Path) -> Result<Config> {
	let content =
		std::fs::read_to_string(path).map_err(|source| RowruleError::ConfigReadError {
			path: path.to_path_buf(),
			source,
		})?;

	let config = parse_config_str(&content, ConfigFormat::from_path(path), path)?;
	tracing::debug!(
		path = %path.display(),
		operations = config.operations.len(),
		"loaded config"
	);
	Ok(config)
}

/// Parse a config from a string (useful for testing).
pub fn parse_config_str(content: &str, format: ConfigFormat, path: &Path) -> Result<Config> {
	match format {
		ConfigFormat::Toml => {
			toml::from_str(content).map_err(|source| RowruleError::ConfigParseError {
				path: path.to_path_buf(),
				source,
			})
		}
		ConfigFormat::Yaml => {
			// serde_yaml rejects an empty document; an empty file means no operations
			if content.trim().is_empty() {
				return Ok(Config::default());
			}
			serde_yaml::from_str(content).map_err(|source| RowruleError::ConfigYamlError {
				path: path.to_path_buf(),
				source,
			})
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::path::PathBuf;

	#[test]
	fn test_format_from_path() {
		assert_eq!(ConfigFormat::from_path(Path::new("rules.toml")), ConfigFormat::Toml);
		assert_eq!(ConfigFormat::from_path(Path::new("rules.TOML")), ConfigFormat::Toml);
		assert_eq!(ConfigFormat::from_path(Path::new("rules.yaml")), ConfigFormat::Yaml);
		assert_eq!(ConfigFormat::from_path(Path::new("rules.yml")), ConfigFormat::Yaml);
		assert_eq!(ConfigFormat::from_path(Path::new("rules")), ConfigFormat::Yaml);
	}

	#[test]
	fn test_parse_empty_config() {
		let path = PathBuf::from("test.yaml");
		let config = parse_config_str("", ConfigFormat::Yaml, &path).unwrap();
		assert!(config.operations.is_empty());

		let path = PathBuf::from("test.toml");
		let config = parse_config_str("", ConfigFormat::Toml, &path).unwrap();
		assert!(config.operations.is_empty());
	}

	#[test]
	fn test_parse_yaml_config() {
		let content = r#"
operations:
  - name: flag paid invoices
    filters:
      - column: A
        value: "^INV-"
      - column: D
        value: paid
    actions:
      - column: E
        value: "done"
  - name: catch all
    actions:
      - column: F
        value: seen
"#;
		let path = PathBuf::from("test.yaml");
		let config = parse_config_str(content, ConfigFormat::Yaml, &path).unwrap();

		assert_eq!(config.operations.len(), 2);

		let op1 = &config.operations[0];
		assert_eq!(op1.name, "flag paid invoices");
		assert_eq!(op1.filters.len(), 2);
		assert_eq!(op1.filters[0].column, "A");
		assert_eq!(op1.filters[0].value, "^INV-");
		assert_eq!(op1.filters[1].column, "D");
		assert_eq!(op1.actions.len(), 1);
		assert_eq!(op1.actions[0].column, "E");
		assert_eq!(op1.actions[0].value, "done");

		let op2 = &config.operations[1];
		assert!(op2.filters.is_empty());
		assert_eq!(op2.actions[0].value, "seen");
	}

	#[test]
	fn test_parse_toml_array_of_tables() {
		let content = r#"
[[operations]]
name = "mark x"

[[operations.filters]]
column = "A"
value = "^x"

[[operations.actions]]
column = "B"
value = "yes"
"#;
		let path = PathBuf::from("test.toml");
		let config = parse_config_str(content, ConfigFormat::Toml, &path).unwrap();

		assert_eq!(config.operations.len(), 1);
		let op = &config.operations[0];
		assert_eq!(op.name, "mark x");
		assert_eq!(op.filters[0].value, "^x");
		assert_eq!(op.actions[0].column, "B");
		assert_eq!(op.actions[0].value, "yes");
	}

	#[test]
	fn test_missing_column_parses_as_empty() {
		// Empty columns are a validation concern, not a parse failure
		let content = r#"
operations:
  - name: broken
    filters:
      - value: "x"
"#;
		let path = PathBuf::from("test.yaml");
		let config = parse_config_str(content, ConfigFormat::Yaml, &path).unwrap();
		assert_eq!(config.operations[0].filters[0].column, "");
	}

	#[test]
	fn test_invalid_yaml() {
		let path = PathBuf::from("bad.yaml");
		let result = parse_config_str("operations: [unclosed", ConfigFormat::Yaml, &path);
		match result.unwrap_err() {
			RowruleError::ConfigYamlError { path, .. } => {
				assert_eq!(path, PathBuf::from("bad.yaml"))
			}
			other => panic!("Expected ConfigYamlError, got {other:?}"),
		}
	}

	#[test]
	fn test_invalid_toml() {
		let path = PathBuf::from("bad.toml");
		let result = parse_config_str("invalid toml [[[", ConfigFormat::Toml, &path);
		assert!(matches!(result, Err(RowruleError::ConfigParseError { .. })));
	}

	#[test]
	fn test_parse_config_file_missing() {
		let result = parse_config_file(Path::new("/nonexistent/rowrule.yaml"));
		assert!(matches!(result, Err(RowruleError::ConfigReadError { .. })));
	}
}
