//! Configuration loading and parsing for rowrule.
//!
//! This module handles:
//! - YAML and TOML rules file parsing
//! - The starter template written by `--init`

pub mod parser;
pub mod template;
pub mod types;

pub use parser::{ConfigFormat, parse_config_file, parse_config_str};
pub use template::{INIT_FILE_NAME, generate_init_template};
pub use types::{Action, Config, Filter, Operation};
