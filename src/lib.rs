//! Rowrule - CLI tool for rewriting spreadsheet rows with declarative regex rules.
//!
//! This library provides the core functionality for rowrule, including:
//! - YAML/TOML rules file parsing
//! - Validation and pattern compilation
//! - Row matching and cell rewriting
//! - Sheet access over in-memory grids and `.xlsx` workbooks
//!
//! # Example
//!
//! ```no_run
//! use rowrule_cli::config::parse_config_file;
//! use rowrule_cli::rules::{TracingSink, scan, validate};
//! use rowrule_cli::sheet::Workbook;
//! use std::path::Path;
//!
//! let config = parse_config_file(Path::new("rowrule.yaml")).unwrap();
//! let rules = validate(&config).unwrap();
//!
//! let mut workbook = Workbook::open(Path::new("in.xlsx")).unwrap();
//! let summary = {
//!     let mut sheet = workbook.sheet("Sheet1").unwrap();
//!     scan(&mut sheet, &rules, &mut TracingSink).unwrap()
//! };
//! println!("wrote {} cells", summary.cells_written);
//! workbook.save(Path::new("out.xlsx")).unwrap();
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod rules;
pub mod sheet;

pub use error::{Result, RowruleError};
