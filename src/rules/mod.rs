//! Rule validation and row processing for rowrule.
//!
//! This module handles:
//! - Validating a configuration and compiling its filter patterns
//! - Matching operations against rows
//! - Writing action values and reporting each write
//! - Driving the row-by-row scan

pub mod applier;
pub mod compiler;
pub mod matcher;
pub mod scan;

pub use applier::{ActionEvent, EventSink, TracingSink};
pub use compiler::{CompiledConfig, CompiledFilter, CompiledOperation, validate};
pub use scan::{FIRST_DATA_ROW, ScanSummary, process, scan};
