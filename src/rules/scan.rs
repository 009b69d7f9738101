use crate::config::types::Config;
use crate::error::{Result, ScanError};
use crate::rules::applier::{EventSink, TracingSink};
use crate::rules::compiler::{CompiledConfig, validate};
use crate::sheet::Sheet;

/// First row holding data. Row 1 is always the header.
pub const FIRST_DATA_ROW: u32 = 2;

/// Counters for a finished scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
	/// Data rows visited (the header is not counted).
	pub rows_scanned: u32,

	/// (row, operation) pairs that matched.
	pub operations_matched: usize,

	/// Cells written by actions.
	pub cells_written: usize,
}

/// Run every operation against every data row.
///
/// Rows are visited from [`FIRST_DATA_ROW`] to the last row; for each row the
/// operations run in declared order, and a matching operation's actions are
/// written before the next operation is tested. A later operation therefore
/// sees the writes of an earlier one. The first error aborts the scan and
/// leaves earlier writes in place.
pub fn scan<S, E>(
	sheet: &mut S,
	rules: &CompiledConfig,
	sink: &mut E,
) -> std::result::Result<ScanSummary, ScanError>
where
	S: Sheet + ?Sized,
	E: EventSink + ?Sized,
{
	let last_row = sheet.row_count().map_err(ScanError::Rows)?;
	let mut summary = ScanSummary::default();

	for row in FIRST_DATA_ROW..=last_row {
		for op in &rules.operations {
			if op.matches(row, &*sheet)? {
				summary.operations_matched += 1;
				summary.cells_written += op.apply(row, &mut *sheet, &mut *sink)?;
			}
		}
		summary.rows_scanned += 1;
	}

	tracing::debug!(
		rows = summary.rows_scanned,
		matched = summary.operations_matched,
		written = summary.cells_written,
		"scan complete"
	);
	Ok(summary)
}

/// Validate `config` and scan `sheet` with it, logging each applied action.
///
/// Nothing is written when validation fails.
pub fn process<S: Sheet + ?Sized>(sheet: &mut S, config: &Config) -> Result<ScanSummary> {
	let rules = validate(config)?;
	let summary = scan(sheet, &rules, &mut TracingSink)?;
	Ok(summary)
}
