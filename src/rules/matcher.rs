use crate::error::{RulePath, ScanError};
use crate::rules::compiler::CompiledOperation;
use crate::sheet::{CellAddress, Sheet};

impl CompiledOperation {
	/// Check whether every filter matches its cell on `row`.
	///
	/// Filters are tested left to right and the first miss stops the check,
	/// so later cells are never read. A pattern matches when it is found
	/// anywhere in the cell text. An operation without filters matches every row.
	pub fn matches<S: Sheet + ?Sized>(&self, row: u32, sheet: &S) -> Result<bool, ScanError> {
		for (filter_idx, filter) in self.filters.iter().enumerate() {
			let cell_error = |source| ScanError::Cell {
				row,
				path: RulePath::filter(self.index, filter_idx),
				source,
			};

			let addr = CellAddress::new(&filter.column, row).map_err(cell_error)?;
			let value = sheet.cell_value(&addr).map_err(cell_error)?;

			if !filter.regex.is_match(&value) {
				tracing::trace!(row, op = %self.name, cell = %addr, "filter missed");
				return Ok(false);
			}
		}

		Ok(true)
	}
}
