use crate::error::SheetError;
use crate::sheet::{CellAddress, Sheet};

/// A worksheet held as a grid of cell text, row-major.
///
/// Rows may be ragged. Reads past the end of a row return "" and writes
/// grow the grid as needed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySheet {
	rows: Vec<Vec<String>>,
}

impl MemorySheet {
	/// Build a sheet that takes ownership of already collected rows.
	pub fn new(rows: Vec<Vec<String>>) -> Self {
		MemorySheet { rows }
	}

	/// Build a sheet from string slices.
	pub fn from_rows(rows: &[&[&str]]) -> Self {
		MemorySheet {
			rows: rows
				.iter()
				.map(|row| row.iter().map(|cell| cell.to_string()).collect())
				.collect(),
		}
	}

	pub fn rows(&self) -> &[Vec<String>] {
		&self.rows
	}

	/// Convenience lookup by column letters and row, mainly for assertions.
	pub fn get(&self, column: &str, row: u32) -> Option<&str> {
		let addr = CellAddress::new(column, row).ok()?;
		self.rows
			.get(addr.row() as usize - 1)?
			.get(addr.column() as usize - 1)
			.map(String::as_str)
	}
}

impl Sheet for MemorySheet {
	fn row_count(&self) -> Result<u32, SheetError> {
		Ok(self.rows.len() as u32)
	}

	fn cell_value(&self, address: &CellAddress) -> Result<String, SheetError> {
		let value = self
			.rows
			.get(address.row() as usize - 1)
			.and_then(|row| row.get(address.column() as usize - 1))
			.cloned()
			.unwrap_or_default();
		Ok(value)
	}

	fn set_cell_value(&mut self, address: &CellAddress, value: &str) -> Result<(), SheetError> {
		let row_idx = address.row() as usize - 1;
		let col_idx = address.column() as usize - 1;

		if self.rows.len() <= row_idx {
			self.rows.resize_with(row_idx + 1, Vec::new);
		}
		let row = &mut self.rows[row_idx];
		if row.len() <= col_idx {
			row.resize_with(col_idx + 1, String::new);
		}
		row[col_idx] = value.to_string();

		Ok(())
	}
}
