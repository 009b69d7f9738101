use crate::error::{Result, RowruleError, SheetError};
use crate::sheet::{CellAddress, Sheet};
use std::path::Path;
use umya_spreadsheet::{Cell, Spreadsheet, Worksheet};

/// An `.xlsx` workbook loaded fully into memory.
///
/// Changes made through [`WorksheetSheet`] stay in memory until [`Workbook::save`].
pub struct Workbook {
	book: Spreadsheet,
}

impl Workbook {
	/// Read a workbook from disk.
	pub fn open(path: &Path) -> Result<Self> {
		let book = umya_spreadsheet::reader::xlsx::read(path).map_err(|source| {
			RowruleError::WorkbookReadError {
				path: path.to_path_buf(),
				source,
			}
		})?;
		tracing::debug!(
			path = %path.display(),
			sheets = book.get_sheet_collection().len(),
			"opened workbook"
		);

		Ok(Workbook { book })
	}

	/// Wrap an already built spreadsheet.
	pub fn from_spreadsheet(book: Spreadsheet) -> Self {
		Workbook { book }
	}

	/// Name of the worksheet at a zero-based index.
	pub fn sheet_name(&self, index: usize) -> Option<&str> {
		self.book
			.get_sheet_collection()
			.get(index)
			.map(|sheet| sheet.get_name())
	}

	/// Borrow a worksheet by name for reading and writing cells.
	pub fn sheet(&mut self, name: &str) -> std::result::Result<WorksheetSheet<'_>, SheetError> {
		let worksheet = self
			.book
			.get_sheet_by_name_mut(name)
			.ok_or_else(|| SheetError::SheetNotFound {
				name: name.to_string(),
			})?;

		Ok(WorksheetSheet { worksheet })
	}

	/// Write the workbook to disk.
	pub fn save(&self, path: &Path) -> Result<()> {
		umya_spreadsheet::writer::xlsx::write(&self.book, path).map_err(|source| {
			RowruleError::WorkbookWriteError {
				path: path.to_path_buf(),
				source,
			}
		})?;
		tracing::debug!(path = %path.display(), "saved workbook");

		Ok(())
	}
}

/// [`Sheet`] accessor over one worksheet of a [`Workbook`].
pub struct WorksheetSheet<'a> {
	worksheet: &'a mut Worksheet,
}

impl Sheet for WorksheetSheet<'_> {
	fn row_count(&self) -> std::result::Result<u32, SheetError> {
		Ok(self.worksheet.get_highest_row())
	}

	fn cell_value(&self, address: &CellAddress) -> std::result::Result<String, SheetError> {
		let value = self
			.worksheet
			.get_cell((address.column(), address.row()))
			.map(display_text)
			.unwrap_or_default();
		Ok(value)
	}

	fn set_cell_value(
		&mut self,
		address: &CellAddress,
		value: &str,
	) -> std::result::Result<(), SheetError> {
		self.worksheet
			.get_cell_mut((address.column(), address.row()))
			.set_value_string(value);
		Ok(())
	}
}

/// Text of a cell as Excel shows it.
///
/// String cells are returned as stored; number formats only apply to
/// numeric and date cells.
fn display_text(cell: &Cell) -> String {
	match cell.get_data_type() {
		"s" | "str" | "inlineStr" => cell.get_value().to_string(),
		_ => cell.get_formatted_value(),
	}
}
