//! Sheet access for rowrule.
//!
//! The rule engine only talks to a [`Sheet`]: it asks how many rows exist,
//! reads cell text and writes literal values. Two accessors are provided:
//! - [`MemorySheet`] over an in-memory row grid
//! - [`WorksheetSheet`] over a worksheet of an `.xlsx` [`Workbook`]

pub mod memory;
pub mod workbook;

pub use memory::MemorySheet;
pub use workbook::{Workbook, WorksheetSheet};

use crate::error::SheetError;
use std::fmt;

/// Highest column number in an xlsx worksheet (`XFD`).
pub const MAX_COLUMN: u32 = 16_384;

/// Highest row number in an xlsx worksheet.
pub const MAX_ROW: u32 = 1_048_576;

/// Cell accessor bound to a single worksheet.
pub trait Sheet {
	/// Number of rows, up to and including the last populated one.
	fn row_count(&self) -> Result<u32, SheetError>;

	/// Text of the cell as displayed. Empty cells read as "".
	fn cell_value(&self, address: &CellAddress) -> Result<String, SheetError>;

	/// Store a literal string in the cell.
	fn set_cell_value(&mut self, address: &CellAddress, value: &str) -> Result<(), SheetError>;
}

/// A validated A1-style cell reference. Column and row are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellAddress {
	column: u32,
	row: u32,
}

impl CellAddress {
	/// Build an address from column letters (case-insensitive) and a row number.
	pub fn new(column: &str, row: u32) -> Result<Self, SheetError> {
		let invalid = || SheetError::InvalidAddress {
			address: format!("{column}{row}"),
		};

		if row == 0 || row > MAX_ROW {
			return Err(invalid());
		}
		let column = column_number(column).ok_or_else(invalid)?;

		Ok(CellAddress { column, row })
	}

	/// 1-based column number (`A` = 1).
	pub fn column(&self) -> u32 {
		self.column
	}

	/// 1-based row number.
	pub fn row(&self) -> u32 {
		self.row
	}
}

impl fmt::Display for CellAddress {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}{}", column_letters(self.column), self.row)
	}
}

/// Convert column letters to a 1-based column number.
fn column_number(letters: &str) -> Option<u32> {
	if letters.is_empty() || letters.len() > 3 {
		return None;
	}

	let mut number: u32 = 0;
	for c in letters.chars() {
		if !c.is_ascii_alphabetic() {
			return None;
		}
		let digit = c.to_ascii_uppercase() as u32 - 'A' as u32 + 1;
		number = number * 26 + digit;
	}

	(number <= MAX_COLUMN).then_some(number)
}

/// Convert a 1-based column number to its letters.
fn column_letters(mut number: u32) -> String {
	let mut letters = Vec::new();
	while number > 0 {
		let rem = (number - 1) % 26;
		letters.push(char::from(b'A' + rem as u8));
		number = (number - 1) / 26;
	}
	letters.iter().rev().collect()
}
