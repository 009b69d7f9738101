use crate::error::{RulePath, ScanError};
use crate::rules::compiler::CompiledOperation;
use crate::sheet::{CellAddress, Sheet};

/// One cell written by a matched operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionEvent {
	pub row: u32,
	pub operation: String,
	pub cell: String,
	pub value: String,
}

/// Receives an event for every action applied.
pub trait EventSink {
	fn record(&mut self, event: ActionEvent);
}

/// Logs each event at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
	fn record(&mut self, event: ActionEvent) {
		tracing::info!(
			r = event.row,
			op = %event.operation,
			action = %format!("{} -> {}", event.cell, event.value),
			"match"
		);
	}
}

impl EventSink for Vec<ActionEvent> {
	fn record(&mut self, event: ActionEvent) {
		self.push(event);
	}
}

impl CompiledOperation {
	/// Write every action value into its column on `row`, in declared order.
	///
	/// Stops at the first failed write; cells written before it stay written.
	/// Returns the number of cells written.
	pub fn apply<S, E>(&self, row: u32, sheet: &mut S, sink: &mut E) -> Result<usize, ScanError>
	where
		S: Sheet + ?Sized,
		E: EventSink + ?Sized,
	{
		for (action_idx, action) in self.actions.iter().enumerate() {
			let cell_error = |source| ScanError::Cell {
				row,
				path: RulePath::action(self.index, action_idx),
				source,
			};

			let addr = CellAddress::new(&action.column, row).map_err(cell_error)?;
			sheet.set_cell_value(&addr, &action.value).map_err(cell_error)?;

			sink.record(ActionEvent {
				row,
				operation: self.name.clone(),
				cell: addr.to_string(),
				value: action.value.clone(),
			});
		}

		Ok(self.actions.len())
	}
}
