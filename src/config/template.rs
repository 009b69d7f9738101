/// File name written by `rowrule --init`.
pub const INIT_FILE_NAME: &str = "rowrule.yaml";

/// Generate a starter rules file.
pub fn generate_init_template() -> String {
	r#"# rowrule configuration
#
# Every data row (row 1 is the header and is skipped) is tested against each
# operation in order. An operation matches when every filter's regex is found
# somewhere in the text of its column. On a match each action writes its value
# verbatim into its column on that row. Later operations see the writes of
# earlier ones, and the last write to a cell wins.

operations:
  - name: mark overdue invoices
    filters:
      - column: A
        value: "^INV-"
      - column: D
        value: "(?i)overdue"
    actions:
      - column: E
        value: "chase"

  # An operation without filters applies to every data row
  - name: stamp processed
    actions:
      - column: F
        value: "processed"
"#
	.to_string()
}
