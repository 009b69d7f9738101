use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use rowrule_cli::config::{INIT_FILE_NAME, generate_init_template, parse_config_file};
use rowrule_cli::rules::{TracingSink, scan, validate};
use rowrule_cli::sheet::Workbook;

#[derive(Parser)]
#[command(name = "rowrule")]
#[command(
	author,
	version,
	about = "CLI tool for rewriting spreadsheet rows with declarative regex rules"
)]
#[command(arg_required_else_help = true)]
struct Cli {
	#[command(subcommand)]
	command: Option<Commands>,

	/// Path to input XLSX workbook
	#[arg(long = "in", value_name = "PATH")]
	input: Option<PathBuf>,

	/// Path to output XLSX workbook
	#[arg(long, value_name = "PATH", default_value = "out.xlsx")]
	out: PathBuf,

	/// Path to rules file (.yaml, .yml or .toml)
	#[arg(long = "config", value_name = "PATH")]
	rules: Option<PathBuf>,

	/// Zero-based worksheet number
	#[arg(long, value_name = "N", default_value_t = 0)]
	sheet: usize,

	/// Scan and log matches without writing the output workbook
	#[arg(long)]
	dry_run: bool,

	/// Create a template rowrule.yaml in the current directory
	#[arg(long)]
	init: bool,

	/// Overwrite existing rowrule.yaml when using --init
	#[arg(long, requires = "init")]
	force: bool,

	/// Increase log verbosity (-v debug, -vv trace)
	#[arg(short, long, action = ArgAction::Count, global = true)]
	verbose: u8,

	/// Only log warnings and errors
	#[arg(short, long, global = true, conflicts_with = "verbose")]
	quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
	/// Rules file commands
	Config {
		#[command(subcommand)]
		action: ConfigAction,
	},
}

#[derive(Subcommand)]
enum ConfigAction {
	/// Display the operations of a rules file
	Show {
		/// Path to rules file
		path: PathBuf,
	},
	/// Check a rules file for errors without touching a workbook
	Validate {
		/// Path to rules file
		path: PathBuf,
	},
}

fn main() -> ExitCode {
	match run() {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn run() -> Result<ExitCode> {
	let cli = Cli::parse();

	rowrule_cli::logging::init(cli.verbose, cli.quiet)?;

	// Handle --init
	if cli.init {
		return handle_init(cli.force);
	}

	// Handle subcommands
	if let Some(command) = cli.command {
		return match command {
			Commands::Config { action } => match action {
				ConfigAction::Show { path } => handle_config_show(&path),
				ConfigAction::Validate { path } => handle_config_validate(&path),
			},
		};
	}

	let (Some(input), Some(config)) = (cli.input.as_deref(), cli.rules.as_deref()) else {
		anyhow::bail!("--in and --config are required");
	};

	let out = (!cli.dry_run).then_some(cli.out.as_path());
	handle_process(input, config, cli.sheet, out)
}

fn handle_init(force: bool) -> Result<ExitCode> {
	let config_path = PathBuf::from(INIT_FILE_NAME);

	if config_path.exists() && !force {
		anyhow::bail!("{INIT_FILE_NAME} already exists. Use --force to overwrite.");
	}

	let template = generate_init_template();
	std::fs::write(&config_path, template)
		.with_context(|| format!("Failed to write {}", config_path.display()))?;

	println!("Created {INIT_FILE_NAME}");
	Ok(ExitCode::SUCCESS)
}

fn handle_config_show(path: &Path) -> Result<ExitCode> {
	let config = parse_config_file(path)
		.with_context(|| format!("Failed to load configuration: {}", path.display()))?;

	println!("# Source: {}", path.display());
	println!("# operations: {}", config.operations.len());
	println!();

	for (i, op) in config.operations.iter().enumerate() {
		println!("  Operation {}: {}", i + 1, op.name);
		for filter in &op.filters {
			println!("    when {} =~ /{}/", filter.column, filter.value);
		}
		if op.filters.is_empty() {
			println!("    when (every row)");
		}
		for action in &op.actions {
			println!("    set {} = {:?}", action.column, action.value);
		}
		println!();
	}

	Ok(ExitCode::SUCCESS)
}

fn handle_config_validate(path: &Path) -> Result<ExitCode> {
	let result = parse_config_file(path).and_then(|config| Ok(validate(&config)?));

	match result {
		Ok(rules) => {
			println!(
				"Configuration is valid: {} ({} operations)",
				path.display(),
				rules.len()
			);
			Ok(ExitCode::SUCCESS)
		}
		Err(e) => {
			eprintln!("Configuration error: {:#}", anyhow::Error::from(e));
			Ok(ExitCode::FAILURE)
		}
	}
}

fn handle_process(
	input: &Path,
	config: &Path,
	sheet_index: usize,
	out: Option<&Path>,
) -> Result<ExitCode> {
	let mut workbook = Workbook::open(input)?;

	let sheet_name = workbook
		.sheet_name(sheet_index)
		.map(str::to_string)
		.ok_or_else(|| anyhow::anyhow!("sheet not found: index {sheet_index}"))?;

	let config = parse_config_file(config).context("Failed to load configuration")?;
	let rules = validate(&config).context("Failed to validate configuration")?;

	let summary = {
		let mut sheet = workbook.sheet(&sheet_name)?;
		scan(&mut sheet, &rules, &mut TracingSink)
			.with_context(|| format!("Failed to process sheet: {sheet_name}"))?
	};

	tracing::info!(
		sheet = %sheet_name,
		rows = summary.rows_scanned,
		matched = summary.operations_matched,
		written = summary.cells_written,
		"processed"
	);

	match out {
		Some(out) => {
			workbook.save(out)?;
			tracing::info!(path = %out.display(), "wrote workbook");
		}
		None => tracing::info!("dry run, output not written"),
	}

	Ok(ExitCode::SUCCESS)
}
