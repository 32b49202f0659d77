mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_listing, print_outcome};
use provfind::{logging, theme};
use workflow::SearchWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in theme::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	if !cli.list && !cli.list_categories {
		logging::initialize(resolved.log_level);
	}

	let workflow = SearchWorkflow::from_config(resolved)?;

	if cli.list_categories {
		for category in workflow.categories() {
			println!("{category}");
		}
		return Ok(());
	}

	if cli.list {
		return print_listing(cli.output, &workflow.listing());
	}

	run_finder(cli.output, workflow)
}

/// Run the interactive finder and print the outcome in the chosen format.
fn run_finder(format: OutputFormat, workflow: SearchWorkflow) -> Result<()> {
	let outcome = workflow.run()?;
	print_outcome(format, &outcome)
}
