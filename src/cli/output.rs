use anyhow::Result;
use provfind::SearchOutcome;
use provfind_catalog::Provider;
use serde_json::json;

use super::OutputFormat;

/// Print the outcome of an interactive session in the chosen format.
pub(crate) fn print_outcome(format: OutputFormat, outcome: &SearchOutcome) -> Result<()> {
	match format {
		OutputFormat::Plain => println!("{}", format_outcome_plain(outcome)),
		OutputFormat::Json => println!("{}", format_outcome_json(outcome)?),
	}
	Ok(())
}

/// Print a non-interactive listing in the chosen format.
pub(crate) fn print_listing(format: OutputFormat, providers: &[&Provider]) -> Result<()> {
	match format {
		OutputFormat::Plain => {
			for provider in providers {
				println!("{}", format_listing_line(provider));
			}
		}
		OutputFormat::Json => println!("{}", serde_json::to_string_pretty(providers)?),
	}
	Ok(())
}

fn format_outcome_plain(outcome: &SearchOutcome) -> String {
	if !outcome.accepted {
		return "Search cancelled".to_string();
	}
	match &outcome.selection {
		Some(provider) => format!("{}\t{}", provider.id, provider.name),
		None => "No selection".to_string(),
	}
}

/// Format the search outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &SearchOutcome) -> Result<String> {
	let payload = json!({
		"accepted": outcome.accepted,
		"criteria": outcome.criteria,
		"sort": outcome.sort,
		"selection": outcome.selection,
	});
	Ok(serde_json::to_string_pretty(&payload)?)
}

fn format_listing_line(provider: &Provider) -> String {
	format!(
		"{}\t{}\t{}\t{:.1}\t{} mi\t{}",
		provider.id,
		provider.name,
		provider.category,
		provider.rating,
		provider.distance,
		provider.price_range
	)
}
