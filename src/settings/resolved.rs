use std::path::PathBuf;

use log::LevelFilter;
use provfind::UiConfig;
use provfind::theme::Theme;
use provfind_catalog::{FilterCriteria, SortOrder};

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	/// Provider file to load; `None` uses the built-in sample data.
	pub providers: Option<PathBuf>,
	pub criteria: FilterCriteria,
	pub sort: SortOrder,
	pub theme_name: String,
	pub theme: Theme,
	pub ui: UiConfig,
	pub show_logs: bool,
	pub log_level: LevelFilter,
}

impl ResolvedConfig {
	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		for line in self.summary_lines() {
			println!("{line}");
		}
	}

	fn summary_lines(&self) -> Vec<String> {
		let providers = self
			.providers
			.as_ref()
			.map_or_else(|| "(built-in sample data)".to_string(), |path| path.display().to_string());
		let category = if self.criteria.category.is_empty() {
			"(all)"
		} else {
			self.criteria.category.as_str()
		};
		vec![
			"Effective configuration:".to_string(),
			format!("  Providers: {providers}"),
			format!("  Search: {:?}", self.criteria.search_text),
			format!("  Category: {category}"),
			format!("  Max distance: {} mi", self.criteria.max_distance),
			format!("  Min rating: {}", self.criteria.min_rating),
			format!("  Sort: {}", self.sort),
			format!("  Title: {}", self.ui.title),
			format!("  Theme: {}", self.theme_name),
			format!("  Log console: {}", bool_to_word(self.show_logs)),
			format!("  Log level: {}", self.log_level),
		]
	}
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "shown" } else { "hidden" }
}
