use anyhow::Result;
use provfind_catalog::{FilterCriteria, ProviderCatalog, SortOrder};

use super::App;
use super::config::UiConfig;
use super::outcome::SearchOutcome;
use crate::theme::Theme;

/// Builder for the interactive finder.
///
/// Collects the catalog, starting criteria and presentation options, then
/// runs the terminal UI until the user accepts or cancels.
pub struct FinderUi {
	catalog: ProviderCatalog,
	criteria: FilterCriteria,
	sort: SortOrder,
	ui_config: Option<UiConfig>,
	theme: Option<Theme>,
	show_logs: bool,
}

impl FinderUi {
	pub fn new(catalog: ProviderCatalog) -> Self {
		Self {
			catalog,
			criteria: FilterCriteria::default(),
			sort: SortOrder::default(),
			ui_config: None,
			theme: None,
			show_logs: false,
		}
	}

	pub fn with_criteria(mut self, criteria: FilterCriteria) -> Self {
		self.criteria = criteria;
		self
	}

	pub fn with_sort(mut self, sort: SortOrder) -> Self {
		self.sort = sort;
		self
	}

	pub fn with_ui_config(mut self, config: UiConfig) -> Self {
		self.ui_config = Some(config);
		self
	}

	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = Some(theme);
		self
	}

	pub fn with_logs_visible(mut self, show: bool) -> Self {
		self.show_logs = show;
		self
	}

	/// Build the page state without starting the terminal.
	pub fn into_app<'a>(self) -> App<'a> {
		let mut app = App::new(self.catalog, self.criteria, self.sort);
		if let Some(config) = self.ui_config {
			app.set_ui_config(config);
		}
		if let Some(theme) = self.theme {
			app.set_theme(theme);
		}
		app.set_show_logs(self.show_logs);
		app
	}

	/// Run the finder until the user exits.
	pub fn run(self) -> Result<SearchOutcome> {
		let mut app = self.into_app();
		app.run()
	}
}
