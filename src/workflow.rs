use anyhow::{Context, Result};
use provfind::{FinderUi, SearchOutcome};
use provfind_catalog::{Provider, ProviderCatalog, filter_indices, sort_indices};

use crate::settings::ResolvedConfig;

/// Coordinates loading the catalog and running either the finder or a listing.
pub(crate) struct SearchWorkflow {
	catalog: ProviderCatalog,
	config: ResolvedConfig,
}

impl SearchWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let catalog = match &config.providers {
			Some(path) => ProviderCatalog::load(path)
				.with_context(|| format!("failed to load providers from {}", path.display()))?,
			None => ProviderCatalog::seeded(),
		};
		match catalog.origin() {
			Some(origin) => log::debug!(
				"catalog ready with {} providers from {}",
				catalog.len(),
				origin.display()
			),
			None => log::debug!("catalog ready with {} sample providers", catalog.len()),
		}
		Ok(Self { catalog, config })
	}

	/// Category choices offered by the selector, `All` excluded.
	pub(crate) fn categories(&self) -> Vec<String> {
		self.catalog.categories()
	}

	/// Apply the configured criteria and sort once.
	pub(crate) fn listing(&self) -> Vec<&Provider> {
		let providers = self.catalog.providers();
		let mut indices = filter_indices(providers, &self.config.criteria);
		sort_indices(providers, &mut indices, self.config.sort);
		indices
			.into_iter()
			.filter_map(|index| self.catalog.get(index))
			.collect()
	}

	pub(crate) fn run(self) -> Result<SearchOutcome> {
		let Self { catalog, config } = self;
		FinderUi::new(catalog)
			.with_criteria(config.criteria)
			.with_sort(config.sort)
			.with_ui_config(config.ui)
			.with_theme(config.theme)
			.with_logs_visible(config.show_logs)
			.run()
	}
}
