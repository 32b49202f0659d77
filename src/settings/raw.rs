use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail, ensure};
use provfind::logging::{self, LEVEL_NAMES};
use provfind::{UiConfig, app_dirs, theme};
use provfind_catalog::{FilterCriteria, SortOrder};
use serde::Deserialize;

use crate::cli::CliArgs;

use super::resolved::ResolvedConfig;

const DEFAULT_THEME: &str = "slate";
const DEFAULT_LOG_LEVEL: &str = "info";

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	data: DataSection,
	filters: FiltersSection,
	ui: UiSection,
	log: LogSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct DataSection {
	providers: Option<PathBuf>,
}

/// Initial filter values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct FiltersSection {
	search: Option<String>,
	category: Option<String>,
	max_distance: Option<f64>,
	min_rating: Option<f64>,
	sort: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
	title: Option<String>,
	theme: Option<String>,
	results_title: Option<String>,
	detail_title: Option<String>,
	show_logs: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct LogSection {
	level: Option<String>,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(path) = cli.providers.clone() {
			self.data.providers = Some(path);
		}
		if let Some(search) = cli.search.clone() {
			self.filters.search = Some(search);
		}
		if let Some(category) = cli.category.clone() {
			self.filters.category = Some(category);
		}
		if let Some(miles) = cli.max_distance {
			self.filters.max_distance = Some(miles);
		}
		if let Some(stars) = cli.min_rating {
			self.filters.min_rating = Some(stars);
		}
		if let Some(sort) = cli.sort {
			self.filters.sort = Some(SortOrder::from(sort).as_str().to_string());
		}
		if let Some(title) = cli.title.clone() {
			self.ui.title = Some(title);
		}
		if let Some(theme) = cli.theme.clone() {
			self.ui.theme = Some(theme);
		}
		if let Some(level) = cli.log_level.clone() {
			self.log.level = Some(level);
		}
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self) -> Result<ResolvedConfig> {
		let providers = self.data.providers.map(resolve_data_path).transpose()?;

		let defaults = FilterCriteria::default();
		let max_distance = self.filters.max_distance.unwrap_or(defaults.max_distance);
		ensure!(
			max_distance.is_finite(),
			"max distance must be a finite number of miles"
		);
		let min_rating = self.filters.min_rating.unwrap_or(defaults.min_rating);
		ensure!(min_rating.is_finite(), "min rating must be a finite number");

		let criteria = FilterCriteria {
			search_text: self.filters.search.unwrap_or_default(),
			category: normalize_category(self.filters.category.as_deref().unwrap_or_default()),
			max_distance,
			min_rating,
		};

		let sort = match self.filters.sort {
			Some(name) => name.parse::<SortOrder>().map_err(|err| anyhow!(err))?,
			None => SortOrder::default(),
		};

		let level_name = self.log.level.unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());
		let Some(log_level) = logging::parse_level(&level_name) else {
			bail!(
				"unknown log level '{level_name}' (expected one of: {})",
				LEVEL_NAMES.join(", ")
			);
		};

		let theme_name = self.ui.theme.unwrap_or_else(|| DEFAULT_THEME.to_string());
		let Some(theme) = theme::by_name(&theme_name) else {
			bail!(
				"unknown theme '{theme_name}' (available: {})",
				theme::names().join(", ")
			);
		};

		let mut ui = UiConfig::default();
		if let Some(title) = self.ui.title {
			ui.title = title;
		}
		if let Some(title) = self.ui.results_title {
			ui.results_title = title;
		}
		if let Some(title) = self.ui.detail_title {
			ui.detail_title = title;
		}

		Ok(ResolvedConfig {
			providers,
			criteria,
			sort,
			theme_name: theme_name.trim().to_ascii_lowercase(),
			theme,
			ui,
			show_logs: self.ui.show_logs.unwrap_or(false),
			log_level,
		})
	}
}

/// `all` (any case) and blank values select every category.
fn normalize_category(value: &str) -> String {
	let trimmed = value.trim();
	if trimmed.eq_ignore_ascii_case("all") {
		String::new()
	} else {
		trimmed.to_string()
	}
}

/// Anchor a relative providers path to the working directory, falling back to
/// the data directory when only a copy there exists.
fn resolve_data_path(path: PathBuf) -> Result<PathBuf> {
	if path.is_absolute() {
		return Ok(path);
	}
	let from_cwd = env::current_dir()
		.context("failed to resolve current directory for providers file")?
		.join(&path);
	if from_cwd.exists() {
		return Ok(from_cwd);
	}
	Ok(data_dir_candidate(&path).unwrap_or(from_cwd))
}

fn data_dir_candidate(path: &Path) -> Option<PathBuf> {
	let candidate = app_dirs::get_data_dir().ok()?.join(path);
	candidate.exists().then_some(candidate)
}
