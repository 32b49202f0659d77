use provfind_catalog::{
	DISTANCE_RANGE, FilterCriteria, Provider, ProviderCatalog, RATING_RANGE, SortOrder,
	filter_indices, sort_indices,
};
use ratatui::widgets::TableState;
use tui_logger::TuiWidgetState;

use super::config::UiConfig;
use super::controls::{CategorySelector, Focus};
use super::input::SearchInput;
use super::notice::Notice;
use super::outcome::SearchOutcome;
use crate::theme::Theme;

/// State of the finder page.
///
/// Controls edit the *draft* criteria. The displayed list only changes when
/// [`App::apply_filters`] copies the draft into the applied criteria and
/// recomputes the result.
pub struct App<'a> {
	catalog: ProviderCatalog,
	categories: CategorySelector,
	pub(crate) draft: FilterCriteria,
	pub(crate) draft_sort: SortOrder,
	pub(crate) applied: FilterCriteria,
	pub(crate) applied_sort: SortOrder,
	pub(crate) displayed: Vec<usize>,
	pub search_input: SearchInput<'a>,
	pub table_state: TableState,
	pub(crate) focus: Focus,
	pub(crate) ui: UiConfig,
	pub theme: Theme,
	pub(crate) notice: Option<Notice>,
	pub(crate) show_logs: bool,
	pub(crate) log_state: TuiWidgetState,
}

impl<'a> App<'a> {
	/// Build the page and apply `criteria` once so the first frame already
	/// shows a result list.
	pub fn new(catalog: ProviderCatalog, criteria: FilterCriteria, sort: SortOrder) -> Self {
		let categories = CategorySelector::new(catalog.categories(), &criteria.category);
		let ui = UiConfig::default();
		let mut search_input = SearchInput::new(criteria.search_text.clone());
		search_input.set_placeholder(ui.search_placeholder.clone());

		let mut app = Self {
			catalog,
			categories,
			draft: criteria.clone(),
			draft_sort: sort,
			applied: criteria,
			applied_sort: sort,
			displayed: Vec::new(),
			search_input,
			table_state: TableState::default(),
			focus: Focus::default(),
			ui,
			theme: Theme::default(),
			notice: None,
			show_logs: false,
			log_state: TuiWidgetState::new(),
		};
		app.recompute();
		app
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.theme = theme;
	}

	pub fn set_ui_config(&mut self, ui: UiConfig) {
		self.search_input.set_placeholder(ui.search_placeholder.clone());
		self.ui = ui;
	}

	pub fn set_show_logs(&mut self, show: bool) {
		self.show_logs = show;
	}

	#[must_use]
	pub fn catalog(&self) -> &ProviderCatalog {
		&self.catalog
	}

	/// Criteria currently shown in the controls.
	#[must_use]
	pub fn draft(&self) -> &FilterCriteria {
		&self.draft
	}

	/// Criteria the displayed list was computed from.
	#[must_use]
	pub fn applied(&self) -> &FilterCriteria {
		&self.applied
	}

	/// Providers currently displayed, in display order.
	pub fn displayed(&self) -> impl Iterator<Item = &Provider> + '_ {
		self.displayed
			.iter()
			.filter_map(|&index| self.catalog.get(index))
	}

	pub(crate) fn displayed_len(&self) -> usize {
		self.displayed.len()
	}

	pub(crate) fn selected_provider(&self) -> Option<&Provider> {
		let row = self.table_state.selected()?;
		let index = *self.displayed.get(row)?;
		self.catalog.get(index)
	}

	/// Run the filter with the draft values and replace the displayed list.
	pub fn apply_filters(&mut self) {
		self.applied = self.draft.clone();
		self.applied_sort = self.draft_sort;
		self.recompute();

		let count = self.displayed.len();
		log::info!(
			"applied filters: search={:?} category={:?} max_distance={} min_rating={} sort={} -> {} of {}",
			self.applied.search_text,
			self.applied.category,
			self.applied.max_distance,
			self.applied.min_rating,
			self.applied_sort,
			count,
			self.catalog.len()
		);
		self.notice = Some(if count == 0 {
			Notice::warning("No providers match these filters")
		} else {
			Notice::success(self.ui.results_heading(count))
		});
	}

	/// Restore the default criteria into the controls without applying them.
	pub fn reset_filters(&mut self) {
		self.draft = FilterCriteria::default();
		self.draft_sort = SortOrder::default();
		self.search_input.set_text("");
		log::debug!("filters reset to defaults");
		self.notice = Some(Notice::info("Filters reset; press Enter to apply"));
	}

	fn recompute(&mut self) {
		let providers = self.catalog.providers();
		let mut displayed = filter_indices(providers, &self.applied);
		sort_indices(providers, &mut displayed, self.applied_sort);
		self.displayed = displayed;
		self.table_state
			.select(if self.displayed.is_empty() { None } else { Some(0) });
	}

	pub(crate) fn sync_search_text(&mut self) {
		self.draft.search_text = self.search_input.text().to_string();
	}

	pub(crate) fn cycle_category(&mut self, forward: bool) {
		self.draft.category = if forward {
			self.categories.next(&self.draft.category)
		} else {
			self.categories.previous(&self.draft.category)
		};
	}

	pub(crate) fn step_distance(&mut self, up: bool) {
		self.draft.max_distance = if up {
			DISTANCE_RANGE.step_up(self.draft.max_distance)
		} else {
			DISTANCE_RANGE.step_down(self.draft.max_distance)
		};
	}

	pub(crate) fn step_rating(&mut self, up: bool) {
		self.draft.min_rating = if up {
			RATING_RANGE.step_up(self.draft.min_rating)
		} else {
			RATING_RANGE.step_down(self.draft.min_rating)
		};
	}

	pub(crate) fn cycle_sort(&mut self, forward: bool) {
		self.draft_sort = if forward {
			self.draft_sort.next()
		} else {
			self.draft_sort.previous()
		};
	}

	/// Whether the controls differ from what the list currently shows.
	pub(crate) fn has_pending_changes(&self) -> bool {
		self.draft != self.applied || self.draft_sort != self.applied_sort
	}

	pub(crate) fn outcome(&self, accepted: bool) -> SearchOutcome {
		SearchOutcome {
			accepted,
			criteria: self.applied.clone(),
			sort: self.applied_sort,
			selection: if accepted {
				self.selected_provider().cloned()
			} else {
				None
			},
		}
	}
}
