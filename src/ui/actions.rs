use anyhow::Result;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::App;
use super::controls::Focus;
use super::notice::Notice;
use super::outcome::SearchOutcome;

const PAGE_STEP: usize = 10;

impl<'a> App<'a> {
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Result<Option<SearchOutcome>> {
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		match key.code {
			KeyCode::Esc => return Ok(Some(self.outcome(false))),
			KeyCode::Char('c') if ctrl => return Ok(Some(self.outcome(false))),
			KeyCode::Enter => {
				if self.focus.is_filter_control() {
					self.apply_filters();
				} else if self.selected_provider().is_some() {
					return Ok(Some(self.outcome(true)));
				} else {
					self.notice = Some(Notice::warning("Nothing selected"));
				}
			}
			KeyCode::Tab => self.focus = self.focus.next(),
			KeyCode::BackTab => self.focus = self.focus.previous(),
			KeyCode::F(2) => self.show_logs = !self.show_logs,
			KeyCode::Char('r') if ctrl => self.reset_filters(),
			KeyCode::Up => self.move_selection_up(1),
			KeyCode::Down => self.move_selection_down(1),
			KeyCode::PageUp => self.move_selection_up(PAGE_STEP),
			KeyCode::PageDown => self.move_selection_down(PAGE_STEP),
			_ => self.handle_focused_key(key),
		}
		Ok(None)
	}

	fn handle_focused_key(&mut self, key: KeyEvent) {
		let forward = match key.code {
			KeyCode::Right => Some(true),
			KeyCode::Left => Some(false),
			_ => None,
		};

		match (self.focus, forward) {
			(Focus::Search, _) => {
				if self.search_input.input(key) {
					self.sync_search_text();
				}
			}
			(Focus::Category, Some(forward)) => self.cycle_category(forward),
			(Focus::Distance, Some(up)) => self.step_distance(up),
			(Focus::Rating, Some(up)) => self.step_rating(up),
			(Focus::Sort, Some(forward)) => self.cycle_sort(forward),
			(Focus::Results, _) => self.handle_results_key(key),
			(_, None) => {
				if key.code == KeyCode::Char('/') {
					self.focus = Focus::Search;
				}
			}
		}
	}

	fn handle_results_key(&mut self, key: KeyEvent) {
		match key.code {
			KeyCode::Home => {
				if self.displayed_len() > 0 {
					self.table_state.select(Some(0));
				}
			}
			KeyCode::End => {
				if let Some(last) = self.displayed_len().checked_sub(1) {
					self.table_state.select(Some(last));
				}
			}
			KeyCode::Char('m') => self.contact("Opening chat with"),
			KeyCode::Char('c') => self.contact("Calling"),
			KeyCode::Char('/') => self.focus = Focus::Search,
			_ => {}
		}
	}

	/// Simulated contact action; only a notice is shown.
	fn contact(&mut self, verb: &str) {
		let Some(name) = self.selected_provider().map(|provider| provider.name.clone()) else {
			self.notice = Some(Notice::warning("Select a provider first"));
			return;
		};
		log::info!("{verb} {name}");
		self.notice = Some(Notice::info(format!("{verb} {name}")));
	}

	fn move_selection_up(&mut self, step: usize) {
		if let Some(selected) = self.table_state.selected() {
			self.table_state.select(Some(selected.saturating_sub(step)));
		}
	}

	fn move_selection_down(&mut self, step: usize) {
		if let Some(selected) = self.table_state.selected() {
			let last = self.displayed_len().saturating_sub(1);
			self.table_state.select(Some((selected + step).min(last)));
		}
	}
}
