use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::App;
use super::components::{
	FilterPanel, TableSpec, build_provider_rows, column_widths, render_detail, render_empty_state,
	render_filter_panel, render_logs, render_status, render_table,
};

const FILTER_PANEL_WIDTH: u16 = 34;
const DETAIL_HEIGHT: u16 = 6;
const LOG_HEIGHT: u16 = 10;

impl<'a> App<'a> {
	pub fn draw(&mut self, frame: &mut Frame) {
		let mut constraints = vec![
			Constraint::Length(1),
			Constraint::Min(8),
			Constraint::Length(1),
		];
		if self.show_logs {
			constraints.push(Constraint::Length(LOG_HEIGHT));
		}
		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints(constraints)
			.split(frame.area());

		self.draw_header(frame, layout[0]);

		let body = Layout::default()
			.direction(Direction::Horizontal)
			.constraints([Constraint::Length(FILTER_PANEL_WIDTH), Constraint::Min(20)])
			.split(layout[1]);
		let pending = self.has_pending_changes();
		render_filter_panel(
			frame,
			body[0],
			FilterPanel {
				title: &self.ui.filter_label,
				draft: &self.draft,
				sort: self.draft_sort,
				focus: self.focus,
				pending,
			},
			&mut self.search_input,
			&self.theme,
		);
		self.draw_results(frame, body[1]);

		render_status(frame, layout[2], self.notice.as_ref(), &self.theme);
		if self.show_logs {
			render_logs(frame, layout[3], &self.log_state, &self.theme);
		}
	}

	fn draw_header(&self, frame: &mut Frame, area: Rect) {
		let line = Line::from(vec![
			Span::styled(
				self.ui.title.clone(),
				self.theme.header.add_modifier(Modifier::BOLD),
			),
			Span::styled("  ·  ", self.theme.empty_style()),
			Span::raw(self.ui.results_heading(self.displayed_len())),
		]);
		frame.render_widget(Paragraph::new(line), area);
	}

	fn draw_results(&mut self, frame: &mut Frame, area: Rect) {
		let sections = Layout::default()
			.direction(Direction::Vertical)
			.constraints([Constraint::Min(5), Constraint::Length(DETAIL_HEIGHT)])
			.split(area);

		let rows = build_provider_rows(self.displayed(), &self.applied.search_text, &self.theme);
		let spec = TableSpec {
			headers: super::components::HEADERS.to_vec(),
			widths: column_widths(),
			rows,
			title: self.ui.results_title.clone(),
		};
		let inner = render_table(frame, sections[0], &mut self.table_state, spec, &self.theme);
		if self.displayed.is_empty() {
			render_empty_state(frame, inner, &self.ui.empty_message, &self.theme);
		}

		render_detail(
			frame,
			sections[1],
			self.selected_provider(),
			&self.ui.detail_title,
			&self.theme,
		);
	}
}

#[cfg(test)]
mod tests {
	use provfind_catalog::{FilterCriteria, ProviderCatalog, SortOrder};
	use ratatui::Terminal;
	use ratatui::backend::TestBackend;

	use super::*;

	fn screen(app: &mut App) -> String {
		let mut terminal = Terminal::new(TestBackend::new(120, 30)).expect("terminal");
		terminal.draw(|frame| app.draw(frame)).expect("draw");
		let buffer = terminal.backend().buffer();
		let mut text = String::new();
		for y in 0..buffer.area.height {
			for x in 0..buffer.area.width {
				text.push_str(buffer[(x, y)].symbol());
			}
			text.push('\n');
		}
		text
	}

	#[test]
	fn first_frame_lists_seed_providers() {
		let mut app = App::new(
			ProviderCatalog::seeded(),
			FilterCriteria::default(),
			SortOrder::default(),
		);
		let text = screen(&mut app);
		assert!(text.contains("Find Service Providers"));
		assert!(text.contains("3 providers found"));
		assert!(text.contains("TechFix Pro"));
		assert!(text.contains("Quick Phone Fix"));
		assert!(text.contains("123 Tech Street"));
		assert!(text.contains("Max distance: 10 mi"));
		assert!(text.contains("Min rating: 4.0+"));
	}

	#[test]
	fn empty_result_shows_message() {
		let criteria = FilterCriteria::default().with_search_text("zzz");
		let mut app = App::new(ProviderCatalog::seeded(), criteria, SortOrder::default());
		let text = screen(&mut app);
		assert!(text.contains("0 providers found"));
		assert!(text.contains(&app.ui.empty_message));
		assert!(text.contains("No provider selected"));
	}

	#[test]
	fn configured_values_beyond_the_slider_are_flagged() {
		let criteria = FilterCriteria::default().with_max_distance(120.0);
		let mut app = App::new(ProviderCatalog::seeded(), criteria, SortOrder::default());
		let text = screen(&mut app);
		assert!(text.contains("Max distance: 120 mi (custom)"));
		assert!(text.contains("Min rating: 4.0+"));
		assert!(!text.contains("4.0+ (custom)"));
	}

	#[test]
	fn log_console_appears_when_enabled() {
		let mut app = App::new(
			ProviderCatalog::seeded(),
			FilterCriteria::default(),
			SortOrder::default(),
		);
		app.set_show_logs(true);
		assert!(screen(&mut app).contains("Log"));
	}
}
