use provfind_catalog::{DISTANCE_RANGE, FilterCriteria, RATING_RANGE, RangeControl, SortOrder};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::theme::Theme;
use crate::ui::controls::{CategorySelector, Focus};
use crate::ui::input::SearchInput;

const FOCUS_MARKER: &str = "▶ ";
const INDENT: &str = "  ";
/// Row of the search box inside the panel.
const SEARCH_ROW: u16 = 1;

/// Snapshot of the draft controls for one frame.
pub(crate) struct FilterPanel<'s> {
	pub title: &'s str,
	pub draft: &'s FilterCriteria,
	pub sort: SortOrder,
	pub focus: Focus,
	pub pending: bool,
}

pub(crate) fn render_filter_panel(
	frame: &mut Frame,
	area: Rect,
	panel: FilterPanel<'_>,
	search: &mut SearchInput<'_>,
	theme: &Theme,
) {
	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(theme.border_style())
		.title(panel.title.to_string());
	let inner = block.inner(area);
	frame.render_widget(block, area);

	let slider_width = usize::from(inner.width.saturating_sub(10)).max(4);
	let draft = panel.draft;
	let lines = vec![
		label(&panel, Focus::Search, "Search", theme),
		Line::raw(""),
		Line::raw(""),
		label(&panel, Focus::Category, "Category", theme),
		value(
			format!("‹ {} ›", CategorySelector::label(&draft.category)),
			panel.focus == Focus::Category,
			theme,
		),
		Line::raw(""),
		label(
			&panel,
			Focus::Distance,
			&format!(
				"Max distance: {} mi{}",
				format_amount(draft.max_distance),
				bound_marker(DISTANCE_RANGE, draft.max_distance)
			),
			theme,
		),
		value(
			slider_line(draft.max_distance, DISTANCE_RANGE, slider_width),
			panel.focus == Focus::Distance,
			theme,
		),
		Line::raw(""),
		label(
			&panel,
			Focus::Rating,
			&format!(
				"Min rating: {:.1}+{}",
				draft.min_rating,
				bound_marker(RATING_RANGE, draft.min_rating)
			),
			theme,
		),
		value(
			slider_line(draft.min_rating, RATING_RANGE, slider_width),
			panel.focus == Focus::Rating,
			theme,
		),
		Line::raw(""),
		label(&panel, Focus::Sort, "Sort", theme),
		value(
			format!("‹ {} ›", panel.sort.label()),
			panel.focus == Focus::Sort,
			theme,
		),
		Line::raw(""),
		apply_line(panel.pending, theme),
	];
	frame.render_widget(Paragraph::new(lines), inner);

	if inner.height > SEARCH_ROW && inner.width > 2 {
		let search_area = Rect {
			x: inner.x + 2,
			y: inner.y + SEARCH_ROW,
			width: inner.width - 2,
			height: 1,
		};
		search.render(frame, search_area, theme, panel.focus == Focus::Search);
	}
}

fn label(panel: &FilterPanel<'_>, control: Focus, text: &str, theme: &Theme) -> Line<'static> {
	let focused = panel.focus == control;
	let marker = if focused { FOCUS_MARKER } else { INDENT };
	let style = theme.control_style(focused).add_modifier(Modifier::BOLD);
	Line::from(vec![Span::styled(marker, style), Span::styled(text.to_string(), style)])
}

fn value(text: String, focused: bool, theme: &Theme) -> Line<'static> {
	let style = if focused { theme.prompt } else { Style::new() };
	Line::from(vec![Span::raw(INDENT), Span::styled(text, style)])
}

fn apply_line(pending: bool, theme: &Theme) -> Line<'static> {
	if pending {
		Line::from(vec![
			Span::raw(INDENT),
			Span::styled("[ Apply filters ]", theme.prompt.add_modifier(Modifier::BOLD)),
			Span::styled(" Enter", theme.empty_style()),
		])
	} else {
		Line::from(vec![
			Span::raw(INDENT),
			Span::styled("Filters applied", theme.empty_style()),
		])
	}
}

/// Configured values may sit outside the slider until the first step.
fn bound_marker(range: RangeControl, value: f64) -> &'static str {
	if range.contains(value) { "" } else { " (custom)" }
}

/// Whole amounts print without decimals, everything else with one.
pub(crate) fn format_amount(value: f64) -> String {
	if value.fract() == 0.0 {
		format!("{value:.0}")
	} else {
		format!("{value:.1}")
	}
}

/// Slider bar framed by its bounds, e.g. `1 ━━──── 50`.
fn slider_line(value: f64, range: RangeControl, width: usize) -> String {
	format!(
		"{} {} {}",
		format_amount(range.min),
		slider(value, range, width),
		format_amount(range.max)
	)
}

fn slider(value: f64, range: RangeControl, width: usize) -> String {
	let span = range.max - range.min;
	let fraction = if span > 0.0 && !value.is_nan() {
		((value - range.min) / span).clamp(0.0, 1.0)
	} else {
		0.0
	};
	let filled = (fraction * width as f64).round() as usize;
	let mut bar = "━".repeat(filled);
	bar.push_str(&"─".repeat(width - filled));
	bar
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn amounts_drop_trailing_zero() {
		assert_eq!(format_amount(10.0), "10");
		assert_eq!(format_amount(2.5), "2.5");
	}

	#[test]
	fn values_outside_the_slider_are_marked() {
		assert_eq!(bound_marker(DISTANCE_RANGE, 10.0), "");
		assert_eq!(bound_marker(DISTANCE_RANGE, 120.0), " (custom)");
		assert_eq!(bound_marker(RATING_RANGE, 0.0), " (custom)");
	}

	#[test]
	fn slider_fills_proportionally() {
		assert_eq!(slider(1.0, DISTANCE_RANGE, 4), "────");
		assert_eq!(slider(50.0, DISTANCE_RANGE, 4), "━━━━");
		assert_eq!(slider(3.0, RATING_RANGE, 4), "━━──");
		assert_eq!(slider(f64::INFINITY, DISTANCE_RANGE, 4), "━━━━");
		assert_eq!(slider_line(5.0, RATING_RANGE, 2), "1 ━━ 5");
	}
}
