use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Cell, HighlightSpacing, Paragraph, Row, Table, TableState};

use crate::theme::Theme;

pub(crate) const HIGHLIGHT_SYMBOL: &str = "▶ ";
pub(crate) const TABLE_COLUMN_SPACING: u16 = 1;
/// Header row + separator height inside the table's viewport.
pub(crate) const TABLE_HEADER_ROWS: u16 = 2;

/// Fully materialized table configuration.
pub(crate) struct TableSpec<'a> {
	/// Column headers.
	pub headers: Vec<&'static str>,
	/// Column width constraints.
	pub widths: Vec<Constraint>,
	/// Rendered table rows.
	pub rows: Vec<Row<'a>>,
	/// Title for the bordered table.
	pub title: String,
}

/// Render a bordered table and return the area rows are drawn into.
pub(crate) fn render_table(
	frame: &mut Frame,
	area: Rect,
	table_state: &mut TableState,
	spec: TableSpec<'_>,
	theme: &Theme,
) -> Rect {
	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(theme.border_style())
		.title(spec.title);

	let inner = block.inner(area);
	frame.render_widget(block, area);

	let header = Row::new(spec.headers.into_iter().map(Cell::from))
		.style(theme.header)
		.height(1)
		.bottom_margin(1);

	let widths = if spec.widths.is_empty() {
		vec![Constraint::Fill(1)]
	} else {
		spec.widths
	};

	let table = Table::new(spec.rows, widths)
		.header(header)
		.column_spacing(TABLE_COLUMN_SPACING)
		.highlight_spacing(HighlightSpacing::WhenSelected)
		.row_highlight_style(theme.row_highlight)
		.highlight_symbol(HIGHLIGHT_SYMBOL);
	frame.render_stateful_widget(table, inner, table_state);

	render_header_separator(frame, inner, theme);
	inner
}

fn render_header_separator(frame: &mut Frame, area: Rect, theme: &Theme) {
	if area.height <= 1 || area.width == 0 {
		return;
	}
	let sep_rect = Rect {
		x: area.x,
		y: area.y + 1,
		width: area.width,
		height: 1,
	};
	let line = "─".repeat(area.width as usize);
	frame.render_widget(Paragraph::new(line).style(theme.border_style()), sep_rect);
}

/// Centre `message` in the row area below the table header.
pub(crate) fn render_empty_state(frame: &mut Frame, table_inner: Rect, message: &str, theme: &Theme) {
	if table_inner.height <= TABLE_HEADER_ROWS {
		return;
	}
	let rows_height = table_inner.height - TABLE_HEADER_ROWS;
	let area = Rect {
		x: table_inner.x,
		y: table_inner.y + TABLE_HEADER_ROWS + rows_height.saturating_sub(1) / 2,
		width: table_inner.width,
		height: 1,
	};
	let paragraph = Paragraph::new(Line::from(message))
		.alignment(Alignment::Center)
		.style(theme.empty_style());
	frame.render_widget(paragraph, area);
}
