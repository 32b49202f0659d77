use provfind_catalog::Provider;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use super::rows::{badge_style, rating_label};
use crate::theme::Theme;

/// Render the detail card for the selected provider.
pub(crate) fn render_detail(
	frame: &mut Frame,
	area: Rect,
	provider: Option<&Provider>,
	title: &str,
	theme: &Theme,
) {
	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(theme.border_style())
		.title(title.to_string());

	let lines = match provider {
		Some(provider) => detail_lines(provider, theme),
		None => vec![Line::styled("No provider selected", theme.empty_style())],
	};

	frame.render_widget(
		Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
		area,
	);
}

fn detail_lines(provider: &Provider, theme: &Theme) -> Vec<Line<'static>> {
	let verification = provider.verification();
	let muted = theme.empty_style();
	vec![
		Line::from(vec![
			Span::styled(provider.name.clone(), Style::new().add_modifier(Modifier::BOLD)),
			Span::raw("  "),
			Span::styled(verification.label(), badge_style(verification)),
		]),
		Line::from(vec![
			Span::raw(provider.category.clone()),
			Span::styled(" · ", muted),
			Span::raw(rating_label(provider)),
			Span::styled(" · ", muted),
			Span::raw(format!("{} mi away", provider.distance)),
		]),
		Line::from(vec![
			Span::raw(provider.price_range.clone()),
			Span::styled(" · ", muted),
			Span::raw(format!("Responds {}", provider.response_time)),
			Span::styled(" · ", muted),
			Span::raw(format!("{} jobs completed", provider.completed_jobs)),
		]),
		Line::from(vec![
			Span::raw(provider.location.address.clone()),
			Span::styled(
				format!(" ({:.4}, {:.4})", provider.location.lat, provider.location.lng),
				muted,
			),
		]),
	]
}
