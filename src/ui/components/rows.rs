use std::mem;

use provfind_catalog::{Provider, Verification, fold_case};
use ratatui::layout::Constraint;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Cell, Row};
use unicode_truncate::UnicodeTruncateStr;
use unicode_width::UnicodeWidthStr;

use crate::theme::Theme;

pub(crate) const HEADERS: [&str; 6] = ["Provider", "Status", "Rating", "Category", "Distance", "Price"];
const NAME_WIDTH: u16 = 24;
const CATEGORY_WIDTH: u16 = 14;

pub(crate) fn column_widths() -> Vec<Constraint> {
	vec![
		Constraint::Length(NAME_WIDTH),
		Constraint::Length(10),
		Constraint::Length(12),
		Constraint::Length(CATEGORY_WIDTH),
		Constraint::Length(8),
		Constraint::Fill(1),
	]
}

/// Build one table row per provider, highlighting `needle` in names and categories.
pub(crate) fn build_provider_rows<'p>(
	providers: impl Iterator<Item = &'p Provider>,
	needle: &str,
	theme: &Theme,
) -> Vec<Row<'static>> {
	providers
		.map(|provider| {
			Row::new(vec![
				highlight_cell(&provider.name, match_indices(&provider.name, needle), NAME_WIDTH, theme),
				badge_cell(provider.verification()),
				Cell::from(rating_label(provider)),
				highlight_cell(
					&provider.category,
					match_indices(&provider.category, needle),
					CATEGORY_WIDTH,
					theme,
				),
				Cell::from(format!("{} mi", provider.distance)),
				Cell::from(provider.price_range.clone()),
			])
		})
		.collect()
}

pub(crate) fn rating_label(provider: &Provider) -> String {
	format!("★ {:.1} ({})", provider.rating, provider.review_count)
}

pub(crate) fn badge_style(verification: Verification) -> Style {
	match verification {
		Verification::Verified => Style::new().fg(Color::Green).add_modifier(Modifier::BOLD),
		Verification::Unverified => Style::new().fg(Color::DarkGray),
	}
}

fn badge_cell(verification: Verification) -> Cell<'static> {
	Cell::from(Span::styled(verification.label(), badge_style(verification)))
}

/// Character positions in `text` covered by the first case-insensitive
/// occurrence of `needle`, folded the same way the filter folds.
pub(crate) fn match_indices(text: &str, needle: &str) -> Option<Vec<usize>> {
	if needle.is_empty() {
		return None;
	}
	let needle = fold_case(needle);
	let lowered = fold_case(text);

	// Lowering can change byte lengths, so remember which source char
	// produced each lowered byte.
	let mut owners = Vec::with_capacity(lowered.len());
	for (idx, ch) in text.chars().enumerate() {
		let width: usize = ch.to_lowercase().map(char::len_utf8).sum();
		owners.extend(std::iter::repeat_n(idx, width));
	}
	if owners.len() != lowered.len() {
		return None;
	}

	let start = lowered.find(&needle)?;
	let mut indices = owners.get(start..start + needle.len())?.to_vec();
	indices.dedup();
	Some(indices)
}

/// Build a table cell that highlights matching indices within `text`.
pub(crate) fn highlight_cell(
	text: &str,
	indices: Option<Vec<usize>>,
	max_width: u16,
	theme: &Theme,
) -> Cell<'static> {
	let (display_text, indices) = truncate_with_highlight(text, indices, usize::from(max_width));

	let Some(mut sorted_indices) = indices.filter(|indices| !indices.is_empty()) else {
		return Cell::from(display_text);
	};
	sorted_indices.sort_unstable();
	let mut next = sorted_indices.into_iter().peekable();
	let mut buffer = String::new();
	let mut highlighted = false;
	let mut spans = Vec::new();
	let style_for = |highlighted: bool| {
		if highlighted {
			theme.highlight_style()
		} else {
			Style::default()
		}
	};

	for (idx, ch) in display_text.chars().enumerate() {
		let should_highlight = next.peek().copied() == Some(idx);
		if should_highlight {
			next.next();
		}
		if should_highlight != highlighted {
			if !buffer.is_empty() {
				spans.push(Span::styled(mem::take(&mut buffer), style_for(highlighted)));
			}
			highlighted = should_highlight;
		}
		buffer.push(ch);
	}

	if !buffer.is_empty() {
		spans.push(Span::styled(buffer, style_for(highlighted)));
	}

	Cell::from(Text::from(Line::from(spans)))
}

fn truncate_with_highlight(
	text: &str,
	indices: Option<Vec<usize>>,
	max_width: usize,
) -> (String, Option<Vec<usize>>) {
	if max_width == 0 {
		return (String::new(), None);
	}
	if text.width() <= max_width {
		return (text.to_string(), indices);
	}

	let ellipsis = "…";
	let ellipsis_width = ellipsis.width();
	if max_width <= ellipsis_width {
		return (ellipsis.to_string(), None);
	}

	let (slice, _) = text.unicode_truncate(max_width - ellipsis_width);
	let mut truncated = slice.to_string();
	truncated.push_str(ellipsis);
	let limit = slice.chars().count();
	let indices = indices.and_then(|indices| {
		let kept: Vec<usize> = indices.into_iter().filter(|&idx| idx < limit).collect();
		(!kept.is_empty()).then_some(kept)
	});
	(truncated, indices)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn match_indices_are_case_insensitive() {
		assert_eq!(match_indices("TechFix Pro", "fix"), Some(vec![4, 5, 6]));
		assert_eq!(match_indices("TechFix Pro", "PRO"), Some(vec![8, 9, 10]));
		assert_eq!(match_indices("TechFix Pro", "zzz"), None);
		assert_eq!(match_indices("TechFix Pro", ""), None);
	}

	#[test]
	fn match_indices_follow_source_chars_after_lowercasing() {
		// 'İ' lowercases to two chars; later positions must still line up.
		assert_eq!(match_indices("İstanbul Fix", "fix"), Some(vec![9, 10, 11]));
	}

	#[test]
	fn final_sigma_highlights_like_the_filter_matches() {
		let criteria = provfind_catalog::FilterCriteria::unrestricted().with_search_text("οδος");
		let mut provider = provfind_catalog::seed_providers().remove(0);
		provider.name = "ΟΔΟΣ Fix".into();
		assert!(criteria.matches(&provider));
		assert_eq!(match_indices(&provider.name, "οδος"), Some(vec![0, 1, 2, 3]));
	}

	#[test]
	fn truncation_keeps_visible_highlights_only() {
		let (text, indices) =
			truncate_with_highlight("Quick Repair Solutions", Some(vec![0, 1, 20]), 10);
		assert_eq!(text, "Quick Rep…");
		assert_eq!(indices, Some(vec![0, 1]));
	}

	#[test]
	fn short_text_is_untouched() {
		let (text, indices) = truncate_with_highlight("Plumbing", Some(vec![0]), 14);
		assert_eq!(text, "Plumbing");
		assert_eq!(indices, Some(vec![0]));
	}

	#[test]
	fn rating_label_shows_one_decimal_and_reviews() {
		let provider = provfind_catalog::seed_providers().remove(0);
		assert_eq!(rating_label(&provider), "★ 4.9 (127)");
	}
}
