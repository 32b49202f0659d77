//! Status-line notices.
//!
//! The notice kind is a closed set; its display attributes come from a
//! single table indexed by kind.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
	Info = 0,
	Success = 1,
	Warning = 2,
}

/// How a notice kind is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoticePresentation {
	pub symbol: &'static str,
	pub title: &'static str,
	pub color: Color,
}

const PRESENTATIONS: [NoticePresentation; 3] = [
	NoticePresentation {
		symbol: "ℹ",
		title: "Info",
		color: Color::Cyan,
	},
	NoticePresentation {
		symbol: "✔",
		title: "Done",
		color: Color::Green,
	},
	NoticePresentation {
		symbol: "⚠",
		title: "Heads up",
		color: Color::Yellow,
	},
];

impl NoticeKind {
	#[must_use]
	pub fn presentation(self) -> NoticePresentation {
		PRESENTATIONS[self as usize]
	}
}

/// A transient message shown in the status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
	pub kind: NoticeKind,
	pub message: String,
}

impl Notice {
	pub fn new(kind: NoticeKind, message: impl Into<String>) -> Self {
		Self {
			kind,
			message: message.into(),
		}
	}

	pub fn info(message: impl Into<String>) -> Self {
		Self::new(NoticeKind::Info, message)
	}

	pub fn success(message: impl Into<String>) -> Self {
		Self::new(NoticeKind::Success, message)
	}

	pub fn warning(message: impl Into<String>) -> Self {
		Self::new(NoticeKind::Warning, message)
	}

	/// Render as a single styled line.
	#[must_use]
	pub fn to_line(&self) -> Line<'_> {
		let presentation = self.kind.presentation();
		let accent = Style::new().fg(presentation.color);
		Line::from(vec![
			Span::styled(format!("{} ", presentation.symbol), accent),
			Span::styled(
				format!("{}: ", presentation.title),
				accent.add_modifier(Modifier::BOLD),
			),
			Span::raw(self.message.as_str()),
		])
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn every_kind_has_a_distinct_presentation() {
		let kinds = [NoticeKind::Info, NoticeKind::Success, NoticeKind::Warning];
		for (i, a) in kinds.iter().enumerate() {
			for b in &kinds[i + 1..] {
				assert_ne!(a.presentation(), b.presentation());
			}
		}
	}

	#[test]
	fn line_contains_symbol_title_and_message() {
		let notice = Notice::warning("nothing matched");
		let text: String = notice
			.to_line()
			.spans
			.iter()
			.map(|span| span.content.as_ref())
			.collect();
		assert_eq!(text, "⚠ Heads up: nothing matched");
	}
}
