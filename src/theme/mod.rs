//! Colour themes for the finder.

mod builtins;

use ratatui::style::{Color, Style};

pub use builtins::{LIGHT, SLATE, SOLARIZED};

/// Styles used across the finder widgets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
	/// Table headers and panel borders.
	pub header: Style,
	/// The selected result row.
	pub row_highlight: Style,
	/// Prompt text and the focused control.
	pub prompt: Style,
	/// Muted text such as hints and empty states.
	pub empty: Style,
	/// Search matches inside result cells.
	pub highlight: Style,
}

impl Theme {
	#[must_use]
	pub fn empty_style(&self) -> Style {
		self.empty
	}

	#[must_use]
	pub fn highlight_style(&self) -> Style {
		self.highlight
	}

	#[must_use]
	pub fn border_style(&self) -> Style {
		Style::new().fg(self.header.fg.unwrap_or(Color::Reset))
	}

	/// Style for a filter control, depending on whether it has focus.
	#[must_use]
	pub fn control_style(&self, focused: bool) -> Style {
		if focused { self.prompt } else { Style::new() }
	}
}

impl Default for Theme {
	fn default() -> Self {
		SLATE
	}
}

/// Names of the bundled themes, in display order.
#[must_use]
pub fn names() -> Vec<&'static str> {
	builtins::BUILT_IN.iter().map(|(name, _)| *name).collect()
}

/// Look up a bundled theme by name, ignoring case and surrounding whitespace.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	let normalized = name.trim().to_ascii_lowercase();
	builtins::BUILT_IN
		.iter()
		.find(|(candidate, _)| *candidate == normalized)
		.map(|(_, theme)| *theme)
}
