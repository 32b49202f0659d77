use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use tui_textarea::{CursorMove, TextArea};

use crate::theme::Theme;

/// Single-line text box backing the search control.
#[derive(Debug, Clone)]
pub struct SearchInput<'a> {
	textarea: TextArea<'a>,
}

impl<'a> SearchInput<'a> {
	pub fn new(initial: impl Into<String>) -> Self {
		let mut textarea = TextArea::new(vec![initial.into()]);
		textarea.set_cursor_line_style(Style::default());
		textarea.move_cursor(CursorMove::End);
		Self { textarea }
	}

	/// Current contents.
	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or_default()
	}

	/// Replace the contents and move the cursor to the end.
	pub fn set_text(&mut self, text: impl Into<String>) {
		let placeholder = self.textarea.placeholder_text().to_string();
		let mut textarea = TextArea::new(vec![text.into()]);
		textarea.set_cursor_line_style(Style::default());
		textarea.set_placeholder_text(placeholder);
		textarea.move_cursor(CursorMove::End);
		self.textarea = textarea;
	}

	pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
		self.textarea.set_placeholder_text(placeholder.into());
	}

	/// Feed a key to the text box. Returns `true` when the text changed.
	///
	/// Keys that would start a new line are refused.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		let breaks_line = matches!(key.code, KeyCode::Enter)
			|| (ctrl && matches!(key.code, KeyCode::Char('m') | KeyCode::Char('j')));
		if breaks_line {
			return false;
		}
		let before = self.text().to_string();
		self.textarea.input(key);
		self.text() != before
	}

	pub fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme, focused: bool) {
		let cursor = if focused {
			Style::default().add_modifier(Modifier::REVERSED)
		} else {
			Style::default()
		};
		self.textarea.set_cursor_style(cursor);
		self.textarea.set_style(theme.control_style(focused));
		self.textarea.set_placeholder_style(theme.empty_style());
		frame.render_widget(&self.textarea, area);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn key(code: KeyCode) -> KeyEvent {
		KeyEvent::new(code, KeyModifiers::NONE)
	}

	#[test]
	fn typing_updates_text() {
		let mut input = SearchInput::new("");
		assert!(input.input(key(KeyCode::Char('f'))));
		assert!(input.input(key(KeyCode::Char('x'))));
		assert_eq!(input.text(), "fx");
		assert!(input.input(key(KeyCode::Backspace)));
		assert_eq!(input.text(), "f");
	}

	#[test]
	fn enter_never_inserts_a_line() {
		let mut input = SearchInput::new("phone");
		assert!(!input.input(key(KeyCode::Enter)));
		assert!(!input.input(KeyEvent::new(KeyCode::Char('m'), KeyModifiers::CONTROL)));
		assert_eq!(input.text(), "phone");
	}

	#[test]
	fn initial_text_places_cursor_at_end() {
		let mut input = SearchInput::new("fix");
		input.input(key(KeyCode::Char('!')));
		assert_eq!(input.text(), "fix!");
	}

	#[test]
	fn set_text_replaces_contents() {
		let mut input = SearchInput::new("old");
		input.set_text("");
		assert_eq!(input.text(), "");
		input.input(key(KeyCode::Char('a')));
		assert_eq!(input.text(), "a");
	}
}
