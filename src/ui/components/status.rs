use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerWidget, TuiWidgetState};

use crate::theme::Theme;
use crate::ui::notice::Notice;

const KEY_HINTS: [(&str, &str); 7] = [
	("Tab", "next"),
	("←/→", "adjust"),
	("Enter", "apply/choose"),
	("m/c", "message/call"),
	("Ctrl-R", "reset"),
	("F2", "logs"),
	("Esc", "quit"),
];

/// Bottom line: the latest notice, or key hints when there is none.
pub(crate) fn render_status(frame: &mut Frame, area: Rect, notice: Option<&Notice>, theme: &Theme) {
	let line = match notice {
		Some(notice) => notice.to_line(),
		None => {
			let mut spans = Vec::with_capacity(KEY_HINTS.len() * 2);
			for (key, action) in KEY_HINTS {
				spans.push(Span::styled(key, theme.prompt));
				spans.push(Span::styled(format!(" {action}  "), theme.empty_style()));
			}
			Line::from(spans)
		}
	};
	frame.render_widget(Paragraph::new(line), area);
}

pub(crate) fn render_logs(frame: &mut Frame, area: Rect, state: &TuiWidgetState, theme: &Theme) {
	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(theme.border_style())
		.title("Log");
	let widget = TuiLoggerWidget::default()
		.block(block)
		.output_level(Some(TuiLoggerLevelOutput::Abbreviated))
		.output_target(false)
		.state(state);
	frame.render_widget(widget, area);
}
