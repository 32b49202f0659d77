use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::Duration;

use anyhow::{Result, anyhow};
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{self, Event, KeyEventKind};

use super::App;
use super::outcome::SearchOutcome;

const POLL_INTERVAL: Duration = Duration::from_millis(50);
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

impl<'a> App<'a> {
	/// Take over the terminal and pump events until the user exits.
	///
	/// The terminal is restored before any error is returned.
	pub fn run(&mut self) -> Result<SearchOutcome> {
		let mut terminal = ratatui::init();
		let result = terminal
			.clear()
			.map_err(Into::into)
			.and_then(|()| self.event_loop(&mut terminal));
		ratatui::restore();
		result
	}

	fn event_loop(&mut self, terminal: &mut DefaultTerminal) -> Result<SearchOutcome> {
		let (event_tx, event_rx) = mpsc::channel();
		let running = Arc::new(AtomicBool::new(true));
		let reader_flag = Arc::clone(&running);

		let reader = thread::spawn(move || -> Result<()> {
			while reader_flag.load(Ordering::Relaxed) {
				if event::poll(POLL_INTERVAL)? {
					let event = event::read()?;
					if event_tx.send(event).is_err() {
						break;
					}
				}
			}
			Ok(())
		});

		let result = self.drive(terminal, &event_rx);

		running.store(false, Ordering::Relaxed);
		drop(event_rx);
		match reader.join() {
			Ok(join_result) => join_result?,
			Err(err) => std::panic::resume_unwind(err),
		}

		result
	}

	fn drive(
		&mut self,
		terminal: &mut DefaultTerminal,
		events: &mpsc::Receiver<Event>,
	) -> Result<SearchOutcome> {
		loop {
			terminal.draw(|frame| self.draw(frame))?;

			loop {
				let event = match events.try_recv() {
					Ok(event) => event,
					Err(mpsc::TryRecvError::Empty) => break,
					Err(mpsc::TryRecvError::Disconnected) => {
						return Err(anyhow!("input event channel disconnected"));
					}
				};
				if let Event::Key(key) = event
					&& key.kind == KeyEventKind::Press
					&& let Some(outcome) = self.handle_key(key)?
				{
					return Ok(outcome);
				}
			}

			thread::sleep(FRAME_INTERVAL);
		}
	}
}
