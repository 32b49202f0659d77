//! Log capture for the in-UI console.
//!
//! Records go through the `log` facade into `tui-logger`'s buffer so that
//! nothing is written to the terminal while the finder owns it.

use std::sync::OnceLock;

use log::LevelFilter;

static INITIALIZED: OnceLock<bool> = OnceLock::new();

/// Install the logger once; later calls only adjust the level.
///
/// `tui-logger` drains its buffer into the widget history on its own thread.
///
/// Returns `false` when another logger was already installed, in which case
/// records go to that logger instead of the console.
pub fn initialize(level: LevelFilter) -> bool {
	let installed = *INITIALIZED.get_or_init(|| tui_logger::init_logger(LevelFilter::Trace).is_ok());
	tui_logger::set_default_level(level);
	log::set_max_level(level);
	installed
}

/// Parse a level name as accepted by `--log-level` and the config file.
pub fn parse_level(value: &str) -> Option<LevelFilter> {
	value.trim().parse().ok()
}

/// Level names accepted by [`parse_level`].
pub const LEVEL_NAMES: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];
