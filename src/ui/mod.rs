//! Interactive finder page.
//!
//! [`FinderUi`] collects the catalog, initial criteria and presentation
//! options; [`App`] holds the page state and drives the terminal session.

mod actions;
mod builder;
mod components;
mod config;
mod controls;
mod input;
mod notice;
mod outcome;
mod render;
mod runtime;
mod state;

pub use builder::FinderUi;
pub use config::UiConfig;
pub use controls::{CategorySelector, Focus};
pub use notice::{Notice, NoticeKind};
pub use outcome::SearchOutcome;
pub use state::App;
