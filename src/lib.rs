//! Terminal finder for local service providers.
//!
//! The filtering model lives in `provfind-catalog`; this crate adds the
//! interactive page, themes and log capture, and re-exports the catalog
//! types so embedders only need one dependency.

pub mod app_dirs;
pub mod logging;
pub mod theme;
pub mod ui;

pub use provfind_catalog::{
	CatalogError, FilterCriteria, Provider, ProviderCatalog, SortOrder, Verification,
};
pub use theme::Theme;
pub use ui::{App, FinderUi, Notice, NoticeKind, SearchOutcome, UiConfig};
