//! Widgets composing the finder screen.

mod detail;
mod filters;
mod rows;
mod status;
mod tables;

pub(crate) use detail::render_detail;
pub(crate) use filters::{FilterPanel, render_filter_panel};
pub(crate) use rows::{HEADERS, build_provider_rows, column_widths};
pub(crate) use status::{render_logs, render_status};
pub(crate) use tables::{TableSpec, render_empty_state, render_table};
