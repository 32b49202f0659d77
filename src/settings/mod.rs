//! Configuration loading and resolution.
//!
//! [`load`] merges config files, environment variables and CLI flags and
//! returns the validated [`ResolvedConfig`] the binary runs with.

mod loader;
mod raw;
mod resolved;
mod sources;

pub use loader::load;
pub use resolved::ResolvedConfig;
