use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a provider collection from disk.
#[derive(Debug, Error)]
pub enum CatalogError {
	/// The data file could not be read.
	#[error("failed to read provider data from {path}")]
	Read {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	/// The file extension does not map to a supported format.
	#[error("unsupported provider data format for {path} (expected .json or .toml)")]
	UnsupportedFormat { path: PathBuf },

	/// The content could not be decoded into provider records.
	#[error("failed to parse provider data in {path}: {message}")]
	Parse { path: PathBuf, message: String },

	/// Two records share the same identifier.
	#[error("provider id '{id}' appears more than once")]
	DuplicateId { id: String },

	/// A record carries a value outside its allowed domain.
	#[error("provider '{id}' has an invalid {field}")]
	InvalidField { id: String, field: &'static str },
}

impl CatalogError {
	pub(crate) fn parse(path: impl Into<PathBuf>, message: impl ToString) -> Self {
		Self::Parse {
			path: path.into(),
			message: message.to_string(),
		}
	}
}
