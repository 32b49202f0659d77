use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Ordering applied to the filtered list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
	/// Keep the collection's own order.
	#[default]
	Listing,
	/// Highest rating first.
	TopRated,
	/// Shortest distance first.
	Nearest,
	/// Lowest starting price first.
	Price,
}

impl SortOrder {
	/// Every order in selector sequence.
	pub const ALL: [SortOrder; 4] = [
		SortOrder::Listing,
		SortOrder::TopRated,
		SortOrder::Nearest,
		SortOrder::Price,
	];

	/// Identifier used in config files and on the command line.
	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			SortOrder::Listing => "listing",
			SortOrder::TopRated => "top-rated",
			SortOrder::Nearest => "nearest",
			SortOrder::Price => "price",
		}
	}

	/// Human readable label for the selector.
	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			SortOrder::Listing => "Listing order",
			SortOrder::TopRated => "Top Rated",
			SortOrder::Nearest => "Nearest",
			SortOrder::Price => "Price",
		}
	}

	#[must_use]
	pub fn next(self) -> Self {
		let index = self.position();
		Self::ALL[(index + 1) % Self::ALL.len()]
	}

	#[must_use]
	pub fn previous(self) -> Self {
		let index = self.position();
		Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
	}

	fn position(self) -> usize {
		Self::ALL
			.iter()
			.position(|order| *order == self)
			.unwrap_or_default()
	}
}

impl fmt::Display for SortOrder {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for SortOrder {
	type Err = String;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		let normalized = value.trim().to_ascii_lowercase().replace('_', "-");
		Self::ALL
			.into_iter()
			.find(|order| order.as_str() == normalized)
			.ok_or_else(|| {
				format!(
					"unknown sort order '{value}' (expected one of: listing, top-rated, nearest, price)"
				)
			})
	}
}
