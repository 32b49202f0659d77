use serde::{Deserialize, Serialize};

use super::Provider;

/// User-selected constraints applied to a provider collection.
///
/// Every combination of values is valid. Out-of-range thresholds simply
/// exclude everything or nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
	/// Case-insensitive substring matched against name or category. Empty
	/// disables the constraint.
	pub search_text: String,
	/// Exact category name. Empty disables the constraint.
	pub category: String,
	/// Inclusive upper bound on distance in miles.
	pub max_distance: f64,
	/// Inclusive lower bound on rating.
	pub min_rating: f64,
}

impl FilterCriteria {
	pub const DEFAULT_MAX_DISTANCE: f64 = 10.0;
	pub const DEFAULT_MIN_RATING: f64 = 4.0;

	/// Criteria that accept every provider.
	#[must_use]
	pub fn unrestricted() -> Self {
		Self {
			search_text: String::new(),
			category: String::new(),
			max_distance: f64::INFINITY,
			min_rating: f64::NEG_INFINITY,
		}
	}

	#[must_use]
	pub fn with_search_text(mut self, text: impl Into<String>) -> Self {
		self.search_text = text.into();
		self
	}

	#[must_use]
	pub fn with_category(mut self, category: impl Into<String>) -> Self {
		self.category = category.into();
		self
	}

	#[must_use]
	pub fn with_max_distance(mut self, miles: f64) -> Self {
		self.max_distance = miles;
		self
	}

	#[must_use]
	pub fn with_min_rating(mut self, rating: f64) -> Self {
		self.min_rating = rating;
		self
	}

	/// Whether `provider` satisfies every active constraint.
	#[must_use]
	pub fn matches(&self, provider: &Provider) -> bool {
		crate::filter::Prepared::new(self).matches(provider)
	}
}

impl Default for FilterCriteria {
	fn default() -> Self {
		Self {
			search_text: String::new(),
			category: String::new(),
			max_distance: Self::DEFAULT_MAX_DISTANCE,
			min_rating: Self::DEFAULT_MIN_RATING,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_match_finder_page() {
		let criteria = FilterCriteria::default();
		assert!(criteria.search_text.is_empty());
		assert!(criteria.category.is_empty());
		assert_eq!(criteria.max_distance, 10.0);
		assert_eq!(criteria.min_rating, 4.0);
	}

	#[test]
	fn missing_fields_fall_back_to_defaults() {
		let criteria: FilterCriteria =
			serde_json::from_str(r#"{"searchText":"fix"}"#).expect("criteria");
		assert_eq!(criteria.search_text, "fix");
		assert_eq!(criteria.max_distance, FilterCriteria::DEFAULT_MAX_DISTANCE);
	}
}
