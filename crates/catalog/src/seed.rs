//! Reference provider set used when no data file is configured.

use crate::types::{Location, Provider};

/// Categories offered by the selector regardless of the loaded data.
pub const KNOWN_CATEGORIES: [&str; 5] = [
	"Electronics",
	"Home Maintenance",
	"Automotive",
	"Appliances",
	"Computer Repair",
];

/// The built-in providers, in listing order.
#[must_use]
pub fn seed_providers() -> Vec<Provider> {
	vec![
		Provider {
			id: "1".into(),
			name: "TechFix Pro".into(),
			rating: 4.9,
			review_count: 127,
			category: "Electronics".into(),
			distance: 0.8,
			price_range: "$40-80".into(),
			verified: true,
			completed_jobs: 156,
			response_time: "< 2 hours".into(),
			location: Location::new(40.7128, -74.0060, "123 Tech Street"),
		},
		Provider {
			id: "2".into(),
			name: "Home Repair Heroes".into(),
			rating: 4.7,
			review_count: 89,
			category: "Home Maintenance".into(),
			distance: 1.2,
			price_range: "$60-120".into(),
			verified: true,
			completed_jobs: 203,
			response_time: "< 4 hours".into(),
			location: Location::new(40.7589, -73.9851, "456 Repair Ave"),
		},
		Provider {
			id: "3".into(),
			name: "Quick Phone Fix".into(),
			rating: 4.6,
			review_count: 234,
			category: "Electronics".into(),
			distance: 2.1,
			price_range: "$25-60".into(),
			verified: false,
			completed_jobs: 89,
			response_time: "< 1 hour".into(),
			location: Location::new(40.7282, -73.7949, "789 Mobile Lane"),
		},
	]
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use super::*;

	#[test]
	fn seed_ids_are_unique() {
		let providers = seed_providers();
		let ids: HashSet<_> = providers.iter().map(|provider| provider.id.as_str()).collect();
		assert_eq!(ids.len(), providers.len());
	}

	#[test]
	fn seed_categories_are_known() {
		for provider in seed_providers() {
			assert!(KNOWN_CATEGORIES.contains(&provider.category.as_str()));
		}
	}
}
