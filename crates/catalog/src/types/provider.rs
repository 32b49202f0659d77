use serde::{Deserialize, Serialize};

/// Geographic position and street address of a provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
	pub lat: f64,
	pub lng: f64,
	pub address: String,
}

impl Location {
	#[must_use]
	pub fn new(lat: f64, lng: f64, address: impl Into<String>) -> Self {
		Self {
			lat,
			lng,
			address: address.into(),
		}
	}
}

/// A service vendor listed in the finder.
///
/// Records are read-only once loaded; the finder only ever borrows them or
/// refers to them by index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Provider {
	pub id: String,
	pub name: String,
	/// Average rating on a 0.0–5.0 scale.
	pub rating: f64,
	pub review_count: u32,
	pub category: String,
	/// Distance from the customer in miles.
	pub distance: f64,
	/// Display string such as `$40-80`; see [`crate::price_floor`].
	pub price_range: String,
	pub verified: bool,
	pub completed_jobs: u32,
	pub response_time: String,
	pub location: Location,
}

impl Provider {
	/// Verification state as a closed enumeration for badge rendering.
	#[must_use]
	pub fn verification(&self) -> Verification {
		if self.verified {
			Verification::Verified
		} else {
			Verification::Unverified
		}
	}
}

/// Verification badge shown next to a provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verification {
	Verified,
	Unverified,
}

impl Verification {
	/// Badge text for this state.
	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			Verification::Verified => "Verified",
			Verification::Unverified => "Unverified",
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn deserializes_camel_case_fields() {
		let json = r#"{
			"id": "9",
			"name": "Bolt Appliance",
			"rating": 4.2,
			"reviewCount": 12,
			"category": "Appliances",
			"distance": 3.5,
			"priceRange": "$30-70",
			"verified": false,
			"completedJobs": 40,
			"responseTime": "< 3 hours",
			"location": { "lat": 1.0, "lng": 2.0, "address": "1 Main St" }
		}"#;

		let provider: Provider = serde_json::from_str(json).expect("provider");
		assert_eq!(provider.review_count, 12);
		assert_eq!(provider.price_range, "$30-70");
		assert_eq!(provider.location.address, "1 Main St");
		assert_eq!(provider.verification(), Verification::Unverified);
	}

	#[test]
	fn verification_labels() {
		assert_eq!(Verification::Verified.label(), "Verified");
		assert_eq!(Verification::Unverified.label(), "Unverified");
	}
}
