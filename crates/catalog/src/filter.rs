//! Filtering and ordering of provider collections.
//!
//! Filtering is a stable subsequence selection; it never reorders. Ordering
//! is a separate, stable step applied to the already filtered indices.

use std::cmp::Ordering;

use crate::types::{FilterCriteria, Provider, SortOrder};

/// Criteria with the search needle lowered once up front.
pub(crate) struct Prepared<'a> {
	needle: Option<String>,
	category: Option<&'a str>,
	max_distance: f64,
	min_rating: f64,
}

impl<'a> Prepared<'a> {
	pub(crate) fn new(criteria: &'a FilterCriteria) -> Self {
		let needle = (!criteria.search_text.is_empty()).then(|| fold_case(&criteria.search_text));
		let category = (!criteria.category.is_empty()).then_some(criteria.category.as_str());
		Self {
			needle,
			category,
			max_distance: criteria.max_distance,
			min_rating: criteria.min_rating,
		}
	}

	pub(crate) fn matches(&self, provider: &Provider) -> bool {
		if let Some(needle) = &self.needle {
			let in_name = fold_case(&provider.name).contains(needle.as_str());
			if !in_name && !fold_case(&provider.category).contains(needle.as_str()) {
				return false;
			}
		}

		if let Some(category) = self.category
			&& provider.category != category
		{
			return false;
		}

		provider.distance <= self.max_distance && provider.rating >= self.min_rating
	}
}

/// Case folding used for search matching.
///
/// Whole-string lowering, so context rules such as the Greek final sigma
/// apply. Anything highlighting matches must fold the same way.
#[must_use]
pub fn fold_case(text: &str) -> String {
	text.to_lowercase()
}

/// Positions of the providers matching `criteria`, in input order.
#[must_use]
pub fn filter_indices(providers: &[Provider], criteria: &FilterCriteria) -> Vec<usize> {
	let prepared = Prepared::new(criteria);
	let matched: Vec<usize> = providers
		.iter()
		.enumerate()
		.filter(|(_, provider)| prepared.matches(provider))
		.map(|(index, _)| index)
		.collect();
	log::trace!(
		"filter kept {} of {} providers",
		matched.len(),
		providers.len()
	);
	matched
}

/// The providers matching `criteria`, borrowed in input order.
#[must_use]
pub fn filter_providers<'a>(
	providers: &'a [Provider],
	criteria: &FilterCriteria,
) -> Vec<&'a Provider> {
	filter_indices(providers, criteria)
		.into_iter()
		.map(|index| &providers[index])
		.collect()
}

/// Stable reorder of `indices` (positions into `providers`) by `order`.
///
/// Membership never changes; ties keep their current relative order.
pub fn sort_indices(providers: &[Provider], indices: &mut [usize], order: SortOrder) {
	let compare: fn(&Provider, &Provider) -> Ordering = match order {
		SortOrder::Listing => return,
		SortOrder::TopRated => |a, b| b.rating.total_cmp(&a.rating),
		SortOrder::Nearest => |a, b| a.distance.total_cmp(&b.distance),
		SortOrder::Price => |a, b| {
			match (price_floor(&a.price_range), price_floor(&b.price_range)) {
				(Some(a), Some(b)) => a.total_cmp(&b),
				(Some(_), None) => Ordering::Less,
				(None, Some(_)) => Ordering::Greater,
				(None, None) => Ordering::Equal,
			}
		},
	};

	indices.sort_by(|&a, &b| match (providers.get(a), providers.get(b)) {
		(Some(a), Some(b)) => compare(a, b),
		_ => Ordering::Equal,
	});
}

/// Lower bound of a price display string such as `$40-80` or `$1,200+`.
#[must_use]
pub fn price_floor(price_range: &str) -> Option<f64> {
	let trimmed = price_range.trim().trim_start_matches('$').trim_start();
	let digits: String = trimmed
		.chars()
		.take_while(|ch| ch.is_ascii_digit() || *ch == '.' || *ch == ',')
		.filter(|ch| *ch != ',')
		.collect();
	if digits.is_empty() {
		return None;
	}
	digits.parse().ok()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::seed::seed_providers;

	fn names(providers: &[Provider], indices: &[usize]) -> Vec<String> {
		indices
			.iter()
			.map(|&index| providers[index].name.clone())
			.collect()
	}

	#[test]
	fn search_text_matches_name_case_insensitively() {
		let providers = seed_providers();
		let criteria = FilterCriteria::default().with_search_text("phone");
		let matched = filter_indices(&providers, &criteria);
		assert_eq!(names(&providers, &matched), vec!["Quick Phone Fix"]);
	}

	#[test]
	fn search_text_also_matches_category() {
		let providers = seed_providers();
		let criteria = FilterCriteria::default().with_search_text("MAINT");
		let matched = filter_indices(&providers, &criteria);
		assert_eq!(names(&providers, &matched), vec!["Home Repair Heroes"]);
	}

	#[test]
	fn search_text_is_not_trimmed() {
		let providers = seed_providers();
		let criteria = FilterCriteria::unrestricted().with_search_text(" ");
		let matched = filter_indices(&providers, &criteria);
		assert_eq!(matched, vec![0, 1, 2]);
	}

	#[test]
	fn min_rating_is_inclusive() {
		let providers = seed_providers();
		let criteria = FilterCriteria::default().with_min_rating(4.8);
		let matched = filter_indices(&providers, &criteria);
		assert_eq!(names(&providers, &matched), vec!["TechFix Pro"]);

		let criteria = FilterCriteria::default().with_min_rating(4.6);
		assert_eq!(filter_indices(&providers, &criteria).len(), 3);
	}

	#[test]
	fn max_distance_is_inclusive() {
		let providers = seed_providers();
		let criteria = FilterCriteria::default().with_max_distance(1.0);
		let matched = filter_indices(&providers, &criteria);
		assert_eq!(names(&providers, &matched), vec!["TechFix Pro"]);

		let criteria = FilterCriteria::default().with_max_distance(1.2);
		assert_eq!(filter_indices(&providers, &criteria), vec![0, 1]);
	}

	#[test]
	fn category_requires_exact_match() {
		let mut providers = seed_providers();
		providers[1].name = "Electronics Home Care".into();
		let criteria = FilterCriteria::default().with_category("Electronics");
		let matched = filter_indices(&providers, &criteria);
		assert_eq!(names(&providers, &matched), vec!["TechFix Pro", "Quick Phone Fix"]);

		let criteria = FilterCriteria::default().with_category("electronics");
		assert!(filter_indices(&providers, &criteria).is_empty());
	}

	#[test]
	fn nonsensical_thresholds_exclude_everything() {
		let providers = seed_providers();
		let criteria = FilterCriteria::default().with_max_distance(-3.0);
		assert!(filter_indices(&providers, &criteria).is_empty());

		let criteria = FilterCriteria::default().with_min_rating(f64::NAN);
		assert!(filter_providers(&providers, &criteria).is_empty());
	}

	#[test]
	fn matches_agrees_with_filter() {
		let providers = seed_providers();
		let criteria = FilterCriteria::default().with_search_text("fix");
		let by_predicate: Vec<usize> = providers
			.iter()
			.enumerate()
			.filter(|(_, provider)| criteria.matches(provider))
			.map(|(index, _)| index)
			.collect();
		assert_eq!(by_predicate, filter_indices(&providers, &criteria));
	}

	#[test]
	fn sorting_orders_by_requested_key() {
		let providers = seed_providers();
		let mut indices = vec![0, 1, 2];

		sort_indices(&providers, &mut indices, SortOrder::Nearest);
		assert_eq!(indices, vec![0, 1, 2]);

		sort_indices(&providers, &mut indices, SortOrder::Price);
		assert_eq!(
			names(&providers, &indices),
			vec!["Quick Phone Fix", "TechFix Pro", "Home Repair Heroes"]
		);

		sort_indices(&providers, &mut indices, SortOrder::TopRated);
		assert_eq!(
			names(&providers, &indices),
			vec!["TechFix Pro", "Home Repair Heroes", "Quick Phone Fix"]
		);
	}

	#[test]
	fn listing_order_is_left_untouched() {
		let providers = seed_providers();
		let mut indices = vec![2, 0];
		sort_indices(&providers, &mut indices, SortOrder::Listing);
		assert_eq!(indices, vec![2, 0]);
	}

	#[test]
	fn price_sort_is_stable_and_puts_unknown_last() {
		let mut providers = seed_providers();
		providers[0].price_range = "Quote on request".into();
		providers[1].price_range = "$25-90".into();
		let mut indices = vec![0, 1, 2];
		sort_indices(&providers, &mut indices, SortOrder::Price);
		assert_eq!(indices, vec![1, 2, 0]);
	}

	#[test]
	fn price_floor_parses_display_strings() {
		assert_eq!(price_floor("$40-80"), Some(40.0));
		assert_eq!(price_floor(" $ 25 - 60"), Some(25.0));
		assert_eq!(price_floor("$1,200+"), Some(1200.0));
		assert_eq!(price_floor("$9.50/hr"), Some(9.5));
		assert_eq!(price_floor("Free"), None);
		assert_eq!(price_floor(""), None);
	}
}
