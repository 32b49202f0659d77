use provfind_catalog::{FilterCriteria, Provider, SortOrder};

/// How a finder session ended.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
	/// `false` when the user cancelled.
	pub accepted: bool,
	/// Criteria the final list was computed from.
	pub criteria: FilterCriteria,
	pub sort: SortOrder,
	/// The provider chosen with Enter, if any.
	pub selection: Option<Provider>,
}
