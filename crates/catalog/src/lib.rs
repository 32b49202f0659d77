//! Provider records, filter criteria and the filtering/sorting used by the
//! `provfind` finder.
//!
//! The crate is UI-agnostic: everything here is plain data plus pure
//! functions, so the terminal front end and the listing mode share the exact
//! same semantics.

pub mod error;
pub mod filter;
pub mod seed;
pub mod source;
pub mod types;

pub use error::CatalogError;
pub use filter::{filter_indices, filter_providers, fold_case, price_floor, sort_indices};
pub use seed::{KNOWN_CATEGORIES, seed_providers};
pub use source::ProviderCatalog;
pub use types::{
	DISTANCE_RANGE, FilterCriteria, Location, Provider, RATING_RANGE, RangeControl, SortOrder,
	Verification,
};
