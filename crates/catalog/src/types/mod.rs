//! Data types shared by the catalog, the finder UI and the CLI output.

mod criteria;
mod provider;
mod range;
mod sort;

pub use criteria::FilterCriteria;
pub use provider::{Location, Provider, Verification};
pub use range::{DISTANCE_RANGE, RATING_RANGE, RangeControl};
pub use sort::SortOrder;
