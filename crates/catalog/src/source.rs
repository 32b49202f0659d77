//! Loading provider collections and deriving selector data from them.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::CatalogError;
use crate::seed::{KNOWN_CATEGORIES, seed_providers};
use crate::types::Provider;

const MAX_RATING: f64 = 5.0;

/// An immutable provider collection plus where it came from.
#[derive(Debug, Clone)]
pub struct ProviderCatalog {
	providers: Vec<Provider>,
	origin: Option<PathBuf>,
}

/// TOML files wrap the records in a `providers` array of tables.
#[derive(Deserialize)]
struct TomlDocument {
	#[serde(default)]
	providers: Vec<Provider>,
}

impl ProviderCatalog {
	/// The built-in reference providers.
	#[must_use]
	pub fn seeded() -> Self {
		Self {
			providers: seed_providers(),
			origin: None,
		}
	}

	/// Wrap an in-memory collection, rejecting duplicate identifiers and
	/// records whose rating or distance is out of domain.
	pub fn from_providers(providers: Vec<Provider>) -> Result<Self, CatalogError> {
		ensure_unique_ids(&providers)?;
		providers.iter().try_for_each(ensure_valid_fields)?;
		Ok(Self {
			providers,
			origin: None,
		})
	}

	/// Load a collection from a `.json` or `.toml` file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
		let path = path.as_ref();
		let extension = path
			.extension()
			.and_then(|ext| ext.to_str())
			.map(str::to_ascii_lowercase);

		let content = fs::read_to_string(path).map_err(|source| CatalogError::Read {
			path: path.to_path_buf(),
			source,
		})?;

		let providers = match extension.as_deref() {
			Some("json") => {
				serde_json::from_str::<Vec<Provider>>(&content)
					.map_err(|err| CatalogError::parse(path, err))?
			}
			Some("toml") => {
				toml::from_str::<TomlDocument>(&content)
					.map_err(|err| CatalogError::parse(path, err))?
					.providers
			}
			_ => {
				return Err(CatalogError::UnsupportedFormat {
					path: path.to_path_buf(),
				});
			}
		};

		let mut catalog = Self::from_providers(providers)?;
		catalog.origin = Some(path.to_path_buf());
		log::info!(
			"loaded {} providers from {}",
			catalog.len(),
			path.display()
		);
		Ok(catalog)
	}

	#[must_use]
	pub fn providers(&self) -> &[Provider] {
		&self.providers
	}

	#[must_use]
	pub fn get(&self, index: usize) -> Option<&Provider> {
		self.providers.get(index)
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.providers.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.providers.is_empty()
	}

	/// File the collection was loaded from, `None` for the seed set.
	#[must_use]
	pub fn origin(&self) -> Option<&Path> {
		self.origin.as_deref()
	}

	/// Category choices for the selector: the known categories followed by
	/// any other category present in the data, first-seen order.
	#[must_use]
	pub fn categories(&self) -> Vec<String> {
		let mut seen = HashSet::new();
		KNOWN_CATEGORIES
			.iter()
			.copied()
			.chain(self.providers.iter().map(|provider| provider.category.as_str()))
			.filter(|category| !category.is_empty() && seen.insert(*category))
			.map(str::to_string)
			.collect()
	}
}

impl Default for ProviderCatalog {
	fn default() -> Self {
		Self::seeded()
	}
}

fn ensure_unique_ids(providers: &[Provider]) -> Result<(), CatalogError> {
	let mut seen = HashSet::new();
	for provider in providers {
		if !seen.insert(provider.id.as_str()) {
			return Err(CatalogError::DuplicateId {
				id: provider.id.clone(),
			});
		}
	}
	Ok(())
}

/// Ratings live in 0.0–5.0 and distances are non-negative; NaN is neither.
fn ensure_valid_fields(provider: &Provider) -> Result<(), CatalogError> {
	let invalid = |field| CatalogError::InvalidField {
		id: provider.id.clone(),
		field,
	};
	if !(0.0..=MAX_RATING).contains(&provider.rating) {
		return Err(invalid("rating"));
	}
	if !(provider.distance.is_finite() && provider.distance >= 0.0) {
		return Err(invalid("distance"));
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn categories_extend_known_list_without_duplicates() {
		let mut providers = seed_providers();
		providers[2].category = "Locksmith".into();
		let catalog = ProviderCatalog::from_providers(providers).expect("catalog");
		assert_eq!(
			catalog.categories(),
			vec![
				"Electronics",
				"Home Maintenance",
				"Automotive",
				"Appliances",
				"Computer Repair",
				"Locksmith",
			]
		);
	}

	#[test]
	fn duplicate_ids_are_rejected() {
		let mut providers = seed_providers();
		providers[1].id = "1".into();
		let err = ProviderCatalog::from_providers(providers).unwrap_err();
		assert!(matches!(err, CatalogError::DuplicateId { id } if id == "1"));
	}

	#[test]
	fn seeded_catalog_has_no_origin() {
		let catalog = ProviderCatalog::default();
		assert_eq!(catalog.len(), 3);
		assert!(catalog.origin().is_none());
	}

	#[test]
	fn out_of_domain_fields_are_rejected() {
		let cases: [(fn(&mut Provider), &str); 5] = [
			(|p| p.rating = f64::NAN, "rating"),
			(|p| p.rating = 5.5, "rating"),
			(|p| p.rating = -0.1, "rating"),
			(|p| p.distance = f64::INFINITY, "distance"),
			(|p| p.distance = -1.0, "distance"),
		];
		for (corrupt, expected) in cases {
			let mut providers = seed_providers();
			corrupt(&mut providers[2]);
			let err = ProviderCatalog::from_providers(providers).unwrap_err();
			assert!(
				matches!(&err, CatalogError::InvalidField { id, field } if id == "3" && *field == expected),
				"{err}"
			);
		}
	}

	#[test]
	fn boundary_values_are_accepted() {
		let mut providers = seed_providers();
		providers[0].rating = 5.0;
		providers[1].rating = 0.0;
		providers[2].distance = 0.0;
		assert!(ProviderCatalog::from_providers(providers).is_ok());
	}
}
