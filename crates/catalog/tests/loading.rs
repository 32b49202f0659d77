use std::fs;

use provfind_catalog::{CatalogError, FilterCriteria, ProviderCatalog, filter_indices};
use tempfile::tempdir;

const JSON_PROVIDERS: &str = r#"[
	{
		"id": "a1",
		"name": "Volt Masters",
		"rating": 4.8,
		"reviewCount": 51,
		"category": "Electronics",
		"distance": 4.0,
		"priceRange": "$50-90",
		"verified": true,
		"completedJobs": 77,
		"responseTime": "< 2 hours",
		"location": { "lat": 44.97, "lng": -93.26, "address": "12 Spark Rd" }
	}
]"#;

const TOML_PROVIDERS: &str = r#"
[[providers]]
id = "t1"
name = "Torque Town"
rating = 4.3
reviewCount = 19
category = "Automotive"
distance = 6.5
priceRange = "$80-200"
verified = false
completedJobs = 31
responseTime = "< 1 day"
location = { lat = 44.95, lng = -93.09, address = "5 Gear St" }

[[providers]]
id = "t2"
name = "Byte Clinic"
rating = 4.9
reviewCount = 8
category = "Computer Repair"
distance = 2.0
priceRange = "$45-95"
verified = true
completedJobs = 12
responseTime = "< 3 hours"
location = { lat = 44.98, lng = -93.27, address = "77 Chip Ave" }
"#;

#[test]
fn loads_json_collections() {
	let dir = tempdir().unwrap();
	let path = dir.path().join("providers.json");
	fs::write(&path, JSON_PROVIDERS).unwrap();

	let catalog = ProviderCatalog::load(&path).expect("json catalog");
	assert_eq!(catalog.len(), 1);
	assert_eq!(catalog.origin(), Some(path.as_path()));
	let provider = catalog.get(0).unwrap();
	assert_eq!(provider.name, "Volt Masters");
	assert_eq!(provider.completed_jobs, 77);
}

#[test]
fn loads_toml_collections() {
	let dir = tempdir().unwrap();
	let path = dir.path().join("providers.TOML");
	fs::write(&path, TOML_PROVIDERS).unwrap();

	let catalog = ProviderCatalog::load(&path).expect("toml catalog");
	let names: Vec<&str> = catalog.providers().iter().map(|p| p.name.as_str()).collect();
	assert_eq!(names, vec!["Torque Town", "Byte Clinic"]);
	assert_eq!(catalog.get(1).unwrap().location.address, "77 Chip Ave");
}

#[test]
fn rejects_unknown_extensions() {
	let dir = tempdir().unwrap();
	let path = dir.path().join("providers.yaml");
	fs::write(&path, "[]").unwrap();

	let err = ProviderCatalog::load(&path).unwrap_err();
	assert!(matches!(err, CatalogError::UnsupportedFormat { .. }));
}

#[test]
fn reports_parse_errors_with_path() {
	let dir = tempdir().unwrap();
	let path = dir.path().join("broken.json");
	fs::write(&path, r#"[{"id": "1"}]"#).unwrap();

	let err = ProviderCatalog::load(&path).unwrap_err();
	assert!(matches!(err, CatalogError::Parse { .. }));
	assert!(err.to_string().contains("broken.json"));
}

#[test]
fn reports_missing_files() {
	let dir = tempdir().unwrap();
	let err = ProviderCatalog::load(dir.path().join("absent.json")).unwrap_err();
	assert!(matches!(err, CatalogError::Read { .. }));
}

#[test]
fn rejects_duplicate_ids_in_files() {
	let dir = tempdir().unwrap();
	let path = dir.path().join("dupes.toml");
	fs::write(&path, TOML_PROVIDERS.replace("\"t2\"", "\"t1\"")).unwrap();

	let err = ProviderCatalog::load(&path).unwrap_err();
	assert!(matches!(err, CatalogError::DuplicateId { ref id } if id == "t1"));
}

#[test]
fn rejects_nan_distance_and_out_of_range_rating() {
	let dir = tempdir().unwrap();
	let path = dir.path().join("corrupt.toml");
	let corrupt = TOML_PROVIDERS
		.replace("distance = 2.0", "distance = nan")
		.replace("rating = 4.9", "rating = 9.5");
	fs::write(&path, corrupt).unwrap();

	let err = ProviderCatalog::load(&path).unwrap_err();
	assert!(matches!(err, CatalogError::InvalidField { ref id, .. } if id == "t2"));
}

#[test]
fn rejects_negative_distance_and_rating() {
	let dir = tempdir().unwrap();
	let path = dir.path().join("negative.toml");
	let corrupt = TOML_PROVIDERS
		.replace("distance = 6.5", "distance = -4.0")
		.replace("rating = 4.3", "rating = -2.0");
	fs::write(&path, corrupt).unwrap();

	let err = ProviderCatalog::load(&path).unwrap_err();
	assert!(matches!(err, CatalogError::InvalidField { ref id, field: "rating" } if id == "t1"));
	assert!(err.to_string().contains("t1"));
}

#[test]
fn loaded_collections_pass_unrestricted_criteria_whole() {
	let dir = tempdir().unwrap();
	let path = dir.path().join("providers.toml");
	fs::write(&path, TOML_PROVIDERS).unwrap();

	let catalog = ProviderCatalog::load(&path).unwrap();
	let all = filter_indices(catalog.providers(), &FilterCriteria::unrestricted());
	assert_eq!(all, (0..catalog.len()).collect::<Vec<_>>());
}
