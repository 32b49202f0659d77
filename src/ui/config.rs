/// Text used by the finder when rendering panels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiConfig {
	/// Title shown at the top of the screen.
	pub title: String,
	/// Title of the filter panel.
	pub filter_label: String,
	/// Placeholder inside the empty search box.
	pub search_placeholder: String,
	/// Title of the result table.
	pub results_title: String,
	/// Title of the provider detail panel.
	pub detail_title: String,
	/// Message shown when no provider matches.
	pub empty_message: String,
}

impl Default for UiConfig {
	fn default() -> Self {
		Self {
			title: "Find Service Providers".to_string(),
			filter_label: "Filters".to_string(),
			search_placeholder: "Service or provider...".to_string(),
			results_title: "Providers".to_string(),
			detail_title: "Provider details".to_string(),
			empty_message: "No providers match. Try a wider distance or lower rating.".to_string(),
		}
	}
}

impl UiConfig {
	/// Heading above the result table.
	#[must_use]
	pub fn results_heading(&self, count: usize) -> String {
		match count {
			1 => "1 provider found".to_string(),
			n => format!("{n} providers found"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn heading_pluralizes() {
		let ui = UiConfig::default();
		assert_eq!(ui.results_heading(0), "0 providers found");
		assert_eq!(ui.results_heading(1), "1 provider found");
		assert_eq!(ui.results_heading(3), "3 providers found");
	}
}
