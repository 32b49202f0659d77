//! Focus order and the selector controls of the filter panel.

/// The control currently receiving key presses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Focus {
	#[default]
	Search,
	Category,
	Distance,
	Rating,
	Sort,
	Results,
}

impl Focus {
	const ORDER: [Focus; 6] = [
		Focus::Search,
		Focus::Category,
		Focus::Distance,
		Focus::Rating,
		Focus::Sort,
		Focus::Results,
	];

	#[must_use]
	pub fn next(self) -> Self {
		Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
	}

	#[must_use]
	pub fn previous(self) -> Self {
		Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
	}

	/// Whether the focus sits on one of the filter controls.
	#[must_use]
	pub fn is_filter_control(self) -> bool {
		self != Focus::Results
	}

	fn position(self) -> usize {
		self as usize
	}
}

/// Category choices with "All" (the empty category) in front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySelector {
	choices: Vec<String>,
}

impl CategorySelector {
	pub const ALL_LABEL: &'static str = "All";

	/// Build from the catalog categories. `current` is added when it is not
	/// already one of them so a configured category stays selectable.
	pub fn new(categories: Vec<String>, current: &str) -> Self {
		let mut choices = Vec::with_capacity(categories.len() + 2);
		choices.push(String::new());
		for category in categories {
			if !category.is_empty() && !choices.contains(&category) {
				choices.push(category);
			}
		}
		if !current.is_empty() && !choices.iter().any(|choice| choice == current) {
			choices.push(current.to_string());
		}
		Self { choices }
	}

	#[must_use]
	pub fn next(&self, current: &str) -> String {
		let index = self.position(current);
		self.choices[(index + 1) % self.choices.len()].clone()
	}

	#[must_use]
	pub fn previous(&self, current: &str) -> String {
		let index = self.position(current);
		self.choices[(index + self.choices.len() - 1) % self.choices.len()].clone()
	}

	/// Display label for a category value.
	#[must_use]
	pub fn label(category: &str) -> &str {
		if category.is_empty() {
			Self::ALL_LABEL
		} else {
			category
		}
	}

	fn position(&self, current: &str) -> usize {
		self.choices
			.iter()
			.position(|choice| choice == current)
			.unwrap_or_default()
	}
}
