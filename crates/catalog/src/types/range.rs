/// A bounded slider with a fixed step.
///
/// Values are kept on the step grid by computing them as
/// `ticks / ticks_per_unit`, so stepping 4.0 up once yields exactly `4.1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeControl {
	pub min: f64,
	pub max: f64,
	pub ticks_per_unit: u32,
}

/// Distance slider: 1–50 miles in whole miles.
pub const DISTANCE_RANGE: RangeControl = RangeControl::new(1.0, 50.0, 1);

/// Rating slider: 1–5 stars in tenths.
pub const RATING_RANGE: RangeControl = RangeControl::new(1.0, 5.0, 10);

impl RangeControl {
	#[must_use]
	pub const fn new(min: f64, max: f64, ticks_per_unit: u32) -> Self {
		Self {
			min,
			max,
			ticks_per_unit,
		}
	}

	#[must_use]
	pub fn step_up(&self, value: f64) -> f64 {
		self.offset(value, 1)
	}

	#[must_use]
	pub fn step_down(&self, value: f64) -> f64 {
		self.offset(value, -1)
	}

	/// Whether `value` lies inside the slider bounds.
	#[must_use]
	pub fn contains(&self, value: f64) -> bool {
		value >= self.min && value <= self.max
	}

	fn offset(&self, value: f64, steps: i64) -> f64 {
		if value.is_nan() {
			return self.min;
		}
		let scale = f64::from(self.ticks_per_unit);
		let min_ticks = (self.min * scale).round();
		let max_ticks = (self.max * scale).round();
		let ticks = ((value * scale).round() + steps as f64).clamp(min_ticks, max_ticks);
		ticks / scale
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn rating_steps_land_on_tenths() {
		assert_eq!(RATING_RANGE.step_up(4.0), 4.1);
		assert_eq!(RATING_RANGE.step_down(4.0), 3.9);
		assert_eq!(RATING_RANGE.step_up(4.7), 4.8);
	}

	#[test]
	fn steps_clamp_to_bounds() {
		assert_eq!(DISTANCE_RANGE.step_up(50.0), 50.0);
		assert_eq!(DISTANCE_RANGE.step_down(1.0), 1.0);
		assert_eq!(DISTANCE_RANGE.step_down(120.0), 50.0);
		assert_eq!(RATING_RANGE.step_up(7.5), 5.0);
	}

	#[test]
	fn stepping_snaps_off_grid_values() {
		assert_eq!(DISTANCE_RANGE.step_up(9.6), 11.0);
		assert_eq!(RATING_RANGE.step_down(4.449), 4.3);
		assert_eq!(RATING_RANGE.step_up(f64::NAN), 1.0);
	}

	#[test]
	fn bounds_are_inclusive() {
		assert!(RATING_RANGE.contains(5.0));
		assert!(DISTANCE_RANGE.contains(1.0));
		assert!(!DISTANCE_RANGE.contains(0.5));
		assert!(!RATING_RANGE.contains(f64::NAN));
	}
}
