//! Color handling for the linked charts.
//!
//! Level-1 categories get evenly spaced hues at a fixed saturation and
//! lightness; every other chart derives its colors from that assignment so a
//! category looks the same in every view.

use serde::{Deserialize, Serialize};

/// RGB color representation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b }
	}

	/// Convert from HSL. `hue` is in degrees (wrapped into 0..360),
	/// `saturation` and `lightness` are clamped to 0.0..=1.0.
	pub fn from_hsl(hue: f64, saturation: f64, lightness: f64) -> Self {
		let h = hue.rem_euclid(360.0);
		let s = saturation.clamp(0.0, 1.0);
		let l = lightness.clamp(0.0, 1.0);
		let m2 = l + if l < 0.5 { l } else { 1.0 - l } * s;
		let m1 = 2.0 * l - m2;

		Self {
			r: hue_channel(if h >= 240.0 { h - 240.0 } else { h + 120.0 }, m1, m2),
			g: hue_channel(h, m1, m2),
			b: hue_channel(if h < 120.0 { h + 240.0 } else { h - 120.0 }, m1, m2),
		}
	}

	/// CSS functional notation, e.g. `rgb(255, 77, 77)`.
	pub fn to_css(self) -> String {
		format!("rgb({}, {}, {})", self.r, self.g, self.b)
	}
}

fn hue_channel(h: f64, m1: f64, m2: f64) -> u8 {
	let v = if h < 60.0 {
		m1 + (m2 - m1) * h / 60.0
	} else if h < 180.0 {
		m2
	} else if h < 240.0 {
		m1 + (m2 - m1) * (240.0 - h) / 60.0
	} else {
		m1
	};
	(v * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Saturation/lightness used for the level-1 hue wheel, plus the fixed colors
/// of the root node and the outcome bars.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PaletteConfig {
	pub saturation: f64,
	pub lightness: f64,
	pub root_color: Color,
	pub bar_color: Color,
}

impl Default for PaletteConfig {
	fn default() -> Self {
		Self {
			saturation: 1.0,
			lightness: 0.65,
			root_color: Color::rgb(230, 230, 230),
			bar_color: Color::rgb(2, 71, 49),
		}
	}
}

impl PaletteConfig {
	/// Color of the level-1 category at `index` among `count` ordered siblings.
	///
	/// Both the flow diagram and the donut call this, which is what keeps a
	/// category's slice and node the same color.
	pub fn level1_color(&self, index: usize, count: usize) -> Color {
		let hue = if count == 0 {
			0.0
		} else {
			360.0 * (index as f64 / count as f64)
		};
		Color::from_hsl(hue, self.saturation, self.lightness)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn primary_hues() {
		assert_eq!(Color::from_hsl(0.0, 1.0, 0.5), Color::rgb(255, 0, 0));
		assert_eq!(Color::from_hsl(120.0, 1.0, 0.5), Color::rgb(0, 255, 0));
		assert_eq!(Color::from_hsl(240.0, 1.0, 0.5), Color::rgb(0, 0, 255));
		assert_eq!(Color::from_hsl(360.0, 1.0, 0.5), Color::rgb(255, 0, 0));
	}

	#[test]
	fn grey_when_unsaturated() {
		assert_eq!(Color::from_hsl(200.0, 0.0, 0.5), Color::rgb(128, 128, 128));
	}

	#[test]
	fn default_wheel_matches_chart_colors() {
		let palette = PaletteConfig::default();
		assert_eq!(palette.level1_color(0, 3).to_css(), "rgb(255, 77, 77)");
		assert_eq!(palette.level1_color(1, 3).to_css(), "rgb(77, 255, 77)");
		assert_eq!(palette.level1_color(2, 3).to_css(), "rgb(77, 77, 255)");
	}

	#[test]
	fn css_form() {
		assert_eq!(Color::rgb(230, 230, 230).to_css(), "rgb(230, 230, 230)");
	}
}
