//! Tunable parameters for the aggregators.
//!
//! All values have defaults matching the published charts. Hosts can override
//! any subset from JSON since every struct deserializes with
//! `#[serde(default)]`:
//!
//! ```
//! use gradgraph::FlowConfig;
//!
//! let config = FlowConfig::from_json(r#"{ "overflow_threshold": 50 }"#).unwrap();
//! assert_eq!(config.overflow_threshold, 50);
//! assert_eq!(config.label_max_chars, 23);
//! ```

use serde::{Deserialize, Serialize};

use super::error::SourceError;
use super::theme::PaletteConfig;

/// Configuration for the flow graph and the proportional series.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct FlowConfig {
	/// Id and label of the synthetic root node.
	pub root_id: String,
	/// Siblings per render column before overflow nodes are pushed one column
	/// deeper. 0 disables the overflow rule.
	pub overflow_threshold: usize,
	/// Labels longer than this many characters are cut and suffixed with `...`.
	pub label_max_chars: usize,
	/// Deepest group level the drill-down filter matches against.
	pub drill_down_max_level: usize,
	pub palette: PaletteConfig,
}

impl Default for FlowConfig {
	fn default() -> Self {
		Self {
			root_id: "Total".to_string(),
			overflow_threshold: 100,
			label_max_chars: 23,
			drill_down_max_level: 3,
			palette: PaletteConfig::default(),
		}
	}
}

impl FlowConfig {
	/// Parse a (possibly partial) configuration from JSON.
	pub fn from_json(json: &str) -> Result<Self, SourceError> {
		Ok(serde_json::from_str(json)?)
	}

	/// Truncate a category value for display.
	pub fn label_for(&self, name: &str) -> String {
		if name.chars().count() > self.label_max_chars {
			let cut: String = name.chars().take(self.label_max_chars).collect();
			format!("{cut}...")
		} else {
			name.to_string()
		}
	}
}
