//! Record and chart data structures shared by the aggregators.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Number of classification levels carried by each row.
pub const GROUP_LEVELS: usize = 5;

/// A single degree-award record.
///
/// Field names follow the dataset columns (`FISCAL_YEAR`, `GROUP1`, ...) when
/// deserialized.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Row {
	/// Fiscal year label, e.g. "Fiscal Year 2025".
	#[serde(default)]
	pub fiscal_year: String,
	#[serde(default)]
	pub campus: String,
	/// CIP classification code.
	#[serde(default, rename = "CIP")]
	pub cip_code: String,
	#[serde(default)]
	pub cip_desc: String,
	/// Coarsest classification. Rows with an empty value are ignored by the
	/// group-keyed aggregators.
	#[serde(default)]
	pub group1: String,
	#[serde(default, deserialize_with = "blank_as_none")]
	pub group2: Option<String>,
	#[serde(default, deserialize_with = "blank_as_none")]
	pub group3: Option<String>,
	#[serde(default, deserialize_with = "blank_as_none")]
	pub group4: Option<String>,
	#[serde(default, deserialize_with = "blank_as_none")]
	pub group5: Option<String>,
	/// Degree type, e.g. "Bachelor's Degree".
	#[serde(default)]
	pub outcome: String,
	#[serde(default, deserialize_with = "lenient_awards")]
	pub awards: u64,
}

impl Row {
	/// Raw group field at `level` (1-based). Blank values and levels outside
	/// 1..=5 are `None`.
	pub fn group(&self, level: usize) -> Option<&str> {
		let value = match level {
			1 => Some(self.group1.as_str()),
			2 => self.group2.as_deref(),
			3 => self.group3.as_deref(),
			4 => self.group4.as_deref(),
			5 => self.group5.as_deref(),
			_ => None,
		}?;
		let value = value.trim();
		(!value.is_empty()).then_some(value)
	}

	/// Number of leading group levels present before the first gap.
	pub fn path_len(&self) -> usize {
		(1..=GROUP_LEVELS)
			.take_while(|&level| self.group(level).is_some())
			.count()
	}

	/// Group value at `level` as seen by the hierarchy: a gap at any shallower
	/// level ends the row's chain, so deeper fields are not reported.
	pub fn path_group(&self, level: usize) -> Option<&str> {
		if level == 0 || level > self.path_len() {
			return None;
		}
		self.group(level)
	}

	/// Numeric fiscal year built from the digits of `fiscal_year`.
	pub fn year(&self) -> Option<u32> {
		let digits: String = self
			.fiscal_year
			.chars()
			.filter(char::is_ascii_digit)
			.collect();
		digits.parse().ok()
	}
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
	D: Deserializer<'de>,
{
	let value = Option::<String>::deserialize(deserializer)?;
	Ok(value.filter(|v| !v.trim().is_empty()))
}

fn lenient_awards<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
	D: Deserializer<'de>,
{
	Ok(coerce_awards(&Value::deserialize(deserializer)?))
}

/// Coerce a loosely typed award count. Anything that is not a finite,
/// non-negative number becomes 0.
pub fn coerce_awards(value: &Value) -> u64 {
	match value {
		Value::Number(n) => n
			.as_u64()
			.or_else(|| n.as_f64().filter(|f| f.is_finite() && *f >= 0.0).map(|f| f as u64))
			.unwrap_or(0),
		Value::String(s) => {
			let s = s.trim();
			s.parse::<u64>()
				.ok()
				.or_else(|| {
					s.parse::<f64>()
						.ok()
						.filter(|f| f.is_finite() && *f >= 0.0)
						.map(|f| f as u64)
				})
				.unwrap_or(0)
		}
		_ => 0,
	}
}

/// A vertex of the flow graph.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowNode {
	/// Category value followed by its level, e.g. "Engineering1".
	pub id: String,
	/// Untruncated category value.
	pub name: String,
	/// Classification level, 0 for the synthetic root.
	pub level: usize,
	/// Column the renderer places the node in (level plus overflow offset).
	pub render_depth: usize,
	/// Position among the ordered siblings of this level.
	pub rank: usize,
	pub value: u64,
	pub parent_id: String,
	pub parent_value: u64,
	/// CSS color, `rgb(r, g, b)`.
	pub color: String,
	/// Display label, truncated for long category names.
	pub label: String,
	/// CIP description when every row of this node shares one.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub category: Option<String>,
}

/// A weighted edge from a coarser to a finer category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowLink {
	pub source_id: String,
	pub target_id: String,
	/// Equal to the target node's value.
	pub value: u64,
	pub parent_value: u64,
}

/// Complete flow graph: the root (first, when present), then levels 1..=5 in
/// sibling order, plus one link per non-root node.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct FlowData {
	pub nodes: Vec<FlowNode>,
	pub links: Vec<FlowLink>,
}

impl FlowData {
	/// The synthetic root node, absent for empty input.
	pub fn root(&self) -> Option<&FlowNode> {
		self.nodes.first().filter(|n| n.level == 0)
	}

	/// Grand total of awards; 0 for empty input.
	pub fn total(&self) -> u64 {
		self.root().map_or(0, |n| n.value)
	}

	/// Nodes of one level, in sibling order.
	pub fn level(&self, level: usize) -> impl Iterator<Item = &FlowNode> {
		self.nodes.iter().filter(move |n| n.level == level)
	}

	/// Look up a node by id.
	pub fn node(&self, id: &str) -> Option<&FlowNode> {
		self.nodes.iter().find(|n| n.id == id)
	}

	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}
}

/// One slice or bar of a proportional chart.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SeriesPoint {
	pub name: String,
	pub value: u64,
	pub color: String,
}

/// Award total for one fiscal year.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct YearTotal {
	pub year: u32,
	pub value: u64,
}
