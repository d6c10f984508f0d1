//! Detail panel shown next to the charts for the selected node.

use serde::Serialize;

use super::config::FlowConfig;
use super::proportional::{bar_with, drill_down, ranked_totals};
use super::state::SelectedSlice;
use super::types::{Row, SeriesPoint};

/// Award total of one category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CategoryTotal {
	pub name: String,
	pub value: u64,
}

/// Breakdown of a selected node.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DegreeSummary {
	pub name: String,
	pub depth: usize,
	/// Awards within the selection.
	pub value: u64,
	/// Awards across all grouped rows.
	pub total: u64,
	/// `value` as a percentage of `total`.
	pub share_percent: f64,
	/// Largest categories one level down. Only reported for level-1
	/// selections.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub top_children: Option<Vec<CategoryTotal>>,
	pub outcomes: Vec<SeriesPoint>,
	pub most_common_outcome: Option<String>,
}

/// Number of child categories listed for a level-1 selection.
const TOP_CHILDREN: usize = 3;

impl DegreeSummary {
	pub fn build(rows: &[Row], selection: Option<&SelectedSlice>) -> Option<Self> {
		Self::build_with(rows, selection, &FlowConfig::default())
	}

	/// Summarize the selection. `None` when nothing is selected or the
	/// selection matches no rows.
	pub fn build_with(
		rows: &[Row],
		selection: Option<&SelectedSlice>,
		config: &FlowConfig,
	) -> Option<Self> {
		let slice = selection?;
		let filtered = drill_down(rows, Some(slice), config);
		if filtered.is_empty() {
			return None;
		}

		let total = rows
			.iter()
			.filter(|r| r.path_len() > 0)
			.fold(0u64, |sum, r| sum.saturating_add(r.awards));
		let value = filtered
			.iter()
			.fold(0u64, |sum, r| sum.saturating_add(r.awards));
		let share_percent = if total == 0 {
			0.0
		} else {
			value as f64 / total as f64 * 100.0
		};

		let top_children = (slice.depth == 1).then(|| {
			ranked_totals(filtered.iter().copied(), |row| row.path_group(2))
				.into_iter()
				.take(TOP_CHILDREN)
				.map(|(name, value)| CategoryTotal {
					name: name.to_string(),
					value,
				})
				.collect()
		});
		let outcomes = bar_with(rows, Some(slice), config);
		let most_common_outcome = outcomes.first().map(|p| p.name.clone());

		Some(Self {
			name: slice.name.clone(),
			depth: slice.depth,
			value,
			total,
			share_percent,
			top_children,
			outcomes,
			most_common_outcome,
		})
	}

	/// Share formatted with three decimals, e.g. `"12.345"`.
	pub fn share_label(&self) -> String {
		format!("{:.3}", self.share_percent)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn row(g1: &str, g2: &str, outcome: &str, awards: u64) -> Row {
		Row {
			group1: g1.into(),
			group2: Some(g2.into()),
			outcome: outcome.into(),
			awards,
			..Default::default()
		}
	}

	fn sample() -> Vec<Row> {
		vec![
			row("Arts", "Music", "Bachelor's", 4),
			row("Arts", "Dance", "Master's", 2),
			row("Arts", "Theatre", "Bachelor's", 1),
			row("Arts", "Film", "Bachelor's", 3),
			row("Science", "Biology", "Bachelor's", 10),
		]
	}

	fn select(name: &str, depth: usize) -> SelectedSlice {
		SelectedSlice {
			index: 0,
			name: name.into(),
			depth,
		}
	}

	#[test]
	fn nothing_selected() {
		assert_eq!(DegreeSummary::build(&sample(), None), None);
	}

	#[test]
	fn unmatched_selection() {
		assert_eq!(DegreeSummary::build(&sample(), Some(&select("Law", 1))), None);
	}

	#[test]
	fn level_one_summary() {
		let summary = DegreeSummary::build(&sample(), Some(&select("Arts", 1))).unwrap();
		assert_eq!((summary.value, summary.total), (10, 20));
		assert_eq!(summary.share_label(), "50.000");
		let top: Vec<&str> = summary
			.top_children
			.as_ref()
			.unwrap()
			.iter()
			.map(|c| c.name.as_str())
			.collect();
		assert_eq!(top, vec!["Music", "Film", "Dance"]);
		assert_eq!(summary.most_common_outcome.as_deref(), Some("Bachelor's"));
		assert_eq!(summary.outcomes.len(), 2);
	}

	#[test]
	fn huge_awards_saturate() {
		let rows = [
			row("Arts", "Music", "Bachelor's", u64::MAX),
			row("Arts", "Music", "Bachelor's", 1),
		];
		let summary = DegreeSummary::build(&rows, Some(&select("Arts", 1))).unwrap();
		assert_eq!((summary.value, summary.total), (u64::MAX, u64::MAX));
		assert_eq!(summary.share_label(), "100.000");
	}

	#[test]
	fn deeper_selection_has_no_children_list() {
		let summary = DegreeSummary::build(&sample(), Some(&select("Dance", 2))).unwrap();
		assert_eq!(summary.top_children, None);
		assert_eq!(summary.value, 2);
		assert_eq!(summary.most_common_outcome.as_deref(), Some("Master's"));
	}
}
