//! Flat series for the donut, outcome bar and campus trend charts.

use std::collections::BTreeMap;

use serde::Serialize;

use super::config::FlowConfig;
use super::hierarchy::sibling_order;
use super::state::SelectedSlice;
use super::types::{Row, SeriesPoint, YearTotal};

/// Sum awards per key and rank the keys the way flow-graph siblings are
/// ranked. Rows without a key are skipped.
pub(crate) fn ranked_totals<'a, I, F>(rows: I, key: F) -> Vec<(&'a str, u64)>
where
	I: IntoIterator<Item = &'a Row>,
	F: Fn(&'a Row) -> Option<&'a str>,
{
	let mut totals: BTreeMap<&str, u64> = BTreeMap::new();
	for row in rows {
		if let Some(k) = key(row) {
			let total = totals.entry(k).or_default();
			*total = total.saturating_add(row.awards);
		}
	}
	let mut ranked: Vec<(&str, u64)> = totals.into_iter().collect();
	ranked.sort_by(|a, b| sibling_order(a.0, a.1, b.0, b.1));
	ranked
}

/// Restrict rows to the composition of the selected node.
///
/// A row matches when its group value at `min(depth, drill_down_max_level)`
/// equals the selection's name. No selection, or a selection of the root
/// (depth 0), keeps every row.
pub fn drill_down<'a>(
	rows: &'a [Row],
	selection: Option<&SelectedSlice>,
	config: &FlowConfig,
) -> Vec<&'a Row> {
	match selection {
		Some(slice) if slice.depth > 0 => {
			let level = slice.depth.min(config.drill_down_max_level);
			rows.iter()
				.filter(|row| row.path_group(level) == Some(slice.name.as_str()))
				.collect()
		}
		_ => rows.iter().collect(),
	}
}

/// Level-1 share series using the default configuration.
pub fn donut(rows: &[Row], selection: Option<&SelectedSlice>) -> Vec<SeriesPoint> {
	donut_with(rows, selection, &FlowConfig::default())
}

/// Level-1 share series.
///
/// Slices follow the flow graph's level-1 order and colors for the unfiltered
/// rows, so a category keeps its flow-node color while drilled into. Without
/// a selection, slice `i` is the level-1 node with rank `i`.
pub fn donut_with(
	rows: &[Row],
	selection: Option<&SelectedSlice>,
	config: &FlowConfig,
) -> Vec<SeriesPoint> {
	let ranked = ranked_totals(rows, |row| row.path_group(1));
	let count = ranked.len();
	let shown: BTreeMap<&str, u64> =
		ranked_totals(drill_down(rows, selection, config), |row| row.path_group(1))
			.into_iter()
			.collect();
	ranked
		.into_iter()
		.enumerate()
		.filter_map(|(i, (name, _))| {
			let value = *shown.get(name)?;
			Some(SeriesPoint {
				name: name.to_string(),
				value,
				color: config.palette.level1_color(i, count).to_css(),
			})
		})
		.collect()
}

/// Outcome breakdown using the default configuration.
pub fn bar(rows: &[Row], selection: Option<&SelectedSlice>) -> Vec<SeriesPoint> {
	bar_with(rows, selection, &FlowConfig::default())
}

/// Awards per degree outcome, largest first.
pub fn bar_with(
	rows: &[Row],
	selection: Option<&SelectedSlice>,
	config: &FlowConfig,
) -> Vec<SeriesPoint> {
	let filtered = drill_down(rows, selection, config);
	let color = config.palette.bar_color.to_css();
	ranked_totals(filtered, |row| {
		let outcome = row.outcome.trim();
		(!outcome.is_empty()).then_some(outcome)
	})
	.into_iter()
	.map(|(name, value)| SeriesPoint {
		name: name.to_string(),
		value,
		color: color.clone(),
	})
	.collect()
}

/// Year-over-year totals for one campus.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendSeries {
	/// Ascending by year.
	pub points: Vec<YearTotal>,
	/// Largest value rounded up to a multiple of 1000, for the y axis.
	pub axis_max: u64,
}

/// Totals per numeric fiscal year.
///
/// Rows are expected to be pre-filtered to one campus; selection state does
/// not apply. Rows whose fiscal year has no digits are skipped.
pub fn trend(rows: &[Row]) -> TrendSeries {
	let mut totals: BTreeMap<u32, u64> = BTreeMap::new();
	for row in rows {
		if let Some(year) = row.year() {
			let total = totals.entry(year).or_default();
			*total = total.saturating_add(row.awards);
		}
	}
	let points: Vec<YearTotal> = totals
		.into_iter()
		.map(|(year, value)| YearTotal { year, value })
		.collect();
	let max = points.iter().map(|p| p.value).max().unwrap_or(0);
	TrendSeries {
		points,
		axis_max: max.div_ceil(1000).saturating_mul(1000),
	}
}
