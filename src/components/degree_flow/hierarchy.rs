//! Conversion of flat award rows into the five-level flow graph.
//!
//! Each level is aggregated independently: rows are partitioned by their
//! group value at that level, summed, ranked, colored and linked to the node
//! of the level above that their rows point at. Sibling order is descending by
//! value with ties broken by ascending name, so the output depends only on the
//! multiset of rows and never on their order.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet, HashMap};

use log::{debug, warn};

use super::config::FlowConfig;
use super::overflow::{carried_after, depth_offset};
use super::types::{FlowData, FlowLink, FlowNode, GROUP_LEVELS, Row};

/// Ordering of siblings within a level: larger values first, equal values by
/// name.
pub fn sibling_order(a_name: &str, a_value: u64, b_name: &str, b_value: u64) -> Ordering {
	b_value.cmp(&a_value).then_with(|| a_name.cmp(b_name))
}

/// Aggregate rows into a flow graph using the default configuration.
pub fn aggregate(rows: &[Row]) -> FlowData {
	aggregate_with(rows, &FlowConfig::default())
}

/// Per-category accumulator for one level.
#[derive(Default)]
struct Bucket<'a> {
	value: u64,
	/// Awards seen per parent category, used to resolve a single parent.
	parents: BTreeMap<&'a str, u64>,
	descriptions: BTreeSet<&'a str>,
}

impl Bucket<'_> {
	/// Parent carrying the most awards; ties go to the smallest name.
	fn resolved_parent(&self) -> Option<&str> {
		self.parents
			.iter()
			.max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
			.map(|(name, _)| *name)
	}

	fn category(&self) -> Option<String> {
		match self.descriptions.len() {
			1 => self.descriptions.first().map(|d| d.to_string()),
			_ => None,
		}
	}
}

/// What a child needs to know about its resolved parent.
struct ParentRef {
	id: String,
	value: u64,
	color: String,
}

/// Aggregate rows into a flow graph.
///
/// Empty input, or input where no row has a `group1`, yields an empty graph.
pub fn aggregate_with(rows: &[Row], config: &FlowConfig) -> FlowData {
	let grouped: Vec<&Row> = rows.iter().filter(|r| r.path_len() > 0).collect();
	if grouped.len() < rows.len() {
		warn!(
			"gradgraph: skipping {} rows without a group1 value",
			rows.len() - grouped.len()
		);
	}
	if grouped.is_empty() {
		return FlowData::default();
	}

	let total = grouped
		.iter()
		.fold(0u64, |sum, r| sum.saturating_add(r.awards));
	let root_color = config.palette.root_color.to_css();
	let mut nodes = vec![FlowNode {
		id: config.root_id.clone(),
		name: config.root_id.clone(),
		level: 0,
		render_depth: 0,
		rank: 0,
		value: total,
		parent_id: String::new(),
		parent_value: total,
		color: root_color.clone(),
		label: config.root_id.clone(),
		category: None,
	}];
	let mut links = Vec::new();

	let root = ParentRef {
		id: config.root_id.clone(),
		value: total,
		color: root_color,
	};
	let mut previous: HashMap<&str, ParentRef> = HashMap::new();
	let mut carried = 0;

	for level in 1..=GROUP_LEVELS {
		let mut buckets: BTreeMap<&str, Bucket> = BTreeMap::new();
		for row in &grouped {
			let Some(name) = row.path_group(level) else {
				continue;
			};
			let bucket = buckets.entry(name).or_default();
			bucket.value = bucket.value.saturating_add(row.awards);
			if let Some(parent) = row.path_group(level - 1) {
				let via = bucket.parents.entry(parent).or_default();
				*via = via.saturating_add(row.awards);
			}
			let desc = row.cip_desc.trim();
			if !desc.is_empty() {
				bucket.descriptions.insert(desc);
			}
		}
		if buckets.is_empty() {
			break;
		}

		let mut ranked: Vec<(&str, Bucket)> = buckets.into_iter().collect();
		ranked.sort_by(|a, b| sibling_order(a.0, a.1.value, b.0, b.1.value));
		let count = ranked.len();
		let mut current: HashMap<&str, ParentRef> = HashMap::with_capacity(count);

		for (rank, (name, bucket)) in ranked.into_iter().enumerate() {
			// Paths never skip a level, so only level-1 buckets lack a parent.
			let parent = bucket
				.resolved_parent()
				.and_then(|parent_name| previous.get(parent_name))
				.unwrap_or(&root);
			let color = if level == 1 {
				config.palette.level1_color(rank, count).to_css()
			} else {
				parent.color.clone()
			};
			let id = format!("{name}{level}");
			let offset = depth_offset(carried, rank, config.overflow_threshold);

			links.push(FlowLink {
				source_id: parent.id.clone(),
				target_id: id.clone(),
				value: bucket.value,
				parent_value: parent.value,
			});
			nodes.push(FlowNode {
				id: id.clone(),
				name: name.to_string(),
				level,
				render_depth: level + offset,
				rank,
				value: bucket.value,
				parent_id: parent.id.clone(),
				parent_value: parent.value,
				color: color.clone(),
				label: config.label_for(name),
				category: bucket.category(),
			});
			current.insert(
				name,
				ParentRef {
					id,
					value: bucket.value,
					color,
				},
			);
		}

		carried = carried_after(carried, count, config.overflow_threshold);
		previous = current;
	}

	debug!(
		"gradgraph: aggregated {} nodes, {} links from {} rows",
		nodes.len(),
		links.len(),
		grouped.len()
	);
	FlowData { nodes, links }
}
