//! End-to-end flow: load rows, pre-filter, aggregate, and drive two views
//! through a shared sync store.

use std::cell::RefCell;
use std::rc::Rc;

use gradgraph::{
	DegreeSummary, Highlight, SyncEvent, SyncStore, aggregate, bar, donut, filter_rows,
	rows_from_json, trend,
};
use pretty_assertions::assert_eq;

const ROWS: &str = r#"[
	{ "FISCAL_YEAR": "Fiscal Year 2025", "CAMPUS": "UH Manoa", "CIP": "14.0801", "CIP_DESC": "Civil Engineering",
	  "GROUP1": "Engineering", "GROUP2": "Civil", "GROUP3": "", "GROUP4": "", "GROUP5": "",
	  "OUTCOME": "Bachelor's Degree", "AWARDS": "10" },
	{ "FISCAL_YEAR": "Fiscal Year 2025", "CAMPUS": "UH Manoa", "CIP": "14.0901", "CIP_DESC": "Computer Engineering",
	  "GROUP1": "Engineering", "GROUP2": "Computer", "GROUP3": "", "GROUP4": "", "GROUP5": "",
	  "OUTCOME": "Master's Degree", "AWARDS": 5 },
	{ "FISCAL_YEAR": "Fiscal Year 2025", "CAMPUS": "UH Manoa", "CIP": "26.0101", "CIP_DESC": "Biology",
	  "GROUP1": "Natural Sciences", "GROUP2": "", "GROUP3": "", "GROUP4": "", "GROUP5": "",
	  "OUTCOME": "Bachelor's Degree", "AWARDS": 7 },
	{ "FISCAL_YEAR": "Fiscal Year 2024", "CAMPUS": "UH Manoa", "CIP": "26.0101", "CIP_DESC": "Biology",
	  "GROUP1": "Natural Sciences", "GROUP2": "", "GROUP3": "", "GROUP4": "", "GROUP5": "",
	  "OUTCOME": "Bachelor's Degree", "AWARDS": 6 },
	{ "FISCAL_YEAR": "Fiscal Year 2025", "CAMPUS": "UH Hilo", "CIP": "52.0201", "CIP_DESC": "Business",
	  "GROUP1": "Business", "GROUP2": "", "GROUP3": "", "GROUP4": "", "GROUP5": "",
	  "OUTCOME": "Bachelor's Degree", "AWARDS": "n/a" }
]"#;

#[test]
fn campus_year_view() {
	let rows = rows_from_json(ROWS).unwrap();
	let current = filter_rows(&rows, Some("UH Manoa"), Some("Fiscal Year 2025"));

	let flow = aggregate(&current);
	assert_eq!(flow.total(), 22);
	let level1: Vec<(&str, u64)> = flow.level(1).map(|n| (n.name.as_str(), n.value)).collect();
	assert_eq!(level1, vec![("Engineering", 15), ("Natural Sciences", 7)]);
	assert_eq!(flow.level(2).count(), 2);

	let slices = donut(&current, None);
	assert_eq!(slices[0].color, flow.node("Engineering1").unwrap().color);

	let campus_rows = filter_rows(&rows, Some("UH Manoa"), None);
	let years: Vec<(u32, u64)> = trend(&campus_rows)
		.points
		.iter()
		.map(|p| (p.year, p.value))
		.collect();
	assert_eq!(years, vec![(2024, 6), (2025, 22)]);
}

#[test]
fn non_numeric_awards_count_as_zero() {
	let rows = rows_from_json(ROWS).unwrap();
	let hilo = filter_rows(&rows, Some("UH Hilo"), None);
	let flow = aggregate(&hilo);
	assert_eq!(flow.total(), 0);
	assert_eq!(flow.node("Business1").unwrap().value, 0);
}

#[test]
fn views_follow_the_shared_store() {
	let rows = rows_from_json(ROWS).unwrap();
	let current = filter_rows(&rows, Some("UH Manoa"), Some("Fiscal Year 2025"));
	let flow = aggregate(&current);

	let store = SyncStore::shared();
	let flow_highlight: Rc<RefCell<Vec<String>>> = Rc::default();
	let bar_names: Rc<RefCell<Vec<String>>> = Rc::default();

	{
		let sink = flow_highlight.clone();
		let nodes = flow.nodes.clone();
		store.borrow_mut().subscribe(move |state| {
			let highlighted = state.effective_highlight();
			*sink.borrow_mut() = nodes
				.iter()
				.filter(|n| highlighted.is_some_and(|h| h.matches(n.rank, &n.name, n.level)))
				.map(|n| n.id.clone())
				.collect();
		});
	}
	{
		let sink = bar_names.clone();
		let rows = current.clone();
		store.borrow_mut().subscribe(move |state| {
			*sink.borrow_mut() = bar(&rows, state.selected_slice.as_ref())
				.into_iter()
				.map(|p| p.name)
				.collect();
		});
	}

	store.borrow_mut().apply(SyncEvent::CampusChanged("UH Manoa".into()));

	// Donut hover on rank 1 lights the matching flow node.
	store.borrow_mut().apply(SyncEvent::Hover(Some(1)));
	assert_eq!(*flow_highlight.borrow(), vec!["Natural Sciences1".to_string()]);

	// Click in the flow view on a level-2 node.
	let computer = flow.node("Computer2").unwrap();
	store.borrow_mut().apply(SyncEvent::Select {
		index: computer.rank,
		name: computer.name.clone(),
		depth: computer.level,
	});
	assert_eq!(*bar_names.borrow(), vec!["Master's Degree".to_string()]);
	// Hover still wins.
	assert_eq!(*flow_highlight.borrow(), vec!["Natural Sciences1".to_string()]);

	store.borrow_mut().apply(SyncEvent::Hover(None));
	assert_eq!(*flow_highlight.borrow(), vec!["Computer2".to_string()]);

	let summary = DegreeSummary::build(&current, store.borrow().selected_slice()).unwrap();
	assert_eq!(summary.value, 5);
	assert_eq!(summary.share_label(), "22.727");

	store.borrow_mut().apply(SyncEvent::CampusChanged("UH Hilo".into()));
	assert!(store.borrow().selected_slice().is_none());
	assert!(flow_highlight.borrow().is_empty());
	assert_eq!(bar_names.borrow().len(), 2);
	assert!(matches!(store.borrow().effective_highlight(), None | Some(Highlight::Hovered(_))));
}
