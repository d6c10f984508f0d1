//! gradgraph: linked-chart data for degree awards across a university system.
//!
//! This crate turns flat degree-award records into the structures a charting
//! library renders (a multi-level flow graph plus donut, bar and trend
//! series) and holds the hover/selection state that keeps those views in
//! sync. Rendering itself is left to the host.
//!
//! Logging goes through the `log` facade; install whichever backend the host
//! uses.

pub mod components;

pub use components::degree_flow::{
	CategoryTotal, Color, DegreeSummary, FlowConfig, FlowData, FlowLink, FlowNode, GROUP_LEVELS,
	Highlight, PaletteConfig, Row, SelectedSlice, SeriesPoint, SharedSyncStore, SourceError,
	SubscriptionId, SyncEvent, SyncState, SyncStore, TrendSeries, YearTotal, aggregate,
	aggregate_with, bar, bar_with, campuses, coerce_awards, donut, donut_with, drill_down,
	filter_rows, fiscal_years, rows_from_json, sibling_order, trend,
};
