//! Degree-award aggregation and linked-view state.
//!
//! Turns flat award rows into:
//! - a five-level flow graph (nodes and links) with per-branch coloring and
//!   overflow placement for very wide levels
//! - donut, outcome bar and trend series whose level-1 colors match the graph
//! - a summary of the selected node
//!
//! and keeps hover/selection synchronized between independently rendered
//! views through a subscribable store.
//!
//! # Example
//!
//! ```
//! use gradgraph::{Row, SyncStore, aggregate, donut};
//!
//! let rows = vec![
//!     Row { group1: "Arts".into(), group2: Some("Music".into()), awards: 4, ..Default::default() },
//!     Row { group1: "Science".into(), awards: 9, ..Default::default() },
//! ];
//!
//! let flow = aggregate(&rows);
//! assert_eq!(flow.total(), 13);
//!
//! let slices = donut(&rows, None);
//! assert_eq!(slices[1].name, "Arts");
//! assert_eq!(slices[1].color, flow.node("Arts1").unwrap().color);
//!
//! let mut store = SyncStore::new();
//! store.toggle_selected(1, "Arts", 1);
//! let drilled = donut(&rows, store.selected_slice());
//! assert_eq!(drilled.len(), 1);
//! assert_eq!(drilled[0].color, slices[1].color);
//! ```

mod config;
mod error;
pub mod hierarchy;
pub mod overflow;
pub mod proportional;
pub mod source;
mod state;
mod summary;
pub mod theme;
mod types;

pub use config::FlowConfig;
pub use error::SourceError;
pub use hierarchy::{aggregate, aggregate_with, sibling_order};
pub use proportional::{TrendSeries, bar, bar_with, donut, donut_with, drill_down, trend};
pub use source::{campuses, filter_rows, fiscal_years, rows_from_json};
pub use state::{
	Highlight, SelectedSlice, SharedSyncStore, SubscriptionId, SyncEvent, SyncState, SyncStore,
};
pub use summary::{CategoryTotal, DegreeSummary};
pub use theme::{Color, PaletteConfig};
pub use types::{FlowData, FlowLink, FlowNode, GROUP_LEVELS, Row, SeriesPoint, YearTotal, coerce_awards};
