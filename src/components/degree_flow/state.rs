//! Hover and selection state shared between linked views.
//!
//! Each view adapter holds a [`SharedSyncStore`], forwards its pointer events
//! as [`SyncEvent`]s and subscribes to re-derive its own highlight from the
//! store's [`Highlight`]. Hover always wins over selection while it lasts;
//! once the pointer leaves, the selection (if any) is highlighted again.
//!
//! All operations are total. An index that no longer matches anything simply
//! highlights nothing.

use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use serde::{Deserialize, Serialize};

/// A clicked slice or node.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct SelectedSlice {
	/// Rank of the node among the ordered siblings of its level.
	pub index: usize,
	/// Untruncated category value.
	pub name: String,
	/// Level of the node; 1 for donut slices.
	pub depth: usize,
}

impl SelectedSlice {
	/// Whether this selection refers to the node at `rank` among the level
	/// `level` siblings, named `name`.
	///
	/// The name is the node's identity whenever both sides carry one, so a
	/// rank left stale by re-ranked data matches nothing. The rank is only
	/// compared when a name is missing.
	pub fn refers_to(&self, rank: usize, name: &str, level: usize) -> bool {
		if self.depth != level {
			return false;
		}
		if self.name.is_empty() || name.is_empty() {
			self.index == rank
		} else {
			self.name == name
		}
	}

	/// Whether `other` refers to the same node.
	pub fn same_node(&self, other: &SelectedSlice) -> bool {
		self.refers_to(other.index, &other.name, other.depth)
	}
}

/// Transient interaction state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncState {
	/// Rank among the level-1 siblings of the hovered slice or node.
	pub hovered_index: Option<usize>,
	pub selected_slice: Option<SelectedSlice>,
}

/// What the views should currently emphasize.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Highlight<'a> {
	/// A level-1 sibling under the pointer.
	Hovered(usize),
	/// The clicked node, shown while nothing is hovered.
	Selected(&'a SelectedSlice),
}

impl Highlight<'_> {
	/// Whether the element at `rank` among level `level` siblings, named
	/// `name`, is the highlighted one.
	pub fn matches(&self, rank: usize, name: &str, level: usize) -> bool {
		match self {
			Highlight::Hovered(index) => level == 1 && *index == rank,
			Highlight::Selected(slice) => slice.refers_to(rank, name, level),
		}
	}
}

impl SyncState {
	/// Hover if active, otherwise the selection.
	pub fn effective_highlight(&self) -> Option<Highlight<'_>> {
		self.hovered_index
			.map(Highlight::Hovered)
			.or_else(|| self.selected_slice.as_ref().map(Highlight::Selected))
	}
}

/// Input from a view adapter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SyncEvent {
	/// Pointer entered (`Some`) or left (`None`) a level-1 element.
	Hover(Option<usize>),
	/// Click on a slice or node.
	Select {
		index: usize,
		name: String,
		depth: usize,
	},
	/// The page switched to showing `campus`.
	CampusChanged(String),
}

/// Handle returned by [`SyncStore::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&SyncState)>;

/// Store shared by the views of one comparison session.
#[derive(Default)]
pub struct SyncStore {
	state: SyncState,
	campus: Option<String>,
	subscribers: Vec<(SubscriptionId, Subscriber)>,
	next_id: u64,
}

/// Single-threaded shared handle given to each view adapter.
pub type SharedSyncStore = Rc<RefCell<SyncStore>>;

impl std::fmt::Debug for SyncStore {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("SyncStore")
			.field("state", &self.state)
			.field("campus", &self.campus)
			.field("subscribers", &self.subscribers.len())
			.finish()
	}
}

impl SyncStore {
	pub fn new() -> Self {
		Self::default()
	}

	/// A fresh store wrapped for sharing between adapters.
	pub fn shared() -> SharedSyncStore {
		Rc::new(RefCell::new(Self::new()))
	}

	pub fn state(&self) -> &SyncState {
		&self.state
	}

	pub fn hovered_index(&self) -> Option<usize> {
		self.state.hovered_index
	}

	pub fn selected_slice(&self) -> Option<&SelectedSlice> {
		self.state.selected_slice.as_ref()
	}

	pub fn effective_highlight(&self) -> Option<Highlight<'_>> {
		self.state.effective_highlight()
	}

	/// Campus most recently passed to [`SyncStore::observe_campus`].
	pub fn campus(&self) -> Option<&str> {
		self.campus.as_deref()
	}

	/// Register a callback run with the new state after every change.
	///
	/// Callbacks must not access the store through a [`SharedSyncStore`]
	/// handle; the store is mutably borrowed while they run.
	pub fn subscribe(&mut self, callback: impl FnMut(&SyncState) + 'static) -> SubscriptionId {
		let id = SubscriptionId(self.next_id);
		self.next_id += 1;
		self.subscribers.push((id, Box::new(callback)));
		id
	}

	/// Remove a subscriber. Returns whether it was registered.
	pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
		let before = self.subscribers.len();
		self.subscribers.retain(|(sid, _)| *sid != id);
		self.subscribers.len() != before
	}

	/// Replace the hovered index. No range validation.
	pub fn set_hovered(&mut self, index: Option<usize>) {
		if self.state.hovered_index == index {
			return;
		}
		self.state.hovered_index = index;
		self.notify();
	}

	/// Select a node, or clear the selection if it already refers to it.
	pub fn toggle_selected(&mut self, index: usize, name: impl Into<String>, depth: usize) {
		let slice = SelectedSlice {
			index,
			name: name.into(),
			depth,
		};
		let same = self
			.state
			.selected_slice
			.as_ref()
			.is_some_and(|current| current.same_node(&slice));
		if same {
			debug!("gradgraph: cleared selection {:?}", slice.name);
			self.state.selected_slice = None;
		} else {
			debug!("gradgraph: selected {:?} at depth {}", slice.name, slice.depth);
			self.state.selected_slice = Some(slice);
		}
		self.notify();
	}

	/// Drop the selection; hover is left alone.
	pub fn reset_on_campus_change(&mut self) {
		if self.state.selected_slice.take().is_some() {
			self.notify();
		}
	}

	/// Record the campus being shown. Switching to a different campus than the
	/// one last observed clears the selection.
	pub fn observe_campus(&mut self, campus: &str) {
		if self.campus.as_deref() == Some(campus) {
			return;
		}
		let first = self.campus.replace(campus.to_string()).is_none();
		if !first {
			debug!("gradgraph: campus changed to {campus:?}");
			self.reset_on_campus_change();
		}
	}

	/// Dispatch an event from a view adapter.
	pub fn apply(&mut self, event: SyncEvent) {
		match event {
			SyncEvent::Hover(index) => self.set_hovered(index),
			SyncEvent::Select { index, name, depth } => self.toggle_selected(index, name, depth),
			SyncEvent::CampusChanged(campus) => self.observe_campus(&campus),
		}
	}

	fn notify(&mut self) {
		for (_, callback) in &mut self.subscribers {
			callback(&self.state);
		}
	}
}
