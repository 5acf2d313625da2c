//! The interactive search state machine.
//!
//! Each [`SessionEvent`] is applied by [`Session::handle`], which mutates the
//! query, suggestion and result state and records the panes it touched in a
//! [`DirtySet`]. [`Session::refresh_views`] then rebuilds the cached
//! [`PaneView`] of exactly those panes, and [`Session::draw`] paints the cached
//! views. Editing events re-run the search; navigation events never do.

use ratatui::Frame;
use tracing::{debug, warn};

use super::event::{SessionEvent, is_printable};
use super::layout::{INPUT_LABEL, Layout, RESULTS_TITLE};
use super::pane::{DirtySet, PaneId, PaneView, TruncationStyle, truncate};
use super::preview::Preview;
use super::results::ResultList;
use super::suggestions::{SuggestionList, complete};
use crate::autocomplete::Predictor;
use crate::index::SearchIndex;
use crate::locator::ContentLocator;

/// The passive services the session queries.
pub struct Collaborators {
	pub index: Box<dyn SearchIndex>,
	pub predictor: Box<dyn Predictor>,
	pub locator: Box<dyn ContentLocator>,
}

/// Whether the event loop keeps reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
	Continue,
	Exit,
}

pub struct Session {
	query: String,
	suggestions: SuggestionList,
	results: ResultList,
	preview: Preview,
	layout: Layout,
	services: Collaborators,
	dirty: DirtySet,
	views: [PaneView; 4],
}

impl Session {
	pub fn new(layout: Layout, services: Collaborators) -> Self {
		Self {
			query: String::new(),
			suggestions: SuggestionList::default(),
			results: ResultList::default(),
			preview: Preview::Empty,
			layout,
			services,
			dirty: DirtySet::all(),
			views: Default::default(),
		}
	}

	pub fn query(&self) -> &str {
		&self.query
	}

	pub fn suggestions(&self) -> &SuggestionList {
		&self.suggestions
	}

	pub fn results(&self) -> &ResultList {
		&self.results
	}

	pub fn preview(&self) -> &Preview {
		&self.preview
	}

	/// Panes changed since the last [`Session::refresh_views`].
	pub fn dirty(&self) -> DirtySet {
		self.dirty
	}

	/// Last-rendered content of `pane`.
	pub fn view(&self, pane: PaneId) -> &PaneView {
		&self.views[pane.slot()]
	}

	/// Apply one event to the session state.
	pub fn handle(&mut self, event: SessionEvent) -> Flow {
		match event {
			SessionEvent::Insert(ch) => {
				if !is_printable(ch) {
					return Flow::Continue;
				}
				self.query.push(ch);
				self.query_edited();
			}
			SessionEvent::Backspace => {
				self.query.pop();
				self.query_edited();
			}
			SessionEvent::SuggestionDown => {
				if !self.suggestions.is_empty() {
					self.suggestions.select_next();
					self.dirty.insert(PaneId::Suggestions);
				}
			}
			SessionEvent::SuggestionUp => {
				if !self.suggestions.is_empty() {
					self.suggestions.select_previous();
					self.dirty.insert(PaneId::Suggestions);
				}
			}
			SessionEvent::Commit => match self.suggestions.selected() {
				Some(selected) => {
					self.query = selected.to_string();
					self.suggestions.dismiss();
					self.dirty.insert(PaneId::Input);
					self.dirty.insert(PaneId::Suggestions);
					self.research();
				}
				None => {
					self.suggestions.dismiss();
					self.dirty.insert(PaneId::Suggestions);
				}
			},
			SessionEvent::ResultPrevious => {
				if !self.results.is_empty() {
					self.results.select_previous();
					self.selection_moved();
				}
			}
			SessionEvent::ResultNext => {
				if !self.results.is_empty() {
					self.results.select_next();
					self.selection_moved();
				}
			}
			SessionEvent::Interrupt => return Flow::Exit,
		}
		Flow::Continue
	}

	fn query_edited(&mut self) {
		let completion = complete(
			self.services.predictor.as_ref(),
			&self.query,
			self.layout.suggestion_capacity(),
		);
		self.suggestions.rebuild(completion);
		self.dirty.insert(PaneId::Input);
		self.dirty.insert(PaneId::Suggestions);
		self.research();
	}

	fn selection_moved(&mut self) {
		self.refresh_preview();
		self.dirty.insert(PaneId::Results);
		self.dirty.insert(PaneId::Preview);
	}

	/// Replace the result list with the ranked hits for the current query.
	fn research(&mut self) {
		let query = self.query.to_lowercase();
		let hits = match self
			.services
			.index
			.search(&query, self.layout.result_capacity())
		{
			Ok(hits) => hits,
			Err(err) => {
				warn!(error = %err, query = %query, "search failed");
				Vec::new()
			}
		};

		let paths: Vec<String> = hits
			.into_iter()
			.filter_map(|hit| match self.services.index.metadata(hit.doc) {
				Ok(meta) => Some(meta.path),
				Err(err) => {
					warn!(error = %err, doc = ?hit.doc, "hit without metadata");
					None
				}
			})
			.collect();
		debug!(query = %query, hits = paths.len(), "search refreshed");

		self.results.replace(paths);
		self.refresh_preview();
		self.dirty.insert(PaneId::Results);
		self.dirty.insert(PaneId::Preview);
	}

	fn refresh_preview(&mut self) {
		self.preview = match self.results.selected() {
			Some(path) => Preview::load(self.services.locator.as_ref(), path, &self.query),
			None => Preview::Empty,
		};
	}

	/// Rebuild the cached views of the dirty panes and return which ones changed.
	pub fn refresh_views(&mut self) -> DirtySet {
		let dirty = std::mem::take(&mut self.dirty);
		for pane in dirty.iter() {
			self.views[pane.slot()] = self.build_view(pane);
		}
		dirty
	}

	fn build_view(&self, pane: PaneId) -> PaneView {
		match pane {
			PaneId::Input => {
				let query = truncate(&self.query, self.layout.query_width(), TruncationStyle::Left);
				PaneView::new(vec![format!("{INPUT_LABEL}{query}")])
			}
			PaneId::Suggestions => PaneView::new(self.suggestions.entries().to_vec())
				.with_highlight(self.suggestions.cursor()),
			PaneId::Results if self.results.is_empty() => PaneView::default(),
			PaneId::Results => PaneView::new(self.results.paths().to_vec())
				.with_title(RESULTS_TITLE)
				.with_highlight(self.results.cursor()),
			PaneId::Preview => match &self.preview {
				Preview::Matches { path, lines } => {
					PaneView::new(lines.iter().map(|line| line.display()).collect())
						.with_title(path.clone())
				}
				Preview::Empty | Preview::Unavailable { .. } => PaneView::default(),
			},
		}
	}

	/// Paint every pane's cached view, clipped to the current frame.
	pub fn draw(&self, frame: &mut Frame) {
		let frame_area = frame.area();
		for pane in PaneId::ALL {
			let area = self.layout.area(pane).intersection(frame_area);
			if area.is_empty() {
				continue;
			}
			frame.render_widget(self.view(pane), area);
		}
	}
}
