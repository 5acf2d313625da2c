use ratatui::layout::Rect;

use super::pane::PaneId;

pub const MIN_WIDTH: u16 = 80;
pub const MIN_HEIGHT: u16 = 24;

/// Label drawn in front of the query.
pub const INPUT_LABEL: &str = "Search: ";
/// Header row of the result pane.
pub const RESULTS_TITLE: &str = "Files:";

const INPUT_WIDTH: u16 = 30;
const INPUT_HEIGHT: u16 = 7;
const RESULTS_HEIGHT: u16 = 11;

/// Fixed pane geometry, computed once from the terminal size at startup.
///
/// ```text
/// +--------------------------+---------------------------------+
/// | Search: query            | Files:                          |
/// |         suggestion 0     | path 0                          |
/// |         ...              | ...                             |
/// |                          | path 9                          |
/// +--------------------------+---------------------------------+
/// | path of selected file                                      |
/// | 12:matching line                                           |
/// +------------------------------------------------------------+
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
	pub input: Rect,
	pub suggestions: Rect,
	pub results: Rect,
	pub preview: Rect,
}

impl Layout {
	/// Lay out the panes inside `area`, or `None` below 80x24.
	pub fn compute(area: Rect) -> Option<Self> {
		if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
			return None;
		}

		let label_width = INPUT_LABEL.len() as u16;
		let input = Rect::new(area.x, area.y, INPUT_WIDTH, 1);
		let suggestions = Rect::new(
			area.x + label_width,
			area.y + 1,
			INPUT_WIDTH - label_width,
			INPUT_HEIGHT - 1,
		);
		let results = Rect::new(
			area.x + INPUT_WIDTH,
			area.y,
			area.width - INPUT_WIDTH,
			RESULTS_HEIGHT,
		);
		// one blank row separates the preview from the panes above
		let preview_top = RESULTS_HEIGHT + 1;
		let preview = Rect::new(
			area.x,
			area.y + preview_top,
			area.width,
			area.height - preview_top,
		);

		Some(Self {
			input,
			suggestions,
			results,
			preview,
		})
	}

	pub fn area(&self, pane: PaneId) -> Rect {
		match pane {
			PaneId::Input => self.input,
			PaneId::Suggestions => self.suggestions,
			PaneId::Results => self.results,
			PaneId::Preview => self.preview,
		}
	}

	/// Maximum number of suggestions requested from the predictor.
	pub fn suggestion_capacity(&self) -> usize {
		usize::from(self.suggestions.height)
	}

	/// Maximum number of hits requested from the index; one row holds the title.
	pub fn result_capacity(&self) -> usize {
		usize::from(self.results.height.saturating_sub(1))
	}

	/// Columns available for the query after the label.
	pub fn query_width(&self) -> usize {
		usize::from(self.input.width).saturating_sub(INPUT_LABEL.len())
	}
}
