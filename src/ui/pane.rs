//! Pane identities, the dirty set, and the stateless pane renderer.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Clear, Widget};
use unicode_truncate::UnicodeTruncateStr;
use unicode_width::UnicodeWidthStr;

pub const ELLIPSIS: &str = "...";
pub const MORE_INDICATOR: &str = "... more ...";

/// The four independently rendered surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaneId {
	Input,
	Suggestions,
	Results,
	Preview,
}

impl PaneId {
	pub const ALL: [PaneId; 4] = [
		PaneId::Input,
		PaneId::Suggestions,
		PaneId::Results,
		PaneId::Preview,
	];

	const fn bit(self) -> u8 {
		match self {
			PaneId::Input => 1,
			PaneId::Suggestions => 1 << 1,
			PaneId::Results => 1 << 2,
			PaneId::Preview => 1 << 3,
		}
	}

	pub(crate) const fn slot(self) -> usize {
		match self {
			PaneId::Input => 0,
			PaneId::Suggestions => 1,
			PaneId::Results => 2,
			PaneId::Preview => 3,
		}
	}
}

/// Panes whose content changed since the last redraw.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirtySet(u8);

impl DirtySet {
	pub const fn empty() -> Self {
		Self(0)
	}

	pub const fn all() -> Self {
		Self(0b1111)
	}

	pub fn insert(&mut self, pane: PaneId) {
		self.0 |= pane.bit();
	}

	pub fn contains(self, pane: PaneId) -> bool {
		self.0 & pane.bit() != 0
	}

	pub fn is_empty(self) -> bool {
		self.0 == 0
	}

	pub fn iter(self) -> impl Iterator<Item = PaneId> {
		PaneId::ALL.into_iter().filter(move |pane| self.contains(*pane))
	}
}

impl<const N: usize> From<[PaneId; N]> for DirtySet {
	fn from(panes: [PaneId; N]) -> Self {
		let mut set = Self::empty();
		for pane in panes {
			set.insert(pane);
		}
		set
	}
}

/// Which end of an over-wide line is kept.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TruncationStyle {
	/// Keep the start, ellipsis at the end.
	#[default]
	Right,
	/// Keep the end, ellipsis at the start.
	Left,
}

/// Fit `text` into `max_width` columns, marking the cut with [`ELLIPSIS`].
pub fn truncate(text: &str, max_width: usize, style: TruncationStyle) -> String {
	if text.width() <= max_width {
		return text.to_string();
	}

	let ellipsis_width = ELLIPSIS.width();
	if max_width <= ellipsis_width {
		return ELLIPSIS[..max_width].to_string();
	}

	let available = max_width - ellipsis_width;
	match style {
		TruncationStyle::Right => {
			let (slice, _) = text.unicode_truncate(available);
			format!("{slice}{ELLIPSIS}")
		}
		TruncationStyle::Left => {
			let (slice, _) = text.unicode_truncate_start(available);
			format!("{ELLIPSIS}{slice}")
		}
	}
}

/// Last-rendered content of one pane.
///
/// Rendering clears the target rectangle first, so drawing the same view twice
/// produces the same grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaneView {
	/// Header row, always bold and underlined.
	pub title: Option<String>,
	pub lines: Vec<String>,
	/// Index into `lines` drawn in reverse video.
	pub highlight: Option<usize>,
}

impl PaneView {
	pub fn new(lines: Vec<String>) -> Self {
		Self {
			title: None,
			lines,
			highlight: None,
		}
	}

	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = Some(title.into());
		self
	}

	pub fn with_highlight(mut self, highlight: Option<usize>) -> Self {
		self.highlight = highlight;
		self
	}

	pub fn is_blank(&self) -> bool {
		self.title.is_none() && self.lines.is_empty()
	}
}

impl Widget for &PaneView {
	fn render(self, area: Rect, buf: &mut Buffer) {
		Clear.render(area, buf);
		if area.is_empty() {
			return;
		}

		let width = usize::from(area.width);
		let mut rows = area.rows();

		if let Some(title) = &self.title
			&& let Some(row) = rows.next()
		{
			let style = Style::new().add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
			put_line(buf, row, title, width, style);
		}

		let rows: Vec<Rect> = rows.collect();
		let overflow = self.lines.len() > rows.len();
		let visible = if overflow {
			rows.len().saturating_sub(1)
		} else {
			self.lines.len()
		};

		for (idx, (line, row)) in self.lines.iter().zip(&rows).take(visible).enumerate() {
			let style = if self.highlight == Some(idx) {
				Style::new().add_modifier(Modifier::REVERSED)
			} else {
				Style::new()
			};
			put_line(buf, *row, line, width, style);
		}

		if overflow && let Some(row) = rows.last() {
			put_line(buf, *row, MORE_INDICATOR, width, Style::new());
		}
	}
}

fn put_line(buf: &mut Buffer, row: Rect, text: &str, width: usize, style: Style) {
	let text = truncate(text, width, TruncationStyle::Right);
	buf.set_stringn(row.x, row.y, text, width, style);
}

#[cfg(test)]
mod tests {
	use super::*;

	fn grid(buf: &Buffer) -> String {
		let area = buf.area;
		let mut lines = Vec::new();
		for y in area.top()..area.bottom() {
			let mut line = String::new();
			for x in area.left()..area.right() {
				line.push_str(buf[(x, y)].symbol());
			}
			lines.push(line.trim_end().to_string());
		}
		while lines.last().is_some_and(|line| line.is_empty()) {
			lines.pop();
		}
		lines.join("\n")
	}

	fn render(view: &PaneView, area: Rect) -> Buffer {
		let mut buf = Buffer::empty(area);
		view.render(area, &mut buf);
		buf
	}

	#[test]
	fn truncation_keeps_requested_end() {
		assert_eq!(truncate("abcdefgh", 8, TruncationStyle::Right), "abcdefgh");
		assert_eq!(truncate("abcdefgh", 6, TruncationStyle::Right), "abc...");
		assert_eq!(truncate("abcdefgh", 6, TruncationStyle::Left), "...fgh");
		assert_eq!(truncate("abcdefgh", 2, TruncationStyle::Right), "..");
	}

	#[test]
	fn renders_title_lines_and_highlight() {
		let view = PaneView::new(vec!["notes.txt".into(), "report.txt".into()])
			.with_title("Files:")
			.with_highlight(Some(1));
		let buf = render(&view, Rect::new(0, 0, 20, 4));

		insta::assert_snapshot!(grid(&buf), @r"
Files:
notes.txt
report.txt
");
		let title = buf[(0, 0)].modifier;
		assert!(title.contains(Modifier::BOLD | Modifier::UNDERLINED));
		assert!(!buf[(0, 1)].modifier.contains(Modifier::REVERSED));
		assert!(buf[(0, 2)].modifier.contains(Modifier::REVERSED));
	}

	#[test]
	fn overflowing_lines_end_with_more_indicator() {
		let lines = (1..=10).map(|n| format!("{n}:line")).collect();
		let view = PaneView::new(lines).with_title("notes.txt");
		let buf = render(&view, Rect::new(0, 0, 20, 4));

		insta::assert_snapshot!(grid(&buf), @r"
notes.txt
1:line
2:line
... more ...
");
	}

	#[test]
	fn wide_lines_are_cut_with_ellipsis() {
		let view = PaneView::new(vec!["a very long line of text".into()]);
		let buf = render(&view, Rect::new(0, 0, 10, 1));
		assert_eq!(grid(&buf), "a very ...");
	}

	#[test]
	fn rendering_is_idempotent() {
		let view = PaneView::new(vec!["alpha".into(), "beta".into(), "gamma".into()])
			.with_title("t")
			.with_highlight(Some(0));
		let area = Rect::new(2, 1, 12, 3);
		let mut buf = Buffer::empty(Rect::new(0, 0, 16, 5));
		view.render(area, &mut buf);
		let first = buf.clone();
		view.render(area, &mut buf);
		assert_eq!(first, buf);
	}

	#[test]
	fn rendering_clears_previous_content() {
		let area = Rect::new(0, 0, 10, 2);
		let mut buf = Buffer::empty(area);
		PaneView::new(vec!["something".into()]).render(area, &mut buf);
		PaneView::default().render(area, &mut buf);
		assert_eq!(grid(&buf), "");
	}

	#[test]
	fn dirty_set_tracks_membership() {
		let mut dirty = DirtySet::empty();
		assert!(dirty.is_empty());
		dirty.insert(PaneId::Results);
		dirty.insert(PaneId::Preview);
		assert!(dirty.contains(PaneId::Results));
		assert!(!dirty.contains(PaneId::Input));
		assert_eq!(
			dirty.iter().collect::<Vec<_>>(),
			vec![PaneId::Results, PaneId::Preview]
		);
		assert_eq!(dirty, DirtySet::from([PaneId::Preview, PaneId::Results]));
		assert_eq!(DirtySet::all().iter().count(), 4);
	}
}
