use anyhow::{Context, Result};
use ratatui::Terminal;
use ratatui::backend::Backend;
use ratatui::crossterm::terminal;
use ratatui::layout::Rect;
use tracing::{debug, info, warn};

use super::event::{EventSource, TerminalEvents};
use super::layout::{Layout, MIN_HEIGHT, MIN_WIDTH};
use super::session::{Collaborators, Flow, Session};

/// Run the interactive session on the controlling terminal until interrupted.
pub fn run(services: Collaborators) -> Result<()> {
	let (width, height) = terminal::size().context("failed to query terminal size")?;
	if Layout::compute(Rect::new(0, 0, width, height)).is_none() {
		warn!(
			width,
			height,
			min_width = MIN_WIDTH,
			min_height = MIN_HEIGHT,
			"terminal too small; not starting"
		);
		return Ok(());
	}

	let mut terminal = ratatui::init();
	let result = terminal
		.clear()
		.map_err(anyhow::Error::from)
		.and_then(|()| run_with(&mut terminal, &mut TerminalEvents, services));
	ratatui::restore();
	result
}

/// Drive a session on any backend, reading events from `events`.
///
/// Each event is handled and its dirty panes drawn before the next one is read.
pub fn run_with<B: Backend>(
	terminal: &mut Terminal<B>,
	events: &mut impl EventSource,
	services: Collaborators,
) -> Result<()> {
	let size = terminal.size()?;
	let Some(layout) = Layout::compute(Rect::new(0, 0, size.width, size.height)) else {
		warn!(width = size.width, height = size.height, "terminal too small; not starting");
		return Ok(());
	};

	let mut session = Session::new(layout, services);
	session.refresh_views();
	terminal.draw(|frame| session.draw(frame))?;
	info!("session started");

	loop {
		let event = events.next_event().context("failed to read terminal input")?;
		if session.handle(event) == Flow::Exit {
			break;
		}
		let dirty = session.refresh_views();
		if dirty.is_empty() {
			continue;
		}
		debug!(?event, ?dirty, "redrawing");
		terminal.draw(|frame| session.draw(frame))?;
	}

	info!("session ended");
	Ok(())
}
