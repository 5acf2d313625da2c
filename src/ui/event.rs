use std::io;

use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// One discrete input the session reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
	/// Printable ASCII character typed into the query.
	Insert(char),
	Backspace,
	SuggestionDown,
	SuggestionUp,
	/// Accept the highlighted suggestion, or dismiss the list when none is.
	Commit,
	ResultPrevious,
	ResultNext,
	Interrupt,
}

impl SessionEvent {
	/// Map a key press; keys the session does not handle map to `None`.
	pub fn from_key(key: KeyEvent) -> Option<Self> {
		if key.kind != KeyEventKind::Press {
			return None;
		}
		let control = key.modifiers.contains(KeyModifiers::CONTROL);
		let plain = !control && !key.modifiers.contains(KeyModifiers::ALT);
		match key.code {
			KeyCode::Char('c') if control => Some(SessionEvent::Interrupt),
			KeyCode::Char(ch) if plain && is_printable(ch) => Some(SessionEvent::Insert(ch)),
			KeyCode::Backspace => Some(SessionEvent::Backspace),
			KeyCode::Down => Some(SessionEvent::SuggestionDown),
			KeyCode::Up => Some(SessionEvent::SuggestionUp),
			KeyCode::Enter => Some(SessionEvent::Commit),
			KeyCode::Left => Some(SessionEvent::ResultPrevious),
			KeyCode::Right => Some(SessionEvent::ResultNext),
			_ => None,
		}
	}
}

pub(crate) fn is_printable(ch: char) -> bool {
	(' '..='~').contains(&ch)
}

/// Blocking, single-producer source of session events.
pub trait EventSource {
	/// Wait for the next event the session handles.
	fn next_event(&mut self) -> io::Result<SessionEvent>;
}

/// Reads key presses from the controlling terminal.
#[derive(Debug, Default)]
pub struct TerminalEvents;

impl EventSource for TerminalEvents {
	fn next_event(&mut self) -> io::Result<SessionEvent> {
		loop {
			if let Event::Key(key) = event::read()?
				&& let Some(event) = SessionEvent::from_key(key)
			{
				return Ok(event);
			}
		}
	}
}
