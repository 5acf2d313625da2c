//! Interactive terminal front-end for incremental search.
//!
//! [`Session`] owns the query, suggestion and result state and reacts to one
//! [`SessionEvent`] at a time. The [`runtime`] module pumps terminal input into
//! the session and redraws the panes it marks dirty; [`pane`] holds the
//! stateless renderer every pane shares.

mod event;
#[cfg(test)]
mod fakes;
pub mod layout;
pub mod pane;
mod preview;
mod results;
mod runtime;
mod session;
mod suggestions;

pub use event::{EventSource, SessionEvent, TerminalEvents};
pub use layout::Layout;
pub use pane::{DirtySet, PaneId, PaneView};
pub use preview::Preview;
pub use results::ResultList;
pub use runtime::{run, run_with};
pub use session::{Collaborators, Flow, Session};
pub use suggestions::{Completion, SuggestionList, complete};
