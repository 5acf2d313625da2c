//! Core crate exports for the `isearch` search-as-you-type terminal interface.
//!
//! The interactive [`ui::Session`] drives four panes (query input, autocomplete
//! suggestions, ranked files, matched-line preview) on top of three passive
//! collaborators: a [`index::SearchIndex`], an [`autocomplete::Predictor`] and a
//! [`locator::ContentLocator`]. The binary wires concrete implementations of
//! each and hands them to the session.

pub mod app_dirs;
pub mod autocomplete;
pub mod corpus;
pub mod index;
pub mod locator;
pub mod logging;
pub mod ui;

pub use autocomplete::{AutocompleteError, NgramModel, Predictor};
pub use index::{DocId, DocMetadata, IndexStats, SearchHit, SearchIndex, TantivyIndex};
pub use locator::{ContentLocator, FileLocator, LineMatch, LocateError};
pub use ui::{Collaborators, Session, SessionEvent, run};
