//! Configuration loading and resolution.
//!
//! Values are layered from config files, `ISEARCH__SECTION__KEY` environment
//! variables and finally the command line. [`load`] returns a validated
//! [`ResolvedConfig`] used by the startup workflow.

mod loader;
mod raw;
mod resolved;
mod sources;

pub(crate) use loader::load;
pub(crate) use resolved::ResolvedConfig;
