use std::fmt::Write;
use std::path::PathBuf;

use clap::{
	ColorChoice, Parser, ValueEnum,
	builder::{
		Styles,
		styling::{AnsiColor, Effects},
	},
};
use isearch::app_dirs;

/// Produce the full version banner including the config and log file locations.
fn long_version() -> &'static str {
	let describe = |path: anyhow::Result<PathBuf>| match path {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};

	let mut details = format!("isearch {}", env!("CARGO_PKG_VERSION"));
	let _ = writeln!(details);
	let _ = writeln!(details, "config file: {}", describe(app_dirs::config_file()));
	let _ = writeln!(details, "default log file: {}", describe(app_dirs::default_log_file()));

	Box::leak(details.into_boxed_str())
}

/// Create the clap styles used for custom colour output.
fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Yellow.on_default())
}

/// Parse command line arguments into the strongly typed [`CliArgs`] structure.
pub(crate) fn parse_cli() -> CliArgs {
	CliArgs::parse()
}

#[derive(Parser, Debug)]
#[command(
	name = "isearch",
	version,
	long_version = long_version(),
	about = "Search-as-you-type over a local document collection",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
/// Command-line arguments accepted by the `isearch` binary.
pub(crate) struct CliArgs {
	#[arg(
		value_enum,
		value_name = "ACTION",
		help = "Rebuild persisted state or reuse it (default: keep)"
	)]
	pub(crate) action: Option<StartupAction>,
	#[arg(
		value_name = "FILES_DIR",
		help = "Directory holding the source documents (default: dataset/files)"
	)]
	pub(crate) files_dir: Option<PathBuf>,
}

impl CliArgs {
	pub(crate) fn action(&self) -> StartupAction {
		self.action.unwrap_or_default()
	}
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
/// What to do with the index, model and manifest left by a previous run.
pub(crate) enum StartupAction {
	/// Delete them and rebuild from the source documents.
	Reload,
	#[default]
	Keep,
}

#[cfg(test)]
mod tests {
	use clap::CommandFactory;

	use super::*;

	fn parse(args: &[&str]) -> Result<CliArgs, clap::Error> {
		CliArgs::try_parse_from(std::iter::once("isearch").chain(args.iter().copied()))
	}

	#[test]
	fn command_is_well_formed() {
		CliArgs::command().debug_assert();
	}

	#[test]
	fn defaults_to_keeping_state() {
		let parsed = parse(&[]).unwrap();
		assert_eq!(parsed.action(), StartupAction::Keep);
		assert_eq!(parsed.files_dir, None);
	}

	#[test]
	fn accepts_reload_and_a_directory() {
		let parsed = parse(&["reload", "corpus/docs"]).unwrap();
		assert_eq!(parsed.action(), StartupAction::Reload);
		assert_eq!(parsed.files_dir, Some(PathBuf::from("corpus/docs")));
	}

	#[test]
	fn rejects_unknown_actions() {
		let err = parse(&["refresh"]).unwrap_err();
		assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
	}
}
