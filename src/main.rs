mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::parse_cli;
use workflow::StartupWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();
	let resolved = settings::load(&cli)?;

	isearch::logging::initialize(&resolved.log_file, &resolved.log_filter);
	tracing::info!(action = ?cli.action(), files_dir = %resolved.files_dir.display(), "starting isearch");

	StartupWorkflow::new(resolved, cli.action()).run()
}
