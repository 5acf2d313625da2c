use anyhow::{Context, Result};

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use super::sources::{build_config, default_config_files};
use crate::cli::CliArgs;

/// Load configuration by combining config files, environment variables and
/// CLI arguments.
pub(crate) fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let config = build_config(&default_config_files())?;
	let mut raw: RawConfig = config
		.try_deserialize()
		.context("failed to deserialize configuration")?;
	raw.apply_cli_overrides(cli);
	raw.resolve()
}
