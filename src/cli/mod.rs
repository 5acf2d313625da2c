mod args;

pub(crate) use args::{CliArgs, StartupAction, parse_cli};
