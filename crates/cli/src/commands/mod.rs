mod cache;
mod render;
mod run;

use anyhow::Result;
use notedraft::DraftError;

use crate::cli::{Cli, Commands, RunArgs};

pub async fn dispatch(cli: Cli) -> Result<()> {
	let Cli { format, settings, command, .. } = cli;

	match command.unwrap_or_else(|| Commands::Run(RunArgs::default())) {
		Commands::Run(args) => run::execute(&settings, args, format).await,
		Commands::Render { date, output } => render::execute(&settings, date, output.as_deref()),
		Commands::Cache { action } => cache::execute(&settings, action, format),
	}
}

/// Process exit code for a failed command.
///
/// Drafting failures keep their distinct codes; anything else exits with 1.
pub fn exit_code(err: &anyhow::Error) -> u8 {
	err.downcast_ref::<DraftError>()
		.and_then(|err| u8::try_from(err.exit_code()).ok())
		.unwrap_or(1)
}
