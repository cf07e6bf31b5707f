use std::process::ExitCode;

use clap::Parser;
use notedraft_cli::{cli::Cli, commands, logging, output};
use tracing::debug;

fn main() -> ExitCode {
	let cli = Cli::parse();
	if let Err(err) = logging::init_logging(cli.verbose) {
		output::print_warning(&format!("logging disabled: {err}"));
	}

	// Steps are strictly sequential; one thread is enough.
	let runtime = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
		Ok(runtime) => runtime,
		Err(err) => {
			output::print_error(&anyhow::Error::new(err).context("failed to start async runtime"));
			return ExitCode::FAILURE;
		}
	};

	match runtime.block_on(commands::dispatch(cli)) {
		Ok(()) => ExitCode::SUCCESS,
		Err(err) => {
			debug!(target = "notedraft", error = ?err, "command failed");
			output::print_error(&err);
			ExitCode::from(commands::exit_code(&err))
		}
	}
}
