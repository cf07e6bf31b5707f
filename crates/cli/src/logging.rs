use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the stderr subscriber. `RUST_LOG` overrides the verbosity flag.
///
/// Fails when a global subscriber is already installed.
pub fn init_logging(verbose: u8) -> Result<(), TryInitError> {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

	tracing_subscriber::registry()
		.with(filter)
		.with(fmt::layer().with_writer(std::io::stderr).with_target(false))
		.try_init()
}

fn default_directive(verbose: u8) -> &'static str {
	match verbose {
		0 => "notedraft=info",
		1 => "notedraft=debug",
		_ => "notedraft=trace",
	}
}
