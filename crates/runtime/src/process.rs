//! Local driver process lifecycle.
//!
//! A [`DriverProcess`] owns a spawned `chromedriver` (or compatible) child.
//! The child is killed and reaped when the value is dropped, so the browser
//! it controls cannot outlive the run on any exit path that unwinds.

use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};
use std::time::Duration;

use tracing::{debug, warn};

use crate::connection::Connection;
use crate::error::{Result, RuntimeError};

/// Default driver binary looked up on `PATH`.
pub const DEFAULT_DRIVER: &str = "chromedriver";

const READY_ATTEMPTS: u32 = 50;
const READY_INTERVAL: Duration = Duration::from_millis(200);

/// Asks the OS for an unused localhost port.
pub fn free_port() -> std::io::Result<u16> {
	let listener = std::net::TcpListener::bind(("127.0.0.1", 0))?;
	Ok(listener.local_addr()?.port())
}

/// Resolves the driver executable: an explicit path is used as given,
/// otherwise [`DEFAULT_DRIVER`] is searched on `PATH`.
pub fn resolve_driver_executable(explicit: Option<&Path>) -> Result<PathBuf> {
	match explicit {
		Some(path) if path.components().count() > 1 => Ok(path.to_path_buf()),
		Some(name) => which::which(name).map_err(|_| RuntimeError::DriverNotFound(name.display().to_string())),
		None => which::which(DEFAULT_DRIVER).map_err(|_| RuntimeError::DriverNotFound(DEFAULT_DRIVER.to_string())),
	}
}

/// A running driver child process listening on localhost.
#[derive(Debug)]
pub struct DriverProcess {
	child: Child,
	port: u16,
}

impl DriverProcess {
	/// Spawns `executable --port=<port>` and waits until `GET /status`
	/// reports ready.
	pub async fn spawn(executable: &Path, port: u16) -> Result<Self> {
		let mut cmd = Command::new(executable);
		cmd.arg(format!("--port={port}")).stdin(Stdio::null()).stdout(Stdio::null()).stderr(Stdio::null());

		let child = cmd.spawn().map_err(|source| RuntimeError::DriverSpawn {
			path: executable.to_path_buf(),
			source,
		})?;
		debug!(target = "notedraft.webdriver", path = %executable.display(), port, pid = child.id(), "driver spawned");

		let mut process = Self { child, port };
		process.wait_until_ready().await?;
		Ok(process)
	}

	pub fn url(&self) -> String {
		format!("http://127.0.0.1:{}", self.port)
	}

	async fn wait_until_ready(&mut self) -> Result<()> {
		let connection = Connection::new(&self.url(), Duration::from_millis(500))?;
		let mut last_error = "endpoint not reachable".to_string();

		for _ in 0..READY_ATTEMPTS {
			tokio::time::sleep(READY_INTERVAL).await;

			if let Ok(Some(status)) = self.child.try_wait() {
				return Err(RuntimeError::DriverNotReady {
					url: self.url(),
					last_error: format!("driver exited before accepting connections (status: {status})"),
				});
			}

			match connection.status().await {
				Ok(status) if status.ready => return Ok(()),
				Ok(status) => last_error = format!("not ready: {}", status.message),
				Err(err) => last_error = err.to_string(),
			}
		}

		Err(RuntimeError::DriverNotReady { url: self.url(), last_error })
	}
}

impl Drop for DriverProcess {
	fn drop(&mut self) {
		if let Err(err) = self.child.kill() {
			if err.kind() != std::io::ErrorKind::InvalidInput {
				warn!(target = "notedraft.webdriver", pid = self.child.id(), error = %err, "failed to kill driver");
			}
		}
		let _ = self.child.wait();
		debug!(target = "notedraft.webdriver", port = self.port, "driver stopped");
	}
}
