//! WebDriver driver lifecycle and HTTP connection.
//!
//! * [`process`]: locating, spawning, and reaping a local driver binary
//! * [`connection`]: HTTP transport with WebDriver envelope decoding
//! * [`session`]: typed commands against one remote browser session

pub mod connection;
pub mod error;
pub mod process;
pub mod session;

pub use connection::Connection;
pub use error::{Result, RuntimeError};
pub use process::{DriverProcess, free_port, resolve_driver_executable};
pub use session::RemoteSession;
