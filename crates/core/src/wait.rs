//! Bounded polling for page readiness.

use std::future::Future;
use std::time::{Duration, Instant};

use crate::error::Result;

/// Polls `probe` until it yields `Some`, an error, or `timeout` elapses.
///
/// The probe always runs at least once, so a zero timeout is a single check.
/// Returns `Ok(None)` on timeout.
pub async fn poll_until<T, F, Fut>(timeout: Duration, interval: Duration, mut probe: F) -> Result<Option<T>>
where
	F: FnMut() -> Fut,
	Fut: Future<Output = Result<Option<T>>>,
{
	let start = Instant::now();

	loop {
		if let Some(value) = probe().await? {
			return Ok(Some(value));
		}

		if start.elapsed() >= timeout {
			return Ok(None);
		}

		tokio::time::sleep(interval).await;
	}
}
