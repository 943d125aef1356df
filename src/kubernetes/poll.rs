// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Bounded fixed-interval polling

use crate::error::{Result, SaCreatorError};
use std::future::Future;
use std::time::Duration;
use tokio::time::{sleep, Instant};
use tracing::debug;

/// Call `check` until it yields a value or `timeout` elapses.
///
/// `Ok(None)` from the check means "not yet": sleep `interval` (clamped to the
/// time left) and try again. Check errors are returned immediately. Once the
/// deadline has passed without a value the result is
/// [`SaCreatorError::Timeout`], so the call returns no later than `timeout`
/// plus the duration of one check.
pub async fn poll_until<T, F, Fut>(interval: Duration, timeout: Duration, mut check: F) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Option<T>>>,
{
    let start = Instant::now();
    let mut attempt = 0u32;

    loop {
        attempt += 1;
        if let Some(value) = check().await? {
            return Ok(value);
        }

        let elapsed = start.elapsed();
        if elapsed >= timeout {
            debug!("Gave up after {} attempts ({:?})", attempt, elapsed);
            return Err(SaCreatorError::Timeout(timeout));
        }

        debug!("Attempt {} not ready, retrying in {:?}", attempt, interval);
        sleep(interval.min(timeout - elapsed)).await;
    }
}
