//! Delayed, best-effort browser launch.

use std::time::Duration;

/// Delay before opening the browser, giving the listener a moment to
/// settle before the first request arrives.
const LAUNCH_DELAY: Duration = Duration::from_secs(1);

/// Spawn a detached task that waits [`LAUNCH_DELAY`], then opens the
/// default browser at `url`.
///
/// The task has no result channel: a machine without a browser, or a
/// launcher that fails, leaves the server completely unaffected.
pub fn launch_after_delay(url: String) {
    tokio::spawn(async move {
        tokio::time::sleep(LAUNCH_DELAY).await;
        let _ = open::that(&url);
    });
}
