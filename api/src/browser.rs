//! Delayed browser launch
//!
//! Fire and forget: the task is never awaited and a failure to open a browser
//! is only logged.

use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Sleep for `delay`, then open `url` in the default browser
pub fn spawn_browser_launcher(url: String, delay: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        debug!("Opening browser at {}", url);
        if let Err(e) = open::that_detached(&url) {
            warn!("Could not open a browser at {}: {}", url, e);
        }
    })
}
