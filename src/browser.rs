//! Browser launcher
//!
//! One-shot background task that waits a fixed delay and then opens the
//! default browser at the server's root URL. Best effort only: the delay
//! gives the listener time to come up, but there is no readiness handshake
//! and launch failures are ignored.

use std::time::Duration;
use tokio::task::JoinHandle;

/// Delay before the browser is pointed at the server.
pub const OPEN_DELAY: Duration = Duration::from_secs(1);

/// Spawn the delayed browser-open task. Dropping the process (or aborting
/// the returned handle) cancels the open.
pub fn spawn_open_task(url: String) -> JoinHandle<()> {
    tokio::spawn(open_after(OPEN_DELAY, url, |url| {
        // Fire and forget: a missing or failing URL handler is ignored
        let _ = open::that(url);
    }))
}

/// Wait for `delay`, then hand `url` to `opener`. The opener is injected so
/// tests can observe the invocation without touching the OS.
pub async fn open_after<F>(delay: Duration, url: String, opener: F)
where
    F: FnOnce(&str) + Send + 'static,
{
    tokio::time::sleep(delay).await;
    opener(&url);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[tokio::test(start_paused = true)]
    async fn opens_exactly_once_after_delay() {
        let opened = Arc::new(Mutex::new(Vec::new()));
        let recorder = Arc::clone(&opened);

        let task = tokio::spawn(open_after(
            Duration::from_secs(1),
            "http://127.0.0.1:5000/".to_string(),
            move |url| recorder.lock().unwrap().push(url.to_string()),
        ));

        // Paused clock advances past the delay as soon as the task awaits
        task.await.unwrap();

        let opened = opened.lock().unwrap();
        assert_eq!(opened.as_slice(), ["http://127.0.0.1:5000/"]);
    }

    #[tokio::test(start_paused = true)]
    async fn aborted_task_never_opens() {
        let opened = Arc::new(Mutex::new(Vec::new()));
        let recorder = Arc::clone(&opened);

        let task = tokio::spawn(open_after(
            Duration::from_secs(1),
            "http://127.0.0.1:5000/".to_string(),
            move |url| recorder.lock().unwrap().push(url.to_string()),
        ));
        task.abort();
        assert!(task.await.unwrap_err().is_cancelled());

        assert!(opened.lock().unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn does_not_open_before_delay_elapses() {
        let opened = Arc::new(Mutex::new(Vec::new()));
        let recorder = Arc::clone(&opened);

        let task = tokio::spawn(open_after(
            Duration::from_secs(1),
            "http://127.0.0.1:5000/".to_string(),
            move |url| recorder.lock().unwrap().push(url.to_string()),
        ));

        tokio::time::advance(Duration::from_millis(500)).await;
        assert!(opened.lock().unwrap().is_empty());

        task.await.unwrap();
        assert_eq!(opened.lock().unwrap().len(), 1);
    }
}
