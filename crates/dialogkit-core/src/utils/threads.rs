//! Waiting on worker threads
//!
//! Workers get no stop signal. A thread stuck in blocking I/O cannot be
//! interrupted, so on Ctrl-C the whole process exits instead.

use std::future::Future;
use std::thread::JoinHandle;
use std::time::Duration;

/// Pause between two sweeps over the outstanding threads
pub const JOIN_POLL_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WaitOutcome {
    /// Every thread terminated, `panicked` of them by panicking
    Finished { panicked: usize },
    /// The interrupt fired while `remaining` threads were still running
    Interrupted { remaining: usize },
}

/// Join all finished threads in `threads`, keeping the ones still running.
///
/// Returns the running threads and the number of joined threads that panicked.
fn reap_finished<T>(threads: Vec<JoinHandle<T>>) -> (Vec<JoinHandle<T>>, usize) {
    let mut running = Vec::with_capacity(threads.len());
    let mut panicked = 0;
    for handle in threads {
        if !handle.is_finished() {
            running.push(handle);
            continue;
        }
        let name = handle.thread().name().map(str::to_string);
        if handle.join().is_err() {
            panicked += 1;
            log::warn!(
                "Thread {} panicked",
                name.as_deref().unwrap_or("<unnamed>")
            );
        }
    }
    (running, panicked)
}

/// Poll `threads` every `interval` until all of them are done or `interrupt`
/// resolves, whichever comes first.
pub async fn wait_for_threads_until<T, F>(
    mut threads: Vec<JoinHandle<T>>,
    interval: Duration,
    interrupt: F,
) -> WaitOutcome
where
    F: Future<Output = ()>,
{
    tokio::pin!(interrupt);
    let mut panicked = 0;

    loop {
        let (running, newly_panicked) = reap_finished(threads);
        threads = running;
        panicked += newly_panicked;
        if threads.is_empty() {
            return WaitOutcome::Finished { panicked };
        }

        tokio::select! {
            _ = &mut interrupt => {
                return WaitOutcome::Interrupted { remaining: threads.len() };
            }
            _ = tokio::time::sleep(interval) => {}
        }
    }
}

/// Block until all child threads have terminated.
///
/// Returns how many of them panicked. Ctrl-C terminates the process with
/// exit status 0.
pub async fn wait_for_threads<T>(threads: Vec<JoinHandle<T>>) -> usize {
    let interrupt = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::warn!("Cannot listen for Ctrl-c: {}", e);
            std::future::pending::<()>().await;
        }
    };

    match wait_for_threads_until(threads, JOIN_POLL_INTERVAL, interrupt).await {
        WaitOutcome::Finished { panicked } => {
            log::info!(
                "Finished waiting for input threads to terminate. Stopping to serve forever."
            );
            panicked
        }
        WaitOutcome::Interrupted { remaining } => {
            log::info!(
                "Ctrl-c received! Sending kill to threads... ({} still running)",
                remaining
            );
            std::process::exit(0);
        }
    }
}
