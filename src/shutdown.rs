use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Notify;

/// Shared shutdown flag.
///
/// Set by the quit key or by SIGINT/SIGTERM. Blocking loops poll
/// [`is_shutting_down`](Self::is_shutting_down); async tasks await
/// [`wait`](Self::wait).
#[derive(Clone, Default)]
pub struct ShutdownHandle {
    shutdown: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl ShutdownHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_shutting_down(&self) -> bool {
        self.shutdown.load(Ordering::SeqCst)
    }

    pub fn signal(&self) {
        if !self.shutdown.swap(true, Ordering::SeqCst) {
            tracing::info!("shutdown initiated");
        }
        self.notify.notify_waiters();
    }

    /// Let SIGINT and SIGTERM set the flag.
    ///
    /// Signal handlers can only flip the flag; whoever polls it next calls
    /// [`signal`](Self::signal) to wake async waiters.
    pub fn register_signals(&self) -> io::Result<()> {
        for signal in [signal_hook::consts::SIGINT, signal_hook::consts::SIGTERM] {
            signal_hook::flag::register(signal, Arc::clone(&self.shutdown))?;
        }
        Ok(())
    }

    pub async fn wait(&self) {
        // Subscribe to Notify BEFORE checking the flag: signal() could fire
        // between the check and the await and the notification would be lost.
        let notified = self.notify.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();
        if self.is_shutting_down() {
            return;
        }
        notified.await;
    }
}
