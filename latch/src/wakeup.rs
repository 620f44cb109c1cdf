//! Wakeup channel for passive rendering.
//!
//! The host event loop blocks when idle. When widget state changes from a
//! spawned task (the hint-reveal one-shot, an async data load), a wakeup
//! signal asks the loop to re-render.

use std::sync::{Arc, OnceLock};

use tokio::sync::mpsc;

/// Sender half of the wakeup channel.
#[derive(Clone, Debug)]
pub struct WakeupSender {
    tx: mpsc::Sender<()>,
}

impl WakeupSender {
    /// Send a wakeup signal.
    ///
    /// Non-blocking. Errors are ignored (receiver dropped = shutting down).
    pub fn send(&self) {
        let _ = self.tx.try_send(());
    }
}

/// Receiver half of the wakeup channel.
pub struct WakeupReceiver {
    rx: mpsc::Receiver<()>,
}

impl WakeupReceiver {
    /// Wait for a wakeup signal.
    pub async fn recv(&mut self) -> Option<()> {
        self.rx.recv().await
    }

    /// Drain pending signals so a burst collapses into one render.
    pub fn drain(&mut self) {
        while self.rx.try_recv().is_ok() {}
    }
}

/// Create a new wakeup channel pair.
pub fn channel() -> (WakeupSender, WakeupReceiver) {
    let (tx, rx) = mpsc::channel(16);
    (WakeupSender { tx }, WakeupReceiver { rx })
}

/// Write-once slot for a widget's wakeup sender.
///
/// Widgets are built before the host loop exists; the sender arrives later,
/// exactly once, when the widget is mounted. All clones share the slot, and
/// sends before installation are silently dropped (there is no loop to wake
/// yet).
#[derive(Debug, Default, Clone)]
pub struct WakeupHandle {
    slot: Arc<OnceLock<WakeupSender>>,
}

impl WakeupHandle {
    /// Create a new empty handle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the wakeup sender. A second installation is ignored.
    pub fn install(&self, sender: WakeupSender) {
        let _ = self.slot.set(sender);
    }

    /// Send a wakeup signal if a sender is installed.
    pub fn send(&self) {
        if let Some(sender) = self.slot.get() {
            sender.send();
        }
    }
}
