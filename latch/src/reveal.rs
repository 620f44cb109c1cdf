//! Hint-label reveal one-shot.
//!
//! Whenever the widget lands in the closed state a 300ms one-shot is armed;
//! if it elapses without the widget reopening, the hint-visible flag flips
//! and a wakeup asks the host loop to redraw. Opening the widget (or
//! arming a fresh one-shot) cancels the pending task, and the task is
//! aborted when the last widget handle drops, so it can never touch a
//! widget that no longer exists. The task captures only the flag and the
//! wakeup handle, never the widget itself.

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::wakeup::WakeupHandle;

/// Delay between closing and the hint label becoming visible.
pub const REVEAL_DELAY: Duration = Duration::from_millis(300);

/// A spawned one-shot that aborts on drop.
#[derive(Debug)]
struct RevealTask(JoinHandle<()>);

impl Drop for RevealTask {
    fn drop(&mut self) {
        self.0.abort();
    }
}

/// Owner of the pending reveal one-shot.
///
/// Clones share the same slot, so any widget handle can cancel a one-shot
/// armed through another.
#[derive(Debug, Default, Clone)]
pub(crate) struct RevealHandle {
    task: Arc<Mutex<Option<RevealTask>>>,
}

impl RevealHandle {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Arm the one-shot, superseding any pending one.
    ///
    /// Outside a tokio runtime this is a no-op: there is no event loop to
    /// redraw, so there is nothing for the hint to appear in.
    pub(crate) fn schedule(
        &self,
        visible: Arc<AtomicBool>,
        dirty: Arc<AtomicBool>,
        wakeup: WakeupHandle,
    ) {
        let Ok(handle) = Handle::try_current() else {
            return;
        };

        let task = handle.spawn(async move {
            tokio::time::sleep(REVEAL_DELAY).await;
            visible.store(true, Ordering::SeqCst);
            dirty.store(true, Ordering::SeqCst);
            wakeup.send();
        });

        if let Ok(mut guard) = self.task.lock() {
            // Replacing the slot drops (and thereby aborts) the old task.
            *guard = Some(RevealTask(task));
        }
    }

    /// Abort the pending one-shot, if any.
    pub(crate) fn cancel(&self) {
        if let Ok(mut guard) = self.task.lock() {
            guard.take();
        }
    }
}
