use std::sync::Mutex;

use event_emitter_rs::EventEmitter;

/// Event names fired after a successful store write. Listener payloads carry
/// the affected record id, or the category name for whole-history events.
pub mod events {
    pub const GAME_RECORDED: &str = "game.recorded";
    pub const GAME_EDITED: &str = "game.edited";
    pub const GAME_REMOVED: &str = "game.removed";
    pub const GAME_RECOMPUTED: &str = "game.recomputed";
    pub const HISTORY_IMPORTED: &str = "history.imported";
    pub const HISTORY_RESTORED: &str = "history.restored";
}

/// Local change notifications, mirroring the window events the web client
/// listens for. Best-effort: a poisoned emitter drops notifications rather
/// than failing the write that triggered them.
pub struct ChangeNotifier {
    emitter: Mutex<EventEmitter>,
}

impl Default for ChangeNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangeNotifier {
    pub fn new() -> Self {
        ChangeNotifier {
            emitter: Mutex::new(EventEmitter::new()),
        }
    }

    /// Register a listener for an event name.
    pub fn on<F>(&self, event: &str, listener: F)
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        if let Ok(mut emitter) = self.emitter.lock() {
            emitter.on(event, listener);
        }
    }

    pub(crate) fn notify(&self, event: &str, payload: &str) {
        if let Ok(mut emitter) = self.emitter.lock() {
            emitter.emit(event, payload.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn listeners_receive_payloads() {
        let notifier = ChangeNotifier::new();
        let seen = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&seen);

        notifier.on(events::GAME_RECORDED, move |payload: String| {
            assert_eq!(payload, "g-1");
            counter.fetch_add(1, Ordering::SeqCst);
        });

        notifier.notify(events::GAME_RECORDED, "g-1");

        // EventEmitter dispatches asynchronously, give it time.
        thread::sleep(Duration::from_millis(50));
        assert_eq!(seen.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn unrelated_events_do_not_fire() {
        let notifier = ChangeNotifier::new();
        let seen = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&seen);

        notifier.on(events::GAME_REMOVED, move |_payload: String| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        notifier.notify(events::GAME_RECORDED, "g-1");
        thread::sleep(Duration::from_millis(50));
        assert_eq!(seen.load(Ordering::SeqCst), 0);
    }
}
