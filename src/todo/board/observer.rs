//! Observer hook notified after reloads and notices.

use super::Notice;
use crate::todo::domain::Collection;
use std::sync::{Arc, Mutex, PoisonError};

/// Receives board change notifications.
///
/// Hosts implement this to re-render after a collection reload or to show a
/// notice. Both methods default to doing nothing.
pub trait BoardObserver: Send + Sync {
    /// Called after `collection` was reloaded successfully.
    fn collection_reloaded(&self, _collection: Collection) {}

    /// Called when an action produced a notice for the user.
    fn notice_raised(&self, _notice: &Notice) {}
}

/// A board event captured by [`RecordingObserver`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardEvent {
    /// A collection was reloaded.
    Reloaded(Collection),
    /// A notice was raised.
    Notice(Notice),
}

/// Observer that records every event in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    events: Arc<Mutex<Vec<BoardEvent>>>,
}

impl RecordingObserver {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded events.
    #[must_use]
    pub fn events(&self) -> Vec<BoardEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn push(&self, event: BoardEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }
}

impl BoardObserver for RecordingObserver {
    fn collection_reloaded(&self, collection: Collection) {
        self.push(BoardEvent::Reloaded(collection));
    }

    fn notice_raised(&self, notice: &Notice) {
        self.push(BoardEvent::Notice(notice.clone()));
    }
}
