//! View state for hosts rendering lists and tasks.
//!
//! The board is the glue between user actions and [`TodoService`]: it mirrors
//! persisted rows, passes the list selection explicitly into task operations,
//! and reloads after each successful write.
//!
//! [`TodoService`]: crate::todo::services::TodoService

mod notice;
mod observer;
mod state;

pub use notice::{BoardAction, Notice};
pub use observer::{BoardEvent, BoardObserver, RecordingObserver};
pub use state::TodoBoard;
