//! Pure course-progress logic: scoring, unlock rules, navigation
//! transitions, and conversion between local completion state and the
//! backend's progress payload. No I/O here.

pub mod nav;
pub mod scoring;
pub mod sync;
pub mod unlock;

pub use nav::{ActivePage, Advance, NavigationState};
pub use scoring::{evaluate, AnswerMap, ScoreReport};
pub use unlock::CompletionState;
