//! Input handling: pointer event types and the drag-tracking state
//! machine.

/// Platform-agnostic pointer events.
pub mod event;
/// `Idle -> Tracking -> Idle` gesture state.
pub mod tracking;

pub use event::PointerEvent;
pub use tracking::{DragSession, TrackingState};
