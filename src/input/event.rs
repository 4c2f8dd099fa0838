use glam::Vec2;

/// Platform-agnostic pointer events, in control-local coordinates.
///
/// These are fed into
/// [`SliderController::handle_event`](crate::SliderController::handle_event),
/// which turns them into [`SliderEvent`](crate::SliderEvent)
/// notifications.
///
/// # Example
///
/// ```ignore
/// if let Some(event) = slider.handle_event(PointerEvent::Down {
///     position: Vec2::new(12.0, 20.0),
/// }) {
///     host.notify(event);
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Pointer pressed.
    Down {
        /// Press location.
        position: Vec2,
    },
    /// Pointer moved while pressed.
    Moved {
        /// Current location.
        position: Vec2,
    },
    /// Pointer released.
    Up {
        /// Release location.
        position: Vec2,
    },
    /// The platform cancelled the gesture.
    Cancelled,
}

