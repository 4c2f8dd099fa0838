/// Notifications a slider emits to its host.
///
/// At most one is produced per input event, and only while a drag session
/// is starting, running or ending.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SliderEvent {
    /// A drag session started on the thumb.
    EditingBegan,
    /// The value changed during a drag session.
    ValueChanged {
        /// The new current value.
        value: f64,
    },
    /// The drag session ended (pointer-up or cancel).
    EditingEnded,
}
