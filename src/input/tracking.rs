/// Ephemeral state of one drag, alive from a qualifying pointer-down until
/// pointer-up or cancellation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    last_value: f64,
}

impl DragSession {
    /// Session starting at the current slider value.
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self { last_value: value }
    }

    /// Last value emitted (or the value at session start).
    #[must_use]
    pub fn last_value(&self) -> f64 {
        self.last_value
    }

    /// Record a newly computed value. Returns `true` if it differs from the
    /// last one.
    pub fn record(&mut self, value: f64) -> bool {
        if value == self.last_value {
            return false;
        }
        self.last_value = value;
        true
    }
}

/// Two-state gesture machine: `Idle -> Tracking -> Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TrackingState {
    /// No pointer session.
    #[default]
    Idle,
    /// A drag that started inside the thumb is in progress.
    Tracking(DragSession),
}

impl TrackingState {
    /// Whether a drag session is active.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        matches!(self, Self::Tracking(_))
    }

    /// Enter `Tracking` at `value`. Returns `false` (and changes nothing) if
    /// a session is already running.
    pub fn begin(&mut self, value: f64) -> bool {
        if self.is_tracking() {
            return false;
        }
        *self = Self::Tracking(DragSession::new(value));
        true
    }

    /// The active session, if any.
    pub fn session_mut(&mut self) -> Option<&mut DragSession> {
        match self {
            Self::Idle => None,
            Self::Tracking(session) => Some(session),
        }
    }

    /// Return to `Idle`, handing back the finished session.
    pub fn end(&mut self) -> Option<DragSession> {
        match std::mem::take(self) {
            Self::Idle => None,
            Self::Tracking(session) => Some(session),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_by_default() {
        let mut state = TrackingState::default();
        assert!(!state.is_tracking());
        assert!(state.session_mut().is_none());
        assert!(state.end().is_none());
    }

    #[test]
    fn begin_then_end() {
        let mut state = TrackingState::default();
        assert!(state.begin(0.5));
        assert!(state.is_tracking());
        assert!(!state.begin(0.7), "second begin is ignored");

        let session = state.end().unwrap();
        assert_eq!(session.last_value(), 0.5);
        assert_eq!(state, TrackingState::Idle);
    }

    #[test]
    fn session_reports_only_changes() {
        let mut session = DragSession::new(1.0);
        assert!(!session.record(1.0));
        assert!(session.record(2.0));
        assert!(!session.record(2.0));
        assert_eq!(session.last_value(), 2.0);
    }
}
