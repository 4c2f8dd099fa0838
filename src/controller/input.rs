//! Pointer handling for [`SliderController`].

use glam::Vec2;

use super::{SliderController, SliderEvent};
use crate::animation::{AnimationDriver, ThumbTransition};
use crate::input::PointerEvent;
use crate::label::LabelRenderer;

impl<L: LabelRenderer, A: AnimationDriver> SliderController<L, A> {
    /// Process a pointer event and return zero or one notifications.
    pub fn handle_event(&mut self, event: PointerEvent) -> Option<SliderEvent> {
        match event {
            PointerEvent::Down { position } => self
                .begin_tracking(position)
                .then_some(SliderEvent::EditingBegan),
            PointerEvent::Moved { position } => self.continue_tracking(position),
            PointerEvent::Up { .. } | PointerEvent::Cancelled => {
                self.end_tracking()
            }
        }
    }

    /// Start a drag session if `position` hits the displayed thumb.
    ///
    /// Returns whether tracking started. A press outside the thumb, or
    /// while a session is already running, is ignored entirely.
    pub fn begin_tracking(&mut self, position: Vec2) -> bool {
        if !self.thumb_frame().contains(position) {
            log::debug!("pointer down at {position} missed thumb");
            return false;
        }
        if !self.tracking.begin(self.model.value()) {
            return false;
        }

        log::debug!("editing began at {}", self.model.value());
        self.run_transition(ThumbTransition::Elevate);
        true
    }

    /// Follow the pointer during a session.
    ///
    /// The pointer's horizontal offset is mapped to a value, clamped and
    /// snapped. Layout and label are rewritten immediately; a
    /// [`SliderEvent::ValueChanged`] is returned only if the value changed.
    /// Ignored while idle.
    pub fn continue_tracking(&mut self, position: Vec2) -> Option<SliderEvent> {
        let session = self.tracking.session_mut()?;

        let raw = self.geometry.value_for_position(&self.model, position.x);
        let value = self.model.clamp(raw);
        if !session.record(value) {
            return None;
        }

        let value = self.model.set_value(value);
        self.apply_thumb_layout();
        log::trace!("value changed: raw {raw} -> {value}");
        Some(SliderEvent::ValueChanged { value })
    }

    /// End the session (pointer-up or cancel) and settle the thumb. The
    /// last value is kept. Ignored while idle.
    pub fn end_tracking(&mut self) -> Option<SliderEvent> {
        let session = self.tracking.end()?;

        log::debug!("editing ended at {}", session.last_value());
        self.run_transition(ThumbTransition::Settle);
        Some(SliderEvent::EditingEnded)
    }
}
