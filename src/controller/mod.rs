//! The slider control: thumb/track layout, drag tracking and elevate/settle
//! orchestration on top of a [`SliderModel`].
//!
//! Geometry and label changes are always applied as immediate writes of
//! the logical thumb frame. Only the two vertical transitions
//! ([`ThumbTransition`]) are handed to the [`AnimationDriver`], and even
//! then the logical offset is updated first so hit-testing never sees a
//! mid-animation position.

mod input;
mod notification;
mod options;

use glam::Vec2;
pub use notification::SliderEvent;

use crate::animation::{
    AnimationDriver, ThumbProperty, ThumbTransition, Transition, TweenAnimator,
};
use crate::error::SliderError;
use crate::geometry::{Rect, TrackGeometry};
use crate::input::TrackingState;
use crate::label::{format_value, LabelLayer, LabelRenderer, MonospaceLabel};
use crate::model::{SliderModel, Step};
use crate::options::{AnimationOptions, LayoutOptions, Options, StyleOptions};

/// Logical thumb placement, in control-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
struct ThumbLayout {
    /// Horizontal offset of the value point (thumb center).
    center_x: f32,
    /// Drawn width; at least the diameter, wider for long labels.
    display_width: f32,
    /// Top edge of the thumb.
    vertical_offset: f32,
    /// Target of the last vertical move handed to the driver.
    animation_target: Option<f32>,
}

/// Interactive slider control.
///
/// Owns the [`SliderModel`], the derived [`TrackGeometry`], the drag
/// [`TrackingState`] and the two collaborators: a [`LabelRenderer`] for the
/// value text and an [`AnimationDriver`] for vertical transitions.
///
/// # Usage
///
/// ```ignore
/// let mut slider = SliderController::from_options(&options, label, TweenAnimator::new())?;
/// slider.set_bounds(Vec2::new(300.0, 40.0));
///
/// // In the event loop:
/// if let Some(event) = slider.handle_event(pointer_event) {
///     host.dispatch(event);
/// }
/// draw_thumb(slider.presented_thumb_frame(), slider.label_text());
/// ```
#[derive(Debug)]
pub struct SliderController<L = MonospaceLabel, A = TweenAnimator> {
    model: SliderModel,
    layout: LayoutOptions,
    animation: AnimationOptions,
    style: StyleOptions,
    geometry: TrackGeometry,
    thumb: ThumbLayout,
    tracking: TrackingState,
    label: LabelLayer<L>,
    animator: A,
    /// Name of the last preset loaded or saved.
    active_preset: Option<String>,
}

impl<L: LabelRenderer, A: AnimationDriver> SliderController<L, A> {
    /// Create a slider with default options and zero bounds.
    #[must_use]
    pub fn new(label: L, animator: A) -> Self {
        Self::with_model(SliderModel::default(), &Options::default(), label, animator)
    }

    /// Create a slider from options, rejecting an invalid range.
    ///
    /// # Errors
    ///
    /// Returns [`SliderError::InvalidRange`] if `options.range` is invalid.
    pub fn from_options(
        options: &Options,
        label: L,
        animator: A,
    ) -> Result<Self, SliderError> {
        let model = model_from_options(options)?;
        Ok(Self::with_model(model, options, label, animator))
    }

    fn with_model(
        model: SliderModel,
        options: &Options,
        label: L,
        animator: A,
    ) -> Self {
        let mut slider = Self {
            model,
            layout: options.layout,
            animation: options.animation,
            style: options.style,
            geometry: TrackGeometry::default(),
            thumb: ThumbLayout::default(),
            tracking: TrackingState::Idle,
            label: LabelLayer::new(label),
            animator,
            active_preset: None,
        };
        slider.set_bounds(Vec2::ZERO);
        slider
    }

    // ── Layout ───────────────────────────────────────────────────────────

    /// Recompute all derived geometry for new control bounds. Never starts
    /// a transition; one already running is redirected to the new offset.
    pub fn set_bounds(&mut self, size: Vec2) {
        self.geometry = TrackGeometry::new(
            size,
            self.layout.thumb_inset,
            self.layout.track_height,
        );
        let target = self.vertical_target();
        self.thumb.vertical_offset = target;
        self.retarget_transition(target);
        self.apply_thumb_layout();
    }

    /// Immediate (non-interpolated) update of the thumb's horizontal
    /// position, width and label text from the current value.
    fn apply_thumb_layout(&mut self) {
        let value = self.model.value();
        let text = format_value(value);
        let diameter = self.geometry.thumb_diameter();

        self.thumb.display_width = if self.layout.label_sized_thumb {
            diameter.max(
                self.label.measured_width(&text) + self.layout.label_padding,
            )
        } else {
            diameter
        };
        self.thumb.center_x = self.geometry.position_for_value(&self.model, value);

        if self.label.set_text(text) {
            log::trace!("label now {}", self.label.text());
        }
    }

    /// Vertical offset the thumb should rest at in the current state.
    fn vertical_target(&self) -> f32 {
        if self.tracking.is_tracking() && self.layout.elevate_while_tracking {
            ThumbTransition::Elevate.target(&self.geometry)
        } else {
            ThumbTransition::Settle.target(&self.geometry)
        }
    }

    /// Move the thumb vertically. The logical offset is written first; the
    /// driver only animates the visual change.
    fn run_transition(&mut self, transition: ThumbTransition) {
        if !self.layout.elevate_while_tracking {
            return;
        }

        let to = transition.target(&self.geometry);
        let from = self
            .animator
            .presented(ThumbProperty::VerticalOffset)
            .unwrap_or(self.thumb.vertical_offset);
        self.thumb.vertical_offset = to;

        let timing: Transition = self.animation.transition();
        self.thumb.animation_target = None;
        if timing.animated && from != to {
            self.animator.animate(
                ThumbProperty::VerticalOffset,
                from,
                to,
                timing.duration,
                timing.easing,
            );
            self.thumb.animation_target = Some(to);
        }
        log::debug!("{} thumb: {from} -> {to}", transition.name());
    }

    /// Point a still-running vertical move at `target` after a relayout,
    /// so it does not finish at a stale offset.
    fn retarget_transition(&mut self, target: f32) {
        let Some(stale) = self.thumb.animation_target.take() else {
            return;
        };
        if stale == target {
            self.thumb.animation_target = Some(stale);
            return;
        }
        let Some(shown) = self.animator.presented(ThumbProperty::VerticalOffset)
        else {
            return;
        };

        let timing = self.animation.transition();
        self.animator.animate(
            ThumbProperty::VerticalOffset,
            shown,
            target,
            timing.duration,
            timing.easing,
        );
        self.thumb.animation_target = Some(target);
        log::debug!("thumb transition retargeted: {stale} -> {target}");
    }

    // ── Host configuration ───────────────────────────────────────────────

    /// Replace the lower bound. Rejected if not below the maximum.
    ///
    /// # Errors
    ///
    /// Returns [`SliderError::InvalidRange`]; the slider is unchanged.
    pub fn set_minimum(&mut self, minimum: f64) -> Result<(), SliderError> {
        self.set_range(minimum, self.model.maximum())
    }

    /// Replace the upper bound. Rejected if not above the minimum.
    ///
    /// # Errors
    ///
    /// Returns [`SliderError::InvalidRange`]; the slider is unchanged.
    pub fn set_maximum(&mut self, maximum: f64) -> Result<(), SliderError> {
        self.set_range(self.model.minimum(), maximum)
    }

    /// Replace both bounds. The current value is restricted into the new
    /// range.
    ///
    /// # Errors
    ///
    /// Returns [`SliderError::InvalidRange`]; the slider is unchanged.
    pub fn set_range(
        &mut self,
        minimum: f64,
        maximum: f64,
    ) -> Result<(), SliderError> {
        if let Err(e) = self.model.set_range(minimum, maximum) {
            log::warn!("rejected slider range: {e}");
            return Err(e);
        }
        self.sync_session();
        self.apply_thumb_layout();
        Ok(())
    }

    /// Set the current value, restricted to the range (not quantized).
    /// Returns the stored value. No notification is emitted.
    pub fn set_value(&mut self, value: f64) -> f64 {
        let stored = self.model.set_value(value);
        self.sync_session();
        self.apply_thumb_layout();
        stored
    }

    /// Set the snap step; `None` disables snapping. The current value is not
    /// re-quantized.
    pub fn set_step(&mut self, step: Option<f64>) {
        self.model.set_step(step);
        self.apply_thumb_layout();
    }

    /// Keep an active session's change detection in line with host writes.
    fn sync_session(&mut self) {
        let value = self.model.value();
        if let Some(session) = self.tracking.session_mut() {
            if session.record(value) {
                log::trace!("session value reset by host to {value}");
            }
        }
    }

    // ── Accessors ────────────────────────────────────────────────────────

    /// Numeric state.
    #[must_use]
    pub fn model(&self) -> &SliderModel {
        &self.model
    }

    /// Current value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.model.value()
    }

    /// Normalized snap step.
    #[must_use]
    pub fn step(&self) -> Step {
        self.model.step()
    }

    /// Derived track geometry.
    #[must_use]
    pub fn geometry(&self) -> &TrackGeometry {
        &self.geometry
    }

    /// Track rectangle.
    #[must_use]
    pub fn track_frame(&self) -> Rect {
        self.geometry.track()
    }

    /// Logical thumb rectangle: the displayed width centered on the value
    /// point, the diameter tall, at the logical vertical offset.
    #[must_use]
    pub fn thumb_frame(&self) -> Rect {
        self.thumb_frame_at(self.thumb.vertical_offset)
    }

    /// Thumb rectangle as currently shown, using the animation driver's
    /// presented vertical offset while a transition runs.
    #[must_use]
    pub fn presented_thumb_frame(&self) -> Rect {
        let offset = self
            .animator
            .presented(ThumbProperty::VerticalOffset)
            .unwrap_or(self.thumb.vertical_offset);
        self.thumb_frame_at(offset)
    }

    fn thumb_frame_at(&self, vertical_offset: f32) -> Rect {
        Rect::new(
            Vec2::new(
                self.thumb.center_x - self.thumb.display_width / 2.0,
                vertical_offset,
            ),
            Vec2::new(self.thumb.display_width, self.geometry.thumb_diameter()),
        )
    }

    /// Text currently shown on the thumb.
    #[must_use]
    pub fn label_text(&self) -> &str {
        self.label.text()
    }

    /// Label layer wrapping the host renderer.
    #[must_use]
    pub fn label(&self) -> &LabelLayer<L> {
        &self.label
    }

    /// Whether a drag session is active.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.tracking.is_tracking()
    }

    /// Presentation values for the host renderer.
    #[must_use]
    pub fn style(&self) -> &StyleOptions {
        &self.style
    }

    /// Layout options in effect.
    #[must_use]
    pub fn layout(&self) -> &LayoutOptions {
        &self.layout
    }

    /// Animation driver.
    #[must_use]
    pub fn animator(&self) -> &A {
        &self.animator
    }

    /// Mutable access to the animation driver (e.g. to prune finished
    /// tweens once per frame).
    pub fn animator_mut(&mut self) -> &mut A {
        &mut self.animator
    }

    /// Name of the last preset loaded or saved.
    #[must_use]
    pub fn active_preset(&self) -> Option<&str> {
        self.active_preset.as_deref()
    }
}

impl Default for SliderController {
    fn default() -> Self {
        Self::new(MonospaceLabel::default(), TweenAnimator::new())
    }
}

/// Validate and build the model described by `options.range`.
fn model_from_options(options: &Options) -> Result<SliderModel, SliderError> {
    let range = &options.range;
    SliderModel::new(range.minimum, range.maximum, range.value, range.step)
}
