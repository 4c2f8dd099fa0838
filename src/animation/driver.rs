//! Animation driver seam and the built-in tween driver.
//!
//! The controller never waits on an animation: it updates the logical thumb
//! position first and then hands the visual interpolation to an
//! [`AnimationDriver`]. Hosts with their own animation system implement
//! the trait; everyone else can use [`TweenAnimator`] and sample it once
//! per frame.

use std::collections::HashMap;
use std::time::Duration;

use web_time::Instant;

use super::easing::EasingFunction;

/// Thumb property an animation can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThumbProperty {
    /// Vertical offset of the thumb's top edge.
    VerticalOffset,
}

/// Fire-and-forget interpolated property changes.
pub trait AnimationDriver {
    /// Animate `property` from `from` to `to`. Starting a new animation on a
    /// property supersedes any in-flight one on the same property.
    fn animate(
        &mut self,
        property: ThumbProperty,
        from: f32,
        to: f32,
        duration: Duration,
        curve: EasingFunction,
    );

    /// Value currently shown for `property` while an animation is running
    /// on it. New transitions start from here so they do not jump.
    fn presented(&self, _property: ThumbProperty) -> Option<f32> {
        None
    }
}

/// Driver that drops every request. Pair with hosts that do not animate.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAnimation;

impl AnimationDriver for NoAnimation {
    fn animate(
        &mut self,
        _property: ThumbProperty,
        _from: f32,
        _to: f32,
        _duration: Duration,
        _curve: EasingFunction,
    ) {
    }
}

/// One running interpolation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    /// Start value.
    pub from: f32,
    /// End value.
    pub to: f32,
    /// Total duration.
    pub duration: Duration,
    /// Interpolation curve.
    pub easing: EasingFunction,
    /// When the tween started.
    pub start_time: Instant,
}

impl Tween {
    /// Raw progress in `[0, 1]` at `now`. Zero-length tweens are complete
    /// immediately.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.start_time);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Interpolated value at `now`.
    #[must_use]
    pub fn value_at(&self, now: Instant) -> f32 {
        let t = self.easing.evaluate(self.progress(now));
        self.from + (self.to - self.from) * t
    }

    /// Whether the tween has reached its end value.
    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}

/// Built-in [`AnimationDriver`] holding at most one [`Tween`] per property.
#[derive(Debug, Clone, Default)]
pub struct TweenAnimator {
    tweens: HashMap<ThumbProperty, Tween>,
}

impl TweenAnimator {
    /// Create an animator with no running tweens.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a tween at an explicit time, replacing any running tween on
    /// the same property.
    pub fn start_at(
        &mut self,
        property: ThumbProperty,
        tween: Tween,
    ) -> Option<Tween> {
        self.tweens.insert(property, tween)
    }

    /// Running tween for `property`, finished or not.
    #[must_use]
    pub fn tween(&self, property: ThumbProperty) -> Option<&Tween> {
        self.tweens.get(&property)
    }

    /// Presented value of `property` at `now`, or `None` when nothing is
    /// animating it.
    #[must_use]
    pub fn sample(&self, property: ThumbProperty, now: Instant) -> Option<f32> {
        self.tweens
            .get(&property)
            .filter(|tween| !tween.is_finished(now))
            .map(|tween| tween.value_at(now))
    }

    /// Whether any tween is still running at `now`.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.tweens.values().any(|tween| !tween.is_finished(now))
    }

    /// Drop finished tweens.
    pub fn prune(&mut self, now: Instant) {
        self.tweens.retain(|_, tween| !tween.is_finished(now));
    }
}

impl AnimationDriver for TweenAnimator {
    fn animate(
        &mut self,
        property: ThumbProperty,
        from: f32,
        to: f32,
        duration: Duration,
        curve: EasingFunction,
    ) {
        let superseded = self.start_at(
            property,
            Tween {
                from,
                to,
                duration,
                easing: curve,
                start_time: Instant::now(),
            },
        );
        if superseded.is_some() {
            log::trace!("{property:?} tween superseded");
        }
    }

    fn presented(&self, property: ThumbProperty) -> Option<f32> {
        self.sample(property, Instant::now())
    }
}
