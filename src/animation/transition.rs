//! The two named vertical thumb transitions and how they are played.

use std::time::Duration;

use super::easing::EasingFunction;
use crate::geometry::TrackGeometry;

/// Named vertical move of the thumb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThumbTransition {
    /// Lift the thumb above the track when a drag session starts.
    Elevate,
    /// Return the thumb to its resting inset when the session ends.
    Settle,
}

impl ThumbTransition {
    /// Target vertical offset for this transition.
    #[must_use]
    pub fn target(self, geometry: &TrackGeometry) -> f32 {
        match self {
            Self::Elevate => geometry.elevated_offset(),
            Self::Settle => geometry.resting_offset(),
        }
    }

    /// Name for logging.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Elevate => "elevate",
            Self::Settle => "settle",
        }
    }
}

/// Timing of a vertical transition.
///
/// Consumers construct transitions via [`smooth()`](Self::smooth),
/// [`snap()`](Self::snap) or [`new()`](Self::new).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    /// Total duration.
    pub duration: Duration,
    /// Interpolation curve.
    pub easing: EasingFunction,
    /// When false the logical move happens without asking the animation
    /// driver for an interpolated one.
    pub animated: bool,
}

impl Transition {
    /// Animated transition with custom timing.
    #[must_use]
    pub fn new(duration: Duration, easing: EasingFunction) -> Self {
        Self {
            duration,
            easing,
            animated: true,
        }
    }

    /// Standard elevate/settle timing (500ms, ease-in-ease-out).
    #[must_use]
    pub fn smooth() -> Self {
        Self::new(Duration::from_millis(500), EasingFunction::EaseInOut)
    }

    /// Instant move with no animation.
    #[must_use]
    pub fn snap() -> Self {
        Self {
            duration: Duration::ZERO,
            easing: EasingFunction::Linear,
            animated: false,
        }
    }
}

impl Default for Transition {
    fn default() -> Self {
        Self::smooth()
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;

    #[test]
    fn targets_follow_geometry() {
        let g = TrackGeometry::new(Vec2::new(200.0, 30.0), 5.0, 3.0);
        assert_eq!(ThumbTransition::Elevate.target(&g), -25.0);
        assert_eq!(ThumbTransition::Settle.target(&g), 5.0);
    }

    #[test]
    fn default_is_smooth() {
        let t = Transition::default();
        assert!(t.animated);
        assert_eq!(t.duration, Duration::from_millis(500));
        assert_eq!(t.easing, EasingFunction::EaseInOut);
    }

    #[test]
    fn snap_is_not_animated() {
        let t = Transition::snap();
        assert!(!t.animated);
        assert_eq!(t.duration, Duration::ZERO);
    }
}
