//! Elevate/settle animation of the thumb's vertical position.

mod driver;
mod easing;
mod transition;

pub use driver::{
    AnimationDriver, NoAnimation, ThumbProperty, Tween, TweenAnimator,
};
pub use easing::EasingFunction;
pub use transition::{ThumbTransition, Transition};
