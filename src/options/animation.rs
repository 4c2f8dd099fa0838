use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::animation::{EasingFunction, Transition};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Animation", inline)]
#[serde(default)]
/// Elevate/settle transition timing.
pub struct AnimationOptions {
    /// Interpolate vertical thumb moves. When off the thumb jumps.
    #[schemars(title = "Animate")]
    pub enabled: bool,
    /// Transition length in milliseconds.
    #[schemars(title = "Duration (ms)", range(min = 0, max = 2000), extend("step" = 50))]
    pub duration_ms: u64,
    /// Interpolation curve.
    #[schemars(skip)]
    pub easing: EasingFunction,
}

impl AnimationOptions {
    /// Transition described by these options.
    #[must_use]
    pub fn transition(&self) -> Transition {
        if self.enabled {
            Transition::new(Duration::from_millis(self.duration_ms), self.easing)
        } else {
            Transition::snap()
        }
    }
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            duration_ms: 500,
            easing: EasingFunction::DEFAULT,
        }
    }
}
