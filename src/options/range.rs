use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::model::Step;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Range", inline)]
#[serde(default)]
/// Numeric configuration of the slider.
pub struct RangeOptions {
    /// Lower bound. Must be finite and below `maximum`.
    #[schemars(title = "Minimum")]
    pub minimum: f64,
    /// Upper bound.
    #[schemars(title = "Maximum")]
    pub maximum: f64,
    /// Initial value, restricted to the range.
    #[schemars(title = "Value")]
    pub value: f64,
    /// Snap step while dragging.
    #[schemars(title = "Step")]
    pub step: Step,
}

impl Default for RangeOptions {
    fn default() -> Self {
        Self {
            minimum: 0.0,
            maximum: 1.0,
            value: 0.0,
            step: Step::DEFAULT,
        }
    }
}
