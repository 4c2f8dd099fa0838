use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Layout", inline)]
#[serde(default)]
/// Track and thumb sizing.
pub struct LayoutOptions {
    /// Gap between the control bounds and the resting thumb.
    #[schemars(title = "Thumb Inset", range(min = 0.0, max = 20.0), extend("step" = 0.5))]
    pub thumb_inset: f32,
    /// Height of the track strip.
    #[schemars(title = "Track Height", range(min = 1.0, max = 10.0), extend("step" = 0.5))]
    pub track_height: f32,
    /// Horizontal padding added around the label when sizing the thumb.
    #[schemars(title = "Label Padding", range(min = 0.0, max = 32.0), extend("step" = 1.0))]
    pub label_padding: f32,
    /// Widen the thumb to fit its label. When off the thumb is always a
    /// circle of the thumb diameter.
    #[schemars(title = "Fit Thumb To Label")]
    pub label_sized_thumb: bool,
    /// Lift the thumb above the track while dragging.
    #[schemars(title = "Elevate While Dragging")]
    pub elevate_while_tracking: bool,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            thumb_inset: 5.0,
            track_height: 3.0,
            label_padding: 8.0,
            label_sized_thumb: true,
            elevate_while_tracking: true,
        }
    }
}
