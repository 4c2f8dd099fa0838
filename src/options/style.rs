use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Presentation values handed to the host renderer. The slider core never
/// reads colors; it only carries them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Style", inline)]
#[serde(default)]
pub struct StyleOptions {
    /// Control background RGBA.
    #[schemars(skip)]
    pub background_color: [f32; 4],
    /// Track RGBA.
    #[schemars(skip)]
    pub track_color: [f32; 4],
    /// Thumb RGBA.
    #[schemars(skip)]
    pub thumb_color: [f32; 4],
    /// Label text RGBA.
    #[schemars(skip)]
    pub label_color: [f32; 4],
    /// Label font size.
    #[schemars(title = "Label Font Size", range(min = 6.0, max = 32.0), extend("step" = 1.0))]
    pub font_size: f32,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            background_color: [1.0, 0.0, 0.0, 1.0],
            track_color: [0.0, 0.0, 1.0, 1.0],
            thumb_color: [0.0, 1.0, 0.0, 1.0],
            label_color: [0.0, 0.0, 0.0, 1.0],
            font_size: 10.0,
        }
    }
}
