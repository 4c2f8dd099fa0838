//! Slider configuration with TOML preset support.
//!
//! Range, layout, animation and style settings are consolidated here.
//! Options serialize to/from TOML so hosts can ship presets next to their
//! other assets.

mod animation;
mod layout;
mod range;
mod style;

use std::path::Path;

pub use animation::AnimationOptions;
pub use layout::LayoutOptions;
pub use range::RangeOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use style::StyleOptions;

use crate::error::SliderError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[range]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Bounds, initial value and snap step.
    pub range: RangeOptions,
    /// Track and thumb sizing.
    pub layout: LayoutOptions,
    /// Elevate/settle transition timing.
    pub animation: AnimationOptions,
    /// Colors and label font size for the host renderer.
    #[schemars(skip)]
    pub style: StyleOptions,
}

impl Options {
    /// Generate JSON Schema for hosts that build their own settings
    /// editor. Titles, ranges and slider `step` hints are carried for
    /// that purpose; style colors are left out.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SliderError::OptionsParse`] if the text is not valid TOML
    /// for these options.
    pub fn from_toml(text: &str) -> Result<Self, SliderError> {
        toml::from_str(text).map_err(|e| SliderError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SliderError::Io`] if the file cannot be read, or
    /// [`SliderError::OptionsParse`] if it does not parse.
    pub fn load(path: &Path) -> Result<Self, SliderError> {
        let content = std::fs::read_to_string(path).map_err(SliderError::Io)?;
        Self::from_toml(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`SliderError::OptionsParse`] if serialization fails, or
    /// [`SliderError::Io`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), SliderError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| SliderError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(SliderError::Io)?;
        }
        std::fs::write(path, content).map_err(SliderError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::EasingFunction;
    use crate::model::Step;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[range]
maximum = 1000.0
step = { fixed = 1.0 }

[animation]
enabled = false
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.range.maximum, 1000.0);
        assert_eq!(opts.range.step, Step::Fixed(1.0));
        assert_eq!(opts.range.minimum, 0.0);
        assert!(!opts.animation.enabled);
        assert_eq!(opts.animation.duration_ms, 500);
        assert_eq!(opts.layout.thumb_inset, 5.0);
        assert_eq!(opts.style.font_size, 10.0);
    }

    #[test]
    fn step_can_be_disabled_in_toml() {
        let opts = Options::from_toml("[range]\nstep = \"disabled\"\n").unwrap();
        assert_eq!(opts.range.step, Step::Disabled);
    }

    #[test]
    fn malformed_toml_is_options_parse_error() {
        let err = Options::from_toml("[range\nminimum = ").unwrap_err();
        assert!(matches!(err, SliderError::OptionsParse(_)));
    }

    #[test]
    fn animation_options_build_transition() {
        let mut anim = AnimationOptions {
            duration_ms: 250,
            easing: EasingFunction::Linear,
            ..AnimationOptions::default()
        };
        let t = anim.transition();
        assert!(t.animated);
        assert_eq!(t.duration.as_millis(), 250);
        assert_eq!(t.easing, EasingFunction::Linear);

        anim.enabled = false;
        assert!(!anim.transition().animated);
    }

    #[test]
    fn save_load_and_list_presets() {
        let dir = tempfile::tempdir().unwrap();
        let mut opts = Options::default();
        opts.range.maximum = 50.0;
        opts.save(&dir.path().join("presets/wide.toml")).unwrap();
        Options::default()
            .save(&dir.path().join("presets/basic.toml"))
            .unwrap();
        std::fs::write(dir.path().join("presets/notes.txt"), "ignored").unwrap();

        let loaded = Options::load(&dir.path().join("presets/wide.toml")).unwrap();
        assert_eq!(loaded, opts);
        assert_eq!(
            Options::list_presets(&dir.path().join("presets")),
            vec!["basic".to_owned(), "wide".to_owned()]
        );
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Options::load(Path::new("/nonexistent/slider.toml")).unwrap_err();
        assert!(matches!(err, SliderError::Io(_)));
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("range"));
        assert!(props.contains_key("layout"));
        assert!(props.contains_key("animation"));
        assert!(!props.contains_key("style"));

        let animation = &props["animation"]["properties"];
        assert!(animation.get("duration_ms").is_some());
        assert!(animation.get("easing").is_none());
    }
}
