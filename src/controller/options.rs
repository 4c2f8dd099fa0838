//! Options methods for SliderController

use std::path::Path;

use super::{model_from_options, SliderController};
use crate::animation::AnimationDriver;
use crate::error::SliderError;
use crate::label::LabelRenderer;
use crate::options::Options;

impl<L: LabelRenderer, A: AnimationDriver> SliderController<L, A> {
    /// Replace all options. The range is validated first; on error nothing
    /// changes. Never animates, even mid-drag.
    ///
    /// # Errors
    ///
    /// Returns [`SliderError::InvalidRange`] if `options.range` is invalid.
    pub fn set_options(&mut self, options: &Options) -> Result<(), SliderError> {
        let model = model_from_options(options)?;
        self.model = model;
        self.layout = options.layout;
        self.animation = options.animation;
        self.style = options.style;
        self.sync_session();
        self.set_bounds(self.geometry.bounds());
        Ok(())
    }

    /// Snapshot of the options in effect, with the current value.
    #[must_use]
    pub fn options(&self) -> Options {
        let mut options = Options {
            layout: self.layout,
            animation: self.animation,
            style: self.style,
            ..Options::default()
        };
        options.range.minimum = self.model.minimum();
        options.range.maximum = self.model.maximum();
        options.range.value = self.model.value();
        options.range.step = self.model.step();
        options
    }

    /// Load a named preset from the presets directory.
    /// Returns true on success.
    pub fn load_preset(&mut self, name: &str, presets_dir: &Path) -> bool {
        let path = presets_dir.join(format!("{name}.toml"));
        match Options::load(&path).and_then(|opts| self.set_options(&opts)) {
            Ok(()) => {
                log::info!("Loaded slider preset '{name}'");
                self.active_preset = Some(name.to_owned());
                true
            }
            Err(e) => {
                log::error!("Failed to load slider preset '{name}': {e}");
                false
            }
        }
    }

    /// Save the current options as a named preset.
    /// Returns true on success.
    pub fn save_preset(&mut self, name: &str, presets_dir: &Path) -> bool {
        let path = presets_dir.join(format!("{name}.toml"));
        match self.options().save(&path) {
            Ok(()) => {
                log::info!("Saved slider preset '{name}'");
                self.active_preset = Some(name.to_owned());
                true
            }
            Err(e) => {
                log::error!("Failed to save slider preset '{name}': {e}");
                false
            }
        }
    }
}
