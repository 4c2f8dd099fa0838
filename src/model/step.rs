use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Snap increment used while dragging.
///
/// Serde serializes as `"disabled"` or `{ fixed = 0.5 }` so TOML presets
/// stay readable.
#[derive(
    Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// Continuous values, no snapping.
    Disabled,
    /// Snap to `minimum + k * step`. Always positive and no larger than the
    /// range span once normalized.
    Fixed(f64),
}

impl Step {
    /// Default snap increment for a freshly created slider.
    pub const DEFAULT: Step = Step::Fixed(0.1);

    /// Most steps a range may hold. Beyond 2^53 the step index is no
    /// longer an exact integer in `f64`.
    pub const MAX_STEP_COUNT: f64 = 9_007_199_254_740_992.0;

    /// Normalize a requested step against a range span.
    ///
    /// `None`, non-positive and non-finite steps become [`Step::Disabled`],
    /// as do steps so small that the span holds more than
    /// [`MAX_STEP_COUNT`](Self::MAX_STEP_COUNT) of them. Steps larger than
    /// `span` are capped to `span`.
    #[must_use]
    pub fn normalized(requested: Option<f64>, span: f64) -> Self {
        match requested {
            Some(step) if step.is_finite() && step > 0.0 => {
                let count = span / step;
                if count.is_finite() && count <= Self::MAX_STEP_COUNT {
                    Self::Fixed(step.min(span))
                } else {
                    Self::Disabled
                }
            }
            _ => Self::Disabled,
        }
    }

    /// Re-apply normalization against a new span.
    #[must_use]
    pub fn renormalized(self, span: f64) -> Self {
        Self::normalized(self.increment(), span)
    }

    /// The increment, if stepping is enabled.
    #[must_use]
    pub fn increment(self) -> Option<f64> {
        match self {
            Self::Disabled => None,
            Self::Fixed(step) => Some(step),
        }
    }

    /// Whether stepping is enabled.
    #[must_use]
    pub fn is_enabled(self) -> bool {
        matches!(self, Self::Fixed(_))
    }
}

impl Default for Step {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_positive_steps_disable_snapping() {
        assert_eq!(Step::normalized(Some(-5.0), 1000.0), Step::Disabled);
        assert_eq!(Step::normalized(Some(0.0), 1000.0), Step::Disabled);
        assert_eq!(Step::normalized(None, 1000.0), Step::Disabled);
        assert_eq!(Step::normalized(Some(f64::NAN), 1000.0), Step::Disabled);
    }

    #[test]
    fn oversized_step_caps_to_span() {
        assert_eq!(Step::normalized(Some(2000.0), 1000.0), Step::Fixed(1000.0));
        assert_eq!(Step::normalized(Some(1000.0), 1000.0), Step::Fixed(1000.0));
    }

    #[test]
    fn vanishing_steps_disable_snapping() {
        assert_eq!(Step::normalized(Some(1e-307), 1000.0), Step::Disabled);
        assert_eq!(Step::normalized(Some(1e-20), 1000.0), Step::Disabled);
        assert_eq!(Step::normalized(Some(1e-9), 1000.0), Step::Fixed(1e-9));
    }

    #[test]
    fn renormalize_caps_existing_step() {
        let step = Step::Fixed(5.0);
        assert_eq!(step.renormalized(2.0), Step::Fixed(2.0));
        assert_eq!(Step::Disabled.renormalized(2.0), Step::Disabled);
    }

    #[test]
    fn toml_representation() {
        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            step: Step,
        }
        let text = toml::to_string(&Wrapper { step: Step::Fixed(0.5) }).unwrap();
        let parsed: Wrapper = toml::from_str(&text).unwrap();
        assert_eq!(parsed.step, Step::Fixed(0.5));

        let parsed: Wrapper = toml::from_str("step = \"disabled\"").unwrap();
        assert_eq!(parsed.step, Step::Disabled);
    }
}
