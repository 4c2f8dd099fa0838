//! Numeric slider state: range, current value, snap step, and the
//! clamp/quantize/fraction mappings built on them.
//!
//! [`SliderModel`] has no rendering knowledge. It guarantees
//! `minimum < maximum` (both finite) and `minimum <= current <= maximum`
//! at all times; setters that would break the range invariant are rejected
//! with [`SliderError::InvalidRange`].

mod step;

pub use step::Step;

use crate::error::{check_range, SliderError};

/// Range, value and step configuration of a slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderModel {
    minimum: f64,
    maximum: f64,
    current: f64,
    step: Step,
}

impl SliderModel {
    /// Build a model, validating the range.
    ///
    /// `value` is restricted to the range without quantization and `step`
    /// is normalized against the span.
    ///
    /// # Errors
    ///
    /// Returns [`SliderError::InvalidRange`] if the bounds are not finite
    /// or `minimum >= maximum`.
    pub fn new(
        minimum: f64,
        maximum: f64,
        value: f64,
        step: Step,
    ) -> Result<Self, SliderError> {
        check_range(minimum, maximum)?;
        let mut model = Self {
            minimum,
            maximum,
            current: minimum,
            step: step.renormalized(maximum - minimum),
        };
        model.current = model.restrict(value);
        Ok(model)
    }

    /// Lower bound.
    #[must_use]
    pub fn minimum(&self) -> f64 {
        self.minimum
    }

    /// Upper bound.
    #[must_use]
    pub fn maximum(&self) -> f64 {
        self.maximum
    }

    /// Current value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.current
    }

    /// Normalized snap step.
    #[must_use]
    pub fn step(&self) -> Step {
        self.step
    }

    /// `maximum - minimum`, always positive.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.maximum - self.minimum
    }

    /// Replace both bounds at once.
    ///
    /// The current value is restricted into the new range and the step is
    /// re-normalized against the new span. On error the model is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`SliderError::InvalidRange`] and leaves the model unchanged
    /// if the new bounds are not finite or not ordered.
    pub fn set_range(
        &mut self,
        minimum: f64,
        maximum: f64,
    ) -> Result<(), SliderError> {
        check_range(minimum, maximum)?;
        self.minimum = minimum;
        self.maximum = maximum;
        self.step = self.step.renormalized(self.span());
        self.current = self.restrict(self.current);
        Ok(())
    }

    /// Replace the lower bound. See [`set_range`](Self::set_range).
    ///
    /// # Errors
    ///
    /// Returns [`SliderError::InvalidRange`] if `minimum` is not below the
    /// current maximum.
    pub fn set_minimum(&mut self, minimum: f64) -> Result<(), SliderError> {
        self.set_range(minimum, self.maximum)
    }

    /// Replace the upper bound. See [`set_range`](Self::set_range).
    ///
    /// # Errors
    ///
    /// Returns [`SliderError::InvalidRange`] if `maximum` is not above the
    /// current minimum.
    pub fn set_maximum(&mut self, maximum: f64) -> Result<(), SliderError> {
        self.set_range(self.minimum, maximum)
    }

    /// Set the current value, restricted to the range but not quantized.
    ///
    /// Returns the value actually stored.
    pub fn set_value(&mut self, value: f64) -> f64 {
        self.current = self.restrict(value);
        self.current
    }

    /// Set the snap step. `None` or a non-positive step disables snapping;
    /// a step larger than the span is capped to the span. The current value
    /// is left as-is.
    pub fn set_step(&mut self, step: Option<f64>) {
        self.step = Step::normalized(step, self.span());
    }

    /// Restrict `value` to `[minimum, maximum]`, then snap it with
    /// [`quantize`](Self::quantize). NaN maps to the minimum.
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        self.quantize(self.restrict(value))
    }

    /// Snap `value` to the nearest step point.
    ///
    /// The lower snap is `minimum + k * step` with `k` the whole number of
    /// steps between `minimum` and `value`; the upper snap is the next one,
    /// capped at `maximum`. Equal distances resolve to the lower snap. With
    /// stepping disabled the value passes through unchanged.
    #[must_use]
    pub fn quantize(&self, value: f64) -> f64 {
        let Step::Fixed(step) = self.step else {
            return value;
        };

        let steps = ((value - self.minimum) / step).trunc();
        let lower = self.snap_point(steps, step);
        let upper = self.snap_point(steps + 1.0, step);

        if value - lower > upper - value {
            upper
        } else {
            lower
        }
    }

    /// Position of `value` within the range, `0.0` at the minimum and `1.0`
    /// at the maximum. Not clamped.
    #[must_use]
    pub fn value_to_fraction(&self, value: f64) -> f64 {
        (value - self.minimum) / self.span()
    }

    /// Inverse of [`value_to_fraction`](Self::value_to_fraction). The
    /// fraction need not lie in `[0, 1]`; callers clamp the resulting value.
    #[must_use]
    pub fn fraction_to_value(&self, fraction: f64) -> f64 {
        self.minimum + fraction * self.span()
    }

    // Snap points share one formula so a snapped value re-snaps to itself.
    fn snap_point(&self, steps: f64, step: f64) -> f64 {
        (self.minimum + steps * step).min(self.maximum)
    }

    fn restrict(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.minimum;
        }
        value.clamp(self.minimum, self.maximum)
    }
}

impl Default for SliderModel {
    /// `[0, 1]`, value `0`, step `0.1`.
    fn default() -> Self {
        Self {
            minimum: 0.0,
            maximum: 1.0,
            current: 0.0,
            step: Step::DEFAULT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(min: f64, max: f64, step: Option<f64>) -> SliderModel {
        let mut m = SliderModel::new(min, max, min, Step::Disabled).unwrap();
        m.set_step(step);
        m
    }

    #[test]
    fn defaults() {
        let m = SliderModel::default();
        assert_eq!(m.minimum(), 0.0);
        assert_eq!(m.maximum(), 1.0);
        assert_eq!(m.value(), 0.0);
        assert_eq!(m.step(), Step::Fixed(0.1));
    }

    #[test]
    fn constructor_rejects_empty_range() {
        assert!(SliderModel::new(1.0, 1.0, 1.0, Step::Disabled).is_err());
        assert!(SliderModel::new(2.0, 1.0, 1.0, Step::Disabled).is_err());
    }

    #[test]
    fn constructor_restricts_value_without_snapping() {
        let m = SliderModel::new(0.0, 10.0, 3.3, Step::Fixed(1.0)).unwrap();
        assert_eq!(m.value(), 3.3);
        let m = SliderModel::new(0.0, 10.0, 42.0, Step::Fixed(1.0)).unwrap();
        assert_eq!(m.value(), 10.0);
    }

    #[test]
    fn quantize_picks_nearest_snap() {
        let m = model(0.0, 1000.0, Some(1.0));
        assert_eq!(m.quantize(537.6), 538.0);
        assert_eq!(m.quantize(537.4), 537.0);
    }

    #[test]
    fn quantize_tie_goes_to_lower_snap() {
        let m = model(0.0, 10.0, Some(2.0));
        assert_eq!(m.quantize(1.0), 0.0);
        assert_eq!(m.quantize(3.0), 2.0);
    }

    #[test]
    fn quantize_upper_snap_caps_at_maximum() {
        // Snaps are 0, 3, 6, 9 and the maximum itself.
        let m = model(0.0, 10.0, Some(3.0));
        assert_eq!(m.quantize(9.4), 9.0);
        assert_eq!(m.quantize(9.6), 10.0);
        assert_eq!(m.quantize(10.0), 10.0);
    }

    #[test]
    fn quantize_offset_minimum() {
        let m = model(-5.0, 5.0, Some(2.5));
        assert_eq!(m.quantize(-3.0), -2.5);
        assert_eq!(m.quantize(1.0), 0.0);
        assert_eq!(m.quantize(4.0), 5.0);
    }

    #[test]
    fn quantize_with_vanishing_step_keeps_value() {
        let m = SliderModel::new(0.0, 1000.0, 0.0, Step::Fixed(1e-307)).unwrap();
        assert_eq!(m.step(), Step::Disabled);
        assert_eq!(m.clamp(500.0), 500.0);

        let mut m = model(0.0, 1000.0, Some(1.0));
        m.set_step(Some(1e-300));
        assert_eq!(m.clamp(537.25), 537.25);
    }

    #[test]
    fn quantize_without_step_is_identity() {
        let m = model(0.0, 10.0, None);
        assert_eq!(m.quantize(3.25), 3.25);
    }

    #[test]
    fn clamp_restricts_then_snaps() {
        let m = model(0.0, 1000.0, Some(1.0));
        assert_eq!(m.clamp(-20.0), 0.0);
        assert_eq!(m.clamp(1500.0), 1000.0);
        assert_eq!(m.clamp(12.7), 13.0);
        assert_eq!(m.clamp(f64::NAN), 0.0);
    }

    #[test]
    fn clamp_is_idempotent_for_fractional_steps() {
        let m = model(0.0, 1.0, Some(0.1));
        for i in 0..=100 {
            let v = f64::from(i) / 100.0;
            let once = m.clamp(v);
            assert_eq!(m.clamp(once), once, "value {v}");
        }
    }

    #[test]
    fn set_step_normalizes_without_requantizing() {
        let mut m = SliderModel::new(0.0, 1000.0, 3.7, Step::Disabled).unwrap();
        m.set_step(Some(-5.0));
        assert_eq!(m.step(), Step::Disabled);
        m.set_step(Some(2000.0));
        assert_eq!(m.step(), Step::Fixed(1000.0));
        assert_eq!(m.value(), 3.7);
    }

    #[test]
    fn set_range_restricts_value_and_step() {
        let mut m = SliderModel::new(0.0, 100.0, 80.0, Step::Fixed(50.0)).unwrap();
        m.set_range(0.0, 20.0).unwrap();
        assert_eq!(m.value(), 20.0);
        assert_eq!(m.step(), Step::Fixed(20.0));
    }

    #[test]
    fn rejected_range_leaves_model_untouched() {
        let mut m = SliderModel::default();
        let before = m;
        assert!(m.set_minimum(1.0).is_err());
        assert!(m.set_maximum(-1.0).is_err());
        assert_eq!(m, before);
    }

    #[test]
    fn fraction_mapping() {
        let m = model(10.0, 20.0, None);
        assert_eq!(m.value_to_fraction(15.0), 0.5);
        assert_eq!(m.fraction_to_value(0.25), 12.5);
        // Unclamped on both sides.
        assert_eq!(m.fraction_to_value(1.5), 25.0);
        assert_eq!(m.value_to_fraction(5.0), -0.5);
    }
}
