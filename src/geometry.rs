//! Track and thumb layout derived from the control bounds.
//!
//! Screen-space math is `f32` (via `glam`), values stay `f64` in the
//! [`SliderModel`]. Nothing here is stored persistently: a
//! [`TrackGeometry`] is rebuilt whenever the bounds change.

use glam::Vec2;

use crate::model::SliderModel;

/// Axis-aligned rectangle in control-local coordinates (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Top-left corner.
    pub origin: Vec2,
    /// Width and height.
    pub size: Vec2,
}

impl Rect {
    /// Rectangle from its top-left corner and size.
    #[must_use]
    pub const fn new(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    /// Width.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    /// Height.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// Bottom-right corner.
    #[must_use]
    pub fn max(&self) -> Vec2 {
        self.origin + self.size
    }

    /// Center point.
    #[must_use]
    pub fn center(&self) -> Vec2 {
        self.origin + self.size * 0.5
    }

    /// Whether `point` lies inside. The top/left edges are inclusive, the
    /// bottom/right edges exclusive.
    #[must_use]
    pub fn contains(&self, point: Vec2) -> bool {
        let max = self.max();
        point.x >= self.origin.x
            && point.y >= self.origin.y
            && point.x < max.x
            && point.y < max.y
    }
}

/// Track rectangle and thumb metrics for the current bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackGeometry {
    bounds: Vec2,
    track: Rect,
    thumb_diameter: f32,
    thumb_inset: f32,
}

impl TrackGeometry {
    /// Lay out the track for `bounds`.
    ///
    /// The track spans the full width, vertically centered with a fixed
    /// `track_height`. The thumb diameter is the bounds height minus the
    /// inset on both sides. Negative sizes are treated as zero.
    #[must_use]
    pub fn new(bounds: Vec2, thumb_inset: f32, track_height: f32) -> Self {
        let bounds = bounds.max(Vec2::ZERO);
        let track_height = track_height.clamp(0.0, bounds.y);
        let track = Rect::new(
            Vec2::new(0.0, (bounds.y - track_height) / 2.0),
            Vec2::new(bounds.x, track_height),
        );

        Self {
            bounds,
            track,
            thumb_diameter: (bounds.y - 2.0 * thumb_inset).max(0.0),
            thumb_inset,
        }
    }

    /// Control bounds this geometry was computed for.
    #[must_use]
    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    /// Track rectangle.
    #[must_use]
    pub fn track(&self) -> Rect {
        self.track
    }

    /// Track width.
    #[must_use]
    pub fn track_width(&self) -> f32 {
        self.track.width()
    }

    /// Logical thumb diameter used for every position mapping.
    #[must_use]
    pub fn thumb_diameter(&self) -> f32 {
        self.thumb_diameter
    }

    /// Gap between the bounds and the resting thumb.
    #[must_use]
    pub fn thumb_inset(&self) -> f32 {
        self.thumb_inset
    }

    /// Distance the thumb center can travel, never negative.
    #[must_use]
    pub fn travel(&self) -> f32 {
        (self.track_width() - self.thumb_diameter).max(0.0)
    }

    /// Horizontal offset of the thumb center for `value`.
    ///
    /// The minimum lands at half a diameter from the left edge and the
    /// maximum at half a diameter from the right edge, so the thumb never
    /// overhangs the track.
    #[must_use]
    pub fn position_for_value(&self, model: &SliderModel, value: f64) -> f32 {
        let fraction = model.value_to_fraction(value) as f32;
        fraction * self.travel() + self.thumb_diameter / 2.0
    }

    /// Value under horizontal offset `x`, before any clamping.
    ///
    /// Offsets outside the thumb's travel map outside the model range; the
    /// caller clamps. With no travel at all the minimum is returned.
    #[must_use]
    pub fn value_for_position(&self, model: &SliderModel, x: f32) -> f64 {
        let travel = self.travel();
        if travel <= 0.0 {
            return model.minimum();
        }
        let fraction = f64::from(x - self.thumb_diameter / 2.0) / f64::from(travel);
        model.fraction_to_value(fraction)
    }

    /// Vertical thumb offset while idle.
    #[must_use]
    pub fn resting_offset(&self) -> f32 {
        self.thumb_inset
    }

    /// Vertical thumb offset while a drag session is active: one full
    /// diameter plus the inset above the control.
    #[must_use]
    pub fn elevated_offset(&self) -> f32 {
        -(self.thumb_diameter + self.thumb_inset)
    }
}

impl Default for TrackGeometry {
    fn default() -> Self {
        Self::new(Vec2::ZERO, 0.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Step;

    fn geometry() -> TrackGeometry {
        TrackGeometry::new(Vec2::new(300.0, 40.0), 5.0, 3.0)
    }

    #[test]
    fn track_is_centered_thin_strip() {
        let g = geometry();
        assert_eq!(g.track(), Rect::new(Vec2::new(0.0, 18.5), Vec2::new(300.0, 3.0)));
        assert_eq!(g.thumb_diameter(), 30.0);
        assert_eq!(g.travel(), 270.0);
    }

    #[test]
    fn extremes_keep_thumb_inside_track() {
        let g = geometry();
        let m = SliderModel::new(0.0, 100.0, 0.0, Step::Disabled).unwrap();
        assert_eq!(g.position_for_value(&m, 0.0), 15.0);
        assert_eq!(g.position_for_value(&m, 100.0), 285.0);
        assert_eq!(g.position_for_value(&m, 50.0), 150.0);
    }

    #[test]
    fn value_for_position_is_unclamped_inverse() {
        let g = geometry();
        let m = SliderModel::new(0.0, 100.0, 0.0, Step::Disabled).unwrap();
        assert!((g.value_for_position(&m, 150.0) - 50.0).abs() < 1e-4);
        assert!(g.value_for_position(&m, 0.0) < 0.0);
        assert!(g.value_for_position(&m, 300.0) > 100.0);
    }

    #[test]
    fn value_for_position_includes_minimum_offset() {
        let g = geometry();
        let m = SliderModel::new(100.0, 200.0, 100.0, Step::Disabled).unwrap();
        assert!((g.value_for_position(&m, 15.0) - 100.0).abs() < 1e-4);
        assert!((g.value_for_position(&m, 285.0) - 200.0).abs() < 1e-4);
    }

    #[test]
    fn zero_travel_maps_to_minimum() {
        let g = TrackGeometry::new(Vec2::new(30.0, 40.0), 5.0, 3.0);
        let m = SliderModel::default();
        assert_eq!(g.travel(), 0.0);
        assert_eq!(g.value_for_position(&m, 20.0), 0.0);
    }

    #[test]
    fn negative_bounds_collapse_to_zero() {
        let g = TrackGeometry::new(Vec2::new(-10.0, 4.0), 5.0, 3.0);
        assert_eq!(g.bounds(), Vec2::new(0.0, 4.0));
        assert_eq!(g.thumb_diameter(), 0.0);
    }

    #[test]
    fn vertical_offsets() {
        let g = geometry();
        assert_eq!(g.resting_offset(), 5.0);
        assert_eq!(g.elevated_offset(), -35.0);
    }

    #[test]
    fn rect_contains_is_half_open() {
        let r = Rect::new(Vec2::new(10.0, 10.0), Vec2::new(20.0, 20.0));
        assert!(r.contains(Vec2::new(10.0, 10.0)));
        assert!(r.contains(Vec2::new(29.9, 29.9)));
        assert!(!r.contains(Vec2::new(30.0, 15.0)));
        assert!(!r.contains(Vec2::new(5.0, 15.0)));
        assert_eq!(r.center(), Vec2::new(20.0, 20.0));
    }
}
