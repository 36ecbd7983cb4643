//! Geometry and color mapping for the hue/lightness wheel

use swatch_model::{
    DEFAULT_MAX_LIGHTNESS, DEFAULT_MIN_LIGHTNESS, HslColor, InternalSwatch,
    normalize_hue,
};

/// A position in host coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f32,
    /// Vertical coordinate, growing downwards
    pub y: f32,
}

impl Point {
    /// Create a point
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned bounds of the wheel control
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    /// Create bounds
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Hue and lightness picked at a wheel position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelSample {
    /// Hue in degrees, `[0, 360)`
    pub hue: f32,
    /// Lightness between the wheel's darkest and lightest values
    pub lightness: f32,
    /// Distance from the center used for the lightness, `[0, radius]`
    pub distance: f32,
}

/// Circle the wheel is drawn in: hue around the circumference, lightness
/// falling from the center to the rim
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelGeometry {
    /// Center in host coordinates
    pub center: Point,
    /// Radius, half the control's width
    pub radius: f32,
}

impl WheelGeometry {
    /// Wheel centered at `center` with the given radius
    pub fn new(center: Point, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Wheel filling the width of `bounds`
    pub fn from_bounds(bounds: Rect) -> Self {
        Self {
            center: Point::new(
                bounds.x + bounds.width / 2.0,
                bounds.y + bounds.height / 2.0,
            ),
            radius: bounds.width / 2.0,
        }
    }

    /// Offset of `pos` from the center
    pub fn to_local(&self, pos: Point) -> (f32, f32) {
        (pos.x - self.center.x, pos.y - self.center.y)
    }

    /// Map an offset from the center to hue and lightness.
    ///
    /// With `locked_hue` the hue is fixed and only the projection of the
    /// offset onto that hue's direction moves the lightness.
    pub fn color_at(
        &self,
        dx: f32,
        dy: f32,
        locked_hue: Option<f32>,
    ) -> WheelSample {
        if self.radius <= 0.0 || !self.radius.is_finite() {
            let hue = locked_hue.map(normalize_hue).unwrap_or(0.0);
            return WheelSample {
                hue,
                lightness: DEFAULT_MAX_LIGHTNESS,
                distance: 0.0,
            };
        }

        let (hue, distance) = match locked_hue {
            Some(locked) => {
                let angle = locked.to_radians();
                let projection = dx * angle.cos() + dy * angle.sin();
                (normalize_hue(locked), projection.clamp(0.0, self.radius))
            }
            None => {
                let hue = normalize_hue(dy.atan2(dx).to_degrees());
                let distance = (dx * dx + dy * dy).sqrt().min(self.radius);
                (hue, distance)
            }
        };

        WheelSample {
            hue,
            lightness: lightness_at(distance / self.radius),
            distance,
        }
    }

    /// [`Self::color_at`] for a position in host coordinates
    pub fn sample(&self, pos: Point, locked_hue: Option<f32>) -> WheelSample {
        let (dx, dy) = self.to_local(pos);
        self.color_at(dx, dy, locked_hue)
    }

    /// Offset from the center where the knob for `color` sits
    pub fn knob_offset(&self, color: &HslColor) -> (f32, f32) {
        let span = DEFAULT_MAX_LIGHTNESS - DEFAULT_MIN_LIGHTNESS;
        let ratio = ((DEFAULT_MAX_LIGHTNESS - color.lightness()) / span)
            .clamp(0.0, 1.0);
        let distance = ratio * self.radius.max(0.0);
        let angle = color.hue().to_radians();
        (angle.cos() * distance, angle.sin() * distance)
    }

    /// Knob position for `color` in host coordinates
    pub fn knob_position(&self, color: &HslColor) -> Point {
        let (dx, dy) = self.knob_offset(color);
        Point::new(self.center.x + dx, self.center.y + dy)
    }
}

/// Linear lightness ramp: `ratio` 0 at the center, 1 at the rim
fn lightness_at(ratio: f32) -> f32 {
    DEFAULT_MAX_LIGHTNESS
        - ratio.clamp(0.0, 1.0) * (DEFAULT_MAX_LIGHTNESS - DEFAULT_MIN_LIGHTNESS)
}

/// Move `current` to a new primary hue and lightness.
///
/// Saturation is kept. A gradient keeps the hue delta between its stops, so
/// the whole gradient turns rigidly around the wheel.
pub fn apply_wheel_color(
    current: &InternalSwatch,
    hue: f32,
    lightness: f32,
) -> InternalSwatch {
    let primary = current.primary();
    let moved = HslColor::new(hue, primary.saturation(), lightness);
    match current {
        InternalSwatch::Solid { .. } => InternalSwatch::Solid { color: moved },
        InternalSwatch::Gradient { colors: [first, second] } => {
            let delta = second.hue() - first.hue();
            InternalSwatch::Gradient {
                colors: [
                    moved,
                    HslColor::new(hue + delta, second.saturation(), lightness),
                ],
            }
        }
    }
}

/// Unbounded angle used to draw the secondary knob.
///
/// It follows the secondary stop's hue but always along the shorter arc, so
/// crossing 0/360 never spins the knob a full turn. Display only.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VisualHue {
    value: f32,
}

impl VisualHue {
    /// Start at `hue`
    pub fn new(hue: f32) -> Self {
        Self { value: hue }
    }

    /// Current angle, not wrapped
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Step towards `target` (any angle) along the shorter arc
    pub fn track(&mut self, target: f32) -> f32 {
        let current = self.value.rem_euclid(360.0);
        let mut delta = target.rem_euclid(360.0) - current;
        if delta > 180.0 {
            delta -= 360.0;
        } else if delta < -180.0 {
            delta += 360.0;
        }
        self.value += delta;
        self.value
    }

    /// Hue the secondary knob should show for `swatch`
    pub fn target_for(swatch: &InternalSwatch) -> f32 {
        swatch.secondary().map(|color| color.hue()).unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 0.01;

    fn wheel() -> WheelGeometry {
        WheelGeometry::new(Point::new(100.0, 100.0), 100.0)
    }

    #[test]
    fn test_center_is_lightest_and_rim_darkest() {
        let geometry = wheel();
        assert!((geometry.color_at(0.0, 0.0, None).lightness - 90.0).abs() < EPS);
        assert!((geometry.color_at(100.0, 0.0, None).lightness - 50.0).abs() < EPS);
        // past the rim clamps to the rim
        assert!((geometry.color_at(0.0, 300.0, None).lightness - 50.0).abs() < EPS);
        assert!((geometry.color_at(50.0, 0.0, None).lightness - 70.0).abs() < EPS);
    }

    #[test]
    fn test_hue_follows_angle() {
        let geometry = wheel();
        assert!((geometry.color_at(10.0, 0.0, None).hue - 0.0).abs() < EPS);
        assert!((geometry.color_at(0.0, 10.0, None).hue - 90.0).abs() < EPS);
        assert!((geometry.color_at(-10.0, 0.0, None).hue - 180.0).abs() < EPS);
        assert!((geometry.color_at(0.0, -10.0, None).hue - 270.0).abs() < EPS);
    }

    #[test]
    fn test_locked_hue_projects_onto_axis() {
        let geometry = wheel();
        let sample = geometry.color_at(30.0, 40.0, Some(0.0));
        assert_eq!(sample.hue, 0.0);
        assert!((sample.distance - 30.0).abs() < EPS);

        // behind the center clamps to zero
        let behind = geometry.color_at(-30.0, 5.0, Some(0.0));
        assert_eq!(behind.distance, 0.0);
        assert!((behind.lightness - 90.0).abs() < EPS);

        let far = geometry.color_at(0.0, 500.0, Some(90.0));
        assert!((far.distance - 100.0).abs() < EPS);
    }

    #[test]
    fn test_zero_radius_is_safe() {
        let geometry = WheelGeometry::new(Point::default(), 0.0);
        let sample = geometry.color_at(5.0, 5.0, None);
        assert_eq!(sample.distance, 0.0);
        assert_eq!(sample.lightness, 90.0);
    }

    #[test]
    fn test_knob_offset_inverts_sample() {
        let geometry = wheel();
        let color = HslColor::new(45.0, 100.0, 70.0);
        let (dx, dy) = geometry.knob_offset(&color);
        let sample = geometry.color_at(dx, dy, None);
        assert!((sample.hue - 45.0).abs() < 0.1);
        assert!((sample.lightness - 70.0).abs() < 0.1);
    }

    #[test]
    fn test_from_bounds_uses_half_width() {
        let geometry = WheelGeometry::from_bounds(Rect::new(10.0, 20.0, 200.0, 240.0));
        assert_eq!(geometry.center, Point::new(110.0, 140.0));
        assert_eq!(geometry.radius, 100.0);
    }

    #[test]
    fn test_gradient_moves_rigidly() {
        let current = InternalSwatch::Gradient {
            colors: [
                HslColor::new(10.0, 100.0, 60.0),
                HslColor::new(250.0, 100.0, 60.0),
            ],
        };
        let moved = apply_wheel_color(&current, 100.0, 80.0);
        let [a, b] = match moved {
            InternalSwatch::Gradient { colors } => colors,
            other => panic!("expected gradient, got {other:?}"),
        };
        assert!((a.hue() - 100.0).abs() < EPS);
        assert!((b.hue() - 340.0).abs() < EPS);
        assert_eq!(a.lightness(), 80.0);
        assert_eq!(b.lightness(), 80.0);
    }

    #[test]
    fn test_solid_keeps_saturation() {
        let current = InternalSwatch::Solid {
            color: HslColor::new(0.0, 100.0, 50.0),
        };
        let moved = apply_wheel_color(&current, 200.0, 65.0);
        assert_eq!(moved.mode(), swatch_model::SwatchMode::Solid);
        assert_eq!(moved.primary().saturation(), 100.0);
        assert_eq!(moved.primary().hue(), 200.0);
    }

    #[test]
    fn test_visual_hue_takes_short_arc() {
        let mut visual = VisualHue::new(350.0);
        assert!((visual.track(10.0) - 370.0).abs() < EPS);
        assert!((visual.track(350.0) - 350.0).abs() < EPS);
        assert!((visual.track(170.0) - 170.0).abs() < EPS);
    }

    #[test]
    fn test_visual_hue_steps_are_bounded() {
        let mut visual = VisualHue::default();
        let mut previous = visual.value();
        let targets = [359.0, 1.0, 181.0, 0.5, 270.0, 90.0, 720.5, -45.0];
        for target in targets {
            let next = visual.track(target);
            assert!((next - previous).abs() <= 180.0 + EPS);
            assert!((next.rem_euclid(360.0) - target.rem_euclid(360.0)).abs() < EPS);
            previous = next;
        }
    }
}
