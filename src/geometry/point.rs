use crate::geometry::parse::{parse_components, ParseGeometryError};
use crate::geometry::{canonical_bits, same_bits, Rect};
use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    pub const fn at(x: f64, y: f64) -> Point {
        Point { x, y }
    }

    pub const fn x(&self) -> f64 {
        self.x
    }

    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Maps this point from the space of `from_rect` into the space of
    /// `to_rect`, keeping its fractional position on each axis.
    ///
    /// A zero sized `from_rect` gives infinite or NaN coordinates.
    #[must_use]
    pub fn translate(&self, from_rect: Rect, to_rect: Rect) -> Point {
        if from_rect.width() == 0.0 || from_rect.height() == 0.0 {
            tracing::debug!(%from_rect, "remapping point through a zero sized rect");
        }

        let x_percent = (self.x - from_rect.min_x()) / from_rect.width();
        let y_percent = (self.y - from_rect.min_y()) / from_rect.height();

        Point::at(
            x_percent * to_rect.width() + to_rect.min_x(),
            y_percent * to_rect.height() + to_rect.min_y(),
        )
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        same_bits(self.x, other.x) && same_bits(self.y, other.y)
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        canonical_bits(self.x).hash(state);
        canonical_bits(self.y).hash(state);
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point{{x={:?}, y={:?}}}", self.x, self.y)
    }
}

impl FromStr for Point {
    type Err = ParseGeometryError;

    /// Parses `"x,y"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [x, y] = parse_components(s)?;
        Ok(Point::at(x, y))
    }
}

impl From<mint::Point2<f64>> for Point {
    fn from(p: mint::Point2<f64>) -> Self {
        Point::at(p.x, p.y)
    }
}

impl From<Point> for mint::Point2<f64> {
    fn from(p: Point) -> Self {
        mint::Point2 { x: p.x, y: p.y }
    }
}

impl AbsDiffEq for Point {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}

impl RelativeEq for Point {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
    }
}

impl UlpsEq for Point {
    fn default_max_ulps() -> u32 {
        f64::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: f64, max_ulps: u32) -> bool {
        self.x.ulps_eq(&other.x, epsilon, max_ulps) && self.y.ulps_eq(&other.y, epsilon, max_ulps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(p: Point) -> u64 {
        let mut hasher = DefaultHasher::new();
        p.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn point_accessors() {
        let p = Point::at(3.5, -4.0);

        assert_eq!(p.x(), 3.5);
        assert_eq!(p.y(), -4.0);
    }

    #[test]
    fn point_translate_scales_into_target_space() {
        let p = Point::at(3.0, 4.0);

        assert_eq!(
            p.translate(Rect::of_size(10.0, 10.0), Rect::of_size(100.0, 100.0)),
            Point::at(30.0, 40.0)
        );
    }

    #[test]
    fn point_translate_with_offset_spaces() {
        let from = Rect::from_top_left(10.0, 20.0, 100.0, 50.0);
        let to = Rect::from_top_left(-5.0, 5.0, 10.0, 200.0);

        let p = Point::at(35.0, 45.0).translate(from, to);
        assert_relative_eq!(p, Point::at(-2.5, 105.0));

        // corners map onto corners
        assert_eq!(Point::at(10.0, 20.0).translate(from, to), Point::at(-5.0, 5.0));
        assert_relative_eq!(
            Point::at(from.max_x(), from.max_y()).translate(from, to),
            Point::at(to.max_x(), to.max_y())
        );
    }

    #[test]
    fn point_translate_round_trip() {
        let a = Rect::from_top_left(3.0, -7.0, 13.0, 17.0);
        let b = Rect::from_top_left(100.0, 200.0, 0.3, 900.0);
        let p = Point::at(5.25, 1.5);

        assert_relative_eq!(p.translate(a, b).translate(b, a), p, epsilon = 1e-9);
    }

    #[test]
    fn point_translate_through_empty_rect_is_not_finite() {
        let p = Point::at(1.0, 1.0).translate(Rect::of_size(0.0, 0.0), Rect::unit());

        assert!(p.x().is_infinite());
        assert!(p.y().is_infinite());

        let origin = Point::at(0.0, 0.0).translate(Rect::of_size(0.0, 0.0), Rect::unit());
        assert!(origin.x().is_nan());
    }

    #[test]
    fn point_equality_is_bitwise() {
        assert_eq!(Point::at(1.0, 2.0), Point::at(1.0, 2.0));
        assert_ne!(Point::at(0.0, 1.0), Point::at(-0.0, 1.0));
        assert_eq!(Point::at(f64::NAN, 1.0), Point::at(f64::NAN, 1.0));
        assert_ne!(Point::at(1.0, 2.0), Point::at(2.0, 1.0));
    }

    #[test]
    fn point_hash_matches_equality() {
        assert_eq!(hash_of(Point::at(1.0, 2.0)), hash_of(Point::at(1.0, 2.0)));
        assert_eq!(
            hash_of(Point::at(f64::NAN, 0.0)),
            hash_of(Point::at(-f64::NAN, 0.0))
        );
    }

    #[test]
    fn point_display() {
        assert_eq!(Point::at(1.0, -2.5).to_string(), "Point{x=1.0, y=-2.5}");
    }

    #[test]
    fn point_from_str() {
        assert_eq!("3, 4".parse::<Point>(), Ok(Point::at(3.0, 4.0)));
        assert_eq!(
            "3".parse::<Point>(),
            Err(ParseGeometryError::WrongArity {
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn point_mint_round_trip() {
        let m: mint::Point2<f64> = Point::at(1.0, 2.0).into();
        assert_eq!((m.x, m.y), (1.0, 2.0));
        assert_eq!(Point::from(m), Point::at(1.0, 2.0));
    }

    #[test]
    fn point_bytes_layout() {
        let points = [Point::at(1.0, 2.0), Point::at(3.0, 4.0)];
        let raw: &[f64] = bytemuck::cast_slice(&points);

        assert_eq!(raw, &[1.0, 2.0, 3.0, 4.0]);
    }
}
