use crate::geometry::parse::{parse_components, ParseGeometryError};
use crate::geometry::{canonical_bits, lerp, same_bits, Point};
use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Axis aligned rectangle stored as its minimum corner plus extent.
///
/// Width and height are not required to be positive. Every operation returns
/// a new rect and leaves `self` untouched.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Rect {
    min_x: f64,
    min_y: f64,
    width: f64,
    height: f64,
}

/// Same as `f64::max(0.0, value)` except NaN passes through and `-0.0`
/// becomes `0.0`.
fn floor_at_zero(value: f64) -> f64 {
    if value.is_nan() || value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Hash bits that treat both zeros as the same value.
fn hash_bits(value: f64) -> u64 {
    if value == 0.0 {
        0
    } else {
        canonical_bits(value)
    }
}

impl Rect {
    pub const fn from_top_left(min_x: f64, min_y: f64, width: f64, height: f64) -> Rect {
        Rect {
            min_x,
            min_y,
            width,
            height,
        }
    }

    pub fn from_center(center_x: f64, center_y: f64, width: f64, height: f64) -> Rect {
        Rect::from_top_left(
            center_x - width / 2.0,
            center_y - height / 2.0,
            width,
            height,
        )
    }

    pub fn from_center_point(center: Point, width: f64, height: f64) -> Rect {
        Rect::from_center(center.x(), center.y(), width, height)
    }

    pub const fn of_size(width: f64, height: f64) -> Rect {
        Rect::from_top_left(0.0, 0.0, width, height)
    }

    pub const fn unit() -> Rect {
        Rect::from_top_left(0.0, 0.0, 1.0, 1.0)
    }

    pub fn from_origin_extent(origin: impl Into<Point>, extent: mint::Vector2<f64>) -> Rect {
        let origin = origin.into();
        Rect::from_top_left(origin.x(), origin.y(), extent.x, extent.y)
    }

    pub const fn min_x(&self) -> f64 {
        self.min_x
    }

    pub const fn min_y(&self) -> f64 {
        self.min_y
    }

    pub const fn width(&self) -> f64 {
        self.width
    }

    pub const fn height(&self) -> f64 {
        self.height
    }

    pub fn max_x(&self) -> f64 {
        self.min_x + self.width
    }

    pub fn max_y(&self) -> f64 {
        self.min_y + self.height
    }

    pub fn mid_x(&self) -> f64 {
        self.min_x + self.width / 2.0
    }

    pub fn mid_y(&self) -> f64 {
        self.min_y + self.height / 2.0
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    pub fn center(&self) -> Point {
        Point::at(self.mid_x(), self.mid_y())
    }

    pub fn origin(&self) -> Point {
        Point::at(self.min_x, self.min_y)
    }

    pub fn extent(&self) -> mint::Vector2<f64> {
        mint::Vector2 {
            x: self.width,
            y: self.height,
        }
    }

    /// Edges count as inside.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.min_x && x <= self.max_x() && y >= self.min_y && y <= self.max_y()
    }

    pub fn contains_point(&self, point: Point) -> bool {
        self.contains(point.x(), point.y())
    }

    /// True when every edge of `other` lies on or inside the edges of `self`.
    pub fn contains_rect(&self, other: Rect) -> bool {
        other.min_x >= self.min_x
            && other.max_x() <= self.max_x()
            && other.min_y >= self.min_y
            && other.max_y() <= self.max_y()
    }

    /// Carves out the part of `self` between the given fractional cut lines.
    ///
    /// Each percentage is relative to this rect's own extent, so
    /// `divide(0.0, 0.0, 1.0, 1.0)` is the identity. Values outside `0..=1`
    /// or a right cut left of the left cut are allowed and give an out of
    /// bounds origin or a negative size.
    #[must_use]
    pub fn divide(
        &self,
        left_percent: f64,
        top_percent: f64,
        right_percent: f64,
        bottom_percent: f64,
    ) -> Rect {
        Rect::from_top_left(
            self.min_x + self.width * left_percent,
            self.min_y + self.height * top_percent,
            self.width * (right_percent - left_percent),
            self.height * (bottom_percent - top_percent),
        )
    }

    /// Shrinks each side independently.
    ///
    /// An axis whose insets use up the whole extent collapses to zero size,
    /// positioned on the original midpoint of that axis.
    #[must_use]
    pub fn inset(&self, left: f64, top: f64, right: f64, bottom: f64) -> Rect {
        let width = floor_at_zero(self.width - left - right);
        let min_x = if width == 0.0 {
            tracing::trace!(rect = %self, left, right, "inset collapsed horizontally");
            self.mid_x()
        } else {
            self.min_x + left
        };

        let height = floor_at_zero(self.height - top - bottom);
        let min_y = if height == 0.0 {
            tracing::trace!(rect = %self, top, bottom, "inset collapsed vertically");
            self.mid_y()
        } else {
            self.min_y + top
        };

        Rect::from_top_left(min_x, min_y, width, height)
    }

    #[must_use]
    pub fn inset_uniform(&self, amount: f64) -> Rect {
        self.inset(amount, amount, amount, amount)
    }

    /// Largest rect of the `desired_width:desired_height` ratio that fits in
    /// `self`, sharing its center. One side always keeps its length.
    #[must_use]
    pub fn aspect_ratio(&self, desired_width: f64, desired_height: f64) -> Rect {
        if self.width / self.height < desired_width / desired_height {
            Rect::from_center(
                self.mid_x(),
                self.mid_y(),
                self.width,
                self.width / desired_width * desired_height,
            )
        } else {
            Rect::from_center(
                self.mid_x(),
                self.mid_y(),
                self.height / desired_height * desired_width,
                self.height,
            )
        }
    }

    /// Maps origin and size from the space of `from_rect` into the space of
    /// `to_rect`.
    #[must_use]
    pub fn scale(&self, from_rect: Rect, to_rect: Rect) -> Rect {
        if from_rect.width == 0.0 || from_rect.height == 0.0 {
            tracing::debug!(%from_rect, "scaling rect through a zero sized rect");
        }

        let width = self.width / from_rect.width * to_rect.width;
        let height = self.height / from_rect.height * to_rect.height;
        let x_percent = (self.min_x - from_rect.min_x) / from_rect.width;
        let y_percent = (self.min_y - from_rect.min_y) / from_rect.height;
        let min_x = x_percent * to_rect.width + to_rect.min_x;
        let min_y = y_percent * to_rect.height + to_rect.min_y;

        Rect::from_top_left(min_x, min_y, width, height)
    }

    /// Shifts the origin by `from_rect`'s origin minus `to_rect`'s origin.
    /// Unlike [`Rect::scale`] this only adds, the size never changes.
    #[must_use]
    pub fn translate(&self, from_rect: Rect, to_rect: Rect) -> Rect {
        Rect::from_top_left(
            self.min_x + from_rect.min_x - to_rect.min_x,
            self.min_y + from_rect.min_y - to_rect.min_y,
            self.width,
            self.height,
        )
    }

    #[must_use]
    pub fn offset_by(&self, dx: f64, dy: f64) -> Rect {
        Rect::from_top_left(self.min_x + dx, self.min_y + dy, self.width, self.height)
    }

    /// Multiplies position and size.
    ///
    /// `min_y` is multiplied by `x_scale`, not `y_scale`. Existing layouts
    /// depend on this, so it is left as is until the intended behaviour is
    /// settled.
    #[must_use]
    pub fn scale_by(&self, x_scale: f64, y_scale: f64) -> Rect {
        Rect::from_top_left(
            self.min_x * x_scale,
            self.min_y * x_scale,
            self.width * x_scale,
            self.height * y_scale,
        )
    }

    #[must_use]
    pub fn resize_from_center(&self, new_width: f64, new_height: f64) -> Rect {
        Rect::from_center(self.mid_x(), self.mid_y(), new_width, new_height)
    }

    #[must_use]
    pub fn left(&self, pixels: f64) -> Rect {
        Rect::from_top_left(self.min_x, self.min_y, pixels, self.height)
    }

    #[must_use]
    pub fn top(&self, pixels: f64) -> Rect {
        Rect::from_top_left(self.min_x, self.min_y, self.width, pixels)
    }

    #[must_use]
    pub fn right(&self, pixels: f64) -> Rect {
        Rect::from_top_left(self.max_x() - pixels, self.min_y, pixels, self.height)
    }

    #[must_use]
    pub fn bottom(&self, pixels: f64) -> Rect {
        Rect::from_top_left(self.min_x, self.max_y() - pixels, self.width, pixels)
    }

    /// Same extent, moved to the origin.
    #[must_use]
    pub fn size(&self) -> Rect {
        Rect::of_size(self.width, self.height)
    }

    pub fn percent_x(&self, percent: f64) -> f64 {
        self.min_x + self.width * percent
    }

    pub fn percent_y(&self, percent: f64) -> f64 {
        self.min_y + self.height * percent
    }

    pub fn to_percent_x(&self, x: f64) -> f64 {
        (x - self.min_x) / self.width
    }

    pub fn to_percent_y(&self, y: f64) -> f64 {
        (y - self.min_y) / self.height
    }

    /// Interpolates every field on its own: `0.0` gives `a`, `1.0` gives `b`.
    pub fn interpolate(a: Rect, b: Rect, percent: f64) -> Rect {
        Rect::from_top_left(
            lerp(a.min_x, b.min_x, percent),
            lerp(a.min_y, b.min_y, percent),
            lerp(a.width, b.width, percent),
            lerp(a.height, b.height, percent),
        )
    }
}

impl PartialEq for Rect {
    fn eq(&self, other: &Self) -> bool {
        same_bits(self.min_x, other.min_x)
            && same_bits(self.min_y, other.min_y)
            && same_bits(self.width, other.width)
            && same_bits(self.height, other.height)
    }
}

impl Eq for Rect {}

impl Hash for Rect {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_bits(self.min_x).hash(state);
        hash_bits(self.min_y).hash(state);
        hash_bits(self.width).hash(state);
        hash_bits(self.height).hash(state);
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rect{{minX={:?}, minY={:?}, width={:?}, height={:?}}}",
            self.min_x, self.min_y, self.width, self.height
        )
    }
}

impl FromStr for Rect {
    type Err = ParseGeometryError;

    /// Parses `"min_x,min_y,width,height"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [min_x, min_y, width, height] = parse_components(s)?;
        Ok(Rect::from_top_left(min_x, min_y, width, height))
    }
}

impl AbsDiffEq for Rect {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.min_x.abs_diff_eq(&other.min_x, epsilon)
            && self.min_y.abs_diff_eq(&other.min_y, epsilon)
            && self.width.abs_diff_eq(&other.width, epsilon)
            && self.height.abs_diff_eq(&other.height, epsilon)
    }
}

impl RelativeEq for Rect {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.min_x.relative_eq(&other.min_x, epsilon, max_relative)
            && self.min_y.relative_eq(&other.min_y, epsilon, max_relative)
            && self.width.relative_eq(&other.width, epsilon, max_relative)
            && self.height.relative_eq(&other.height, epsilon, max_relative)
    }
}

impl UlpsEq for Rect {
    fn default_max_ulps() -> u32 {
        f64::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: f64, max_ulps: u32) -> bool {
        self.min_x.ulps_eq(&other.min_x, epsilon, max_ulps)
            && self.min_y.ulps_eq(&other.min_y, epsilon, max_ulps)
            && self.width.ulps_eq(&other.width, epsilon, max_ulps)
            && self.height.ulps_eq(&other.height, epsilon, max_ulps)
    }
}
