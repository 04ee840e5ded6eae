pub mod parse;
pub mod point;
pub mod rect;

pub use parse::ParseGeometryError;
pub use point::Point;
pub use rect::Rect;

/// Bits used for equality and hashing. Every NaN maps to the same pattern so
/// NaN coordinates compare equal to each other, while `0.0` and `-0.0` stay
/// distinct.
pub(crate) fn canonical_bits(value: f64) -> u64 {
    if value.is_nan() {
        f64::NAN.to_bits()
    } else {
        value.to_bits()
    }
}

pub(crate) fn same_bits(a: f64, b: f64) -> bool {
    canonical_bits(a) == canonical_bits(b)
}

fn lerp(a: f64, b: f64, percent: f64) -> f64 {
    a + (b - a) * percent
}
