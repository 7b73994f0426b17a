//! Mapping from design-space units to rendered pixels.

/// Side length of the canvas every icon is authored against.
pub const CANONICAL_CANVAS: f64 = 1024.0;

/// Map `value` (authored against `canonical`) onto a container of size `actual`.
///
/// Linear in `value`; returns `0.0` when `actual` is zero. `canonical` must be non-zero.
pub fn scale(value: f64, actual: f64, canonical: f64) -> f64 {
    value * actual / canonical
}

/// Scaling context for one target render size.
///
/// Computed once per rendered image and passed explicitly to layout and drawing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasScale {
    actual: f64,
    expected: f64,
}

impl CanvasScale {
    /// Context for a square canvas of `actual` pixels authored against `expected` units.
    pub fn new(actual: f64, expected: f64) -> Self {
        Self { actual, expected }
    }

    /// Context for a canvas of `actual` pixels authored against [`CANONICAL_CANVAS`].
    pub fn for_pixels(actual: u32) -> Self {
        Self::new(f64::from(actual), CANONICAL_CANVAS)
    }

    /// Context that returns design values unchanged.
    pub fn identity() -> Self {
        Self::new(CANONICAL_CANVAS, CANONICAL_CANVAS)
    }

    /// Rendered container size.
    pub fn actual(self) -> f64 {
        self.actual
    }

    /// Design-space size the icon was authored against.
    pub fn expected(self) -> f64 {
        self.expected
    }

    /// Pixels per design unit.
    pub fn factor(self) -> f64 {
        scale(1.0, self.actual, self.expected)
    }

    /// Convert a design-space length to pixels.
    pub fn px(self, value: f64) -> f64 {
        scale(value, self.actual, self.expected)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/scale.rs"]
mod tests;
