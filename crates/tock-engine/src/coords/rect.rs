use super::Vec2;

/// Axis-aligned rectangle in logical pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        Vec2::new(self.origin.x + self.size.x / 2.0, self.origin.y + self.size.y / 2.0)
    }

    /// Length of the shorter side.
    #[inline]
    pub fn min_side(self) -> f32 {
        self.size.x.min(self.size.y)
    }

    /// Largest square sharing this rectangle's origin.
    #[inline]
    pub fn square_at_origin(self) -> Self {
        let side = self.min_side().max(0.0);
        Rect::from_origin_size(self.origin, Vec2::new(side, side))
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    // ── square_at_origin ──────────────────────────────────────────────────

    #[test]
    fn square_uses_shorter_side() {
        assert_eq!(r(0.0, 0.0, 200.0, 100.0).square_at_origin(), r(0.0, 0.0, 100.0, 100.0));
        assert_eq!(r(0.0, 0.0, 80.0, 300.0).square_at_origin(), r(0.0, 0.0, 80.0, 80.0));
    }

    #[test]
    fn square_keeps_origin() {
        assert_eq!(r(5.0, 7.0, 20.0, 10.0).square_at_origin(), r(5.0, 7.0, 10.0, 10.0));
    }

    #[test]
    fn square_of_negative_size_is_empty() {
        assert!(r(0.0, 0.0, -4.0, 10.0).square_at_origin().is_empty());
    }

    // ── center ────────────────────────────────────────────────────────────

    #[test]
    fn center_of_offset_rect() {
        assert_eq!(r(10.0, 20.0, 100.0, 50.0).center(), Vec2::new(60.0, 45.0));
    }

    // ── is_empty ──────────────────────────────────────────────────────────

    #[test]
    fn is_empty_zero_size() {
        assert!(r(0.0, 0.0, 0.0, 5.0).is_empty());
        assert!(r(0.0, 0.0, 5.0, 0.0).is_empty());
    }

    #[test]
    fn is_empty_positive_size() {
        assert!(!r(0.0, 0.0, 1.0, 1.0).is_empty());
    }
}
