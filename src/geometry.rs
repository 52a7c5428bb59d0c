// =============================================================================
// GEOMETRY.RS — Pixel rectangles and centering math
//
// Everything the tile map hands to a blit target is expressed in integer
// pixels:
// - `Rect` for source (atlas) and destination (viewport) regions
// - `center_offset` for placing a fixed-size block inside a larger span
// =============================================================================

/// Axis-aligned pixel rectangle. `x`/`y` is the top-left corner.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    #[inline]
    pub const fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle of size `w × h` anchored at the origin.
    #[inline]
    pub const fn sized(w: u32, h: u32) -> Self {
        Self { x: 0, y: 0, w, h }
    }

    /// Exclusive right edge.
    #[inline]
    pub fn right(&self) -> i64 {
        self.x as i64 + self.w as i64
    }

    /// Exclusive bottom edge.
    #[inline]
    pub fn bottom(&self) -> i64 {
        self.y as i64 + self.h as i64
    }

    /// True when `other` lies entirely inside `self`.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// True when the two rectangles share at least one pixel.
    pub fn intersects(&self, other: &Rect) -> bool {
        (self.x as i64) < other.right()
            && (other.x as i64) < self.right()
            && (self.y as i64) < other.bottom()
            && (other.y as i64) < self.bottom()
    }
}

/// Offset that centres a block of `extent` pixels inside `span` pixels.
///
/// Integer division, so an odd remainder leaves the block one pixel closer to
/// the start. Returns `None` when the block does not fit.
#[inline]
pub fn center_offset(span: u32, extent: u32) -> Option<u32> {
    span.checked_sub(extent).map(|slack| slack / 2)
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_offset_exact_fit_is_zero() {
        assert_eq!(center_offset(448, 448), Some(0));
    }

    #[test]
    fn center_offset_rounds_odd_slack_down() {
        // 5 px of slack → 2 px on the leading side, 3 on the trailing side.
        assert_eq!(center_offset(21, 16), Some(2));
    }

    #[test]
    fn center_offset_rejects_oversized_block() {
        assert_eq!(center_offset(100, 101), None);
    }

    #[test]
    fn contains_rect_edges_are_exclusive() {
        let outer = Rect::sized(32, 32);
        assert!(outer.contains_rect(&Rect::new(16, 16, 16, 16)));
        assert!(!outer.contains_rect(&Rect::new(17, 16, 16, 16)));
    }

    #[test]
    fn adjacent_tiles_do_not_intersect() {
        let a = Rect::new(0, 0, 16, 16);
        let b = Rect::new(16, 0, 16, 16);
        assert!(!a.intersects(&b));
        assert!(a.intersects(&Rect::new(15, 15, 16, 16)));
    }
}
