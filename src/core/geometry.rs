//! Axis-aligned rectangles and per-axis collision correction.

/// Integer rectangle with a top-left origin, in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        debug_assert!(w > 0 && h > 0, "degenerate rect {w}x{h}");
        Self { x, y, w, h }
    }

    #[inline] pub fn left(&self) -> i32 { self.x }
    #[inline] pub fn right(&self) -> i32 { self.x + self.w }
    #[inline] pub fn top(&self) -> i32 { self.y }
    #[inline] pub fn bottom(&self) -> i32 { self.y + self.h }

    #[inline]
    pub fn translate(&mut self, axis: Axis, delta: i32) {
        match axis {
            Axis::X => self.x += delta,
            Axis::Y => self.y += delta,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// True when the two rectangles share a region of positive area.
/// Rectangles that only touch along an edge do not overlap.
#[inline]
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.left() < b.right() && b.left() < a.right() && a.top() < b.bottom() && b.top() < a.bottom()
}

/// Pushes `mover` out of every obstacle it overlaps after moving `delta` along `axis`.
///
/// Moving in the positive direction the leading edge is snapped against the nearest
/// obstacle; otherwise the trailing edge is snapped to the obstacle's far side (this
/// includes `delta == 0`). Only the position on `axis` changes. Returns whether
/// anything was hit.
pub fn resolve_axis_collision<'a, I>(mover: &mut Rect, delta: i32, axis: Axis, obstacles: I) -> bool
where
    I: IntoIterator<Item = &'a Rect>,
{
    // Hits are gathered against the post-move position, before any correction.
    let moved = *mover;
    let mut hit = false;
    for ob in obstacles {
        if !overlaps(&moved, ob) {
            continue;
        }
        hit = true;
        match (axis, delta > 0) {
            (Axis::X, true) => mover.x = mover.x.min(ob.left() - mover.w),
            (Axis::X, false) => mover.x = mover.x.max(ob.right()),
            (Axis::Y, true) => mover.y = mover.y.min(ob.top() - mover.h),
            (Axis::Y, false) => mover.y = mover.y.max(ob.bottom()),
        }
    }
    hit
}
