//! Axis-aligned rectangle geometry
//!
//! Screen-space pixels: origin top-left, y grows downward.
//! Edges are derived from `x`, `y`, `w`, `h`; the setters move the rect
//! so that the named edge lands on the given coordinate (size is preserved).

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        debug_assert!(w > 0.0 && h > 0.0, "rect size must be positive");
        Self { x, y, w, h }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    #[inline]
    pub fn set_left(&mut self, left: f32) {
        self.x = left;
    }

    #[inline]
    pub fn set_right(&mut self, right: f32) {
        self.x = right - self.w;
    }

    #[inline]
    pub fn set_top(&mut self, top: f32) {
        self.y = top;
    }

    #[inline]
    pub fn set_bottom(&mut self, bottom: f32) {
        self.y = bottom - self.h;
    }

    /// Center point (used for targeting and drawing, never for collision)
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Strict overlap test: rects that only share an edge do not intersect
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Keep the rect within `[0, max_x]` horizontally
    pub fn clamp_horizontal(&mut self, max_x: f32) {
        if self.left() < 0.0 {
            self.set_left(0.0);
        }
        if self.right() > max_x {
            self.set_right(max_x);
        }
    }
}

/// Anything with a collision/draw box
///
/// Update logic stays on the concrete types; this only exposes bounds.
pub trait Entity {
    fn bounds(&self) -> Rect;
}

impl Entity for Rect {
    fn bounds(&self) -> Rect {
        *self
    }
}
