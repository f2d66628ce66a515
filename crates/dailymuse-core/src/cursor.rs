//! Two-element custom cursor: a dot pinned to the pointer and an outline that
//! trails it.

use std::time::Duration;

/// Time the outline takes to catch up with the pointer.
pub const OUTLINE_LAG: Duration = Duration::from_millis(500);

/// Pointer position in client pixels
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Linear interpolation toward `to`, `t` clamped to `[0, 1]`
    pub fn lerp(self, to: Point, t: f64) -> Point {
        let t = t.clamp(0.0, 1.0);
        Point::new(self.x + (to.x - self.x) * t, self.y + (to.y - self.y) * t)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CursorTrail {
    dot: Point,
    outline: Point,
}

impl CursorTrail {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a pointer move.
    pub fn move_to(&mut self, pointer: Point) {
        self.dot = pointer;
        self.outline = pointer;
    }

    pub fn dot(&self) -> Point {
        self.dot
    }

    /// Outline position `elapsed` after it started from `from`.
    pub fn outline_at(&self, from: Point, elapsed: Duration) -> Point {
        let t = elapsed.as_secs_f64() / OUTLINE_LAG.as_secs_f64();
        from.lerp(self.outline, t)
    }

    pub fn dot_style(&self) -> String {
        format!("left: {}px; top: {}px;", self.dot.x, self.dot.y)
    }

    /// The outline is positioned at the target and eased there by CSS.
    pub fn outline_style(&self) -> String {
        let ms = OUTLINE_LAG.as_millis();
        format!(
            "left: {}px; top: {}px; transition: left {ms}ms linear, top {ms}ms linear;",
            self.outline.x, self.outline.y
        )
    }
}
