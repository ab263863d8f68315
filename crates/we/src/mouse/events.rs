use core::fmt;

use super::Button;
use crate::coords::Point;
use crate::keyboard::Mod;

/// A mouse button was pressed.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct MousePress {
    /// Cursor position at the moment of the press.
    pub pos: Point,
    pub button: Button,
    pub mods: Mod,
}

/// A mouse button was released.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct MouseRelease {
    /// Cursor position at the moment of the release.
    pub pos: Point,
    pub button: Button,
    pub mods: Mod,
}

/// The cursor moved from one location to another.
///
/// `from` is where the contiguous move started. `pos == from` is a legal
/// zero-distance move.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct MouseMove {
    pub pos: Point,
    pub from: Point,
}

/// The cursor moved while a button was held down.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct MouseDrag {
    pub pos: Point,
    /// Position at the beginning of the drag.
    pub from: Point,
    /// Button held during the drag.
    pub button: Button,
    pub mods: Mod,
}

/// The cursor entered (`true`) or left (`false`) the window surface.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct MouseEnter(pub bool);

/// Wheel scrolled on the horizontal axis.
///
/// The sign gives the direction; magnitude is device dependent.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct ScrollX {
    pub off: i32,
    pub mods: Mod,
}

/// Wheel scrolled on the vertical axis.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct ScrollY {
    pub off: i32,
    pub mods: Mod,
}

impl MousePress {
    #[inline]
    pub const fn new(pos: Point, button: Button, mods: Mod) -> Self {
        Self { pos, button, mods }
    }
}

impl MouseRelease {
    #[inline]
    pub const fn new(pos: Point, button: Button, mods: Mod) -> Self {
        Self { pos, button, mods }
    }
}

impl MouseMove {
    #[inline]
    pub const fn new(pos: Point, from: Point) -> Self {
        Self { pos, from }
    }

    /// Distance travelled since `from`.
    #[inline]
    pub fn delta(&self) -> Point {
        self.pos - self.from
    }
}

impl MouseDrag {
    #[inline]
    pub const fn new(pos: Point, from: Point, button: Button, mods: Mod) -> Self {
        Self {
            pos,
            from,
            button,
            mods,
        }
    }

    #[inline]
    pub fn delta(&self) -> Point {
        self.pos - self.from
    }
}

impl MouseEnter {
    #[inline]
    pub const fn entered(self) -> bool {
        self.0
    }

    #[inline]
    pub const fn left(self) -> bool {
        !self.0
    }
}

impl From<bool> for MouseEnter {
    #[inline]
    fn from(entered: bool) -> Self {
        MouseEnter(entered)
    }
}

impl ScrollX {
    #[inline]
    pub const fn new(off: i32, mods: Mod) -> Self {
        Self { off, mods }
    }
}

impl ScrollY {
    #[inline]
    pub const fn new(off: i32, mods: Mod) -> Self {
        Self { off, mods }
    }
}

impl fmt::Display for MousePress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{} {} {}}}", self.pos, self.button, self.mods)
    }
}

impl fmt::Display for MouseRelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{} {} {}}}", self.pos, self.button, self.mods)
    }
}

impl fmt::Display for MouseMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{} {}}}", self.pos, self.from)
    }
}

impl fmt::Display for MouseDrag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{{} {} {} {}}}",
            self.pos, self.from, self.button, self.mods
        )
    }
}

impl fmt::Display for MouseEnter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.0 { "enter" } else { "leave" })
    }
}

impl fmt::Display for ScrollX {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{} {}}}", self.off, self.mods)
    }
}

impl fmt::Display for ScrollY {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{} {}}}", self.off, self.mods)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    // ── buttons ───────────────────────────────────────────────────────────

    #[test]
    fn press_display_includes_position_button_and_mods() {
        let ev = MousePress::new(p(10, 20), Button::LEFT, Mod::SHIFT);
        assert_eq!(ev.to_string(), "{(10,20) [left button] 2}");

        let ev = MouseRelease::new(p(0, 0), Button::BUTTON_8, Mod::empty());
        assert_eq!(ev.to_string(), "{(0,0) [button 8] 0}");
    }

    // ── motion ────────────────────────────────────────────────────────────

    #[test]
    fn zero_distance_move_is_legal() {
        let ev = MouseMove::new(p(10, 20), p(10, 20));
        assert_eq!(ev.delta(), Point::zero());
        assert_eq!(ev.to_string(), "{(10,20) (10,20)}");
    }

    #[test]
    fn move_delta() {
        let ev = MouseMove::new(p(15, 5), p(10, 20));
        assert_eq!(ev.delta(), p(5, -15));
    }

    #[test]
    fn drag_keeps_button_and_mods() {
        let ev = MouseDrag::new(p(4, 4), p(1, 2), Button::RIGHT, Mod::ALT);
        assert_eq!(ev.delta(), p(3, 2));
        assert_eq!(ev.button, Button::RIGHT);
        assert!(ev.mods.contains(Mod::ALT));
        assert_eq!(ev.to_string(), "{(4,4) (1,2) [right button] 4}");
    }

    #[test]
    fn delta_at_extreme_positions_does_not_panic() {
        let ev = MouseMove::new(p(i32::MIN, 0), p(1, 0));
        assert_eq!(ev.delta(), p(i32::MAX, 0));

        let ev = MouseDrag::new(p(i32::MAX, i32::MIN), p(-1, 1), Button::LEFT, Mod::empty());
        assert_eq!(ev.delta(), p(i32::MIN, i32::MAX));
    }

    // ── enter / leave ─────────────────────────────────────────────────────

    #[test]
    fn enter_leave_display() {
        assert_eq!(MouseEnter(true).to_string(), "enter");
        assert_eq!(MouseEnter(false).to_string(), "leave");
        assert!(MouseEnter::from(true).entered());
        assert!(MouseEnter::from(false).left());
    }

    // ── scroll ────────────────────────────────────────────────────────────

    #[test]
    fn scroll_sign_is_direction() {
        let up = ScrollY::new(-3, Mod::empty());
        let right = ScrollX::new(1, Mod::CONTROL);
        assert!(up.off < 0);
        assert!(right.off > 0);
        assert_eq!(up.to_string(), "{-3 0}");
        assert_eq!(right.to_string(), "{1 1}");
    }
}
