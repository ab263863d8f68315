//! The umbrella event type.
//!
//! Event sources emit [`Event`]; consumers `match` on it. The enum is closed so
//! dispatch code gets exhaustiveness checking.

use core::fmt;

use crate::coords::Point;
use crate::keyboard::{KeyPress, KeyRelease, KeyRepeat, KeyRune, Mod};
use crate::mouse::{MouseDrag, MouseEnter, MouseMove, MousePress, MouseRelease, ScrollX, ScrollY};
use crate::window::{Close, Resize};

/// A window, keyboard or mouse event.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Event {
    // Window
    Close(Close),
    Resize(Resize),

    // Keyboard
    KeyPress(KeyPress),
    KeyRelease(KeyRelease),
    KeyRepeat(KeyRepeat),
    KeyRune(KeyRune),

    // Mouse
    MousePress(MousePress),
    MouseRelease(MouseRelease),
    MouseMove(MouseMove),
    MouseDrag(MouseDrag),
    MouseEnter(MouseEnter),
    ScrollX(ScrollX),
    ScrollY(ScrollY),
}

impl Event {
    /// Stable variant name, suitable for log lines and metrics keys.
    pub const fn kind(&self) -> &'static str {
        match self {
            Event::Close(_) => "close",
            Event::Resize(_) => "resize",
            Event::KeyPress(_) => "key_press",
            Event::KeyRelease(_) => "key_release",
            Event::KeyRepeat(_) => "key_repeat",
            Event::KeyRune(_) => "key_rune",
            Event::MousePress(_) => "mouse_press",
            Event::MouseRelease(_) => "mouse_release",
            Event::MouseMove(_) => "mouse_move",
            Event::MouseDrag(_) => "mouse_drag",
            Event::MouseEnter(_) => "mouse_enter",
            Event::ScrollX(_) => "scroll_x",
            Event::ScrollY(_) => "scroll_y",
        }
    }

    /// Modifier flags, for the variants that record them.
    pub const fn mods(&self) -> Option<Mod> {
        match self {
            Event::KeyPress(e) => Some(e.mods),
            Event::KeyRelease(e) => Some(e.mods),
            Event::KeyRepeat(e) => Some(e.mods),
            Event::MousePress(e) => Some(e.mods),
            Event::MouseRelease(e) => Some(e.mods),
            Event::MouseDrag(e) => Some(e.mods),
            Event::ScrollX(e) => Some(e.mods),
            Event::ScrollY(e) => Some(e.mods),
            Event::Close(_)
            | Event::Resize(_)
            | Event::KeyRune(_)
            | Event::MouseMove(_)
            | Event::MouseEnter(_) => None,
        }
    }

    /// Cursor position, for the pointer variants that carry one.
    pub const fn position(&self) -> Option<Point> {
        match self {
            Event::MousePress(e) => Some(e.pos),
            Event::MouseRelease(e) => Some(e.pos),
            Event::MouseMove(e) => Some(e.pos),
            Event::MouseDrag(e) => Some(e.pos),
            _ => None,
        }
    }
}

macro_rules! event_from {
    ($($variant:ident),* $(,)?) => {$(
        impl From<$variant> for Event {
            #[inline]
            fn from(ev: $variant) -> Self {
                Event::$variant(ev)
            }
        }
    )*};
}

event_from!(
    Close,
    Resize,
    KeyPress,
    KeyRelease,
    KeyRepeat,
    KeyRune,
    MousePress,
    MouseRelease,
    MouseMove,
    MouseDrag,
    MouseEnter,
    ScrollX,
    ScrollY,
);

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Close carries no fields.
        if let Event::Close(_) = self {
            return f.write_str(self.kind());
        }
        write!(f, "{} ", self.kind())?;
        match self {
            Event::Close(_) => Ok(()),
            Event::Resize(e) => fmt::Display::fmt(e, f),
            Event::KeyPress(e) => fmt::Display::fmt(e, f),
            Event::KeyRelease(e) => fmt::Display::fmt(e, f),
            Event::KeyRepeat(e) => fmt::Display::fmt(e, f),
            Event::KeyRune(e) => fmt::Display::fmt(e, f),
            Event::MousePress(e) => fmt::Display::fmt(e, f),
            Event::MouseRelease(e) => fmt::Display::fmt(e, f),
            Event::MouseMove(e) => fmt::Display::fmt(e, f),
            Event::MouseDrag(e) => fmt::Display::fmt(e, f),
            Event::MouseEnter(e) => fmt::Display::fmt(e, f),
            Event::ScrollX(e) => fmt::Display::fmt(e, f),
            Event::ScrollY(e) => fmt::Display::fmt(e, f),
        }
    }
}
