//! Window event vocabulary.
//!
//! Plain data types for window, keyboard and mouse events: key codes, modifier
//! flags, mouse buttons and the event records built from them. Producing these
//! events (OS integration) and dispatching them are left to other crates.

pub mod coords;
pub mod event;
pub mod keyboard;
pub mod mouse;
pub mod window;

pub use coords::Point;
pub use event::Event;
pub use keyboard::{Key, KeyPress, KeyRelease, KeyRepeat, KeyRune, Mod};
pub use mouse::{
    Button,
    MouseDrag,
    MouseEnter,
    MouseMove,
    MousePress,
    MouseRelease,
    ScrollX,
    ScrollY,
};
pub use window::{Close, Resize};
