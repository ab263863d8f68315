//! Keyboard vocabulary.
//!
//! Key codes follow the GLFW 3 numbering: printable keys map onto 7-bit ASCII,
//! function and control keys live at 256 and above. The numbers are part of
//! the public contract.

mod events;
mod key;
mod modifiers;

pub use events::{KeyPress, KeyRelease, KeyRepeat, KeyRune};
pub use key::Key;
pub use modifiers::Mod;
