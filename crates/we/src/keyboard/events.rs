use core::fmt;

use super::{Key, Mod};

/// A keyboard key was pressed.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct KeyPress {
    pub key: Key,
    /// Modifiers held when the key went down.
    pub mods: Mod,
}

/// A keyboard key was released.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct KeyRelease {
    pub key: Key,
    pub mods: Mod,
}

/// A keyboard key was held down until it repeated.
///
/// Fired for every repeat tick after the initial [`KeyPress`], never for the
/// down edge itself.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct KeyRepeat {
    pub key: Key,
    pub mods: Mod,
}

/// Text input: the character a key stroke produced, after layout and
/// dead-key handling by the event source.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct KeyRune(pub char);

macro_rules! key_event_impls {
    ($($ty:ident),*) => {$(
        impl $ty {
            #[inline]
            pub const fn new(key: Key, mods: Mod) -> Self {
                Self { key, mods }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{{{} {}}}", self.key, self.mods)
            }
        }
    )*};
}

key_event_impls!(KeyPress, KeyRelease, KeyRepeat);

impl From<char> for KeyRune {
    #[inline]
    fn from(c: char) -> Self {
        KeyRune(c)
    }
}

impl fmt::Display for KeyRune {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_event_display() {
        let ev = KeyPress::new(Key::A, Mod::CONTROL | Mod::SHIFT);
        assert_eq!(ev.to_string(), "{A 3}");

        let ev = KeyRelease::new(Key(999), Mod::empty());
        assert_eq!(ev.to_string(), "{Key(999) 0}");
    }

    #[test]
    fn repeat_is_a_distinct_type() {
        let press = KeyPress::new(Key::SPACE, Mod::empty());
        let repeat = KeyRepeat::new(Key::SPACE, Mod::empty());
        assert_eq!(press.key, repeat.key);
        assert_eq!(press.mods, repeat.mods);
        assert_eq!(repeat.to_string(), "{Space 0}");
    }

    #[test]
    fn rune_display_is_the_character() {
        assert_eq!(KeyRune::from('ä').to_string(), "ä");
        assert_eq!(KeyRune('?').0, '?');
    }
}
