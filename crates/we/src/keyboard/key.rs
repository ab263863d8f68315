use core::fmt;

/// Keyboard key code.
///
/// A transparent wrapper over the numeric code. Any integer is a valid `Key`:
/// keyboards vary, and keys without a named constant must still travel through
/// the event vocabulary unchanged.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct Key(pub i32);

/// Declares the named key constants and their display names from one table.
macro_rules! keys {
    ($($(#[$meta:meta])* $name:ident = $code:literal => $label:literal,)*) => {
        impl Key {
            $($(#[$meta])* pub const $name: Key = Key($code);)*

            /// Name of a defined key, `None` for codes without a constant.
            pub const fn name(self) -> Option<&'static str> {
                match self.0 {
                    $($code => Some($label),)*
                    _ => None,
                }
            }
        }

        #[cfg(test)]
        const NAMED_KEYS: &[Key] = &[$(Key::$name,)*];
    };
}

keys! {
    // Printable keys.
    SPACE = 32 => "Space",
    APOSTROPHE = 39 => "Apostrophe", // '
    COMMA = 44 => "Comma", // ,
    MINUS = 45 => "Minus", // -
    PERIOD = 46 => "Period", // .
    SLASH = 47 => "Slash", // /
    NUM_0 = 48 => "0",
    NUM_1 = 49 => "1",
    NUM_2 = 50 => "2",
    NUM_3 = 51 => "3",
    NUM_4 = 52 => "4",
    NUM_5 = 53 => "5",
    NUM_6 = 54 => "6",
    NUM_7 = 55 => "7",
    NUM_8 = 56 => "8",
    NUM_9 = 57 => "9",
    SEMICOLON = 59 => "Semicolon", // ;
    EQUAL = 61 => "Equal", // =
    A = 65 => "A",
    B = 66 => "B",
    C = 67 => "C",
    D = 68 => "D",
    E = 69 => "E",
    F = 70 => "F",
    G = 71 => "G",
    H = 72 => "H",
    I = 73 => "I",
    J = 74 => "J",
    K = 75 => "K",
    L = 76 => "L",
    M = 77 => "M",
    N = 78 => "N",
    O = 79 => "O",
    P = 80 => "P",
    Q = 81 => "Q",
    R = 82 => "R",
    S = 83 => "S",
    T = 84 => "T",
    U = 85 => "U",
    V = 86 => "V",
    W = 87 => "W",
    X = 88 => "X",
    Y = 89 => "Y",
    Z = 90 => "Z",
    LEFT_BRACKET = 91 => "LeftBracket", // [
    BACKSLASH = 92 => "Backslash",
    RIGHT_BRACKET = 93 => "RightBracket", // ]
    GRAVE_ACCENT = 96 => "GraveAccent", // `
    WORLD_1 = 161 => "World1", // non-US #1
    WORLD_2 = 162 => "World2", // non-US #2

    // Function keys.
    ESCAPE = 256 => "Escape",
    ENTER = 257 => "Enter",
    TAB = 258 => "Tab",
    BACKSPACE = 259 => "Backspace",
    INSERT = 260 => "Insert",
    DELETE = 261 => "Delete",
    RIGHT = 262 => "Right",
    LEFT = 263 => "Left",
    DOWN = 264 => "Down",
    UP = 265 => "Up",
    PAGE_UP = 266 => "PageUp",
    PAGE_DOWN = 267 => "PageDown",
    HOME = 268 => "Home",
    END = 269 => "End",
    CAPS_LOCK = 280 => "CapsLock",
    SCROLL_LOCK = 281 => "ScrollLock",
    NUM_LOCK = 282 => "NumLock",
    PRINT_SCREEN = 283 => "PrintScreen",
    PAUSE = 284 => "Pause",
    F1 = 290 => "F1",
    F2 = 291 => "F2",
    F3 = 292 => "F3",
    F4 = 293 => "F4",
    F5 = 294 => "F5",
    F6 = 295 => "F6",
    F7 = 296 => "F7",
    F8 = 297 => "F8",
    F9 = 298 => "F9",
    F10 = 299 => "F10",
    F11 = 300 => "F11",
    F12 = 301 => "F12",
    F13 = 302 => "F13",
    F14 = 303 => "F14",
    F15 = 304 => "F15",
    F16 = 305 => "F16",
    F17 = 306 => "F17",
    F18 = 307 => "F18",
    F19 = 308 => "F19",
    F20 = 309 => "F20",
    F21 = 310 => "F21",
    F22 = 311 => "F22",
    F23 = 312 => "F23",
    F24 = 313 => "F24",
    F25 = 314 => "F25",
    KP_0 = 320 => "Kp0",
    KP_1 = 321 => "Kp1",
    KP_2 = 322 => "Kp2",
    KP_3 = 323 => "Kp3",
    KP_4 = 324 => "Kp4",
    KP_5 = 325 => "Kp5",
    KP_6 = 326 => "Kp6",
    KP_7 = 327 => "Kp7",
    KP_8 = 328 => "Kp8",
    KP_9 = 329 => "Kp9",
    KP_DECIMAL = 330 => "KpDecimal",
    KP_DIVIDE = 331 => "KpDivide",
    KP_MULTIPLY = 332 => "KpMultiply",
    KP_SUBTRACT = 333 => "KpSubtract",
    KP_ADD = 334 => "KpAdd",
    KP_ENTER = 335 => "KpEnter",
    KP_EQUAL = 336 => "KpEqual",
    LEFT_SHIFT = 340 => "LeftShift",
    LEFT_CONTROL = 341 => "LeftControl",
    LEFT_ALT = 342 => "LeftAlt",
    LEFT_SUPER = 343 => "LeftSuper",
    RIGHT_SHIFT = 344 => "RightShift",
    RIGHT_CONTROL = 345 => "RightControl",
    RIGHT_ALT = 346 => "RightAlt",
    RIGHT_SUPER = 347 => "RightSuper",
    MENU = 348 => "Menu",
}

impl Key {
    /// Lowest code of the printable band.
    pub const PRINTABLE_MIN: i32 = 32;
    /// Highest code of the printable band.
    pub const PRINTABLE_MAX: i32 = 96;
    /// First code of the function-key band.
    pub const FUNCTION_MIN: i32 = 256;

    #[inline]
    pub const fn code(self) -> i32 {
        self.0
    }

    /// True for the ASCII-mapped band and the two non-US keys.
    #[inline]
    pub const fn is_printable(self) -> bool {
        (self.0 >= Self::PRINTABLE_MIN && self.0 <= Self::PRINTABLE_MAX)
            || self.0 == Self::WORLD_1.0
            || self.0 == Self::WORLD_2.0
    }

    #[inline]
    pub const fn is_function(self) -> bool {
        self.0 >= Self::FUNCTION_MIN
    }

    /// ASCII character printed on the key, for codes in the printable band.
    ///
    /// Letters come back upper-case, as the codes do.
    pub fn to_char(self) -> Option<char> {
        if self.0 >= Self::PRINTABLE_MIN && self.0 <= Self::PRINTABLE_MAX {
            u8::try_from(self.0).ok().map(char::from)
        } else {
            None
        }
    }
}

impl From<i32> for Key {
    #[inline]
    fn from(code: i32) -> Self {
        Key(code)
    }
}

impl From<Key> for i32 {
    #[inline]
    fn from(key: Key) -> Self {
        key.0
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "Key({})", self.0),
        }
    }
}
