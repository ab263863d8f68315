use core::fmt;

/// Mouse button code, 0-based.
///
/// Any integer is a valid `Button`; only the first eight have constants.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct Button(pub i32);

impl Button {
    pub const BUTTON_1: Button = Button(0);
    pub const BUTTON_2: Button = Button(1);
    pub const BUTTON_3: Button = Button(2);
    pub const BUTTON_4: Button = Button(3);
    pub const BUTTON_5: Button = Button(4);
    pub const BUTTON_6: Button = Button(5);
    pub const BUTTON_7: Button = Button(6);
    pub const BUTTON_8: Button = Button(7);

    pub const LEFT: Button = Button::BUTTON_1;
    pub const RIGHT: Button = Button::BUTTON_2;
    pub const MIDDLE: Button = Button::BUTTON_3;

    #[inline]
    pub const fn code(self) -> i32 {
        self.0
    }

    /// 1-based number used in labels.
    #[inline]
    pub const fn number(self) -> i64 {
        self.0 as i64 + 1
    }

    /// Fixed label for the aliased buttons, `None` for the rest.
    pub fn alias_label(self) -> Option<&'static str> {
        BUTTON_LABELS
            .iter()
            .find(|(b, _)| *b == self)
            .map(|(_, label)| *label)
    }
}

static BUTTON_LABELS: [(Button, &str); 3] = [
    (Button::LEFT, "[left button]"),
    (Button::RIGHT, "[right button]"),
    (Button::MIDDLE, "[middle button]"),
];

impl From<i32> for Button {
    #[inline]
    fn from(code: i32) -> Self {
        Button(code)
    }
}

impl From<Button> for i32 {
    #[inline]
    fn from(button: Button) -> Self {
        button.0
    }
}

/// `[left button]`, `[right button]`, `[middle button]`, otherwise
/// `[button N]` with N counted from 1.
impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.alias_label() {
            Some(label) => f.write_str(label),
            None => write!(f, "[button {}]", self.number()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_share_codes() {
        assert_eq!(Button::LEFT.code(), 0);
        assert_eq!(Button::RIGHT.code(), 1);
        assert_eq!(Button::MIDDLE.code(), 2);
        assert_eq!(Button::BUTTON_8.code(), 7);
    }

    #[test]
    fn aliased_buttons_render_names() {
        assert_eq!(Button(0).to_string(), "[left button]");
        assert_eq!(Button(1).to_string(), "[right button]");
        assert_eq!(Button(2).to_string(), "[middle button]");
    }

    #[test]
    fn other_buttons_render_one_based() {
        assert_eq!(Button(3).to_string(), "[button 4]");
        assert_eq!(Button(7).to_string(), "[button 8]");
        assert_eq!(Button::BUTTON_8.alias_label(), None);
    }

    #[test]
    fn out_of_range_codes_still_render() {
        assert_eq!(Button::from(41).to_string(), "[button 42]");
        assert_eq!(Button(-1).to_string(), "[button 0]");
        assert_eq!(Button(i32::MAX).to_string(), format!("[button {}]", i32::MAX as i64 + 1));
    }
}
