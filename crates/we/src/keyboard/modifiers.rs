use core::fmt;

bitflags::bitflags! {
    /// Bitfield of modifier key flags.
    ///
    /// Several modifiers can be held at once, so test membership with
    /// [`Mod::contains`] or [`Mod::intersects`] rather than `==`.
    #[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
    pub struct Mod: i32 {
        /// One or more Control keys were held down.
        const CONTROL = 1 << 0;
        /// One or more Shift keys were held down.
        const SHIFT = 1 << 1;
        /// One or more Alt keys were held down.
        const ALT = 1 << 2;
        /// One or more Super keys were held down.
        const SUPER = 1 << 3;
    }
}

impl Mod {
    /// Builds a set from raw bits, keeping bits with no named flag.
    #[inline]
    pub const fn from_raw(bits: i32) -> Self {
        Self::from_bits_retain(bits)
    }
}

impl Default for Mod {
    fn default() -> Self {
        Mod::empty()
    }
}

/// Renders the raw bit value, e.g. `3` for Control+Shift.
impl fmt::Display for Mod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bits())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Mod; 4] = [Mod::CONTROL, Mod::SHIFT, Mod::ALT, Mod::SUPER];

    #[test]
    fn flag_values_are_fixed() {
        assert_eq!(Mod::CONTROL.bits(), 1);
        assert_eq!(Mod::SHIFT.bits(), 2);
        assert_eq!(Mod::ALT.bits(), 4);
        assert_eq!(Mod::SUPER.bits(), 8);
    }

    #[test]
    fn combined_flags_test_independently() {
        for m1 in ALL {
            for m2 in ALL {
                let set = m1 | m2;
                assert!(set.contains(m1));
                assert!(set.contains(m2));
                assert!(set.bits() & m1.bits() != 0);
                assert!(set.bits() & m2.bits() != 0);
            }
        }
    }

    #[test]
    fn every_combination_is_a_value() {
        for bits in 0..16 {
            let m = Mod::from_raw(bits);
            assert_eq!(m.bits(), bits);
        }
        assert_eq!(Mod::all().bits(), 15);
    }

    #[test]
    fn unknown_bits_are_retained() {
        let m = Mod::from_raw(0x30 | 1);
        assert!(m.contains(Mod::CONTROL));
        assert_eq!(m.bits(), 0x31);
    }

    #[test]
    fn display_is_numeric() {
        assert_eq!(Mod::empty().to_string(), "0");
        assert_eq!((Mod::CONTROL | Mod::SHIFT).to_string(), "3");
    }
}
