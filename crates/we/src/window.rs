//! Window lifecycle signals.

use core::fmt;

/// The window was asked to close.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Close;

/// The window client area was resized.
///
/// Carries the new size only. Zero is legal (e.g. a minimized window).
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Resize {
    pub width: i32,
    pub height: i32,
}

impl Resize {
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

impl fmt::Display for Close {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("close")
    }
}

impl fmt::Display for Resize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{} {}}}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_reads_back() {
        let r = Resize::new(800, 600);
        assert_eq!((r.width, r.height), (800, 600));
        assert!(!r.is_empty());
        assert_eq!(r.to_string(), "{800 600}");
    }

    #[test]
    fn minimized_resize_is_legal() {
        let r = Resize::new(0, 0);
        assert_eq!((r.width, r.height), (0, 0));
        assert!(r.is_empty());
        assert_eq!(Some(r), Some(Resize::default()));
        assert_ne!(Some(r), None);
    }
}
