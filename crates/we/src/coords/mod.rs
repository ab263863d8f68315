//! Coordinate types shared by pointer events.
//!
//! Window-surface space:
//! - Integer pixels
//! - Origin top-left
//! - +X right, +Y down

mod point;

pub use point::Point;
