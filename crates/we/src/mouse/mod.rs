//! Mouse vocabulary.
//!
//! Pointer events carry an explicit [`Point`](crate::coords::Point). Move and
//! drag also carry the position where the motion started, so consumers can
//! compute deltas without keeping per-frame state.

mod button;
mod events;

pub use button::Button;
pub use events::{MouseDrag, MouseEnter, MouseMove, MousePress, MouseRelease, ScrollX, ScrollY};
