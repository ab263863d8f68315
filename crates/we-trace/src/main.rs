//! Replays a scripted input session through the event vocabulary and logs it.
//!
//! Usage: `we-trace [WIDTH HEIGHT]`. Set `RUST_LOG=debug` to also see
//! modifier flags; `WE_TRACE_LOG` takes precedence over `RUST_LOG`.

mod logging;

use anyhow::{bail, Context, Result};

use logging::{init_logging, LoggingConfig};
use we::{
    Button, Close, Event, Key, KeyPress, KeyRelease, KeyRepeat, KeyRune, Mod, MouseDrag,
    MouseEnter, MouseMove, MousePress, MouseRelease, Point, Resize, ScrollX, ScrollY,
};

fn main() -> Result<()> {
    let config = std::env::var("WE_TRACE_LOG")
        .map(LoggingConfig::with_filter)
        .unwrap_or_default();
    init_logging(config);

    let size = parse_size(std::env::args().skip(1))?;
    log::info!("replaying session at {}x{}", size.width, size.height);

    let mut counts = Tally::default();
    for ev in session(size) {
        trace(&ev);
        counts.record(&ev);
    }

    log::info!(
        "{} events: {} keyboard, {} mouse, {} window",
        counts.total(),
        counts.keyboard,
        counts.mouse,
        counts.window
    );
    Ok(())
}

fn parse_size(mut args: impl Iterator<Item = String>) -> Result<Resize> {
    match (args.next(), args.next(), args.next()) {
        (None, _, _) => Ok(Resize::new(800, 600)),
        (Some(w), Some(h), None) => {
            let width = w
                .parse::<i32>()
                .with_context(|| format!("invalid width '{w}'"))?;
            let height = h
                .parse::<i32>()
                .with_context(|| format!("invalid height '{h}'"))?;
            Ok(Resize::new(width, height))
        }
        _ => bail!("usage: we-trace [WIDTH HEIGHT]"),
    }
}

/// A short, fixed session: resize, type "Hi", click-drag, scroll, close.
fn session(size: Resize) -> Vec<Event> {
    let none = Mod::empty();
    let start = Point::new(size.width / 2, size.height / 2);
    let end = start + Point::new(40, -10);

    vec![
        size.into(),
        MouseEnter(true).into(),
        MouseMove::new(start, Point::zero()).into(),
        KeyPress::new(Key::LEFT_SHIFT, Mod::SHIFT).into(),
        KeyPress::new(Key::H, Mod::SHIFT).into(),
        KeyRune('H').into(),
        KeyRelease::new(Key::H, Mod::SHIFT).into(),
        KeyRelease::new(Key::LEFT_SHIFT, none).into(),
        KeyPress::new(Key::I, none).into(),
        KeyRune('i').into(),
        KeyRepeat::new(Key::I, none).into(),
        KeyRune('i').into(),
        KeyRelease::new(Key::I, none).into(),
        MousePress::new(start, Button::LEFT, none).into(),
        MouseDrag::new(end, start, Button::LEFT, none).into(),
        MouseRelease::new(end, Button::LEFT, none).into(),
        MousePress::new(end, Button::BUTTON_5, Mod::CONTROL | Mod::ALT).into(),
        MouseRelease::new(end, Button::BUTTON_5, Mod::CONTROL | Mod::ALT).into(),
        ScrollY::new(-3, none).into(),
        ScrollX::new(1, Mod::SHIFT).into(),
        MouseEnter(false).into(),
        Close.into(),
    ]
}

fn trace(ev: &Event) {
    log::info!("{ev}");

    if let Some(mods) = ev.mods().filter(|m| !m.is_empty()) {
        log::debug!("  mods: {mods:?}");
    }
    if let Event::MouseDrag(drag) = ev {
        log::debug!("  drag delta: {}", drag.delta());
    }
    if let Event::KeyPress(press) = ev {
        if let Some(c) = press.key.to_char() {
            log::debug!("  printable key '{c}'");
        }
    }
}

#[derive(Debug, Default)]
struct Tally {
    keyboard: usize,
    mouse: usize,
    window: usize,
}

impl Tally {
    fn record(&mut self, ev: &Event) {
        match ev {
            Event::Close(_) | Event::Resize(_) => self.window += 1,
            Event::KeyPress(_)
            | Event::KeyRelease(_)
            | Event::KeyRepeat(_)
            | Event::KeyRune(_) => self.keyboard += 1,
            Event::MousePress(_)
            | Event::MouseRelease(_)
            | Event::MouseMove(_)
            | Event::MouseDrag(_)
            | Event::MouseEnter(_)
            | Event::ScrollX(_)
            | Event::ScrollY(_) => self.mouse += 1,
        }
    }

    fn total(&self) -> usize {
        self.keyboard + self.mouse + self.window
    }
}
