//! Logger setup for the trace tool.

use std::sync::Once;

use env_logger::WriteStyle;
use log::LevelFilter;

/// Where the trace output filter comes from.
///
/// An explicit `filter` wins over `RUST_LOG`; with neither, events are shown
/// at `info` and per-event details stay hidden.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub filter: Option<String>,
    pub style: WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: None,
            style: WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    pub fn with_filter(filter: impl Into<String>) -> Self {
        Self {
            filter: Some(filter.into()),
            ..Self::default()
        }
    }

    /// Filter string handed to the backend, `None` meaning "level only".
    fn resolve_filter(&self) -> Option<String> {
        self.filter
            .clone()
            .or_else(|| std::env::var("RUST_LOG").ok())
            .filter(|f| !f.trim().is_empty())
    }
}

static INIT: Once = Once::new();

/// Installs the global logger on first call; later calls do nothing.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();
        match config.resolve_filter() {
            Some(filter) => {
                builder.parse_filters(&filter);
            }
            None => {
                builder.filter_level(LevelFilter::Info);
            }
        }
        builder.write_style(config.style);
        builder.format_target(false);

        if builder.try_init().is_err() {
            log::warn!("logger already installed, trace output goes there");
            return;
        }
        log::debug!("trace logger ready");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_filter_wins() {
        let cfg = LoggingConfig::with_filter("we_trace=debug");
        assert_eq!(cfg.resolve_filter().as_deref(), Some("we_trace=debug"));
    }

    #[test]
    fn blank_filter_falls_back_to_level() {
        let cfg = LoggingConfig::with_filter("   ");
        assert_eq!(cfg.resolve_filter(), None);
    }

    #[test]
    fn second_init_is_ignored() {
        init_logging(LoggingConfig::with_filter("off"));
        init_logging(LoggingConfig::with_filter("trace"));
        log::info!("no panic on repeated init");
    }
}
