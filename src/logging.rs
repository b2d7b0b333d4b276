//! Logger setup for the `pixel-window` binary

use log::LevelFilter;

pub const DEFAULT_FILTER: &str = "info";

/// GPU stack crates that are noisy below `warn`; a user filter can still raise them
const QUIET_MODULES: [&str; 3] = ["wgpu_core", "wgpu_hal", "naga"];

/// Which input decided the active log filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterSource {
    Flag,
    Env,
    Default,
}

/// `--log` beats `RUST_LOG`, which beats [`DEFAULT_FILTER`]; blank values count as unset
pub fn resolve_filter<'a>(flag: Option<&'a str>, env: Option<&'a str>) -> (&'a str, FilterSource) {
    let present = |value: Option<&'a str>| value.map(str::trim).filter(|v| !v.is_empty());

    if let Some(filter) = present(flag) {
        (filter, FilterSource::Flag)
    } else if let Some(filter) = present(env) {
        (filter, FilterSource::Env)
    } else {
        (DEFAULT_FILTER, FilterSource::Default)
    }
}

/// Install env_logger with the resolved filter
///
/// Returns false when a logger was already installed (a second call, or a test
/// harness that set one up first).
pub fn init_logging(flag: Option<&str>) -> bool {
    let env = std::env::var("RUST_LOG").ok();
    let (filter, source) = resolve_filter(flag, env.as_deref());

    let mut builder = env_logger::Builder::new();
    for module in QUIET_MODULES {
        builder.filter_module(module, LevelFilter::Warn);
    }
    builder.parse_filters(filter).format_timestamp_millis();

    let installed = builder.try_init().is_ok();
    if installed {
        log::debug!("log filter '{}' from {:?}", filter, source);
    }
    installed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_overrides_env() {
        assert_eq!(
            resolve_filter(Some("debug"), Some("warn")),
            ("debug", FilterSource::Flag)
        );
    }

    #[test]
    fn env_used_without_flag() {
        assert_eq!(
            resolve_filter(None, Some("pixel_window=trace")),
            ("pixel_window=trace", FilterSource::Env)
        );
    }

    #[test]
    fn blank_values_fall_through() {
        assert_eq!(resolve_filter(Some("  "), Some("")), (DEFAULT_FILTER, FilterSource::Default));
        assert_eq!(resolve_filter(Some(""), Some("warn")), ("warn", FilterSource::Env));
    }

    #[test]
    fn second_init_is_rejected() {
        init_logging(Some("warn"));
        assert!(!init_logging(None));
    }
}
