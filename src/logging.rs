//! Internal logging helpers for structured decode events.

/// Single logging target for rowlink.
pub(crate) const LOG_TARGET: &str = "rowlink";

macro_rules! rowlink_log {
    ($level:expr, $event:expr, $fmt:expr $(, $args:expr)* $(,)?) => {{
        if log::log_enabled!($level) {
            log::log!(
                target: crate::logging::LOG_TARGET,
                $level,
                "event={} {}",
                $event,
                format_args!($fmt $(, $args)*)
            );
        }
    }};
}

pub(crate) use rowlink_log;
