//! Logging shim over the `log` facade.
//!
//! With the `logging` feature enabled, `rules_log!(debug, ...)` forwards to
//! `log::debug!` under the `chess_rules` target. Without it the macro
//! type-checks its arguments and emits nothing.

macro_rules! rules_log {
    ($level:ident, $($arg:tt)+) => {{
        #[cfg(feature = "logging")]
        {
            ::log::$level!(target: "chess_rules", $($arg)+);
        }
        #[cfg(not(feature = "logging"))]
        {
            if false {
                let _ = format_args!($($arg)+);
            }
        }
    }};
}

pub(crate) use rules_log;
