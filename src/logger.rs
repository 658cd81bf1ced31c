// Logging compiles away unless the `logger` feature is enabled.
// Being a library we never install a logger or choose the level ourselves.

#[cfg(feature = "logger")]
pub use log::{debug, error, info, trace, warn};

/// Returns true if the trace log level is enabled
#[cfg(feature = "logger")]
#[must_use]
pub fn trace_enabled() -> bool {
    log::log_enabled!(log::Level::Trace)
}

#[cfg(not(feature = "logger"))]
pub use noop_logger::{debug, error, info, trace, trace_enabled, warn};

#[cfg(not(feature = "logger"))]
mod noop_logger {
    #[doc(hidden)]
    #[macro_export]
    /// A noop logger, when the logger feature is disabled
    macro_rules! __backread_noop {
        ($($arg:tt)+) => {
            if $crate::logger::trace_enabled() {
                // Never taken, keeps the macro arguments used.
                let _ = alloc::format!($($arg)+);
            }
        };
    }

    pub use crate::__backread_noop as debug;
    pub use crate::__backread_noop as error;
    pub use crate::__backread_noop as info;
    pub use crate::__backread_noop as trace;
    pub use crate::__backread_noop as warn;

    /// `trace_enabled` for a noop logger is always false
    #[inline]
    #[must_use]
    pub const fn trace_enabled() -> bool {
        false
    }
}
