//! Logging shim over the optional `tracing` dependency.
//!
//! With the `tracing` feature disabled every event compiles to nothing.

macro_rules! trace_event {
    ($level:ident, $($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        {
            tracing::$level!($($arg)+);
        }
    };
}

pub(crate) use trace_event;
