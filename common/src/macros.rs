//! Logging shorthands used across the workspace.
//!
//! These delegate to [`tracing`]; the CLI installs a formatter that turns
//! the level into a `[+]`/`[*]`/`[-]` symbol prefix.

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        tracing::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        tracing::warn!($($arg)*)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        tracing::error!($($arg)*)
    };
}
