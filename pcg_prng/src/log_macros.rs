// Logging shims for the optional `log` feature.
//
// With `log` enabled these forward to the `log` facade. Without it they
// expand to a closure that is never called, so format arguments are still
// type-checked but nothing is evaluated at runtime.

macro_rules! trace { ($($x:tt)*) => (
    #[cfg(feature = "log")]
    log::trace!($($x)*);

    #[cfg(not(feature = "log"))]
    let _ = || { let _ = format_args!($($x)*); };
) }

macro_rules! debug { ($($x:tt)*) => (
    #[cfg(feature = "log")]
    log::debug!($($x)*);

    #[cfg(not(feature = "log"))]
    let _ = || { let _ = format_args!($($x)*); };
) }
