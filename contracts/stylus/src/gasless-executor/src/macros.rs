/// Debug-only tracing through the Stylus console; compiles to nothing without `debug`.
macro_rules! trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "debug")]
        stylus_sdk::console!($($arg)*);
    };
}
