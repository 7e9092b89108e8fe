/// Formats a path relative to the configured API base.
macro_rules! api {
    ($e:expr, $($rest:tt)*) => {
        format!($e, $($rest)*)
    };
}
