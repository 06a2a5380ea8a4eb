//! Error macros for widepath

/// Macro for rejecting vertex ids outside `[0, len)`
#[macro_export]
macro_rules! ensure_vertex {
    ($vertex:expr, $len:expr) => {
        if $vertex >= $len {
            return Err($crate::error::WidepathError::OutOfRange {
                vertex: $vertex,
                len: $len,
            });
        }
    };
}
