pub mod source_buffer;

pub use source_buffer::{SourceBuffer, SourceError};

/// Builds an in-memory [SourceBuffer] named after the place the macro was invoked, for tests.
#[macro_export]
macro_rules! toylang {
    ( $s:literal ) => {
        &$crate::toolchain::source::SourceBuffer::new_from_string(
            $s,
            $crate::const_format::formatcp!("{}:{}:{}", file!(), line!(), column!()),
        )
    };
}
