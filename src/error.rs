//! Error types for lanewise operations.
//!
//! Two disjoint classes exist. Contract violations (an operation with no
//! native or emulated implementation for its lane representation, an
//! out-of-range lane index) are programmer errors: they are fatal by policy
//! and surface as a panic carrying the formatted error, so the test suite
//! can still assert on the diagnostic. External resource failures (a file
//! that cannot be opened) are logged and answered with an empty result
//! instead.

use std::fmt;

/// Errors that can occur during lanewise operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanewiseError {
    /// The (operation, lane representation) pair has no native instruction
    /// and no defined emulation.
    UnsupportedLaneOperation {
        /// Name of the operation, e.g. `"Divide"`.
        operation: &'static str,
        /// Name of the lane representation, e.g. `"I32x4"`.
        register: &'static str,
    },
    /// A lane index at or past the lane count was used.
    LaneIndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// Number of lanes in the representation.
        lane_count: usize,
    },
    /// An external resource could not be read or written.
    ResourceError {
        /// Path of the resource.
        path: String,
        /// Human-readable error message.
        message: String,
    },
}

impl fmt::Display for LanewiseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LanewiseError::UnsupportedLaneOperation {
                operation,
                register,
            } => write!(
                f,
                "unsupported lane operation: {operation} has no implementation for {register}"
            ),
            LanewiseError::LaneIndexOutOfBounds { index, lane_count } => {
                write!(f, "lane index {index} out of bounds for {lane_count} lanes")
            }
            LanewiseError::ResourceError { path, message } => {
                write!(f, "failed to open file with path {path}: {message}")
            }
        }
    }
}

impl std::error::Error for LanewiseError {}

/// Result type alias for lanewise operations.
pub type Result<T> = std::result::Result<T, LanewiseError>;

/// Creates an unsupported-operation error.
pub fn unsupported_operation(operation: &'static str, register: &'static str) -> LanewiseError {
    LanewiseError::UnsupportedLaneOperation {
        operation,
        register,
    }
}

/// Creates a resource error.
pub fn resource_error(path: impl Into<String>, message: impl Into<String>) -> LanewiseError {
    LanewiseError::ResourceError {
        path: path.into(),
        message: message.into(),
    }
}

/// Fatal path for an operation with no implementation on the current lane
/// representation.
///
/// Calling an unsupported (operation, representation) pair is a contract
/// violation, never a recoverable condition: returning a zeroed or wrong
/// value would silently corrupt the caller. `#[track_caller]` makes the
/// panic location the offending call site.
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn unsupported(operation: &'static str, register: &'static str) -> ! {
    panic!("{}", unsupported_operation(operation, register));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_operation_display() {
        let error = unsupported_operation("Divide", "I32x4");
        let display = format!("{error}");
        assert!(display.contains("unsupported lane operation"));
        assert!(display.contains("Divide"));
        assert!(display.contains("I32x4"));
    }

    #[test]
    fn test_out_of_bounds_display() {
        let error = LanewiseError::LaneIndexOutOfBounds {
            index: 9,
            lane_count: 8,
        };
        let display = format!("{error}");
        assert!(display.contains("lane index 9"));
        assert!(display.contains("8 lanes"));
    }

    #[test]
    fn test_resource_error_display() {
        let error = resource_error("/tmp/missing.morse", "No such file or directory");
        let display = format!("{error}");
        assert!(display.contains("/tmp/missing.morse"));
        assert!(display.contains("No such file or directory"));
    }

    #[test]
    fn test_error_equality() {
        let error1 = unsupported_operation("Divide", "I32x4");
        let error2 = unsupported_operation("Divide", "I32x4");
        let error3 = unsupported_operation("Multiply", "I8x16");

        assert_eq!(error1, error2);
        assert_ne!(error1, error3);
    }

    #[test]
    fn test_error_trait_implementation() {
        let error = unsupported_operation("FusedMultiplyAdd", "U8x16");

        // Should implement Error trait
        let _: &dyn std::error::Error = &error;

        assert!(std::error::Error::source(&error).is_none());
    }
}
