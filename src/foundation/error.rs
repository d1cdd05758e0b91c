/// Convenience result type used across linemorph.
pub type MorphResult<T> = Result<T, MorphError>;

/// Top-level error taxonomy used by morphing APIs.
///
/// Input-contract violations are reported eagerly, before any pixel work starts.
#[derive(thiserror::Error, Debug)]
pub enum MorphError {
    /// Source and destination images do not share the same size.
    #[error(
        "dimension mismatch: source is {}x{}, destination is {}x{}",
        .source_size.0,
        .source_size.1,
        .destination_size.0,
        .destination_size.1
    )]
    DimensionMismatch {
        /// Source image `(width, height)`.
        source_size: (u32, u32),
        /// Destination image `(width, height)`.
        destination_size: (u32, u32),
    },

    /// Two index-aligned line sequences differ in length.
    #[error("line count mismatch: expected {expected} lines, got {actual}")]
    LineCountMismatch {
        /// Length of the reference sequence.
        expected: usize,
        /// Length of the offending sequence.
        actual: usize,
    },

    /// A feature line has zero length (or non-finite endpoints).
    #[error("degenerate line at index {index}: endpoints must be finite and distinct")]
    DegenerateLine {
        /// 0-based index of the line in its sequence.
        index: usize,
    },

    /// No feature lines were supplied.
    #[error("empty line set: at least one feature line is required")]
    EmptyLineSet,

    /// Invalid user-provided configuration or arguments.
    #[error("validation error: {0}")]
    Validation(String),

    /// Malformed record in a line-correspondence file.
    #[error("parse error at line {line}: {msg}")]
    Parse {
        /// 1-based line number in the input text.
        line: usize,
        /// What was wrong with the record.
        msg: String,
    },

    /// Errors raised by frame sinks and encoders.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MorphError {
    /// Build a [`MorphError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`MorphError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`MorphError::Parse`] value.
    pub fn parse(line: usize, msg: impl Into<String>) -> Self {
        Self::Parse {
            line,
            msg: msg.into(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
