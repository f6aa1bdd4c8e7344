use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, ToolError>;

/// Error type covering the different failure cases that can occur while the
/// tool reads, inspects, or transforms the character stream.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Wrapper for IO failures on the input or output stream.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Raised when a transform specification contains no stages.
    #[error("failed to compile transform \"{spec}\": empty specification")]
    EmptySpec {
        /// The specification as given on the command line.
        spec: String,
    },

    /// Raised when a transform specification names a stage the engine does
    /// not know.
    #[error("failed to compile transform \"{spec}\": unknown transform id \"{id}\"")]
    UnknownTransform {
        /// The specification as given on the command line.
        spec: String,
        /// The stage id that failed to resolve.
        id: String,
    },

    /// Raised when the tracing subscriber fails to initialise.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}
