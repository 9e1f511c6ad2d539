//! Error types for prng-core.

/// Errors produced while configuring or driving a generator.
///
/// Configuration errors (`UnknownAlgorithm`, `InvalidSeed`) are raised before
/// any generator is seeded. `Sink` is raised by [`drive`](crate::drive) when
/// the output channel rejects a write; the generator itself is left intact.
#[derive(Debug, thiserror::Error)]
pub enum PrngError {
    /// The requested algorithm name is not one of the four known identifiers.
    #[error("unrecognized algorithm: {0}")]
    UnknownAlgorithm(String),
    /// The seed text is not a valid 64-bit unsigned integer literal.
    #[error("seed is not a number: {0}")]
    InvalidSeed(String),
    /// The output sink rejected a value.
    #[error("couldn't write output: {0}")]
    Sink(#[from] std::io::Error),
}

impl PrngError {
    /// Whether this error was detected before generation started.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::UnknownAlgorithm(_) | Self::InvalidSeed(_))
    }
}
