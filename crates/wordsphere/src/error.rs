//! Configuration errors for the word cloud

/// Error type for cloud configuration
///
/// All variants are raised synchronously at configuration time. The
/// projection, layout and animation paths themselves are infallible.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CloudError {
    #[error("Sphere radius must be a positive finite number, got {0}")]
    InvalidRadius(f64),

    #[error("Maximum text size must be a positive finite number, got {0}")]
    InvalidTextSize(f64),

    #[error("Minimum factor must lie in (0, 1], got {0}")]
    InvalidMinFactor(f64),

    #[error("Labels per ring must be at least 1, got {0}")]
    InvalidLabelsPerRing(u32),

    #[error("Minimum opacity must lie in [0, 1], got {0}")]
    InvalidOpacity(f64),

    #[error("Rotation step must be finite, got {0}")]
    InvalidRotationStep(f64),

    #[error("Unrecognised color: {0}")]
    InvalidColor(String),
}

pub type Result<T> = std::result::Result<T, CloudError>;
