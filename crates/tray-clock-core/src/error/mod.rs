use error_location::ErrorLocation;
use thiserror::Error;

/// Clock and icon rendering errors with source location tracking.
#[derive(Error, Debug)]
pub enum ClockError {
    /// Timezone identifier is not the local sentinel and not in the timezone database.
    #[error("Unknown timezone: {id} {location}")]
    UnknownTimezone {
        /// The identifier that failed to resolve.
        id: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Pixel canvas could not be allocated.
    #[error("Failed to allocate {width}x{height} canvas {location}")]
    CanvasAllocation {
        /// Requested canvas width.
        width: u32,
        /// Requested canvas height.
        height: u32,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Vector path could not be built from the computed geometry.
    #[error("Path construction failed: {reason} {location}")]
    PathConstruction {
        /// Description of the geometry problem.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Rendered bitmap could not be encoded.
    #[error("Image encoding failed: {reason} {location}")]
    ImageEncoding {
        /// Description of the encoding error.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

/// Result type alias using [`ClockError`].
pub type Result<T> = std::result::Result<T, ClockError>;
