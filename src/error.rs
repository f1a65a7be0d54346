// src/error.rs

use thiserror::Error;

/// Everything that can stop a generation run.
///
/// Option problems are caught by `GenerationOptions::validate` before any
/// partitioning happens; the room-count conditions are checked after rooms
/// have been placed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerationError {
    #[error("invalid map dimensions {width}x{height}: both must be greater than zero")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("invalid room size range {min}..={max}: minimum must be > 0 and <= maximum")]
    InvalidSizeRange { min: u32, max: u32 },

    #[error("corridor width must be greater than zero")]
    InvalidCorridorWidth,

    #[error("connectivity factor {0} is outside [0, 1]")]
    InvalidConnectivityFactor(f64),

    #[error("partitioning produced no rooms")]
    NoRoomsGenerated,

    #[error("cannot place stairs in distinct rooms: only {rooms} room(s) generated")]
    DegenerateFeaturePlacement { rooms: usize },

    #[error("could not parse generation options: {0}")]
    Config(String),

    #[error("unknown tile code {0}")]
    UnknownTileCode(u8),
}

impl From<serde_json::Error> for GenerationError {
    fn from(err: serde_json::Error) -> Self {
        GenerationError::Config(err.to_string())
    }
}
