// src/generator/config.rs

use serde::{Deserialize, Serialize};

use crate::error::GenerationError;

/// Parameters for one generation run.
///
/// Deserializes from camelCase JSON; missing fields take the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerationOptions {
    pub width: u32,
    pub height: u32,
    pub min_room_size: u32,
    pub max_room_size: u32,
    /// Tiles subtracted from a leaf space's size before a room is sized.
    pub padding: u32,
    /// Probability in `[0, 1]` that a non-spanning-tree edge is carved too.
    pub connectivity_factor: f64,
    pub corridor_width: u32,
    pub seed: u64,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        GenerationOptions {
            width: 48,
            height: 32,
            min_room_size: 4,
            max_room_size: 10,
            padding: 1,
            connectivity_factor: 0.15,
            corridor_width: 1,
            seed: 0,
        }
    }
}

impl GenerationOptions {
    pub fn from_json_str(json: &str) -> Result<Self, GenerationError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Smallest side a leaf space may have: room plus its padding.
    pub fn min_space_size(&self) -> u32 {
        self.min_room_size.saturating_add(self.padding)
    }

    /// Rejects options that generation cannot work with. Runs before any other work.
    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.width == 0 || self.height == 0 {
            return Err(GenerationError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.min_room_size == 0 || self.min_room_size > self.max_room_size {
            return Err(GenerationError::InvalidSizeRange {
                min: self.min_room_size,
                max: self.max_room_size,
            });
        }
        if self.corridor_width == 0 {
            return Err(GenerationError::InvalidCorridorWidth);
        }
        let factor = self.connectivity_factor;
        if !factor.is_finite() || !(0.0..=1.0).contains(&factor) {
            return Err(GenerationError::InvalidConnectivityFactor(factor));
        }
        Ok(())
    }
}
