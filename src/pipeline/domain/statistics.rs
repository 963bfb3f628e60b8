use serde::{Deserialize, Serialize};

/// Scalar statistics extracted once per evaluation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatisticsSnapshot {
    brightness: f64,
    contrast: f64,
    hue_diversity: u32,
}

impl StatisticsSnapshot {
    pub fn new(brightness: f64, contrast: f64, hue_diversity: u32) -> Self {
        Self {
            brightness,
            contrast,
            hue_diversity,
        }
    }

    /// Mean of every RGB sample, 0..=255
    pub fn brightness(&self) -> f64 {
        self.brightness
    }

    /// Population standard deviation of every RGB sample
    pub fn contrast(&self) -> f64 {
        self.contrast
    }

    /// Number of distinct 8-bit hue values
    pub fn hue_diversity(&self) -> u32 {
        self.hue_diversity
    }
}

/// The four proxy sub-scores of the character-art model, each 0..=100
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubScores {
    pub shape: f64,
    pub detail: f64,
    pub natural: f64,
    pub color: f64,
}

impl SubScores {
    pub fn mean(&self) -> f64 {
        (self.shape + self.detail + self.natural + self.color) / 4.0
    }
}
