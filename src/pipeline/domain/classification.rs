use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    Drawing,
    Photo,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Drawing => write!(f, "drawing"),
            Classification::Photo => write!(f, "photo"),
        }
    }
}

/// Advisory drawing/photo label. The heuristic behind it is unvalidated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    classification: Classification,
    unique_colors: usize,
    threshold: usize,
}

impl ClassificationResult {
    pub fn new(classification: Classification, unique_colors: usize, threshold: usize) -> Self {
        Self {
            classification,
            unique_colors,
            threshold,
        }
    }

    pub fn classification(&self) -> Classification {
        self.classification
    }

    pub fn unique_colors(&self) -> usize {
        self.unique_colors
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    pub fn is_drawing(&self) -> bool {
        self.classification == Classification::Drawing
    }
}
