//! Tuned thresholds and normalization caps used by the built-in profiles.
//!
//! None of these values were derived from data. They were picked by trial and
//! are kept here so a configuration file can override them by name.

/// Classifier thresholds
pub mod classifier {
    /// Side length the image is resized to before counting colors
    pub const TARGET_SIZE: u32 = 224;

    /// Images with fewer distinct RGB triples than this are treated as drawings
    pub const UNIQUE_COLOR_THRESHOLD: usize = 15_000;
}

/// Normalization caps for the scorer
pub mod normalization {
    /// Maximum 8-bit sample value
    pub const BRIGHTNESS_CAP: f64 = 255.0;

    /// Hue counts above this add nothing to the score
    pub const HUE_DIVERSITY_CAP: f64 = 100.0;

    /// Half the sample range, the largest useful standard deviation
    pub const CONTRAST_CAP: f64 = 127.0;

    /// Cap for the combined hue + contrast color sub-score
    pub const COLOR_COMBINED_CAP: f64 = 200.0;
}

/// Weights of the basic weighted score
pub mod weights {
    pub const BRIGHTNESS: f64 = 30.0;
    pub const HUE_DIVERSITY: f64 = 30.0;
    pub const CONTRAST: f64 = 40.0;
}

/// Band breakpoints for feedback selection
pub mod breakpoints {
    /// Below this mean sample value the image reads as dark
    pub const DARK_BRIGHTNESS: f64 = 80.0;

    /// Below this many hues the palette reads as narrow
    pub const FEW_HUES: f64 = 20.0;

    /// At or above this many hues the palette reads as rich
    pub const RICH_HUES: f64 = 50.0;

    /// Below this standard deviation the image reads as flat
    pub const WEAK_CONTRAST: f64 = 30.0;

    /// At or above this standard deviation the image reads as punchy
    pub const STRONG_CONTRAST: f64 = 60.0;

    /// Sub-scores below this are weak
    pub const WEAK_SUB_SCORE: f64 = 40.0;

    /// Sub-scores at or above this are strong
    pub const STRONG_SUB_SCORE: f64 = 70.0;
}
