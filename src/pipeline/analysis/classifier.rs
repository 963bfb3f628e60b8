use crate::pipeline::analysis::config::ClassifierConfig;
use crate::pipeline::domain::{Classification, ClassificationResult};
use image::{imageops, DynamicImage, RgbImage};
use std::collections::HashSet;

/// Labels an image as a drawing or a photo by counting distinct colors after
/// downscaling. Flat-shaded artwork has few; camera noise makes photos have many.
///
/// This is a single untested threshold, so callers should treat the label as
/// a hint.
#[derive(Debug, Clone)]
pub struct ArtStyleClassifier {
    config: ClassifierConfig,
}

impl ArtStyleClassifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    pub fn classify(&self, image: &DynamicImage) -> ClassificationResult {
        self.classify_rgb(&image.to_rgb8())
    }

    pub fn classify_rgb(&self, image: &RgbImage) -> ClassificationResult {
        let size = self.config.target_size;
        let resized = imageops::resize(image, size, size, self.config.filter.into());
        let unique_colors = count_unique_colors(&resized);

        let threshold = self.config.unique_color_threshold;
        let classification = if unique_colors < threshold {
            Classification::Drawing
        } else {
            Classification::Photo
        };

        ClassificationResult::new(classification, unique_colors, threshold)
    }
}

impl Default for ArtStyleClassifier {
    fn default() -> Self {
        Self::new(ClassifierConfig::default())
    }
}

fn count_unique_colors(image: &RgbImage) -> usize {
    let mut colors: HashSet<[u8; 3]> = HashSet::with_capacity(image.len() / 3);
    for px in image.pixels() {
        colors.insert(px.0);
    }
    colors.len()
}
