use crate::error::EvaluationError;
use crate::pipeline::domain::StatisticsSnapshot;
use image::{DynamicImage, Rgb, RgbImage};

/// Extracts brightness, contrast and hue diversity from a decoded image
#[derive(Debug, Clone, Copy, Default)]
pub struct StatisticsExtractor;

impl StatisticsExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn extract(&self, image: &DynamicImage) -> Result<StatisticsSnapshot, EvaluationError> {
        self.extract_rgb(&image.to_rgb8())
    }

    pub fn extract_rgb(&self, image: &RgbImage) -> Result<StatisticsSnapshot, EvaluationError> {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(EvaluationError::EmptyImage);
        }

        // Integer accumulators keep mean and variance exact for any 8-bit image
        let mut sum: u128 = 0;
        let mut sum_sq: u128 = 0;
        let mut seen_hues = [false; 256];

        for px in image.pixels() {
            for &channel in px.0.iter() {
                let v = channel as u128;
                sum += v;
                sum_sq += v * v;
            }
            seen_hues[rgb_to_hsv(px)[0] as usize] = true;
        }

        let n = image.as_raw().len() as u128;
        let brightness = sum as f64 / n as f64;
        // n * sum_sq >= sum^2 by Cauchy-Schwarz, so this never underflows
        let variance = (n * sum_sq - sum * sum) as f64 / (n * n) as f64;
        let contrast = variance.sqrt();
        let hue_diversity = seen_hues.iter().filter(|&&seen| seen).count() as u32;

        Ok(StatisticsSnapshot::new(brightness, contrast, hue_diversity))
    }
}

/// Converts one pixel to 8-bit HSV.
///
/// Grey pixels get hue 0. Intermediate values are single precision and the
/// hue is truncated after scaling to 0..=255, so pure green lands on 85 and
/// pure blue on 170.
pub fn rgb_to_hsv(px: &Rgb<u8>) -> [u8; 3] {
    let [r, g, b] = px.0;
    let maxc = r.max(g).max(b);
    let minc = r.min(g).min(b);

    if maxc == minc {
        return [0, 0, maxc];
    }

    let cr = (maxc - minc) as f32;
    let s = cr / maxc as f32;
    let rc = (maxc - r) as f32 / cr;
    let gc = (maxc - g) as f32 / cr;
    let bc = (maxc - b) as f32 / cr;

    let sector = if r == maxc {
        bc - gc
    } else if g == maxc {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };

    let h = ((sector as f64 / 6.0 + 1.0) % 1.0) as f32;
    let hue = ((h as f64 * 255.0) as i32).clamp(0, 255) as u8;
    let saturation = ((s as f64 * 255.0) as i32).clamp(0, 255) as u8;

    [hue, saturation, maxc]
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::ImageBuffer;

    fn solid(width: u32, height: u32, color: [u8; 3]) -> RgbImage {
        ImageBuffer::from_pixel(width, height, Rgb(color))
    }

    /// Walks the full hue circle, one row per sector
    fn hue_wheel() -> RgbImage {
        ImageBuffer::from_fn(256, 6, |x, y| {
            let t = x as u8;
            let color = match y {
                0 => [255, t, 0],
                1 => [255 - t, 255, 0],
                2 => [0, 255, t],
                3 => [0, 255 - t, 255],
                4 => [t, 0, 255],
                _ => [255, 0, 255 - t],
            };
            Rgb(color)
        })
    }

    #[test]
    fn black_image_has_single_hue_and_no_contrast() {
        let stats = StatisticsExtractor::new()
            .extract_rgb(&solid(32, 32, [0, 0, 0]))
            .unwrap();
        assert_eq!(stats.brightness(), 0.0);
        assert_eq!(stats.contrast(), 0.0);
        assert_eq!(stats.hue_diversity(), 1);
    }

    #[test]
    fn contrast_is_population_standard_deviation() {
        let image = ImageBuffer::from_fn(2, 1, |x, _| {
            if x == 0 {
                Rgb([0, 0, 0])
            } else {
                Rgb([255, 255, 255])
            }
        });
        let stats = StatisticsExtractor::new().extract_rgb(&image).unwrap();
        assert_eq!(stats.brightness(), 127.5);
        assert_eq!(stats.contrast(), 127.5);
    }

    #[test]
    fn brightness_averages_channels() {
        let stats = StatisticsExtractor::new()
            .extract_rgb(&solid(4, 4, [30, 60, 90]))
            .unwrap();
        assert!((stats.brightness() - 60.0).abs() < 1e-9);
        assert!((stats.contrast() - (600.0f64).sqrt()).abs() < 1e-9);
    }

    #[test]
    fn primary_hues_follow_eight_bit_mapping() {
        assert_eq!(rgb_to_hsv(&Rgb([255, 0, 0]))[0], 0);
        assert_eq!(rgb_to_hsv(&Rgb([0, 255, 0]))[0], 85);
        assert_eq!(rgb_to_hsv(&Rgb([0, 0, 255]))[0], 170);
        assert_eq!(rgb_to_hsv(&Rgb([255, 0, 255]))[0], 212);
        assert_eq!(rgb_to_hsv(&Rgb([128, 128, 128])), [0, 0, 128]);
    }

    #[test]
    fn hue_wheel_covers_almost_every_level() {
        let stats = StatisticsExtractor::new().extract_rgb(&hue_wheel()).unwrap();
        assert!(stats.hue_diversity() >= 250);
    }

    #[test]
    fn empty_image_is_rejected() {
        let result = StatisticsExtractor::new().extract_rgb(&RgbImage::new(0, 0));
        assert!(matches!(result, Err(EvaluationError::EmptyImage)));
    }
}
