use crate::error::EvaluationError;
use image::{DynamicImage, GenericImageView, ImageFormat};

/// Formats accepted from uploads
pub const ACCEPTED_FORMATS: [ImageFormat; 2] = [ImageFormat::Jpeg, ImageFormat::Png];

/// Decodes an uploaded JPEG or PNG byte stream
pub fn decode_upload(bytes: &[u8]) -> Result<DynamicImage, EvaluationError> {
    if bytes.is_empty() {
        return Err(EvaluationError::EmptyImage);
    }

    let format = image::guess_format(bytes)?;
    if !ACCEPTED_FORMATS.contains(&format) {
        return Err(EvaluationError::UnsupportedFormat(format!("{:?}", format)));
    }

    let image = image::load_from_memory_with_format(bytes, format)?;
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(EvaluationError::EmptyImage);
    }

    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgb, RgbImage};
    use std::io::Cursor;

    fn encode(image: &RgbImage, format: ImageFormat) -> Vec<u8> {
        let mut bytes = Vec::new();
        image.write_to(&mut Cursor::new(&mut bytes), format).unwrap();
        bytes
    }

    #[test]
    fn decodes_png_losslessly() {
        let image: RgbImage = ImageBuffer::from_pixel(8, 4, Rgb([12, 34, 56]));
        let decoded = decode_upload(&encode(&image, ImageFormat::Png)).unwrap();
        assert_eq!(decoded.to_rgb8(), image);
    }

    #[test]
    fn decodes_jpeg() {
        let image: RgbImage = ImageBuffer::from_pixel(16, 16, Rgb([200, 200, 200]));
        let decoded = decode_upload(&encode(&image, ImageFormat::Jpeg)).unwrap();
        assert_eq!(decoded.dimensions(), (16, 16));
    }

    #[test]
    fn rejects_other_formats() {
        let image: RgbImage = ImageBuffer::from_pixel(2, 2, Rgb([0, 0, 0]));
        let result = decode_upload(&encode(&image, ImageFormat::Bmp));
        assert!(matches!(result, Err(EvaluationError::UnsupportedFormat(_))));
    }

    #[test]
    fn rejects_empty_and_garbage_input() {
        assert!(matches!(decode_upload(&[]), Err(EvaluationError::EmptyImage)));
        assert!(matches!(
            decode_upload(b"definitely not an image"),
            Err(EvaluationError::Decode(_))
        ));
    }

    #[test]
    fn rejects_truncated_png() {
        let image: RgbImage = ImageBuffer::from_pixel(8, 8, Rgb([1, 2, 3]));
        let bytes = encode(&image, ImageFormat::Png);
        assert!(matches!(
            decode_upload(&bytes[..bytes.len() / 2]),
            Err(EvaluationError::Decode(_))
        ));
    }
}
