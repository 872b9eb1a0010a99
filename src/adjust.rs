//! Brightness and contrast adjustment of the source image.
//!
//! Runs before grayscale reduction so the adjustments act on the same
//! color data the user previews. Both factors are multiplicative with
//! 1.0 as identity; the contrast stretch is centred on mid-gray (128).

use image::{DynamicImage, RgbImage};
use tracing::debug;

/// Mid-gray pivot for the contrast stretch.
const CONTRAST_PIVOT: f32 = 128.0;

/// Apply brightness and contrast factors to a decoded image.
///
/// The image is converted to RGB8 if it is not already, then each
/// channel is scaled by `brightness` and stretched around 128 by
/// `contrast`, clamped to `0..=255`. Factors must be positive but are
/// otherwise unconstrained; callers that want UI-style limits clamp
/// before calling.
pub fn adjust(image: &DynamicImage, brightness: f32, contrast: f32) -> RgbImage {
    let mut rgb = image.to_rgb8();

    let identity =
        (brightness - 1.0).abs() < f32::EPSILON && (contrast - 1.0).abs() < f32::EPSILON;
    if identity {
        return rgb;
    }

    debug!(
        width = rgb.width(),
        height = rgb.height(),
        brightness,
        contrast,
        "Adjusting source image"
    );

    for pixel in rgb.pixels_mut() {
        for channel in &mut pixel.0 {
            let brightened = f32::from(*channel) * brightness;
            let stretched = (brightened - CONTRAST_PIVOT) * contrast + CONTRAST_PIVOT;
            *channel = stretched.round().clamp(0.0, 255.0) as u8;
        }
    }

    rgb
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn solid(width: u32, height: u32, value: u8) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb([value; 3])))
    }

    #[test]
    fn test_identity_factors_leave_pixels_unchanged() {
        let mut source = RgbImage::new(4, 3);
        for (i, pixel) in source.pixels_mut().enumerate() {
            pixel.0 = [(i * 21) as u8, (i * 13) as u8, (i * 7) as u8];
        }
        let image = DynamicImage::ImageRgb8(source.clone());

        let adjusted = adjust(&image, 1.0, 1.0);
        assert_eq!(adjusted, source);
    }

    #[test]
    fn test_brightness_scales_channels() {
        let adjusted = adjust(&solid(2, 2, 100), 1.5, 1.0);
        // 100 * 1.5 = 150, then identity contrast
        assert_eq!(adjusted.get_pixel(0, 0).0, [150, 150, 150]);
    }

    #[test]
    fn test_brightness_clamps_at_white() {
        let adjusted = adjust(&solid(1, 1, 200), 2.0, 1.0);
        assert_eq!(adjusted.get_pixel(0, 0).0, [255, 255, 255]);
    }

    #[test]
    fn test_contrast_pivots_on_mid_gray() {
        // 128 is the pivot: contrast alone must not move it.
        let adjusted = adjust(&solid(1, 1, 128), 1.0, 1.9);
        assert_eq!(adjusted.get_pixel(0, 0).0, [128, 128, 128]);

        // Values either side of the pivot move away from it.
        let darker = adjust(&solid(1, 1, 100), 1.0, 2.0);
        assert_eq!(darker.get_pixel(0, 0).0, [72, 72, 72]);
        let lighter = adjust(&solid(1, 1, 156), 1.0, 2.0);
        assert_eq!(lighter.get_pixel(0, 0).0, [184, 184, 184]);
    }

    #[test]
    fn test_low_contrast_compresses_toward_pivot() {
        let adjusted = adjust(&solid(1, 1, 0), 1.0, 0.5);
        assert_eq!(adjusted.get_pixel(0, 0).0, [64, 64, 64]);
    }

    #[test]
    fn test_converts_non_rgb_input() {
        let gray = DynamicImage::ImageLuma8(image::GrayImage::from_pixel(
            2,
            2,
            image::Luma([77]),
        ));
        let adjusted = adjust(&gray, 1.0, 1.0);
        assert_eq!(adjusted.dimensions(), (2, 2));
        assert_eq!(adjusted.get_pixel(1, 1).0, [77, 77, 77]);
    }
}
