use crate::{Result, VisualTestError};
use image::{DynamicImage, Rgba, RgbaImage};
use image_compare::Algorithm;

/// Result of comparing two images
pub struct CompareResult {
    /// Similarity score from 0.0 to 1.0
    pub similarity: f64,
    /// Number of pixels whose largest channel difference exceeds the tolerance
    pub differing_pixels: usize,
}

/// Channel difference below which two pixels count as equal in diffs
const DIFF_TOLERANCE: u8 = 10;

/// Compare two frames using SSIM, ignoring channel differences up to the diff tolerance
pub fn compare_images(reference: &RgbaImage, captured: &RgbaImage) -> Result<CompareResult> {
    compare_images_with_tolerance(reference, captured, DIFF_TOLERANCE)
}

/// Compare two frames using SSIM, counting pixels whose largest channel
/// difference exceeds `tolerance`. A tolerance of 0 counts every changed pixel.
pub fn compare_images_with_tolerance(
    reference: &RgbaImage,
    captured: &RgbaImage,
    tolerance: u8,
) -> Result<CompareResult> {
    // Check dimensions match
    if reference.dimensions() != captured.dimensions() {
        return Err(VisualTestError::Compare(format!(
            "Image dimensions don't match: reference {:?} vs captured {:?}",
            reference.dimensions(),
            captured.dimensions()
        )));
    }

    // SSIM works on RGB, our frames are always opaque
    let ref_rgb = DynamicImage::ImageRgba8(reference.clone()).to_rgb8();
    let cap_rgb = DynamicImage::ImageRgba8(captured.clone()).to_rgb8();

    let result =
        image_compare::rgb_similarity_structure(&Algorithm::MSSIMSimple, &ref_rgb, &cap_rgb)
            .map_err(|e| VisualTestError::Compare(format!("SSIM comparison failed: {}", e)))?;

    let differing_pixels = reference
        .pixels()
        .zip(captured.pixels())
        .filter(|(a, b)| pixel_difference(a, b) > tolerance)
        .count();

    Ok(CompareResult {
        similarity: result.score,
        differing_pixels,
    })
}

/// Generate a diff image highlighting differences between two frames
pub fn generate_diff_image(reference: &RgbaImage, captured: &RgbaImage) -> RgbaImage {
    let (width, height) = reference.dimensions();
    let mut diff_img = RgbaImage::new(width, height);

    for y in 0..height.min(captured.height()) {
        for x in 0..width.min(captured.width()) {
            let ref_pixel = reference.get_pixel(x, y);
            let cap_pixel = captured.get_pixel(x, y);

            let diff = pixel_difference(ref_pixel, cap_pixel);

            if diff > DIFF_TOLERANCE {
                // Highlight differences in red
                let intensity = (diff as f32 / 255.0 * 200.0 + 55.0) as u8;
                diff_img.put_pixel(x, y, Rgba([intensity, 0, 0, 255]));
            } else {
                // Show original with reduced opacity
                let r = (cap_pixel[0] as u16 / 3) as u8;
                let g = (cap_pixel[1] as u16 / 3) as u8;
                let b = (cap_pixel[2] as u16 / 3) as u8;
                diff_img.put_pixel(x, y, Rgba([r, g, b, 255]));
            }
        }
    }

    diff_img
}

/// Calculate the maximum channel difference between two pixels
pub fn pixel_difference(a: &Rgba<u8>, b: &Rgba<u8>) -> u8 {
    let dr = (a[0] as i16 - b[0] as i16).unsigned_abs() as u8;
    let dg = (a[1] as i16 - b[1] as i16).unsigned_abs() as u8;
    let db = (a[2] as i16 - b[2] as i16).unsigned_abs() as u8;
    dr.max(dg).max(db)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_images() {
        let img = RgbaImage::from_pixel(32, 32, Rgba([40, 80, 120, 255]));
        let result = compare_images(&img, &img).unwrap();
        assert!(result.similarity > 0.999);
        assert_eq!(result.differing_pixels, 0);
    }

    #[test]
    fn test_dimension_mismatch() {
        let a = RgbaImage::new(16, 16);
        let b = RgbaImage::new(16, 32);
        assert!(matches!(
            compare_images(&a, &b),
            Err(VisualTestError::Compare(_))
        ));
    }

    #[test]
    fn test_diff_marks_changed_pixels() {
        let a = RgbaImage::from_pixel(16, 16, Rgba([0, 0, 0, 255]));
        let mut b = a.clone();
        b.put_pixel(3, 4, Rgba([255, 255, 255, 255]));

        let diff = generate_diff_image(&a, &b);
        assert_eq!(*diff.get_pixel(3, 4), Rgba([255, 0, 0, 255]));
        assert_eq!(*diff.get_pixel(0, 0), Rgba([0, 0, 0, 255]));
        assert_eq!(compare_images(&a, &b).unwrap().differing_pixels, 1);
    }

    #[test]
    fn test_zero_tolerance_counts_one_unit_change() {
        let a = RgbaImage::from_pixel(16, 16, Rgba([32, 32, 32, 255]));
        let mut b = a.clone();
        b.put_pixel(7, 7, Rgba([33, 32, 32, 255]));

        assert_eq!(compare_images(&a, &b).unwrap().differing_pixels, 0);
        assert_eq!(
            compare_images_with_tolerance(&a, &b, 0)
                .unwrap()
                .differing_pixels,
            1
        );
    }

    #[test]
    fn test_pixel_difference() {
        assert_eq!(
            pixel_difference(&Rgba([10, 200, 30, 255]), &Rgba([20, 100, 30, 255])),
            100
        );
    }
}
