use image::{Rgba, RgbaImage};
use indicatif::ProgressBar;

use crate::color::{hsv_to_rgb, rgb_to_hsv};

/// Reference blues commonly used by blue-branded icons, matched within the
/// user tolerance in addition to the dominant-blue heuristic.
pub const REFERENCE_BLUES: [[u8; 3]; 3] = [
    [0, 122, 204],  // primary VS Code blue
    [37, 99, 235],  // another common blue
    [59, 130, 246], // lighter blue variant
];

/// Heuristic blue-pixel classification.
///
/// A pixel counts as blue when its blue channel dominates red and green and
/// exceeds 100, or when all three channels fall within `tolerance` of one of
/// the reference blues.
pub fn is_blue_pixel(pixel: &Rgba<u8>, tolerance: i32) -> bool {
    let (r, g, b) = (pixel[0] as i32, pixel[1] as i32, pixel[2] as i32);

    if b > r && b > g && b > 100 {
        return true;
    }

    for blue in REFERENCE_BLUES {
        if (r - blue[0] as i32).abs() < tolerance
            && (g - blue[1] as i32).abs() < tolerance
            && (b - blue[2] as i32).abs() < tolerance
        {
            return true;
        }
    }

    false
}

/// Recolor all blue pixels of `img` in place toward `target`.
///
/// With `preserve_brightness` set, each blue pixel keeps its own saturation
/// and value and only takes the target hue, so the icon's shading survives.
/// Otherwise blue pixels are replaced with the flat target color. Alpha is
/// never touched and fully transparent pixels are skipped outright.
///
/// Returns the number of modified pixels.
pub fn recolor_image(
    img: &mut RgbaImage,
    target: [u8; 3],
    tolerance: i32,
    preserve_brightness: bool,
    progress: Option<&ProgressBar>,
) -> u64 {
    let (target_hue, _, _) = rgb_to_hsv(target);
    let mut modified: u64 = 0;

    for (i, pixel) in img.pixels_mut().enumerate() {
        if let Some(pb) = progress {
            if i % 1000 == 0 {
                pb.set_position(i as u64);
            }
        }

        // Skip transparent pixels
        if pixel[3] == 0 {
            continue;
        }

        if !is_blue_pixel(pixel, tolerance) {
            continue;
        }

        let new_rgb = if preserve_brightness {
            let (_, saturation, value) = rgb_to_hsv([pixel[0], pixel[1], pixel[2]]);
            hsv_to_rgb(target_hue, saturation, value)
        } else {
            target
        };

        *pixel = Rgba([new_rgb[0], new_rgb[1], new_rgb[2], pixel[3]]);
        modified += 1;
    }

    if let Some(pb) = progress {
        pb.set_position(img.pixels().len() as u64);
    }

    modified
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::rgb_to_hsv;
    use image::ImageBuffer;

    #[test]
    fn test_reference_blue_always_matches() {
        // Dominant-blue rule fires regardless of tolerance
        for tolerance in [0, 1, 30, 100] {
            assert!(is_blue_pixel(&Rgba([0, 122, 204, 255]), tolerance));
        }
    }

    #[test]
    fn test_dominant_blue_rule() {
        assert!(is_blue_pixel(&Rgba([10, 20, 150, 255]), 30));
        // Blue dominant but too dark
        assert!(!is_blue_pixel(&Rgba([10, 20, 90, 255]), 0));
        // Red dominant
        assert!(!is_blue_pixel(&Rgba([200, 20, 150, 255]), 0));
    }

    #[test]
    fn test_tolerance_window() {
        // Green-dominant pixel the first rule never matches; only a wide
        // tolerance window around (0, 122, 204) catches it.
        let pixel = Rgba([90, 120, 110, 255]);
        assert!(!is_blue_pixel(&pixel, 30));
        assert!(is_blue_pixel(&pixel, 100));
    }

    #[test]
    fn test_transparent_pixels_untouched() {
        let mut img: RgbaImage =
            ImageBuffer::from_pixel(4, 4, Rgba([0, 122, 204, 0]));
        let modified = recolor_image(&mut img, [255, 0, 0], 30, true, None);

        assert_eq!(modified, 0);
        for pixel in img.pixels() {
            assert_eq!(*pixel, Rgba([0, 122, 204, 0]));
        }
    }

    #[test]
    fn test_alpha_preserved_on_recolor() {
        let mut img: RgbaImage =
            ImageBuffer::from_pixel(2, 2, Rgba([0, 122, 204, 137]));
        let modified = recolor_image(&mut img, [255, 0, 0], 30, false, None);

        assert_eq!(modified, 4);
        for pixel in img.pixels() {
            assert_eq!(*pixel, Rgba([255, 0, 0, 137]));
        }
    }

    #[test]
    fn test_hue_preserving_recolor_keeps_shading() {
        let original = [0u8, 122, 204];
        let (_, orig_s, orig_v) = rgb_to_hsv(original);

        let mut img: RgbaImage =
            ImageBuffer::from_pixel(1, 1, Rgba([original[0], original[1], original[2], 255]));
        recolor_image(&mut img, [255, 0, 0], 30, true, None);

        let out = img.get_pixel(0, 0);
        let (out_h, out_s, out_v) = rgb_to_hsv([out[0], out[1], out[2]]);
        let (target_h, _, _) = rgb_to_hsv([255, 0, 0]);

        // Saturation and value within rounding of the original, hue taken
        // from the target.
        assert!((out_s - orig_s).abs() < 0.01, "saturation drifted: {}", out_s);
        assert!((out_v - orig_v).abs() < 0.01, "value drifted: {}", out_v);
        let hue_delta = (out_h - target_h).abs().min(360.0 - (out_h - target_h).abs());
        assert!(hue_delta < 1.0, "hue {} != target {}", out_h, target_h);
    }

    #[test]
    fn test_recolor_to_own_hue_is_stable() {
        // Realigning hue to the icon's own dominant blue leaves pixels
        // essentially unchanged.
        let mut img: RgbaImage =
            ImageBuffer::from_pixel(3, 3, Rgba([0, 122, 204, 255]));
        recolor_image(&mut img, [0, 122, 204], 30, true, None);

        for pixel in img.pixels() {
            for c in 0..3 {
                assert!((pixel[c] as i32 - [0i32, 122, 204][c]).abs() <= 1);
            }
            assert_eq!(pixel[3], 255);
        }
    }

    #[test]
    fn test_non_blue_pixels_untouched() {
        let mut img: RgbaImage =
            ImageBuffer::from_pixel(2, 2, Rgba([200, 30, 30, 255]));
        let modified = recolor_image(&mut img, [0, 255, 0], 30, true, None);

        assert_eq!(modified, 0);
        for pixel in img.pixels() {
            assert_eq!(*pixel, Rgba([200, 30, 30, 255]));
        }
    }
}
