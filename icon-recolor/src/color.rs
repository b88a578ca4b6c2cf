use palette::{FromColor, Hsv, Srgb};

/// Parse a hex color string ("#RRGGBB" or "RRGGBB") into an RGB triple.
pub fn parse_hex(hex: &str) -> Result<[u8; 3], String> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);

    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(format!("Invalid hex color '{}'", hex));
    }

    let r = u8::from_str_radix(&digits[0..2], 16).map_err(|_| format!("Invalid hex color '{}'", hex))?;
    let g = u8::from_str_radix(&digits[2..4], 16).map_err(|_| format!("Invalid hex color '{}'", hex))?;
    let b = u8::from_str_radix(&digits[4..6], 16).map_err(|_| format!("Invalid hex color '{}'", hex))?;

    Ok([r, g, b])
}

/// Convert an RGB triple (0-255) to HSV (hue in degrees 0-360, saturation and
/// value in 0.0-1.0).
pub fn rgb_to_hsv(rgb: [u8; 3]) -> (f32, f32, f32) {
    let srgb = Srgb::new(
        rgb[0] as f32 / 255.0,
        rgb[1] as f32 / 255.0,
        rgb[2] as f32 / 255.0,
    );
    let hsv = Hsv::from_color(srgb);
    (hsv.hue.into_positive_degrees(), hsv.saturation, hsv.value)
}

/// Convert HSV (hue in degrees, saturation and value in 0.0-1.0) back to an
/// RGB triple, rounded to 0-255 per channel.
pub fn hsv_to_rgb(hue: f32, saturation: f32, value: f32) -> [u8; 3] {
    let srgb = Srgb::from_color(Hsv::new(hue, saturation, value));
    let rgb = srgb.into_format::<u8>();
    [rgb.red, rgb.green, rgb.blue]
}
