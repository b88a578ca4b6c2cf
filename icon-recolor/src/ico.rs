use anyhow::{Context, Result};
use fast_image_resize::{images::Image, ResizeOptions, Resizer};
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbaImage};
use std::fs;
use std::num::NonZeroU32;
use std::path::Path;

/// Largest square size embedded for very large desktop sources.
const MAX_ICO_SIZE: u32 = 1024;

/// Compute the square sizes to embed in an ICO container.
///
/// Standard icons get 16/32/48/64. Desktop mode adds 128/256, and for
/// sources at least 512px in both dimensions also 512 plus the source's
/// shorter side capped at 1024. Duplicates are removed preserving order.
pub fn ico_sizes(desktop: bool, src_width: u32, src_height: u32) -> Vec<u32> {
    let mut sizes: Vec<u32> = vec![16, 32, 48, 64];

    if desktop {
        sizes.extend([128, 256]);

        if src_width >= 512 && src_height >= 512 {
            sizes.push(512);
            sizes.push(src_width.min(src_height).min(MAX_ICO_SIZE));
        }
    }

    // Remove duplicates while preserving order
    let mut unique_sizes = Vec::new();
    for size in sizes {
        if !unique_sizes.contains(&size) {
            unique_sizes.push(size);
        }
    }

    unique_sizes
}

/// Resize an RGBA image to exact dimensions using high-quality resampling
/// (Lanczos3 convolution, the fast_image_resize default).
fn resize_rgba(img: &RgbaImage, width: u32, height: u32) -> Result<RgbaImage> {
    let (src_width, src_height) = img.dimensions();

    if src_width == width && src_height == height {
        return Ok(img.clone());
    }

    let src_width_nz =
        NonZeroU32::new(src_width).ok_or_else(|| anyhow::anyhow!("Source width is zero"))?;
    let src_height_nz =
        NonZeroU32::new(src_height).ok_or_else(|| anyhow::anyhow!("Source height is zero"))?;
    let dst_width_nz =
        NonZeroU32::new(width).ok_or_else(|| anyhow::anyhow!("Target width is zero"))?;
    let dst_height_nz =
        NonZeroU32::new(height).ok_or_else(|| anyhow::anyhow!("Target height is zero"))?;

    let src_image = Image::from_vec_u8(
        src_width_nz.into(),
        src_height_nz.into(),
        img.as_raw().clone(),
        fast_image_resize::PixelType::U8x4,
    )?;

    let mut dst_image = Image::new(
        dst_width_nz.into(),
        dst_height_nz.into(),
        fast_image_resize::PixelType::U8x4,
    );

    let mut resizer = Resizer::new();
    resizer.resize(&src_image, &mut dst_image, Some(&ResizeOptions::default()))?;

    RgbaImage::from_raw(width, height, dst_image.buffer().to_vec())
        .ok_or_else(|| anyhow::anyhow!("Resized buffer has wrong length for {}x{}", width, height))
}

/// Encode `img` as a multi-resolution ICO container with the given sizes.
///
/// Every directory entry carries a PNG-compressed payload. The one-byte
/// width/height fields of the ICONDIRENTRY cannot represent sizes above 255,
/// so entries of 256 and larger store 0 there and readers take the real
/// dimensions from the PNG data (standard for PNG-in-ICO). This is also why
/// the container is written by hand: stock ICO encoders refuse entries above
/// 256px, which desktop mode needs.
pub fn encode_ico(img: &RgbaImage, sizes: &[u32]) -> Result<Vec<u8>> {
    if sizes.is_empty() {
        return Err(anyhow::anyhow!("ICO container requires at least one size"));
    }

    let mut payloads: Vec<Vec<u8>> = Vec::with_capacity(sizes.len());
    for &size in sizes {
        let resized = resize_rgba(img, size, size)
            .with_context(|| format!("Failed to resize to {}x{}", size, size))?;

        let mut png_data = Vec::new();
        PngEncoder::new(&mut png_data)
            .write_image(resized.as_raw(), size, size, ExtendedColorType::Rgba8)
            .with_context(|| format!("Failed to PNG-encode {}x{} entry", size, size))?;
        payloads.push(png_data);
    }

    // ICONDIR header: reserved, type (1 = icon), entry count
    let mut data: Vec<u8> = Vec::new();
    data.extend_from_slice(&0u16.to_le_bytes());
    data.extend_from_slice(&1u16.to_le_bytes());
    data.extend_from_slice(&(sizes.len() as u16).to_le_bytes());

    // ICONDIRENTRY table, 16 bytes per entry
    let mut offset = 6 + 16 * payloads.len() as u32;
    for (&size, payload) in sizes.iter().zip(&payloads) {
        let dim_byte = if size >= 256 { 0u8 } else { size as u8 };
        data.push(dim_byte); // width
        data.push(dim_byte); // height
        data.push(0); // palette entries
        data.push(0); // reserved
        data.extend_from_slice(&1u16.to_le_bytes()); // color planes
        data.extend_from_slice(&32u16.to_le_bytes()); // bits per pixel
        data.extend_from_slice(&(payload.len() as u32).to_le_bytes());
        data.extend_from_slice(&offset.to_le_bytes());
        offset += payload.len() as u32;
    }

    for payload in &payloads {
        data.extend_from_slice(payload);
    }

    Ok(data)
}

/// Save `img` as a multi-resolution ICO file. Returns the embedded sizes.
pub fn save_ico(img: &RgbaImage, path: &Path, desktop: bool) -> Result<Vec<u32>> {
    let (width, height) = img.dimensions();
    let sizes = ico_sizes(desktop, width, height);

    let data = encode_ico(img, &sizes)?;
    fs::write(path, data)
        .with_context(|| format!("Failed to write ICO file '{}'", path.display()))?;

    Ok(sizes)
}
