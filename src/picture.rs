//! Decoding downloaded image bytes and sizing the window around them.

use crate::prelude::*;
use image::imageops::FilterType;

/// Decode compressed image bytes, sniffing the format from the content.
pub fn decode_image(bytes: &[u8]) -> Result<DynamicImage, AppError> {
    if bytes.is_empty() {
        return Err(AppError::EmptyImage);
    }
    let format = image::guess_format(bytes)?;
    debug!("Decoding {} bytes as {:?}", bytes.len(), format);
    let img = image::load_from_memory_with_format(bytes, format)?;
    let (w, h) = img.dimensions();
    if w == 0 || h == 0 {
        return Err(AppError::EmptyImage);
    }
    Ok(img)
}

/// Where the image is drawn: the origin plus the window-sized extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl DisplayRect {
    /// Shrink `width`x`height` to fit within the bounds.
    ///
    /// Two sequential passes: first by height, then by width on the already
    /// scaled size. Each pass truncates toward zero. This is not a single
    /// aspect fit; the width pass only runs if the height pass left the
    /// width oversized.
    pub fn scaled_to(width: u32, height: u32, max_width: u32, max_height: u32) -> Self {
        let mut rect = Self {
            x: 0,
            y: 0,
            width,
            height,
        };
        if rect.height > max_height {
            rect.scale(max_height as f32 / rect.height as f32);
        }
        if rect.width > max_width {
            rect.scale(max_width as f32 / rect.width as f32);
        }
        rect
    }

    fn scale(&mut self, factor: f32) {
        self.height = (self.height as f32 * factor) as u32;
        self.width = (self.width as f32 * factor) as u32;
    }

    pub fn for_image(img: &DynamicImage, config: &Config) -> Self {
        let (w, h) = img.dimensions();
        Self::scaled_to(w, h, config.max_width, config.max_height)
    }

    pub fn size(&self) -> [f32; 2] {
        [self.width as f32, self.height as f32]
    }

    /// Window size: `size()` with each side at least one pixel.
    pub fn window_size(&self) -> [f32; 2] {
        self.size().map(|v| v.max(1.0))
    }
}

/// Downsample `img` to the rect so the texture never exceeds what is shown.
pub fn fit_to_rect(img: &DynamicImage, rect: &DisplayRect) -> DynamicImage {
    let (w, h) = (rect.width.max(1), rect.height.max(1));
    if img.dimensions() == (w, h) {
        return img.clone();
    }
    debug!("Resizing {:?} to {}x{}", img.dimensions(), w, h);
    img.resize_exact(w, h, FilterType::Triangle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::ImageFormat;
    use std::io::Cursor;

    fn scaled(w: u32, h: u32) -> (u32, u32) {
        let rect = DisplayRect::scaled_to(w, h, MAX_WIDTH, MAX_HEIGHT);
        assert_eq!((rect.x, rect.y), (0, 0));
        (rect.width, rect.height)
    }

    fn scaled_rect(w: u32, h: u32) -> DisplayRect {
        DisplayRect::scaled_to(w, h, MAX_WIDTH, MAX_HEIGHT)
    }

    fn encoded(w: u32, h: u32, format: ImageFormat) -> Vec<u8> {
        let img = DynamicImage::new_rgb8(w, h);
        let mut buf = Vec::new();
        img.write_to(&mut Cursor::new(&mut buf), format).unwrap();
        buf
    }

    #[test]
    fn small_images_are_untouched() {
        assert_eq!(scaled(640, 480), (640, 480));
        assert_eq!(scaled(800, 600), (800, 600));
        assert_eq!(scaled(1, 1), (1, 1));
    }

    #[test]
    fn height_pass_only() {
        assert_eq!(scaled(1200, 900), (800, 600));
        assert_eq!(scaled(400, 1200), (200, 600));
    }

    #[test]
    fn width_pass_only() {
        assert_eq!(scaled(1600, 400), (800, 200));
    }

    #[test]
    fn height_pass_leaves_width_at_bound() {
        assert_eq!(scaled(2000, 1500), (800, 600));
    }

    #[test]
    fn both_passes_run_in_order() {
        // 3000x1200 -> 1500x600 by height, then 800x320 by width
        assert_eq!(scaled(3000, 1200), (800, 320));
    }

    #[test]
    fn respects_custom_bounds() {
        let rect = DisplayRect::scaled_to(1000, 500, 500, 1000);
        assert_eq!((rect.width, rect.height), (500, 250));
        assert_eq!(rect.size(), [500.0, 250.0]);
    }

    #[test]
    fn extreme_aspect_keeps_truncation_but_window_is_never_empty() {
        let rect = DisplayRect::scaled_to(1, 100_000, MAX_WIDTH, MAX_HEIGHT);
        assert_eq!((rect.width, rect.height), (0, 600));
        assert_eq!(rect.window_size(), [1.0, 600.0]);
        assert_eq!(scaled_rect(640, 480).window_size(), [640.0, 480.0]);
    }

    #[test]
    fn fit_shrinks_to_rect() {
        let img = DynamicImage::new_rgb8(4096, 10);
        let rect = DisplayRect::for_image(&img, &Config::default());
        assert_eq!((rect.width, rect.height), (800, 1));
        assert_eq!(fit_to_rect(&img, &rect).dimensions(), (800, 1));
    }

    #[test]
    fn fit_gives_zero_sides_one_pixel() {
        let img = DynamicImage::new_rgb8(1, 100_000);
        let rect = DisplayRect::for_image(&img, &Config::default());
        assert_eq!(fit_to_rect(&img, &rect).dimensions(), (1, 600));
    }

    #[test]
    fn fit_leaves_small_images_alone() {
        let img = DynamicImage::new_rgb8(640, 480);
        let rect = DisplayRect::for_image(&img, &Config::default());
        assert_eq!(fit_to_rect(&img, &rect).dimensions(), (640, 480));
    }

    #[test]
    fn decodes_webp() {
        let bytes = encoded(9, 5, ImageFormat::WebP);
        assert_eq!(image::guess_format(&bytes).unwrap(), ImageFormat::WebP);
        assert_eq!(decode_image(&bytes).unwrap().dimensions(), (9, 5));
    }

    #[test]
    fn decodes_png_and_jpeg() {
        let png = decode_image(&encoded(12, 7, ImageFormat::Png)).unwrap();
        assert_eq!(png.dimensions(), (12, 7));
        let jpeg = decode_image(&encoded(16, 8, ImageFormat::Jpeg)).unwrap();
        assert_eq!(jpeg.dimensions(), (16, 8));
    }

    #[test]
    fn rect_follows_decoded_size() {
        let img = decode_image(&encoded(1600, 400, ImageFormat::Png)).unwrap();
        let rect = DisplayRect::for_image(&img, &Config::default());
        assert_eq!((rect.width, rect.height), (800, 200));
    }

    #[test]
    fn empty_and_garbage_bytes_fail() {
        assert!(matches!(decode_image(&[]), Err(AppError::EmptyImage)));
        assert!(matches!(
            decode_image(b"definitely not an image"),
            Err(AppError::Image(_))
        ));
    }
}
