use std::fs;
use std::path::Path;

use image::{ImageError, ImageFormat, Rgb, RgbImage};
use imageproc::drawing::{
    draw_filled_circle_mut, draw_filled_rect_mut, draw_hollow_circle_mut, draw_line_segment_mut,
};
use imageproc::rect::Rect;
use log::debug;

use super::theme::{BACKGROUND, GLYPH_SCALE, NODE_RADIUS};
use crate::error::{Error, Result};

/// 3x5 bitmaps for '0'..='9', one `u8` per row, high bit on the left.
const DIGITS: [[u8; 5]; 10] = [
    [0b111, 0b101, 0b101, 0b101, 0b111],
    [0b010, 0b110, 0b010, 0b010, 0b111],
    [0b111, 0b001, 0b111, 0b100, 0b111],
    [0b111, 0b001, 0b111, 0b001, 0b111],
    [0b101, 0b101, 0b111, 0b001, 0b001],
    [0b111, 0b100, 0b111, 0b001, 0b111],
    [0b111, 0b100, 0b111, 0b101, 0b111],
    [0b111, 0b001, 0b001, 0b001, 0b001],
    [0b111, 0b101, 0b111, 0b101, 0b111],
    [0b111, 0b101, 0b111, 0b001, 0b111],
];

const GLYPH_W: u32 = 3;
const GLYPH_H: u32 = 5;

/// RGB raster that layers are drawn onto, one per figure.
pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Canvas {
            image: RgbImage::from_pixel(width, height, BACKGROUND),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn line(&mut self, from: (f32, f32), to: (f32, f32), color: Rgb<u8>) {
        draw_line_segment_mut(&mut self.image, from, to, color);
    }

    pub fn node(&mut self, center: (f32, f32), fill: Rgb<u8>, outline: Rgb<u8>) {
        let c = (center.0.round() as i32, center.1.round() as i32);
        draw_filled_circle_mut(&mut self.image, c, NODE_RADIUS, fill);
        draw_hollow_circle_mut(&mut self.image, c, NODE_RADIUS, outline);
    }

    /// Draws `text` centred on `center`. Only decimal digits have glyphs; other
    /// characters are skipped.
    pub fn label(&mut self, center: (f32, f32), text: &str, color: Rgb<u8>) {
        let glyphs: Vec<&[u8; 5]> = text
            .chars()
            .filter_map(|c| c.to_digit(10))
            .map(|d| &DIGITS[d as usize])
            .collect();
        if glyphs.is_empty() {
            return;
        }

        let s = GLYPH_SCALE;
        let count = glyphs.len() as u32;
        let total_w = count * GLYPH_W * s + (count - 1) * s;
        let left = center.0.round() as i32 - (total_w / 2) as i32;
        let top = center.1.round() as i32 - (GLYPH_H * s / 2) as i32;

        for (i, rows) in glyphs.into_iter().enumerate() {
            let x0 = left + (i as u32 * (GLYPH_W + 1) * s) as i32;
            for (row, bits) in rows.iter().enumerate() {
                for col in 0..GLYPH_W {
                    if bits & (1 << (GLYPH_W - 1 - col)) == 0 {
                        continue;
                    }
                    let x = x0 + (col * s) as i32;
                    let y = top + (row as u32 * s) as i32;
                    draw_filled_rect_mut(&mut self.image, Rect::at(x, y).of_size(s, s), color);
                }
            }
        }
    }

    /// Encodes the canvas as PNG at `path`.
    ///
    /// Writes to a temporary sibling first and renames it into place, so a
    /// failed write never leaves a truncated image under the final name.
    pub fn save_png(&self, path: &Path) -> Result<()> {
        let tmp = path.with_extension("png.tmp");
        if let Err(e) = self.image.save_with_format(&tmp, ImageFormat::Png) {
            let _ = fs::remove_file(&tmp);
            return Err(match e {
                ImageError::IoError(io) => Error::Io(io),
                other => Error::Image(other),
            });
        }
        if let Err(e) = fs::rename(&tmp, path) {
            let _ = fs::remove_file(&tmp);
            return Err(Error::Io(e));
        }
        debug!("wrote {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::theme::{DARK_LABEL, SELECTED_NODE};

    #[test]
    fn test_new_canvas_is_blank() {
        let canvas = Canvas::new(8, 4);
        assert_eq!((canvas.width(), canvas.height()), (8, 4));
        assert!(canvas.image().pixels().all(|p| *p == BACKGROUND));
    }

    #[test]
    fn test_node_fills_disc() {
        let mut canvas = Canvas::new(64, 64);
        canvas.node((32.0, 32.0), SELECTED_NODE, DARK_LABEL);
        assert_eq!(*canvas.image().get_pixel(32, 32), SELECTED_NODE);
        assert_eq!(*canvas.image().get_pixel(32, 32 - NODE_RADIUS as u32), DARK_LABEL);
        assert_eq!(*canvas.image().get_pixel(0, 0), BACKGROUND);
    }

    #[test]
    fn test_label_draws_digit_cells() {
        let mut canvas = Canvas::new(40, 40);
        canvas.label((20.0, 20.0), "1", DARK_LABEL);
        let inked = canvas.image().pixels().filter(|p| **p == DARK_LABEL).count();
        // '1' has 8 lit cells of GLYPH_SCALE x GLYPH_SCALE pixels
        assert_eq!(inked as u32, 8 * GLYPH_SCALE * GLYPH_SCALE);
    }

    #[test]
    fn test_label_ignores_non_digits() {
        let mut canvas = Canvas::new(40, 40);
        canvas.label((20.0, 20.0), "ab", DARK_LABEL);
        assert!(canvas.image().pixels().all(|p| *p == BACKGROUND));
    }
}
