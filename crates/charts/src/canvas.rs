//! Minimal raster drawing on top of `image::RgbImage`.
//!
//! Text uses the 8x8 bitmap glyphs from `font8x8`, scaled by an integer factor. All coordinates
//! are signed; anything outside the image is clipped.

use font8x8::{UnicodeFonts, BASIC_FONTS, LATIN_FONTS};
use image::{Rgb, RgbImage};

pub(crate) const GLYPH_SIZE: u32 = 8;

pub(crate) const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
pub(crate) const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
pub(crate) const GREY: Rgb<u8> = Rgb([200, 200, 200]);
pub(crate) const SKY_BLUE: Rgb<u8> = Rgb([135, 206, 235]);

/// Ten-colour qualitative palette, cycled for wedges and cloud words.
pub(crate) const PALETTE: [Rgb<u8>; 10] = [
    Rgb([31, 119, 180]),
    Rgb([255, 127, 14]),
    Rgb([44, 160, 44]),
    Rgb([214, 39, 40]),
    Rgb([148, 103, 189]),
    Rgb([140, 86, 75]),
    Rgb([227, 119, 194]),
    Rgb([127, 127, 127]),
    Rgb([188, 189, 34]),
    Rgb([23, 190, 207]),
];

pub(crate) fn palette(index: usize) -> Rgb<u8> {
    PALETTE[index % PALETTE.len()]
}

fn glyph(c: char) -> [u8; 8] {
    BASIC_FONTS
        .get(c)
        .or_else(|| LATIN_FONTS.get(c))
        .or_else(|| BASIC_FONTS.get('?'))
        .unwrap_or([0; 8])
}

/// Width in pixels of `text` drawn at `scale`.
pub(crate) fn text_width(text: &str, scale: u32) -> u32 {
    text.chars().count() as u32 * GLYPH_SIZE * scale
}

/// Longest prefix of `text` that fits in `max_width` pixels at `scale`.
pub(crate) fn fit_text(text: &str, scale: u32, max_width: u32) -> String {
    let max_chars = (max_width / (GLYPH_SIZE * scale)) as usize;
    text.chars().take(max_chars).collect()
}

pub(crate) struct Canvas {
    image: RgbImage,
}

impl Canvas {
    pub(crate) fn new(width: u32, height: u32, background: Rgb<u8>) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, background),
        }
    }

    pub(crate) fn width(&self) -> u32 {
        self.image.width()
    }

    pub(crate) fn height(&self) -> u32 {
        self.image.height()
    }

    pub(crate) fn into_image(self) -> RgbImage {
        self.image
    }

    pub(crate) fn put(&mut self, x: i64, y: i64, colour: Rgb<u8>) {
        if x < 0 || y < 0 || x >= self.width() as i64 || y >= self.height() as i64 {
            return;
        }
        self.image.put_pixel(x as u32, y as u32, colour);
    }

    pub(crate) fn fill_rect(&mut self, x: i64, y: i64, width: u32, height: u32, colour: Rgb<u8>) {
        for dy in 0..height as i64 {
            for dx in 0..width as i64 {
                self.put(x + dx, y + dy, colour);
            }
        }
    }

    pub(crate) fn hline(&mut self, x: i64, y: i64, length: u32, colour: Rgb<u8>) {
        self.fill_rect(x, y, length, 1, colour);
    }

    pub(crate) fn vline(&mut self, x: i64, y: i64, length: u32, colour: Rgb<u8>) {
        self.fill_rect(x, y, 1, length, colour);
    }

    /// Draws `text` with its top-left corner at `(x, y)`.
    pub(crate) fn text(&mut self, x: i64, y: i64, text: &str, scale: u32, colour: Rgb<u8>) {
        let step = (GLYPH_SIZE * scale) as i64;
        for (i, c) in text.chars().enumerate() {
            let origin = x + i as i64 * step;
            for (row, bits) in glyph(c).into_iter().enumerate() {
                for col in 0..GLYPH_SIZE {
                    // bit 0 is the leftmost pixel
                    if (bits >> col) & 1 == 0 {
                        continue;
                    }
                    self.fill_rect(
                        origin + (col * scale) as i64,
                        y + (row as u32 * scale) as i64,
                        scale,
                        scale,
                        colour,
                    );
                }
            }
        }
    }

    /// Draws `text` horizontally centred on `centre_x`.
    pub(crate) fn text_centred(
        &mut self,
        centre_x: i64,
        y: i64,
        text: &str,
        scale: u32,
        colour: Rgb<u8>,
    ) {
        let x = centre_x - text_width(text, scale) as i64 / 2;
        self.text(x, y, text, scale, colour);
    }

    /// Draws `text` rotated 90 degrees anticlockwise, reading bottom to top, with the bottom-left
    /// of the first glyph at `(x, y)`.
    pub(crate) fn text_vertical(&mut self, x: i64, y: i64, text: &str, scale: u32, colour: Rgb<u8>) {
        let step = (GLYPH_SIZE * scale) as i64;
        for (i, c) in text.chars().enumerate() {
            let origin_y = y - i as i64 * step;
            for (row, bits) in glyph(c).into_iter().enumerate() {
                for col in 0..GLYPH_SIZE {
                    if (bits >> col) & 1 == 0 {
                        continue;
                    }
                    self.fill_rect(
                        x + (row as u32 * scale) as i64,
                        origin_y - ((col + 1) * scale) as i64,
                        scale,
                        scale,
                        colour,
                    );
                }
            }
        }
    }

    /// Fills the part of the disc at `(cx, cy)` with radius `radius` between two angles.
    ///
    /// Angles are in degrees, measured anticlockwise from the positive x axis; the sweep runs
    /// anticlockwise from `start` for `sweep` degrees.
    pub(crate) fn fill_wedge(
        &mut self,
        cx: i64,
        cy: i64,
        radius: u32,
        start: f64,
        sweep: f64,
        colour: Rgb<u8>,
    ) {
        let r = radius as i64;
        let r_sq = (r * r) as f64;
        for y in (cy - r)..=(cy + r) {
            for x in (cx - r)..=(cx + r) {
                let dx = (x - cx) as f64;
                let dy = (cy - y) as f64;
                if dx * dx + dy * dy > r_sq {
                    continue;
                }
                let angle = dy.atan2(dx).to_degrees();
                let offset = (angle - start).rem_euclid(360.0);
                if offset < sweep {
                    self.put(x, y, colour);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_clips_out_of_bounds() {
        let mut canvas = Canvas::new(4, 4, WHITE);
        canvas.put(-1, 0, BLACK);
        canvas.put(0, 4, BLACK);
        canvas.put(3, 3, BLACK);

        let image = canvas.into_image();
        assert_eq!(*image.get_pixel(3, 3), BLACK);
        assert_eq!(*image.get_pixel(0, 0), WHITE);
    }

    #[test]
    fn test_text_draws_pixels() {
        let mut canvas = Canvas::new(32, 16, WHITE);
        canvas.text(0, 0, "Hi", 1, BLACK);

        let image = canvas.into_image();
        assert!(image.pixels().any(|p| *p == BLACK));
    }

    #[test]
    fn test_text_width_and_fit() {
        assert_eq!(text_width("abc", 2), 48);
        assert_eq!(fit_text("abcdef", 1, 24), "abc");
        assert_eq!(fit_text("ab", 1, 100), "ab");
    }

    #[test]
    fn test_fill_wedge_covers_requested_quadrant() {
        let mut canvas = Canvas::new(21, 21, WHITE);
        canvas.fill_wedge(10, 10, 10, 0.0, 90.0, BLACK);

        let image = canvas.into_image();
        // upper right quadrant is filled, lower left is not
        assert_eq!(*image.get_pixel(15, 5), BLACK);
        assert_eq!(*image.get_pixel(5, 15), WHITE);
    }
}
