use crate::color::Rgb;
use crate::error::Error;
use crate::pixel_rect::PixelRect;
use std::path::Path;

/// Row-major grid of RGB pixels.
///
/// Backed by a single contiguous allocation indexed as `y * width + x`,
/// sized once at construction and never resized. Coordinates are the
/// caller's responsibility; out-of-range access trips a debug assertion
/// and is not checked in release builds beyond the slice bound itself.
#[derive(Clone, Debug, PartialEq)]
pub struct Raster {
    pixels: Vec<Rgb>,
    width: u32,
    height: u32,
}

impl Raster {
    /// Allocate a raster of the given dimensions, filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        debug_assert!(width > 0 && height > 0, "raster dimensions must be positive");
        Self {
            pixels: vec![Rgb::BLACK; width as usize * height as usize],
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.width && y < self.height);
        y as usize * self.width as usize + x as usize
    }

    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Rgb {
        self.pixels[self.index(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: u32, y: u32, color: Rgb) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    /// Copy a completed block into place. `pixels` holds the block's rows
    /// top to bottom, `rect.width` pixels each.
    pub fn blit(&mut self, rect: &PixelRect, pixels: &[Rgb]) {
        debug_assert_eq!(pixels.len(), rect.area() as usize);
        for row in 0..rect.height {
            let src_start = (row * rect.width) as usize;
            for col in 0..rect.width {
                self.set(rect.x + col, rect.y + row, pixels[src_start + col as usize]);
            }
        }
    }

    /// The grid as packed RGB8 bytes, top row first.
    pub fn to_rgb8_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for pixel in &self.pixels {
            bytes.extend_from_slice(&[pixel.red, pixel.green, pixel.blue]);
        }
        bytes
    }

    /// Encode the grid as an 8-bit-per-channel RGB PNG at `path`.
    ///
    /// The encoder owns header and trailer framing; this hands it the raw
    /// rows and dimensions. Fails if the path cannot be written. The write
    /// is not atomic, so a failure may leave a truncated file behind.
    pub fn write_png(&self, path: &Path) -> Result<(), Error> {
        image::save_buffer_with_format(
            path,
            &self.to_rgb8_bytes(),
            self.width,
            self.height,
            image::ColorType::Rgb8,
            image::ImageFormat::Png,
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_raster_is_black() {
        let raster = Raster::new(4, 3);
        assert_eq!(raster.width(), 4);
        assert_eq!(raster.height(), 3);
        assert_eq!(raster.pixel_count(), 12);
        assert_eq!(raster.get(3, 2), Rgb::BLACK);
    }

    #[test]
    fn set_then_get_roundtrips() {
        let mut raster = Raster::new(8, 8);
        raster.set(5, 2, Rgb::new(1, 2, 3));
        assert_eq!(raster.get(5, 2), Rgb::new(1, 2, 3));
        assert_eq!(raster.get(2, 5), Rgb::BLACK);
    }

    #[test]
    fn bytes_are_row_major_top_first() {
        let mut raster = Raster::new(3, 2);
        raster.set(1, 0, Rgb::new(255, 0, 0));
        raster.set(0, 1, Rgb::new(0, 255, 0));

        let bytes = raster.to_rgb8_bytes();
        assert_eq!(bytes.len(), 3 * 2 * 3);
        // Second pixel of the top row.
        assert_eq!(&bytes[3..6], &[255, 0, 0]);
        // First pixel of the second row.
        assert_eq!(&bytes[9..12], &[0, 255, 0]);
    }

    #[test]
    fn blit_writes_block_in_place() {
        let mut raster = Raster::new(4, 2);
        let block = PixelRect::new(1, 0, 2, 2);
        let pixels = vec![
            Rgb::new(10, 0, 0),
            Rgb::new(20, 0, 0),
            Rgb::new(30, 0, 0),
            Rgb::new(40, 0, 0),
        ];

        raster.blit(&block, &pixels);

        assert_eq!(raster.get(1, 0), Rgb::new(10, 0, 0));
        assert_eq!(raster.get(2, 0), Rgb::new(20, 0, 0));
        assert_eq!(raster.get(1, 1), Rgb::new(30, 0, 0));
        assert_eq!(raster.get(2, 1), Rgb::new(40, 0, 0));
        // Columns outside the block are untouched.
        assert_eq!(raster.get(0, 0), Rgb::BLACK);
        assert_eq!(raster.get(3, 1), Rgb::BLACK);
    }

    #[test]
    fn write_png_roundtrips_through_decoder() {
        let mut raster = Raster::new(5, 4);
        raster.set(4, 3, Rgb::new(9, 8, 7));

        let path = std::env::temp_dir().join(format!(
            "fractalforge-raster-test-{}.png",
            std::process::id()
        ));
        raster.write_png(&path).unwrap();

        let decoded = image::open(&path).unwrap().into_rgb8();
        assert_eq!(decoded.dimensions(), (5, 4));
        assert_eq!(decoded.get_pixel(4, 3).0, [9, 8, 7]);
        assert_eq!(decoded.get_pixel(0, 0).0, [0, 0, 0]);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn write_png_fails_on_unwritable_path() {
        let raster = Raster::new(2, 2);
        let path = Path::new("/nonexistent-directory/out.png");
        assert!(raster.write_png(path).is_err());
    }
}
