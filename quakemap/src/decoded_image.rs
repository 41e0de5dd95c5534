//! Images that are loaded and decoded into memory to be drawn on the map.

use crate::error::QuakeMapError;

/// An image that has been loaded into memory.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    bytes: Vec<u8>,
    dimensions: (u32, u32),
}

impl DecodedImage {
    /// Decode an image from a byte slice.
    ///
    /// Attempts to guess the format of the image from the data. Non-RGBA images
    /// will be converted to RGBA.
    pub fn new(bytes: &[u8]) -> Result<Self, QuakeMapError> {
        let decoded = image::load_from_memory(bytes)?.to_rgba8();
        let dimensions = decoded.dimensions();

        Ok(Self {
            bytes: decoded.into_raw(),
            dimensions,
        })
    }

    /// Raw pixels in RGBA order, row by row.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Width and height of the image.
    pub fn dimensions(&self) -> (u32, u32) {
        self.dimensions
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use assert_matches::assert_matches;
    use image::{ImageFormat, Rgb, RgbImage};

    use super::*;

    #[test]
    fn decodes_png_into_rgba() {
        let source = RgbImage::from_pixel(3, 2, Rgb([10, 20, 30]));
        let mut encoded = Cursor::new(Vec::new());
        source
            .write_to(&mut encoded, ImageFormat::Png)
            .expect("failed to encode test image");

        let decoded = DecodedImage::new(encoded.get_ref()).expect("failed to decode");
        assert_eq!(decoded.dimensions(), (3, 2));
        assert_eq!(decoded.bytes().len(), 3 * 2 * 4);
        assert_eq!(&decoded.bytes()[..4], &[10, 20, 30, 255]);
    }

    #[test]
    fn garbage_is_an_error() {
        assert_matches!(
            DecodedImage::new(b"not an image"),
            Err(QuakeMapError::ImageDecode(_))
        );
    }
}
