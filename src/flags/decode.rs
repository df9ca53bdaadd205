//! Raster decoding and resampling for flag images.

use image::imageops::FilterType;

use super::FlagError;

/// Width every flag is resampled to, in pixels.
pub const FLAG_WIDTH: u32 = 150;
/// Height every flag is resampled to, in pixels.
pub const FLAG_HEIGHT: u32 = 100;

/// Decoded flag pixels, RGBA8, row-major.
#[derive(Clone, PartialEq)]
pub struct FlagBitmap {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl std::fmt::Debug for FlagBitmap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlagBitmap")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.rgba.len())
            .finish()
    }
}

/// Decode an encoded raster image and stretch it to exactly 150×100.
///
/// The aspect ratio of the source is not preserved.
pub fn decode(bytes: &[u8]) -> Result<FlagBitmap, FlagError> {
    let source = image::load_from_memory(bytes)?;
    let resized = source
        .resize_exact(FLAG_WIDTH, FLAG_HEIGHT, FilterType::Lanczos3)
        .to_rgba8();

    Ok(FlagBitmap {
        width: resized.width(),
        height: resized.height(),
        rgba: resized.into_raw(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
    use std::io::Cursor;

    fn png(width: u32, height: u32) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, Rgba([188, 0, 45, 255]));
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Png).unwrap();
        out.into_inner()
    }

    #[test]
    fn any_source_size_becomes_150_by_100() {
        for (w, h) in [(1, 1), (320, 213), (100, 400), (2000, 50), (150, 100)] {
            let bitmap = decode(&png(w, h)).unwrap();
            assert_eq!((bitmap.width, bitmap.height), (FLAG_WIDTH, FLAG_HEIGHT), "source {w}x{h}");
            assert_eq!(bitmap.rgba.len(), (FLAG_WIDTH * FLAG_HEIGHT * 4) as usize);
        }
    }

    #[test]
    fn solid_colour_survives_resampling() {
        let bitmap = decode(&png(32, 16)).unwrap();
        let centre = ((50 * FLAG_WIDTH + 75) * 4) as usize;
        let pixel = &bitmap.rgba[centre..centre + 4];
        for (got, want) in pixel.iter().zip([188u8, 0, 45, 255]) {
            assert!(got.abs_diff(want) <= 1, "pixel {pixel:?}");
        }
    }

    #[test]
    fn decodes_other_raster_formats() {
        let img = RgbImage::from_pixel(60, 40, Rgb([255, 255, 255]));
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Jpeg).unwrap();

        let bitmap = decode(&out.into_inner()).unwrap();
        assert_eq!((bitmap.width, bitmap.height), (150, 100));
    }

    #[test]
    fn garbage_bytes_fail() {
        assert!(matches!(decode(b"<html>404</html>"), Err(FlagError::Decode(_))));
        assert!(decode(&[]).is_err());
    }
}
