// MIT/Apache2 License

use crate::{Color, PixelBuffer, Surface};
use easel_geometry::Bounds;

/// A grid of colors used to fill shapes with an image instead of a solid color.
///
/// Textures are plain client-side pixel data. Shapes that carry one keep their own copy, and the copy is
/// never written out by the persistence layer; callers that want to keep textures around have to store them
/// separately.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Texture {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

/// The format that the bytes of a `Texture` can have.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ImageFormat {
    /// Grayscale format. Each element of the byte slice is a pixel representing how bright it is.
    Grayscale,
    /// Every three elements of the byte slice is an array of channels consisting of red, green and blue.
    Rgb,
    /// Every four elements of the byte slice is an array of channels consisting of red, green, blue and alpha.
    Rgba,
}

impl ImageFormat {
    /// Get the quantum (i.e. bytes per pixel) for this image.
    #[inline]
    pub fn quantum(self) -> usize {
        match self {
            ImageFormat::Grayscale => 1,
            ImageFormat::Rgb => 3,
            ImageFormat::Rgba => 4,
        }
    }

    /// Divide a given image into chunks representing pixels.
    #[inline]
    pub fn into_chunks(self, bytes: &[u8], width: u32, height: u32) -> impl Iterator<Item = &[u8]> {
        bytes
            .chunks(self.quantum())
            .take(width as usize * height as usize)
    }

    #[inline]
    fn decode(self, chunk: &[u8]) -> Color {
        match (self, chunk) {
            (ImageFormat::Grayscale, &[v]) => Color::rgb(v, v, v),
            (ImageFormat::Rgb, &[r, g, b]) => Color::rgb(r, g, b),
            (ImageFormat::Rgba, &[r, g, b, a]) => Color::rgba(r, g, b, a),
            _ => Color::TRANSPARENT,
        }
    }
}

impl Texture {
    /// Create a texture from raw image bytes.
    ///
    /// # Errors
    ///
    /// Returns `InvalidTexture` if `bytes` is not exactly `width * height * format.quantum()` bytes long, or if
    /// either dimension is zero.
    #[inline]
    pub fn from_bytes(bytes: &[u8], width: u32, height: u32, format: ImageFormat) -> crate::Result<Self> {
        let expected = width as usize * height as usize * format.quantum();
        if expected == 0 || bytes.len() != expected {
            return Err(crate::Error::InvalidTexture {
                expected,
                actual: bytes.len(),
            });
        }

        let pixels = format
            .into_chunks(bytes, width, height)
            .map(|chunk| format.decode(chunk))
            .collect();

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Copy the contents of a pixel buffer into a texture. Returns `None` for an empty buffer.
    #[inline]
    pub fn from_buffer(buffer: &PixelBuffer) -> Option<Self> {
        if buffer.width() == 0 || buffer.height() == 0 {
            return None;
        }

        Some(Self {
            width: buffer.width(),
            height: buffer.height(),
            pixels: buffer.pixels().to_vec(),
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The color at the given texel, wrapping around both axes.
    #[inline]
    pub fn texel(&self, tx: i64, ty: i64) -> Color {
        let tx = tx.rem_euclid(i64::from(self.width)) as usize;
        let ty = ty.rem_euclid(i64::from(self.height)) as usize;
        self.pixels
            .get(ty * self.width as usize + tx)
            .copied()
            .unwrap_or(Color::TRANSPARENT)
    }

    /// Sample the texture stretched over `bounds`.
    ///
    /// The texture covers the box once, scaled to its width and height. Points outside the box wrap around. A
    /// box with zero width or height is treated as one pixel across.
    #[inline]
    pub fn sample_stretched(&self, x: i32, y: i32, bounds: &Bounds) -> Color {
        let box_width = i64::from(bounds.max.x - bounds.min.x).max(1);
        let box_height = i64::from(bounds.max.y - bounds.min.y).max(1);

        let tx = i64::from(x - bounds.min.x) * i64::from(self.width) / box_width;
        let ty = i64::from(y - bounds.min.y) * i64::from(self.height) / box_height;
        self.texel(tx, ty)
    }

    /// Sample the texture tiled at its natural size, starting from `origin`.
    #[inline]
    pub fn sample_tiled(&self, x: i32, y: i32, origin: easel_geometry::Point) -> Color {
        self.texel(i64::from(x - origin.x), i64::from(y - origin.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use easel_geometry::Point;

    fn checker() -> Texture {
        // 2x2: black, white / white, black
        Texture::from_bytes(&[0, 255, 255, 0], 2, 2, ImageFormat::Grayscale).unwrap()
    }

    #[test]
    fn decodes_formats() {
        let rgb = Texture::from_bytes(&[1, 2, 3, 4, 5, 6], 2, 1, ImageFormat::Rgb).unwrap();
        assert_eq!(rgb.texel(0, 0), Color::rgb(1, 2, 3));
        assert_eq!(rgb.texel(1, 0), Color::rgb(4, 5, 6));

        let rgba = Texture::from_bytes(&[9, 8, 7, 6], 1, 1, ImageFormat::Rgba).unwrap();
        assert_eq!(rgba.texel(0, 0), Color::rgba(9, 8, 7, 6));
    }

    #[test]
    fn rejects_wrong_length() {
        match Texture::from_bytes(&[0; 5], 2, 1, ImageFormat::Rgb) {
            Err(crate::Error::InvalidTexture { expected, actual }) => {
                assert_eq!((expected, actual), (6, 5));
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(Texture::from_bytes(&[], 0, 0, ImageFormat::Rgba).is_err());
    }

    #[test]
    fn wraps_negative_coordinates() {
        let t = checker();
        assert_eq!(t.texel(-1, 0), Color::WHITE);
        assert_eq!(t.texel(-2, -2), Color::BLACK);
        assert_eq!(t.texel(3, 3), Color::BLACK);
    }

    #[test]
    fn stretched_sampling() {
        let t = checker();
        let bounds = Bounds::new(euclid::point2(10, 10), euclid::point2(20, 20));
        assert_eq!(t.sample_stretched(10, 10, &bounds), Color::BLACK);
        assert_eq!(t.sample_stretched(16, 10, &bounds), Color::WHITE);
        assert_eq!(t.sample_stretched(16, 16, &bounds), Color::BLACK);
        // left of the box wraps around
        assert_eq!(t.sample_stretched(5, 10, &bounds), Color::WHITE);

        let flat = Bounds::new(euclid::point2(0, 0), euclid::point2(0, 0));
        assert_eq!(t.sample_stretched(1, 0, &flat), Color::BLACK);
    }

    #[test]
    fn tiled_sampling() {
        let t = checker();
        let origin = Point::new(5, 5);
        assert_eq!(t.sample_tiled(5, 5, origin), Color::BLACK);
        assert_eq!(t.sample_tiled(6, 5, origin), Color::WHITE);
        assert_eq!(t.sample_tiled(7, 7, origin), Color::BLACK);
    }

    #[test]
    fn from_buffer_copies_pixels() {
        let mut buffer = PixelBuffer::new(3, 2);
        buffer.set_pixel(2, 1, Color::BLACK);
        let t = Texture::from_buffer(&buffer).unwrap();
        assert_eq!((t.width(), t.height()), (3, 2));
        assert_eq!(t.texel(2, 1), Color::BLACK);
        assert!(Texture::from_buffer(&PixelBuffer::new(0, 4)).is_none());
    }
}
