// MIT/Apache2 License

use crate::intensity::Intensity;

/// A four-element color with 8-bit channels.
///
/// Equality is exact channel comparison, which is what flood filling relies on when it looks for boundary
/// pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgba(255, 255, 255, 255);
    pub const BLACK: Color = Color::rgba(0, 0, 0, 255);
    /// The "no paint" marker. Surfaces start out filled with it unless told otherwise.
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    /// Create a new color.
    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new, fully opaque color.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Gets the red element.
    #[inline]
    pub fn red(self) -> u8 {
        self.r
    }

    /// Gets the green element.
    #[inline]
    pub fn green(self) -> u8 {
        self.g
    }

    /// Gets the blue element.
    #[inline]
    pub fn blue(self) -> u8 {
        self.b
    }

    /// Gets the alpha element.
    #[inline]
    pub fn alpha(self) -> u8 {
        self.a
    }

    /// The same color, with a different alpha.
    #[inline]
    pub fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// The alpha element as a fraction.
    #[inline]
    pub fn opacity(self) -> Intensity {
        Intensity::clamped(f32::from(self.a) / 255.0)
    }

    /// Is this color fully transparent?
    #[inline]
    pub fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// The channels, in RGBA order.
    #[inline]
    pub fn into_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Composite `self` over `background` using "over" compositing, with `self`'s opacity scaled by
    /// `coverage`.
    ///
    /// Returns `None` if the effective alpha truncates to zero, in which case nothing should be written.
    #[inline]
    pub fn over(self, background: Color, coverage: Intensity) -> Option<Color> {
        let alpha = Intensity::clamped(f32::from(self.a) / 255.0)
            .scale(coverage)
            .clamp_to_u8();

        match alpha {
            0 => None,
            255 => Some(self.with_alpha(255)),
            alpha => {
                let af = f32::from(alpha) / 255.0;
                let bf = f32::from(background.a) / 255.0 * (1.0 - af);
                let out = af + bf;

                let to_u8 = |value: f32| value.round().max(0.0).min(255.0) as u8;
                let channel = |fg: u8, bg: u8| to_u8((f32::from(fg) * af + f32::from(bg) * bf) / out);

                Some(Color {
                    r: channel(self.r, background.r),
                    g: channel(self.g, background.g),
                    b: channel(self.b, background.b),
                    a: to_u8(out * 255.0),
                })
            }
        }
    }
}

impl From<[u8; 4]> for Color {
    #[inline]
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::rgba(r, g, b, a)
    }
}

impl From<(u8, u8, u8)> for Color {
    #[inline]
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::rgb(r, g, b)
    }
}
