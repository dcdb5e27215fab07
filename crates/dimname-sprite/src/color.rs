//! Pixel colors for name sprites.
//!
//! Sprites are strictly two-tone: white ink on a green key background.
//! Every ink test in this crate is an exact comparison against [`Rgb8::INK`];
//! there is no tolerance and no antialiasing.

/// 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    /// Foreground ink (white).
    pub const INK: Rgb8 = Rgb8::new(255, 255, 255);

    /// Background key color (pure green).
    pub const BACKGROUND: Rgb8 = Rgb8::new(0, 255, 0);

    /// Create a new color.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a gray level.
    pub const fn gray(value: u8) -> Self {
        Self::new(value, value, value)
    }

    /// True if this pixel is foreground ink.
    #[inline]
    pub fn is_ink(self) -> bool {
        self == Self::INK
    }

    /// Convert to RGB bytes.
    pub fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Create from the first three bytes of a pixel, ignoring any alpha.
    pub fn from_slice(px: &[u8]) -> Self {
        Self::new(px[0], px[1], px[2])
    }
}

impl Default for Rgb8 {
    fn default() -> Self {
        Self::BACKGROUND
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ink_is_exact_white() {
        assert!(Rgb8::INK.is_ink());
        assert!(Rgb8::gray(255).is_ink());
        assert!(!Rgb8::gray(254).is_ink());
        assert!(!Rgb8::new(255, 255, 254).is_ink());
        assert!(!Rgb8::BACKGROUND.is_ink());
    }

    #[test]
    fn test_ink_and_background_distinct() {
        assert_ne!(Rgb8::INK, Rgb8::BACKGROUND);
    }

    #[test]
    fn test_from_slice_drops_alpha() {
        let px = [0u8, 255, 0, 12];
        assert_eq!(Rgb8::from_slice(&px), Rgb8::BACKGROUND);
        assert_eq!(Rgb8::BACKGROUND.to_bytes(), [0, 255, 0]);
    }
}
