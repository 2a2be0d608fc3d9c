//! RGB15 color reduction and packing
//!
//! The renderer's `COLOR` type packs three 5-bit channels into a `u16`:
//! red in the low bits, then green, then blue.

/// A color with 5 bits of range per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb15 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb15 {
    /// Full intensity; the default for faces with no material.
    pub const WHITE: Rgb15 = Rgb15::new(31, 31, 31);

    /// The initial color of a freshly declared material.
    pub const BLACK: Rgb15 = Rgb15::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Reduce unit-range channels (the `Kd` convention) to 5 bits each.
    ///
    /// Truncates toward zero and does not clamp to the 5-bit range, so a
    /// channel outside [0, 1] produces an out-of-range value rather than
    /// an error.
    #[inline]
    pub fn from_unit(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: (r * 31.0) as u8,
            g: (g * 31.0) as u8,
            b: (b * 31.0) as u8,
        }
    }

    /// Pack into the renderer's `COLOR` layout: `r + (g << 5) + (b << 10)`.
    #[inline]
    pub const fn pack(self) -> u16 {
        self.r as u16 + ((self.g as u16) << 5) + ((self.b as u16) << 10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_unit() {
        assert_eq!(Rgb15::from_unit(1.0, 0.5, 0.0), Rgb15::new(31, 15, 0));
        assert_eq!(Rgb15::from_unit(0.0, 0.0, 0.0), Rgb15::BLACK);
    }

    #[test]
    fn test_from_unit_is_unclamped() {
        // 1.5 * 31 = 46.5, truncated but not clamped to 5 bits
        assert_eq!(Rgb15::from_unit(1.5, 1.0, 1.0).r, 46);
    }

    #[test]
    fn test_pack() {
        assert_eq!(Rgb15::WHITE.pack(), 32767);
        assert_eq!(Rgb15::BLACK.pack(), 0);
        assert_eq!(Rgb15::new(1, 2, 3).pack(), 1 + (2 << 5) + (3 << 10));
        assert_eq!(Rgb15::new(31, 0, 0).pack(), 31);
        assert_eq!(Rgb15::new(0, 0, 31).pack(), 31 << 10);
    }
}
