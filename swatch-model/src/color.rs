//! HSL color type and conversions
//!
//! Colors are stored as HSL with saturation and lightness in percent. The wire
//! format is always a 6-digit sRGB hex string, so every conversion through
//! hex is quantized to 8 bits per channel.

use std::fmt;
use std::str::FromStr;

use palette::{FromColor, Hsl, Srgb};

use crate::error::{ColorParseError, Result};
use crate::hue::normalize_hue;

/// A color in HSL color space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HslColor {
    hue: f32,
    saturation: f32,
    lightness: f32,
}

impl HslColor {
    /// Create a new HSL color, wrapping hue and clamping the percentages
    pub fn new(hue: f32, saturation: f32, lightness: f32) -> Self {
        Self {
            hue: normalize_hue(hue),
            saturation: clamp_percent(saturation),
            lightness: clamp_percent(lightness),
        }
    }

    /// Hue in degrees (0-360)
    pub fn hue(&self) -> f32 {
        self.hue
    }

    /// Saturation as percentage (0-100)
    pub fn saturation(&self) -> f32 {
        self.saturation
    }

    /// Lightness as percentage (0-100)
    pub fn lightness(&self) -> f32 {
        self.lightness
    }

    /// Parse a `#rgb` or `#rrggbb` hex string (the `#` is optional)
    pub fn from_hex(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ColorParseError::Empty);
        }

        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if !matches!(digits.len(), 3 | 6)
            || !digits.chars().all(|c| c.is_ascii_hexdigit())
        {
            return Err(ColorParseError::InvalidHex(raw.to_string()));
        }

        let rgb = Srgb::<u8>::from_str(digits)
            .map_err(|_| ColorParseError::InvalidHex(raw.to_string()))?;
        Ok(Self::from_srgb(rgb))
    }

    /// Create from an 8-bit sRGB triple
    pub fn from_srgb(rgb: Srgb<u8>) -> Self {
        let hsl = Hsl::from_color(rgb.into_format::<f32>());
        Self::new(
            hsl.hue.into_positive_degrees(),
            hsl.saturation * 100.0,
            hsl.lightness * 100.0,
        )
    }

    /// Convert to an 8-bit sRGB triple
    pub fn to_srgb(&self) -> Srgb<u8> {
        let hsl = Hsl::new(
            self.hue,
            self.saturation / 100.0,
            self.lightness / 100.0,
        );
        Srgb::from_color(hsl).into_format::<u8>()
    }

    /// Lowercase `#rrggbb` representation
    pub fn to_hex(&self) -> String {
        let rgb = self.to_srgb();
        format!("#{:02x}{:02x}{:02x}", rgb.red, rgb.green, rgb.blue)
    }

    /// Two colors are the same swatch color when their hex forms match
    pub fn same_hex(&self, other: &Self) -> bool {
        self.to_srgb() == other.to_srgb()
    }

    /// Create a new color with adjusted hue
    pub fn with_hue(&self, hue: f32) -> Self {
        Self::new(hue, self.saturation, self.lightness)
    }

    /// Create a new color with adjusted saturation
    pub fn with_saturation(&self, saturation: f32) -> Self {
        Self::new(self.hue, saturation, self.lightness)
    }

    /// Create a new color with adjusted lightness
    pub fn with_lightness(&self, lightness: f32) -> Self {
        Self::new(self.hue, self.saturation, lightness)
    }

    /// Rotate hue by given degrees
    pub fn rotate_hue(&self, degrees: f32) -> Self {
        Self::new(self.hue + degrees, self.saturation, self.lightness)
    }
}

impl Default for HslColor {
    fn default() -> Self {
        Self::new(0.0, 100.0, 50.0)
    }
}

impl fmt::Display for HslColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for HslColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

fn clamp_percent(value: f32) -> f32 {
    if value.is_finite() {
        value.clamp(0.0, 100.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_roundtrip() {
        for hex in ["#3366cc", "#bdc3c7", "#000000", "#ffffff", "#ff0080"] {
            let color = HslColor::from_hex(hex).unwrap();
            assert_eq!(color.to_hex(), hex);
        }
    }

    #[test]
    fn test_hex_parsing_is_lenient_about_case_and_prefix() {
        let upper = HslColor::from_hex("#3366CC").unwrap();
        let bare = HslColor::from_hex("3366cc").unwrap();
        let short = HslColor::from_hex(" #36c ").unwrap();
        assert_eq!(upper.to_hex(), "#3366cc");
        assert!(upper.same_hex(&bare));
        assert!(upper.same_hex(&short));
    }

    #[test]
    fn test_invalid_hex_is_rejected() {
        assert_eq!(HslColor::from_hex("   "), Err(ColorParseError::Empty));
        assert!(matches!(
            HslColor::from_hex("#12345"),
            Err(ColorParseError::InvalidHex(_))
        ));
        assert!(matches!(
            HslColor::from_hex("#gggggg"),
            Err(ColorParseError::InvalidHex(_))
        ));
        assert!(matches!(
            HslColor::from_hex("rgb(1, 2, 3)"),
            Err(ColorParseError::InvalidHex(_))
        ));
    }

    #[test]
    fn test_hue_of_known_colors() {
        let blue = HslColor::from_hex("#3366cc").unwrap();
        assert!((blue.hue() - 220.0).abs() < 0.01);
        assert!((blue.saturation() - 60.0).abs() < 0.1);
        assert!((blue.lightness() - 50.0).abs() < 0.1);

        let gray = HslColor::from_hex("#808080").unwrap();
        assert_eq!(gray.hue(), 0.0);
        assert_eq!(gray.saturation(), 0.0);
    }

    #[test]
    fn test_hue_wrapping() {
        let color = HslColor::new(400.0, 50.0, 50.0);
        assert!((color.hue() - 40.0).abs() < 0.001);

        let color = HslColor::new(-30.0, 50.0, 50.0);
        assert!((color.hue() - 330.0).abs() < 0.001);
    }

    #[test]
    fn test_rotate_hue() {
        let color = HslColor::new(350.0, 100.0, 50.0);
        let rotated = color.rotate_hue(20.0);
        assert!((rotated.hue() - 10.0).abs() < 0.001);
        assert_eq!(rotated.saturation(), 100.0);
        assert_eq!(rotated.lightness(), 50.0);
    }

    #[test]
    fn test_percentages_are_clamped() {
        let color = HslColor::new(10.0, 140.0, -5.0);
        assert_eq!(color.saturation(), 100.0);
        assert_eq!(color.lightness(), 0.0);
    }
}
