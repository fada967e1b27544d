// SPDX-License-Identifier: MPL-2.0
//! Design tokens: base colors the semantic [`ColorScheme`](super::ColorScheme)
//! is built from.

use std::fmt;

/// An opaque sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    #[must_use]
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Builds a color from a `0xRRGGBB` literal.
    #[must_use]
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }

    /// Relative luminance (WCAG 2.x), in `0.0..=1.0`.
    #[must_use]
    pub fn luminance(self) -> f32 {
        fn channel(c: u8) -> f32 {
            let c = f32::from(c) / 255.0;
            if c <= 0.039_28 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        0.2126 * channel(self.r) + 0.7152 * channel(self.g) + 0.0722 * channel(self.b)
    }

    /// WCAG contrast ratio against `other`, in `1.0..=21.0`.
    #[must_use]
    pub fn contrast_ratio(self, other: Color) -> f32 {
        let (a, b) = (self.luminance(), other.luminance());
        let (light, dark) = if a > b { (a, b) } else { (b, a) };
        (light + 0.05) / (dark + 0.05)
    }
}

impl fmt::Display for Color {
    /// Formats as `#RRGGBB`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::from_hex(0x000000);
    pub const WHITE: Color = Color::from_hex(0xFFFFFF);
    pub const GRAY_900: Color = Color::from_hex(0x111827);
    pub const GRAY_500: Color = Color::from_hex(0x6B7280);
    pub const GRAY_200: Color = Color::from_hex(0xE5E7EB);
    pub const GRAY_50: Color = Color::from_hex(0xF9FAFB);

    // Brand colors (orange scale)
    pub const PRIMARY_500: Color = Color::from_hex(0xFE9200);
    pub const PRIMARY_700: Color = Color::from_hex(0xC2410C);

    // Accent (navy)
    pub const SECONDARY_700: Color = Color::from_hex(0x1E3A5F);

    // Semantic colors
    pub const SUCCESS_500: Color = Color::from_hex(0x16A34A);
    pub const WARNING_500: Color = Color::from_hex(0xD97706);
    pub const ERROR_500: Color = Color::from_hex(0xDC2626);
    pub const INFO_500: Color = Color::from_hex(0x2563EB);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_literal_splits_channels() {
        assert_eq!(Color::from_hex(0x1E3A5F), Color::from_rgb8(0x1E, 0x3A, 0x5F));
    }

    #[test]
    fn display_is_uppercase_hex() {
        assert_eq!(palette::PRIMARY_500.to_string(), "#FE9200");
        assert_eq!(palette::BLACK.to_string(), "#000000");
    }

    #[test]
    fn black_on_white_has_maximum_contrast() {
        let ratio = palette::BLACK.contrast_ratio(palette::WHITE);
        assert!((ratio - 21.0).abs() < 0.01);
        assert!((palette::WHITE.contrast_ratio(palette::WHITE) - 1.0).abs() < f32::EPSILON);
    }
}
