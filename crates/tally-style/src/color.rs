//! Color primitives for topic styling.

use serde::{Deserialize, Serialize};

/// An opaque, round-trippable RGB color value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    /// Red channel (0–255).
    pub r: u8,
    /// Green channel (0–255).
    pub g: u8,
    /// Blue channel (0–255).
    pub b: u8,
}

impl Color {
    /// Create a color from RGB channels.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Compute perceived luminance (BT.709) as a `u8` (0 = black, 255 = white).
    #[must_use]
    pub fn luminance_u8(self) -> u8 {
        // ITU-R BT.709 luma: 0.2126 R + 0.7152 G + 0.0722 B
        let r = self.r as u32;
        let g = self.g as u32;
        let b = self.b as u32;
        let luma = 2126 * r + 7152 * g + 722 * b;
        ((luma + 5000) / 10_000) as u8
    }

    /// Pick black or white text for maximum contrast against this color.
    #[must_use]
    pub fn contrast_text(self) -> Self {
        if self.luminance_u8() < 128 {
            palette::WHITE
        } else {
            palette::BLACK
        }
    }
}

/// A topic's face color plus its pressed/active variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorPair {
    /// Resting button face color.
    pub base: Color,
    /// Color while the topic's input drawer is open.
    pub active: Color,
}

impl ColorPair {
    /// Create a pair from distinct base and active colors.
    #[must_use]
    pub const fn new(base: Color, active: Color) -> Self {
        Self { base, active }
    }

    /// Use the same color for both slots.
    #[must_use]
    pub const fn uniform(color: Color) -> Self {
        Self {
            base: color,
            active: color,
        }
    }
}

/// Named colors used by the built-in presets.
pub mod palette {
    use super::Color;

    /// Plain black.
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    /// Plain white.
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    /// Face green for positive observations.
    pub const GREEN: Color = Color::rgb(63, 185, 80);
    /// Darker green for the pressed state.
    pub const GREEN_DEEP: Color = Color::rgb(26, 127, 55);
    /// Face yellow for neutral observations.
    pub const YELLOW: Color = Color::rgb(210, 153, 34);
    /// Darker yellow for the pressed state.
    pub const YELLOW_DEEP: Color = Color::rgb(158, 106, 3);
    /// Face red for change-needed observations.
    pub const RED: Color = Color::rgb(248, 81, 73);
    /// Darker red for the pressed state.
    pub const RED_DEEP: Color = Color::rgb(207, 34, 46);
    /// Neutral gray for the fallback topic.
    pub const GRAY: Color = Color::rgb(139, 148, 158);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn luminance_endpoints() {
        assert_eq!(palette::BLACK.luminance_u8(), 0);
        assert_eq!(palette::WHITE.luminance_u8(), 255);
    }

    #[test]
    fn contrast_text_on_dark_is_white() {
        assert_eq!(Color::rgb(20, 20, 20).contrast_text(), palette::WHITE);
    }

    #[test]
    fn contrast_text_on_light_is_black() {
        assert_eq!(Color::rgb(240, 240, 200).contrast_text(), palette::BLACK);
    }

    #[test]
    fn uniform_pair_repeats_color() {
        let pair = ColorPair::uniform(palette::GREEN);
        assert_eq!(pair.base, pair.active);
    }

    #[test]
    fn color_round_trips_through_json() {
        let color = Color::rgb(12, 200, 77);
        let json = serde_json::to_string(&color).unwrap();
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, color);
    }

    #[test]
    fn pair_round_trips_through_json() {
        let pair = ColorPair::new(palette::GREEN, palette::GREEN_DEEP);
        let json = serde_json::to_string(&pair).unwrap();
        let back: ColorPair = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pair);
    }
}
