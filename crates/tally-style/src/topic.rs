//! A single observation category and its style-editing messages.

use serde::{Deserialize, Serialize};

use crate::color::{Color, ColorPair, palette};

/// A named, styled observation category within a [`Theme`](crate::Theme).
///
/// `id` is unique within the owning theme. `weight` is the point value applied
/// when a record tallied against this topic is scored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    /// Theme-unique identifier.
    pub id: String,
    /// Short display glyph shown on the tally button.
    pub symbol: String,
    /// Human-readable category name.
    pub label: String,
    /// Button face color and its pressed variant.
    pub color: ColorPair,
    /// Point value applied per tallied record.
    pub weight: i32,
    /// Text color drawn over the face color.
    #[serde(rename = "textColor")]
    pub text_color: Color,
}

impl Topic {
    /// Create a topic with a contrast-picked text color.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        symbol: impl Into<String>,
        label: impl Into<String>,
        color: ColorPair,
        weight: i32,
    ) -> Self {
        let text_color = color.base.contrast_text();
        Self {
            id: id.into(),
            symbol: symbol.into(),
            label: label.into(),
            color,
            weight,
            text_color,
        }
    }

    /// Sentinel returned by theme lookups for ids that no longer exist.
    ///
    /// Lookups never fail; a stale id renders as this neutral topic instead
    /// of crashing the caller.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            id: "default".to_owned(),
            symbol: "•".to_owned(),
            label: "Observation".to_owned(),
            color: ColorPair::uniform(palette::GRAY),
            weight: 0,
            text_color: palette::BLACK,
        }
    }

    /// Apply a style edit, returning the edited topic.
    #[must_use]
    pub fn update(mut self, msg: StyleMsg) -> Self {
        match msg {
            StyleMsg::SetSymbol(symbol) => self.symbol = symbol,
            StyleMsg::SetLabel(label) => self.label = label,
            StyleMsg::SetColor(color) => self.color = color,
            StyleMsg::SetTextColor(color) => self.text_color = color,
            StyleMsg::SetWeight(weight) => self.weight = weight,
        }
        self
    }
}

/// Style edits routed to one topic by [`ThemeMsg::UpdateStyle`](crate::ThemeMsg).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleMsg {
    /// Replace the display glyph.
    SetSymbol(String),
    /// Replace the category name.
    SetLabel(String),
    /// Replace the face color pair.
    SetColor(ColorPair),
    /// Replace the text color.
    SetTextColor(Color),
    /// Replace the point weight.
    SetWeight(i32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_picks_contrasting_text() {
        let dark = Topic::new("t", "+", "T", ColorPair::uniform(Color::rgb(10, 10, 10)), 1);
        assert_eq!(dark.text_color, palette::WHITE);
        let light = Topic::new("t", "+", "T", ColorPair::uniform(palette::WHITE), 1);
        assert_eq!(light.text_color, palette::BLACK);
    }

    #[test]
    fn fallback_has_default_id_and_zero_weight() {
        let topic = Topic::fallback();
        assert_eq!(topic.id, "default");
        assert_eq!(topic.weight, 0);
    }

    #[test]
    fn style_edits_apply_one_field() {
        let topic = Topic::new("t", "+", "T", ColorPair::uniform(palette::GREEN), 1);
        let edited = topic
            .clone()
            .update(StyleMsg::SetSymbol("?".to_owned()))
            .update(StyleMsg::SetWeight(-2));
        assert_eq!(edited.symbol, "?");
        assert_eq!(edited.weight, -2);
        assert_eq!(edited.label, topic.label);
        assert_eq!(edited.color, topic.color);
    }

    #[test]
    fn serializes_text_color_in_camel_case() {
        let topic = Topic::new("t", "+", "T", ColorPair::uniform(palette::GREEN), 1);
        let json = serde_json::to_value(&topic).unwrap();
        assert!(json.get("textColor").is_some());
        assert!(json.get("text_color").is_none());
    }

    #[test]
    fn decode_missing_text_color_fails() {
        let json = r#"{"id":"t","symbol":"+","label":"T",
            "color":{"base":{"r":0,"g":0,"b":0},"active":{"r":0,"g":0,"b":0}},
            "weight":1}"#;
        assert!(serde_json::from_str::<Topic>(json).is_err());
    }
}
