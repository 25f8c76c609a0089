#![forbid(unsafe_code)]

//! Observation category styling for tallyboard.
//!
//! A [`Theme`] is the ordered, non-empty set of [`Topic`]s a teacher can tally
//! against. Each topic carries a display symbol, a label, a face/active color
//! pair, a text color, and a numeric weight. The theme is an immutable value:
//! [`Theme::update`] consumes a theme plus a [`ThemeMsg`] and returns a fresh
//! theme, never mutating in place and never failing.

pub mod color;
pub mod theme;
pub mod topic;

pub use color::{Color, ColorPair};
pub use theme::{Theme, ThemeMsg, presets};
pub use topic::{StyleMsg, Topic};
