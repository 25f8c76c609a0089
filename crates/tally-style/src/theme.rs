//! Theme state machine: an ordered, non-empty set of topics.
//!
//! The theme owns its own id counter for freshly created topics. The counter
//! is an explicit field threaded through every update — each theme value
//! carries its own, there is no process-wide state.
//!
//! # Design Invariants
//!
//! 1. **Non-empty**: `topics` always holds at least one topic. A removal
//!    that would leave no survivors is a no-op — including the duplicate-id
//!    case where one `Remove` matches every topic.
//! 2. **Total updates**: [`Theme::update`] and [`Theme::lookup`] never fail.
//!    A stale id degrades to a no-op (update) or to [`Topic::fallback`]
//!    (lookup) so a renderer holding an old id can never crash the core.
//! 3. **Counter reconstruction**: the counter is never persisted. Decoding
//!    parses the last topic's id as the counter and falls back to the topic
//!    count when the id is non-numeric (preset ids).

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::color::{ColorPair, palette};
use crate::topic::{StyleMsg, Topic};

/// Label given to freshly added topics.
const NEW_TOPIC_LABEL: &str = "Observation Category";

/// Glyph given to freshly added topics.
const NEW_TOPIC_SYMBOL: &str = "•";

/// The full ordered set of topics available for tallying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Next numeric id handed to a freshly added topic.
    next_id: u32,
    /// Ordered topics; never empty.
    topics: Vec<Topic>,
}

/// Messages that edit a theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeMsg {
    /// Append a new topic with the next numeric id.
    Add,
    /// Remove the topic with this id; rejected when it is the last one.
    Remove(String),
    /// Route a style edit to the topic with this id.
    UpdateStyle(String, StyleMsg),
}

impl Theme {
    /// A minimal theme: one topic with id `"1"`, counter seeded at 2.
    #[must_use]
    pub fn init() -> Self {
        Self {
            next_id: 2,
            topics: vec![fresh_topic("1")],
        }
    }

    /// Number of topics.
    #[must_use]
    pub fn len(&self) -> usize {
        self.topics.len()
    }

    /// Always false; kept for iterator-style call sites.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    /// The next id a freshly added topic would receive.
    #[must_use]
    pub fn next_id(&self) -> u32 {
        self.next_id
    }

    /// Iterate topics in display order.
    pub fn topics(&self) -> impl Iterator<Item = &Topic> {
        self.topics.iter()
    }

    /// Find a topic by id.
    ///
    /// Linear scan; returns [`Topic::fallback`] when the id is absent, so
    /// lookup never fails.
    #[must_use]
    pub fn lookup(&self, id: &str) -> Topic {
        self.topics
            .iter()
            .find(|topic| topic.id == id)
            .cloned()
            .unwrap_or_else(Topic::fallback)
    }

    /// Apply a message, returning the edited theme.
    #[must_use]
    pub fn update(mut self, msg: ThemeMsg) -> Self {
        match msg {
            ThemeMsg::Add => {
                let id = self.next_id.to_string();
                self.topics.push(fresh_topic(&id));
                self.next_id += 1;
                self
            }
            ThemeMsg::Remove(id) => {
                // Count survivors before touching anything: duplicate ids can
                // exist after a decode (the counter comes back unincremented),
                // and one removal then matches several topics. A removal that
                // would empty the theme is rejected outright.
                let survivors = self.topics.iter().filter(|topic| topic.id != id).count();
                if survivors >= 1 {
                    self.topics.retain(|topic| topic.id != id);
                }
                self
            }
            ThemeMsg::UpdateStyle(id, style) => {
                if let Some(pos) = self.topics.iter().position(|topic| topic.id == id) {
                    let topic = self.topics.remove(pos);
                    self.topics.insert(pos, topic.update(style));
                }
                self
            }
        }
    }
}

impl Default for Theme {
    /// The standard plus/question/delta preset.
    fn default() -> Self {
        presets::standard()
    }
}

fn fresh_topic(id: &str) -> Topic {
    Topic::new(
        id,
        NEW_TOPIC_SYMBOL,
        NEW_TOPIC_LABEL,
        ColorPair::new(palette::GREEN, palette::GREEN_DEEP),
        1,
    )
}

/// Reconstruct the id counter from decoded topics.
///
/// The last topic's id is parsed as the counter directly, not id + 1; this
/// preserves the stored shape even though a later `Add` could then mint an id
/// equal to the last numeric one. Non-numeric ids (the presets) fall back to
/// the topic count.
fn reconstruct_counter(topics: &[Topic]) -> u32 {
    topics
        .last()
        .and_then(|topic| topic.id.parse().ok())
        .unwrap_or(topics.len() as u32)
}

// --- Wire format ------------------------------------------------------------
//
// A theme persists as a bare array of topics. The counter is rebuilt on
// decode; an empty array fails the decode (the invariant holds at the
// boundary, not just inside updates).

impl Serialize for Theme {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.topics.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Theme {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let topics = Vec::<Topic>::deserialize(deserializer)?;
        if topics.is_empty() {
            return Err(D::Error::invalid_length(0, &"at least one topic"));
        }
        Ok(Self {
            next_id: reconstruct_counter(&topics),
            topics,
        })
    }
}

/// Built-in theme presets.
pub mod presets {
    use super::*;

    /// The standard classroom preset: plus / question / delta.
    ///
    /// Counter seeds at 1 — preset ids are not numeric, so the seed is a
    /// fixed starting point rather than something derived from them.
    #[must_use]
    pub fn standard() -> Theme {
        Theme {
            next_id: 1,
            topics: vec![
                Topic::new(
                    "obs",
                    "+",
                    "Observation",
                    ColorPair::new(palette::GREEN, palette::GREEN_DEEP),
                    1,
                ),
                Topic::new(
                    "question",
                    "?",
                    "Question",
                    ColorPair::new(palette::YELLOW, palette::YELLOW_DEEP),
                    0,
                ),
                Topic::new(
                    "delta",
                    "Δ",
                    "Delta",
                    ColorPair::new(palette::RED, palette::RED_DEEP),
                    -1,
                ),
            ],
        }
    }
}
