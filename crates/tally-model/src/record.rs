//! A single logged observation with a multiplier.

use serde::{Deserialize, Serialize};
use tally_style::Theme;

/// A `(style, label)` pair describing one qualitative note.
///
/// `style` names the [`Topic`](tally_style::Topic) this note is tallied
/// under; it is a domain id, not a collection key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    /// Topic id this note counts against.
    pub style: String,
    /// Free-form note text.
    pub label: String,
}

impl Observation {
    /// Create an observation.
    #[must_use]
    pub fn new(style: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            style: style.into(),
            label: label.into(),
        }
    }
}

/// A persisted observation plus a point-count multiplier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// How many times this observation counts.
    pub multiplier: i32,
    /// The underlying note.
    pub observation: Observation,
}

/// Messages that edit one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordMsg {
    /// Count this observation once more.
    Increment,
    /// Count it once less; floored at 1 so a logged note never scores
    /// backwards or silently disappears (deleting is the group's job).
    Decrement,
}

impl Record {
    /// Create a record.
    #[must_use]
    pub fn new(multiplier: i32, observation: Observation) -> Self {
        Self {
            multiplier,
            observation,
        }
    }

    /// Apply a message, returning the edited record.
    #[must_use]
    pub fn update(mut self, msg: RecordMsg) -> Self {
        match msg {
            RecordMsg::Increment => self.multiplier += 1,
            RecordMsg::Decrement => self.multiplier = (self.multiplier - 1).max(1),
        }
        self
    }

    /// Point value under a theme: topic weight × multiplier.
    ///
    /// A stale style id scores through [`Topic::fallback`]
    /// (weight 0), never an error.
    ///
    /// [`Topic::fallback`]: tally_style::Topic::fallback
    #[must_use]
    pub fn value(&self, theme: &Theme) -> i32 {
        theme.lookup(&self.observation.style).weight * self.multiplier
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_multiplies_topic_weight() {
        let theme = Theme::default();
        let record = Record::new(3, Observation::new("delta", "late"));
        assert_eq!(record.value(&theme), -3);
    }

    #[test]
    fn value_of_stale_style_is_zero() {
        let theme = Theme::default();
        let record = Record::new(5, Observation::new("ghost", "?"));
        assert_eq!(record.value(&theme), 0);
    }

    #[test]
    fn increment_and_decrement() {
        let record = Record::new(1, Observation::new("obs", "good"));
        let up = record.clone().update(RecordMsg::Increment);
        assert_eq!(up.multiplier, 2);
        assert_eq!(up.update(RecordMsg::Decrement).multiplier, 1);
    }

    #[test]
    fn decrement_floors_at_one() {
        let record = Record::new(1, Observation::new("obs", "good"));
        assert_eq!(record.update(RecordMsg::Decrement).multiplier, 1);
    }

    #[test]
    fn round_trips_through_json() {
        let record = Record::new(2, Observation::new("obs", "nice"));
        let json = serde_json::to_string(&record).unwrap();
        let back: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
