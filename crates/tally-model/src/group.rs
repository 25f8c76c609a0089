//! Group state machine: records, defaults tally, and the input drawer.
//!
//! A group tracks one set of students. It owns a keyed collection of
//! [`Record`]s (newest first), a per-topic defaults tally that only ever
//! counts up, and at most one open input drawer (`current_topic`) for the
//! observation currently being typed.
//!
//! # Failure Modes
//!
//! | Situation | Behavior |
//! |-----------|----------|
//! | Commit with empty label | Records untouched, drawer still closes |
//! | Record key absent | `UpdateRecord`/`Delete` are silent no-ops |
//! | Drawer already open | `StartNew` overwrites it (one at a time) |

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tally_style::Theme;
use tracing::debug;

use crate::keyed::{Key, KeyedList};
use crate::record::{Observation, Record, RecordMsg};

/// A collection of students tracked together.
///
/// The drawer state (`current_topic`) is session-local: it is never persisted
/// and always decodes to closed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Topic id of the open input drawer, if any.
    #[serde(skip)]
    pub current_topic: Option<String>,
    /// Numeric group id.
    pub id: u32,
    /// Display label.
    pub label: String,
    /// Logged observations, newest first.
    pub records: KeyedList<Record>,
    /// Per-topic tally counts, independent of `records`. A topic has no
    /// entry until first incremented; entries are never removed.
    pub defaults: BTreeMap<String, u32>,
}

/// Messages that edit a group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupMsg {
    /// Open the input drawer for this topic, replacing any open one.
    StartNew(String),
    /// Close the drawer, logging a record unless the label is empty.
    CommitCurrent(String, String),
    /// Close the drawer without logging anything.
    CancelCurrent,
    /// Count one more default tally for this topic.
    IncrementDefault(String),
    /// Route an edit to the addressed record.
    UpdateRecord(Key, RecordMsg),
    /// Remove the addressed record.
    Delete(Key),
    /// Replace the display label verbatim.
    Relabel(String),
}

impl Group {
    /// Create a group seeded with observations (multiplier 1 each).
    #[must_use]
    pub fn init(
        id: u32,
        label: impl Into<String>,
        seed: impl IntoIterator<Item = Observation>,
    ) -> Self {
        let mut records = KeyedList::new();
        for observation in seed {
            records.push(Record::new(1, observation));
        }
        Self {
            current_topic: None,
            id,
            label: label.into(),
            records,
            defaults: BTreeMap::new(),
        }
    }

    /// Blank this group: drawer closed, no records, no defaults.
    ///
    /// Keeps `id` and `label`.
    #[must_use]
    pub fn reset(self) -> Self {
        Self {
            current_topic: None,
            id: self.id,
            label: self.label,
            records: KeyedList::new(),
            defaults: BTreeMap::new(),
        }
    }

    /// Apply a message, returning the edited group.
    #[must_use]
    pub fn update(mut self, msg: GroupMsg) -> Self {
        match msg {
            GroupMsg::StartNew(topic) => {
                self.current_topic = Some(topic);
                self
            }
            GroupMsg::CommitCurrent(topic, label) => {
                // Empty labels are discarded, but the drawer closes either way.
                if label.is_empty() {
                    debug!(group = self.id, topic = %topic, "empty commit discarded");
                } else {
                    self.records.cons(Record::new(1, Observation::new(topic, label)));
                }
                self.current_topic = None;
                self
            }
            GroupMsg::CancelCurrent => {
                self.current_topic = None;
                self
            }
            GroupMsg::IncrementDefault(topic) => {
                *self.defaults.entry(topic).or_insert(0) += 1;
                self
            }
            GroupMsg::UpdateRecord(key, record_msg) => {
                self.records.update(key, |record| record.update(record_msg));
                self
            }
            GroupMsg::Delete(key) => {
                self.records.remove(key);
                self
            }
            GroupMsg::Relabel(label) => {
                self.label = label;
                self
            }
        }
    }

    /// Total points under a theme: record values plus default tallies.
    #[must_use]
    pub fn tally(&self, theme: &Theme) -> i32 {
        let recorded: i32 = self.records.values().map(|r| r.value(theme)).sum();
        let defaulted: i32 = self
            .defaults
            .iter()
            .map(|(topic, count)| theme.lookup(topic).weight * *count as i32)
            .sum();
        recorded + defaulted
    }
}
