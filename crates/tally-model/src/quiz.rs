//! Quiz root state machine.
//!
//! The quiz owns a title and the keyed collection of groups. Group-scoped
//! messages are routed by [`Key`]; a stale key is a silent no-op.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::group::{Group, GroupMsg};
use crate::keyed::{Key, KeyedList};
use crate::record::Observation;

/// How many groups a fresh quiz starts with.
const INITIAL_GROUPS: u32 = 8;

/// Root state: a titled, keyed collection of groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    /// Display title.
    pub title: String,
    /// Groups in display order.
    pub groups: KeyedList<Group>,
}

/// Messages that edit a quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizMsg {
    /// Replace the title.
    Rename(String),
    /// Append an empty group with this label.
    AddGroup(String),
    /// Route a message to the addressed group.
    UpdateGroup(Key, GroupMsg),
    /// Remove the addressed group.
    RemoveGroup(Key),
    /// Replace all groups with fresh blanks, keeping the count.
    ResetGroups,
}

impl Quiz {
    /// Create a quiz with eight blank groups, each seeded with the same
    /// observation list.
    ///
    /// Groups are labelled `"Group 1"` through `"Group 8"`. The seed is
    /// shared by value; later edits to one group never reach another.
    #[must_use]
    pub fn init(title: impl Into<String>, seed: &[Observation]) -> Self {
        let mut groups = KeyedList::new();
        for i in 1..=INITIAL_GROUPS {
            groups.push(Group::init(i, format!("Group {i}"), seed.iter().cloned()));
        }
        Self {
            title: title.into(),
            groups,
        }
    }

    /// Apply a message, returning the edited quiz.
    #[must_use]
    pub fn update(mut self, msg: QuizMsg) -> Self {
        match msg {
            QuizMsg::Rename(title) => {
                self.title = title;
                self
            }
            QuizMsg::AddGroup(label) => {
                let id = self.next_group_id();
                self.groups.push(Group::init(id, label, []));
                self
            }
            QuizMsg::UpdateGroup(key, group_msg) => {
                self.groups.update(key, |group| group.update(group_msg));
                self
            }
            QuizMsg::RemoveGroup(key) => {
                self.groups.remove(key);
                self
            }
            QuizMsg::ResetGroups => {
                let count = self.groups.len() as u32;
                debug!(count, "resetting all groups");
                let mut groups = KeyedList::new();
                for i in 1..=count {
                    groups.push(Group::init(i, format!("Group {i}"), []));
                }
                self.groups = groups;
                self
            }
        }
    }

    // Numeric ids stay unique even after removals.
    fn next_group_id(&self) -> u32 {
        self.groups.values().map(|g| g.id).max().unwrap_or(0) + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::RecordMsg;

    #[test]
    fn init_builds_eight_seeded_groups() {
        let seed = vec![Observation::new("obs", "on task")];
        let quiz = Quiz::init("Period 3", &seed);
        assert_eq!(quiz.title, "Period 3");
        assert_eq!(quiz.groups.len(), 8);
        let labels: Vec<&str> = quiz.groups.values().map(|g| g.label.as_str()).collect();
        assert_eq!(labels[0], "Group 1");
        assert_eq!(labels[7], "Group 8");
        for group in quiz.groups.values() {
            assert_eq!(group.records.len(), 1);
            assert!(group.defaults.is_empty());
            assert_eq!(group.current_topic, None);
        }
    }

    #[test]
    fn rename_replaces_title() {
        let quiz = Quiz::init("a", &[]).update(QuizMsg::Rename("b".to_owned()));
        assert_eq!(quiz.title, "b");
    }

    #[test]
    fn add_group_appends_empty_group() {
        let quiz = Quiz::init("q", &[]).update(QuizMsg::AddGroup("Late arrivals".to_owned()));
        assert_eq!(quiz.groups.len(), 9);
        let last = quiz.groups.values().last().unwrap();
        assert_eq!(last.label, "Late arrivals");
        assert_eq!(last.id, 9);
        assert!(last.records.is_empty());
    }

    #[test]
    fn update_group_routes_by_key() {
        let quiz = Quiz::init("q", &[Observation::new("obs", "seed")]);
        let key = quiz.groups.iter().next().unwrap().0;
        let quiz = quiz.update(QuizMsg::UpdateGroup(
            key,
            GroupMsg::Relabel("Front row".to_owned()),
        ));
        assert_eq!(quiz.groups.get(key).unwrap().label, "Front row");
        // Other groups untouched.
        assert_eq!(
            quiz.groups.values().filter(|g| g.label == "Front row").count(),
            1
        );
    }

    #[test]
    fn update_group_stale_key_is_noop() {
        let mut quiz = Quiz::init("q", &[]);
        let key = quiz.groups.iter().next().unwrap().0;
        quiz.groups.remove(key);
        let before = quiz.clone();
        let after = quiz.update(QuizMsg::UpdateGroup(
            key,
            GroupMsg::Relabel("ghost".to_owned()),
        ));
        assert_eq!(after, before);
    }

    #[test]
    fn remove_group_is_idempotent() {
        let quiz = Quiz::init("q", &[]);
        let key = quiz.groups.iter().next().unwrap().0;
        let quiz = quiz
            .update(QuizMsg::RemoveGroup(key))
            .update(QuizMsg::RemoveGroup(key));
        assert_eq!(quiz.groups.len(), 7);
    }

    #[test]
    fn nested_routing_reaches_records() {
        let quiz = Quiz::init("q", &[Observation::new("obs", "seed")]);
        let group_key = quiz.groups.iter().next().unwrap().0;
        let record_key = quiz
            .groups
            .get(group_key)
            .unwrap()
            .records
            .iter()
            .next()
            .unwrap()
            .0;
        let quiz = quiz.update(QuizMsg::UpdateGroup(
            group_key,
            GroupMsg::UpdateRecord(record_key, RecordMsg::Increment),
        ));
        let record = quiz
            .groups
            .get(group_key)
            .unwrap()
            .records
            .get(record_key)
            .unwrap();
        assert_eq!(record.multiplier, 2);
    }

    #[test]
    fn reset_groups_keeps_count_blanks_everything() {
        let quiz = Quiz::init("q", &[Observation::new("obs", "seed")])
            .update(QuizMsg::AddGroup("Custom".to_owned()));
        let key = quiz.groups.iter().next().unwrap().0;
        let quiz = quiz
            .update(QuizMsg::UpdateGroup(
                key,
                GroupMsg::IncrementDefault("obs".to_owned()),
            ))
            .update(QuizMsg::ResetGroups);
        assert_eq!(quiz.groups.len(), 9);
        for (i, group) in quiz.groups.values().enumerate() {
            assert_eq!(group.label, format!("Group {}", i + 1));
            assert!(group.records.is_empty());
            assert!(group.defaults.is_empty());
            assert_eq!(group.current_topic, None);
        }
    }

    #[test]
    fn group_ids_stay_unique_after_removal() {
        let quiz = Quiz::init("q", &[]);
        let last_key = quiz.groups.iter().last().unwrap().0;
        let quiz = quiz
            .update(QuizMsg::RemoveGroup(last_key))
            .update(QuizMsg::AddGroup("a".to_owned()))
            .update(QuizMsg::AddGroup("b".to_owned()));
        let mut ids: Vec<u32> = quiz.groups.values().map(|g| g.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), quiz.groups.len());
    }
}
