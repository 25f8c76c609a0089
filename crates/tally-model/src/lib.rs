#![forbid(unsafe_code)]

//! Immutable state machines for tallyboard.
//!
//! Three layered entities each own one level of nested state: a [`Quiz`] owns
//! an ordered, keyed collection of [`Group`]s; a group owns a keyed collection
//! of [`Record`]s plus a per-topic defaults tally; the sibling
//! [`Theme`](tally_style::Theme) configures how records score. Every `update`
//! is a pure, total function from `(message, state)` to a fresh state — the
//! rendering layer dispatches one message at a time and re-renders from the
//! returned snapshot.
//!
//! Routing is by stable key: [`QuizMsg::UpdateGroup`] addresses a group by
//! [`Key`], [`GroupMsg::UpdateRecord`] addresses a record by key, and a stale
//! key at any level is a silent no-op.

pub mod codec;
pub mod group;
pub mod keyed;
pub mod quiz;
pub mod record;
pub mod settings;

pub use codec::{CodecError, CodecResult};
pub use group::{Group, GroupMsg};
pub use keyed::{Key, KeyedList};
pub use quiz::{Quiz, QuizMsg};
pub use record::{Observation, Record, RecordMsg};
pub use settings::Settings;
