#![forbid(unsafe_code)]

//! Tallyboard public facade crate.
//!
//! Re-exports the stable surface of the state engine for callers (the
//! rendering/dispatch layer and the persistence collaborator) and offers a
//! lightweight prelude for day-to-day usage.

// --- Model re-exports ------------------------------------------------------

pub use tally_model::codec::{
    self, CodecError, CodecResult, decode_group, decode_quiz, decode_record, decode_theme,
    encode_group, encode_quiz, encode_record, encode_theme,
};
pub use tally_model::{
    Group, GroupMsg, Key, KeyedList, Observation, Quiz, QuizMsg, Record, RecordMsg, Settings,
};

// --- Style re-exports ------------------------------------------------------

pub use tally_style::{Color, ColorPair, StyleMsg, Theme, ThemeMsg, Topic, presets};

/// Convenience prelude: `use tally::prelude::*;`
pub mod prelude {
    pub use crate::{
        Group, GroupMsg, Key, Observation, Quiz, QuizMsg, Record, RecordMsg, Settings, StyleMsg,
        Theme, ThemeMsg, Topic,
    };
}
