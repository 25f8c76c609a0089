//! JSON codec boundary for persistence.
//!
//! The update engine is total; decoding is the one place failure exists.
//! A malformed or missing field fails the decode for the whole enclosing
//! entity — there are no partial objects. The error message names the
//! offending field path so the storage collaborator can log something useful.
//!
//! Two things deliberately do not survive the wire:
//!
//! - collection keys — reassigned by position on decode, see
//!   [`KeyedList`](crate::KeyedList);
//! - a group's open drawer — always decodes to closed.

use std::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tally_style::Theme;
use tracing::debug;

use crate::group::Group;
use crate::quiz::Quiz;
use crate::record::Record;

/// Errors produced at the codec boundary.
#[derive(Debug)]
pub enum CodecError {
    /// JSON encode/decode failure; the message names the field path.
    Serialization(String),
    /// Input that parsed but cannot form a valid entity.
    Corruption(String),
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::Serialization(msg) => write!(f, "serialization error: {msg}"),
            CodecError::Corruption(msg) => write!(f, "corrupt input: {msg}"),
        }
    }
}

impl std::error::Error for CodecError {}

impl From<serde_json::Error> for CodecError {
    fn from(err: serde_json::Error) -> Self {
        CodecError::Serialization(err.to_string())
    }
}

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

fn encode<T: Serialize>(value: &T) -> CodecResult<String> {
    Ok(serde_json::to_string(value)?)
}

fn decode<T: DeserializeOwned>(entity: &str, json: &str) -> CodecResult<T> {
    match serde_json::from_str(json) {
        Ok(value) => Ok(value),
        Err(err) => {
            debug!(entity, %err, "decode failed");
            Err(err.into())
        }
    }
}

/// Encode a quiz as `{ "title": …, "groups": [...] }`.
pub fn encode_quiz(quiz: &Quiz) -> CodecResult<String> {
    encode(quiz)
}

/// Decode a quiz; group keys are reassigned by position.
pub fn decode_quiz(json: &str) -> CodecResult<Quiz> {
    decode("quiz", json)
}

/// Encode a single group.
pub fn encode_group(group: &Group) -> CodecResult<String> {
    encode(group)
}

/// Decode a single group; the drawer comes back closed.
pub fn decode_group(json: &str) -> CodecResult<Group> {
    decode("group", json)
}

/// Encode a single record.
pub fn encode_record(record: &Record) -> CodecResult<String> {
    encode(record)
}

/// Decode a single record.
pub fn decode_record(json: &str) -> CodecResult<Record> {
    decode("record", json)
}

/// Encode a theme as a bare topic array.
pub fn encode_theme(theme: &Theme) -> CodecResult<String> {
    encode(theme)
}

/// Decode a theme; the id counter is reconstructed from the last topic's id.
pub fn decode_theme(json: &str) -> CodecResult<Theme> {
    decode("theme", json)
}
