//! Raw snapshot records
//!
//! A record is a one-character type tag followed by a decimal id:
//! `B3` opens box 3, `F12` opens folder 12, `P7` is paper 7.

use std::fmt;
use std::str::FromStr;

use messfix_core_types::EntityId;

use crate::errors::{MessFixError, Result};

/// One typed entry of a raw snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Record {
    Box(EntityId),
    Folder(EntityId),
    Paper(EntityId),
}

impl Record {
    pub const BOX_TAG: char = 'B';
    pub const FOLDER_TAG: char = 'F';
    pub const PAPER_TAG: char = 'P';

    pub fn id(&self) -> EntityId {
        match *self {
            Record::Box(id) | Record::Folder(id) | Record::Paper(id) => id,
        }
    }

    pub fn tag(&self) -> char {
        match self {
            Record::Box(_) => Self::BOX_TAG,
            Record::Folder(_) => Self::FOLDER_TAG,
            Record::Paper(_) => Self::PAPER_TAG,
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.tag(), self.id())
    }
}

impl FromStr for Record {
    type Err = MessFixError;

    fn from_str(raw: &str) -> Result<Self> {
        let mut chars = raw.chars();
        let tag = chars.next().ok_or(MessFixError::EmptyRecord)?;

        let make: fn(EntityId) -> Record = match tag {
            Self::BOX_TAG => Record::Box,
            Self::FOLDER_TAG => Record::Folder,
            Self::PAPER_TAG => Record::Paper,
            other => {
                return Err(MessFixError::InvalidRecordType {
                    tag: other,
                    record: raw.to_string(),
                })
            }
        };

        let digits = chars.as_str();
        let invalid_id = || MessFixError::InvalidRecordId {
            record: raw.to_string(),
        };
        // u32::from_str would also accept a leading '+'
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid_id());
        }

        let id = digits.parse::<EntityId>().map_err(|_| invalid_id())?;
        Ok(make(id))
    }
}

/// Parse every raw record of a snapshot, in feed order
///
/// The whole snapshot is rejected on the first bad record.
///
/// # Errors
///
/// Returns `EmptyRecord`, `InvalidRecordType` or `InvalidRecordId`.
pub fn parse_records<S: AsRef<str>>(raw: &[S]) -> Result<Vec<Record>> {
    raw.iter().map(|r| r.as_ref().parse()).collect()
}

/// Render records the way they appear in the raw feed, e.g. `[P1, F1, B1]`
pub fn format_records<S: AsRef<str>>(raw: &[S]) -> String {
    let joined: Vec<&str> = raw.iter().map(|r| r.as_ref()).collect();
    format!("[{}]", joined.join(", "))
}
