use crate::error::{Result, StoreError};
use serde::Deserialize;
use std::io::Read;

/// The operation a script row describes.
#[derive(Debug, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum ScriptOp {
    /// Queue a `(code, message)` reply on the simulated billing source.
    Reply,
    Purchase,
    Acknowledge,
    Restore,
}

/// One row of a recorded billing session.
///
/// Only `op` is mandatory; the other columns are meaningful for some
/// operations only (`store_id`/`consumable` for `purchase`,
/// `code`/`message` for `reply`).
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct ScriptEvent {
    pub op: ScriptOp,
    pub store_id: Option<String>,
    pub consumable: Option<bool>,
    pub code: Option<i32>,
    pub message: Option<String>,
}

/// Reads session events from a CSV source.
///
/// Wraps `csv::Reader` and provides an iterator over `Result<ScriptEvent>`,
/// trimming whitespace and tolerating short records so a malformed row
/// surfaces as one error instead of aborting the replay.
pub struct ScriptReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> ScriptReader<R> {
    /// Creates a new `ScriptReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes events.
    pub fn events(self) -> impl Iterator<Item = Result<ScriptEvent>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(StoreError::from))
    }
}
