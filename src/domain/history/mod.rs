use crate::domain::speech::Voice;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Number of generations kept in memory
pub const HISTORY_CAPACITY: usize = 10;

/// A past synthesis result. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Generation {
    pub id: String,
    pub text: String,
    pub voice: Voice,
    pub speed: f32,
    pub audio_url: String,
    pub created_at: DateTime<Utc>,
}

impl Generation {
    /// File name offered when this generation is downloaded
    pub fn download_name(&self) -> String {
        format!("speech-{}.mp3", self.id)
    }
}

/// Newest-first record of recent generations, bounded to [`HISTORY_CAPACITY`].
///
/// Lives only in memory; anything pushed past capacity drops the oldest
/// entry off the tail.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    entries: VecDeque<Generation>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, generation: Generation) {
        self.entries.push_front(generation);
        self.entries.truncate(HISTORY_CAPACITY);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Generation> {
        self.entries.iter()
    }
}

/// Hands out time-derived ids that are strictly increasing, so two
/// generations created in the same millisecond still differ.
#[derive(Debug, Default)]
pub struct GenerationIds {
    last: i64,
}

impl GenerationIds {
    pub fn next(&mut self, now: DateTime<Utc>) -> String {
        let millis = now.timestamp_millis().max(self.last + 1);
        self.last = millis;
        millis.to_string()
    }
}
