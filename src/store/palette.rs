//! Saved palette record

use crate::color::Color;
use chrono::{SecondsFormat, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Digits used for the random id suffix
const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Length of the random id suffix
const ID_SUFFIX_LEN: usize = 6;

/// A named, ordered collection of colors
///
/// Serialized with camelCase keys (`createdAt`) to stay readable by the
/// browser build of the tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    /// Unique identifier
    pub id: String,
    pub name: String,
    pub colors: Vec<Color>,
    /// Free-form labels, without duplicates
    pub tags: Vec<String>,
    /// RFC 3339 UTC timestamp
    pub created_at: String,
    pub favorite: bool,
}

impl Palette {
    /// Create a palette with a fresh id and the current timestamp
    pub fn new(name: &str, colors: Vec<Color>, tags: &[String]) -> Self {
        let mut palette = Self {
            id: generate_id(),
            name: name.trim().to_string(),
            colors,
            tags: Vec::new(),
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            favorite: false,
        };
        palette.add_tags(tags);
        palette
    }

    /// Append tags that are not already present, preserving order
    ///
    /// Returns the number of tags actually added.
    pub fn add_tags(&mut self, tags: &[String]) -> usize {
        let mut added = 0;
        for tag in tags {
            let tag = tag.trim();
            if tag.is_empty() || self.has_tag(tag) {
                continue;
            }
            self.tags.push(tag.to_string());
            added += 1;
        }
        added
    }

    /// Case-insensitive tag lookup
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

/// Millisecond timestamp plus a short random suffix
pub fn generate_id() -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..ID_SUFFIX_LEN)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect();
    format!("{}-{}", Utc::now().timestamp_millis(), suffix)
}
