use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Value the form's tone select submits when the user keeps the placeholder.
pub const DEFAULT_TONE_OPTION: &str = "default";

/// Tones offered by the form. An unset tone is rendered as "neutral".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Casual,
    Friendly,
    Professional,
    Formal,
}

impl Tone {
    pub const ALL: [Tone; 4] = [Tone::Casual, Tone::Friendly, Tone::Professional, Tone::Formal];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Casual => "casual",
            Tone::Friendly => "friendly",
            Tone::Professional => "professional",
            Tone::Formal => "formal",
        }
    }

    /// Interprets the raw `tone` field. Empty and `"default"` mean no tone.
    pub fn from_field(raw: &str) -> Result<Option<Tone>, ValidationError> {
        let raw = raw.trim();
        if raw.is_empty() || raw == DEFAULT_TONE_OPTION {
            return Ok(None);
        }
        raw.parse().map(Some)
    }
}

impl FromStr for Tone {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tone::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownTone(s.to_string()))
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
