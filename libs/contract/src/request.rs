use std::borrow::Cow;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ValidationError;
use crate::tone::Tone;
use crate::DEFAULT_WORD_COUNT;

/// Body of `POST /api/returnJobDescription`.
///
/// Every field except `jobTitle` is optional on the wire; missing and `null`
/// both decode to empty. A missing `jobTitle` also decodes to empty so it is
/// reported by [`GenerationRequest::validate`] rather than as a decoding failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub job_title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub industry: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub key_words: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tone: String,
    #[serde(default)]
    pub num_words: WordCount,
}

impl GenerationRequest {
    pub fn new(job_title: impl Into<String>) -> Self {
        Self {
            job_title: job_title.into(),
            ..Default::default()
        }
    }

    pub fn has_job_title(&self) -> bool {
        !self.job_title.trim().is_empty()
    }

    /// Checks the request before it is turned into a prompt.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.has_job_title() {
            return Err(ValidationError::EmptyJobTitle);
        }
        Tone::from_field(&self.tone)?;
        self.num_words.validate()?;
        Ok(())
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Response body of a successful generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResponse {
    pub job_description: String,
}

/// Target word count as typed into the form.
///
/// The form posts a string while programmatic callers may send a number, so
/// both are accepted. Empty, `null` and `0` leave the count unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WordCount(String);

impl WordCount {
    pub fn is_unset(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// The value the prompt asks for: the supplied text verbatim, or the default.
    pub fn target(&self) -> Cow<'_, str> {
        if self.is_unset() {
            Cow::Owned(DEFAULT_WORD_COUNT.to_string())
        } else {
            Cow::Borrowed(&self.0)
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.is_unset() {
            return Ok(());
        }
        match self.0.parse::<u32>() {
            Ok(n) if n > 0 => Ok(()),
            _ => Err(ValidationError::InvalidWordCount(self.0.clone())),
        }
    }
}

impl From<String> for WordCount {
    fn from(value: String) -> Self {
        WordCount(value)
    }
}

impl From<&str> for WordCount {
    fn from(value: &str) -> Self {
        WordCount(value.to_string())
    }
}

impl From<u32> for WordCount {
    fn from(value: u32) -> Self {
        if value == 0 {
            WordCount::default()
        } else {
            WordCount(value.to_string())
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawWordCount {
    Text(String),
    Whole(u64),
    Fractional(f64),
}

impl<'de> Deserialize<'de> for WordCount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let count = match Option::<RawWordCount>::deserialize(deserializer)? {
            None | Some(RawWordCount::Whole(0)) => WordCount::default(),
            Some(RawWordCount::Text(text)) => WordCount(text),
            Some(RawWordCount::Whole(n)) => WordCount(n.to_string()),
            // Kept as text so validation reports it instead of the decoder.
            Some(RawWordCount::Fractional(n)) => WordCount(n.to_string()),
        };
        Ok(count)
    }
}
