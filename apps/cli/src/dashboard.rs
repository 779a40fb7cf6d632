//! Form state for the job description generator.
//!
//! `Dashboard` owns the five form fields, the generated output and the two UI
//! flags. Frontends render from its derived getters and call `submit`/`copy`.

use jobdesc_contract::{GenerationRequest, WordCount};
use thiserror::Error;

use crate::api_client::{ApiError, GenerationApi};
use crate::clipboard::{Clipboard, CopyError};

const EMPTY_OUTPUT_ROWS: usize = 7;
const OUTPUT_ROW_PADDING: usize = 12;

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("a job title is required and no generation may be in flight")]
    NotReady,

    #[error("generation failed: {0}")]
    Generation(#[from] ApiError),
}

/// What the output area shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Output {
    /// Nothing generated yet.
    #[default]
    Empty,
    /// Generated (and possibly user-edited) text.
    Ready(String),
    /// The last generation failed; holds a displayable reason.
    Failed(String),
}

impl Output {
    /// Text shown in the editable output area. Empty unless `Ready`.
    pub fn text(&self) -> &str {
        match self {
            Output::Ready(text) => text,
            Output::Empty | Output::Failed(_) => "",
        }
    }
}

#[derive(Debug, Default)]
pub struct Dashboard {
    job_title: String,
    industry: String,
    key_words: String,
    tone: String,
    num_words: String,
    output: Output,
    is_generating: bool,
    is_copied: bool,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_job_title(&mut self, value: impl Into<String>) {
        self.job_title = value.into();
    }

    pub fn set_industry(&mut self, value: impl Into<String>) {
        self.industry = value.into();
    }

    pub fn set_key_words(&mut self, value: impl Into<String>) {
        self.key_words = value.into();
    }

    pub fn set_tone(&mut self, value: impl Into<String>) {
        self.tone = value.into();
    }

    pub fn set_num_words(&mut self, value: impl Into<String>) {
        self.num_words = value.into();
    }

    pub fn output(&self) -> &Output {
        &self.output
    }

    pub fn is_busy(&self) -> bool {
        self.is_generating
    }

    pub fn is_copied(&self) -> bool {
        self.is_copied
    }

    pub fn can_submit(&self) -> bool {
        !self.job_title.trim().is_empty() && !self.is_busy()
    }

    pub fn can_copy(&self) -> bool {
        !self.output.text().is_empty()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_busy() {
            "Generating..."
        } else {
            "Generate"
        }
    }

    pub fn copy_label(&self) -> &'static str {
        if self.is_copied {
            "Copied"
        } else {
            "Copy to Clipboard"
        }
    }

    /// Height hint for the output area: grows with the number of lines.
    pub fn output_rows(&self) -> usize {
        match self.output.text() {
            "" => EMPTY_OUTPUT_ROWS,
            text => text.split('\n').count() + OUTPUT_ROW_PADDING,
        }
    }

    /// The request the current field values would submit.
    pub fn request(&self) -> GenerationRequest {
        GenerationRequest {
            job_title: self.job_title.clone(),
            industry: self.industry.clone(),
            key_words: self.key_words.clone(),
            tone: self.tone.clone(),
            num_words: WordCount::from(self.num_words.clone()),
        }
    }

    /// Sends the form to the gateway and replaces the output with the result.
    ///
    /// Refused without issuing a request when `can_submit()` is false. The busy
    /// flag is cleared whether the call succeeds or fails.
    pub async fn submit(&mut self, api: &dyn GenerationApi) -> Result<(), SubmitError> {
        if !self.can_submit() {
            return Err(SubmitError::NotReady);
        }

        self.is_generating = true;
        let result = api.generate(&self.request()).await;
        self.is_generating = false;

        match result {
            Ok(text) => {
                self.output = Output::Ready(text.trim().to_string());
                Ok(())
            }
            Err(e) => {
                self.output = Output::Failed(e.to_string());
                Err(SubmitError::Generation(e))
            }
        }
    }

    /// Replaces the generated text with a user edit. Only a `Ready` output is editable.
    pub fn edit_output(&mut self, text: impl Into<String>) -> bool {
        if let Output::Ready(current) = &mut self.output {
            *current = text.into();
            true
        } else {
            false
        }
    }

    /// Copies the displayed text. The copied flag stays set until the next copy.
    pub fn copy(&mut self, clipboard: &mut dyn Clipboard) -> Result<(), CopyError> {
        if !self.can_copy() {
            return Err(CopyError::NothingToCopy);
        }
        clipboard.set_text(self.output.text())?;
        self.is_copied = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::clipboard::MemoryClipboard;

    struct StubApi {
        reply: Result<String, (u16, String)>,
        requests: Mutex<Vec<GenerationRequest>>,
    }

    impl StubApi {
        fn replying(text: &str) -> Self {
            Self {
                reply: Ok(text.to_string()),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn failing(status: u16, message: &str) -> Self {
            Self {
                reply: Err((status, message.to_string())),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> usize {
            self.requests.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl GenerationApi for StubApi {
        async fn generate(&self, request: &GenerationRequest) -> Result<String, ApiError> {
            self.requests.lock().unwrap().push(request.clone());
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err((status, message)) => Err(ApiError::Server {
                    status: *status,
                    code: "LLM_ERROR".to_string(),
                    message: message.clone(),
                }),
            }
        }
    }

    struct BrokenClipboard;

    impl Clipboard for BrokenClipboard {
        fn set_text(&mut self, _text: &str) -> Result<(), CopyError> {
            Err(CopyError::Unavailable("no display".to_string()))
        }
    }

    fn ready_dashboard(text: &str) -> Dashboard {
        Dashboard {
            output: Output::Ready(text.to_string()),
            ..Dashboard::default()
        }
    }

    #[test]
    fn test_initial_state() {
        let dashboard = Dashboard::new();
        assert_eq!(dashboard.output(), &Output::Empty);
        assert!(!dashboard.is_busy());
        assert!(!dashboard.can_submit());
        assert!(!dashboard.can_copy());
        assert_eq!(dashboard.submit_label(), "Generate");
        assert_eq!(dashboard.copy_label(), "Copy to Clipboard");
        assert_eq!(dashboard.output_rows(), 7);
    }

    #[test]
    fn test_can_submit_requires_job_title() {
        let mut dashboard = Dashboard::new();
        dashboard.set_industry("Tech");
        dashboard.set_key_words("rust");
        dashboard.set_tone("formal");
        dashboard.set_num_words("100");
        assert!(!dashboard.can_submit());

        dashboard.set_job_title("Engineer");
        assert!(dashboard.can_submit());
    }

    #[test]
    fn test_cannot_submit_while_generating() {
        let mut dashboard = Dashboard::new();
        dashboard.set_job_title("Engineer");
        dashboard.is_generating = true;
        assert!(dashboard.is_busy());
        assert!(!dashboard.can_submit());
        assert_eq!(dashboard.submit_label(), "Generating...");
    }

    #[test]
    fn test_request_mirrors_fields() {
        let mut dashboard = Dashboard::new();
        dashboard.set_job_title("Nurse");
        dashboard.set_industry("Healthcare");
        dashboard.set_key_words("ICU");
        dashboard.set_tone("friendly");
        dashboard.set_num_words("250");

        let request = dashboard.request();
        assert_eq!(request.job_title, "Nurse");
        assert_eq!(request.industry, "Healthcare");
        assert_eq!(request.key_words, "ICU");
        assert_eq!(request.tone, "friendly");
        assert_eq!(request.num_words.target(), "250");
    }

    #[tokio::test]
    async fn test_submit_without_job_title_issues_no_request() {
        let api = StubApi::replying("unused");
        let mut dashboard = Dashboard::new();
        dashboard.set_industry("Tech");

        let err = dashboard.submit(&api).await.unwrap_err();
        assert!(matches!(err, SubmitError::NotReady));
        assert_eq!(api.calls(), 0);
        assert_eq!(dashboard.output(), &Output::Empty);
    }

    #[tokio::test]
    async fn test_submit_displays_trimmed_text() {
        let api = StubApi::replying("  Example description\n");
        let mut dashboard = Dashboard::new();
        dashboard.set_job_title("Nurse");

        dashboard.submit(&api).await.unwrap();

        assert_eq!(
            dashboard.output(),
            &Output::Ready("Example description".to_string())
        );
        assert!(!dashboard.is_busy());
        assert_eq!(api.calls(), 1);
    }

    #[tokio::test]
    async fn test_submit_failure_is_distinct_from_empty() {
        let api = StubApi::failing(500, "The job description could not be generated");
        let mut dashboard = Dashboard::new();
        dashboard.set_job_title("Nurse");

        let err = dashboard.submit(&api).await.unwrap_err();
        assert!(matches!(err, SubmitError::Generation(_)));
        assert!(!dashboard.is_busy());
        match dashboard.output() {
            Output::Failed(reason) => {
                assert!(reason.contains("The job description could not be generated"))
            }
            other => panic!("expected Failed, got {other:?}"),
        }
        assert!(!dashboard.can_copy());
    }

    #[tokio::test]
    async fn test_resubmission_overwrites_previous_result() {
        let mut dashboard = Dashboard::new();
        dashboard.set_job_title("Nurse");

        dashboard.submit(&StubApi::replying("first")).await.unwrap();
        dashboard.submit(&StubApi::replying("second")).await.unwrap();

        assert_eq!(dashboard.output().text(), "second");
    }

    #[test]
    fn test_output_rows_grow_with_lines() {
        assert_eq!(ready_dashboard("one line").output_rows(), 13);
        assert_eq!(ready_dashboard("a\nb\nc").output_rows(), 15);
        assert_eq!(ready_dashboard("").output_rows(), 7);
    }

    #[test]
    fn test_edit_output_only_when_ready() {
        let mut dashboard = ready_dashboard("draft");
        assert!(dashboard.edit_output("edited"));
        assert_eq!(dashboard.output().text(), "edited");

        let mut empty = Dashboard::new();
        assert!(!empty.edit_output("ignored"));
        assert_eq!(empty.output(), &Output::Empty);
    }

    #[test]
    fn test_copy_places_text_and_flips_label() {
        let mut dashboard = ready_dashboard("Foo");
        let mut clipboard = MemoryClipboard::default();

        dashboard.copy(&mut clipboard).unwrap();

        assert_eq!(clipboard.contents(), Some("Foo"));
        assert!(dashboard.is_copied());
        assert_eq!(dashboard.copy_label(), "Copied");
    }

    #[test]
    fn test_copy_uses_edited_text() {
        let mut dashboard = ready_dashboard("Foo");
        dashboard.edit_output("Bar");
        let mut clipboard = MemoryClipboard::default();

        dashboard.copy(&mut clipboard).unwrap();
        assert_eq!(clipboard.contents(), Some("Bar"));
    }

    #[test]
    fn test_copy_with_nothing_to_copy() {
        let mut dashboard = Dashboard::new();
        let mut clipboard = MemoryClipboard::default();

        let err = dashboard.copy(&mut clipboard).unwrap_err();
        assert!(matches!(err, CopyError::NothingToCopy));
        assert_eq!(clipboard.contents(), None);
        assert!(!dashboard.is_copied());
    }

    #[test]
    fn test_clipboard_failure_is_surfaced() {
        let mut dashboard = ready_dashboard("Foo");

        let err = dashboard.copy(&mut BrokenClipboard).unwrap_err();
        assert!(matches!(err, CopyError::Unavailable(_)));
        assert!(!dashboard.is_copied());
        assert_eq!(dashboard.copy_label(), "Copy to Clipboard");
    }

    #[tokio::test]
    async fn test_copied_indicator_persists_across_regeneration() {
        let mut dashboard = Dashboard::new();
        dashboard.set_job_title("Nurse");
        dashboard.submit(&StubApi::replying("first")).await.unwrap();
        dashboard.copy(&mut MemoryClipboard::default()).unwrap();

        dashboard.submit(&StubApi::replying("second")).await.unwrap();
        assert!(dashboard.is_copied());
    }
}
