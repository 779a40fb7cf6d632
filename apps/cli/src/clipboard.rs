use thiserror::Error;

#[derive(Debug, Error)]
pub enum CopyError {
    #[error("there is no generated text to copy")]
    NothingToCopy,

    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
}

impl From<arboard::Error> for CopyError {
    fn from(e: arboard::Error) -> Self {
        CopyError::Unavailable(e.to_string())
    }
}

/// Destination for the copy action.
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<(), CopyError>;
}

/// The operating system clipboard.
///
/// On X11 the selection is owned by this process, so the contents only outlive
/// it when a clipboard manager is running.
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    pub fn new() -> Result<Self, CopyError> {
        let inner = arboard::Clipboard::new()?;
        Ok(Self { inner })
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), CopyError> {
        self.inner.set_text(text)?;
        Ok(())
    }
}

/// In-process clipboard for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

#[cfg(test)]
impl MemoryClipboard {
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

#[cfg(test)]
impl Clipboard for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), CopyError> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clipboard_errors_become_unavailable() {
        let err = CopyError::from(arboard::Error::ClipboardNotSupported);
        match &err {
            CopyError::Unavailable(reason) => assert!(!reason.is_empty()),
            other => panic!("expected Unavailable, got {other:?}"),
        }
        assert!(err.to_string().starts_with("clipboard unavailable: "));
    }
}
