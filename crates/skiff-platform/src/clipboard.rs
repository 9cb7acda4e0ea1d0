use skiff_common::PlatformError;

/// System clipboard backed by `arboard`.
///
/// On Linux reads come from the primary selection and writes go to both the
/// primary selection and the clipboard.
pub struct Clipboard {
    inner: arboard::Clipboard,
}

impl Clipboard {
    /// Creates a new clipboard handle.
    pub fn new() -> Result<Self, PlatformError> {
        let inner =
            arboard::Clipboard::new().map_err(|e| PlatformError::ClipboardError(e.to_string()))?;
        Ok(Self { inner })
    }

    /// Reads text from the selection.
    pub fn get_text(&mut self) -> Result<String, PlatformError> {
        #[cfg(target_os = "linux")]
        {
            use arboard::{GetExtLinux, LinuxClipboardKind};
            if let Ok(text) = self
                .inner
                .get()
                .clipboard(LinuxClipboardKind::Primary)
                .text()
            {
                return Ok(text);
            }
        }
        self.inner
            .get_text()
            .map_err(|e| PlatformError::ClipboardError(e.to_string()))
    }

    /// Writes text to the selection.
    pub fn set_text(&mut self, text: &str) -> Result<(), PlatformError> {
        #[cfg(target_os = "linux")]
        {
            use arboard::{LinuxClipboardKind, SetExtLinux};
            self.inner
                .set()
                .clipboard(LinuxClipboardKind::Primary)
                .text(text.to_owned())
                .map_err(|e| PlatformError::ClipboardError(e.to_string()))?;
        }
        self.inner
            .set_text(text.to_owned())
            .map_err(|e| PlatformError::ClipboardError(e.to_string()))
    }
}
