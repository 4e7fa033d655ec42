use anyhow::{Context, Result};

/// Destination for exported text
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// OS clipboard via arboard.
///
/// Keep this alive for the whole session: on X11 the contents disappear
/// once the owning handle is dropped.
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    pub fn new() -> Result<Self> {
        let inner = arboard::Clipboard::new().context("Failed to open system clipboard")?;
        Ok(Self { inner })
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.inner
            .set_text(text)
            .context("Failed to write export to system clipboard")
    }
}
