//! Editing session around a document buffer
//!
//! A [`Session`] is the explicit context the editor integration threads
//! through its entry points: `load` fills the buffer from the live highlight
//! table, `reflect` applies the buffer's document back to the editor, and
//! `colorscheme` renders it as a file.

use crate::host::{CommandSink, DocumentBuffer, Extractor, HighlightHost, HostError, RenderMode};
use crate::scheme::{self, ConfigModel, ValidationError};

/// Colors name used while previewing edits
pub const DEFAULT_PREVIEW_NAME: &str = "colordinate";

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Host(#[from] HostError),
}

#[derive(Debug)]
pub struct Session<B> {
    buffer: B,
    preview_name: String,
    extractor: Extractor,
}

impl<B: DocumentBuffer> Session<B> {
    pub fn new(buffer: B) -> Self {
        Self {
            buffer,
            preview_name: DEFAULT_PREVIEW_NAME.to_string(),
            extractor: Extractor::new(),
        }
    }

    pub fn with_preview_name(mut self, name: impl Into<String>) -> Self {
        self.preview_name = name.into();
        self
    }

    pub fn with_render_mode(mut self, mode: RenderMode) -> Self {
        self.extractor = Extractor::with_mode(mode);
        self
    }

    pub fn buffer(&self) -> &B {
        &self.buffer
    }

    /// Replace the buffer contents with the host's current highlight state
    pub fn load<H: HighlightHost + ?Sized>(&mut self, host: &mut H) -> Result<ConfigModel, SessionError> {
        let model = self.extractor.extract(host)?;
        self.buffer.replace_text(&scheme::to_document(&model))?;
        tracing::info!("Loaded {} highlight groups into the buffer", model.len());
        Ok(model)
    }

    /// Model of the document currently in the buffer
    pub fn current(&self) -> Result<ConfigModel, SessionError> {
        let text = self.buffer.read_text()?;
        Ok(scheme::parse(&text)?)
    }

    /// Apply the buffer's document to the host
    ///
    /// Nothing is executed when the document does not validate.
    pub fn reflect<S: CommandSink + ?Sized>(&self, sink: &mut S) -> Result<ConfigModel, SessionError> {
        let model = self.current()?;
        sink.execute(&scheme::preview_preamble(&self.preview_name))?;
        sink.execute(&scheme::to_script(&model))?;
        tracing::debug!("Reflected {} groups", model.len());
        Ok(model)
    }

    /// Zero-based buffer line defining `group`
    pub fn jump(&self, group: &str) -> Result<Option<usize>, SessionError> {
        let text = self.buffer.read_text()?;
        Ok(scheme::locate_group(&text, group))
    }

    /// Full colorscheme file for the buffer's document
    pub fn colorscheme(&self, colors_name: &str) -> Result<String, SessionError> {
        let model = self.current()?;
        Ok(scheme::colorscheme(colors_name, &model))
    }

    /// `(group, pattern)` for marking each group name inside the buffer
    pub fn highlight_patterns(&self) -> Result<Vec<(String, String)>, SessionError> {
        let model = self.current()?;
        Ok(model
            .names()
            .map(|name| (name.to_string(), scheme::match_pattern(name)))
            .collect())
    }
}
