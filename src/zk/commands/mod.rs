use crate::category::NoteCategory;
use crate::config::ResolvedPaths;
use std::path::PathBuf;

pub mod check;
pub mod init;
pub mod note;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// The note written or resolved by this command, if any.
    pub note_path: Option<PathBuf>,
    pub resolved: Vec<(NoteCategory, ResolvedPaths)>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_note_path(mut self, path: PathBuf) -> Self {
        self.note_path = Some(path);
        self
    }

    pub fn with_resolved(mut self, resolved: Vec<(NoteCategory, ResolvedPaths)>) -> Self {
        self.resolved = resolved;
        self
    }
}
