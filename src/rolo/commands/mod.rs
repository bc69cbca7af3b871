use crate::config::RoloConfig;
use crate::model::Contact;

pub mod add;
pub mod config;
pub mod delete;
pub mod edit;
pub mod list;
pub mod view;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A transient notification for the user, the CLI analog of a toast.
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

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected: Vec<Contact>,
    pub listed: Vec<Contact>,
    pub config: Option<RoloConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected(mut self, contacts: Vec<Contact>) -> Self {
        self.affected = contacts;
        self
    }

    pub fn with_listed(mut self, contacts: Vec<Contact>) -> Self {
        self.listed = contacts;
        self
    }

    pub fn with_config(mut self, config: RoloConfig) -> Self {
        self.config = Some(config);
        self
    }
}
