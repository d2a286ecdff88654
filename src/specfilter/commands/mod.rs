//! Command layer: operates on Rust values and returns [`CmdResult`].
//! Printing belongs to the binary.

use crate::model::Country;

pub mod demo;
pub mod filter;
pub mod list;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
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

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// A titled group of countries, e.g. one scenario of the demo.
#[derive(Debug, Clone)]
pub struct Section {
    pub title: String,
    pub countries: Vec<Country>,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed: Vec<Country>,
    pub sections: Vec<Section>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed(mut self, countries: Vec<Country>) -> Self {
        self.listed = countries;
        self
    }

    pub fn with_section(mut self, title: impl Into<String>, countries: Vec<Country>) -> Self {
        self.sections.push(Section {
            title: title.into(),
            countries,
        });
        self
    }
}
