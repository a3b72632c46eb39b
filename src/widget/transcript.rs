//! The visible chat history.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::conversation::BotMessage;
use crate::render::{Html, Renderer, escape_html};

/// Who said it, and what.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "sender", rename_all = "snake_case")]
pub enum Entry {
    User { text: String },
    Bot { message: BotMessage },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranscriptEntry {
    pub at: DateTime<Utc>,
    #[serde(flatten)]
    pub entry: Entry,
}

/// Ordered list of chat entries.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_user(&mut self, text: impl Into<String>) {
        self.push(Entry::User { text: text.into() });
    }

    pub fn push_bot(&mut self, message: BotMessage) {
        self.push(Entry::Bot { message });
    }

    fn push(&mut self, entry: Entry) {
        self.entries.push(TranscriptEntry {
            at: Utc::now(),
            entry,
        });
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render the whole transcript as the widget's message list.
    pub fn to_html(&self) -> String {
        self.entries
            .iter()
            .map(|e| match &e.entry {
                Entry::User { text } => {
                    format!("<div class=\"message user-message\">{}</div>", escape_html(text))
                }
                Entry::Bot { message } => {
                    format!("<div class=\"message bot-message\">{}</div>", Html.render(message))
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
