//! Structured bot messages.
//!
//! Business logic emits these; `crate::render` turns them into text or
//! HTML.

use serde::Serialize;

use crate::advice::TipList;
use crate::budget::BudgetPlan;

pub const PROMPT_STUDENT: &str = "Great! Let's create a budget plan for you. Are you a student?";
pub const FAREWELL: &str = "Alright. If you change your mind, just let me know.";
pub const PROMPT_TRANSPORT: &str = "What is your primary mode of transport?";
pub const PROMPT_WORK: &str = "Do you work?";
pub const PROMPT_FOOD: &str = "What are your typical food habits?";
pub const NOT_STUDENT_OR_WORKER: &str =
    "I can only create budget plans for students or workers at the moment.";
pub const OVERSPEND_WARNING: &str =
    "You spend more than you earn. Try to reduce your data and snack costs.";
pub const PROMPT_EMPLOYMENT: &str =
    "Let's find some budgeting tips for you. What is your employment status?";
pub const PROMPT_INCOME: &str = "What is your income level?";
pub const NO_ADVICE: &str = "Sorry, I don't have budgeting tips for that combination yet.";
pub const BADDIE_REPLY: &str = "Yes, a baddie with a body! ❤️";
pub const APOLOGY: &str = "I'm still under development and learning new things every day. \
     I can't answer that right now, but I'm working on it!";

/// The team credited when the user says thanks.
pub const CREDITED_TEAM: [&str; 3] = ["Delphine", "Tendai", "Diana"];

/// A message from the bot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BotMessage {
    /// Plain conversational text.
    Text { text: String },
    /// A computed budget plan.
    Plan { plan: BudgetPlan },
    /// A highlighted warning.
    Warning { text: String },
    /// A titled list of tips.
    Tips { tips: TipList },
    /// Credits for the people behind the bot.
    Credits { team: Vec<String> },
    /// A reply from the chat endpoint. Already HTML-safe.
    Remote { html: String },
}

impl BotMessage {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::Warning { text: text.into() }
    }

    pub fn credits() -> Self {
        Self::Credits {
            team: CREDITED_TEAM.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn apology() -> Self {
        Self::text(APOLOGY)
    }
}
