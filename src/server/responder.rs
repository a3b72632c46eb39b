//! Reply selection for `POST /api/chat`.
//!
//! Checked in order: savings from the two numeric fields, empty message,
//! greeting, bot history, purpose, arithmetic, built-in glossary, online
//! dictionary, and finally a fallback.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::debug;

use super::dictionary::{DefinitionSource, find_definition};
use super::{calc, glossary};
use crate::budget::format_money;
use crate::budget::money::parse_strict;
use crate::remote::{ChatReply, ChatRequest};
use crate::render::escape_html;

pub const EMPTY_MESSAGE: &str = "Please provide a message.";
pub const GREETING: &str = "Hi! My name is Dolla your Finance bot, how can i help you today? 😊";
pub const HISTORY: &str =
    "I was created by a brilliant developer to help people with their finances. 😊";
pub const PURPOSE: &str = "I help users manage their money by taking their allowances and \
     expenses to create a budget summary, spending insights and overall financial health.";
pub const FALLBACK: &str = "I'm sorry, I don't have an answer for that. I can define financial \
     terms, or you can ask me to make a calculation.";

const GREETING_WORDS: [&str; 3] = ["hello", "hi", "hey"];
const HISTORY_PHRASES: [&str; 2] = ["history", "who are you"];
const PURPOSE_PHRASES: [&str; 3] = ["function", "purpose", "what do you do"];

/// Builds replies for chat requests. Holds no per-user state.
pub struct Responder {
    dictionary: Option<Arc<dyn DefinitionSource>>,
}

impl Responder {
    pub fn new(dictionary: Option<Arc<dyn DefinitionSource>>) -> Self {
        Self { dictionary }
    }

    pub async fn respond(&self, request: &ChatRequest) -> ChatReply {
        if let Some(reply) = savings_reply(&request.allowance, &request.expenses) {
            debug!("Answered with savings summary");
            return reply;
        }

        let message = request.message.trim();
        if message.is_empty() {
            return ChatReply::text(EMPTY_MESSAGE);
        }

        if let Some(reply) = canned_reply(message) {
            return reply;
        }

        if let Some(dictionary) = &self.dictionary {
            if let Some(definition) = find_definition(dictionary.as_ref(), message).await {
                return ChatReply::text(escape_html(&definition));
            }
        }

        ChatReply::text(FALLBACK)
    }
}

/// Savings summary when both numeric fields hold numbers whose difference
/// fits in a `Decimal`.
fn savings_reply(allowance: &str, expenses: &str) -> Option<ChatReply> {
    if allowance.is_empty() || expenses.is_empty() {
        return None;
    }
    let allowance = parse_strict(allowance)?;
    let expenses = parse_strict(expenses)?;
    // Amounts too large to subtract get no savings summary.
    let savings = allowance.checked_sub(expenses)?;

    if savings < Decimal::ZERO {
        return Some(ChatReply::text(format!(
            "It looks like your expenses are higher than your allowance. \
             You have a deficit of Ksh{}.<br><br>\
             <b>Here are some tips to help you manage your budget:</b><br>\
             - Track your spending to see where your money is going.<br>\
             - Create a budget to plan how you'll spend your money.<br>\
             - Cut back on non-essential spending.<br><br>\
             <b>Consider categorizing your expenses to see where you can save, for example:</b><br>\
             - Food<br>\
             - Transportation<br>\
             - Entertainment<br>\
             - Personal Care",
            format_money(savings.abs())
        )));
    }

    Some(
        ChatReply::text(format!(
            "Based on your allowance and expenses, your savings are: Ksh{}.<br><br>\
             Would you like me to create a budget plan for you?",
            format_money(savings)
        ))
        .with_buttons(&["Yes", "No"]),
    )
}

/// Replies that need no network: greeting, history, purpose, arithmetic
/// and the built-in glossary.
fn canned_reply(message: &str) -> Option<ChatReply> {
    let lower = message.to_lowercase();

    if GREETING_WORDS.iter().any(|w| lower.contains(w)) {
        return Some(ChatReply::text(GREETING));
    }
    if HISTORY_PHRASES.iter().any(|p| lower.contains(p)) {
        return Some(ChatReply::text(HISTORY));
    }
    if PURPOSE_PHRASES.iter().any(|p| lower.contains(p)) {
        return Some(ChatReply::text(PURPOSE));
    }
    if let Some(result) = calc::evaluate(message) {
        return Some(ChatReply::text(result));
    }
    glossary::define(message)
        .map(|definition| ChatReply::text(format!("{definition}<br><br>I hope you learned 😊")))
}
