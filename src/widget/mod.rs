//! Chat widget: the controller behind the chat window.
//!
//! Owns the transcript, the three input fields, the buttons currently on
//! offer and the conversation `Session`. Button presses go to the state
//! machine; typed messages go through keyword routing and, failing that,
//! to the chat backend.

pub mod transcript;

use std::sync::Arc;

use tracing::{debug, warn};

use crate::conversation::{
    self, BotMessage, InputFields, Intent, Session, Transition, classify,
};
use crate::remote::{ChatBackend, ChatRequest};

pub use transcript::{Entry, Transcript, TranscriptEntry};

/// What changed after one user action.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WidgetUpdate {
    /// New bot messages, in order.
    pub messages: Vec<BotMessage>,
    /// Whether the transcript was wiped.
    pub transcript_cleared: bool,
}

pub struct ChatWidget {
    backend: Arc<dyn ChatBackend>,
    session: Session,
    fields: InputFields,
    transcript: Transcript,
    buttons: Vec<String>,
}

impl ChatWidget {
    pub fn new(backend: Arc<dyn ChatBackend>) -> Self {
        Self {
            backend,
            session: Session::new(),
            fields: InputFields::default(),
            transcript: Transcript::new(),
            buttons: Vec::new(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn fields(&self) -> &InputFields {
        &self.fields
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Buttons currently on offer.
    pub fn buttons(&self) -> &[String] {
        &self.buttons
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.fields.message = message.into();
    }

    pub fn set_allowance(&mut self, allowance: impl Into<String>) {
        self.fields.allowance = allowance.into();
    }

    pub fn set_expenses(&mut self, expenses: impl Into<String>) {
        self.fields.expenses = expenses.into();
    }

    /// Handle a button press.
    ///
    /// The label is echoed into the transcript even when the state machine
    /// has no transition for it.
    pub fn press_button(&mut self, label: &str) -> WidgetUpdate {
        self.transcript.push_user(label);
        let session = std::mem::take(&mut self.session);
        let transition = conversation::advance(session, label, &self.fields);
        self.apply(transition)
    }

    fn apply(&mut self, transition: Transition) -> WidgetUpdate {
        let Transition {
            session,
            messages,
            buttons,
            clear_budget_fields,
            ..
        } = transition;

        self.session = session;
        self.buttons = buttons;
        if clear_budget_fields {
            self.fields.clear_budget();
        }
        for message in &messages {
            self.transcript.push_bot(message.clone());
        }
        WidgetUpdate {
            messages,
            transcript_cleared: false,
        }
    }

    fn reply_locally(&mut self, message: String, reply: BotMessage) -> WidgetUpdate {
        self.transcript.push_user(message);
        self.fields.message.clear();
        self.buttons.clear();
        self.transcript.push_bot(reply.clone());
        WidgetUpdate {
            messages: vec![reply],
            transcript_cleared: false,
        }
    }

    /// Handle the send action with whatever is in the input fields.
    pub async fn send_message(&mut self) -> WidgetUpdate {
        let message = self.fields.message.trim().to_string();
        let intent = classify(&message);
        debug!(?intent, state = %self.session.state, "Routing typed message");

        match intent {
            Intent::BudgetingTips => {
                self.transcript.push_user(message);
                self.fields.message.clear();
                let session = std::mem::take(&mut self.session);
                self.apply(conversation::enter_budgeting_tips(session))
            }
            Intent::Canned(canned) => self.reply_locally(message, canned.reply()),
            Intent::Clear => {
                // The conversation state is left alone on purpose; only what
                // the user sees is wiped.
                self.transcript.clear();
                self.fields.clear_all();
                self.buttons.clear();
                WidgetUpdate {
                    messages: Vec::new(),
                    transcript_cleared: true,
                }
            }
            Intent::Forward => self.forward(message).await,
        }
    }

    async fn forward(&mut self, message: String) -> WidgetUpdate {
        let allowance = self.fields.allowance.clone();
        let expenses = self.fields.expenses.clone();

        if message.is_empty() && (allowance.is_empty() || expenses.is_empty()) {
            return WidgetUpdate::default();
        }

        let user_message = if message.is_empty() {
            format!("Calculate savings with allowance: {allowance} and expenses: {expenses}")
        } else {
            message
        };

        self.transcript.push_user(user_message.clone());
        self.fields.message.clear();
        self.buttons.clear();

        let request = ChatRequest {
            message: user_message,
            allowance,
            expenses,
        };

        let reply = match self.backend.send(&request).await {
            Ok(reply) => {
                self.buttons = reply.buttons;
                BotMessage::Remote { html: reply.reply }
            }
            Err(e) => {
                warn!(error = %e, "Chat request failed");
                BotMessage::apology()
            }
        };

        self.transcript.push_bot(reply.clone());
        WidgetUpdate {
            messages: vec![reply],
            transcript_cleared: false,
        }
    }
}
