//! Budgeting conversation: the fixed dialog tree behind the chat widget.
//!
//! The user answers button prompts (student? transport? food? work?) and
//! the machine ends in a budget plan or a block of advice. A `Session`
//! value carries the state between turns; every transition takes it by
//! value and hands back the updated one.

pub mod intent;
pub mod machine;
pub mod message;
pub mod state;

pub use intent::{Canned, Intent, classify};
pub use machine::{Transition, advance, enter_budgeting_tips};
pub use message::BotMessage;
pub use state::{BudgetData, ConversationState, InputFields, Session};
