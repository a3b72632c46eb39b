//! Keyword routing for typed (free-text) input.

use super::message::{BADDIE_REPLY, BotMessage};
use crate::advice;

/// What a typed message asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    BudgetingTips,
    /// Answered locally with a fixed reply.
    Canned(Canned),
    Clear,
    /// Anything else: hand it to the chat endpoint.
    Forward,
}

/// Intents with a fixed reply that leave the conversation state alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Canned {
    SavingTips,
    Thanks,
    Baddie,
}

impl Canned {
    pub fn reply(self) -> BotMessage {
        match self {
            Self::SavingTips => BotMessage::Tips {
                tips: advice::saving_tips(),
            },
            Self::Thanks => BotMessage::credits(),
            Self::Baddie => BotMessage::text(BADDIE_REPLY),
        }
    }
}

/// Keywords in priority order. Matching is a case-insensitive substring
/// test; the first hit wins.
const KEYWORDS: &[(&str, Intent)] = &[
    ("budgeting tips", Intent::BudgetingTips),
    ("saving tips", Intent::Canned(Canned::SavingTips)),
    ("thank you", Intent::Canned(Canned::Thanks)),
    ("thanks", Intent::Canned(Canned::Thanks)),
    ("baddie", Intent::Canned(Canned::Baddie)),
];

/// Classify a typed message.
///
/// "clear" only counts as the whole message, so "make that clearer" is
/// not a request to wipe the chat.
pub fn classify(message: &str) -> Intent {
    let lower = message.trim().to_lowercase();
    if let Some((_, intent)) = KEYWORDS.iter().find(|(keyword, _)| lower.contains(keyword)) {
        return *intent;
    }
    if lower == "clear" {
        return Intent::Clear;
    }
    Intent::Forward
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_are_case_insensitive_substrings() {
        assert_eq!(classify("Any BUDGETING TIPS for me?"), Intent::BudgetingTips);
        assert_eq!(classify("saving tips please"), Intent::Canned(Canned::SavingTips));
        assert_eq!(classify("Thank you so much"), Intent::Canned(Canned::Thanks));
        assert_eq!(classify("ok THANKS"), Intent::Canned(Canned::Thanks));
        assert_eq!(classify("are you a baddie"), Intent::Canned(Canned::Baddie));
    }

    #[test]
    fn clear_must_be_the_whole_message() {
        assert_eq!(classify("Clear"), Intent::Clear);
        assert_eq!(classify("  CLEAR "), Intent::Clear);
        assert_eq!(classify("can you make that clearer?"), Intent::Forward);
        assert_eq!(classify("clear it"), Intent::Forward);
    }

    #[test]
    fn priority_order() {
        assert_eq!(
            classify("thanks, now budgeting tips"),
            Intent::BudgetingTips
        );
        assert_eq!(classify("saving tips, thanks"), Intent::Canned(Canned::SavingTips));
        assert_eq!(classify("thanks baddie"), Intent::Canned(Canned::Thanks));
    }

    #[test]
    fn other_text_is_forwarded() {
        assert_eq!(classify("what is a loan"), Intent::Forward);
        assert_eq!(classify(""), Intent::Forward);
        assert_eq!(classify("tips"), Intent::Forward);
    }

    #[test]
    fn canned_replies() {
        assert_eq!(Canned::Thanks.reply(), BotMessage::credits());
        assert_eq!(Canned::Baddie.reply(), BotMessage::text(BADDIE_REPLY));
        assert!(matches!(Canned::SavingTips.reply(), BotMessage::Tips { .. }));
    }
}
