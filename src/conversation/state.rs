//! Conversation state and the per-session answer accumulator.

use serde::{Deserialize, Serialize};

use crate::advice::{EmploymentStatus, IncomeLevel};
use crate::budget::{Amount, FoodHabit, TransportMode};

/// Position in the fixed dialog tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversationState {
    #[default]
    Start,
    AskStudent,
    AskTransport,
    AskFoodHabits,
    AskWork,
    AskEmploymentStatus,
    AskIncomeLevel,
}

impl std::fmt::Display for ConversationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Start => "start",
            Self::AskStudent => "ask_student",
            Self::AskTransport => "ask_transport",
            Self::AskFoodHabits => "ask_food_habits",
            Self::AskWork => "ask_work",
            Self::AskEmploymentStatus => "ask_employment_status",
            Self::AskIncomeLevel => "ask_income_level",
        };
        write!(f, "{s}")
    }
}

/// Answers collected so far. Cleared whenever a terminal branch completes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BudgetData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowance: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expenses: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transport_mode: Option<TransportMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub food_habit: Option<FoodHabit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employment_status: Option<EmploymentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub income_level: Option<IncomeLevel>,
}

impl BudgetData {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// One user's conversation: current state plus accumulated answers.
///
/// Moved into and returned from every transition; nothing else mutates it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Session {
    pub state: ConversationState,
    pub data: BudgetData,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }
}

/// The raw contents of the widget's input fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputFields {
    pub message: String,
    pub allowance: String,
    pub expenses: String,
}

impl InputFields {
    pub fn new(
        message: impl Into<String>,
        allowance: impl Into<String>,
        expenses: impl Into<String>,
    ) -> Self {
        Self {
            message: message.into(),
            allowance: allowance.into(),
            expenses: expenses.into(),
        }
    }

    /// Empty the allowance and expenses fields.
    pub fn clear_budget(&mut self) {
        self.allowance.clear();
        self.expenses.clear();
    }

    pub fn clear_all(&mut self) {
        self.message.clear();
        self.clear_budget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_serde() {
        use ConversationState::*;
        let states = [
            Start,
            AskStudent,
            AskTransport,
            AskFoodHabits,
            AskWork,
            AskEmploymentStatus,
            AskIncomeLevel,
        ];
        for state in states {
            let display = format!("{state}");
            let json = serde_json::to_string(&state).unwrap();
            assert_eq!(format!("\"{display}\""), json, "mismatch for {state:?}");
        }
    }

    #[test]
    fn default_session_is_at_start_and_empty() {
        let session = Session::new();
        assert_eq!(session.state, ConversationState::Start);
        assert!(session.data.is_empty());
    }

    #[test]
    fn empty_data_serializes_to_empty_object() {
        let json = serde_json::to_value(BudgetData::default()).unwrap();
        assert_eq!(json, serde_json::json!({}));
    }

    #[test]
    fn clearing_fields() {
        let mut fields = InputFields::new("hi", "100", "50");
        fields.clear_budget();
        assert_eq!(fields, InputFields::new("hi", "", ""));
        fields.clear_all();
        assert_eq!(fields, InputFields::default());
    }
}
