//! Static advice content: budgeting tips keyed by employment status and
//! income level, plus the general saving-tips list.

mod table;

use serde::Serialize;

pub use table::{ADVICE_TABLE, AdviceEntry, SAVING_TIPS};

/// Employment status, as chosen from the offered buttons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentStatus {
    Employed,
    SelfEmployed,
    Unemployed,
    Unlisted(String),
}

impl EmploymentStatus {
    pub const OPTIONS: [&'static str; 3] = ["Employed", "Self-employed", "Unemployed"];

    pub fn from_label(label: &str) -> Self {
        match label {
            "Employed" => Self::Employed,
            "Self-employed" => Self::SelfEmployed,
            "Unemployed" => Self::Unemployed,
            other => Self::Unlisted(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Employed => "Employed",
            Self::SelfEmployed => "Self-employed",
            Self::Unemployed => "Unemployed",
            Self::Unlisted(label) => label,
        }
    }
}

/// Income level, as chosen from the offered buttons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IncomeLevel {
    Low,
    Medium,
    High,
    Unlisted(String),
}

impl IncomeLevel {
    pub const OPTIONS: [&'static str; 3] = ["Low", "Medium", "High"];

    pub fn from_label(label: &str) -> Self {
        match label {
            "Low" => Self::Low,
            "Medium" => Self::Medium,
            "High" => Self::High,
            other => Self::Unlisted(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Unlisted(label) => label,
        }
    }
}

/// A titled, ordered list of tips ready to show the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TipList {
    pub title: String,
    pub tips: Vec<String>,
}

/// Look up budgeting advice for a status/income pair.
///
/// Returns `None` when either answer is not one of the offered options.
pub fn lookup(status: &EmploymentStatus, income: &IncomeLevel) -> Option<TipList> {
    ADVICE_TABLE
        .iter()
        .find(|entry| &entry.status == status && &entry.income == income)
        .map(|entry| TipList {
            title: entry.title.to_string(),
            tips: entry.tips.iter().map(|t| t.to_string()).collect(),
        })
}

/// The general saving-tips list.
pub fn saving_tips() -> TipList {
    TipList {
        title: "Here are some saving tips:".to_string(),
        tips: SAVING_TIPS.iter().map(|t| t.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_offered_pair_has_advice() {
        for status in EmploymentStatus::OPTIONS {
            for income in IncomeLevel::OPTIONS {
                let advice = lookup(
                    &EmploymentStatus::from_label(status),
                    &IncomeLevel::from_label(income),
                )
                .unwrap_or_else(|| panic!("missing advice for {status}/{income}"));
                assert!(!advice.title.is_empty());
                assert!(advice.tips.len() >= 3, "{status}/{income} has too few tips");
            }
        }
    }

    #[test]
    fn table_has_no_duplicate_keys() {
        for (i, a) in ADVICE_TABLE.iter().enumerate() {
            for b in &ADVICE_TABLE[i + 1..] {
                assert!(
                    !(a.status == b.status && a.income == b.income),
                    "duplicate entry for {:?}/{:?}",
                    a.status,
                    a.income
                );
            }
        }
    }

    #[test]
    fn lookup_preserves_tip_order() {
        let advice = lookup(&EmploymentStatus::Unemployed, &IncomeLevel::Low).unwrap();
        let entry = ADVICE_TABLE
            .iter()
            .find(|e| e.status == EmploymentStatus::Unemployed && e.income == IncomeLevel::Low)
            .unwrap();
        let expected: Vec<String> = entry.tips.iter().map(|t| t.to_string()).collect();
        assert_eq!(advice.tips, expected);
    }

    #[test]
    fn unlisted_answers_have_no_advice() {
        assert!(lookup(&EmploymentStatus::from_label("Retired"), &IncomeLevel::Low).is_none());
        assert!(lookup(&EmploymentStatus::Employed, &IncomeLevel::from_label("Huge")).is_none());
    }

    #[test]
    fn saving_tips_are_not_empty() {
        let tips = saving_tips();
        assert_eq!(tips.tips.len(), SAVING_TIPS.len());
        assert!(tips.tips.len() >= 5);
    }
}
