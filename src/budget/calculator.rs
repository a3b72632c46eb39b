//! Budget plan computation.
//!
//! A plan splits the user's total expenses into transport, food and "other"
//! by fixed percentages. Students get percentages driven by their transport
//! and food answers; workers always get 40/30/30.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use tracing::warn;

use super::money::Amount;

/// Primary mode of transport, as chosen from the offered buttons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportMode {
    Walking,
    PublicTransport,
    PersonalCar,
    /// A label that isn't one of the offered options. Contributes 0%.
    Unlisted(String),
}

impl TransportMode {
    /// Button labels offered when asking for the transport mode.
    pub const OPTIONS: [&'static str; 3] = ["Walking", "Public Transport", "Personal Car"];

    pub fn from_label(label: &str) -> Self {
        match label {
            "Walking" => Self::Walking,
            "Public Transport" => Self::PublicTransport,
            "Personal Car" => Self::PersonalCar,
            other => Self::Unlisted(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Walking => "Walking",
            Self::PublicTransport => "Public Transport",
            Self::PersonalCar => "Personal Car",
            Self::Unlisted(label) => label,
        }
    }

    /// Share of expenses allotted to transport.
    pub fn share(&self) -> Decimal {
        match self {
            Self::Walking => dec!(0.05),
            Self::PublicTransport => dec!(0.15),
            Self::PersonalCar => dec!(0.30),
            Self::Unlisted(_) => Decimal::ZERO,
        }
    }
}

/// Typical food habit, as chosen from the offered buttons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodHabit {
    CookAtHome,
    SchoolCafeteria,
    OrderTakeout,
    /// A label that isn't one of the offered options. Contributes 0%.
    Unlisted(String),
}

impl FoodHabit {
    /// Button labels offered when asking for food habits.
    pub const OPTIONS: [&'static str; 3] = ["Cook at home", "Eat at school cafeteria", "Order takeout"];

    pub fn from_label(label: &str) -> Self {
        match label {
            "Cook at home" => Self::CookAtHome,
            "Eat at school cafeteria" => Self::SchoolCafeteria,
            "Order takeout" => Self::OrderTakeout,
            other => Self::Unlisted(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::CookAtHome => "Cook at home",
            Self::SchoolCafeteria => "Eat at school cafeteria",
            Self::OrderTakeout => "Order takeout",
            Self::Unlisted(label) => label,
        }
    }

    /// Share of expenses allotted to food.
    pub fn share(&self) -> Decimal {
        match self {
            Self::CookAtHome => dec!(0.30),
            Self::SchoolCafeteria => dec!(0.40),
            Self::OrderTakeout => dec!(0.50),
            Self::Unlisted(_) => Decimal::ZERO,
        }
    }
}

/// Who the plan was built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanKind {
    Student,
    Worker,
}

/// Percentages of expenses per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Split {
    pub transport: Decimal,
    pub food: Decimal,
    pub other: Decimal,
}

impl Split {
    /// Fixed split used for every worker plan.
    pub const WORKER: Split = Split {
        transport: dec!(0.4),
        food: dec!(0.3),
        other: dec!(0.3),
    };

    /// Student split: "other" is whatever transport and food leave over.
    /// Not clamped, so it can go negative for out-of-range shares.
    pub fn student(transport: &TransportMode, food: &FoodHabit) -> Self {
        let transport = transport.share();
        let food = food.share();
        Self {
            transport,
            food,
            other: Decimal::ONE - transport - food,
        }
    }
}

/// A computed budget plan. Values are unrounded; rounding is a display
/// concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetPlan {
    pub kind: PlanKind,
    pub allowance: Decimal,
    /// The allowance as typed, echoed back unrounded in the plan.
    pub entered_allowance: Amount,
    pub expenses: Decimal,
    pub split: Split,
    pub transport_cost: Decimal,
    pub food_cost: Decimal,
    pub other_cost: Decimal,
    pub savings: Decimal,
}

impl BudgetPlan {
    /// Amounts whose arithmetic overflows `Decimal` compute as zero, the
    /// same way unparseable input does.
    fn compute(kind: PlanKind, allowance: Decimal, expenses: Decimal, split: Split) -> Self {
        Self::try_compute(kind, allowance, expenses, split).unwrap_or_else(|| {
            warn!(%allowance, %expenses, "Budget amounts overflow, computing as zero");
            Self {
                kind,
                allowance: Decimal::ZERO,
                entered_allowance: Amount::Value(allowance),
                expenses: Decimal::ZERO,
                split,
                transport_cost: Decimal::ZERO,
                food_cost: Decimal::ZERO,
                other_cost: Decimal::ZERO,
                savings: Decimal::ZERO,
            }
        })
    }

    fn try_compute(
        kind: PlanKind,
        allowance: Decimal,
        expenses: Decimal,
        split: Split,
    ) -> Option<Self> {
        Some(Self {
            kind,
            allowance,
            entered_allowance: Amount::Value(allowance),
            expenses,
            split,
            transport_cost: expenses.checked_mul(split.transport)?,
            food_cost: expenses.checked_mul(split.food)?,
            other_cost: expenses.checked_mul(split.other)?,
            savings: allowance.checked_sub(expenses)?,
        })
    }

    /// Record what was typed into the allowance field, e.g. `NotANumber`
    /// when the computation fell back to zero.
    pub fn with_entered_allowance(mut self, entered: Amount) -> Self {
        self.entered_allowance = entered;
        self
    }

    /// Whether the user spends more than they get.
    pub fn is_overspending(&self) -> bool {
        self.expenses > self.allowance
    }
}

/// Build a student plan from the transport and food answers.
pub fn student_plan(
    allowance: Decimal,
    expenses: Decimal,
    transport: &TransportMode,
    food: &FoodHabit,
) -> BudgetPlan {
    BudgetPlan::compute(
        PlanKind::Student,
        allowance,
        expenses,
        Split::student(transport, food),
    )
}

/// Build a worker plan. The split never depends on any other answer.
pub fn worker_plan(allowance: Decimal, expenses: Decimal) -> BudgetPlan {
    BudgetPlan::compute(PlanKind::Worker, allowance, expenses, Split::WORKER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::budget::money::format_money;

    fn all_transport() -> Vec<TransportMode> {
        TransportMode::OPTIONS
            .iter()
            .map(|l| TransportMode::from_label(l))
            .collect()
    }

    fn all_food() -> Vec<FoodHabit> {
        FoodHabit::OPTIONS
            .iter()
            .map(|l| FoodHabit::from_label(l))
            .collect()
    }

    #[test]
    fn student_split_sums_to_one() {
        for transport in all_transport() {
            for food in all_food() {
                let split = Split::student(&transport, &food);
                assert_eq!(
                    split.transport + split.food + split.other,
                    Decimal::ONE,
                    "{transport:?} / {food:?}"
                );
            }
        }
    }

    #[test]
    fn walking_and_cooking_scenario() {
        let plan = student_plan(
            dec!(5000),
            dec!(3000),
            &TransportMode::Walking,
            &FoodHabit::CookAtHome,
        );
        assert_eq!(plan.split.transport, dec!(0.05));
        assert_eq!(plan.split.food, dec!(0.30));
        assert_eq!(plan.split.other, dec!(0.65));
        assert_eq!(format_money(plan.transport_cost), "150.00");
        assert_eq!(format_money(plan.food_cost), "900.00");
        assert_eq!(format_money(plan.other_cost), "1950.00");
        assert_eq!(format_money(plan.savings), "2000.00");
        assert!(!plan.is_overspending());
    }

    #[test]
    fn worker_overspending_scenario() {
        let plan = worker_plan(dec!(2000), dec!(2500));
        assert_eq!(format_money(plan.transport_cost), "1000.00");
        assert_eq!(format_money(plan.food_cost), "750.00");
        assert_eq!(format_money(plan.other_cost), "750.00");
        assert_eq!(format_money(plan.savings), "-500.00");
        assert!(plan.is_overspending());
    }

    #[test]
    fn worker_split_is_fixed() {
        for (allowance, expenses) in [(dec!(0), dec!(0)), (dec!(10), dec!(99.99)), (dec!(-5), dec!(7))] {
            let plan = worker_plan(allowance, expenses);
            assert_eq!(plan.split, Split::WORKER);
            assert_eq!(plan.split.transport, dec!(0.4));
            assert_eq!(plan.split.food, dec!(0.3));
            assert_eq!(plan.split.other, dec!(0.3));
        }
    }

    #[test]
    fn savings_is_allowance_minus_expenses() {
        let cases = [(dec!(100), dec!(40.5)), (dec!(0), dec!(12)), (dec!(1234.56), dec!(1234.56))];
        for (allowance, expenses) in cases {
            let student = student_plan(
                allowance,
                expenses,
                &TransportMode::PersonalCar,
                &FoodHabit::OrderTakeout,
            );
            assert_eq!(student.savings, allowance - expenses);
            assert_eq!(worker_plan(allowance, expenses).savings, allowance - expenses);
        }
    }

    #[test]
    fn equal_allowance_and_expenses_is_not_overspending() {
        assert!(!worker_plan(dec!(50), dec!(50)).is_overspending());
    }

    #[test]
    fn unlisted_labels_contribute_nothing() {
        let transport = TransportMode::from_label("Bicycle");
        let food = FoodHabit::from_label("Skip meals");
        assert_eq!(transport.label(), "Bicycle");
        assert_eq!(food.label(), "Skip meals");
        let split = Split::student(&transport, &food);
        assert_eq!(split.other, Decimal::ONE);
    }

    #[test]
    fn overflowing_amounts_compute_as_zero() {
        let plan = worker_plan(Decimal::MAX, Decimal::MIN);
        assert_eq!(plan.allowance, Decimal::ZERO);
        assert_eq!(plan.expenses, Decimal::ZERO);
        assert_eq!(plan.savings, Decimal::ZERO);
        assert_eq!(plan.transport_cost, Decimal::ZERO);
        assert_eq!(plan.entered_allowance, Amount::Value(Decimal::MAX));
        assert!(!plan.is_overspending());

        let plan = student_plan(
            Decimal::MIN,
            Decimal::MAX,
            &TransportMode::Walking,
            &FoodHabit::CookAtHome,
        );
        assert_eq!(plan.savings, Decimal::ZERO);
        assert_eq!(plan.split.other, dec!(0.65));
    }

    #[test]
    fn largest_amounts_that_fit_still_compute() {
        let plan = worker_plan(Decimal::MAX, Decimal::MAX);
        assert_eq!(plan.savings, Decimal::ZERO);
        assert_eq!(plan.expenses, Decimal::MAX);
        assert!(plan.transport_cost > Decimal::ZERO);
    }

    #[test]
    fn labels_round_trip() {
        for label in TransportMode::OPTIONS {
            assert_eq!(TransportMode::from_label(label).label(), label);
        }
        for label in FoodHabit::OPTIONS {
            assert_eq!(FoodHabit::from_label(label).label(), label);
        }
    }
}
