//! Budget calculator: pure functions from (allowance, expenses, answers)
//! to a cost breakdown.

pub mod calculator;
pub mod money;

pub use calculator::{
    BudgetPlan, FoodHabit, PlanKind, Split, TransportMode, student_plan, worker_plan,
};
pub use money::{Amount, format_money, format_raw};
