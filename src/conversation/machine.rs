//! Table-driven transition function for the budgeting conversation.

use tracing::debug;

use super::message::{
    BotMessage, FAREWELL, NO_ADVICE, NOT_STUDENT_OR_WORKER, OVERSPEND_WARNING, PROMPT_EMPLOYMENT,
    PROMPT_FOOD, PROMPT_INCOME, PROMPT_STUDENT, PROMPT_TRANSPORT, PROMPT_WORK,
};
use super::state::{BudgetData, ConversationState, InputFields, Session};
use crate::advice::{self, EmploymentStatus, IncomeLevel};
use crate::budget::{self, Amount, BudgetPlan, FoodHabit, TransportMode};

const YES_NO: [&str; 2] = ["Yes", "No"];

/// Which button labels a row accepts.
#[derive(Debug, Clone, Copy)]
enum LabelMatch {
    Exact(&'static str),
    Any,
}

impl LabelMatch {
    fn matches(self, label: &str) -> bool {
        match self {
            Self::Exact(expected) => expected == label,
            Self::Any => true,
        }
    }
}

/// What a row does besides moving to the next state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Effect {
    CaptureAmounts,
    Farewell,
    AskTransport,
    AskWork,
    StoreTransport,
    StudentPlan,
    WorkerPlan,
    NotStudentOrWorker,
    StoreEmployment,
    Advise,
}

struct Row {
    from: ConversationState,
    input: LabelMatch,
    effect: Effect,
    to: ConversationState,
}

const fn row(
    from: ConversationState,
    input: LabelMatch,
    effect: Effect,
    to: ConversationState,
) -> Row {
    Row {
        from,
        input,
        effect,
        to,
    }
}

use ConversationState as S;
use LabelMatch::{Any, Exact};

static TRANSITIONS: &[Row] = &[
    row(S::Start, Exact("Yes"), Effect::CaptureAmounts, S::AskStudent),
    row(S::Start, Exact("No"), Effect::Farewell, S::Start),
    row(S::AskStudent, Exact("Yes"), Effect::AskTransport, S::AskTransport),
    row(S::AskStudent, Exact("No"), Effect::AskWork, S::AskWork),
    row(S::AskTransport, Any, Effect::StoreTransport, S::AskFoodHabits),
    row(S::AskFoodHabits, Any, Effect::StudentPlan, S::Start),
    row(S::AskWork, Exact("Yes"), Effect::WorkerPlan, S::Start),
    row(S::AskWork, Exact("No"), Effect::NotStudentOrWorker, S::Start),
    row(S::AskEmploymentStatus, Any, Effect::StoreEmployment, S::AskIncomeLevel),
    row(S::AskIncomeLevel, Any, Effect::Advise, S::Start),
];

/// Result of feeding one input to the state machine.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    /// The session after the transition.
    pub session: Session,
    /// Bot messages to show, in order.
    pub messages: Vec<BotMessage>,
    /// Buttons to offer next. Empty means none.
    pub buttons: Vec<String>,
    /// Whether the allowance/expenses fields should be emptied.
    pub clear_budget_fields: bool,
    /// False when no row matched and nothing happened.
    pub matched: bool,
}

impl Transition {
    fn unmatched(session: Session) -> Self {
        Self {
            session,
            messages: Vec::new(),
            buttons: Vec::new(),
            clear_budget_fields: false,
            matched: false,
        }
    }
}

fn labels(options: &[&str]) -> Vec<String> {
    options.iter().map(|s| s.to_string()).collect()
}

/// Advance the conversation with a button label.
///
/// `fields` is only read when the user agrees to build a plan, to capture
/// the allowance and expenses they typed. Unmatched (state, label) pairs
/// return the session untouched with `matched == false`.
pub fn advance(session: Session, label: &str, fields: &InputFields) -> Transition {
    let Some(row) = TRANSITIONS
        .iter()
        .find(|r| r.from == session.state && r.input.matches(label))
    else {
        debug!(state = %session.state, label, "No transition for button");
        return Transition::unmatched(session);
    };

    let Session { mut data, .. } = session;
    let mut messages = Vec::new();
    let mut buttons = Vec::new();
    let mut clear_budget_fields = false;

    match row.effect {
        Effect::CaptureAmounts => {
            data.allowance = Some(Amount::parse(&fields.allowance));
            data.expenses = Some(Amount::parse(&fields.expenses));
            messages.push(BotMessage::text(PROMPT_STUDENT));
            buttons = labels(&YES_NO);
        }
        Effect::Farewell => messages.push(BotMessage::text(FAREWELL)),
        Effect::AskTransport => {
            messages.push(BotMessage::text(PROMPT_TRANSPORT));
            buttons = labels(&TransportMode::OPTIONS);
        }
        Effect::AskWork => {
            messages.push(BotMessage::text(PROMPT_WORK));
            buttons = labels(&YES_NO);
        }
        Effect::StoreTransport => {
            data.transport_mode = Some(TransportMode::from_label(label));
            messages.push(BotMessage::text(PROMPT_FOOD));
            buttons = labels(&FoodHabit::OPTIONS);
        }
        Effect::StudentPlan => {
            data.food_habit = Some(FoodHabit::from_label(label));
            let plan = student_plan_from(&data);
            push_plan(&mut messages, plan);
            clear_budget_fields = true;
        }
        Effect::WorkerPlan => {
            let (allowance, expenses) = amounts(&data);
            let plan = budget::worker_plan(allowance, expenses)
                .with_entered_allowance(entered_allowance(&data));
            push_plan(&mut messages, plan);
            clear_budget_fields = true;
        }
        Effect::NotStudentOrWorker => messages.push(BotMessage::text(NOT_STUDENT_OR_WORKER)),
        Effect::StoreEmployment => {
            data.employment_status = Some(EmploymentStatus::from_label(label));
            messages.push(BotMessage::text(PROMPT_INCOME));
            buttons = labels(&IncomeLevel::OPTIONS);
        }
        Effect::Advise => {
            data.income_level = Some(IncomeLevel::from_label(label));
            messages.push(advice_from(&data));
        }
    }

    if row.to == ConversationState::Start {
        data = BudgetData::default();
    }

    debug!(from = %row.from, to = %row.to, label, "Conversation advanced");

    Transition {
        session: Session {
            state: row.to,
            data,
        },
        messages,
        buttons,
        clear_budget_fields,
        matched: true,
    }
}

/// Enter the budgeting-tips branch from free text, whatever the current
/// state.
pub fn enter_budgeting_tips(session: Session) -> Transition {
    debug!(from = %session.state, "Entering budgeting tips");
    Transition {
        session: Session {
            state: ConversationState::AskEmploymentStatus,
            data: session.data,
        },
        messages: vec![BotMessage::text(PROMPT_EMPLOYMENT)],
        buttons: labels(&EmploymentStatus::OPTIONS),
        clear_budget_fields: false,
        matched: true,
    }
}

fn amounts(data: &BudgetData) -> (rust_decimal::Decimal, rust_decimal::Decimal) {
    let allowance = data.allowance.unwrap_or(Amount::NotANumber).or_zero();
    let expenses = data.expenses.unwrap_or(Amount::NotANumber).or_zero();
    (allowance, expenses)
}

fn student_plan_from(data: &BudgetData) -> BudgetPlan {
    let (allowance, expenses) = amounts(data);
    let unlisted_transport = TransportMode::Unlisted(String::new());
    let unlisted_food = FoodHabit::Unlisted(String::new());
    budget::student_plan(
        allowance,
        expenses,
        data.transport_mode.as_ref().unwrap_or(&unlisted_transport),
        data.food_habit.as_ref().unwrap_or(&unlisted_food),
    )
    .with_entered_allowance(entered_allowance(data))
}

fn entered_allowance(data: &BudgetData) -> Amount {
    data.allowance.unwrap_or(Amount::NotANumber)
}

fn push_plan(messages: &mut Vec<BotMessage>, plan: BudgetPlan) {
    let overspending = plan.is_overspending();
    messages.push(BotMessage::Plan { plan });
    if overspending {
        messages.push(BotMessage::warning(OVERSPEND_WARNING));
    }
}

fn advice_from(data: &BudgetData) -> BotMessage {
    let found = match (&data.employment_status, &data.income_level) {
        (Some(status), Some(income)) => advice::lookup(status, income),
        _ => None,
    };
    match found {
        Some(tips) => BotMessage::Tips { tips },
        None => BotMessage::text(NO_ADVICE),
    }
}
