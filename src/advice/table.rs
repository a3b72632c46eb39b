use super::{EmploymentStatus, IncomeLevel};

/// One row of the advice table.
#[derive(Debug)]
pub struct AdviceEntry {
    pub status: EmploymentStatus,
    pub income: IncomeLevel,
    pub title: &'static str,
    pub tips: &'static [&'static str],
}

pub static SAVING_TIPS: &[&str] = &[
    "Pay yourself first: move a fixed amount into savings as soon as money comes in.",
    "Track every shilling you spend for a month to see where it really goes.",
    "Cut subscriptions and data bundles you don't use.",
    "Cook at home and carry snacks instead of buying them on the go.",
    "Set a savings goal with a deadline so you stay motivated.",
    "Wait 24 hours before any non-essential purchase.",
];

pub static ADVICE_TABLE: &[AdviceEntry] = &[
    AdviceEntry {
        status: EmploymentStatus::Employed,
        income: IncomeLevel::Low,
        title: "Budgeting tips for employed people on a low income",
        tips: &[
            "List your fixed bills (rent, transport, food) and pay them first on payday.",
            "Save even a small amount every month, Ksh200 adds up.",
            "Pack lunch for work instead of buying it.",
            "Avoid mobile loans for everyday spending.",
        ],
    },
    AdviceEntry {
        status: EmploymentStatus::Employed,
        income: IncomeLevel::Medium,
        title: "Budgeting tips for employed people on a medium income",
        tips: &[
            "Try the 50/30/20 rule: needs, wants, then savings.",
            "Build an emergency fund worth three months of expenses.",
            "Automate a standing order into a savings account on payday.",
            "Review your budget whenever your salary changes.",
        ],
    },
    AdviceEntry {
        status: EmploymentStatus::Employed,
        income: IncomeLevel::High,
        title: "Budgeting tips for employed people on a high income",
        tips: &[
            "Watch for lifestyle inflation when your pay goes up.",
            "Max out your pension contributions before spending on extras.",
            "Put surplus income into long-term investments.",
            "Keep a written plan for big purchases and stick to it.",
        ],
    },
    AdviceEntry {
        status: EmploymentStatus::SelfEmployed,
        income: IncomeLevel::Low,
        title: "Budgeting tips for self-employed people on a low income",
        tips: &[
            "Keep business money and personal money in separate accounts.",
            "Pay yourself a fixed wage, even if it is small.",
            "Set aside part of every payment for slow months.",
            "Record every sale and expense, however small.",
        ],
    },
    AdviceEntry {
        status: EmploymentStatus::SelfEmployed,
        income: IncomeLevel::Medium,
        title: "Budgeting tips for self-employed people on a medium income",
        tips: &[
            "Budget on your lowest-earning month, not your best one.",
            "Set aside money for taxes as soon as you are paid.",
            "Build a buffer of three to six months of expenses.",
            "Reinvest a fixed share of profit into the business.",
        ],
    },
    AdviceEntry {
        status: EmploymentStatus::SelfEmployed,
        income: IncomeLevel::High,
        title: "Budgeting tips for self-employed people on a high income",
        tips: &[
            "Get an accountant to plan taxes and business expenses.",
            "Diversify your income so one client can't sink your month.",
            "Invest surplus profit instead of letting it sit idle.",
            "Plan for your retirement, nobody else will do it for you.",
        ],
    },
    AdviceEntry {
        status: EmploymentStatus::Unemployed,
        income: IncomeLevel::Low,
        title: "Budgeting tips while unemployed with little income",
        tips: &[
            "Cover essentials first: food, rent and transport to interviews.",
            "Pause every non-essential subscription.",
            "Look for free training to boost your job search.",
            "Talk to lenders early if you can't keep up with repayments.",
        ],
    },
    AdviceEntry {
        status: EmploymentStatus::Unemployed,
        income: IncomeLevel::Medium,
        title: "Budgeting tips while unemployed with some income",
        tips: &[
            "Stretch your savings with a strict weekly budget.",
            "Use part of your income to build skills for your next job.",
            "Avoid taking on new debt until you have steady work.",
            "Keep a small emergency reserve untouched.",
        ],
    },
    AdviceEntry {
        status: EmploymentStatus::Unemployed,
        income: IncomeLevel::High,
        title: "Budgeting tips while unemployed with a high income",
        tips: &[
            "Make your passive income work for you: reinvest part of it.",
            "Keep a budget even when money feels plentiful.",
            "Use the time to plan your long-term financial goals.",
            "Keep health cover in place between jobs.",
        ],
    },
];
