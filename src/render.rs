//! Presentation layer: turns structured bot messages into terminal text or
//! HTML.

use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;

use crate::advice::TipList;
use crate::budget::{BudgetPlan, PlanKind, format_money, format_raw};
use crate::conversation::BotMessage;

const CURRENCY: &str = "Ksh";

static LINE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>|</p>|</h\d>|<hr\s*/?>").expect("line break regex"));
static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag regex"));

/// Renders bot messages for one output medium.
pub trait Renderer {
    fn render(&self, message: &BotMessage) -> String;
}

/// Plain text for terminals.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainText;

/// HTML fragments, as the browser widget shows them.
#[derive(Debug, Clone, Copy, Default)]
pub struct Html;

struct PlanView {
    heading: &'static str,
    footnote: &'static str,
    rows: [(String, String); 3],
}

fn percent(share: Decimal) -> String {
    format_raw(share * Decimal::ONE_HUNDRED)
}

fn plan_view(plan: &BudgetPlan) -> PlanView {
    let (heading, footnote) = match plan.kind {
        PlanKind::Student => (
            "Here is a sample budget plan for a student:",
            "This is a basic plan. You can adjust it based on your actual spending.",
        ),
        PlanKind::Worker => (
            "Here is a suggested budget plan for a worker:",
            "This is a guideline. You can adjust the percentages based on your needs.",
        ),
    };
    let label = |name: &str, share: Decimal| match plan.kind {
        PlanKind::Student => name.to_string(),
        PlanKind::Worker => format!("{name} ({}%)", percent(share)),
    };
    PlanView {
        heading,
        footnote,
        rows: [
            (label("Transport", plan.split.transport), format_money(plan.transport_cost)),
            (label("Food", plan.split.food), format_money(plan.food_cost)),
            (label("Other", plan.split.other), format_money(plan.other_cost)),
        ],
    }
}

fn credits_names(team: &[String]) -> String {
    match team {
        [] => String::new(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} and {last}", init.join(", ")),
    }
}

impl Renderer for PlainText {
    fn render(&self, message: &BotMessage) -> String {
        match message {
            BotMessage::Text { text } => text.clone(),
            BotMessage::Warning { text } => format!("⚠ {text}"),
            BotMessage::Plan { plan } => {
                let view = plan_view(plan);
                let mut out = vec![
                    view.heading.to_string(),
                    format!("  Your Allowance: {CURRENCY}{}", plan.entered_allowance),
                    format!("  Your Total Expenses: {CURRENCY}{}", format_money(plan.expenses)),
                    "  Suggested Expense Breakdown:".to_string(),
                ];
                for (name, amount) in &view.rows {
                    out.push(format!("    {name}: {CURRENCY}{amount}"));
                }
                out.push(format!(
                    "  Estimated Savings: {CURRENCY}{}",
                    format_money(plan.savings)
                ));
                out.push(view.footnote.to_string());
                out.join("\n")
            }
            BotMessage::Tips { tips } => plain_tips(tips),
            BotMessage::Credits { team } => format!(
                "Thank my creators instead, the amazing team 3: {}. Buy them food! 😂",
                credits_names(team)
            ),
            BotMessage::Remote { html } => html_to_plain(html),
        }
    }
}

fn plain_tips(tips: &TipList) -> String {
    let mut out = vec![tips.title.clone()];
    out.extend(tips.tips.iter().map(|t| format!("  - {t}")));
    out.join("\n")
}

impl Renderer for Html {
    fn render(&self, message: &BotMessage) -> String {
        match message {
            BotMessage::Text { text } => escape_html(text),
            BotMessage::Warning { text } => {
                format!("<p class=\"warning\">{}</p>", escape_html(text))
            }
            BotMessage::Plan { plan } => {
                let view = plan_view(plan);
                let mut out = format!(
                    "<h3>{}</h3>\
                     <p><b>Your Allowance:</b> {CURRENCY}{}</p>\
                     <p><b>Your Total Expenses:</b> {CURRENCY}{}</p>\
                     <hr><p><b>Suggested Expense Breakdown:</b></p>",
                    view.heading,
                    plan.entered_allowance,
                    format_money(plan.expenses),
                );
                for (name, amount) in &view.rows {
                    out.push_str(&format!("<p><b>{name}:</b> {CURRENCY}{amount}</p>"));
                }
                out.push_str(&format!(
                    "<hr><p><b>Estimated Savings:</b> {CURRENCY}{}</p><br><p>{}</p>",
                    format_money(plan.savings),
                    view.footnote
                ));
                out
            }
            BotMessage::Tips { tips } => {
                let items: String = tips
                    .tips
                    .iter()
                    .map(|t| format!("<li>{}</li>", escape_html(t)))
                    .collect();
                format!("<h3>{}</h3><ul>{items}</ul>", escape_html(&tips.title))
            }
            BotMessage::Credits { team } => format!(
                "Thank my creators instead, the amazing team 3: <b>{}</b>. Buy them food! 😂",
                escape_html(&credits_names(team))
            ),
            BotMessage::Remote { html } => html.clone(),
        }
    }
}

/// Escape text for inclusion in HTML.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Best-effort conversion of an HTML reply to terminal text.
pub fn html_to_plain(html: &str) -> String {
    let with_breaks = LINE_BREAK.replace_all(html, "\n");
    let stripped = TAG.replace_all(&with_breaks, "");
    stripped
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .trim()
        .to_string()
}
