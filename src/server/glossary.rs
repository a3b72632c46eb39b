//! Built-in financial glossary with kid-friendly definitions.

/// Terms in lookup order. The first match wins, so "savings" shadows
/// anything that also mentions it.
pub const TERMS: &[(&str, &str)] = &[
    (
        "savings",
        "Savings is the money you keep after paying for all your needs. Think of it as leftover money you can use for fun things or for later!",
    ),
    (
        "income",
        "Income is all the money you get. It can be from your parents, a job, or even gifts. It's the money you have to spend or save.",
    ),
    (
        "expense",
        "An expense is anything you spend money on. This could be snacks, toys, or bus fare. It's the money going out.",
    ),
    (
        "budget",
        "A budget is a plan for your money. You decide how much to spend and how much to save. It helps you make sure you have enough money for what you need.",
    ),
    (
        "allowance",
        "An allowance is a set amount of money you get regularly, maybe every week or month. It's your own money to manage.",
    ),
    (
        "debt",
        "Debt is when you owe someone money. If you borrow money from a friend, you have a debt to pay back.",
    ),
    (
        "loan",
        "A loan is when you borrow money from a person or a bank. You have to pay it back, usually with a little extra.",
    ),
    (
        "interest",
        "Interest is the extra money you have to pay back when you get a loan. It's like a fee for borrowing the money.",
    ),
    (
        "credit",
        "Credit is your power to borrow money. Having good credit means people trust you to pay back what you borrow.",
    ),
    (
        "bank",
        "A bank is a safe place to keep your money. They can also help you with loans and other money things.",
    ),
    (
        "balance",
        "Your balance is the total amount of money you have in your bank account right now.",
    ),
    (
        "deposit",
        "A deposit is when you put money into your bank account. You're adding to your balance.",
    ),
    (
        "withdrawal",
        "A withdrawal is when you take money out of your bank account. You're subtracting from your balance.",
    ),
    (
        "transaction",
        "A transaction is any time money moves in or out of your account. Deposits and withdrawals are both transactions.",
    ),
    (
        "profit",
        "Profit is the money you make after you sell something for more than it cost you to get it. It's the extra money you earned.",
    ),
    (
        "loss",
        "A loss is when you sell something for less than it cost you. You end up with less money than you started with.",
    ),
    (
        "net worth",
        "Your net worth is all the things you own that are worth money, minus any debts you have. It's a snapshot of how much you're worth financially.",
    ),
    (
        "asset",
        "An asset is anything you own that has value. This could be cash, a bike, or even a video game.",
    ),
    (
        "liability",
        "A liability is any debt you owe. It's money you have to pay back to someone else.",
    ),
];

/// Find a definition for a question like "what is a loan?" or a bare term
/// like "debt".
pub fn define(message: &str) -> Option<&'static str> {
    let lower = message.to_lowercase();
    let is_question = lower.contains("what");
    TERMS
        .iter()
        .find(|(term, _)| (is_question && lower.contains(term)) || lower == *term)
        .map(|(_, definition)| *definition)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_with_term() {
        let def = define("What is a LOAN?").unwrap();
        assert!(def.starts_with("A loan is"));
    }

    #[test]
    fn bare_term() {
        assert!(define("debt").unwrap().starts_with("Debt is"));
        assert!(define("Net Worth").unwrap().starts_with("Your net worth"));
    }

    #[test]
    fn term_without_question_is_not_defined() {
        assert_eq!(define("I have debt"), None);
    }

    #[test]
    fn first_term_wins() {
        // Mentions both "savings" and "income"; "savings" comes first.
        assert!(define("what is income vs savings").unwrap().starts_with("Savings"));
        // "expenses" contains "expense".
        assert!(define("what are expenses").unwrap().starts_with("An expense"));
    }

    #[test]
    fn glossary_has_every_term_once() {
        assert_eq!(TERMS.len(), 19);
        for (i, (a, _)) in TERMS.iter().enumerate() {
            assert!(TERMS[i + 1..].iter().all(|(b, _)| a != b), "duplicate {a}");
        }
    }
}
