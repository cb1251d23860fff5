//! Heuristic transaction recognition over reconstructed row text.
//!
//! Statement layouts are schema-less: there is no reliable column model, so a
//! row is treated as a candidate transaction when it carries both a date-like
//! token and a money-like token. Everything else in the row becomes the
//! description once reference numbers and boilerplate are stripped. Rows that
//! happen to carry a date and an amount in an unrelated context (reference
//! lines, printed summary totals) are accepted unless they hit the exclusion
//! vocabulary; suppressing them further would trade silent coverage loss for
//! silent miscounting, so the false-positive risk stays visible here.

use std::sync::LazyLock;

use regex::{Match, Regex};

use crate::report::Transaction;

/// Ledger lines that carry a date and an amount but are not spend.
pub const EXCLUDED_KEYWORDS: [&str; 9] = [
    "payment",
    "transfer",
    "deposit",
    "interest",
    "balance",
    "opening",
    "closing",
    "atm withdrawal",
    "beginning balance",
];

// MM/DD-style pairs or a full ISO-like date. Leftmost-first matching means an
// ISO date is captured whole rather than as its embedded short form.
static DATE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{1,2}[/-]\d{1,2}|\d{4}[/-]\d{1,2}[/-]\d{1,2}").unwrap());

// Optional sign and currency symbol, grouped digits, exactly two decimals.
static MONEY_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-?\$?[\d,]+\.\d{2}").unwrap());

static LEADING_REFERENCE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+").unwrap());

static PURCHASE_BOILERPLATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)purchase authorized on \d{2}/\d{2}").unwrap());

/// Recognize one row as a transaction, or reject it.
///
/// Rejection is silent by design: structural misses (no date or no money
/// token) are the common case on headers, addresses and footers, and
/// excluded-category or numeric misses reduce coverage rather than fail the
/// document.
pub fn extract_transaction(row_text: &str) -> Option<Transaction> {
    let date = DATE_TOKEN.find(row_text)?;
    let money = MONEY_TOKEN.find(row_text)?;

    let amount = parse_amount(row_text, &money)?;

    let description = clean_description(row_text, date.as_str(), money.as_str());
    if description.len() <= 2 || is_excluded(&description) {
        return None;
    }

    Some(Transaction {
        date: date.as_str().to_string(),
        description,
        amount,
    })
}

/// Parse the money token into a positive magnitude.
///
/// A token enclosed in parentheses is a credit-convention negative; the sign
/// is resolved and then discarded because the pipeline only ever tracks spend
/// magnitudes. Zero and unparsable amounts reject the row.
fn parse_amount(row_text: &str, token: &Match) -> Option<f64> {
    let raw: String = token
        .as_str()
        .chars()
        .filter(|c| *c != '$' && *c != ',')
        .collect();
    let mut amount: f64 = raw.parse().ok()?;

    if in_parentheses(row_text, token) {
        amount = -amount;
    }
    if amount == 0.0 {
        return None;
    }

    Some(amount.abs())
}

fn in_parentheses(text: &str, token: &Match) -> bool {
    let before = text[..token.start()].chars().last();
    let after = text[token.end()..].chars().next();
    before == Some('(') && after == Some(')')
}

fn clean_description(row_text: &str, date_token: &str, money_token: &str) -> String {
    let without_tokens = row_text
        .replacen(date_token, "", 1)
        .replacen(money_token, "", 1);

    let trimmed = without_tokens.trim();
    let without_reference = LEADING_REFERENCE.replace(trimmed, "");
    let without_boilerplate = PURCHASE_BOILERPLATE.replace(&without_reference, "");

    without_boilerplate.trim().to_string()
}

fn is_excluded(description: &str) -> bool {
    let lowered = description.to_lowercase();
    EXCLUDED_KEYWORDS
        .iter()
        .any(|keyword| lowered.contains(keyword))
}
