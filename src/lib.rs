//! # Spend Aura
//!
//! A library for distilling a bank statement's text layer (positioned text
//! runs, as produced by a PDF viewer or browser) into normalized spend
//! transactions, aggregate statistics and a single behavioral "aura" label.
//!
//! ## Core Concepts
//!
//! - **Text run**: a text fragment with its rendered (x, y) position, leaf
//!   input from one page's text layer
//! - **Row reconstruction**: first-fit baseline clustering that rebuilds
//!   reading-order lines from unordered runs
//! - **Transaction**: a row recognized by carrying both a date-like and a
//!   money-like token, reduced to a positive spend magnitude
//! - **Canonical merchant**: the normalized, alias-resolved identity used to
//!   group transactions by counterparty
//! - **Aura**: one categorical label chosen by a fixed priority rule cascade
//!
//! ## Example
//!
//! ```rust,ignore
//! use spend_aura::{analyze_statement, RunsDocument, TextRun};
//!
//! let document = RunsDocument::new(vec![vec![
//!     TextRun::new("04/12", 20.0, 700.0),
//!     TextRun::new("STARBUCKS #4471", 100.0, 700.0),
//!     TextRun::new("4.75", 300.0, 700.0),
//! ]]);
//!
//! let result = analyze_statement(&document)?;
//! assert_eq!(result.top_merchant.name, "STARBUCKS");
//! assert_eq!(result.aura_label, "Caffeine Powered");
//! ```
//!
//! Extraction is heuristic by design: rows the recognizer cannot read reduce
//! coverage silently, and only a document yielding zero transactions fails.

pub mod aggregate;
pub mod aura;
pub mod document;
pub mod error;
pub mod extract;
pub mod layout;
pub mod merchant;
pub mod report;

#[cfg(feature = "pdf")]
pub mod pdf;

pub use aggregate::{Aggregator, MerchantAggregate, MONTH_LABELS};
pub use aura::{classify_aura, AuraRule, AURA_RULES};
pub use document::{RunsDocument, StatementDocument};
pub use error::{Result, SpendAuraError};
pub use extract::{extract_transaction, EXCLUDED_KEYWORDS};
pub use layout::{reconstruct_rows, Row, TextRun, DEFAULT_Y_TOLERANCE};
pub use merchant::canonical_merchant;
pub use report::{AnalysisResult, MonthlySpend, TopMerchant, Transaction};

#[cfg(feature = "pdf")]
pub use pdf::PdfStatement;

use log::{debug, info};

/// Drives the full pipeline over a document: layout reconstruction,
/// transaction extraction, aggregation and aura classification.
///
/// One logical worker, strictly sequential over pages in document order; the
/// only suspension points are the per-page [`StatementDocument::text_runs`]
/// fetches. Runs to completion or fails terminally - there is no partial
/// result and no internal timeout.
pub struct StatementAnalyzer {
    y_tolerance: f64,
}

impl Default for StatementAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl StatementAnalyzer {
    pub fn new() -> Self {
        Self {
            y_tolerance: DEFAULT_Y_TOLERANCE,
        }
    }

    /// Override the baseline tolerance used by row reconstruction.
    pub fn with_y_tolerance(y_tolerance: f64) -> Self {
        Self { y_tolerance }
    }

    pub fn analyze<D: StatementDocument>(&self, document: &D) -> Result<AnalysisResult> {
        let page_count = document.page_count();
        info!("analyzing statement document with {} pages", page_count);

        let mut transactions: Vec<Transaction> = Vec::new();

        for page_index in 0..page_count {
            let runs = document.text_runs(page_index)?;
            let rows = reconstruct_rows(runs, self.y_tolerance);
            let before = transactions.len();

            for row in &rows {
                if let Some(transaction) = extract_transaction(&row.text()) {
                    transactions.push(transaction);
                }
            }

            debug!(
                "page {}: {} rows reconstructed, {} transactions extracted",
                page_index,
                rows.len(),
                transactions.len() - before
            );
        }

        if transactions.is_empty() {
            return Err(SpendAuraError::NoTransactions);
        }

        let mut aggregator = Aggregator::new();
        for transaction in &transactions {
            aggregator.record(transaction);
        }

        let total_spend: f64 = transactions.iter().map(|t| t.amount).sum();
        let transaction_count = transactions.len();

        let top_merchant = aggregator
            .top_merchant()
            .map(|merchant| TopMerchant {
                name: merchant.name.clone(),
                count: merchant.count,
                amount: merchant.total,
            })
            .unwrap_or_else(|| TopMerchant {
                name: "Unknown".to_string(),
                count: 0,
                amount: 0.0,
            });

        // Strict comparison keeps the first of equally priced transactions.
        let mut most_expensive = &transactions[0];
        for transaction in &transactions[1..] {
            if transaction.amount > most_expensive.amount {
                most_expensive = transaction;
            }
        }

        let aura_label =
            classify_aura(total_spend, transaction_count, &top_merchant.name).to_string();

        info!(
            "extracted {} transactions totalling {:.2}, top merchant '{}', aura '{}'",
            transaction_count, total_spend, top_merchant.name, aura_label
        );

        Ok(AnalysisResult {
            total_spend,
            transaction_count,
            top_merchant,
            most_expensive_transaction: most_expensive.clone(),
            monthly_spend: aggregator.monthly_spend(),
            aura_label,
        })
    }
}

/// Analyze a statement document with the default tolerances.
pub fn analyze_statement<D: StatementDocument>(document: &D) -> Result<AnalysisResult> {
    StatementAnalyzer::new().analyze(document)
}
