use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One normalized spend transaction.
///
/// The date is kept as the raw token matched in the row because most
/// statement layouts omit the year; the monthly bucketing in
/// [`crate::aggregate`] re-interprets it heuristically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[schemars(description = "The date token exactly as it appeared in the row, e.g. '04/12' or '2024-03-01'")]
    pub date: String,

    #[schemars(
        description = "Row text with the date, the amount and leading reference numbers removed"
    )]
    pub description: String,

    #[schemars(
        description = "Spend magnitude. Always positive: parenthesized (negative) statement amounts are folded into their absolute value"
    )]
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TopMerchant {
    #[schemars(description = "Canonical merchant name after normalization and alias resolution")]
    pub name: String,

    #[schemars(description = "Number of transactions attributed to this merchant")]
    pub count: usize,

    #[schemars(description = "Sum of transaction amounts attributed to this merchant")]
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySpend {
    #[schemars(description = "Three-letter month code, JAN through DEC")]
    pub month: String,

    #[schemars(description = "Total spend bucketed into this calendar month")]
    pub amount: f64,
}

/// Terminal output of the pipeline. Built once per document, never mutated.
///
/// Field names are camelCase on the wire; the result is consumed directly by
/// a JavaScript presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    #[schemars(description = "Sum of all extracted transaction amounts")]
    pub total_spend: f64,

    #[schemars(description = "Number of extracted transactions")]
    pub transaction_count: usize,

    #[schemars(
        description = "Merchant with the highest total spend. Ties resolve to whichever merchant was seen first"
    )]
    pub top_merchant: TopMerchant,

    #[schemars(description = "The single largest transaction in the document")]
    pub most_expensive_transaction: Transaction,

    #[schemars(
        description = "Per-month spend totals in calendar order. Months with no resolvable spend are omitted"
    )]
    pub monthly_spend: Vec<MonthlySpend>,

    #[schemars(description = "Behavioral label chosen by the aura rule cascade")]
    pub aura_label: String,
}

impl AnalysisResult {
    pub fn generate_json_schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(AnalysisResult)
    }

    pub fn schema_as_json() -> Result<String, serde_json::Error> {
        let schema = Self::generate_json_schema();
        serde_json::to_string_pretty(&schema)
    }
}
