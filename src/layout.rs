//! Reading-order row reconstruction from positioned text runs.
//!
//! A document text layer hands back fragments in arbitrary order, each tagged
//! with its rendered position in a coordinate space where y increases upward.
//! Rows are rebuilt by first-fit clustering on the baseline: each run attaches
//! to the first existing row key within a fixed vertical tolerance, scanned in
//! insertion order. First-fit is a deliberate, reproducible approximation;
//! nearest-neighbor assignment would occasionally group differently but makes
//! row membership depend on arrival order in subtler ways.
//!
//! Rows closer together than the tolerance are merged even when logically
//! distinct. Wrapped text is never merged across baselines: each physical
//! line stands alone downstream.

use std::cmp::Ordering;

/// Vertical distance (in page units) within which two runs are considered to
/// share a baseline.
pub const DEFAULT_Y_TOLERANCE: f64 = 5.0;

/// A text fragment with its rendered position, as exposed by one page of a
/// document's text layer. Produced and discarded per page.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl TextRun {
    pub fn new(text: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            width: 0.0,
            height: 0.0,
        }
    }
}

/// A reconstructed reading-order line: runs sharing one baseline, sorted
/// left to right.
#[derive(Debug, Clone)]
pub struct Row {
    y: f64,
    runs: Vec<TextRun>,
}

impl Row {
    /// Baseline key this row was clustered at (the y of its first run).
    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn runs(&self) -> &[TextRun] {
        &self.runs
    }

    /// Space-joined run texts.
    pub fn text(&self) -> String {
        self.runs
            .iter()
            .map(|run| run.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Cluster one page's runs into rows, top of page first.
///
/// Runs with empty trimmed text are dropped. The row key list is an ordered
/// Vec scanned front to back, so clustering is independent of any hash
/// iteration order and bit-reproducible for a given input sequence.
pub fn reconstruct_rows(runs: Vec<TextRun>, y_tolerance: f64) -> Vec<Row> {
    let mut clusters: Vec<(f64, Vec<TextRun>)> = Vec::new();

    for run in runs {
        if run.text.trim().is_empty() {
            continue;
        }

        let slot = clusters
            .iter()
            .position(|(key, _)| (key - run.y).abs() < y_tolerance);

        match slot {
            Some(index) => clusters[index].1.push(run),
            None => clusters.push((run.y, vec![run])),
        }
    }

    // y increases upward, so descending keys read top-to-bottom.
    clusters.sort_by(|a, b| b.0.total_cmp(&a.0));

    clusters
        .into_iter()
        .map(|(y, mut members)| {
            members.sort_by(|a, b| a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal));
            Row { y, runs: members }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_read_top_to_bottom_left_to_right() {
        let runs = vec![
            TextRun::new("4.75", 300.0, 700.0),
            TextRun::new("STARBUCKS", 100.0, 700.0),
            TextRun::new("04/12", 20.0, 700.0),
            TextRun::new("ACCOUNT SUMMARY", 20.0, 760.0),
        ];

        let rows = reconstruct_rows(runs, DEFAULT_Y_TOLERANCE);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].text(), "ACCOUNT SUMMARY");
        assert_eq!(rows[1].text(), "04/12 STARBUCKS 4.75");
    }

    #[test]
    fn test_runs_within_tolerance_share_a_row() {
        // Superscripts and slightly misaligned fragments land on one baseline.
        let runs = vec![
            TextRun::new("UBER", 50.0, 500.0),
            TextRun::new("TRIP", 120.0, 503.9),
            TextRun::new("23.10", 200.0, 496.2),
        ];

        let rows = reconstruct_rows(runs, DEFAULT_Y_TOLERANCE);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].text(), "UBER TRIP 23.10");
    }

    #[test]
    fn test_adjacent_baselines_merge_inside_tolerance() {
        // Accepted heuristic risk: two logically distinct lines 4 units apart
        // collapse into one row.
        let runs = vec![
            TextRun::new("first", 10.0, 100.0),
            TextRun::new("second", 10.0, 96.0),
        ];

        let rows = reconstruct_rows(runs, DEFAULT_Y_TOLERANCE);
        assert_eq!(rows.len(), 1);

        // A tighter tolerance keeps them apart.
        let runs = vec![
            TextRun::new("first", 10.0, 100.0),
            TextRun::new("second", 10.0, 96.0),
        ];
        let rows = reconstruct_rows(runs, 2.0);
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_first_fit_attaches_to_earliest_key() {
        // The run at 100.0 is within tolerance of both keys (104.0 and 96.5)
        // but first-fit attaches it to 104.0 because that key was inserted
        // first, not because it is nearest (it isn't: 4.0 vs 3.5).
        let runs = vec![
            TextRun::new("a", 10.0, 104.0),
            TextRun::new("b", 10.0, 96.5),
            TextRun::new("c", 20.0, 100.0),
        ];

        let rows = reconstruct_rows(runs, DEFAULT_Y_TOLERANCE);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].y(), 104.0);
        assert_eq!(rows[0].text(), "a c");
        assert_eq!(rows[1].text(), "b");
    }

    #[test]
    fn test_blank_runs_are_dropped() {
        let runs = vec![
            TextRun::new("   ", 10.0, 100.0),
            TextRun::new("", 20.0, 100.0),
            TextRun::new("kept", 30.0, 100.0),
        ];

        let rows = reconstruct_rows(runs, DEFAULT_Y_TOLERANCE);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].text(), "kept");
    }

    #[test]
    fn test_empty_page_yields_no_rows() {
        let rows = reconstruct_rows(Vec::new(), DEFAULT_Y_TOLERANCE);
        assert!(rows.is_empty());
    }
}
