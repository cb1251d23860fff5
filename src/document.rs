//! Document boundary.
//!
//! The pipeline depends on one capability only: a page count and, per page
//! index, the page's positioned text runs. Rendering, storage and file
//! formats live behind this trait.

use crate::error::{Result, SpendAuraError};
use crate::layout::TextRun;

pub trait StatementDocument {
    fn page_count(&self) -> usize;

    /// Fetch one page's text layer. The analyzer calls this sequentially in
    /// page order; implementations are free to block (or to resolve a future
    /// internally) while fetching.
    fn text_runs(&self, page_index: usize) -> Result<Vec<TextRun>>;
}

/// An in-memory document: one Vec of runs per page. Used by callers that
/// already hold a text layer, and throughout the test suite.
#[derive(Debug, Clone, Default)]
pub struct RunsDocument {
    pages: Vec<Vec<TextRun>>,
}

impl RunsDocument {
    pub fn new(pages: Vec<Vec<TextRun>>) -> Self {
        Self { pages }
    }

    pub fn push_page(&mut self, runs: Vec<TextRun>) {
        self.pages.push(runs);
    }
}

impl StatementDocument for RunsDocument {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn text_runs(&self, page_index: usize) -> Result<Vec<TextRun>> {
        self.pages
            .get(page_index)
            .cloned()
            .ok_or(SpendAuraError::PageOutOfRange(page_index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pages_come_back_in_order() {
        let mut document = RunsDocument::default();
        document.push_page(vec![TextRun::new("one", 0.0, 10.0)]);
        document.push_page(vec![TextRun::new("two", 0.0, 10.0)]);

        assert_eq!(document.page_count(), 2);
        assert_eq!(document.text_runs(0).unwrap()[0].text, "one");
        assert_eq!(document.text_runs(1).unwrap()[0].text, "two");
    }

    #[test]
    fn test_out_of_range_page_is_an_error() {
        let document = RunsDocument::default();
        assert!(matches!(
            document.text_runs(0),
            Err(SpendAuraError::PageOutOfRange(0))
        ));
    }
}
