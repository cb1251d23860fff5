//! Real PDF text layers via pdfium (Chromium's PDF library).
//!
//! pdfium exposes the text layer character by character. Characters sharing a
//! baseline are grouped into word-level runs at horizontal gaps, so the
//! layout reconstructor downstream sees the same granularity a browser text
//! layer would hand it. Requires the pdfium dynamic library on the system;
//! gated behind the `pdf` cargo feature.

use pdfium_render::prelude::*;

use crate::document::StatementDocument;
use crate::error::{Result, SpendAuraError};
use crate::layout::TextRun;

// Gap between adjacent characters (as a fraction of the average character
// width on the line) beyond which a new run starts.
const WORD_GAP_RATIO: f64 = 0.3;

#[derive(Debug, Clone)]
struct PdfChar {
    ch: char,
    x: f64,
    /// Baseline Y in PDF points, bottom-up coordinate system.
    y: f64,
    width: f64,
    height: f64,
}

/// A PDF-backed statement document.
///
/// The text layer of every page is extracted eagerly at load time; pdfium
/// handles stay inside the constructor so the document itself is plain data.
pub struct PdfStatement {
    pages: Vec<Vec<TextRun>>,
}

impl PdfStatement {
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes)
    }

    #[allow(deprecated)] // PdfRect field access deprecated in 0.8.28, removed in 0.9.0
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let pdfium = Pdfium::default();
        let document = pdfium
            .load_pdf_from_byte_slice(bytes, None)
            .map_err(|e| SpendAuraError::Document(format!("failed to parse PDF: {e}")))?;

        let mut pages = Vec::with_capacity(document.pages().len() as usize);
        for page in document.pages().iter() {
            let text = page
                .text()
                .map_err(|e| SpendAuraError::Document(format!("failed to read text layer: {e}")))?;

            let mut chars = Vec::new();
            for ch in text.chars().iter() {
                if let (Some(unicode_ch), Ok(rect)) = (ch.unicode_char(), ch.tight_bounds()) {
                    chars.push(PdfChar {
                        ch: unicode_ch,
                        x: f64::from(rect.left.value),
                        y: f64::from(rect.bottom.value),
                        width: f64::from((rect.right.value - rect.left.value).abs()),
                        height: f64::from((rect.top.value - rect.bottom.value).abs()),
                    });
                }
            }

            pages.push(group_into_runs(chars));
        }

        Ok(Self { pages })
    }
}

impl StatementDocument for PdfStatement {
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

/// Group one page's characters into word-level runs.
///
/// Characters are sorted top-to-bottom then left-to-right; a run breaks on a
/// baseline change (more than half the character height) or a horizontal gap
/// wider than the word-gap threshold.
fn group_into_runs(mut chars: Vec<PdfChar>) -> Vec<TextRun> {
    if chars.is_empty() {
        return Vec::new();
    }

    chars.sort_by(|a, b| b.y.total_cmp(&a.y).then(a.x.total_cmp(&b.x)));

    let avg_width = chars.iter().map(|c| c.width).sum::<f64>() / chars.len() as f64;
    let gap_threshold = avg_width * WORD_GAP_RATIO;

    let mut runs = Vec::new();
    let mut current: Vec<PdfChar> = vec![chars[0].clone()];

    for ch in chars.into_iter().skip(1) {
        let last = current.last().expect("current run is never empty");
        let line_tolerance = (last.height * 0.5).max(1.0);
        let same_line = (ch.y - last.y).abs() < line_tolerance;
        let gap = ch.x - (last.x + last.width);

        if same_line && gap <= gap_threshold {
            current.push(ch);
        } else {
            runs.push(build_run(&current));
            current = vec![ch];
        }
    }
    runs.push(build_run(&current));

    runs
}

fn build_run(chars: &[PdfChar]) -> TextRun {
    let first = &chars[0];
    let last = &chars[chars.len() - 1];

    TextRun {
        text: chars.iter().map(|c| c.ch).collect(),
        x: first.x,
        y: first.y,
        width: (last.x + last.width) - first.x,
        height: chars.iter().map(|c| c.height).fold(0.0, f64::max),
    }
}
