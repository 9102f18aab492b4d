//! Read-only wrapper around a loaded PDF document.

use std::path::Path;

use lopdf::{Document, ObjectId};

use crate::error::{Result, SplitError};

pub struct PdfDocument {
    doc: Document,
}

impl PdfDocument {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let doc = Document::load(&path).map_err(|source| SplitError::SourceRead {
            path: path.as_ref().to_path_buf(),
            source,
        })?;
        Ok(PdfDocument { doc })
    }

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Get 1-indexed page object IDs in source page order.
    pub fn page_ids(&self) -> Vec<(u32, ObjectId)> {
        let mut pages: Vec<_> = self.doc.get_pages().into_iter().collect();
        pages.sort_by_key(|(num, _)| *num);
        pages
    }

    /// Build a new document containing only the given 1-indexed page.
    ///
    /// The page content is copied verbatim; only the container is
    /// repackaged. `page` must come from [`Self::page_ids`].
    pub fn extract_page(&self, page: u32) -> Document {
        debug_assert!(self.doc.get_pages().contains_key(&page));

        let mut single = self.doc.clone();
        let others: Vec<u32> = self
            .page_ids()
            .into_iter()
            .map(|(num, _)| num)
            .filter(|&num| num != page)
            .collect();

        if !others.is_empty() {
            single.delete_pages(&others);
        }

        single
    }
}
