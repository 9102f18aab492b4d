//! Splits a multi-page PDF into one single-page file per employee.

use std::path::Path;

use tracing::info;

use crate::error::{Result, SplitError};
use crate::pdf::PdfDocument;

/// Split `source` into `names.len()` single-page PDFs under `dest_dir`,
/// named `{name}_{label}.pdf`.
///
/// Pairing is strictly positional: the i-th name (the caller passes the
/// list already sorted) gets the i-th page in source order. The page
/// count must equal the name count; on a mismatch nothing is written.
/// On a mid-run write failure, files written so far are left on disk.
///
/// Two names that render to the same filename silently overwrite each
/// other; collisions are not detected.
pub fn split<P, Q>(source: P, dest_dir: Q, label: &str, names: &[String]) -> Result<()>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let dest_dir = dest_dir.as_ref();

    // Pre-existing directory is not an error
    std::fs::create_dir_all(dest_dir)?;

    let doc = PdfDocument::open(source)?;
    let pages = doc.page_count();

    if pages != names.len() {
        return Err(SplitError::CardinalityMismatch {
            pages,
            names: names.len(),
        });
    }

    for (i, (name, (page_num, _))) in names.iter().zip(doc.page_ids()).enumerate() {
        let output_path = dest_dir.join(format!("{name}_{label}.pdf"));

        let mut single = doc.extract_page(page_num);
        single.save(&output_path).map_err(|source| SplitError::Write {
            path: output_path.clone(),
            index: i,
            source: lopdf::Error::IO(source),
        })?;

        info!("generated {}", output_path.display());
    }

    Ok(())
}
