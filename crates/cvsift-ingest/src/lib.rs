use std::path::Path;

use thiserror::Error;

pub mod docx;

pub use docx::{DocxError, extract_text_from_reader};

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("PDF text extraction failed: {0}")]
    Pdf(#[from] pdf_extract::OutputError),
    #[error("DOCX text extraction failed: {0}")]
    Docx(#[from] DocxError),
}

/// Load the plain text of a resume document.
///
/// Dispatches on file extension:
/// - `.pdf` → PDF text extraction
/// - `.docx` → DOCX (word/document.xml) extraction
/// - anything else → read as text (invalid UTF-8 replaced, CRLF normalized)
pub fn load_text(path: &Path) -> Result<String, IngestError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    tracing::debug!(path = %path.display(), ext = %ext, "loading document");

    match ext.as_str() {
        "pdf" => Ok(pdf_extract::extract_text(path)?),
        "docx" => Ok(docx::extract_text(path)?),
        _ => {
            let bytes = std::fs::read(path).map_err(|source| IngestError::Io {
                path: path.display().to_string(),
                source,
            })?;
            Ok(String::from_utf8_lossy(&bytes).replace("\r\n", "\n"))
        }
    }
}
