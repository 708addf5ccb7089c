//! Text extraction: turns uploaded document bytes into plain text.
//!
//! `DocumentReader` is the seam: `AppState` carries an `Arc<dyn DocumentReader>`
//! so tests and alternative backends can stand in for `FileTextExtractor`.

use std::path::Path;

use docx_rs::{DocumentChild, ParagraphChild, RunChild};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Resume formats accepted for upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Txt,
}

impl DocumentFormat {
    pub const ALLOWED_EXTENSIONS: [&'static str; 3] = ["pdf", "docx", "txt"];

    /// Resolves the format from a file name's extension (case-insensitive).
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let ext = Path::new(file_name)
            .extension()?
            .to_str()?
            .to_ascii_lowercase();
        match ext.as_str() {
            "pdf" => Some(DocumentFormat::Pdf),
            "docx" => Some(DocumentFormat::Docx),
            "txt" => Some(DocumentFormat::Txt),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Unsupported file type: {0}")]
    UnsupportedFormat(String),

    #[error("PDF extraction failed: {0}")]
    Pdf(String),

    #[error("DOCX extraction failed: {0}")]
    Docx(String),
}

/// Produces plain text from a document's raw bytes.
pub trait DocumentReader: Send + Sync {
    fn read_text(&self, bytes: &[u8], format: DocumentFormat) -> Result<String, ExtractError>;
}

/// Default reader: pdf-extract for PDF, docx-rs for DOCX, lossy UTF-8 for
/// plain text.
pub struct FileTextExtractor;

impl DocumentReader for FileTextExtractor {
    fn read_text(&self, bytes: &[u8], format: DocumentFormat) -> Result<String, ExtractError> {
        match format {
            DocumentFormat::Pdf => extract_pdf(bytes),
            DocumentFormat::Docx => extract_docx(bytes),
            DocumentFormat::Txt => Ok(String::from_utf8_lossy(bytes).into_owned()),
        }
    }
}

fn extract_pdf(bytes: &[u8]) -> Result<String, ExtractError> {
    // pdf-extract panics on some malformed inputs instead of returning Err.
    std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes))
        .map_err(|_| ExtractError::Pdf("parser aborted on malformed document".to_string()))?
        .map_err(|e| ExtractError::Pdf(e.to_string()))
}

fn extract_docx(bytes: &[u8]) -> Result<String, ExtractError> {
    let docx = docx_rs::read_docx(bytes).map_err(|e| ExtractError::Docx(e.to_string()))?;
    let mut text = String::new();
    for child in docx.document.children {
        let DocumentChild::Paragraph(paragraph) = child else {
            continue;
        };
        for paragraph_child in paragraph.children {
            if let ParagraphChild::Run(run) = paragraph_child {
                for run_child in run.children {
                    if let RunChild::Text(t) = run_child {
                        text.push_str(&t.text);
                    }
                }
            }
        }
        text.push('\n');
    }
    Ok(text)
}
