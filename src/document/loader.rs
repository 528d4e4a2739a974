//! Document loading and orchestration
//!
//! This module contains `load_document()`, which takes a .docx file all the
//! way to the parsed `UsCode` tree: validate, read paragraphs, normalize,
//! reconstruct structure.

use anyhow::{Context, Result};
use std::path::Path;
use tracing::{debug, info};

use super::cleanup::normalize_paragraphs;
use super::io::validate_docx_file;
use super::models::UsCode;
use super::parsing::formatting::{
    extract_paragraph_text, extract_sdt_paragraphs, extract_table_paragraphs,
};
use super::parsing::structure::parse_document;

/// Load a .docx file and extract its Title/Chapter/Section structure.
///
/// The file is read fully and released before parsing starts. The file stem
/// is used as the fallback source of the title number.
pub fn load_document(file_path: &Path) -> Result<UsCode> {
    validate_docx_file(file_path)?;

    let paragraphs = extract_paragraphs(file_path)?;
    let lines = normalize_paragraphs(&paragraphs);
    debug!(
        paragraphs = paragraphs.len(),
        lines = lines.len(),
        "normalized document text"
    );

    let source = file_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    let code = parse_document(&lines, source);

    info!(
        title = %code.title.name,
        chapters = code.title.chapters.len(),
        sections = code.title.section_count(),
        "parsed document structure"
    );
    Ok(code)
}

/// Plain text of every non-empty paragraph, in document order.
///
/// Paragraphs nested inside tables and content controls are included at
/// the position of their container.
pub fn extract_paragraphs(file_path: &Path) -> Result<Vec<String>> {
    let file_data = std::fs::read(file_path)
        .with_context(|| format!("Failed to read {}", file_path.display()))?;
    let docx = docx_rs::read_docx(&file_data)
        .with_context(|| format!("Failed to parse {}", file_path.display()))?;

    let mut paragraphs = Vec::new();
    for child in &docx.document.children {
        match child {
            docx_rs::DocumentChild::Paragraph(para) => {
                paragraphs.push(extract_paragraph_text(para));
            }
            docx_rs::DocumentChild::Table(table) => {
                extract_table_paragraphs(table, &mut paragraphs);
            }
            docx_rs::DocumentChild::StructuredDataTag(sdt) => {
                extract_sdt_paragraphs(sdt, &mut paragraphs);
            }
            _ => {}
        }
    }

    paragraphs.retain(|p| !p.is_empty());
    Ok(paragraphs)
}
