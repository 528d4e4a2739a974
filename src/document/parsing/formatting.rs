//! Text extraction
//!
//! This module pulls plain text out of docx-rs paragraphs and runs. Styles
//! and numbering are ignored on purpose: structure is recovered from the
//! text alone.

/// Extract plain text from a paragraph, handling various child elements
pub(crate) fn extract_paragraph_text(para: &docx_rs::Paragraph) -> String {
    let mut text = String::new();
    push_children_text(&para.children, &mut text);
    text.replace('\u{a0}', " ").trim().to_string()
}

fn push_children_text(children: &[docx_rs::ParagraphChild], text: &mut String) {
    for child in children {
        match child {
            docx_rs::ParagraphChild::Run(run) => {
                text.push_str(&extract_run_text(run));
            }
            docx_rs::ParagraphChild::Insert(insert) => {
                // Tracked insertions are part of the current text
                for child in &insert.children {
                    if let docx_rs::InsertChild::Run(run) = child {
                        text.push_str(&extract_run_text(run));
                    }
                }
            }
            docx_rs::ParagraphChild::Hyperlink(link) => {
                push_children_text(&link.children, text);
            }
            docx_rs::ParagraphChild::StructuredDataTag(sdt) => {
                // Inline content control, its runs belong to this paragraph
                for child in &sdt.children {
                    match child {
                        docx_rs::StructuredDataTagChild::Run(run) => {
                            text.push_str(&extract_run_text(run));
                        }
                        docx_rs::StructuredDataTagChild::Paragraph(para) => {
                            push_children_text(&para.children, text);
                        }
                        _ => {}
                    }
                }
            }
            docx_rs::ParagraphChild::Delete(_) => {
                // Tracked deletions are gone from the current text
            }
            _ => {}
        }
    }
}

/// Extract text from a run
pub(crate) fn extract_run_text(run: &docx_rs::Run) -> String {
    let mut text = String::new();

    for child in &run.children {
        match child {
            docx_rs::RunChild::Text(text_elem) => {
                text.push_str(&text_elem.text);
            }
            docx_rs::RunChild::Tab(_) => {
                text.push('\t');
            }
            docx_rs::RunChild::Break(_) => {
                text.push('\n');
            }
            _ => {}
        }
    }

    text
}

/// Collect the text of every paragraph inside a table, row by row
pub(crate) fn extract_table_paragraphs(table: &docx_rs::Table, out: &mut Vec<String>) {
    for table_child in &table.rows {
        let docx_rs::TableChild::TableRow(row) = table_child;
        for row_child in &row.cells {
            let docx_rs::TableRowChild::TableCell(cell) = row_child;
            for content in &cell.children {
                match content {
                    docx_rs::TableCellContent::Paragraph(para) => {
                        out.push(extract_paragraph_text(para));
                    }
                    docx_rs::TableCellContent::Table(nested) => {
                        extract_table_paragraphs(nested, out);
                    }
                    _ => {}
                }
            }
        }
    }
}

/// Collect the text of a block-level content control (`w:sdt`), one entry
/// per paragraph. Runs sitting directly in the control form one paragraph.
pub(crate) fn extract_sdt_paragraphs(sdt: &docx_rs::StructuredDataTag, out: &mut Vec<String>) {
    let mut loose_runs = String::new();
    for child in &sdt.children {
        match child {
            docx_rs::StructuredDataTagChild::Run(run) => {
                loose_runs.push_str(&extract_run_text(run));
            }
            docx_rs::StructuredDataTagChild::Paragraph(para) => {
                flush_loose_runs(&mut loose_runs, out);
                out.push(extract_paragraph_text(para));
            }
            docx_rs::StructuredDataTagChild::Table(table) => {
                flush_loose_runs(&mut loose_runs, out);
                extract_table_paragraphs(table, out);
            }
            _ => {}
        }
    }
    flush_loose_runs(&mut loose_runs, out);
}

fn flush_loose_runs(loose_runs: &mut String, out: &mut Vec<String>) {
    if !loose_runs.is_empty() {
        out.push(loose_runs.replace('\u{a0}', " ").trim().to_string());
        loose_runs.clear();
    }
}
