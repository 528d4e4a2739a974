//! Serialization of the extracted tree
//!
//! XML is the primary format: `USCode > Title > Chapter > Section`, each
//! node carrying a `name` attribute and sections carrying their body as
//! text. JSON mirrors the model types directly.

use anyhow::Result;
use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use serde::{Deserialize, Serialize};
use std::io::Cursor;

use crate::document::{Section, UsCode};

/// Export format options
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Xml,
    Json,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Xml => "xml",
            ExportFormat::Json => "json",
        }
    }
}

pub fn export(code: &UsCode, format: ExportFormat, indent: usize) -> Result<String> {
    match format {
        ExportFormat::Xml => export_xml(code, indent),
        ExportFormat::Json => export_json(code),
    }
}

/// Default output file name, `Title_{number}.{ext}`.
///
/// When the title number is unknown the name is `Title_unknown.{ext}`
/// rather than `Title_?.{ext}`, since `?` is not valid in file names on
/// every platform.
pub fn output_file_name(code: &UsCode, format: ExportFormat) -> String {
    let number = code.title.number.as_deref().unwrap_or("unknown");
    format!("Title_{number}.{}", format.extension())
}

pub fn export_xml(code: &UsCode, indent: usize) -> Result<String> {
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', indent);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    writer.write_event(Event::Start(BytesStart::new("USCode")))?;

    let title = &code.title;
    let title_start = BytesStart::new("Title").with_attributes([("name", title.name.as_str())]);
    if title.chapters.is_empty() {
        writer.write_event(Event::Empty(title_start))?;
    } else {
        writer.write_event(Event::Start(title_start))?;
        for chapter in &title.chapters {
            let chapter_start =
                BytesStart::new("Chapter").with_attributes([("name", chapter.name.as_str())]);
            if chapter.sections.is_empty() {
                writer.write_event(Event::Empty(chapter_start))?;
                continue;
            }
            writer.write_event(Event::Start(chapter_start))?;
            for section in &chapter.sections {
                write_section(&mut writer, section)?;
            }
            writer.write_event(Event::End(BytesEnd::new("Chapter")))?;
        }
        writer.write_event(Event::End(BytesEnd::new("Title")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("USCode")))?;

    let mut xml = String::from_utf8(writer.into_inner().into_inner())?;
    xml.push('\n');
    Ok(xml)
}

fn write_section(writer: &mut Writer<Cursor<Vec<u8>>>, section: &Section) -> Result<()> {
    let name = section.name();
    let start = BytesStart::new("Section").with_attributes([("name", name.as_str())]);
    if section.body.is_empty() {
        writer.write_event(Event::Empty(start))?;
    } else {
        writer.write_event(Event::Start(start))?;
        writer.write_event(Event::Text(BytesText::from_escaped(partial_escape(&section.body))))?;
        writer.write_event(Event::End(BytesEnd::new("Section")))?;
    }
    Ok(())
}

pub fn export_json(code: &UsCode) -> Result<String> {
    Ok(serde_json::to_string_pretty(code)?)
}
