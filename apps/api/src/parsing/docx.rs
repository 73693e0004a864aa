use std::io::{Cursor, Read, Seek};

use anyhow::{bail, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use tracing::debug;
use zip::result::ZipError;
use zip::ZipArchive;

use super::normalize::normalize_text;
use super::ParseError;

const PACKAGE_RELS: &str = "_rels/.rels";
const MAIN_PART_FALLBACK: &str = "word/document.xml";
const OFFICE_DOCUMENT_REL_SUFFIX: &str = "/officeDocument";

/// Extracts the text of every non-empty body paragraph, in document order.
///
/// Only paragraphs that are direct children of `w:body` count; table cells,
/// text boxes and drawing text are not part of the paragraph sequence.
pub fn extract_docx_text(bytes: &[u8]) -> Result<String, ParseError> {
    let paragraphs = read_paragraphs(bytes).map_err(|e| ParseError::Docx {
        detail: format!("{e:#}"),
    })?;
    debug!(paragraphs = paragraphs.len(), "Extracted DOCX paragraphs");

    let parts: Vec<&str> = paragraphs
        .iter()
        .map(String::as_str)
        .filter(|p| !p.is_empty())
        .collect();
    Ok(normalize_text(&parts.join("\n")))
}

fn read_paragraphs(bytes: &[u8]) -> Result<Vec<String>> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;
    let part = main_document_part(&mut archive)?;
    let xml = read_entry(&mut archive, &part)?;
    body_paragraphs(&xml)
}

/// Resolves the main document part through the package relationships.
fn main_document_part<R: Read + Seek>(archive: &mut ZipArchive<R>) -> Result<String> {
    let rels = match read_entry(archive, PACKAGE_RELS) {
        Ok(xml) => xml,
        Err(e) if matches!(e.downcast_ref::<ZipError>(), Some(ZipError::FileNotFound)) => {
            return Ok(MAIN_PART_FALLBACK.to_string())
        }
        Err(e) => return Err(e),
    };
    Ok(office_document_target(&rels)?.unwrap_or_else(|| MAIN_PART_FALLBACK.to_string()))
}

fn office_document_target(rels_xml: &str) -> Result<Option<String>> {
    let mut reader = Reader::from_str(rels_xml);
    loop {
        match reader.read_event()? {
            Event::Start(e) | Event::Empty(e) if e.local_name().as_ref() == b"Relationship" => {
                let rel_type = attr_value(&e, b"Type")?;
                let target = attr_value(&e, b"Target")?;
                if let (Some(rel_type), Some(target)) = (rel_type, target) {
                    if rel_type.ends_with(OFFICE_DOCUMENT_REL_SUFFIX) {
                        return Ok(Some(target.trim_start_matches('/').to_string()));
                    }
                }
            }
            Event::Eof => return Ok(None),
            _ => {}
        }
    }
}

fn attr_value(e: &BytesStart<'_>, key: &[u8]) -> Result<Option<String>> {
    for attr in e.attributes() {
        let attr = attr?;
        if attr.key.local_name().as_ref() == key {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}

fn read_entry<R: Read + Seek>(archive: &mut ZipArchive<R>, name: &str) -> Result<String> {
    let mut entry = archive.by_name(name)?;
    let mut buffer = Vec::new();
    entry.read_to_end(&mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

/// Walks `word/document.xml` and returns the text of each top-level paragraph,
/// empty ones included.
fn body_paragraphs(xml: &str) -> Result<Vec<String>> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(false);

    let mut path: Vec<Vec<u8>> = Vec::new();
    let mut paragraphs = Vec::new();
    let mut current: Option<String> = None;
    let mut saw_body = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let name = e.local_name().as_ref().to_vec();
                match current.as_mut() {
                    Some(text) if paragraph_depth(&path) == 1 => {
                        push_run_control(text, &e, &path)?
                    }
                    Some(_) => {}
                    None if name == b"p" && parent_is(&path, b"body") => {
                        current = Some(String::new())
                    }
                    None => {}
                }
                if name == b"body" {
                    saw_body = true;
                }
                path.push(name);
            }
            Event::Empty(e) => {
                let name = e.local_name();
                match current.as_mut() {
                    Some(text) if paragraph_depth(&path) == 1 => {
                        push_run_control(text, &e, &path)?
                    }
                    Some(_) => {}
                    None if name.as_ref() == b"p" && parent_is(&path, b"body") => {
                        paragraphs.push(String::new())
                    }
                    None => {}
                }
            }
            Event::Text(e) => {
                if let Some(text) = current.as_mut() {
                    if paragraph_depth(&path) == 1 && parent_is(&path, b"t") {
                        text.push_str(&e.unescape()?);
                    }
                }
            }
            Event::End(_) => {
                path.pop();
                if current.is_some() && parent_is(&path, b"body") {
                    paragraphs.extend(current.take());
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !saw_body {
        bail!("main document part has no body element");
    }
    Ok(paragraphs)
}

fn parent_is(path: &[Vec<u8>], name: &[u8]) -> bool {
    path.last().is_some_and(|last| last.as_slice() == name)
}

fn paragraph_depth(path: &[Vec<u8>]) -> usize {
    path.iter().filter(|n| n.as_slice() == b"p").count()
}

/// Run-level tabs and breaks. `w:tab` under `w:tabs` defines a tab stop and is skipped.
/// Only text-wrapping breaks (the default `w:br` type) become a newline; page and
/// column breaks contribute nothing.
fn push_run_control(text: &mut String, e: &BytesStart<'_>, path: &[Vec<u8>]) -> Result<()> {
    if !parent_is(path, b"r") {
        return Ok(());
    }
    match e.local_name().as_ref() {
        b"tab" => text.push('\t'),
        b"cr" => text.push('\n'),
        b"br" => match attr_value(e, b"type")?.as_deref() {
            None | Some("textWrapping") => text.push('\n'),
            Some(_) => {}
        },
        _ => {}
    }
    Ok(())
}
