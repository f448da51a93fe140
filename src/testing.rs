//! Builders for small tracked-change documents, shared by tests across the
//! workspace.

use crate::container::DOCUMENT_ENTRY;
use crate::runs::WML_NS;
use std::fs;
use std::io::{Cursor, Write};
use std::path::Path;
use zip::write::SimpleFileOptions;

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Wrap body markup in a `w:document` root.
pub fn document_xml(body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="{}"><w:body>{}</w:body></w:document>"#,
        WML_NS, body
    )
}

pub fn paragraph(parts: &[String]) -> String {
    format!("<w:p>{}</w:p>", parts.concat())
}

pub fn run(text: &str) -> String {
    format!(
        r#"<w:r><w:t xml:space="preserve">{}</w:t></w:r>"#,
        escape(text)
    )
}

pub fn del(id: &str, text: &str) -> String {
    format!(
        r#"<w:del w:id="{}" w:author="Editor"><w:r><w:delText xml:space="preserve">{}</w:delText></w:r></w:del>"#,
        id,
        escape(text)
    )
}

pub fn del_without_id(text: &str) -> String {
    format!(
        r#"<w:del w:author="Editor"><w:r><w:delText xml:space="preserve">{}</w:delText></w:r></w:del>"#,
        escape(text)
    )
}

pub fn ins(id: &str, text: &str) -> String {
    format!(
        r#"<w:ins w:id="{}" w:author="Editor"><w:r><w:t xml:space="preserve">{}</w:t></w:r></w:ins>"#,
        id,
        escape(text)
    )
}

/// A zip container holding the given entries.
pub fn docx_with_entries<B: AsRef<[u8]>>(entries: &[(&str, B)]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    for (name, content) in entries {
        writer
            .start_file(*name, SimpleFileOptions::default())
            .expect("start zip entry");
        writer.write_all(content.as_ref()).expect("write zip entry");
    }
    writer.finish().expect("finish zip").into_inner()
}

/// A container whose main markup entry is `document_xml`.
pub fn docx_bytes(document_xml: &str) -> Vec<u8> {
    docx_with_entries(&[(DOCUMENT_ENTRY, document_xml.as_bytes())])
}

/// Write a container to disk.
pub fn write_docx(path: &Path, document_xml: &str) {
    fs::write(path, docx_bytes(document_xml)).expect("write docx");
}
