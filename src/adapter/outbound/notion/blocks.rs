//! Markdown-to-block rendering.
//!
//! The workspace wants structured blocks, not markdown. Headings, bullets,
//! dividers, and bold runs map to their native block shapes; pipe-delimited
//! table rows are flattened to delimited paragraph text. Consecutive plain
//! lines fold into one paragraph and are run through the line-aligned
//! chunker so no rich-text object exceeds the per-object character cap.

use serde_json::{json, Value};

use crate::domain::chunk::{chunk_lines, DEFAULT_CHUNK_LEN};

/// The workspace accepts at most this many blocks per create/append call.
pub const MAX_BLOCKS_PER_REQUEST: usize = 100;

/// Render report markdown into an ordered block list.
#[must_use]
pub fn blocks_from_markdown(markdown: &str) -> Vec<Value> {
    let mut out = Vec::new();
    let mut pending: Vec<&str> = Vec::new();

    for line in markdown.lines() {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            flush_paragraph(&mut out, &mut pending);
        } else if let Some(rest) = trimmed.strip_prefix("### ") {
            flush_paragraph(&mut out, &mut pending);
            out.push(heading_block("heading_3", rest));
        } else if let Some(rest) = trimmed.strip_prefix("## ") {
            flush_paragraph(&mut out, &mut pending);
            out.push(heading_block("heading_2", rest));
        } else if let Some(rest) = trimmed.strip_prefix("# ") {
            flush_paragraph(&mut out, &mut pending);
            out.push(heading_block("heading_1", rest));
        } else if trimmed == "---" {
            flush_paragraph(&mut out, &mut pending);
            out.push(json!({ "object": "block", "type": "divider", "divider": {} }));
        } else if let Some(rest) = trimmed
            .strip_prefix("- ")
            .or_else(|| trimmed.strip_prefix("* "))
        {
            flush_paragraph(&mut out, &mut pending);
            out.push(json!({
                "object": "block",
                "type": "bulleted_list_item",
                "bulleted_list_item": { "rich_text": rich_text(rest) }
            }));
        } else if trimmed.starts_with('|') {
            flush_paragraph(&mut out, &mut pending);
            if let Some(row) = flatten_table_row(trimmed) {
                out.push(paragraph_block(vec![text_span(&row, false)]));
            }
        } else {
            pending.push(trimmed);
        }
    }
    flush_paragraph(&mut out, &mut pending);

    out
}

fn flush_paragraph(out: &mut Vec<Value>, pending: &mut Vec<&str>) {
    if pending.is_empty() {
        return;
    }
    let text = pending.join("\n");
    for chunk in chunk_lines(&text, DEFAULT_CHUNK_LEN) {
        out.push(paragraph_block(rich_text(&chunk)));
    }
    pending.clear();
}

fn heading_block(kind: &str, text: &str) -> Value {
    let mut block = json!({
        "object": "block",
        "type": kind,
    });
    block[kind] = json!({ "rich_text": rich_text(text) });
    block
}

fn paragraph_block(rich_text: Vec<Value>) -> Value {
    json!({
        "object": "block",
        "type": "paragraph",
        "paragraph": { "rich_text": rich_text }
    })
}

fn text_span(content: &str, bold: bool) -> Value {
    if bold {
        json!({
            "type": "text",
            "text": { "content": content },
            "annotations": { "bold": true }
        })
    } else {
        json!({
            "type": "text",
            "text": { "content": content }
        })
    }
}

/// Split `**bold**` runs into annotated spans. An unbalanced marker leaves
/// the text as a single literal span.
fn rich_text(text: &str) -> Vec<Value> {
    let parts: Vec<&str> = text.split("**").collect();
    if parts.len() % 2 == 0 {
        return vec![text_span(text, false)];
    }

    parts
        .iter()
        .enumerate()
        .filter(|(_, part)| !part.is_empty())
        .map(|(i, part)| text_span(part, i % 2 == 1))
        .collect()
}

/// Flatten a pipe-delimited row to ` | `-joined cell text. Returns `None`
/// for alignment/separator rows, which carry no content.
fn flatten_table_row(row: &str) -> Option<String> {
    let cells: Vec<&str> = row
        .trim_matches('|')
        .split('|')
        .map(str::trim)
        .collect();

    let is_separator = cells
        .iter()
        .all(|c| !c.is_empty() && c.chars().all(|ch| ch == '-' || ch == ':'));
    if is_separator {
        return None;
    }

    Some(cells.join(" | "))
}
