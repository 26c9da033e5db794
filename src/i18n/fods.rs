// SPDX-License-Identifier: MPL-2.0
//! Flat OpenDocument spreadsheet (`.fods`) reading and writing.
//!
//! Only the subset needed for localization documents is understood: sheets,
//! rows, cells and the text inside them. Styles, formulas and cell types are
//! ignored.
//!
//! Supported text markup inside a cell:
//! - `text:p` - paragraphs, joined with `\n`
//! - `text:span` / `text:a` - inlined
//! - `text:s` - one or `text:c` spaces
//! - `text:tab` / `text:line-break` - `\t` / `\n`
//!
//! Cell annotations (`office:annotation`) are skipped.

use crate::error::{Error, Result};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

const OFFICE_NS: &str = "urn:oasis:names:tc:opendocument:xmlns:office:1.0";
const TABLE_NS: &str = "urn:oasis:names:tc:opendocument:xmlns:table:1.0";
const TEXT_NS: &str = "urn:oasis:names:tc:opendocument:xmlns:text:1.0";
const SPREADSHEET_MIMETYPE: &str = "application/vnd.oasis.opendocument.spreadsheet";

/// Upper bound for a single `text:s` run.
const MAX_SPACE_RUN: usize = 1024;

/// One non-empty row of a sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetRow {
    /// Name of the sheet the row belongs to.
    pub sheet: String,
    /// Zero-based row number within the sheet, counting repeated and empty rows.
    pub index: usize,
    /// Leading cells of the row, truncated to the requested width.
    pub cells: Vec<String>,
}

impl SheetRow {
    /// Returns the text of `column`, or `""` past the end of the row.
    #[must_use]
    pub fn cell(&self, column: usize) -> &str {
        self.cells.get(column).map_or("", String::as_str)
    }
}

/// Reads a document from disk. See [`read_rows`].
pub fn read_rows_from_path(path: &Path, columns_needed: usize) -> Result<Vec<SheetRow>> {
    let file = File::open(path)?;
    read_rows(BufReader::new(file), columns_needed)
}

/// Streams a flat ODS document and returns every row with at least one
/// non-empty cell among its first `columns_needed` cells.
///
/// Malformed XML, a document that ends inside an open table, row or cell,
/// and a document without any table are errors.
pub fn read_rows<R: BufRead>(source: R, columns_needed: usize) -> Result<Vec<SheetRow>> {
    let mut reader = Reader::from_reader(source);
    let mut buf = Vec::new();

    let mut rows = Vec::new();
    let mut tables_seen = 0usize;
    let mut sheet: Option<SheetState> = None;
    let mut row: Option<RowState> = None;
    let mut cell: Option<CellState> = None;
    let mut paragraph_depth = 0usize;
    let mut annotation_depth = 0usize;

    loop {
        let event = reader.read_event_into(&mut buf).map_err(|err| {
            Error::Parse(format!(
                "malformed XML at byte {}: {}",
                reader.buffer_position(),
                err
            ))
        })?;

        match event {
            Event::Start(ref e) => match e.local_name().as_ref() {
                b"table" => {
                    if sheet.is_some() {
                        return Err(Error::Parse("nested tables are not supported".into()));
                    }
                    tables_seen += 1;
                    let name = attribute(e, b"name")?.unwrap_or_default();
                    sheet = Some(SheetState::new(name));
                }
                b"table-row" => {
                    if sheet.is_none() {
                        return Err(Error::Parse("row outside of a table".into()));
                    }
                    row = Some(RowState::new(repeat_count(e, b"number-rows-repeated")?));
                }
                b"table-cell" | b"covered-table-cell" => {
                    if row.is_none() {
                        return Err(Error::Parse("cell outside of a row".into()));
                    }
                    cell = Some(CellState::new(repeat_count(e, b"number-columns-repeated")?));
                }
                b"annotation" => annotation_depth += 1,
                b"p" | b"h" => {
                    if let (Some(cell), 0) = (cell.as_mut(), annotation_depth) {
                        cell.begin_paragraph();
                        paragraph_depth += 1;
                    }
                }
                other => {
                    if paragraph_depth > 0 && annotation_depth == 0 {
                        if let Some(cell) = cell.as_mut() {
                            cell.push_markup(other, e)?;
                        }
                    }
                }
            },
            Event::Empty(ref e) => match e.local_name().as_ref() {
                b"table" => tables_seen += 1,
                b"table-row" => {
                    let Some(sheet) = sheet.as_mut() else {
                        return Err(Error::Parse("row outside of a table".into()));
                    };
                    sheet.skip_rows(repeat_count(e, b"number-rows-repeated")?);
                }
                b"table-cell" | b"covered-table-cell" => {
                    let Some(row) = row.as_mut() else {
                        return Err(Error::Parse("cell outside of a row".into()));
                    };
                    let repeated = repeat_count(e, b"number-columns-repeated")?;
                    row.push_cell(String::new(), repeated, columns_needed);
                }
                b"p" | b"h" => {
                    if let (Some(cell), 0) = (cell.as_mut(), annotation_depth) {
                        cell.begin_paragraph();
                    }
                }
                other => {
                    if paragraph_depth > 0 && annotation_depth == 0 {
                        if let Some(cell) = cell.as_mut() {
                            cell.push_markup(other, e)?;
                        }
                    }
                }
            },
            Event::Text(ref e) => {
                if paragraph_depth > 0 && annotation_depth == 0 {
                    if let Some(cell) = cell.as_mut() {
                        let text = e
                            .unescape()
                            .map_err(|err| Error::Parse(format!("invalid cell text: {err}")))?;
                        cell.text.push_str(&text);
                    }
                }
            }
            Event::CData(ref e) => {
                if paragraph_depth > 0 && annotation_depth == 0 {
                    if let Some(cell) = cell.as_mut() {
                        cell.text.push_str(&String::from_utf8_lossy(e));
                    }
                }
            }
            Event::End(ref e) => match e.local_name().as_ref() {
                b"table" => {
                    if row.is_some() {
                        return Err(Error::Parse("table closed inside a row".into()));
                    }
                    sheet = None;
                }
                b"table-row" => {
                    if let (Some(sheet), Some(finished)) = (sheet.as_mut(), row.take()) {
                        let index = sheet.rows_seen;
                        sheet.skip_rows(finished.repeated);
                        if finished.cells.iter().any(|c| !c.is_empty()) {
                            rows.push(SheetRow {
                                sheet: sheet.name.clone(),
                                index,
                                cells: finished.cells,
                            });
                        }
                    }
                }
                b"table-cell" | b"covered-table-cell" => {
                    if let (Some(row), Some(finished)) = (row.as_mut(), cell.take()) {
                        row.push_cell(finished.text, finished.repeated, columns_needed);
                    }
                    paragraph_depth = 0;
                }
                b"annotation" => annotation_depth = annotation_depth.saturating_sub(1),
                b"p" | b"h" => {
                    if cell.is_some() && annotation_depth == 0 {
                        paragraph_depth = paragraph_depth.saturating_sub(1);
                    }
                }
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if sheet.is_some() || row.is_some() || cell.is_some() {
        return Err(Error::Parse("unexpected end of document".into()));
    }
    if tables_seen == 0 {
        return Err(Error::Parse("no spreadsheet table found".into()));
    }

    Ok(rows)
}

struct SheetState {
    name: String,
    rows_seen: usize,
}

impl SheetState {
    fn new(name: String) -> Self {
        Self { name, rows_seen: 0 }
    }

    fn skip_rows(&mut self, count: usize) {
        self.rows_seen = self.rows_seen.saturating_add(count);
    }
}

struct RowState {
    cells: Vec<String>,
    repeated: usize,
}

impl RowState {
    fn new(repeated: usize) -> Self {
        Self {
            cells: Vec::new(),
            repeated,
        }
    }

    // Spreadsheets pad rows with huge repeated empty cells; only the
    // leading `limit` cells are ever materialized.
    fn push_cell(&mut self, text: String, repeated: usize, limit: usize) {
        let room = limit.saturating_sub(self.cells.len());
        let count = repeated.min(room);
        for _ in 0..count {
            self.cells.push(text.clone());
        }
    }
}

struct CellState {
    text: String,
    paragraphs: usize,
    repeated: usize,
}

impl CellState {
    fn new(repeated: usize) -> Self {
        Self {
            text: String::new(),
            paragraphs: 0,
            repeated,
        }
    }

    fn begin_paragraph(&mut self) {
        if self.paragraphs > 0 {
            self.text.push('\n');
        }
        self.paragraphs += 1;
    }

    fn push_markup(&mut self, local_name: &[u8], e: &BytesStart<'_>) -> Result<()> {
        match local_name {
            b"s" => {
                let count = repeat_count(e, b"c")?.min(MAX_SPACE_RUN);
                self.text.extend(std::iter::repeat_n(' ', count));
            }
            b"tab" => self.text.push('\t'),
            b"line-break" => self.text.push('\n'),
            _ => {}
        }
        Ok(())
    }
}

/// Finds an attribute by local name, ignoring its namespace prefix.
fn attribute(e: &BytesStart<'_>, local_name: &[u8]) -> Result<Option<String>> {
    for attr in e.attributes() {
        let attr = attr.map_err(|err| Error::Parse(format!("invalid attribute: {err}")))?;
        if attr.key.local_name().as_ref() == local_name {
            let value = attr
                .unescape_value()
                .map_err(|err| Error::Parse(format!("invalid attribute value: {err}")))?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}

fn repeat_count(e: &BytesStart<'_>, local_name: &[u8]) -> Result<usize> {
    match attribute(e, local_name)? {
        None => Ok(1),
        Some(value) => value
            .trim()
            .parse::<usize>()
            .ok()
            .filter(|count| *count > 0)
            .ok_or_else(|| Error::Parse(format!("invalid repeat count '{value}'"))),
    }
}

/// A sheet to be written with [`write_document`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sheet {
    pub name: String,
    pub rows: Vec<Vec<String>>,
}

impl Sheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rows: Vec::new(),
        }
    }

    /// Appends a row of cells.
    #[must_use]
    pub fn row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
        self
    }
}

/// Writes `sheets` as a flat ODS document.
///
/// Multi-line cell values become one `text:p` per line, so they read back
/// unchanged through [`read_rows`].
pub fn write_document<W: Write>(out: W, sheets: &[Sheet]) -> Result<()> {
    let mut writer = Writer::new_with_indent(out, b' ', 1);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    writer.write_event(Event::Start(BytesStart::new("office:document").with_attributes([
        ("xmlns:office", OFFICE_NS),
        ("xmlns:table", TABLE_NS),
        ("xmlns:text", TEXT_NS),
        ("office:version", "1.2"),
        ("office:mimetype", SPREADSHEET_MIMETYPE),
    ])))?;
    writer.write_event(Event::Start(BytesStart::new("office:body")))?;
    writer.write_event(Event::Start(BytesStart::new("office:spreadsheet")))?;

    for sheet in sheets {
        writer.write_event(Event::Start(
            BytesStart::new("table:table").with_attributes([("table:name", sheet.name.as_str())]),
        ))?;
        for row in &sheet.rows {
            writer.write_event(Event::Start(BytesStart::new("table:table-row")))?;
            for value in row {
                if value.is_empty() {
                    writer.write_event(Event::Empty(BytesStart::new("table:table-cell")))?;
                    continue;
                }
                writer.write_event(Event::Start(
                    BytesStart::new("table:table-cell")
                        .with_attributes([("office:value-type", "string")]),
                ))?;
                for line in value.split('\n') {
                    if line.is_empty() {
                        writer.write_event(Event::Empty(BytesStart::new("text:p")))?;
                    } else {
                        writer.write_event(Event::Start(BytesStart::new("text:p")))?;
                        writer.write_event(Event::Text(BytesText::new(line)))?;
                        writer.write_event(Event::End(BytesEnd::new("text:p")))?;
                    }
                }
                writer.write_event(Event::End(BytesEnd::new("table:table-cell")))?;
            }
            writer.write_event(Event::End(BytesEnd::new("table:table-row")))?;
        }
        writer.write_event(Event::End(BytesEnd::new("table:table")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("office:spreadsheet")))?;
    writer.write_event(Event::End(BytesEnd::new("office:body")))?;
    writer.write_event(Event::End(BytesEnd::new("office:document")))?;
    Ok(())
}

/// Writes `sheets` to `path`, replacing any existing file.
pub fn write_document_to_path(path: &Path, sheets: &[Sheet]) -> Result<()> {
    let file = File::create(path)?;
    let mut out = std::io::BufWriter::new(file);
    write_document(&mut out, sheets)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wrap(tables: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<office:document xmlns:office="{OFFICE_NS}" xmlns:table="{TABLE_NS}" xmlns:text="{TEXT_NS}">
 <office:body><office:spreadsheet>{tables}</office:spreadsheet></office:body>
</office:document>"#
        )
    }

    fn read(xml: &str, columns: usize) -> Result<Vec<SheetRow>> {
        read_rows(xml.as_bytes(), columns)
    }

    #[test]
    fn reads_cells_of_each_row() {
        let xml = wrap(
            r#"<table:table table:name="Sheet1">
  <table:table-row>
    <table:table-cell><text:p>Text</text:p></table:table-cell>
    <table:table-cell><text:p>menu.play</text:p></table:table-cell>
    <table:table-cell><text:p>Play</text:p></table:table-cell>
  </table:table-row>
</table:table>"#,
        );

        let rows = read(&xml, 3).expect("document should parse");

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].sheet, "Sheet1");
        assert_eq!(rows[0].index, 0);
        assert_eq!(rows[0].cells, vec!["Text", "menu.play", "Play"]);
    }

    #[test]
    fn expands_repeated_cells_up_to_needed_width() {
        let xml = wrap(
            r#"<table:table table:name="S">
  <table:table-row>
    <table:table-cell table:number-columns-repeated="2"><text:p>x</text:p></table:table-cell>
    <table:table-cell table:number-columns-repeated="16384"/>
  </table:table-row>
</table:table>"#,
        );

        let rows = read(&xml, 4).expect("document should parse");

        assert_eq!(rows[0].cells, vec!["x", "x", "", ""]);
    }

    #[test]
    fn counts_repeated_and_empty_rows_in_index() {
        let xml = wrap(
            r#"<table:table table:name="S">
  <table:table-row table:number-rows-repeated="3"><table:table-cell/></table:table-row>
  <table:table-row/>
  <table:table-row><table:table-cell><text:p>late</text:p></table:table-cell></table:table-row>
  <table:table-row table:number-rows-repeated="1048570"><table:table-cell/></table:table-row>
</table:table>"#,
        );

        let rows = read(&xml, 1).expect("document should parse");

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].index, 4);
        assert_eq!(rows[0].cell(0), "late");
    }

    #[test]
    fn joins_paragraphs_and_expands_markup() {
        let xml = wrap(
            r#"<table:table table:name="S"><table:table-row><table:table-cell>
<text:p>Hello<text:s text:c="3"/><text:span>big</text:span><text:tab/>world</text:p><text:p>second<text:line-break/>line</text:p><text:p/>
</table:table-cell></table:table-row></table:table>"#,
        );

        let rows = read(&xml, 1).expect("document should parse");

        assert_eq!(rows[0].cell(0), "Hello   big\tworld\nsecond\nline\n");
    }

    #[test]
    fn unescapes_entities() {
        let xml = wrap(
            r#"<table:table table:name="S"><table:table-row><table:table-cell><text:p>Fish &amp; Chips &lt;3</text:p></table:table-cell></table:table-row></table:table>"#,
        );

        let rows = read(&xml, 1).expect("document should parse");

        assert_eq!(rows[0].cell(0), "Fish & Chips <3");
    }

    #[test]
    fn skips_annotations() {
        let xml = wrap(
            r#"<table:table table:name="S"><table:table-row><table:table-cell>
<office:annotation><text:p>reviewer note</text:p></office:annotation><text:p>value</text:p>
</table:table-cell></table:table-row></table:table>"#,
        );

        let rows = read(&xml, 1).expect("document should parse");

        assert_eq!(rows[0].cell(0), "value");
    }

    #[test]
    fn keeps_sheet_names_per_row() {
        let xml = wrap(
            r#"<table:table table:name="Dialogue"><table:table-row><table:table-cell><text:p>a</text:p></table:table-cell></table:table-row></table:table>
<table:table table:name="Credits"><table:table-row><table:table-cell><text:p>b</text:p></table:table-cell></table:table-row></table:table>"#,
        );

        let rows = read(&xml, 1).expect("document should parse");

        assert_eq!(rows[0].sheet, "Dialogue");
        assert_eq!(rows[1].sheet, "Credits");
        assert_eq!(rows[1].index, 0);
    }

    #[test]
    fn mismatched_tags_are_a_parse_error() {
        let xml = wrap(r#"<table:table table:name="S"><table:table-row></table:table>"#);
        assert!(matches!(read(&xml, 1), Err(Error::Parse(_))));
    }

    #[test]
    fn rows_outside_a_table_are_a_parse_error() {
        let open_row = wrap(r#"<table:table-row><table:table-cell/></table:table-row><table:table/>"#);
        let empty_row = wrap(r#"<table:table-row/><table:table/>"#);
        let empty_cell = wrap(r#"<table:table table:name="S"><table:table-cell/></table:table>"#);

        assert!(matches!(read(&open_row, 1), Err(Error::Parse(_))));
        assert!(matches!(read(&empty_row, 1), Err(Error::Parse(_))));
        assert!(matches!(read(&empty_cell, 1), Err(Error::Parse(_))));
    }

    #[test]
    fn truncated_document_is_a_parse_error() {
        let xml = r#"<office:document><office:body><office:spreadsheet><table:table table:name="S"><table:table-row>"#;
        assert!(matches!(read(xml, 1), Err(Error::Parse(_))));
    }

    #[test]
    fn document_without_tables_is_a_parse_error() {
        assert!(matches!(read(&wrap(""), 1), Err(Error::Parse(_))));
        assert!(matches!(read("not xml at all", 1), Err(Error::Parse(_))));
    }

    #[test]
    fn invalid_repeat_count_is_a_parse_error() {
        let xml = wrap(
            r#"<table:table table:name="S"><table:table-row table:number-rows-repeated="lots"><table:table-cell/></table:table-row></table:table>"#,
        );
        assert!(matches!(read(&xml, 1), Err(Error::Parse(_))));
    }

    #[test]
    fn written_documents_read_back() {
        let sheets = vec![
            Sheet::new("Sheet1")
                .row(["Text", "greeting", "Hello & <welcome>"])
                .row(["Dialogue", "intro", "Line one\nLine two"])
                .row(["Text", "empty", ""]),
        ];
        let mut out = Vec::new();
        write_document(&mut out, &sheets).expect("write should succeed");

        let rows = read_rows(out.as_slice(), 3).expect("written document should parse");

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].cells, vec!["Text", "greeting", "Hello & <welcome>"]);
        assert_eq!(rows[1].cell(2), "Line one\nLine two");
        assert_eq!(rows[2].cell(1), "empty");
        assert_eq!(rows[2].cell(2), "");
    }
}
