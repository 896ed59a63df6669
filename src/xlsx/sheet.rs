//! Worksheet cell grid parsing.

use quick_xml::events::{BytesStart, Event};

use super::shared_strings::SharedStrings;
use crate::error::{Error, Result};
use crate::model::Row;

/// A cell whose closing tag has not been seen yet.
#[derive(Debug, Default)]
struct PendingCell {
    reference: Option<String>,
    shared: bool,
    value: Option<String>,
}

impl PendingCell {
    fn from_start(e: &BytesStart<'_>) -> Self {
        let mut cell = Self::default();
        for attr in e.attributes().flatten() {
            match attr.key.local_name().as_ref() {
                b"t" => cell.shared = attr.value.as_ref() == b"s",
                b"r" => cell.reference = Some(String::from_utf8_lossy(&attr.value).to_string()),
                _ => {}
            }
        }
        cell
    }

    fn location(&self) -> &str {
        self.reference.as_deref().unwrap_or("?")
    }

    /// Shared-string cells look up their value; all others keep the `v` text.
    fn resolve(self, shared_strings: &SharedStrings) -> Result<String> {
        if !self.shared {
            return Ok(self.value.unwrap_or_default());
        }

        let raw = self.value.as_deref().ok_or_else(|| {
            Error::InvalidData(format!(
                "shared string cell {} has no value",
                self.location()
            ))
        })?;
        let index: usize = raw.trim().parse().map_err(|_| {
            Error::InvalidData(format!(
                "shared string cell {} has non-numeric index {:?}",
                self.location(),
                raw
            ))
        })?;

        shared_strings
            .get(index)
            .map(str::to_string)
            .ok_or_else(|| {
                Error::InvalidData(format!(
                    "shared string index {} in cell {} is out of range ({} strings)",
                    index,
                    self.location(),
                    shared_strings.len()
                ))
            })
    }
}

/// Parse worksheet XML into rows of cell values, in document order.
///
/// Column references are not used for placement: cells are appended in the
/// order they appear, and rows without cells stay as empty rows.
pub(crate) fn parse_sheet(xml: &str, shared_strings: &SharedStrings) -> Result<Vec<Row>> {
    let mut rows = Vec::new();
    let mut reader = quick_xml::Reader::from_str(xml);

    let mut buf = Vec::new();
    let mut current_row: Option<Row> = None;
    let mut current_cell: Option<PendingCell> = None;
    let mut in_value = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => match e.local_name().as_ref() {
                b"row" => current_row = Some(Row::new()),
                b"c" if current_row.is_some() => current_cell = Some(PendingCell::from_start(e)),
                b"v" => {
                    if let Some(cell) = current_cell.as_mut() {
                        cell.value.get_or_insert_with(String::new);
                        in_value = true;
                    }
                }
                _ => {}
            },
            Ok(Event::Empty(ref e)) => match e.local_name().as_ref() {
                // <row/> still occupies a position in the grid
                b"row" => rows.push(Row::new()),
                // <c/> is a styled cell with no value; shared ones fail in resolve
                b"c" => {
                    if let Some(row) = current_row.as_mut() {
                        row.add_cell(PendingCell::from_start(e).resolve(shared_strings)?);
                    }
                }
                // <v/> is an empty value, which differs from no value at all
                b"v" => {
                    if let Some(cell) = current_cell.as_mut() {
                        cell.value.get_or_insert_with(String::new);
                    }
                }
                _ => {}
            },
            // Text outside <v> (formulas, inline strings) is ignored
            Ok(Event::Text(ref e)) if in_value => {
                let text = e.unescape().map_err(|e| Error::XmlParse(e.to_string()))?;
                if let Some(value) = current_cell.as_mut().and_then(|c| c.value.as_mut()) {
                    value.push_str(&text);
                }
            }
            Ok(Event::CData(ref e)) if in_value => {
                if let Some(value) = current_cell.as_mut().and_then(|c| c.value.as_mut()) {
                    value.push_str(&String::from_utf8_lossy(e));
                }
            }
            Ok(Event::End(ref e)) => match e.local_name().as_ref() {
                b"v" => in_value = false,
                // A cell outside any row is dropped
                b"c" => {
                    if let (Some(cell), Some(row)) = (current_cell.take(), current_row.as_mut()) {
                        row.add_cell(cell.resolve(shared_strings)?);
                    }
                }
                b"row" => {
                    if let Some(row) = current_row.take() {
                        rows.push(row);
                    }
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(Error::XmlParse(e.to_string())),
            _ => {}
        }
        buf.clear();
    }

    Ok(rows)
}
