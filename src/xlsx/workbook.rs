//! First-worksheet lookup through the workbook part and its relationships.

use quick_xml::events::Event;
use std::collections::HashMap;
use tracing::debug;

use crate::container::XlsxContainer;
use crate::error::{Error, Result};

pub(crate) const WORKBOOK_PART: &str = "xl/workbook.xml";
pub(crate) const WORKBOOK_RELS_PART: &str = "xl/_rels/workbook.xml.rels";
pub(crate) const DEFAULT_SHEET_PART: &str = "xl/worksheets/sheet1.xml";

/// Archive path of the first worksheet.
///
/// Follows the first `sheet` in `xl/workbook.xml` through the workbook
/// relationships; falls back to `xl/worksheets/sheet1.xml` when that chain is
/// missing, broken, or points at a part that is not in the archive.
pub(crate) fn first_sheet_part(container: &XlsxContainer) -> String {
    match resolve_first_sheet(container) {
        Ok(Some(path)) if container.exists(&path) => path,
        Ok(Some(path)) => {
            debug!(%path, "first sheet target not in archive, using default part");
            DEFAULT_SHEET_PART.to_string()
        }
        Ok(None) => DEFAULT_SHEET_PART.to_string(),
        Err(e) => {
            debug!(error = %e, "could not resolve first sheet, using default part");
            DEFAULT_SHEET_PART.to_string()
        }
    }
}

fn resolve_first_sheet(container: &XlsxContainer) -> Result<Option<String>> {
    if !container.exists(WORKBOOK_PART) || !container.exists(WORKBOOK_RELS_PART) {
        return Ok(None);
    }

    let Some(rel_id) = first_sheet_rel_id(&container.read_xml(WORKBOOK_PART)?)? else {
        return Ok(None);
    };
    let rels = parse_relationships(&container.read_xml(WORKBOOK_RELS_PART)?)?;

    Ok(rels
        .get(&rel_id)
        .map(|target| XlsxContainer::resolve_path(WORKBOOK_PART, target)))
}

/// Relationship id (`r:id`) of the first `sheet` element.
fn first_sheet_rel_id(xml: &str) -> Result<Option<String>> {
    let mut reader = quick_xml::Reader::from_str(xml);
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e))
                if e.local_name().as_ref() == b"sheet" =>
            {
                let rel_id = e
                    .attributes()
                    .flatten()
                    .find(|attr| {
                        attr.key.prefix().is_some() && attr.key.local_name().as_ref() == b"id"
                    })
                    .map(|attr| String::from_utf8_lossy(&attr.value).to_string());
                return Ok(rel_id);
            }
            Ok(Event::Eof) => return Ok(None),
            Err(e) => return Err(Error::XmlParse(e.to_string())),
            _ => {}
        }
        buf.clear();
    }
}

/// Map of relationship id to target from a `.rels` part.
fn parse_relationships(xml: &str) -> Result<HashMap<String, String>> {
    let mut rels = HashMap::new();
    let mut reader = quick_xml::Reader::from_str(xml);
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e))
                if e.local_name().as_ref() == b"Relationship" =>
            {
                let mut id = String::new();
                let mut target = String::new();

                for attr in e.attributes().flatten() {
                    match attr.key.as_ref() {
                        b"Id" => id = String::from_utf8_lossy(&attr.value).to_string(),
                        b"Target" => target = String::from_utf8_lossy(&attr.value).to_string(),
                        _ => {}
                    }
                }

                if !id.is_empty() && !target.is_empty() {
                    rels.insert(id, target);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(Error::XmlParse(e.to_string())),
            _ => {}
        }
        buf.clear();
    }

    Ok(rels)
}
