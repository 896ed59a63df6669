//! XLSX reader implementation.

use std::path::Path;
use tracing::debug;

use super::shared_strings::SharedStrings;
use super::sheet::parse_sheet;
use super::workbook::first_sheet_part;
use crate::container::XlsxContainer;
use crate::error::Result;
use crate::model::Dataset;

/// Archive path of the shared-string table.
pub(crate) const SHARED_STRINGS_PART: &str = "xl/sharedStrings.xml";

/// Reader for the first worksheet of an XLSX workbook.
pub struct XlsxReader {
    container: XlsxContainer,
}

impl XlsxReader {
    /// Open an XLSX file for reading.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "opening workbook");
        Ok(Self::from_container(XlsxContainer::open(path)?))
    }

    /// Create a reader from bytes.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        Ok(Self::from_container(XlsxContainer::from_bytes(data)?))
    }

    /// Create a reader from a container.
    pub fn from_container(container: XlsxContainer) -> Self {
        Self { container }
    }

    /// Parse the shared-string table; the part is required.
    pub fn shared_strings(&self) -> Result<SharedStrings> {
        let xml = self.container.read_xml(SHARED_STRINGS_PART)?;
        SharedStrings::parse(&xml)
    }

    /// Archive path of the first worksheet.
    pub fn first_sheet_path(&self) -> String {
        first_sheet_part(&self.container)
    }

    /// Read the first worksheet as a dataset.
    pub fn read_dataset(&self) -> Result<Dataset> {
        let shared_strings = self.shared_strings()?;
        debug!(count = shared_strings.len(), "parsed shared strings");

        let sheet_path = self.first_sheet_path();
        let xml = self.container.read_xml(&sheet_path)?;
        let rows = parse_sheet(&xml, &shared_strings)?;
        debug!(sheet = %sheet_path, rows = rows.len(), "parsed worksheet");

        Ok(Dataset::from_rows(rows))
    }

    /// Get a reference to the container.
    pub fn container(&self) -> &XlsxContainer {
        &self.container
    }
}
