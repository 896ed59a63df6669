//! XLSX worksheet reader.
//!
//! Reads the shared-string table and the first worksheet of an Office Open
//! XML spreadsheet into a [`Dataset`](crate::Dataset).
//!
//! # Example
//!
//! ```no_run
//! use birthtime::xlsx::XlsxReader;
//!
//! let reader = XlsxReader::open("birthtime3.xlsx")?;
//! let dataset = reader.read_dataset()?;
//!
//! for row in dataset.rows() {
//!     println!("{}", row.joined());
//! }
//! # Ok::<(), birthtime::Error>(())
//! ```

mod reader;
mod shared_strings;
mod sheet;
mod workbook;

pub use reader::XlsxReader;
pub use shared_strings::SharedStrings;
