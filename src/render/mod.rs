//! Output rendering for lookup results.
//!
//! # Example
//!
//! ```
//! use birthtime::{render::*, Selection, Meridiem};
//!
//! let selection = Selection {
//!     time: "06:00".to_string(),
//!     meridiem: Meridiem::Pm,
//!     percentage: 0.0,
//!     row_index: 0,
//!     calibrated: false,
//!     cells: vec!["In".to_string(), "Gen 1:1".to_string()],
//! };
//!
//! let text = to_text(&selection);
//! assert!(text.ends_with("In Gen 1:1"));
//!
//! let json = to_json(&selection, JsonFormat::Compact)?;
//! assert!(json.contains("\"row_index\":0"));
//! # Ok::<(), birthtime::Error>(())
//! ```

mod json;
mod text;

pub use json::{to_json, JsonFormat};
pub use text::{
    read_error_message, to_text, HEADER_LINES, INVALID_ROW_MESSAGE, NO_DATA_MESSAGE,
    READ_ERROR_PREFIX,
};
