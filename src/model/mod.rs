//! Data model for the birth-time lookup.
//!
//! The [`Dataset`] is the worksheet content as ordered rows of strings; the
//! [`TimeInput`] is a validated clock time with its AM/PM designation.

mod dataset;
mod selection;
mod time;

pub use dataset::*;
pub use selection::*;
pub use time::*;
