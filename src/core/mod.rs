//! Core invoice types, GST arithmetic, amount-in-words and validation.
//!
//! The tax engine ([`compute_invoice_totals`]) and the formatter
//! ([`amount_to_words`]) are pure functions; everything else here is the
//! document model around them.

mod builder;
mod error;
pub mod gstin;
mod numbering;
mod summary;
mod tax;
mod types;
mod validation;
pub mod words;

pub use builder::*;
pub use error::*;
pub(crate) use error::join_errors;
pub use gstin::{GstinFormatError, validate_gstin_format};
pub use numbering::*;
pub use summary::*;
pub use tax::*;
pub use types::*;
pub use validation::*;
pub use words::{AmountParts, amount_to_words, split_amount};
