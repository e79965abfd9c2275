//! # gst-invoice
//!
//! GST invoice and quotation library: line items, CGST/SGST/IGST totals,
//! the amount-in-words line in the Indian numbering system, and the
//! lifecycle of saved quotations.
//!
//! All monetary values use [`rust_decimal::Decimal`], never floating point.
//!
//! ## Quick Start
//!
//! ```rust
//! use gst_invoice::core::*;
//! use rust_decimal_macros::dec;
//!
//! let items = [
//!     LineItem::new(1, "Consulting", dec!(1), dec!(100)),
//! ];
//! let totals = compute_invoice_totals(&items, dec!(18), TaxRegime::Unified);
//! assert_eq!(totals.tax_total, dec!(18.00));
//! assert_eq!(totals.igst, dec!(18.00));
//! assert_eq!(totals.grand_total, dec!(118.00));
//! assert_eq!(amount_to_words(totals.grand_total), "Rupees - One Hundred Eighteen Only");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Document model, tax engine, amount in words, validation, numbering |
//! | `quotation` | Saved quotation records, JSON snapshots, in-memory store |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "quotation")]
pub mod quotation;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
