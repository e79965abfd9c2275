//! Saved quotations: snapshot records, JSON round-trip, and the storage
//! seam with an in-memory implementation. The company and buyer
//! directories hold the profiles a quotation is issued from and to.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use gst_invoice::core::*;
//! use gst_invoice::quotation::*;
//! use rust_decimal_macros::dec;
//!
//! let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
//! let mut book = QuotationBook::new();
//! let number = book.next_quotation_number(today);
//! assert_eq!(number, "QT-2406-001");
//!
//! let invoice = InvoiceBuilder::new(number, today)
//!     .add_line(LineItemBuilder::new("Desk", dec!(1), dec!(1000)).build())
//!     .regime(TaxRegime::Unified)
//!     .build_unchecked()
//!     .unwrap();
//!
//! let saved = book.insert(Quotation::snapshot(&invoice, None, QuotationStatus::Quotation)).unwrap();
//! assert_eq!(saved.total_after_tax, dec!(1180.00));
//! assert_eq!(book.next_quotation_number(today), "QT-2406-002");
//! ```

mod directory;
mod record;
mod store;

pub use directory::{
    BuyerDirectory, BuyerRecord, BuyerStore, CompanyDirectory, CompanyRecord, CompanyStore,
    Directory, DirectoryEntry,
};
pub use record::{Quotation, QuotationStatus};
pub use store::{QuotationBook, QuotationStore, save_invoice};
