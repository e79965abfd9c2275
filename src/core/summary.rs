//! Print helpers for the invoice layout: tax summary rows, date format,
//! and the exported PDF file name.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::types::{InvoiceTotals, TaxRegime};

/// One labelled amount in the totals block beside the amount in words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub label: String,
    pub amount: Decimal,
}

impl SummaryRow {
    fn new(label: impl Into<String>, amount: Decimal) -> Self {
        Self {
            label: label.into(),
            amount,
        }
    }
}

/// Rows of the totals block, in print order.
///
/// ```
/// use gst_invoice::core::*;
/// use rust_decimal_macros::dec;
///
/// let items = [LineItem::new(1, "Chairs", dec!(4), dec!(250))];
/// let totals = compute_invoice_totals(&items, dec!(18), TaxRegime::SplitDomestic);
/// let rows = summary_rows(&totals, dec!(18), TaxRegime::SplitDomestic);
/// assert_eq!(rows[1].label, "Add: CGST 9%");
/// assert_eq!(rows[1].amount, dec!(90.00));
/// ```
pub fn summary_rows(totals: &InvoiceTotals, rate: Decimal, regime: TaxRegime) -> Vec<SummaryRow> {
    let mut rows = vec![SummaryRow::new(
        "Total Amount Before Tax",
        totals.taxable_total,
    )];

    match regime {
        TaxRegime::SplitDomestic => {
            let half = format_rate(rate / dec!(2));
            rows.push(SummaryRow::new(format!("Add: CGST {half}%"), totals.cgst));
            rows.push(SummaryRow::new(format!("Add: SGST {half}%"), totals.sgst));
        }
        TaxRegime::Unified => {
            rows.push(SummaryRow::new(
                format!("Add: IGST {}%", format_rate(rate)),
                totals.igst,
            ));
        }
        TaxRegime::None => rows.push(SummaryRow::new("GST 0%", Decimal::ZERO)),
    }

    rows.push(SummaryRow::new("Total Tax Amount", totals.tax_total));
    rows.push(SummaryRow::new("Total amount after tax", totals.grand_total));
    rows
}

/// Rate without trailing zeros: 18 → "18", 2.50 → "2.5".
pub fn format_rate(rate: Decimal) -> String {
    rate.normalize().to_string()
}

/// Amount with exactly two decimals, as printed in the item table.
pub fn format_amount(amount: Decimal) -> String {
    format!("{:.2}", super::tax::round2(amount))
}

/// `DD.MM.YY`, the date format of the printed header.
pub fn format_print_date(date: NaiveDate) -> String {
    date.format("%d.%m.%y").to_string()
}

/// File name of the exported PDF: `Invoice_{number}.pdf`.
///
/// Whitespace runs in the number become `-`; characters other than ASCII
/// letters, digits, `-` and `_` are dropped.
pub fn pdf_file_name(number: &str) -> String {
    let mut clean = String::with_capacity(number.len());
    let mut in_space = false;
    for c in number.chars() {
        if c.is_whitespace() {
            if !in_space {
                clean.push('-');
            }
            in_space = true;
            continue;
        }
        in_space = false;
        if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
            clean.push(c);
        }
    }
    format!("Invoice_{clean}.pdf")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name() {
        assert_eq!(pdf_file_name("QT-2406-001"), "Invoice_QT-2406-001.pdf");
        assert_eq!(pdf_file_name("INV 24/06  01"), "Invoice_INV-2406-01.pdf");
        assert_eq!(pdf_file_name("#42 (final)"), "Invoice_42-final.pdf");
    }

    #[test]
    fn rates() {
        assert_eq!(format_rate(dec!(18)), "18");
        assert_eq!(format_rate(dec!(18) / dec!(2)), "9");
        assert_eq!(format_rate(dec!(5) / dec!(2)), "2.5");
        assert_eq!(format_rate(dec!(12.00)), "12");
    }

    #[test]
    fn amounts() {
        assert_eq!(format_amount(dec!(18)), "18.00");
        assert_eq!(format_amount(dec!(0.125)), "0.13");
    }

    #[test]
    fn print_date() {
        let d = NaiveDate::from_ymd_opt(2024, 6, 5).unwrap();
        assert_eq!(format_print_date(d), "05.06.24");
    }

    #[test]
    fn no_regime_rows() {
        let totals = InvoiceTotals {
            taxable_total: dec!(200),
            grand_total: dec!(200),
            ..InvoiceTotals::default()
        };
        let rows = summary_rows(&totals, dec!(18), TaxRegime::None);
        let labels: Vec<_> = rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(
            labels,
            [
                "Total Amount Before Tax",
                "GST 0%",
                "Total Tax Amount",
                "Total amount after tax"
            ]
        );
    }
}
