//! GST arithmetic.
//!
//! All functions here are total: negative inputs are clamped to zero,
//! arithmetic saturates at [`Decimal::MAX`], and nothing returns an error.
//! Rounding is half-up (commercial) to 2 places, applied once per computed
//! value.
//!
//! Near [`Decimal::MAX`] a line's tax is capped at the headroom left above
//! its taxable amount, so `total_amount == taxable_amount + tax_amount` still
//! holds; invoice sums that would exceed `Decimal::MAX` stick at it.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use super::types::{InvoiceTotals, LineItem, LineTax, TaxRegime};

/// Tax and total for a single taxable amount at `rate` percent.
///
/// ```
/// use gst_invoice::core::compute_line_tax;
/// use rust_decimal_macros::dec;
///
/// let line = compute_line_tax(dec!(100), dec!(18));
/// assert_eq!(line.tax_amount, dec!(18.00));
/// assert_eq!(line.total_amount, dec!(118.00));
/// ```
pub fn compute_line_tax(taxable_amount: Decimal, rate: Decimal) -> LineTax {
    let taxable_amount = non_negative(taxable_amount);
    let rate = non_negative(rate);
    let tax = taxable_amount
        .checked_mul(rate)
        .map(|product| product / dec!(100))
        .or_else(|| taxable_amount.checked_mul(rate / dec!(100)))
        .map(round2)
        .unwrap_or(Decimal::MAX);
    let tax_amount = tax.min(Decimal::MAX - taxable_amount);
    LineTax {
        tax_amount,
        total_amount: round2(taxable_amount.saturating_add(tax_amount)),
    }
}

/// Compute invoice totals for `items` at a shared `rate` under `regime`.
///
/// Exempt lines, and every line under [`TaxRegime::None`], contribute zero
/// tax. Totals are sums of the rounded per-line values. Under
/// [`TaxRegime::SplitDomestic`] each line's tax is halved into CGST and SGST;
/// the halves are summed unrounded and each aggregate rounded once.
pub fn compute_invoice_totals(
    items: &[LineItem],
    rate: Decimal,
    regime: TaxRegime,
) -> InvoiceTotals {
    let mut taxable_total = Decimal::ZERO;
    let mut tax_total = Decimal::ZERO;
    let mut half_total = Decimal::ZERO;
    let mut igst = Decimal::ZERO;

    for item in items {
        let taxable = round2(non_negative(item.taxable_amount));
        taxable_total = taxable_total.saturating_add(taxable);

        if item.tax_exempt || !regime.is_taxed() {
            continue;
        }

        let line = compute_line_tax(taxable, rate);
        tax_total = tax_total.saturating_add(line.tax_amount);
        match regime {
            TaxRegime::SplitDomestic => {
                half_total = half_total.saturating_add(line.tax_amount / dec!(2))
            }
            TaxRegime::Unified => igst = igst.saturating_add(line.tax_amount),
            TaxRegime::None => {}
        }
    }

    let half = round2(half_total);
    InvoiceTotals {
        taxable_total,
        tax_total,
        grand_total: taxable_total.saturating_add(tax_total),
        cgst: half,
        sgst: half,
        igst,
    }
}

/// Per-row figures shown in the printed item table.
///
/// Exempt rows and rows under [`TaxRegime::None`] show zero tax.
pub fn line_breakdown(item: &LineItem, rate: Decimal, regime: TaxRegime) -> LineTax {
    match effective_rate(item, rate, regime) {
        Some(rate) => compute_line_tax(item.taxable_amount, rate),
        None => compute_line_tax(item.taxable_amount, Decimal::ZERO),
    }
}

/// Rate printed in the "GST %" column, or `None` when the row is exempt.
///
/// Under [`TaxRegime::None`] taxed rows print a zero rate.
pub fn effective_rate(item: &LineItem, rate: Decimal, regime: TaxRegime) -> Option<Decimal> {
    if item.tax_exempt {
        return None;
    }
    if regime.is_taxed() {
        Some(non_negative(rate))
    } else {
        Some(Decimal::ZERO)
    }
}

/// Parse a numeric form field, returning zero for blank, non-numeric or
/// negative input.
///
/// ```
/// use gst_invoice::core::coerce_amount;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(coerce_amount(" 12.50 "), dec!(12.50));
/// assert_eq!(coerce_amount("abc"), dec!(0));
/// assert_eq!(coerce_amount("-4"), dec!(0));
/// ```
pub fn coerce_amount(input: &str) -> Decimal {
    let input = input.trim();
    Decimal::from_str(input)
        .or_else(|_| Decimal::from_scientific(input))
        .map(non_negative)
        .unwrap_or(Decimal::ZERO)
}

/// `quantity * unit_rate`, rounded to 2 places.
pub fn taxable_amount(quantity: Decimal, unit_rate: Decimal) -> Decimal {
    round2(non_negative(quantity).saturating_mul(non_negative(unit_rate)))
}

/// Round to 2 decimal places, half-up.
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

pub(crate) fn non_negative(value: Decimal) -> Decimal {
    if value.is_sign_negative() {
        Decimal::ZERO
    } else {
        value
    }
}
