use gst_invoice::core::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn line(id: u32, amount: Decimal) -> LineItem {
    LineItem::new(id, format!("Item {id}"), dec!(1), amount)
}

fn exempt(id: u32, amount: Decimal) -> LineItem {
    LineItem {
        tax_exempt: true,
        ..line(id, amount)
    }
}

const REGIMES: [TaxRegime; 3] = [TaxRegime::None, TaxRegime::SplitDomestic, TaxRegime::Unified];

// --- Line tax ---

#[test]
fn line_tax_standard_rate() {
    let t = compute_line_tax(dec!(100), dec!(18));
    assert_eq!(t.tax_amount, dec!(18.00));
    assert_eq!(t.total_amount, dec!(118.00));
}

#[test]
fn line_tax_fractional_rate() {
    // 999.99 * 0.25% = 2.499975 → 2.50
    let t = compute_line_tax(dec!(999.99), dec!(0.25));
    assert_eq!(t.tax_amount, dec!(2.50));
    assert_eq!(t.total_amount, dec!(1002.49));
}

#[test]
fn line_tax_zero_rate() {
    let t = compute_line_tax(dec!(450.50), dec!(0));
    assert_eq!(t.tax_amount, dec!(0));
    assert_eq!(t.total_amount, dec!(450.50));
}

#[test]
fn line_tax_midpoint_rounds_up() {
    // 12.50 * 5% = 0.625 → 0.63
    let t = compute_line_tax(dec!(12.50), dec!(5));
    assert_eq!(t.tax_amount, dec!(0.63));
    assert_eq!(t.total_amount, dec!(13.13));
}

// --- Invoice totals ---

#[test]
fn unified_single_line() {
    let totals = compute_invoice_totals(&[line(1, dec!(100))], dec!(18), TaxRegime::Unified);
    assert_eq!(totals.taxable_total, dec!(100));
    assert_eq!(totals.tax_total, dec!(18.00));
    assert_eq!(totals.grand_total, dec!(118.00));
    assert_eq!(totals.igst, dec!(18.00));
    assert_eq!(totals.cgst, dec!(0));
    assert_eq!(totals.sgst, dec!(0));
}

#[test]
fn exempt_line_any_regime() {
    for regime in REGIMES {
        let totals = compute_invoice_totals(&[exempt(1, dec!(200))], dec!(18), regime);
        assert_eq!(totals.tax_total, dec!(0), "{regime:?}");
        assert_eq!(totals.grand_total, dec!(200.00), "{regime:?}");
    }
}

#[test]
fn empty_items_all_zero() {
    for regime in REGIMES {
        let totals = compute_invoice_totals(&[], dec!(28), regime);
        assert!(totals.is_zero(), "{regime:?}");
    }
}

#[test]
fn no_regime_charges_no_tax() {
    let items = [line(1, dec!(100)), line(2, dec!(2500.75))];
    let totals = compute_invoice_totals(&items, dec!(18), TaxRegime::None);
    assert_eq!(totals.tax_total, dec!(0));
    assert_eq!(totals.taxable_total, dec!(2600.75));
    assert_eq!(totals.grand_total, dec!(2600.75));
    assert_eq!(totals.igst + totals.cgst + totals.sgst, dec!(0));
}

#[test]
fn split_domestic_even_halves() {
    let items = [line(1, dec!(1000)), line(2, dec!(500))];
    let totals = compute_invoice_totals(&items, dec!(18), TaxRegime::SplitDomestic);
    assert_eq!(totals.tax_total, dec!(270.00));
    assert_eq!(totals.cgst, dec!(135.00));
    assert_eq!(totals.sgst, dec!(135.00));
    assert_eq!(totals.igst, dec!(0));
    assert_eq!(totals.grand_total, dec!(1770.00));
}

#[test]
fn split_domestic_odd_paise() {
    // 10.10 * 12% = 1.212 → 1.21; halves 0.605 → 0.61 each.
    let totals = compute_invoice_totals(&[line(1, dec!(10.10))], dec!(12), TaxRegime::SplitDomestic);
    assert_eq!(totals.tax_total, dec!(1.21));
    assert_eq!(totals.cgst, dec!(0.61));
    assert_eq!(totals.sgst, dec!(0.61));
    assert!((totals.cgst + totals.sgst - totals.tax_total).abs() <= dec!(0.01));
}

#[test]
fn mixed_exempt_and_taxed() {
    let items = [line(1, dec!(1000)), exempt(2, dec!(300)), line(3, dec!(49.90))];
    let totals = compute_invoice_totals(&items, dec!(18), TaxRegime::Unified);
    // 180.00 + 8.982 → 8.98
    assert_eq!(totals.tax_total, dec!(188.98));
    assert_eq!(totals.taxable_total, dec!(1349.90));
    assert_eq!(totals.grand_total, dec!(1538.88));
    assert_eq!(totals.igst, totals.tax_total);
}

#[test]
fn tax_owed_same_for_split_and_unified() {
    let items = [line(1, dec!(123.45)), line(2, dec!(678.90)), line(3, dec!(0.99))];
    let split = compute_invoice_totals(&items, dec!(18), TaxRegime::SplitDomestic);
    let unified = compute_invoice_totals(&items, dec!(18), TaxRegime::Unified);
    assert_eq!(split.tax_total, unified.tax_total);
    assert_eq!(split.grand_total, unified.grand_total);
}

#[test]
fn negative_line_values_clamp() {
    let mut bad = line(1, dec!(100));
    bad.taxable_amount = dec!(-100);
    let totals = compute_invoice_totals(&[bad], dec!(18), TaxRegime::Unified);
    assert!(totals.is_zero());

    let totals = compute_invoice_totals(&[line(1, dec!(100))], dec!(-18), TaxRegime::Unified);
    assert_eq!(totals.tax_total, dec!(0));
    assert_eq!(totals.grand_total, dec!(100));
}

// --- Line items ---

#[test]
fn taxable_amount_is_derived() {
    let mut item = LineItem::new(1, "Cable", dec!(3), dec!(33.333));
    // 99.999 → 100.00
    assert_eq!(item.taxable_amount, dec!(100.00));

    item.set_quantity(dec!(2));
    assert_eq!(item.taxable_amount, dec!(66.67));

    item.set_unit_rate(dec!(10));
    assert_eq!(item.taxable_amount, dec!(20.00));

    item.set_quantity(dec!(-5));
    assert_eq!(item.quantity, dec!(0));
    assert_eq!(item.taxable_amount, dec!(0));
}

#[test]
fn legacy_line_from_amount() {
    let item = LineItem::from_amount(4, "Service", dec!(4), dec!(1000));
    assert_eq!(item.unit_rate, dec!(250));
    assert_eq!(item.taxable_amount, dec!(1000));

    let item = LineItem::from_amount(5, "Service", dec!(0), dec!(1000));
    assert_eq!(item.unit_rate, dec!(0));
    assert_eq!(item.taxable_amount, dec!(1000));
}

#[test]
fn row_breakdown_matches_printed_table() {
    let taxed = line(1, dec!(100));
    let free = exempt(2, dec!(100));

    let row = line_breakdown(&taxed, dec!(18), TaxRegime::SplitDomestic);
    assert_eq!(row.tax_amount, dec!(18.00));
    assert_eq!(row.total_amount, dec!(118.00));

    let row = line_breakdown(&free, dec!(18), TaxRegime::SplitDomestic);
    assert_eq!(row.tax_amount, dec!(0));
    assert_eq!(row.total_amount, dec!(100));

    let row = line_breakdown(&taxed, dec!(18), TaxRegime::None);
    assert_eq!(row.tax_amount, dec!(0));
}

// --- Form input coercion ---

#[test]
fn coerce_form_input() {
    assert_eq!(coerce_amount("18"), dec!(18));
    assert_eq!(coerce_amount("  2500.75"), dec!(2500.75));
    assert_eq!(coerce_amount(""), dec!(0));
    assert_eq!(coerce_amount("NaN"), dec!(0));
    assert_eq!(coerce_amount("-1"), dec!(0));
}

// --- Regime codes ---

#[test]
fn regime_codes_round_trip() {
    for regime in REGIMES {
        assert_eq!(TaxRegime::from_code(regime.code()), regime);
    }
    assert_eq!(TaxRegime::from_code("VAT"), TaxRegime::None);
    assert_eq!(TaxRegime::default(), TaxRegime::None);
}

#[test]
fn regime_serde_uses_stored_codes() {
    assert_eq!(
        serde_json::to_string(&TaxRegime::SplitDomestic).unwrap(),
        "\"CGST_SGST\""
    );
    assert_eq!(serde_json::to_string(&TaxRegime::None).unwrap(), "\"\"");
    let parsed: TaxRegime = serde_json::from_str("\"IGST\"").unwrap();
    assert_eq!(parsed, TaxRegime::Unified);
}
