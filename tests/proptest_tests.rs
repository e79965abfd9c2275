//! Property-based tests for the tax engine and the amount-in-words formatter.
//!
//! Run with: `cargo test --test proptest_tests`

use gst_invoice::core::*;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ── Proptest Strategies ─────────────────────────────────────────────────────

/// Generate an amount with paise (0.00 to 9,999,999.99).
fn arb_amount() -> impl Strategy<Value = Decimal> {
    (0u64..1_000_000_000u64).prop_map(|paise| Decimal::new(paise as i64, 2))
}

/// Common GST slabs plus arbitrary two-decimal rates up to 100%.
fn arb_rate() -> impl Strategy<Value = Decimal> {
    prop_oneof![
        Just(dec!(0)),
        Just(dec!(5)),
        Just(dec!(12)),
        Just(dec!(18)),
        Just(dec!(28)),
        (0u32..=10_000u32).prop_map(|r| Decimal::new(r as i64, 2)),
    ]
}

fn arb_regime() -> impl Strategy<Value = TaxRegime> {
    prop_oneof![
        Just(TaxRegime::None),
        Just(TaxRegime::SplitDomestic),
        Just(TaxRegime::Unified),
    ]
}

fn arb_items() -> impl Strategy<Value = Vec<LineItem>> {
    prop::collection::vec(
        (1u32..=50u32, arb_amount(), any::<bool>()),
        0..20,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (qty, rate, exempt))| {
                let mut item =
                    LineItem::new(i as u32 + 1, "Item", Decimal::from(qty), rate / dec!(100));
                item.tax_exempt = exempt;
                item
            })
            .collect()
    })
}

// ── Tax engine ──────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn line_total_is_amount_plus_tax(amount in arb_amount(), rate in arb_rate()) {
        let t = compute_line_tax(amount, rate);
        prop_assert_eq!(t.total_amount, amount + t.tax_amount);
        prop_assert_eq!(t.tax_amount, t.tax_amount.round_dp(2));
        prop_assert!(t.tax_amount >= Decimal::ZERO);
    }

    #[test]
    fn grand_total_is_taxable_plus_tax(items in arb_items(), rate in arb_rate(), regime in arb_regime()) {
        let totals = compute_invoice_totals(&items, rate, regime);
        prop_assert_eq!(totals.grand_total, totals.taxable_total + totals.tax_total);
    }

    #[test]
    fn no_regime_means_no_tax(items in arb_items(), rate in arb_rate()) {
        let totals = compute_invoice_totals(&items, rate, TaxRegime::None);
        prop_assert_eq!(totals.tax_total, Decimal::ZERO);
        prop_assert_eq!(totals.grand_total, totals.taxable_total);
    }

    #[test]
    fn split_components_track_total(items in arb_items(), rate in arb_rate()) {
        let totals = compute_invoice_totals(&items, rate, TaxRegime::SplitDomestic);
        prop_assert_eq!(totals.cgst, totals.sgst);
        prop_assert_eq!(totals.igst, Decimal::ZERO);
        let tolerance = dec!(0.01) * Decimal::from(items.len().max(1) as u64);
        prop_assert!((totals.cgst + totals.sgst - totals.tax_total).abs() <= tolerance);
    }

    #[test]
    fn unified_component_is_whole_tax(items in arb_items(), rate in arb_rate()) {
        let totals = compute_invoice_totals(&items, rate, TaxRegime::Unified);
        prop_assert_eq!(totals.igst, totals.tax_total);
        prop_assert_eq!(totals.cgst + totals.sgst, Decimal::ZERO);
    }

    #[test]
    fn tax_total_sums_rounded_lines(items in arb_items(), rate in arb_rate()) {
        let totals = compute_invoice_totals(&items, rate, TaxRegime::Unified);
        let expected: Decimal = items
            .iter()
            .filter(|i| !i.tax_exempt)
            .map(|i| compute_line_tax(i.taxable_amount, rate).tax_amount)
            .sum();
        prop_assert_eq!(totals.tax_total, expected);
    }

    #[test]
    fn all_exempt_never_taxed(items in arb_items(), rate in arb_rate(), regime in arb_regime()) {
        let exempt: Vec<_> = items
            .into_iter()
            .map(|i| LineItem { tax_exempt: true, ..i })
            .collect();
        let totals = compute_invoice_totals(&exempt, rate, regime);
        prop_assert_eq!(totals.tax_total, Decimal::ZERO);
    }

    #[test]
    fn deterministic(items in arb_items(), rate in arb_rate(), regime in arb_regime()) {
        prop_assert_eq!(
            compute_invoice_totals(&items, rate, regime),
            compute_invoice_totals(&items, rate, regime)
        );
    }

    #[test]
    fn coerce_never_negative(s in "\\PC*") {
        prop_assert!(coerce_amount(&s) >= Decimal::ZERO);
    }
}

// ── Amount in words ─────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn words_frame(amount in arb_amount()) {
        let words = amount_to_words(amount);
        if amount.is_zero() {
            prop_assert_eq!(words, "Zero Only");
        } else {
            prop_assert!(words.starts_with("Rupees - "), "{}", words);
            prop_assert!(words.ends_with(" Only"), "{}", words);
            prop_assert!(!words.contains("  "), "{}", words);
        }
    }

    #[test]
    fn words_ignore_paise(rupees in 1u64..100_000_000_000u64, paise in 0u32..100u32) {
        let whole = Decimal::from(rupees);
        let with_paise = whole + Decimal::new(paise as i64, 2);
        prop_assert_eq!(amount_to_words(with_paise), amount_to_words(whole));
    }

    #[test]
    fn scale_words_match_magnitude(rupees in 1u64..1_000_000_000u64) {
        let words = amount_to_words(Decimal::from(rupees));
        prop_assert_eq!(words.contains("Crore"), rupees >= 10_000_000);
        prop_assert_eq!(words.contains("Lakh"), rupees % 10_000_000 >= 100_000);
        prop_assert_eq!(words.contains("Thousand"), rupees % 100_000 >= 1_000);
    }
}
