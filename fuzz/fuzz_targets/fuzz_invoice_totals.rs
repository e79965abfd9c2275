#![no_main]

use gst_invoice::core::*;
use libfuzzer_sys::fuzz_target;
use rust_decimal::Decimal;

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    let rate = Decimal::new(i64::from(data[0]), 1);
    let regime = match data[1] % 3 {
        0 => TaxRegime::None,
        1 => TaxRegime::SplitDomestic,
        _ => TaxRegime::Unified,
    };
    let items: Vec<LineItem> = data[2..]
        .chunks(5)
        .enumerate()
        .map(|(i, c)| {
            let qty = Decimal::from(c[0]);
            let paise = c.iter().skip(1).fold(0i64, |acc, b| acc * 256 + i64::from(*b));
            let mut item = LineItem::new(i as u32 + 1, "x", qty, Decimal::new(paise, 2));
            item.tax_exempt = c[0] % 5 == 0;
            item
        })
        .collect();

    let totals = compute_invoice_totals(&items, rate, regime);
    assert_eq!(totals.grand_total, totals.taxable_total + totals.tax_total);
});
