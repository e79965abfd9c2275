#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic for any parsed amount, including huge or negative ones.
        let amount = gst_invoice::core::coerce_amount(s);
        let words = gst_invoice::core::amount_to_words(amount);
        assert!(words.ends_with("Only"));
    }
});
