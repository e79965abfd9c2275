#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Errors are fine; panics are bugs.
        if let Ok(q) = gst_invoice::quotation::Quotation::from_json(s) {
            let _ = q.is_stale();
            let _ = q.restore(Default::default());
        }
    }
});
