#![no_main]

use libfuzzer_sys::fuzz_target;

use bijak::core::{FinancialYear, InvoiceNumberAllocator, PriorInvoice, credit_note_number, numeric_suffix};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Arbitrary customer names and prior numbers must not panic.
        let _ = numeric_suffix(s);
        let _ = credit_note_number(s);

        let date = FinancialYear::new(2024).start();
        let prior = [PriorInvoice::new(s, date)];
        let _ = InvoiceNumberAllocator::new().next(s, date, &prior);
    }
});
