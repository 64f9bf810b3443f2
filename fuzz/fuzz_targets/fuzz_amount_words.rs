#![no_main]

use libfuzzer_sys::fuzz_target;
use rust_decimal::Decimal;

fuzz_target!(|data: &[u8]| {
    if data.len() < 9 {
        return;
    }
    let mantissa = i64::from_le_bytes([
        data[0], data[1], data[2], data[3], data[4], data[5], data[6], data[7],
    ]);
    let scale = u32::from(data[8]) % 29;
    // Any representable amount must render without panicking.
    let _ = bijak::words::amount_in_words(Decimal::new(mantissa, scale));
});
