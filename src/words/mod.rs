//! Amount-in-words rendering for invoice footers.
//!
//! Renders rupee amounts in the Indian numbering system (Thousand, Lakh,
//! Crore) with a paise clause, as printed on GST invoices.
//!
//! # Example
//!
//! ```
//! use bijak::words::amount_in_words;
//! use rust_decimal_macros::dec;
//!
//! assert_eq!(
//!     amount_in_words(dec!(123456.78)),
//!     "One Lakh Twenty Three Thousand Four Hundred and Fifty Six and Seventy Eight Paise Only",
//! );
//! ```

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

const ONES: [&str; 20] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Eleven",
    "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen", "Eighteen", "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

/// Render an amount in words, Indian style: integer rupees, then a paise
/// clause for the fractional part (rounded to the nearest paisa), then
/// the customary " Only" suffix. Negative amounts are rendered by their
/// absolute value.
pub fn amount_in_words(amount: Decimal) -> String {
    let abs = amount.abs();
    let rupees = abs.trunc().to_u128().unwrap_or(0);
    let paise = (abs.fract() * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u128()
        .unwrap_or(0);

    let mut result = if rupees == 0 {
        "Zero".to_string()
    } else {
        convert(rupees)
    };
    if paise > 0 {
        result.push_str(" and ");
        result.push_str(&convert(paise));
        result.push_str(" Paise");
    }
    result.push_str(" Only");
    result
}

fn convert(n: u128) -> String {
    if n == 0 {
        return String::new();
    }
    if n < 20 {
        return ONES[n as usize].to_string();
    }
    if n < 100 {
        let rest = n % 10;
        return if rest != 0 {
            format!("{} {}", TENS[(n / 10) as usize], ONES[rest as usize])
        } else {
            TENS[(n / 10) as usize].to_string()
        };
    }
    if n < 1_000 {
        let rest = n % 100;
        return if rest != 0 {
            format!("{} Hundred and {}", ONES[(n / 100) as usize], convert(rest))
        } else {
            format!("{} Hundred", ONES[(n / 100) as usize])
        };
    }
    // Indian grouping: 2-2-3 above the thousands.
    let (divisor, scale) = if n < 100_000 {
        (1_000, "Thousand")
    } else if n < 10_000_000 {
        (100_000, "Lakh")
    } else {
        (10_000_000, "Crore")
    };
    let rest = n % divisor;
    if rest != 0 {
        format!("{} {} {}", convert(n / divisor), scale, convert(rest))
    } else {
        format!("{} {}", convert(n / divisor), scale)
    }
}
