//! Rendering tests for amount-in-words output.
//!
//! Run with: `cargo test --features words --test words_tests`

#![cfg(feature = "words")]

use bijak::words::amount_in_words;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ---------------------------------------------------------------------------
// Fixed vectors
// ---------------------------------------------------------------------------

#[test]
fn typical_invoice_grand_totals() {
    assert_eq!(
        amount_in_words(dec!(1180)),
        "One Thousand One Hundred and Eighty Only"
    );
    assert_eq!(
        amount_in_words(dec!(15180)),
        "Fifteen Thousand One Hundred and Eighty Only"
    );
    assert_eq!(
        amount_in_words(dec!(10620)),
        "Ten Thousand Six Hundred and Twenty Only"
    );
}

#[test]
fn hundred_joiner_only_with_remainder() {
    assert_eq!(amount_in_words(dec!(800)), "Eight Hundred Only");
    assert_eq!(amount_in_words(dec!(808)), "Eight Hundred and Eight Only");
    assert_eq!(amount_in_words(dec!(880)), "Eight Hundred and Eighty Only");
    assert_eq!(amount_in_words(dec!(113)), "One Hundred and Thirteen Only");
}

#[test]
fn paise_only_amounts() {
    assert_eq!(amount_in_words(dec!(0.01)), "Zero and One Paise Only");
    assert_eq!(amount_in_words(dec!(0.99)), "Zero and Ninety Nine Paise Only");
}

#[test]
fn lakh_and_crore_boundaries() {
    assert_eq!(
        amount_in_words(dec!(99999)),
        "Ninety Nine Thousand Nine Hundred and Ninety Nine Only"
    );
    assert_eq!(amount_in_words(dec!(100000)), "One Lakh Only");
    assert_eq!(
        amount_in_words(dec!(9999999)),
        "Ninety Nine Lakh Ninety Nine Thousand Nine Hundred and Ninety Nine Only"
    );
    assert_eq!(amount_in_words(dec!(10000000)), "One Crore Only");
}

// ---------------------------------------------------------------------------
// Snapshot tests (insta)
// ---------------------------------------------------------------------------

#[test]
fn rupee_ladder_snapshot() {
    let amounts = [
        dec!(0),
        dec!(1),
        dec!(19),
        dec!(20),
        dec!(21),
        dec!(99),
        dec!(100),
        dec!(105),
        dec!(999),
        dec!(1000),
        dec!(1001),
        dec!(19999),
        dec!(100001),
        dec!(2500000000),
    ];
    let table = amounts
        .iter()
        .map(|amount| format!("{amount} => {}", amount_in_words(*amount)))
        .collect::<Vec<_>>()
        .join("\n");
    insta::assert_snapshot!(table, @r"
0 => Zero Only
1 => One Only
19 => Nineteen Only
20 => Twenty Only
21 => Twenty One Only
99 => Ninety Nine Only
100 => One Hundred Only
105 => One Hundred and Five Only
999 => Nine Hundred and Ninety Nine Only
1000 => One Thousand Only
1001 => One Thousand One Only
19999 => Nineteen Thousand Nine Hundred and Ninety Nine Only
100001 => One Lakh One Only
2500000000 => Two Hundred and Fifty Crore Only
");
}

#[test]
fn paise_ladder_snapshot() {
    let amounts = [
        dec!(0.05),
        dec!(1.01),
        dec!(45.67),
        dec!(777.77),
        dec!(1500.50),
        dec!(123456.78),
    ];
    let table = amounts
        .iter()
        .map(|amount| format!("{amount} => {}", amount_in_words(*amount)))
        .collect::<Vec<_>>()
        .join("\n");
    insta::assert_snapshot!(table, @r"
0.05 => Zero and Five Paise Only
1.01 => One and One Paise Only
45.67 => Forty Five and Sixty Seven Paise Only
777.77 => Seven Hundred and Seventy Seven and Seventy Seven Paise Only
1500.50 => One Thousand Five Hundred and Fifty Paise Only
123456.78 => One Lakh Twenty Three Thousand Four Hundred and Fifty Six and Seventy Eight Paise Only
");
}

// ---------------------------------------------------------------------------
// Invoice footer integration
// ---------------------------------------------------------------------------

#[test]
fn invoice_footer_line() {
    use bijak::core::*;
    use chrono::NaiveDate;

    let inv = InvoiceBuilder::new(
        "ramjun001",
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
    )
    .supplier(
        PartyBuilder::new("Sharma Electricals")
            .gstin("08AABCT1332L1ZE")
            .state("Rajasthan")
            .build(),
    )
    .customer(PartyBuilder::new("Ramesh Traders").state("Rajasthan").build())
    .add_line(
        LineItemBuilder::new("Ceiling fan", dec!(25), dec!(480))
            .gst_rate(dec!(18))
            .unit("NOS")
            .build(),
    )
    .add_line(
        LineItemBuilder::new("Extension board", dec!(10), dec!(95))
            .gst_rate(dec!(12))
            .discount(Discount::percent(dec!(5)))
            .unit("NOS")
            .build(),
    )
    .round_up_to(RoundUpTo::Ten)
    .build()
    .unwrap();

    let grand = inv.totals.as_ref().unwrap().grand_total;
    assert_eq!(grand, dec!(15180));
    let footer = format!("Rupees {}", amount_in_words(grand));
    insta::assert_snapshot!(footer, @"Rupees Fifteen Thousand One Hundred and Eighty Only");
}

#[test]
fn words_handle_decimal_extremes() {
    // 92233720368547758.07 — the crore tier recurses, never overflows.
    let text = amount_in_words(Decimal::new(i64::MAX, 2));
    assert!(text.contains("Crore"));
    assert!(text.ends_with(" Paise Only"));
}
