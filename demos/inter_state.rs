use bijak::core::*;
use chrono::NaiveDate;
use rust_decimal_macros::dec;

fn main() {
    // Supplier in Maharashtra, customer in Delhi: IGST applies
    let invoice =
        InvoiceBuilder::new("INV-24-25-0042", NaiveDate::from_ymd_opt(2024, 9, 2).unwrap())
            .supplier(
                PartyBuilder::new("Unity Fabrications")
                    .gstin("27AAPFU0939F1ZV")
                    .state("Maharashtra")
                    .build(),
            )
            .customer(
                PartyBuilder::new("Indus Retail")
                    .gstin("07AAACI1681G1ZR")
                    .state("Delhi")
                    .build(),
            )
            .add_line(
                LineItemBuilder::new("Steel brackets", dec!(200), dec!(45))
                    .gst_rate(dec!(18))
                    .hsn("7308")
                    .unit("NOS")
                    .build(),
            )
            .build()
            .expect("invoice should be valid");

    let totals = invoice.totals.as_ref().unwrap();
    println!("Invoice: {} ({:?})", invoice.number, invoice.regime.unwrap());
    println!("IGST:    {}", totals.total_igst);
    println!("Total:   {}", totals.grand_total);

    // The split itself is a pure function over a line and a context
    let context = TaxContext::new("Maharashtra", "Delhi").unwrap();
    let line = LineItemBuilder::new("Steel brackets", dec!(1), dec!(100))
        .gst_rate(dec!(18))
        .build();
    let split = split_line_tax(&line, &context);
    println!("---");
    println!(
        "Single unit: taxable {}, igst {}, total {}",
        split.taxable_value, split.igst, split.total
    );

    // A missing party state is substituted explicitly, and says so
    let resolved = TaxContext::resolve(Some("Maharashtra"), None, "Maharashtra");
    println!(
        "Fallback context: regime {:?}, customer defaulted: {}",
        resolved.context.regime(),
        resolved.customer_defaulted
    );
}
