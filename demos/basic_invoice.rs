use bijak::core::*;
use chrono::NaiveDate;
use rust_decimal_macros::dec;

fn main() {
    // A standard intra-state tax invoice: GST split into CGST + SGST
    let invoice = InvoiceBuilder::new("ramjun001", NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
        .due_date(NaiveDate::from_ymd_opt(2024, 7, 15).unwrap())
        .supplier(
            PartyBuilder::new("Sharma Electricals")
                .gstin("08AABCT1332L1ZE")
                .state("Rajasthan")
                .address("14 MI Road, Jaipur")
                .phone("+91 98290 12345")
                .build(),
        )
        .customer(
            PartyBuilder::new("Ramesh Traders")
                .state("Rajasthan")
                .address("Station Road, Ajmer")
                .build(),
        )
        .add_line(
            LineItemBuilder::new("Copper wire 4 sq mm", dec!(25), dec!(480))
                .gst_rate(dec!(18))
                .hsn("7408")
                .unit("KGS")
                .build(),
        )
        .add_line(
            LineItemBuilder::new("MCB switch 16A", dec!(10), dec!(95))
                .gst_rate(dec!(12))
                .hsn("8536")
                .unit("NOS")
                .discount(Discount::percent(dec!(5)))
                .build(),
        )
        .round_up_to(RoundUpTo::Ten)
        .payment_mode(PaymentMode::Upi)
        .build()
        .expect("invoice should be valid");

    let totals = invoice.totals.as_ref().unwrap();
    println!("Invoice:  {}", invoice.number);
    println!("Date:     {}", invoice.issue_date);
    println!("Supplier: {}", invoice.supplier.name);
    println!("Customer: {}", invoice.customer.name);
    println!("---");
    for line in &invoice.lines {
        let tax = line.tax.as_ref().unwrap();
        println!(
            "  {} x {} @ {} = {} (GST {}%)",
            line.quantity, line.description, line.rate, tax.total, line.gst_rate
        );
    }
    println!("---");
    println!("Subtotal:    {}", totals.subtotal);
    println!("CGST:        {}", totals.total_cgst);
    println!("SGST:        {}", totals.total_sgst);
    println!("Round-up:    {}", totals.round_up_amount);
    println!("Grand total: {}", totals.grand_total);
    println!("---");
    for slab in &totals.breakdown {
        println!(
            "  {}% slab: taxable {}, cgst {}, sgst {}",
            slab.gst_rate, slab.taxable_amount, slab.cgst, slab.sgst
        );
    }
}
