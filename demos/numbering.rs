use bijak::core::*;
use chrono::NaiveDate;

fn main() {
    // Per-customer numbers: customer prefix + month + running sequence
    let allocator = InvoiceNumberAllocator::new();
    let june = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
    let july = NaiveDate::from_ymd_opt(2024, 7, 3).unwrap();

    let mut ramesh: Vec<PriorInvoice> = Vec::new();
    for date in [june, june, july] {
        let number = allocator.next("Ramesh Traders", date, &ramesh);
        println!("{date} => {number}");
        ramesh.push(PriorInvoice::new(number, date));
    }

    // Each customer sequences over their own history
    let number = allocator.next("Gupta Hardware", july, &[]);
    println!("{july} => {number}");

    // Sequential counter scoped to a financial year
    let fy = FinancialYear::containing(june);
    println!("---");
    println!("Financial year: {}", fy.label());
    let mut seq = InvoiceNumberSequence::new("INV-", fy);
    for _ in 0..3 {
        println!("sequence => {}", seq.next_number());
    }
    let next = seq.peek();
    println!("next up  => {next}");
    println!("credit note for {next} => {}", credit_note_number(&next));
}
