use chrono::{Datelike, NaiveDate};

use super::error::BijakError;

/// Indian financial year (1 April – 31 March), identified by its start year.
///
/// GST return periods and invoice number series run on the financial year,
/// not the calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FinancialYear {
    start_year: i32,
}

impl FinancialYear {
    /// The financial year starting 1 April of `start_year`.
    pub fn new(start_year: i32) -> Self {
        Self { start_year }
    }

    /// The financial year containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        let start_year = if date.month() < 4 {
            date.year() - 1
        } else {
            date.year()
        };
        Self { start_year }
    }

    /// Calendar year the financial year starts in.
    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    /// First day (1 April).
    pub fn start(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.start_year, 4, 1).unwrap_or(NaiveDate::MIN)
    }

    /// Last day (31 March).
    pub fn end(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.start_year + 1, 3, 31).unwrap_or(NaiveDate::MAX)
    }

    /// Whether `date` falls inside this financial year.
    pub fn contains(&self, date: NaiveDate) -> bool {
        Self::containing(date) == *self
    }

    /// The label used on invoice numbers and returns, e.g. "24-25".
    pub fn label(&self) -> String {
        format!(
            "{:02}-{:02}",
            self.start_year.rem_euclid(100),
            (self.start_year + 1).rem_euclid(100)
        )
    }

    /// The following financial year.
    pub fn next(&self) -> Self {
        Self {
            start_year: self.start_year + 1,
        }
    }
}

/// A previously issued invoice, as supplied by the persistence layer.
#[derive(Debug, Clone)]
pub struct PriorInvoice {
    pub number: String,
    pub issue_date: NaiveDate,
}

impl PriorInvoice {
    pub fn new(number: impl Into<String>, issue_date: NaiveDate) -> Self {
        Self {
            number: number.into(),
            issue_date,
        }
    }
}

/// Which prior invoices count toward the next sequence number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceScope {
    /// Only priors in the financial year of the allocation date (default).
    FinancialYear,
    /// All priors regardless of date.
    AllTime,
}

/// Derives the next invoice number for a customer from that customer's
/// invoice history.
///
/// Numbers follow `{customer prefix}{month}{sequence}` — the first three
/// alphabetic characters of the customer name lowercased (`inv` when the
/// name has none), the three-letter month of the allocation date, and a
/// zero-padded sequence. The sequence is the highest numeric suffix found
/// in the history plus one, so `ramjun007` is followed by `ramjul008`.
///
/// The derivation reads history and computes; it cannot guarantee
/// uniqueness when two writers allocate concurrently from the same
/// history. Callers that need that guarantee should allocate from a
/// transactional counter instead (see [`InvoiceNumberSequence`]).
#[derive(Debug, Clone)]
pub struct InvoiceNumberAllocator {
    zero_pad: usize,
    scope: SequenceScope,
}

impl InvoiceNumberAllocator {
    /// Create an allocator with 3-digit padding, scoped to the financial year.
    pub fn new() -> Self {
        Self {
            zero_pad: 3,
            scope: SequenceScope::FinancialYear,
        }
    }

    /// Set zero-padding width (default: 3, so "001").
    pub fn with_padding(mut self, width: usize) -> Self {
        self.zero_pad = width;
        self
    }

    /// Set which prior invoices count toward the sequence.
    pub fn with_scope(mut self, scope: SequenceScope) -> Self {
        self.scope = scope;
        self
    }

    /// Derive the next number for `customer_name` as of `as_of`.
    ///
    /// `prior` must be the invoices of that customer; priors outside the
    /// allocator's scope, and numbers without a numeric suffix, are ignored.
    pub fn next(&self, customer_name: &str, as_of: NaiveDate, prior: &[PriorInvoice]) -> String {
        let fy = FinancialYear::containing(as_of);
        let max_seq = prior
            .iter()
            .filter(|p| match self.scope {
                SequenceScope::FinancialYear => fy.contains(p.issue_date),
                SequenceScope::AllTime => true,
            })
            .filter_map(|p| numeric_suffix(&p.number))
            .max()
            .unwrap_or(0);
        format!(
            "{}{}{:0>width$}",
            name_prefix(customer_name),
            month_prefix(as_of),
            max_seq.saturating_add(1),
            width = self.zero_pad
        )
    }
}

impl Default for InvoiceNumberAllocator {
    fn default() -> Self {
        Self::new()
    }
}

/// The numeric suffix of an invoice number: its longest trailing run of
/// ASCII digits. `ramjun007` → 7, `INV-24-25-0042` → 42. Returns `None`
/// when the number does not end in a digit or the run overflows `u64`.
pub fn numeric_suffix(number: &str) -> Option<u64> {
    let bytes = number.as_bytes();
    let mut start = bytes.len();
    while start > 0 && bytes[start - 1].is_ascii_digit() {
        start -= 1;
    }
    if start == bytes.len() {
        return None;
    }
    number[start..].parse().ok()
}

/// Credit note number for an underlying invoice number.
pub fn credit_note_number(invoice_number: &str) -> String {
    format!("CN-{invoice_number}")
}

fn name_prefix(name: &str) -> String {
    let prefix: String = name
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .take(3)
        .map(|c| c.to_ascii_lowercase())
        .collect();
    if prefix.is_empty() { "inv".into() } else { prefix }
}

fn month_prefix(date: NaiveDate) -> &'static str {
    const MONTHS: [&str; 12] = [
        "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
    ];
    MONTHS[date.month0() as usize]
}

/// Gapless invoice number sequence generator.
///
/// Generates invoice numbers in the format `{prefix}{fy}-{sequential}`,
/// e.g. "INV-24-25-0001", "INV-24-25-0002", etc.
///
/// For callers that own an authoritative counter (a transactional store):
/// the struct tracks the next number and resets when the financial year
/// advances.
#[derive(Debug, Clone)]
pub struct InvoiceNumberSequence {
    prefix: String,
    fy: FinancialYear,
    next_number: u64,
    zero_pad: usize,
}

impl InvoiceNumberSequence {
    /// Create a new sequence starting at 1.
    pub fn new(prefix: impl Into<String>, fy: FinancialYear) -> Self {
        Self {
            prefix: prefix.into(),
            fy,
            next_number: 1,
            zero_pad: 4,
        }
    }

    /// Create a sequence continuing from a given number.
    pub fn starting_at(prefix: impl Into<String>, fy: FinancialYear, next_number: u64) -> Self {
        Self {
            prefix: prefix.into(),
            fy,
            next_number,
            zero_pad: 4,
        }
    }

    /// Set zero-padding width (default: 4, so "0001").
    pub fn with_padding(mut self, width: usize) -> Self {
        self.zero_pad = width;
        self
    }

    /// Generate the next invoice number.
    pub fn next_number(&mut self) -> String {
        let num = self.next_number;
        self.next_number += 1;
        format!(
            "{}{}-{:0>width$}",
            self.prefix,
            self.fy.label(),
            num,
            width = self.zero_pad
        )
    }

    /// Preview the next number without consuming it.
    pub fn peek(&self) -> String {
        format!(
            "{}{}-{:0>width$}",
            self.prefix,
            self.fy.label(),
            self.next_number,
            width = self.zero_pad
        )
    }

    /// The sequence's current financial year.
    pub fn financial_year(&self) -> FinancialYear {
        self.fy
    }

    /// Get the next number that will be issued (without prefix/formatting).
    pub fn next_raw(&self) -> u64 {
        self.next_number
    }

    /// Advance to a new financial year, resetting the counter to 1.
    pub fn advance_year(&mut self, new_fy: FinancialYear) -> Result<(), BijakError> {
        if new_fy <= self.fy {
            return Err(BijakError::Numbering(format!(
                "new financial year {} must be after current year {}",
                new_fy.label(),
                self.fy.label()
            )));
        }
        self.fy = new_fy;
        self.next_number = 1;
        Ok(())
    }

    /// Auto-advance when the given date falls in a later financial year.
    /// Returns true if the year was advanced.
    pub fn auto_advance(&mut self, date: NaiveDate) -> bool {
        let fy = FinancialYear::containing(date);
        if fy > self.fy {
            self.fy = fy;
            self.next_number = 1;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn financial_year_boundaries() {
        assert_eq!(FinancialYear::containing(date(2024, 3, 31)), FinancialYear::new(2023));
        assert_eq!(FinancialYear::containing(date(2024, 4, 1)), FinancialYear::new(2024));
        assert_eq!(FinancialYear::containing(date(2025, 1, 15)), FinancialYear::new(2024));

        let fy = FinancialYear::new(2024);
        assert_eq!(fy.start(), date(2024, 4, 1));
        assert_eq!(fy.end(), date(2025, 3, 31));
        assert!(fy.contains(date(2024, 6, 1)));
        assert!(fy.contains(date(2025, 3, 31)));
        assert!(!fy.contains(date(2024, 3, 31)));
        assert_eq!(fy.label(), "24-25");
        assert_eq!(fy.next().label(), "25-26");
    }

    #[test]
    fn suffix_extraction() {
        assert_eq!(numeric_suffix("ramjun007"), Some(7));
        assert_eq!(numeric_suffix("INV-24-25-0042"), Some(42));
        assert_eq!(numeric_suffix("42"), Some(42));
        assert_eq!(numeric_suffix("draft"), None);
        assert_eq!(numeric_suffix(""), None);
        // 21 digits overflows u64 and is ignored.
        assert_eq!(numeric_suffix("x999999999999999999999"), None);
    }

    #[test]
    fn first_allocation() {
        let allocator = InvoiceNumberAllocator::new();
        let number = allocator.next("Ramesh Traders", date(2024, 6, 14), &[]);
        assert_eq!(number, "ramjun001");
    }

    #[test]
    fn allocation_continues_across_months() {
        let allocator = InvoiceNumberAllocator::new();
        let prior = vec![
            PriorInvoice::new("ramjun001", date(2024, 6, 3)),
            PriorInvoice::new("ramjun002", date(2024, 6, 20)),
        ];
        let number = allocator.next("Ramesh Traders", date(2024, 7, 2), &prior);
        assert_eq!(number, "ramjul003");
    }

    #[test]
    fn allocation_takes_the_maximum_not_the_count() {
        let allocator = InvoiceNumberAllocator::new();
        // A deleted invoice leaves a gap; max+1 never reuses 9.
        let prior = vec![PriorInvoice::new("ramjun009", date(2024, 6, 3))];
        let number = allocator.next("Ramesh Traders", date(2024, 6, 10), &prior);
        assert_eq!(number, "ramjun010");
    }

    #[test]
    fn allocation_is_scoped_to_the_financial_year() {
        let allocator = InvoiceNumberAllocator::new();
        let prior = vec![
            PriorInvoice::new("rammar031", date(2024, 3, 30)), // FY 23-24
            PriorInvoice::new("ramapr002", date(2024, 4, 5)),  // FY 24-25
        ];
        let number = allocator.next("Ramesh Traders", date(2024, 5, 1), &prior);
        assert_eq!(number, "rammay003");

        let all_time = InvoiceNumberAllocator::new().with_scope(SequenceScope::AllTime);
        let number = all_time.next("Ramesh Traders", date(2024, 5, 1), &prior);
        assert_eq!(number, "rammay032");
    }

    #[test]
    fn allocation_ignores_unnumbered_priors() {
        let allocator = InvoiceNumberAllocator::new();
        let prior = vec![
            PriorInvoice::new("draft", date(2024, 6, 1)),
            PriorInvoice::new("ramjun004", date(2024, 6, 2)),
        ];
        let number = allocator.next("Ramesh Traders", date(2024, 6, 9), &prior);
        assert_eq!(number, "ramjun005");
    }

    #[test]
    fn allocation_prefix_fallback() {
        let allocator = InvoiceNumberAllocator::new();
        assert_eq!(allocator.next("99 Stores", date(2024, 6, 1), &[]), "stojun001");
        assert_eq!(allocator.next("#42", date(2024, 6, 1), &[]), "invjun001");
        assert_eq!(allocator.next("Vi", date(2024, 6, 1), &[]), "vijun001");
    }

    #[test]
    fn allocation_is_monotonic_when_fed_back() {
        let allocator = InvoiceNumberAllocator::new();
        let as_of = date(2024, 9, 9);
        let mut prior: Vec<PriorInvoice> = Vec::new();
        let mut last = 0;
        for _ in 0..5 {
            let number = allocator.next("Ramesh Traders", as_of, &prior);
            let suffix = numeric_suffix(&number).unwrap();
            assert!(suffix > last);
            last = suffix;
            prior.push(PriorInvoice::new(number, as_of));
        }
    }

    #[test]
    fn custom_allocator_padding() {
        let allocator = InvoiceNumberAllocator::new().with_padding(5);
        assert_eq!(
            allocator.next("Ramesh Traders", date(2024, 6, 14), &[]),
            "ramjun00001"
        );
    }

    #[test]
    fn sequential_numbering() {
        let mut seq = InvoiceNumberSequence::new("INV-", FinancialYear::new(2024));
        assert_eq!(seq.next_number(), "INV-24-25-0001");
        assert_eq!(seq.next_number(), "INV-24-25-0002");
        assert_eq!(seq.next_number(), "INV-24-25-0003");
    }

    #[test]
    fn peek_does_not_consume() {
        let mut seq = InvoiceNumberSequence::new("INV-", FinancialYear::new(2024));
        assert_eq!(seq.peek(), "INV-24-25-0001");
        assert_eq!(seq.peek(), "INV-24-25-0001");
        assert_eq!(seq.next_number(), "INV-24-25-0001");
        assert_eq!(seq.peek(), "INV-24-25-0002");
    }

    #[test]
    fn starting_at() {
        let mut seq = InvoiceNumberSequence::starting_at("INV-", FinancialYear::new(2024), 42);
        assert_eq!(seq.next_number(), "INV-24-25-0042");
        assert_eq!(seq.next_number(), "INV-24-25-0043");
    }

    #[test]
    fn custom_padding() {
        let mut seq =
            InvoiceNumberSequence::new("B", FinancialYear::new(2024)).with_padding(3);
        assert_eq!(seq.next_number(), "B24-25-001");
    }

    #[test]
    fn year_advance() {
        let mut seq = InvoiceNumberSequence::new("INV-", FinancialYear::new(2024));
        seq.next_number(); // INV-24-25-0001
        seq.next_number(); // INV-24-25-0002
        seq.advance_year(FinancialYear::new(2025)).unwrap();
        assert_eq!(seq.next_number(), "INV-25-26-0001");
    }

    #[test]
    fn year_advance_rejects_past() {
        let mut seq = InvoiceNumberSequence::new("INV-", FinancialYear::new(2024));
        assert!(seq.advance_year(FinancialYear::new(2023)).is_err());
        assert!(seq.advance_year(FinancialYear::new(2024)).is_err());
    }

    #[test]
    fn auto_advance_follows_the_financial_year() {
        let mut seq = InvoiceNumberSequence::new("INV-", FinancialYear::new(2024));
        seq.next_number(); // INV-24-25-0001

        // January is still FY 24-25.
        assert!(!seq.auto_advance(date(2025, 1, 10)));
        assert_eq!(seq.next_number(), "INV-24-25-0002");

        // April rolls into FY 25-26.
        assert!(seq.auto_advance(date(2025, 4, 1)));
        assert_eq!(seq.next_number(), "INV-25-26-0001");
    }

    #[test]
    fn credit_note_prefix() {
        assert_eq!(credit_note_number("ramjun007"), "CN-ramjun007");
        assert_eq!(credit_note_number("INV-24-25-0042"), "CN-INV-24-25-0042");
    }
}
