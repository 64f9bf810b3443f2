use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::error::BijakError;
use super::tax;
use super::types::*;
use super::validation;

/// Builder for constructing valid invoices.
///
/// ```
/// use bijak::core::*;
/// use rust_decimal_macros::dec;
/// use chrono::NaiveDate;
///
/// let invoice = InvoiceBuilder::new("ramjun001", NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
///     .supplier(PartyBuilder::new("Sharma Electricals")
///         .gstin("08AABCT1332L1ZE")
///         .state("Rajasthan")
///         .build())
///     .customer(PartyBuilder::new("Ramesh Traders")
///         .state("Rajasthan")
///         .build())
///     .add_line(LineItemBuilder::new("Copper wire", dec!(2), dec!(500))
///         .gst_rate(dec!(18))
///         .unit("KGS")
///         .build())
///     .build()
///     .unwrap();
///
/// let totals = invoice.totals.as_ref().unwrap();
/// assert_eq!(totals.total_cgst, dec!(90));
/// assert_eq!(totals.total_sgst, dec!(90));
/// assert_eq!(totals.grand_total, dec!(1180));
/// ```
pub struct InvoiceBuilder {
    number: String,
    issue_date: NaiveDate,
    due_date: Option<NaiveDate>,
    kind: InvoiceKind,
    notes: Vec<String>,
    supplier: Option<Party>,
    customer: Option<Party>,
    lines: Vec<LineItem>,
    gst_enabled: bool,
    discount: Option<Discount>,
    round_up_to: RoundUpTo,
    status: InvoiceStatus,
    payment_mode: Option<PaymentMode>,
    amount_received: Decimal,
}

impl InvoiceBuilder {
    pub fn new(number: impl Into<String>, issue_date: NaiveDate) -> Self {
        Self {
            number: number.into(),
            issue_date,
            due_date: None,
            kind: InvoiceKind::Sale,
            notes: Vec::new(),
            supplier: None,
            customer: None,
            lines: Vec::new(),
            gst_enabled: true,
            discount: None,
            round_up_to: RoundUpTo::None,
            status: InvoiceStatus::Pending,
            payment_mode: None,
            amount_received: Decimal::ZERO,
        }
    }

    pub fn due_date(mut self, date: NaiveDate) -> Self {
        self.due_date = Some(date);
        self
    }

    pub fn kind(mut self, kind: InvoiceKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn supplier(mut self, party: Party) -> Self {
        self.supplier = Some(party);
        self
    }

    pub fn customer(mut self, party: Party) -> Self {
        self.customer = Some(party);
        self
    }

    pub fn add_line(mut self, line: LineItem) -> Self {
        self.lines.push(line);
        self
    }

    pub fn gst_enabled(mut self, enabled: bool) -> Self {
        self.gst_enabled = enabled;
        self
    }

    pub fn discount(mut self, discount: Discount) -> Self {
        self.discount = Some(discount);
        self
    }

    pub fn round_up_to(mut self, policy: RoundUpTo) -> Self {
        self.round_up_to = policy;
        self
    }

    pub fn status(mut self, status: InvoiceStatus) -> Self {
        self.status = status;
        self
    }

    pub fn payment_mode(mut self, mode: PaymentMode) -> Self {
        self.payment_mode = Some(mode);
        self
    }

    pub fn amount_received(mut self, amount: Decimal) -> Self {
        self.amount_received = amount;
        self
    }

    /// Build the invoice, calculating totals and running validation.
    /// Returns all validation errors (not just the first).
    pub fn build(self) -> Result<Invoice, BijakError> {
        let supplier = self
            .supplier
            .ok_or_else(|| BijakError::Builder("supplier is required".into()))?;
        let customer = self
            .customer
            .ok_or_else(|| BijakError::Builder("customer is required".into()))?;

        if self.lines.is_empty() {
            return Err(BijakError::Builder(
                "at least one line item is required".into(),
            ));
        }

        // Input limits to prevent abuse
        if self.lines.len() > 10_000 {
            return Err(BijakError::Builder(
                "invoice cannot have more than 10,000 line items".into(),
            ));
        }
        if self.notes.len() > 100 {
            return Err(BijakError::Builder(
                "invoice cannot have more than 100 notes".into(),
            ));
        }

        let mut invoice = Invoice {
            number: self.number,
            issue_date: self.issue_date,
            due_date: self.due_date,
            kind: self.kind,
            notes: self.notes,
            supplier,
            customer,
            lines: self.lines,
            gst_enabled: self.gst_enabled,
            regime: None,
            discount: self.discount,
            round_up_to: self.round_up_to,
            status: self.status,
            payment_mode: self.payment_mode,
            amount_received: self.amount_received,
            totals: None,
        };

        // Calculate line splits and totals
        tax::compute_totals(&mut invoice)?;

        // Run Rule 46 validation
        let errors = validation::validate_rule46(&invoice);
        if !errors.is_empty() {
            let msg = errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(BijakError::Validation(msg));
        }

        Ok(invoice)
    }

    /// Build without validation — useful for testing or importing external data.
    /// Totals are still computed, so jurisdiction resolution can fail.
    pub fn build_unchecked(self) -> Result<Invoice, BijakError> {
        let supplier = self
            .supplier
            .ok_or_else(|| BijakError::Builder("supplier is required".into()))?;
        let customer = self
            .customer
            .ok_or_else(|| BijakError::Builder("customer is required".into()))?;

        let mut invoice = Invoice {
            number: self.number,
            issue_date: self.issue_date,
            due_date: self.due_date,
            kind: self.kind,
            notes: self.notes,
            supplier,
            customer,
            lines: self.lines,
            gst_enabled: self.gst_enabled,
            regime: None,
            discount: self.discount,
            round_up_to: self.round_up_to,
            status: self.status,
            payment_mode: self.payment_mode,
            amount_received: self.amount_received,
            totals: None,
        };

        tax::compute_totals(&mut invoice)?;
        Ok(invoice)
    }
}

/// Builder for Party (supplier/customer).
pub struct PartyBuilder {
    name: String,
    gstin: Option<String>,
    state: Option<String>,
    address: Option<String>,
    phone: Option<String>,
    email: Option<String>,
}

impl PartyBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            gstin: None,
            state: None,
            address: None,
            phone: None,
            email: None,
        }
    }

    pub fn gstin(mut self, gstin: impl Into<String>) -> Self {
        self.gstin = Some(gstin.into());
        self
    }

    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn build(self) -> Party {
        Party {
            name: self.name,
            gstin: self.gstin,
            state: self.state,
            address: self.address,
            phone: self.phone,
            email: self.email,
        }
    }
}

/// Builder for LineItem.
pub struct LineItemBuilder {
    description: String,
    hsn: Option<String>,
    unit: Option<String>,
    quantity: Decimal,
    rate: Decimal,
    gst_rate: Decimal,
    discount: Option<Discount>,
}

impl LineItemBuilder {
    pub fn new(description: impl Into<String>, quantity: Decimal, rate: Decimal) -> Self {
        Self {
            description: description.into(),
            hsn: None,
            unit: None,
            quantity,
            rate,
            gst_rate: Decimal::new(18, 0),
            discount: None,
        }
    }

    pub fn gst_rate(mut self, rate: Decimal) -> Self {
        self.gst_rate = rate;
        self
    }

    pub fn hsn(mut self, hsn: impl Into<String>) -> Self {
        self.hsn = Some(hsn.into());
        self
    }

    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub fn discount(mut self, discount: Discount) -> Self {
        self.discount = Some(discount);
        self
    }

    pub fn build(self) -> LineItem {
        LineItem {
            description: self.description,
            hsn: self.hsn,
            unit: self.unit,
            quantity: self.quantity,
            rate: self.rate,
            gst_rate: self.gst_rate,
            discount: self.discount,
            tax: None,
        }
    }
}
