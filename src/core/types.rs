use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A tax invoice under the CGST Rules 2017 — the top-level document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    /// Rule 46(b): Consecutive serial number, max 16 characters.
    pub number: String,
    /// Rule 46(c): Date of issue.
    pub issue_date: NaiveDate,
    /// Payment due date.
    pub due_date: Option<NaiveDate>,
    /// Document kind (sale, purchase, credit note).
    pub kind: InvoiceKind,
    /// Rule 46(a): Supplier — name, address, GSTIN.
    pub supplier: Party,
    /// Rule 46(d): Recipient.
    pub customer: Party,
    /// Invoice lines.
    pub lines: Vec<LineItem>,
    /// Whether GST applies to this document. `compute_totals()` stores the
    /// effective flag back: requested AND at least one line carries a rate.
    pub gst_enabled: bool,
    /// Rule 46(m): Tax regime from the place of supply. Set by
    /// `compute_totals()`; `None` when GST is off.
    pub regime: Option<TaxRegime>,
    /// Document-level discount, applied to the taxed total before round-up.
    pub discount: Option<Discount>,
    /// Round-up policy for the grand total.
    pub round_up_to: RoundUpTo,
    /// Free-text notes.
    pub notes: Vec<String>,
    /// Settlement status.
    pub status: InvoiceStatus,
    /// How the invoice was (or is to be) paid.
    pub payment_mode: Option<PaymentMode>,
    /// Amount received against this invoice so far.
    pub amount_received: Decimal,
    /// Calculated totals (set by `compute_totals()`).
    pub totals: Option<Totals>,
}

impl Invoice {
    /// Classify the settlement status as of `as_of`.
    ///
    /// Fully settled invoices are `Paid`; otherwise a past due date wins
    /// (`Overdue`), then partial settlement (`Partial`), else `Pending`.
    /// Invoices without computed totals classify as `Pending`.
    pub fn derive_status(&self, as_of: NaiveDate) -> InvoiceStatus {
        let Some(totals) = &self.totals else {
            return InvoiceStatus::Pending;
        };
        if totals.balance_due <= Decimal::ZERO {
            InvoiceStatus::Paid
        } else if self.due_date.is_some_and(|due| due < as_of) {
            InvoiceStatus::Overdue
        } else if totals.amount_received > Decimal::ZERO {
            InvoiceStatus::Partial
        } else {
            InvoiceStatus::Pending
        }
    }
}

/// Supplier or recipient of a supply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Party {
    /// Legal or trade name.
    pub name: String,
    /// GSTIN, when registered (15 characters, e.g. "08AABCT1332L1ZE").
    pub gstin: Option<String>,
    /// State of the party's place of business — a state name or the 2-digit
    /// GST state code. Drives intra- vs inter-state regime determination.
    pub state: Option<String>,
    /// Postal address, single line.
    pub address: Option<String>,
    /// Telephone.
    pub phone: Option<String>,
    /// Email.
    pub email: Option<String>,
}

/// Invoice line item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    /// Rule 46(g): Description of goods or services.
    pub description: String,
    /// Rule 46(f): HSN/SAC code.
    pub hsn: Option<String>,
    /// Rule 46(h): Unit Quantity Code (e.g. "NOS", "KGS").
    pub unit: Option<String>,
    /// Rule 46(h): Quantity supplied.
    pub quantity: Decimal,
    /// Per-unit price.
    pub rate: Decimal,
    /// Rule 46(k): GST rate percentage (nominally 0, 5, 12, 18 or 28).
    pub gst_rate: Decimal,
    /// Line-level discount, subtracted from quantity × rate before tax.
    pub discount: Option<Discount>,
    /// Rule 46(j)/(l): Computed taxable value and tax amounts.
    /// Set by `compute_totals()`.
    pub tax: Option<TaxSplit>,
}

impl LineItem {
    /// Quantity × rate, before any discount.
    pub fn base_amount(&self) -> Decimal {
        self.quantity * self.rate
    }

    /// The line discount amount as computed, without the taxable-value clamp.
    pub fn discount_amount(&self) -> Decimal {
        match &self.discount {
            Some(discount) => discount.amount_on(self.base_amount()),
            None => Decimal::ZERO,
        }
    }

    /// Taxable value per Rule 46(j): base amount less discount, floored at zero.
    pub fn taxable_value(&self) -> Decimal {
        let value = self.base_amount() - self.discount_amount();
        if value.is_sign_negative() {
            Decimal::ZERO
        } else {
            value
        }
    }
}

/// Tax regime determined by the place of supply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaxRegime {
    /// Supplier and recipient in the same state: CGST + SGST.
    IntraState,
    /// Different states: IGST.
    InterState,
}

/// Computed tax amounts for one line. Amounts keep full precision;
/// paise rounding happens at aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxSplit {
    /// GST rate actually applied (zero when GST is bypassed).
    pub gst_rate: Decimal,
    /// Taxable value after line discount (floored at zero).
    pub taxable_value: Decimal,
    /// Line discount amount as computed.
    pub discount: Decimal,
    /// Central GST. Non-zero only intra-state.
    pub cgst: Decimal,
    /// State GST. Always equals `cgst`.
    pub sgst: Decimal,
    /// Integrated GST. Non-zero only inter-state.
    pub igst: Decimal,
    /// taxable_value + cgst + sgst + igst, exact.
    pub total: Decimal,
}

/// Document kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvoiceKind {
    /// Outward supply (tax invoice).
    Sale,
    /// Inward supply recorded for purchase books.
    Purchase,
    /// Credit note under section 34.
    CreditNote,
}

/// Settlement status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvoiceStatus {
    /// Fully settled.
    Paid,
    /// Issued, nothing received, not past due.
    Pending,
    /// Partly settled.
    Partial,
    /// Unsettled past the due date.
    Overdue,
}

/// Payment mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMode {
    Cash,
    Credit,
    Upi,
    BankTransfer,
    Cheque,
    Online,
}

/// Discount, line- or document-level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Discount {
    pub kind: DiscountKind,
    /// Percentage (of the base) or a fixed rupee amount, per `kind`.
    pub value: Decimal,
}

impl Discount {
    pub fn percent(value: Decimal) -> Self {
        Self {
            kind: DiscountKind::Percent,
            value,
        }
    }

    pub fn amount(value: Decimal) -> Self {
        Self {
            kind: DiscountKind::Amount,
            value,
        }
    }

    /// The discount amount this discount yields on `base`.
    pub fn amount_on(&self, base: Decimal) -> Decimal {
        match self.kind {
            DiscountKind::Percent => base * self.value / Decimal::ONE_HUNDRED,
            DiscountKind::Amount => self.value,
        }
    }
}

/// How a discount value is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiscountKind {
    /// Percentage of the base amount.
    Percent,
    /// Fixed rupee amount.
    Amount,
}

/// Grand-total round-up policy. The raw total is always rounded *up* to the
/// next multiple — the round-off never reduces the amount payable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundUpTo {
    /// No rounding.
    None,
    /// Next multiple of ₹10.
    Ten,
    /// Next multiple of ₹100.
    Hundred,
}

impl RoundUpTo {
    /// Numeric policy code (0, 10 or 100).
    pub fn code(&self) -> u32 {
        match self {
            Self::None => 0,
            Self::Ten => 10,
            Self::Hundred => 100,
        }
    }

    /// Parse from the numeric policy code.
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(Self::None),
            10 => Some(Self::Ten),
            100 => Some(Self::Hundred),
            _ => None,
        }
    }
}

/// Document totals, stored at paise precision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Totals {
    /// Sum of line taxable values.
    pub subtotal: Decimal,
    /// Sum of line discount amounts.
    pub line_discount_total: Decimal,
    /// Total central GST.
    pub total_cgst: Decimal,
    /// Total state GST.
    pub total_sgst: Decimal,
    /// Total integrated GST.
    pub total_igst: Decimal,
    /// Document-level discount amount.
    pub invoice_discount: Decimal,
    /// subtotal + taxes − invoice_discount, at paise precision.
    pub raw_total: Decimal,
    /// grand_total − raw_total. Zero when no round-up policy is active.
    pub round_up_amount: Decimal,
    /// Amount payable = raw_total + round_up_amount.
    pub grand_total: Decimal,
    /// Amount received so far.
    pub amount_received: Decimal,
    /// grand_total − amount_received.
    pub balance_due: Decimal,
    /// Rate-wise tax summary, sorted by rate.
    pub breakdown: Vec<TaxBreakdown>,
}

/// Rate-wise tax summary entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxBreakdown {
    /// GST rate percentage.
    pub gst_rate: Decimal,
    /// Taxable value at this rate.
    pub taxable_amount: Decimal,
    /// Central GST at this rate.
    pub cgst: Decimal,
    /// State GST at this rate.
    pub sgst: Decimal,
    /// Integrated GST at this rate.
    pub igst: Decimal,
}
