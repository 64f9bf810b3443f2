//! GST computation — line tax splitting, aggregation, and round-up.
//!
//! The split and aggregate functions are pure: they take their inputs
//! explicitly, never read ambient configuration, and return new values
//! instead of mutating their arguments. `compute_totals` is the one
//! mutating entry point, writing the computed splits and totals onto
//! an invoice the way a billing flow stores them.

use std::collections::HashMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::error::BijakError;
use super::types::{
    Discount, Invoice, LineItem, RoundUpTo, TaxBreakdown, TaxRegime, TaxSplit, Totals,
};

/// The notified GST rate slabs.
pub const STANDARD_GST_RATES: [Decimal; 5] =
    [dec!(0), dec!(5), dec!(12), dec!(18), dec!(28)];

/// Check whether `rate` is one of the notified slabs. Non-slab rates in
/// 0..=100 are still accepted by the engine; this list is advisory.
pub fn is_standard_gst_rate(rate: Decimal) -> bool {
    STANDARD_GST_RATES.contains(&rate)
}

/// Jurisdiction of a supply: the supplier's state and the place of supply.
///
/// Always passed explicitly — the engine never falls back to an ambient
/// default state. Use [`TaxContext::resolve`] when party states may be
/// missing and a documented fallback is wanted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxContext {
    /// State of the supplier's place of business.
    pub supplier_state: String,
    /// State of the recipient / place of supply.
    pub customer_state: String,
}

impl TaxContext {
    /// Create a context from two known states. Errors when either is blank.
    pub fn new(
        supplier_state: impl Into<String>,
        customer_state: impl Into<String>,
    ) -> Result<Self, BijakError> {
        let supplier_state = supplier_state.into();
        let customer_state = customer_state.into();
        if supplier_state.trim().is_empty() {
            return Err(BijakError::Jurisdiction(
                "supplier state is blank".into(),
            ));
        }
        if customer_state.trim().is_empty() {
            return Err(BijakError::Jurisdiction(
                "customer state is blank".into(),
            ));
        }
        Ok(Self {
            supplier_state,
            customer_state,
        })
    }

    /// Build a context from possibly-missing party states, substituting
    /// `fallback` where a state is absent or blank. Every substitution is
    /// flagged on the result so callers can surface the assumption instead
    /// of inheriting it silently.
    pub fn resolve(
        supplier_state: Option<&str>,
        customer_state: Option<&str>,
        fallback: &str,
    ) -> ResolvedTaxContext {
        let supplier = supplier_state.map(str::trim).filter(|s| !s.is_empty());
        let customer = customer_state.map(str::trim).filter(|s| !s.is_empty());
        ResolvedTaxContext {
            supplier_defaulted: supplier.is_none(),
            customer_defaulted: customer.is_none(),
            context: Self {
                supplier_state: supplier.unwrap_or(fallback).to_string(),
                customer_state: customer.unwrap_or(fallback).to_string(),
            },
        }
    }

    /// Determine the regime: same state (after trimming) is intra-state,
    /// anything else inter-state. Comparison is case-sensitive, as party
    /// records are expected to carry the state exactly as registered.
    pub fn regime(&self) -> TaxRegime {
        if self.supplier_state.trim() == self.customer_state.trim() {
            TaxRegime::IntraState
        } else {
            TaxRegime::InterState
        }
    }
}

/// A [`TaxContext`] resolved from incomplete party data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTaxContext {
    pub context: TaxContext,
    /// The supplier state was missing and the fallback was used.
    pub supplier_defaulted: bool,
    /// The customer state was missing and the fallback was used.
    pub customer_defaulted: bool,
}

impl TaxSplit {
    /// The GST-bypassed split: taxable value carried through, all tax zero.
    pub fn untaxed(line: &LineItem) -> Self {
        let taxable_value = line.taxable_value();
        Self {
            gst_rate: Decimal::ZERO,
            taxable_value,
            discount: line.discount_amount(),
            cgst: Decimal::ZERO,
            sgst: Decimal::ZERO,
            igst: Decimal::ZERO,
            total: taxable_value,
        }
    }
}

/// Split one line's GST for the given jurisdiction.
///
/// Equivalent to [`split_for_regime`] with the context's derived regime.
pub fn split_line_tax(line: &LineItem, context: &TaxContext) -> TaxSplit {
    split_for_regime(line, context.regime())
}

/// Split one line's GST for an already-determined regime.
///
/// On the taxable value `t = max(quantity × rate − discount, 0)`:
///
/// - intra-state: `cgst = sgst = t × (gst_rate / 2) / 100`, `igst = 0`
/// - inter-state: `igst = t × gst_rate / 100`, `cgst = sgst = 0`
///
/// Amounts keep full precision; rounding happens in [`aggregate`]. The
/// function is total — zero and negative inputs produce a zero-clamped
/// taxable value, never an error.
pub fn split_for_regime(line: &LineItem, regime: TaxRegime) -> TaxSplit {
    let taxable_value = line.taxable_value();
    let (cgst, sgst, igst) = match regime {
        TaxRegime::IntraState => {
            let half = taxable_value * (line.gst_rate / dec!(2)) / Decimal::ONE_HUNDRED;
            (half, half, Decimal::ZERO)
        }
        TaxRegime::InterState => {
            let full = taxable_value * line.gst_rate / Decimal::ONE_HUNDRED;
            (Decimal::ZERO, Decimal::ZERO, full)
        }
    };
    TaxSplit {
        gst_rate: line.gst_rate,
        taxable_value,
        discount: line.discount_amount(),
        cgst,
        sgst,
        igst,
        total: taxable_value + cgst + sgst + igst,
    }
}

impl RoundUpTo {
    /// Round `raw` up to the policy's next multiple.
    /// Returns `(grand_total, round_up_amount)`.
    pub fn apply(&self, raw: Decimal) -> (Decimal, Decimal) {
        match self.step() {
            None => (raw, Decimal::ZERO),
            Some(step) => {
                let grand = (raw / step).ceil() * step;
                (grand, grand - raw)
            }
        }
    }

    fn step(&self) -> Option<Decimal> {
        match self {
            Self::None => None,
            Self::Ten => Some(dec!(10)),
            Self::Hundred => Some(dec!(100)),
        }
    }
}

/// Aggregate line splits into document totals.
///
/// Pure and order-independent: summation, the document discount (percent
/// discounts computed on the subtotal), paise rounding of the raw total,
/// then the round-up policy. The stored identities are exact:
/// `grand_total = raw_total + round_up_amount` and
/// `balance_due = grand_total − amount_received`.
pub fn aggregate(
    splits: &[TaxSplit],
    invoice_discount: Option<&Discount>,
    round_up_to: RoundUpTo,
    amount_received: Decimal,
) -> Totals {
    let mut subtotal = Decimal::ZERO;
    let mut line_discount_total = Decimal::ZERO;
    let mut total_cgst = Decimal::ZERO;
    let mut total_sgst = Decimal::ZERO;
    let mut total_igst = Decimal::ZERO;
    let mut groups: HashMap<Decimal, (Decimal, Decimal, Decimal, Decimal)> = HashMap::new();

    for split in splits {
        subtotal += split.taxable_value;
        line_discount_total += split.discount;
        total_cgst += split.cgst;
        total_sgst += split.sgst;
        total_igst += split.igst;

        let group = groups.entry(split.gst_rate).or_default();
        group.0 += split.taxable_value;
        group.1 += split.cgst;
        group.2 += split.sgst;
        group.3 += split.igst;
    }

    let discount_amount = match invoice_discount {
        Some(discount) => discount.amount_on(subtotal),
        None => Decimal::ZERO,
    };

    let raw_total =
        round_paise(subtotal + total_cgst + total_sgst + total_igst - discount_amount);
    let (grand_total, round_up_amount) = round_up_to.apply(raw_total);
    let amount_received = round_paise(amount_received);

    let mut breakdown: Vec<TaxBreakdown> = groups
        .into_iter()
        .filter(|(_, (taxable, cgst, sgst, igst))| {
            !(taxable.is_zero() && cgst.is_zero() && sgst.is_zero() && igst.is_zero())
        })
        .map(|(gst_rate, (taxable, cgst, sgst, igst))| TaxBreakdown {
            gst_rate,
            taxable_amount: round_paise(taxable),
            cgst: round_paise(cgst),
            sgst: round_paise(sgst),
            igst: round_paise(igst),
        })
        .collect();
    // Deterministic output order.
    breakdown.sort_by(|a, b| a.gst_rate.cmp(&b.gst_rate));

    Totals {
        subtotal: round_paise(subtotal),
        line_discount_total: round_paise(line_discount_total),
        total_cgst: round_paise(total_cgst),
        total_sgst: round_paise(total_sgst),
        total_igst: round_paise(total_igst),
        invoice_discount: round_paise(discount_amount),
        raw_total,
        round_up_amount,
        grand_total,
        amount_received,
        balance_due: grand_total - amount_received,
        breakdown,
    }
}

/// Jurisdiction of an invoice from its party records. Errors when either
/// party's state is missing or blank.
pub fn tax_context(invoice: &Invoice) -> Result<TaxContext, BijakError> {
    let supplier = invoice.supplier.state.as_deref().unwrap_or("");
    let customer = invoice.customer.state.as_deref().unwrap_or("");
    if supplier.trim().is_empty() {
        return Err(BijakError::Jurisdiction("supplier state is not set".into()));
    }
    if customer.trim().is_empty() {
        return Err(BijakError::Jurisdiction("customer state is not set".into()));
    }
    TaxContext::new(supplier, customer)
}

/// Compute per-line splits and document totals, storing them on the invoice.
///
/// GST applies only when it is enabled *and* at least one line carries a
/// non-zero rate; the effective flag is written back to `gst_enabled` and
/// the regime to `regime` (`None` when GST is off). Errors when GST applies
/// but a party state is missing.
pub fn compute_totals(invoice: &mut Invoice) -> Result<(), BijakError> {
    let effective =
        invoice.gst_enabled && invoice.lines.iter().any(|line| !line.gst_rate.is_zero());
    let regime = if effective {
        Some(tax_context(invoice)?.regime())
    } else {
        None
    };
    invoice.gst_enabled = effective;
    invoice.regime = regime;

    let splits: Vec<TaxSplit> = invoice
        .lines
        .iter()
        .map(|line| match regime {
            Some(regime) => split_for_regime(line, regime),
            None => TaxSplit::untaxed(line),
        })
        .collect();
    for (line, split) in invoice.lines.iter_mut().zip(&splits) {
        line.tax = Some(split.clone());
    }
    invoice.totals = Some(aggregate(
        &splits,
        invoice.discount.as_ref(),
        invoice.round_up_to,
        invoice.amount_received,
    ));
    Ok(())
}

/// Round to paise (2 dp), half away from zero.
pub(crate) fn round_paise(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}
