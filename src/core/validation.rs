use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::error::ValidationError;
use super::states;
use super::tax::{round_paise, split_for_regime};
use super::types::*;
use super::uqc;

/// Tolerance for identities over independently paise-rounded sums.
const ROUNDING_TOLERANCE: Decimal = dec!(0.02);

impl Invoice {
    /// Validate contents and arithmetic. Returns all errors found
    /// (not just the first); empty means valid.
    pub fn validate(&self) -> Vec<ValidationError> {
        validate_rule46(self)
    }
}

/// Validate an invoice against the tax invoice contents required by
/// Rule 46 of the CGST Rules 2017.
/// Returns all validation errors found (not just the first).
pub fn validate_rule46(invoice: &Invoice) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    // 46(b): a consecutive serial number not exceeding sixteen characters,
    // containing alphabets or numerals or the special characters - and /.
    if invoice.number.trim().is_empty() {
        errors.push(ValidationError::with_rule(
            "number",
            "invoice number must not be empty",
            "46(b)",
        ));
    } else {
        if invoice.number.chars().count() > 16 {
            errors.push(ValidationError::with_rule(
                "number",
                "invoice number must not exceed 16 characters",
                "46(b)",
            ));
        }
        if !invoice
            .number
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '/')
        {
            errors.push(ValidationError::with_rule(
                "number",
                "invoice number may only contain alphanumerics, '-' and '/'",
                "46(b)",
            ));
        }
    }

    // 46(c): date of issue — guaranteed by the type system (NaiveDate).

    // 46(a): supplier name, address and GSTIN.
    if invoice.supplier.name.trim().is_empty() {
        errors.push(ValidationError::with_rule(
            "supplier.name",
            "supplier name must not be empty",
            "46(a)",
        ));
    }
    if invoice.gst_enabled && invoice.supplier.gstin.is_none() {
        errors.push(ValidationError::with_rule(
            "supplier.gstin",
            "supplier GSTIN is required on a tax invoice",
            "46(a)",
        ));
    }
    if let Some(gstin) = &invoice.supplier.gstin {
        validate_gstin_shape(gstin, &invoice.supplier.state, "supplier.gstin", "46(a)", &mut errors);
    }

    // 46(d): recipient name (and GSTIN when registered).
    if invoice.customer.name.trim().is_empty() {
        errors.push(ValidationError::with_rule(
            "customer.name",
            "customer name must not be empty",
            "46(d)",
        ));
    }
    if let Some(gstin) = &invoice.customer.gstin {
        validate_gstin_shape(gstin, &invoice.customer.state, "customer.gstin", "46(d)", &mut errors);
    }

    // 46(m): place of supply must be determinable when GST applies.
    if invoice.gst_enabled {
        validate_state(&invoice.supplier.state, "supplier.state", &mut errors);
        validate_state(&invoice.customer.state, "customer.state", &mut errors);
    }

    if invoice.lines.is_empty() {
        errors.push(ValidationError::new(
            "lines",
            "invoice must have at least one line item",
        ));
    }
    for (i, line) in invoice.lines.iter().enumerate() {
        validate_line(line, i, &mut errors);
    }

    if let Some(discount) = &invoice.discount {
        validate_discount(discount, "discount", &mut errors);
    }

    if invoice.amount_received.is_sign_negative() {
        errors.push(ValidationError::new(
            "amount_received",
            "amount received must not be negative",
        ));
    }

    errors.extend(validate_arithmetic(invoice));

    errors
}

/// Validate invoice arithmetic (splits, totals, rounding).
pub fn validate_arithmetic(invoice: &Invoice) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let Some(totals) = &invoice.totals else {
        errors.push(ValidationError::new(
            "totals",
            "totals must be computed before validation (call compute_totals first)",
        ));
        return errors;
    };

    let mut subtotal = Decimal::ZERO;
    for (i, line) in invoice.lines.iter().enumerate() {
        let prefix = format!("lines[{i}]");

        let Some(split) = &line.tax else {
            errors.push(ValidationError::new(
                format!("{prefix}.tax"),
                "line tax must be computed before validation (call compute_totals first)",
            ));
            continue;
        };
        subtotal += split.taxable_value;

        // CGST/SGST and IGST are mutually exclusive.
        if (!split.cgst.is_zero() || !split.sgst.is_zero()) && !split.igst.is_zero() {
            errors.push(ValidationError::with_rule(
                format!("{prefix}.tax"),
                "line carries both CGST/SGST and IGST",
                "46(l)",
            ));
        }
        if split.cgst != split.sgst {
            errors.push(ValidationError::with_rule(
                format!("{prefix}.tax"),
                format!("CGST {} and SGST {} must be equal", split.cgst, split.sgst),
                "46(l)",
            ));
        }
        if split.total != split.taxable_value + split.cgst + split.sgst + split.igst {
            errors.push(ValidationError::with_rule(
                format!("{prefix}.tax.total"),
                "line total does not equal taxable value plus taxes",
                "46(l)",
            ));
        }

        // The stored split must match a recomputation for the invoice regime.
        let expected = match invoice.regime {
            Some(regime) => split_for_regime(line, regime),
            None => TaxSplit::untaxed(line),
        };
        if *split != expected {
            errors.push(ValidationError::with_rule(
                format!("{prefix}.tax"),
                "stored tax split does not match recomputation for the invoice regime",
                "46(l)",
            ));
        }
    }

    if totals.subtotal != round_paise(subtotal) {
        errors.push(ValidationError::with_rule(
            "totals.subtotal",
            format!(
                "subtotal {} does not match sum of line taxable values {}",
                totals.subtotal,
                round_paise(subtotal)
            ),
            "46(j)",
        ));
    }

    // grand_total = raw_total + round_up_amount, exactly.
    if totals.grand_total != totals.raw_total + totals.round_up_amount {
        errors.push(ValidationError::new(
            "totals.grand_total",
            format!(
                "grand total {} does not equal raw total {} + round-up {}",
                totals.grand_total, totals.raw_total, totals.round_up_amount
            ),
        ));
    }

    // raw_total tracks the component sums within rounding tolerance.
    let components = totals.subtotal + totals.total_cgst + totals.total_sgst + totals.total_igst
        - totals.invoice_discount;
    if (totals.raw_total - components).abs() > ROUNDING_TOLERANCE {
        errors.push(ValidationError::new(
            "totals.raw_total",
            format!(
                "raw total {} does not match subtotal + taxes - discount = {}",
                totals.raw_total, components
            ),
        ));
    }

    if totals.round_up_amount.is_sign_negative() {
        errors.push(ValidationError::new(
            "totals.round_up_amount",
            "round-up amount must not be negative",
        ));
    }
    match invoice.round_up_to {
        RoundUpTo::None => {
            if !totals.round_up_amount.is_zero() {
                errors.push(ValidationError::new(
                    "totals.round_up_amount",
                    "round-up amount must be zero when no round-up policy is set",
                ));
            }
        }
        policy => {
            let step = Decimal::from(policy.code());
            if totals.round_up_amount >= step {
                errors.push(ValidationError::new(
                    "totals.round_up_amount",
                    format!(
                        "round-up amount {} must be below the step {}",
                        totals.round_up_amount, step
                    ),
                ));
            }
            if !(totals.grand_total % step).is_zero() {
                errors.push(ValidationError::new(
                    "totals.grand_total",
                    format!(
                        "grand total {} is not a multiple of the round-up step {}",
                        totals.grand_total, step
                    ),
                ));
            }
        }
    }

    // balance_due = grand_total - amount_received, exactly.
    if totals.balance_due != totals.grand_total - totals.amount_received {
        errors.push(ValidationError::new(
            "totals.balance_due",
            format!(
                "balance due {} does not equal grand total {} - received {}",
                totals.balance_due, totals.grand_total, totals.amount_received
            ),
        ));
    }

    errors
}

fn validate_line(line: &LineItem, index: usize, errors: &mut Vec<ValidationError>) {
    let prefix = format!("lines[{index}]");

    if line.description.trim().is_empty() {
        errors.push(ValidationError::with_rule(
            format!("{prefix}.description"),
            "description must not be empty",
            "46(g)",
        ));
    }

    if line.quantity.is_sign_negative() {
        errors.push(ValidationError::with_rule(
            format!("{prefix}.quantity"),
            "quantity must not be negative",
            "46(h)",
        ));
    }

    if let Some(unit) = &line.unit {
        if !uqc::is_known_uqc(unit) {
            errors.push(ValidationError::with_rule(
                format!("{prefix}.unit"),
                format!("'{unit}' is not a known UQC"),
                "46(h)",
            ));
        }
    }

    if line.rate.is_sign_negative() {
        errors.push(ValidationError::with_rule(
            format!("{prefix}.rate"),
            "rate must not be negative",
            "46(j)",
        ));
    }

    if line.gst_rate.is_sign_negative() || line.gst_rate > Decimal::ONE_HUNDRED {
        errors.push(ValidationError::with_rule(
            format!("{prefix}.gst_rate"),
            format!("GST rate {} must be between 0 and 100", line.gst_rate),
            "46(k)",
        ));
    }

    if let Some(discount) = &line.discount {
        validate_discount(discount, &format!("{prefix}.discount"), errors);
    }
}

fn validate_discount(discount: &Discount, field: &str, errors: &mut Vec<ValidationError>) {
    if discount.value.is_sign_negative() {
        errors.push(ValidationError::with_rule(
            field,
            "discount value must not be negative",
            "46(j)",
        ));
    }
    if discount.kind == DiscountKind::Percent && discount.value > Decimal::ONE_HUNDRED {
        errors.push(ValidationError::with_rule(
            field,
            format!("discount percentage {} must not exceed 100", discount.value),
            "46(j)",
        ));
    }
}

fn validate_state(state: &Option<String>, field: &str, errors: &mut Vec<ValidationError>) {
    let Some(state) = state.as_deref().map(str::trim).filter(|s| !s.is_empty()) else {
        errors.push(ValidationError::with_rule(
            field,
            "state is required to determine the place of supply",
            "46(m)",
        ));
        return;
    };
    if !states::is_known_state(state) && !states::is_known_state_code(state) {
        errors.push(ValidationError::with_rule(
            field,
            format!("'{state}' is not a known state name or GST state code"),
            "46(m)",
        ));
    }
}

/// Cheap GSTIN shape check: length, charset, state digits, and consistency
/// with the party's own state. The full checksum validation lives in the
/// `gst` feature.
fn validate_gstin_shape(
    gstin: &str,
    party_state: &Option<String>,
    field: &str,
    rule: &str,
    errors: &mut Vec<ValidationError>,
) {
    if gstin.len() != 15 {
        errors.push(ValidationError::with_rule(
            field,
            format!("GSTIN must be 15 characters, got {}", gstin.len()),
            rule,
        ));
        return;
    }
    if !gstin
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
    {
        errors.push(ValidationError::with_rule(
            field,
            "GSTIN must be uppercase alphanumeric",
            rule,
        ));
        return;
    }

    let code = &gstin[..2];
    if !code.chars().all(|c| c.is_ascii_digit()) || !states::is_known_state_code(code) {
        errors.push(ValidationError::with_rule(
            field,
            format!("GSTIN must start with a known 2-digit state code, got '{code}'"),
            rule,
        ));
        return;
    }

    // The GSTIN prefix is the registration state; it must agree with the
    // party's state when both are present.
    if let Some(expected) = party_state.as_deref().and_then(states::canonical_state_code) {
        if code != expected {
            errors.push(ValidationError::with_rule(
                field,
                format!(
                    "GSTIN state code '{code}' does not match the party state '{expected}'"
                ),
                rule,
            ));
        }
    }
}
