//! Section 10 CGST Act composition levy threshold checks.
//!
//! Aggregate turnover limits for opting into the scheme:
//! - Goods: ≤ ₹1.5 crore
//! - Goods in special category states: ≤ ₹75 lakh
//! - Services (Section 10(2A)): ≤ ₹50 lakh
//! Crossing the limit mid-year ends eligibility immediately.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Aggregate turnover limit for suppliers of goods (Section 10).
pub const COMPOSITION_GOODS_LIMIT: Decimal = dec!(15_000_000);

/// Aggregate turnover limit for goods in special category states.
pub const COMPOSITION_SPECIAL_STATE_LIMIT: Decimal = dec!(7_500_000);

/// Aggregate turnover limit for suppliers of services (Section 10(2A)).
pub const COMPOSITION_SERVICES_LIMIT: Decimal = dec!(5_000_000);

/// GST state codes of the special category states, sorted.
const SPECIAL_CATEGORY_STATES: [&str; 8] = ["05", "11", "12", "13", "14", "15", "16", "17"];

/// Which composition levy variant a taxpayer opts into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompositionScheme {
    /// Manufacturers and traders of goods.
    Goods,
    /// Goods suppliers registered in a special category state.
    GoodsSpecialCategory,
    /// Service providers under Section 10(2A).
    Services,
}

impl CompositionScheme {
    /// The aggregate turnover limit for this scheme variant.
    pub fn turnover_limit(&self) -> Decimal {
        match self {
            CompositionScheme::Goods => COMPOSITION_GOODS_LIMIT,
            CompositionScheme::GoodsSpecialCategory => COMPOSITION_SPECIAL_STATE_LIMIT,
            CompositionScheme::Services => COMPOSITION_SERVICES_LIMIT,
        }
    }
}

/// Result of a composition levy eligibility check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompositionStatus {
    /// Whether the taxpayer is eligible for the composition scheme.
    pub eligible: bool,
    /// The scheme variant that was checked.
    pub scheme: CompositionScheme,
    /// Previous financial year aggregate turnover used in the check.
    pub prev_year_turnover: Decimal,
    /// Current financial year aggregate turnover used in the check.
    pub curr_year_turnover: Decimal,
    /// If not eligible, the reason why.
    pub reason: Option<String>,
}

/// Check composition levy eligibility under Section 10 CGST Act.
///
/// Both amounts are **aggregate turnover** on an all-India PAN basis.
///
/// # Arguments
/// - `prev_year_turnover` — Aggregate turnover of the preceding financial year
/// - `curr_year_turnover` — Current financial year aggregate turnover so far
pub fn check_composition(
    scheme: CompositionScheme,
    prev_year_turnover: Decimal,
    curr_year_turnover: Decimal,
) -> CompositionStatus {
    let limit = scheme.turnover_limit();

    if prev_year_turnover > limit {
        return CompositionStatus {
            eligible: false,
            scheme,
            prev_year_turnover,
            curr_year_turnover,
            reason: Some(format!(
                "preceding year aggregate turnover {prev_year_turnover} exceeds limit of {limit}"
            )),
        };
    }

    if curr_year_turnover > limit {
        return CompositionStatus {
            eligible: false,
            scheme,
            prev_year_turnover,
            curr_year_turnover,
            reason: Some(format!(
                "current year aggregate turnover {curr_year_turnover} exceeds limit of {limit}"
            )),
        };
    }

    CompositionStatus {
        eligible: true,
        scheme,
        prev_year_turnover,
        curr_year_turnover,
        reason: None,
    }
}

/// Whether a GST state code belongs to a special category state.
pub fn is_special_category_state(code: &str) -> bool {
    SPECIAL_CATEGORY_STATES.binary_search(&code.trim()).is_ok()
}
