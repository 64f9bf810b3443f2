//! GSTIN validation and composition scheme tracking.
//!
//! Validates GSTINs by structure and mod-36 check character, and tracks
//! Section 10 CGST Act composition levy turnover thresholds.
//!
//! # Example
//!
//! ```
//! use bijak::gst::*;
//! use rust_decimal_macros::dec;
//!
//! // Structural + check character validation
//! assert!(validate_gstin("27AAPFU0939F1ZV").is_ok());
//! assert_eq!(state_of("27AAPFU0939F1ZV"), Some("Maharashtra"));
//!
//! // Composition levy threshold check
//! let status = check_composition(CompositionScheme::Goods, dec!(9_000_000), dec!(4_000_000));
//! assert!(status.eligible);
//! ```

mod composition;
mod gstin;

pub use composition::{
    COMPOSITION_GOODS_LIMIT, COMPOSITION_SERVICES_LIMIT, COMPOSITION_SPECIAL_STATE_LIMIT,
    CompositionScheme, CompositionStatus, check_composition, is_special_category_state,
};
pub use gstin::{GstinError, GstinParts, check_char, state_of, validate_gstin};
