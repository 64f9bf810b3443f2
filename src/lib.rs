//! # bijak
//!
//! Indian GST billing library: CGST/SGST/IGST tax splitting, invoice
//! totals with cash round-up, Rule 46 validation, invoice numbering,
//! amounts in words, and GSTIN checks.
//!
//! All monetary values use [`rust_decimal::Decimal`] — never floating point.
//! Validation follows Rule 46 of the [CGST Rules 2017](https://cbic-gst.gov.in/pdf/CGST-Rules.pdf).
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use bijak::core::*;
//! use rust_decimal_macros::dec;
//!
//! let invoice = InvoiceBuilder::new("ramjun001", NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
//!     .supplier(PartyBuilder::new("Sharma Electricals")
//!         .gstin("27AAPFU0939F1ZV").state("Maharashtra").build())
//!     .customer(PartyBuilder::new("Ramesh Traders").state("Rajasthan").build())
//!     .add_line(LineItemBuilder::new("Copper wire", dec!(2), dec!(500))
//!         .gst_rate(dec!(18)).unit("KGS").build())
//!     .build()
//!     .unwrap();
//!
//! assert!(validate_rule46(&invoice).is_empty());
//! assert_eq!(invoice.regime, Some(TaxRegime::InterState));
//! assert_eq!(invoice.totals.unwrap().total_igst, dec!(180));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Invoice types, tax splitting, Rule 46 validation, numbering |
//! | `words` | Amount-in-words rendering (Thousand/Lakh/Crore) |
//! | `gst` | GSTIN validation, composition scheme thresholds |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "words")]
pub mod words;

#[cfg(feature = "gst")]
pub mod gst;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
