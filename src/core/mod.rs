//! Core invoice types, tax computation, validation, and numbering.
//!
//! This module provides the foundational types for Indian GST billing:
//! CGST/SGST/IGST splitting with invoice totals, validation against
//! Rule 46 of the CGST Rules 2017, and invoice number allocation.

mod builder;
mod error;
mod numbering;
pub mod states;
mod tax;
mod types;
pub mod uqc;
mod validation;

pub use builder::*;
pub use error::*;
pub use numbering::*;
pub use states::is_known_state_code;
pub use tax::*;
pub use types::*;
pub use uqc::is_known_uqc;
pub use validation::*;
