//! Common - Shared Utilities for the Crowdfunding Contracts
//!
//! This package provides the unit conversions and native coin helpers
//! used by the contracts in this workspace.

pub mod payment;
pub mod units;

pub use payment::{must_pay, native_send, PaymentError};
pub use units::{
    deadline_after, minutes_to_seconds, to_base_units, MAX_DECIMALS, SECONDS_PER_MINUTE,
};
