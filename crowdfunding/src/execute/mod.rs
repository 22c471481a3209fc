//! Execute handlers for the Crowdfunding contract.
//!
//! - `contribute` - accepting native coins while the campaign is open
//! - `lifecycle` - finalizing after the deadline and beneficiary cancellation
//! - `payout` - paying the beneficiary or refunding contributors

mod contribute;
mod lifecycle;
mod payout;

pub use contribute::*;
pub use lifecycle::*;
pub use payout::*;
