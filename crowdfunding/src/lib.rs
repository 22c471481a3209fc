//! Crowdfunding Contract - Time-Boxed Campaigns for TerraClassic
//!
//! A single campaign is configured at instantiation with a name, a funding
//! target, a deadline and a beneficiary.
//!
//! # Lifecycle
//! 1. While `Ongoing`, anyone sends native coins with `Contribute`
//! 2. After the deadline, anyone calls `FinishedCrowdfunding`, which moves the
//!    campaign to `Succeeded` (target reached) or `Failed`
//! 3. `Succeeded`: `Collect` pays the whole balance to the beneficiary (`PaidOut`)
//! 4. `Failed`: every contributor calls `Withdraw` to get their coins back
//!
//! The beneficiary may cancel at any time before payout, forcing `Failed`.

pub mod contract;
pub mod error;
mod execute;
pub mod msg;
mod query;
pub mod state;

pub use crate::error::ContractError;
pub use crate::state::CampaignState;
