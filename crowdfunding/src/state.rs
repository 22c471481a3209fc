//! State definitions for the Crowdfunding contract
//!
//! The campaign configuration is written once at instantiation. Only the
//! lifecycle state, the running total and the per-contributor balances change
//! afterwards.

use std::fmt;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, StdResult, Storage, Timestamp, Uint128};
use cw_storage_plus::{Item, Map};

pub const CONTRACT_NAME: &str = "crates.io:crowdfunding";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Core Configuration
// ============================================================================

/// Immutable campaign configuration
#[cw_serde]
pub struct Config {
    /// Display name of the campaign
    pub name: String,
    /// Amount required for success (in smallest unit of `denom`)
    pub target_amount: Uint128,
    /// Contributions are accepted up to and including this block time
    pub funding_deadline: Timestamp,
    /// Receives the funds on success and is the only address allowed to cancel
    pub beneficiary: Addr,
    /// Native denom accepted for contributions
    pub denom: String,
}

/// Campaign lifecycle
///
/// `Ongoing` -> `Failed` | `Succeeded` -> `PaidOut` (only from `Succeeded`).
/// No state ever returns to `Ongoing`.
#[cw_serde]
#[derive(Copy, Eq)]
pub enum CampaignState {
    Ongoing,
    Failed,
    Succeeded,
    PaidOut,
}

impl CampaignState {
    /// Outcome of finalizing a campaign once the deadline has passed.
    pub fn from_outcome(target_reached: bool) -> Self {
        if target_reached {
            CampaignState::Succeeded
        } else {
            CampaignState::Failed
        }
    }

    /// Whether the beneficiary can still force the campaign into `Failed`.
    pub fn is_cancellable(&self) -> bool {
        matches!(self, CampaignState::Ongoing | CampaignState::Succeeded)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CampaignState::Ongoing => "ongoing",
            CampaignState::Failed => "failed",
            CampaignState::Succeeded => "succeeded",
            CampaignState::PaidOut => "paid_out",
        }
    }
}

impl fmt::Display for CampaignState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Storage
// ============================================================================

pub const CONFIG: Item<Config> = Item::new("config");

pub const STATE: Item<CampaignState> = Item::new("state");

/// Sum of all outstanding contributions (zeroed on payout)
pub const TOTAL_COLLECTED: Item<Uint128> = Item::new("total_collected");

/// contributor => cumulative contribution (removed once withdrawn)
pub const CONTRIBUTIONS: Map<&Addr, Uint128> = Map::new("contributions");

/// Whether the running total has reached the target.
///
/// Always derived from the stored total so it can never go stale.
pub fn target_reached(storage: &dyn Storage) -> StdResult<bool> {
    let config = CONFIG.load(storage)?;
    let total = TOTAL_COLLECTED.load(storage)?;
    Ok(total >= config.target_amount)
}
