//! Message types for the Crowdfunding contract

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Timestamp, Uint128};

use crate::state::CampaignState;

// ============================================================================
// Instantiate & Migrate
// ============================================================================

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    /// Display name of the campaign
    pub name: String,
    /// Funding target in whole coins (e.g. 3 = 3 LUNA)
    pub target_amount: Uint128,
    /// Campaign duration in minutes, counted from the instantiation block
    pub funding_deadline_minutes: u64,
    /// Address receiving the funds on success
    pub beneficiary: String,
    /// Native denom accepted for contributions (e.g. "uluna")
    pub denom: String,
    /// Decimals of `denom` (6 for uluna)
    pub decimals: u8,
}

// ============================================================================
// Execute Messages
// ============================================================================

/// Execute messages
#[cw_serde]
pub enum ExecuteMsg {
    /// Contribute the native coins attached to this message
    ///
    /// Authorization: Anyone, until the funding deadline
    Contribute {},

    /// Close the campaign after the deadline, marking it succeeded or failed
    ///
    /// Authorization: Anyone
    FinishedCrowdfunding {},

    /// Pay the collected funds of a succeeded campaign to the beneficiary
    ///
    /// The whole held balance of the denom is paid, including coins sent to
    /// the contract by plain bank transfer.
    ///
    /// Authorization: Anyone (funds always go to the beneficiary)
    Collect {},

    /// Reclaim the caller's contribution from a failed campaign
    ///
    /// Authorization: Contributors
    Withdraw {},

    /// Force the campaign into the failed state
    ///
    /// Authorization: Beneficiary only
    CancelCrowdfunding {},
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(NameResponse)]
    Name {},

    /// Target in smallest units of the campaign denom
    #[returns(TargetAmountResponse)]
    TargetAmount {},

    #[returns(FundingDeadlineResponse)]
    FundingDeadline {},

    #[returns(BeneficiaryResponse)]
    Beneficiary {},

    #[returns(StateResponse)]
    State {},

    /// Outstanding contribution of a single address (zero if none)
    #[returns(AmountResponse)]
    Amounts { contributor: String },

    #[returns(TotalCollectedResponse)]
    TotalCollected {},

    /// Whether the running total has reached the target
    #[returns(CollectedResponse)]
    Collected {},

    /// Full campaign snapshot
    #[returns(CampaignResponse)]
    Campaign {},

    /// Paginated list of contributors with outstanding balances
    #[returns(ContributorsResponse)]
    Contributors {
        start_after: Option<String>,
        limit: Option<u32>,
    },
}

// ============================================================================
// Query Responses
// ============================================================================

#[cw_serde]
pub struct NameResponse {
    pub name: String,
}

#[cw_serde]
pub struct TargetAmountResponse {
    pub target_amount: Uint128,
}

#[cw_serde]
pub struct FundingDeadlineResponse {
    pub funding_deadline: Timestamp,
}

#[cw_serde]
pub struct BeneficiaryResponse {
    pub beneficiary: Addr,
}

#[cw_serde]
pub struct StateResponse {
    pub state: CampaignState,
}

#[cw_serde]
pub struct AmountResponse {
    pub contributor: Addr,
    pub amount: Uint128,
}

#[cw_serde]
pub struct TotalCollectedResponse {
    pub total_collected: Uint128,
}

#[cw_serde]
pub struct CollectedResponse {
    pub collected: bool,
}

#[cw_serde]
pub struct CampaignResponse {
    pub name: String,
    pub target_amount: Uint128,
    pub funding_deadline: Timestamp,
    pub beneficiary: Addr,
    pub denom: String,
    pub state: CampaignState,
    pub total_collected: Uint128,
    pub collected: bool,
    /// Native balance currently held by the contract. Can exceed
    /// `total_collected` when coins arrive by plain bank transfer; that excess
    /// goes to the beneficiary on `Collect` and is not refundable otherwise.
    pub balance: Uint128,
}

#[cw_serde]
pub struct ContributorEntry {
    pub contributor: Addr,
    pub amount: Uint128,
}

#[cw_serde]
pub struct ContributorsResponse {
    pub contributors: Vec<ContributorEntry>,
}
