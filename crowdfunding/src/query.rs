//! Query handlers for the Crowdfunding contract.

use cosmwasm_std::{Deps, Env, Order, StdResult, Uint128};
use cw_storage_plus::Bound;

use crate::msg::{
    AmountResponse, BeneficiaryResponse, CampaignResponse, CollectedResponse, ContributorEntry,
    ContributorsResponse, FundingDeadlineResponse, NameResponse, StateResponse,
    TargetAmountResponse, TotalCollectedResponse,
};
use crate::state::{target_reached, CONFIG, CONTRIBUTIONS, STATE, TOTAL_COLLECTED};

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 30;

// ============================================================================
// Configuration Queries
// ============================================================================

pub fn query_name(deps: Deps) -> StdResult<NameResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(NameResponse { name: config.name })
}

pub fn query_target_amount(deps: Deps) -> StdResult<TargetAmountResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(TargetAmountResponse {
        target_amount: config.target_amount,
    })
}

pub fn query_funding_deadline(deps: Deps) -> StdResult<FundingDeadlineResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(FundingDeadlineResponse {
        funding_deadline: config.funding_deadline,
    })
}

pub fn query_beneficiary(deps: Deps) -> StdResult<BeneficiaryResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(BeneficiaryResponse {
        beneficiary: config.beneficiary,
    })
}

// ============================================================================
// Ledger Queries
// ============================================================================

pub fn query_state(deps: Deps) -> StdResult<StateResponse> {
    let state = STATE.load(deps.storage)?;
    Ok(StateResponse { state })
}

/// Outstanding contribution of `contributor`; zero once withdrawn or if never contributed.
pub fn query_amounts(deps: Deps, contributor: String) -> StdResult<AmountResponse> {
    let contributor = deps.api.addr_validate(&contributor)?;
    let amount = CONTRIBUTIONS
        .may_load(deps.storage, &contributor)?
        .unwrap_or(Uint128::zero());
    Ok(AmountResponse {
        contributor,
        amount,
    })
}

pub fn query_total_collected(deps: Deps) -> StdResult<TotalCollectedResponse> {
    let total_collected = TOTAL_COLLECTED.load(deps.storage)?;
    Ok(TotalCollectedResponse { total_collected })
}

pub fn query_collected(deps: Deps) -> StdResult<CollectedResponse> {
    Ok(CollectedResponse {
        collected: target_reached(deps.storage)?,
    })
}

/// Full snapshot of the campaign, including the native balance the contract holds.
pub fn query_campaign(deps: Deps, env: Env) -> StdResult<CampaignResponse> {
    let config = CONFIG.load(deps.storage)?;
    let state = STATE.load(deps.storage)?;
    let total_collected = TOTAL_COLLECTED.load(deps.storage)?;
    let balance = deps
        .querier
        .query_balance(&env.contract.address, &config.denom)?
        .amount;

    Ok(CampaignResponse {
        collected: total_collected >= config.target_amount,
        name: config.name,
        target_amount: config.target_amount,
        funding_deadline: config.funding_deadline,
        beneficiary: config.beneficiary,
        denom: config.denom,
        state,
        total_collected,
        balance,
    })
}

/// Paginated list of contributors with outstanding balances, ascending by address.
pub fn query_contributors(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<ContributorsResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start_addr = start_after
        .map(|addr| deps.api.addr_validate(&addr))
        .transpose()?;
    let start = start_addr.as_ref().map(Bound::exclusive);

    let contributors = CONTRIBUTIONS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            let (contributor, amount) = item?;
            Ok(ContributorEntry {
                contributor,
                amount,
            })
        })
        .collect::<StdResult<Vec<_>>>()?;

    Ok(ContributorsResponse { contributors })
}
