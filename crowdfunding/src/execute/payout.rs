//! Payout handlers.
//!
//! Bookkeeping is written before the bank transfer is attached to the
//! response. The transfer runs in the same transaction, so a failed send
//! reverts the state change and the call can simply be retried.

use common::native_send;
use cosmwasm_std::{Addr, Deps, DepsMut, Env, MessageInfo, Response, Uint128};

use crate::error::ContractError;
use crate::state::{CampaignState, CONFIG, CONTRIBUTIONS, STATE, TOTAL_COLLECTED};

/// Pay the whole held balance of a succeeded campaign to the beneficiary.
///
/// Coins sent to the contract outside `Contribute` are swept along with the
/// contributions. In a failed campaign they stay locked, since refunds only
/// cover recorded contributions.
pub fn execute_collect(deps: DepsMut, env: Env) -> Result<Response, ContractError> {
    let state = STATE.load(deps.storage)?;
    if state != CampaignState::Succeeded {
        return Err(ContractError::InvalidState { state });
    }

    let config = CONFIG.load(deps.storage)?;
    let total_collected = TOTAL_COLLECTED.load(deps.storage)?;
    let balance = held_balance(deps.as_ref(), &env.contract.address, &config.denom)?;
    if balance < total_collected {
        return Err(ContractError::TransferFailed {
            reason: format!(
                "held balance {} is below collected total {}",
                balance, total_collected
            ),
        });
    }

    STATE.save(deps.storage, &CampaignState::PaidOut)?;
    TOTAL_COLLECTED.save(deps.storage, &Uint128::zero())?;

    let mut response = Response::new();
    if !balance.is_zero() {
        response = response.add_message(native_send(
            config.beneficiary.clone(),
            &config.denom,
            balance,
        ));
    }

    Ok(response
        .add_attribute("action", "collect")
        .add_attribute("beneficiary", config.beneficiary)
        .add_attribute("amount", balance)
        .add_attribute("state", CampaignState::PaidOut.as_str()))
}

/// Refund the caller's full contribution from a failed campaign.
///
/// The recorded contribution is removed before the transfer is dispatched,
/// so a repeated call finds nothing left and is rejected.
pub fn execute_withdraw(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let state = STATE.load(deps.storage)?;
    if state != CampaignState::Failed {
        return Err(ContractError::InvalidState { state });
    }

    let amount = CONTRIBUTIONS
        .may_load(deps.storage, &info.sender)?
        .unwrap_or(Uint128::zero());
    if amount.is_zero() {
        return Err(ContractError::NothingToWithdraw);
    }

    let config = CONFIG.load(deps.storage)?;
    let balance = held_balance(deps.as_ref(), &env.contract.address, &config.denom)?;
    if balance < amount {
        return Err(ContractError::TransferFailed {
            reason: format!("held balance {} is below refund {}", balance, amount),
        });
    }

    CONTRIBUTIONS.remove(deps.storage, &info.sender);
    let total_collected = TOTAL_COLLECTED
        .load(deps.storage)?
        .checked_sub(amount)?;
    TOTAL_COLLECTED.save(deps.storage, &total_collected)?;

    Ok(Response::new()
        .add_message(native_send(info.sender.clone(), &config.denom, amount))
        .add_attribute("action", "withdraw")
        .add_attribute("contributor", info.sender)
        .add_attribute("amount", amount)
        .add_attribute("total_collected", total_collected))
}

fn held_balance(deps: Deps, contract: &Addr, denom: &str) -> Result<Uint128, ContractError> {
    Ok(deps.querier.query_balance(contract, denom)?.amount)
}
