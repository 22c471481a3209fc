//! Lifecycle handlers.
//!
//! - `FinishedCrowdfunding` decides success or failure once the deadline passed
//! - `CancelCrowdfunding` lets the beneficiary force a failure

use cosmwasm_std::{Addr, DepsMut, Env, Event, MessageInfo, Response};

use crate::error::ContractError;
use crate::state::{target_reached, CampaignState, Config, CONFIG, STATE, TOTAL_COLLECTED};

/// Finalize the campaign. Callable by anyone after the deadline.
///
/// Only an `Ongoing` campaign can be finalized; a second call is rejected
/// with `InvalidState` and emits nothing.
pub fn execute_finished_crowdfunding(
    deps: DepsMut,
    env: Env,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if env.block.time <= config.funding_deadline {
        let remaining = config.funding_deadline.seconds() - env.block.time.seconds();
        return Err(ContractError::DeadlineNotReached {
            remaining_seconds: remaining,
        });
    }

    let state = STATE.load(deps.storage)?;
    if state != CampaignState::Ongoing {
        return Err(ContractError::InvalidState { state });
    }

    let succeeded = target_reached(deps.storage)?;
    let total_collected = TOTAL_COLLECTED.load(deps.storage)?;
    let new_state = CampaignState::from_outcome(succeeded);
    STATE.save(deps.storage, &new_state)?;

    let event = Event::new("campaign_finished")
        .add_attribute("campaign", env.contract.address)
        .add_attribute("total_collected", total_collected)
        .add_attribute("succeeded", succeeded.to_string());

    Ok(Response::new()
        .add_event(event)
        .add_attribute("action", "finished_crowdfunding")
        .add_attribute("state", new_state.as_str()))
}

/// Cancel the campaign. Beneficiary only; allowed until the funds are paid out.
pub fn execute_cancel_crowdfunding(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_beneficiary(&config, &info.sender)?;

    let state = STATE.load(deps.storage)?;
    if !state.is_cancellable() {
        return Err(ContractError::InvalidState { state });
    }

    STATE.save(deps.storage, &CampaignState::Failed)?;
    let total_collected = TOTAL_COLLECTED.load(deps.storage)?;

    let event = Event::new("campaign_cancelled")
        .add_attribute("campaign", env.contract.address)
        .add_attribute("total_collected", total_collected)
        .add_attribute("previous_state", state.as_str());

    Ok(Response::new()
        .add_event(event)
        .add_attribute("action", "cancel_crowdfunding")
        .add_attribute("state", CampaignState::Failed.as_str()))
}

/// Capability check: the caller must be the configured beneficiary.
pub fn ensure_beneficiary(config: &Config, sender: &Addr) -> Result<(), ContractError> {
    if *sender != config.beneficiary {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}
