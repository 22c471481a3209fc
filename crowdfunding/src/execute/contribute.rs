//! Contribution handler.

use common::must_pay;
use cosmwasm_std::{DepsMut, Env, MessageInfo, Response, Uint128};

use crate::error::ContractError;
use crate::state::{CampaignState, CONFIG, CONTRIBUTIONS, STATE, TOTAL_COLLECTED};

/// Record the native coins attached to the message as a contribution.
///
/// The deadline is checked before the lifecycle state, so a late contribution
/// is always reported as `DeadlinePassed`. Reaching the target does not change
/// the state; `Collected` is derived on read.
pub fn execute_contribute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if env.block.time > config.funding_deadline {
        return Err(ContractError::DeadlinePassed {
            deadline: config.funding_deadline.seconds(),
        });
    }

    let state = STATE.load(deps.storage)?;
    if state != CampaignState::Ongoing {
        return Err(ContractError::InvalidState { state });
    }

    let amount = must_pay(&info, &config.denom)?;

    let contributed = CONTRIBUTIONS
        .may_load(deps.storage, &info.sender)?
        .unwrap_or(Uint128::zero())
        .checked_add(amount)?;
    CONTRIBUTIONS.save(deps.storage, &info.sender, &contributed)?;

    let total_collected = TOTAL_COLLECTED.load(deps.storage)?.checked_add(amount)?;
    TOTAL_COLLECTED.save(deps.storage, &total_collected)?;

    Ok(Response::new()
        .add_attribute("action", "contribute")
        .add_attribute("contributor", info.sender)
        .add_attribute("amount", amount)
        .add_attribute("total_contributed", contributed)
        .add_attribute("total_collected", total_collected))
}
