use std::collections::HashSet;

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, OverflowError,
    OverflowOperation, Response, StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::msg::{
    ExecuteMsg, HasVotedResponse, InstantiateMsg, MigrateMsg, OptionsResponse, QueryMsg,
    VotesResponse,
};
use crate::state::{CONTRACT_NAME, CONTRACT_VERSION, OPTIONS, VOTERS, VOTES};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if msg.options.is_empty() {
        return Err(ContractError::NoOptions);
    }

    let mut seen = HashSet::new();
    for (index, option) in msg.options.iter().enumerate() {
        if option.trim().is_empty() {
            return Err(ContractError::EmptyOption {
                index: index as u32,
            });
        }
        if !seen.insert(option.as_str()) {
            return Err(ContractError::DuplicateOption {
                option: option.clone(),
            });
        }
        VOTES.save(deps.storage, index as u32, &0)?;
    }
    OPTIONS.save(deps.storage, &msg.options)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("option_count", msg.options.len().to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Vote { option } => execute_vote(deps, info, option),
    }
}

fn execute_vote(deps: DepsMut, info: MessageInfo, option: u32) -> Result<Response, ContractError> {
    let options = OPTIONS.load(deps.storage)?;
    let label = options
        .get(option as usize)
        .ok_or(ContractError::InvalidOption {
            option,
            count: options.len() as u32,
        })?;

    if VOTERS.has(deps.storage, &info.sender) {
        return Err(ContractError::AlreadyVoted);
    }

    let count = VOTES.may_load(deps.storage, option)?.unwrap_or(0);
    let count = count
        .checked_add(1)
        .ok_or_else(|| OverflowError::new(OverflowOperation::Add, count, 1))?;
    VOTES.save(deps.storage, option, &count)?;
    VOTERS.save(deps.storage, &info.sender, &option)?;

    Ok(Response::new()
        .add_attribute("action", "vote")
        .add_attribute("voter", info.sender)
        .add_attribute("option", option.to_string())
        .add_attribute("label", label))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Options {} => to_json_binary(&query_options(deps)?),
        QueryMsg::Votes {} => to_json_binary(&query_votes(deps)?),
        QueryMsg::HasVoted { voter } => to_json_binary(&query_has_voted(deps, voter)?),
    }
}

fn query_options(deps: Deps) -> StdResult<OptionsResponse> {
    let options = OPTIONS.load(deps.storage)?;
    Ok(OptionsResponse { options })
}

fn query_votes(deps: Deps) -> StdResult<VotesResponse> {
    let options = OPTIONS.load(deps.storage)?;
    let votes = (0..options.len() as u32)
        .map(|index| Ok(VOTES.may_load(deps.storage, index)?.unwrap_or(0)))
        .collect::<StdResult<Vec<_>>>()?;
    Ok(VotesResponse { votes })
}

fn query_has_voted(deps: Deps, voter: String) -> StdResult<HasVotedResponse> {
    let voter = deps.api.addr_validate(&voter)?;
    let option = VOTERS.may_load(deps.storage, &voter)?;
    Ok(HasVotedResponse {
        voted: option.is_some(),
        option,
    })
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
