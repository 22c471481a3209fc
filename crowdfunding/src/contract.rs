//! Crowdfunding Contract - Entry Points
//!
//! The handlers live in:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers

use common::{deadline_after, to_base_units, MAX_DECIMALS};
use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
    Uint128,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_cancel_crowdfunding, execute_collect, execute_contribute,
    execute_finished_crowdfunding, execute_withdraw,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_amounts, query_beneficiary, query_campaign, query_collected, query_contributors,
    query_funding_deadline, query_name, query_state, query_target_amount, query_total_collected,
};
use crate::state::{
    CampaignState, Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, STATE, TOTAL_COLLECTED,
};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if msg.name.trim().is_empty() {
        return Err(ContractError::InvalidConfig {
            reason: "Campaign name must not be empty".to_string(),
        });
    }
    if msg.target_amount.is_zero() {
        return Err(ContractError::InvalidConfig {
            reason: "Target amount must be greater than zero".to_string(),
        });
    }
    if msg.funding_deadline_minutes == 0 {
        return Err(ContractError::InvalidConfig {
            reason: "Funding deadline must be at least one minute away".to_string(),
        });
    }
    if msg.denom.is_empty() {
        return Err(ContractError::InvalidConfig {
            reason: "Denom must not be empty".to_string(),
        });
    }
    if msg.decimals > MAX_DECIMALS {
        return Err(ContractError::InvalidConfig {
            reason: format!("Decimals {} exceeds max {}", msg.decimals, MAX_DECIMALS),
        });
    }

    let beneficiary = deps.api.addr_validate(&msg.beneficiary)?;
    let target_amount = to_base_units(msg.target_amount, msg.decimals)?;
    let funding_deadline = deadline_after(env.block.time, msg.funding_deadline_minutes)?;

    let config = Config {
        name: msg.name,
        target_amount,
        funding_deadline,
        beneficiary,
        denom: msg.denom,
    };
    CONFIG.save(deps.storage, &config)?;
    STATE.save(deps.storage, &CampaignState::Ongoing)?;
    TOTAL_COLLECTED.save(deps.storage, &Uint128::zero())?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("name", config.name)
        .add_attribute("target_amount", target_amount)
        .add_attribute("funding_deadline", funding_deadline.seconds().to_string())
        .add_attribute("beneficiary", config.beneficiary)
        .add_attribute("denom", config.denom))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Contribute {} => execute_contribute(deps, env, info),
        ExecuteMsg::FinishedCrowdfunding {} => execute_finished_crowdfunding(deps, env),
        ExecuteMsg::Collect {} => execute_collect(deps, env),
        ExecuteMsg::Withdraw {} => execute_withdraw(deps, env, info),
        ExecuteMsg::CancelCrowdfunding {} => execute_cancel_crowdfunding(deps, env, info),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Name {} => to_json_binary(&query_name(deps)?),
        QueryMsg::TargetAmount {} => to_json_binary(&query_target_amount(deps)?),
        QueryMsg::FundingDeadline {} => to_json_binary(&query_funding_deadline(deps)?),
        QueryMsg::Beneficiary {} => to_json_binary(&query_beneficiary(deps)?),
        QueryMsg::State {} => to_json_binary(&query_state(deps)?),
        QueryMsg::Amounts { contributor } => to_json_binary(&query_amounts(deps, contributor)?),
        QueryMsg::TotalCollected {} => to_json_binary(&query_total_collected(deps)?),
        QueryMsg::Collected {} => to_json_binary(&query_collected(deps)?),
        QueryMsg::Campaign {} => to_json_binary(&query_campaign(deps, env)?),
        QueryMsg::Contributors { start_after, limit } => {
            to_json_binary(&query_contributors(deps, start_after, limit)?)
        }
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::{
        mock_dependencies, mock_dependencies_with_balance, mock_env, mock_info, MOCK_CONTRACT_ADDR,
    };
    use cosmwasm_std::{coins, from_json, Addr, BankMsg, CosmosMsg, StdError};

    use crate::msg::{CampaignResponse, ContributorsResponse, StateResponse};
    use crate::state::CONTRIBUTIONS;

    const DENOM: &str = "uluna";
    const BENEFICIARY: &str = "beneficiary";

    fn default_msg() -> InstantiateMsg {
        InstantiateMsg {
            name: "crowdfundme".to_string(),
            target_amount: Uint128::new(1),
            funding_deadline_minutes: 10,
            beneficiary: BENEFICIARY.to_string(),
            denom: DENOM.to_string(),
            decimals: 6,
        }
    }

    fn after_deadline() -> Env {
        let mut env = mock_env();
        env.block.time = env.block.time.plus_seconds(11 * 60);
        env
    }

    #[test]
    fn test_instantiate_stores_config() {
        let mut deps = mock_dependencies();
        let env = mock_env();
        let res = instantiate(deps.as_mut(), env.clone(), mock_info("creator", &[]), default_msg())
            .unwrap();
        assert_eq!(res.attributes[0].value, "instantiate");

        let config = CONFIG.load(deps.as_ref().storage).unwrap();
        assert_eq!(config.target_amount, Uint128::new(1_000_000));
        assert_eq!(config.funding_deadline, env.block.time.plus_seconds(600));
        assert_eq!(config.beneficiary, Addr::unchecked(BENEFICIARY));
        assert_eq!(
            STATE.load(deps.as_ref().storage).unwrap(),
            CampaignState::Ongoing
        );
        assert!(TOTAL_COLLECTED.load(deps.as_ref().storage).unwrap().is_zero());
    }

    #[test]
    fn test_instantiate_rejects_invalid_config() {
        let cases = vec![
            InstantiateMsg {
                name: "  ".to_string(),
                ..default_msg()
            },
            InstantiateMsg {
                target_amount: Uint128::zero(),
                ..default_msg()
            },
            InstantiateMsg {
                funding_deadline_minutes: 0,
                ..default_msg()
            },
            InstantiateMsg {
                denom: String::new(),
                ..default_msg()
            },
            InstantiateMsg {
                decimals: 19,
                ..default_msg()
            },
        ];

        for msg in cases {
            let mut deps = mock_dependencies();
            let err = instantiate(deps.as_mut(), mock_env(), mock_info("creator", &[]), msg)
                .unwrap_err();
            assert!(matches!(err, ContractError::InvalidConfig { .. }));
        }
    }

    #[test]
    fn test_instantiate_rejects_unrepresentable_deadline() {
        let mut deps = mock_dependencies();
        let msg = InstantiateMsg {
            funding_deadline_minutes: u64::MAX / 60,
            ..default_msg()
        };
        let err = instantiate(deps.as_mut(), mock_env(), mock_info("creator", &[]), msg)
            .unwrap_err();
        assert!(matches!(err, ContractError::Std(StdError::Overflow { .. })));
        assert!(CONFIG.may_load(deps.as_ref().storage).unwrap().is_none());
    }

    #[test]
    fn test_contribute_requires_campaign_denom() {
        let mut deps = mock_dependencies();
        instantiate(deps.as_mut(), mock_env(), mock_info("creator", &[]), default_msg()).unwrap();

        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info("alice", &[]),
            ExecuteMsg::Contribute {},
        )
        .unwrap_err();
        assert_eq!(err, ContractError::NoFundsSent);

        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info("alice", &coins(100, "uusd")),
            ExecuteMsg::Contribute {},
        )
        .unwrap_err();
        assert!(matches!(err, ContractError::InvalidFunds { .. }));
    }

    #[test]
    fn test_contribute_at_deadline_is_accepted() {
        let mut deps = mock_dependencies();
        instantiate(deps.as_mut(), mock_env(), mock_info("creator", &[]), default_msg()).unwrap();

        let mut env = mock_env();
        env.block.time = env.block.time.plus_seconds(600);
        execute(
            deps.as_mut(),
            env.clone(),
            mock_info("alice", &coins(500, DENOM)),
            ExecuteMsg::Contribute {},
        )
        .unwrap();

        env.block.time = env.block.time.plus_seconds(1);
        let err = execute(
            deps.as_mut(),
            env,
            mock_info("alice", &coins(500, DENOM)),
            ExecuteMsg::Contribute {},
        )
        .unwrap_err();
        assert!(matches!(err, ContractError::DeadlinePassed { .. }));
    }

    #[test]
    fn test_finish_before_deadline_reports_remaining() {
        let mut deps = mock_dependencies();
        instantiate(deps.as_mut(), mock_env(), mock_info("creator", &[]), default_msg()).unwrap();

        let mut env = mock_env();
        env.block.time = env.block.time.plus_seconds(540);
        let err = execute(
            deps.as_mut(),
            env,
            mock_info("anyone", &[]),
            ExecuteMsg::FinishedCrowdfunding {},
        )
        .unwrap_err();
        assert_eq!(
            err,
            ContractError::DeadlineNotReached {
                remaining_seconds: 60
            }
        );
    }

    #[test]
    fn test_finish_twice_is_rejected() {
        let mut deps = mock_dependencies();
        instantiate(deps.as_mut(), mock_env(), mock_info("creator", &[]), default_msg()).unwrap();

        let res = execute(
            deps.as_mut(),
            after_deadline(),
            mock_info("anyone", &[]),
            ExecuteMsg::FinishedCrowdfunding {},
        )
        .unwrap();
        assert_eq!(res.events.len(), 1);
        assert_eq!(res.events[0].ty, "campaign_finished");

        let err = execute(
            deps.as_mut(),
            after_deadline(),
            mock_info("anyone", &[]),
            ExecuteMsg::FinishedCrowdfunding {},
        )
        .unwrap_err();
        assert_eq!(
            err,
            ContractError::InvalidState {
                state: CampaignState::Failed
            }
        );
    }

    #[test]
    fn test_cancel_requires_beneficiary() {
        let mut deps = mock_dependencies();
        instantiate(deps.as_mut(), mock_env(), mock_info("creator", &[]), default_msg()).unwrap();

        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info("mallory", &[]),
            ExecuteMsg::CancelCrowdfunding {},
        )
        .unwrap_err();
        assert_eq!(err, ContractError::Unauthorized);

        execute(
            deps.as_mut(),
            mock_env(),
            mock_info(BENEFICIARY, &[]),
            ExecuteMsg::CancelCrowdfunding {},
        )
        .unwrap();

        let state: StateResponse =
            from_json(query(deps.as_ref(), mock_env(), QueryMsg::State {}).unwrap()).unwrap();
        assert_eq!(state.state, CampaignState::Failed);

        // Already failed
        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info(BENEFICIARY, &[]),
            ExecuteMsg::CancelCrowdfunding {},
        )
        .unwrap_err();
        assert!(matches!(err, ContractError::InvalidState { .. }));
    }

    #[test]
    fn test_collect_sends_held_balance() {
        let mut deps = mock_dependencies_with_balance(&coins(1_200_000, DENOM));
        instantiate(deps.as_mut(), mock_env(), mock_info("creator", &[]), default_msg()).unwrap();
        execute(
            deps.as_mut(),
            mock_env(),
            mock_info("alice", &coins(1_200_000, DENOM)),
            ExecuteMsg::Contribute {},
        )
        .unwrap();
        execute(
            deps.as_mut(),
            after_deadline(),
            mock_info("anyone", &[]),
            ExecuteMsg::FinishedCrowdfunding {},
        )
        .unwrap();

        let res = execute(
            deps.as_mut(),
            after_deadline(),
            mock_info("anyone", &[]),
            ExecuteMsg::Collect {},
        )
        .unwrap();
        assert_eq!(
            res.messages[0].msg,
            CosmosMsg::Bank(BankMsg::Send {
                to_address: BENEFICIARY.to_string(),
                amount: coins(1_200_000, DENOM),
            })
        );

        let campaign: CampaignResponse =
            from_json(query(deps.as_ref(), mock_env(), QueryMsg::Campaign {}).unwrap()).unwrap();
        assert_eq!(campaign.state, CampaignState::PaidOut);
        assert!(campaign.total_collected.is_zero());
    }

    #[test]
    fn test_collect_with_short_balance_fails() {
        // Ledger claims more than the contract holds
        let mut deps = mock_dependencies_with_balance(&coins(500_000, DENOM));
        instantiate(deps.as_mut(), mock_env(), mock_info("creator", &[]), default_msg()).unwrap();
        execute(
            deps.as_mut(),
            mock_env(),
            mock_info("alice", &coins(1_000_000, DENOM)),
            ExecuteMsg::Contribute {},
        )
        .unwrap();
        execute(
            deps.as_mut(),
            after_deadline(),
            mock_info("anyone", &[]),
            ExecuteMsg::FinishedCrowdfunding {},
        )
        .unwrap();

        let err = execute(
            deps.as_mut(),
            after_deadline(),
            mock_info("anyone", &[]),
            ExecuteMsg::Collect {},
        )
        .unwrap_err();
        assert!(matches!(err, ContractError::TransferFailed { .. }));
        assert_eq!(
            STATE.load(deps.as_ref().storage).unwrap(),
            CampaignState::Succeeded
        );
    }

    #[test]
    fn test_withdraw_removes_contributor() {
        let mut deps = mock_dependencies();
        deps.querier
            .update_balance(MOCK_CONTRACT_ADDR, coins(300_000, DENOM));
        instantiate(deps.as_mut(), mock_env(), mock_info("creator", &[]), default_msg()).unwrap();
        for (who, amount) in [("alice", 100_000u128), ("bob", 200_000u128)] {
            execute(
                deps.as_mut(),
                mock_env(),
                mock_info(who, &coins(amount, DENOM)),
                ExecuteMsg::Contribute {},
            )
            .unwrap();
        }
        execute(
            deps.as_mut(),
            after_deadline(),
            mock_info("anyone", &[]),
            ExecuteMsg::FinishedCrowdfunding {},
        )
        .unwrap();

        let res = execute(
            deps.as_mut(),
            after_deadline(),
            mock_info("alice", &[]),
            ExecuteMsg::Withdraw {},
        )
        .unwrap();
        assert_eq!(res.messages.len(), 1);
        assert_eq!(
            TOTAL_COLLECTED.load(deps.as_ref().storage).unwrap(),
            Uint128::new(200_000)
        );

        let contributors: ContributorsResponse = from_json(
            query(
                deps.as_ref(),
                mock_env(),
                QueryMsg::Contributors {
                    start_after: None,
                    limit: None,
                },
            )
            .unwrap(),
        )
        .unwrap();
        assert_eq!(contributors.contributors.len(), 1);
        assert_eq!(contributors.contributors[0].contributor, Addr::unchecked("bob"));

        // Second withdraw finds nothing
        let err = execute(
            deps.as_mut(),
            after_deadline(),
            mock_info("alice", &[]),
            ExecuteMsg::Withdraw {},
        )
        .unwrap_err();
        assert_eq!(err, ContractError::NothingToWithdraw);
    }

    #[test]
    fn test_late_contribution_reports_deadline_in_any_state() {
        let mut deps = mock_dependencies();
        instantiate(deps.as_mut(), mock_env(), mock_info("creator", &[]), default_msg()).unwrap();
        execute(
            deps.as_mut(),
            mock_env(),
            mock_info(BENEFICIARY, &[]),
            ExecuteMsg::CancelCrowdfunding {},
        )
        .unwrap();

        // Failed and past the deadline: the deadline wins
        let err = execute(
            deps.as_mut(),
            after_deadline(),
            mock_info("alice", &coins(500, DENOM)),
            ExecuteMsg::Contribute {},
        )
        .unwrap_err();
        assert!(matches!(err, ContractError::DeadlinePassed { .. }));
    }

    #[test]
    fn test_withdraw_with_short_balance_keeps_contribution() {
        let mut deps = mock_dependencies_with_balance(&coins(100_000, DENOM));
        instantiate(deps.as_mut(), mock_env(), mock_info("creator", &[]), default_msg()).unwrap();
        execute(
            deps.as_mut(),
            mock_env(),
            mock_info("alice", &coins(300_000, DENOM)),
            ExecuteMsg::Contribute {},
        )
        .unwrap();
        execute(
            deps.as_mut(),
            after_deadline(),
            mock_info("anyone", &[]),
            ExecuteMsg::FinishedCrowdfunding {},
        )
        .unwrap();

        let err = execute(
            deps.as_mut(),
            after_deadline(),
            mock_info("alice", &[]),
            ExecuteMsg::Withdraw {},
        )
        .unwrap_err();
        assert!(matches!(err, ContractError::TransferFailed { .. }));

        let alice = Addr::unchecked("alice");
        assert_eq!(
            CONTRIBUTIONS.load(deps.as_ref().storage, &alice).unwrap(),
            Uint128::new(300_000)
        );
        assert_eq!(
            TOTAL_COLLECTED.load(deps.as_ref().storage).unwrap(),
            Uint128::new(300_000)
        );
    }
}
