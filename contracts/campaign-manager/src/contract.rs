use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response,
};
use mars_owner::OwnerInit;
use obligo_types::campaign_manager::{ExecuteMsg, InstantiateMsg, QueryMsg};

use crate::{
    balance::withdraw,
    campaign_management::{close_campaign, create_campaign},
    error::ContractResult,
    order_management::create_order,
    query::{
        query_balance, query_campaign, query_campaigns, query_campaigns_by_debtor,
        query_campaigns_by_investor, query_orders, query_user,
    },
    settlement::{execute_collateral, settle_campaign},
    state::OWNER,
    user_management::register_user,
};

pub const CONTRACT_NAME: &str = env!("CARGO_PKG_NAME");
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[entry_point]
pub fn instantiate(
    deps: DepsMut,
    _: Env,
    info: MessageInfo,
    _: InstantiateMsg,
) -> ContractResult<Response> {
    // initialize contract version info
    cw2::set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    // initialize contract ownership info
    OWNER.initialize(
        deps.storage,
        deps.api,
        OwnerInit::SetInitialOwner {
            owner: info.sender.into(),
        },
    )?;

    Ok(Response::new().add_attribute("action", "instantiate"))
}

#[entry_point]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> ContractResult<Response> {
    match msg {
        ExecuteMsg::UpdateOwner(update) => OWNER.update(deps, info, update).map_err(Into::into),
        ExecuteMsg::RegisterUser {
            address,
            role,
        } => register_user(deps, env, info, address, role),
        ExecuteMsg::CreateCampaign {
            denom,
            max_interest_rate,
            debt_issued,
            closes_at,
            maturity_at,
        } => create_campaign(
            deps,
            env,
            info,
            denom,
            max_interest_rate,
            debt_issued,
            closes_at,
            maturity_at,
        ),
        ExecuteMsg::CreateOrder {
            campaign_id,
            interest_rate,
        } => create_order(deps, env, info, campaign_id, interest_rate),
        ExecuteMsg::CloseCampaign {
            debtor,
        } => close_campaign(deps, env, info, debtor),
        ExecuteMsg::SettleCampaign {
            campaign_id,
        } => settle_campaign(deps, env, info, campaign_id),
        ExecuteMsg::ExecuteCollateral {
            campaign_id,
        } => execute_collateral(deps, env, info, campaign_id),
        ExecuteMsg::Withdraw {
            denom,
            amount,
        } => withdraw(deps, info, denom, amount),
    }
}

#[entry_point]
pub fn query(deps: Deps, _: Env, msg: QueryMsg) -> ContractResult<Binary> {
    match msg {
        QueryMsg::Owner {} => to_json_binary(&OWNER.query(deps.storage)?),
        QueryMsg::User {
            address,
        } => to_json_binary(&query_user(deps, address)?),
        QueryMsg::Campaign {
            id,
        } => to_json_binary(&query_campaign(deps, id)?),
        QueryMsg::Campaigns {
            start_after,
            limit,
        } => to_json_binary(&query_campaigns(deps, start_after, limit)?),
        QueryMsg::CampaignsByDebtor {
            debtor,
        } => to_json_binary(&query_campaigns_by_debtor(deps, debtor)?),
        QueryMsg::CampaignsByInvestor {
            investor,
        } => to_json_binary(&query_campaigns_by_investor(deps, investor)?),
        QueryMsg::Orders {
            campaign_id,
            state,
        } => to_json_binary(&query_orders(deps, campaign_id, state)?),
        QueryMsg::Balance {
            address,
            denom,
        } => to_json_binary(&query_balance(deps, address, denom)?),
    }
    .map_err(Into::into)
}
