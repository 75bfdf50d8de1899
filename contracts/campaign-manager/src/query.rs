use std::collections::BTreeSet;

use cosmwasm_std::{Deps, Order as StdOrder, Uint256};
use cw_storage_plus::Bound;
use obligo_types::{
    campaign::{Campaign, Order, OrderState},
    campaign_manager::{BalanceResponse, CampaignResponse, UserResponse},
};

use crate::{
    error::{ContractError, ContractResult},
    state::{BALANCES, CAMPAIGNS, ORDERS, USERS},
};

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 30;

pub fn query_user(deps: Deps, address: String) -> ContractResult<UserResponse> {
    let addr = deps.api.addr_validate(&address)?;
    let user = USERS.may_load(deps.storage, &addr)?.ok_or(ContractError::UserNotRegistered {
        user: address,
    })?;

    Ok(UserResponse {
        address: addr,
        role: user.role,
        registered_at: user.registered_at,
    })
}

pub fn query_campaign(deps: Deps, id: u64) -> ContractResult<CampaignResponse> {
    let campaign = CAMPAIGNS.may_load(deps.storage, id)?.ok_or(ContractError::CampaignNotFound {
        id,
    })?;
    hydrate(deps, campaign)
}

pub fn query_campaigns(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> ContractResult<Vec<CampaignResponse>> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);

    CAMPAIGNS
        .range(deps.storage, start, None, StdOrder::Ascending)
        .take(limit)
        .map(|item| hydrate(deps, item?.1))
        .collect()
}

pub fn query_campaigns_by_debtor(
    deps: Deps,
    debtor: String,
) -> ContractResult<Vec<CampaignResponse>> {
    let debtor = deps.api.addr_validate(&debtor)?;

    CAMPAIGNS
        .range(deps.storage, None, None, StdOrder::Ascending)
        .filter_map(|item| match item {
            Ok((_, campaign)) if campaign.debtor == debtor => Some(hydrate(deps, campaign)),
            Ok(_) => None,
            Err(err) => Some(Err(err.into())),
        })
        .collect()
}

pub fn query_campaigns_by_investor(
    deps: Deps,
    investor: String,
) -> ContractResult<Vec<CampaignResponse>> {
    let investor = deps.api.addr_validate(&investor)?;

    // collect the campaign ids the investor has bid on, then hydrate them
    // id-ascending
    let mut ids = BTreeSet::new();
    for item in ORDERS.range(deps.storage, None, None, StdOrder::Ascending) {
        let ((campaign_id, _), order) = item?;
        if order.investor == investor {
            ids.insert(campaign_id);
        }
    }

    ids.into_iter()
        .map(|id| {
            let campaign = CAMPAIGNS.load(deps.storage, id)?;
            hydrate(deps, campaign)
        })
        .collect()
}

pub fn query_orders(
    deps: Deps,
    campaign_id: u64,
    state: Option<OrderState>,
) -> ContractResult<Vec<Order>> {
    if CAMPAIGNS.may_load(deps.storage, campaign_id)?.is_none() {
        return Err(ContractError::CampaignNotFound {
            id: campaign_id,
        });
    }

    let mut orders = vec![];
    for item in ORDERS.prefix(campaign_id).range(deps.storage, None, None, StdOrder::Ascending) {
        let (_, order) = item?;
        if state.as_ref().map_or(true, |wanted| order.state == *wanted) {
            orders.push(order);
        }
    }

    Ok(orders)
}

pub fn query_balance(deps: Deps, address: String, denom: String) -> ContractResult<BalanceResponse> {
    let addr = deps.api.addr_validate(&address)?;
    let amount =
        BALANCES.may_load(deps.storage, (&addr, &denom))?.unwrap_or_else(Uint256::zero);

    Ok(BalanceResponse {
        denom,
        amount,
    })
}

fn hydrate(deps: Deps, campaign: Campaign) -> ContractResult<CampaignResponse> {
    let orders = query_orders(deps, campaign.id, None)?;
    Ok(CampaignResponse::new(campaign, orders))
}
