use cosmwasm_std::{
    to_json_string, Addr, DepsMut, Env, MessageInfo, Order as StdOrder, Response, Storage, Uint256,
};
use cw_utils::{nonpayable, one_coin};
use obligo_clearing::clear_bids;
use obligo_types::{
    campaign::{Campaign, CampaignState, Order, OrderState},
    campaign_manager::CampaignCreatedResponse,
    user::Role,
};

use crate::{
    error::{ContractError, ContractResult},
    query::query_campaign,
    state::{increase_balance, next_campaign_id, CAMPAIGNS, ORDERS, ORDER_COUNT},
    user_management::assert_role,
};

const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// A campaign may stay open for at most 180 days from creation.
const MAX_BIDDING_WINDOW: u64 = 180 * SECONDS_PER_DAY;

/// Open a campaign. The attached coin is the collateral; it stays escrowed
/// until settlement or collateral execution.
#[allow(clippy::too_many_arguments)]
pub fn create_campaign(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    denom: String,
    max_interest_rate: Uint256,
    debt_issued: Uint256,
    closes_at: u64,
    maturity_at: u64,
) -> ContractResult<Response> {
    let collateral = one_coin(&info)?;
    let current_time = env.block.time.seconds();

    assert_role(deps.storage, &info.sender, Role::Debtor)?;

    if closes_at > current_time + MAX_BIDDING_WINDOW {
        return Err(ContractError::InvalidParam {
            reason: "close date cannot be more than 180 days out".to_string(),
        });
    }
    if closes_at > maturity_at {
        return Err(ContractError::InvalidParam {
            reason: "close date cannot be after maturity date".to_string(),
        });
    }
    if current_time >= closes_at {
        return Err(ContractError::InvalidParam {
            reason: "close date must be in the future".to_string(),
        });
    }
    if debt_issued.is_zero() {
        return Err(ContractError::InvalidParam {
            reason: "debt issued must be positive".to_string(),
        });
    }
    if max_interest_rate.is_zero() {
        return Err(ContractError::InvalidParam {
            reason: "max interest rate must be positive".to_string(),
        });
    }

    // one live campaign per debtor
    for item in CAMPAIGNS.range(deps.storage, None, None, StdOrder::Ascending) {
        let (_, campaign) = item?;
        if campaign.debtor == info.sender && !campaign.state.is_terminal() {
            return Err(ContractError::ActiveCampaignExists {
                debtor: info.sender.to_string(),
            });
        }
    }

    let id = next_campaign_id(deps.storage)?;
    let campaign = Campaign {
        id,
        denom,
        debtor: info.sender,
        collateral_denom: collateral.denom,
        collateral_amount: Uint256::from(collateral.amount),
        debt_issued,
        max_interest_rate,
        total_obligation: Uint256::zero(),
        total_raised: Uint256::zero(),
        state: CampaignState::Ongoing,
        created_at: current_time,
        closes_at,
        maturity_at,
        updated_at: 0,
    };
    CAMPAIGNS.save(deps.storage, id, &campaign)?;

    // the creation notice carries the narrower view: no totals, no
    // updated_at — those keys only appear once the campaign has closed
    let view = CampaignCreatedResponse::from(campaign.clone());

    Ok(Response::new()
        .add_attribute("action", "create_campaign")
        .add_attribute("campaign_id", id.to_string())
        .add_attribute("debtor", campaign.debtor.to_string())
        .add_attribute("collateral_amount", campaign.collateral_amount.to_string())
        .add_attribute("debt_issued", campaign.debt_issued.to_string())
        .add_attribute("campaign", to_json_string(&view)?))
}

/// Clear the debtor's ongoing campaign once its close time has passed.
/// Callable by anyone.
///
/// Filled amounts become the debtor's balance, rejected amounts return to
/// their investors' balances, and every mutated record is stamped with the
/// campaign's `closes_at` so the result does not depend on when the close
/// was triggered.
pub fn close_campaign(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    debtor: String,
) -> ContractResult<Response> {
    nonpayable(&info)?;
    let debtor = deps.api.addr_validate(&debtor)?;
    let current_time = env.block.time.seconds();

    let mut campaign = find_ongoing_campaign(deps.storage, &debtor)?;
    if current_time < campaign.closes_at {
        return Err(ContractError::CloseTimeNotReached {
            closes_at: campaign.closes_at,
            current_time,
        });
    }

    let book = ORDERS
        .prefix(campaign.id)
        .range(deps.storage, None, None, StdOrder::Ascending)
        .map(|item| Ok(item?.1))
        .collect::<ContractResult<Vec<Order>>>()?;

    let next_order_id = ORDER_COUNT.may_load(deps.storage)?.unwrap_or_default() + 1;
    let outcome = clear_bids(book, campaign.debt_issued, campaign.closes_at, next_order_id)?;

    for order in &outcome.orders {
        match order.state {
            OrderState::Accepted | OrderState::PartiallyAccepted => {
                increase_balance(deps.storage, &campaign.debtor, &campaign.denom, order.amount)?;
            }
            OrderState::Rejected => {
                increase_balance(deps.storage, &order.investor, &campaign.denom, order.amount)?;
            }
            _ => {}
        }
        ORDERS.save(deps.storage, (campaign.id, order.id), order)?;
    }
    // a partial fill appended a sibling order under a fresh id
    if let Some(last) = outcome.orders.last() {
        if last.id >= next_order_id {
            ORDER_COUNT.save(deps.storage, &last.id)?;
        }
    }

    campaign.state = CampaignState::Closed;
    campaign.total_raised = outcome.total_raised;
    campaign.total_obligation = outcome.total_obligation;
    campaign.updated_at = campaign.closes_at;
    CAMPAIGNS.save(deps.storage, campaign.id, &campaign)?;

    let view = query_campaign(deps.as_ref(), campaign.id)?;

    Ok(Response::new()
        .add_attribute("action", "close_campaign")
        .add_attribute("campaign_id", campaign.id.to_string())
        .add_attribute("total_raised", campaign.total_raised.to_string())
        .add_attribute("total_obligation", campaign.total_obligation.to_string())
        .add_attribute("campaign", to_json_string(&view)?))
}

fn find_ongoing_campaign(store: &dyn Storage, debtor: &Addr) -> ContractResult<Campaign> {
    for item in CAMPAIGNS.range(store, None, None, StdOrder::Ascending) {
        let (_, campaign) = item?;
        if campaign.debtor == *debtor && campaign.state == CampaignState::Ongoing {
            return Ok(campaign);
        }
    }

    Err(ContractError::NoOngoingCampaign {
        debtor: debtor.to_string(),
    })
}
