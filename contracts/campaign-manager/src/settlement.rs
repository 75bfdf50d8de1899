use cosmwasm_std::{
    to_json_string, DepsMut, Env, MessageInfo, Order as StdOrder, Response, Storage, Uint256,
};
use cw_utils::{may_pay, nonpayable};
use obligo_clearing::{collateral_share, order_obligation};
use obligo_types::campaign::{Campaign, CampaignState, Order, OrderState};

use crate::{
    error::{ContractError, ContractResult},
    query::query_campaign,
    state::{increase_balance, CAMPAIGNS, ORDERS},
};

/// Repay a closed campaign at or after maturity. The debtor attaches exactly
/// `total_obligation` of the campaign denom (nothing when the obligation is
/// zero); every filled order is paid its obligation and the collateral
/// returns to the debtor.
pub fn settle_campaign(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    campaign_id: u64,
) -> ContractResult<Response> {
    let current_time = env.block.time.seconds();

    let mut campaign = load_closed_campaign(deps.storage, campaign_id)?;
    if info.sender != campaign.debtor {
        return Err(ContractError::NotCampaignDebtor {});
    }
    if current_time < campaign.maturity_at {
        return Err(ContractError::MaturityNotReached {
            maturity_at: campaign.maturity_at,
            current_time,
        });
    }

    let repaid = Uint256::from(may_pay(&info, &campaign.denom)?);
    if repaid != campaign.total_obligation {
        return Err(ContractError::SettlementAmountMismatch {
            expected: campaign.total_obligation,
            found: repaid,
        });
    }

    for mut order in campaign_book(deps.storage, campaign.id)? {
        if !order.state.is_filled() {
            continue;
        }
        let obligation = order_obligation(order.amount, order.interest_rate)?;
        increase_balance(deps.storage, &order.investor, &campaign.denom, obligation)?;
        order.state = OrderState::Settled;
        order.updated_at = current_time;
        ORDERS.save(deps.storage, (campaign.id, order.id), &order)?;
    }

    // the debt is repaid, so the collateral goes back to the debtor
    increase_balance(
        deps.storage,
        &campaign.debtor,
        &campaign.collateral_denom,
        campaign.collateral_amount,
    )?;

    campaign.state = CampaignState::Settled;
    campaign.updated_at = current_time;
    CAMPAIGNS.save(deps.storage, campaign.id, &campaign)?;

    let view = query_campaign(deps.as_ref(), campaign.id)?;

    Ok(Response::new()
        .add_attribute("action", "settle_campaign")
        .add_attribute("campaign_id", campaign.id.to_string())
        .add_attribute("repaid", repaid.to_string())
        .add_attribute("collateral_refunded", campaign.collateral_amount.to_string())
        .add_attribute("campaign", to_json_string(&view)?))
}

/// Distribute the collateral of a defaulted campaign pro-rata to the
/// obligations of its filled orders, floor per share; the rounding residue
/// stays with the application. Callable by anyone at or after maturity.
pub fn execute_collateral(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    campaign_id: u64,
) -> ContractResult<Response> {
    nonpayable(&info)?;
    let current_time = env.block.time.seconds();

    let mut campaign = load_closed_campaign(deps.storage, campaign_id)?;
    if current_time < campaign.maturity_at {
        return Err(ContractError::MaturityNotReached {
            maturity_at: campaign.maturity_at,
            current_time,
        });
    }

    let mut distributed = Uint256::zero();
    for mut order in campaign_book(deps.storage, campaign.id)? {
        if !order.state.is_filled() {
            continue;
        }
        let obligation = order_obligation(order.amount, order.interest_rate)?;
        let share =
            collateral_share(campaign.collateral_amount, obligation, campaign.total_obligation)?;
        increase_balance(deps.storage, &order.investor, &campaign.collateral_denom, share)?;
        distributed = distributed.checked_add(share)?;
        order.state = OrderState::SettledByCollateral;
        order.updated_at = current_time;
        ORDERS.save(deps.storage, (campaign.id, order.id), &order)?;
    }

    campaign.state = CampaignState::CollateralExecuted;
    campaign.updated_at = current_time;
    CAMPAIGNS.save(deps.storage, campaign.id, &campaign)?;

    let view = query_campaign(deps.as_ref(), campaign.id)?;

    Ok(Response::new()
        .add_attribute("action", "execute_collateral")
        .add_attribute("campaign_id", campaign.id.to_string())
        .add_attribute("distributed", distributed.to_string())
        .add_attribute(
            "residue",
            campaign.collateral_amount.checked_sub(distributed)?.to_string(),
        )
        .add_attribute("campaign", to_json_string(&view)?))
}

fn load_closed_campaign(store: &dyn Storage, campaign_id: u64) -> ContractResult<Campaign> {
    let campaign =
        CAMPAIGNS.may_load(store, campaign_id)?.ok_or(ContractError::CampaignNotFound {
            id: campaign_id,
        })?;

    if campaign.state != CampaignState::Closed {
        return Err(ContractError::InvalidCampaignState {
            expected: CampaignState::Closed,
            found: campaign.state,
        });
    }

    Ok(campaign)
}

fn campaign_book(store: &dyn Storage, campaign_id: u64) -> ContractResult<Vec<Order>> {
    ORDERS
        .prefix(campaign_id)
        .range(store, None, None, StdOrder::Ascending)
        .map(|item| Ok(item?.1))
        .collect()
}
