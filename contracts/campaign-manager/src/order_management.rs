use cosmwasm_std::{to_json_string, DepsMut, Env, MessageInfo, Response, Uint256};
use cw_utils::one_coin;
use obligo_types::{
    campaign::{CampaignState, Order, OrderState},
    user::Role,
};

use crate::{
    error::{ContractError, ContractResult},
    state::{next_order_id, CAMPAIGNS, ORDERS},
    user_management::assert_role,
};

/// Place a bid on an ongoing campaign. The attached coin of the campaign
/// denom is the bid amount; it is escrowed until the book clears at close.
pub fn create_order(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    campaign_id: u64,
    interest_rate: Uint256,
) -> ContractResult<Response> {
    let deposit = one_coin(&info)?;
    let current_time = env.block.time.seconds();

    assert_role(deps.storage, &info.sender, Role::Investor)?;

    let campaign =
        CAMPAIGNS.may_load(deps.storage, campaign_id)?.ok_or(ContractError::CampaignNotFound {
            id: campaign_id,
        })?;

    if campaign.state != CampaignState::Ongoing {
        return Err(ContractError::InvalidCampaignState {
            expected: CampaignState::Ongoing,
            found: campaign.state,
        });
    }
    if current_time >= campaign.closes_at {
        return Err(ContractError::BiddingClosed {
            closes_at: campaign.closes_at,
            current_time,
        });
    }
    if deposit.denom != campaign.denom {
        return Err(ContractError::DepositDenomMismatch {
            expected: campaign.denom,
            found: deposit.denom,
        });
    }
    if interest_rate.is_zero() {
        return Err(ContractError::InvalidParam {
            reason: "interest rate must be positive".to_string(),
        });
    }
    if interest_rate > campaign.max_interest_rate {
        return Err(ContractError::InterestRateTooHigh {
            max: campaign.max_interest_rate,
            found: interest_rate,
        });
    }

    let id = next_order_id(deps.storage)?;
    let order = Order {
        id,
        campaign_id,
        investor: info.sender,
        amount: Uint256::from(deposit.amount),
        interest_rate,
        state: OrderState::Pending,
        created_at: current_time,
        updated_at: 0,
    };
    ORDERS.save(deps.storage, (campaign_id, id), &order)?;

    Ok(Response::new()
        .add_attribute("action", "create_order")
        .add_attribute("order_id", id.to_string())
        .add_attribute("campaign_id", campaign_id.to_string())
        .add_attribute("amount", order.amount.to_string())
        .add_attribute("interest_rate", order.interest_rate.to_string())
        .add_attribute("order", to_json_string(&order)?))
}
