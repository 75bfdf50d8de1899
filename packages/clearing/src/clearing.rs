use cosmwasm_schema::cw_serde;
use cosmwasm_std::Uint256;
use obligo_types::campaign::{Order, OrderState};

use crate::error::ClearingError;

/// Denominator of whole-percent interest rates.
const PERCENT_BASE: u64 = 100;

/// Result of clearing a campaign's bid book.
#[cw_serde]
pub struct ClearingOutcome {
    /// Every order of the campaign after clearing, id-ascending. A partial
    /// fill appends a sibling rejected order holding the unfilled leftover.
    pub orders: Vec<Order>,

    /// Sum of filled amounts, at most the campaign's debt target
    pub total_raised: Uint256,

    /// Sum of per-order obligations of the filled orders
    pub total_obligation: Uint256,
}

/// Principal plus interest owed for a filled order:
/// `floor(amount * (100 + rate) / 100)`.
pub fn order_obligation(amount: Uint256, interest_rate: Uint256) -> Result<Uint256, ClearingError> {
    let numerator = interest_rate.checked_add(Uint256::from(PERCENT_BASE))?;
    Ok(amount.checked_multiply_ratio(numerator, Uint256::from(PERCENT_BASE))?)
}

/// Floor share of the collateral pool owed to one filled order:
/// `floor(collateral_amount * obligation / total_obligation)`.
pub fn collateral_share(
    collateral_amount: Uint256,
    obligation: Uint256,
    total_obligation: Uint256,
) -> Result<Uint256, ClearingError> {
    Ok(collateral_amount.checked_multiply_ratio(obligation, total_obligation)?)
}

/// Clear a campaign's bid book at its close time.
///
/// Bids are filled lowest rate first, ties broken by earliest id. The bid
/// that straddles the debt target is split: the filled part keeps its order
/// id, the leftover becomes a fresh rejected order at `next_order_id` with
/// the parent's investor, rate and creation time. Every order is stamped
/// with `closes_at`, so the outcome is a pure function of the book and not
/// of when the close was triggered.
///
/// `orders` must be the campaign's pending bids in id-ascending order.
pub fn clear_bids(
    mut orders: Vec<Order>,
    debt_issued: Uint256,
    closes_at: u64,
    next_order_id: u64,
) -> Result<ClearingOutcome, ClearingError> {
    for order in &orders {
        if order.state != OrderState::Pending {
            return Err(ClearingError::NonPendingOrder {
                id: order.id,
            });
        }
    }

    let mut ranked: Vec<usize> = (0..orders.len()).collect();
    ranked.sort_by(|&a, &b| {
        orders[a]
            .interest_rate
            .cmp(&orders[b].interest_rate)
            .then(orders[a].id.cmp(&orders[b].id))
    });

    let mut raised = Uint256::zero();
    let mut leftovers: Vec<Order> = vec![];
    let mut next_id = next_order_id;
    for idx in ranked {
        let order = &mut orders[idx];
        if raised == debt_issued {
            order.state = OrderState::Rejected;
        } else {
            let filled = raised.checked_add(order.amount)?;
            if filled <= debt_issued {
                order.state = OrderState::Accepted;
                raised = filled;
            } else {
                let take = debt_issued.checked_sub(raised)?;
                let leftover = order.amount.checked_sub(take)?;
                order.state = OrderState::PartiallyAccepted;
                order.amount = take;
                leftovers.push(Order {
                    id: next_id,
                    campaign_id: order.campaign_id,
                    investor: order.investor.clone(),
                    amount: leftover,
                    interest_rate: order.interest_rate,
                    state: OrderState::Rejected,
                    created_at: order.created_at,
                    updated_at: closes_at,
                });
                next_id += 1;
                raised = debt_issued;
            }
        }
        order.updated_at = closes_at;
    }
    orders.append(&mut leftovers);

    let mut total_obligation = Uint256::zero();
    for order in &orders {
        if order.state.is_filled() {
            let obligation = order_obligation(order.amount, order.interest_rate)?;
            total_obligation = total_obligation.checked_add(obligation)?;
        }
    }

    Ok(ClearingOutcome {
        orders,
        total_raised: raised,
        total_obligation,
    })
}
