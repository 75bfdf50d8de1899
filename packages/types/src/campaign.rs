use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint256};
use strum::Display;

#[cw_serde]
#[derive(Display)]
#[strum(serialize_all = "snake_case")]
pub enum CampaignState {
    /// Accepting bids until `closes_at`
    Ongoing,

    /// Book cleared; waiting for the debtor to repay at maturity
    Closed,

    /// Debtor repaid the full obligation
    Settled,

    /// Debtor defaulted; collateral distributed to the filled investors
    CollateralExecuted,
}

impl CampaignState {
    /// Terminal campaigns admit no further transitions and do not count
    /// against the one-live-campaign-per-debtor rule.
    pub fn is_terminal(&self) -> bool {
        matches!(self, CampaignState::Settled | CampaignState::CollateralExecuted)
    }
}

#[cw_serde]
#[derive(Display)]
#[strum(serialize_all = "snake_case")]
pub enum OrderState {
    /// Bid placed while the campaign is ongoing
    Pending,

    /// Fully filled at close
    Accepted,

    /// Filled for part of the bid; the remainder became a sibling rejected order
    PartiallyAccepted,

    /// Not filled; the amount is refunded to the investor's balance at close
    Rejected,

    /// Obligation paid out after the debtor settled
    Settled,

    /// Compensated from the collateral pool after the debtor defaulted
    SettledByCollateral,
}

impl OrderState {
    /// Filled orders are the ones owed an obligation after close.
    pub fn is_filled(&self) -> bool {
        matches!(self, OrderState::Accepted | OrderState::PartiallyAccepted)
    }
}

/// A debtor's offer to raise `debt_issued` of `denom` against collateral,
/// via a uniform-price interest auction closing at `closes_at` and maturing
/// at `maturity_at`.
///
/// Orders are not embedded; they are stored under `(campaign_id, order_id)`
/// keys and hydrated into [`CampaignResponse`] views id-ascending.
#[cw_serde]
pub struct Campaign {
    pub id: u64,

    /// Denom the debtor raises and repays in
    pub denom: String,

    pub debtor: Addr,

    /// Denom of the collateral escrowed at creation
    pub collateral_denom: String,

    pub collateral_amount: Uint256,

    /// Target amount to raise
    pub debt_issued: Uint256,

    /// Whole-percent cap on bid interest rates
    pub max_interest_rate: Uint256,

    /// Sum of per-order obligations of the filled orders. Zero until close.
    pub total_obligation: Uint256,

    /// Sum of filled amounts, at most `debt_issued`. Zero until close.
    pub total_raised: Uint256,

    pub state: CampaignState,

    pub created_at: u64,

    pub closes_at: u64,

    pub maturity_at: u64,

    /// Zero until the campaign is first mutated after creation
    pub updated_at: u64,
}

/// An investor's bid: `amount` of the campaign denom offered at
/// `interest_rate` whole percent.
#[cw_serde]
pub struct Order {
    pub id: u64,

    pub campaign_id: u64,

    pub investor: Addr,

    /// The full deposit while pending; after close, the filled fraction.
    /// A partial fill spawns a sibling rejected order holding the leftover.
    pub amount: Uint256,

    /// Whole percent, at most the campaign's `max_interest_rate`
    pub interest_rate: Uint256,

    pub state: OrderState,

    pub created_at: u64,

    /// Zero until the order is first mutated after creation
    pub updated_at: u64,
}
