use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint256};
use mars_owner::OwnerUpdate;

use crate::{
    campaign::{Campaign, CampaignState, Order, OrderState},
    user::Role,
};

#[cw_serde]
pub struct InstantiateMsg {}

#[cw_serde]
pub enum ExecuteMsg {
    UpdateOwner(OwnerUpdate),

    /// Register an address as a debtor or investor. Only the owner can
    /// register users; re-registering an address is rejected.
    RegisterUser {
        address: String,
        role: Role,
    },

    /// Open a campaign. The sender must be a registered debtor with no other
    /// live campaign, and must attach exactly one coin: the collateral that
    /// backs the debt until settlement.
    CreateCampaign {
        /// Denom the campaign raises
        denom: String,

        /// Whole-percent cap on bid interest rates
        max_interest_rate: Uint256,

        /// Target amount to raise
        debt_issued: Uint256,

        /// End of the bidding window; the book can be cleared from here on
        closes_at: u64,

        /// Earliest time the debtor can repay (or default)
        maturity_at: u64,
    },

    /// Bid on an ongoing campaign. The sender must be a registered investor
    /// and must attach exactly one coin of the campaign denom; the attached
    /// amount is the bid amount and is escrowed until close.
    CreateOrder {
        campaign_id: u64,
        /// Requested interest rate in whole percent
        interest_rate: Uint256,
    },

    /// Clear and close the debtor's ongoing campaign once its close time has
    /// passed. Callable by anyone.
    CloseCampaign {
        debtor: String,
    },

    /// Repay the campaign at or after maturity. The sender must be the
    /// campaign's debtor and must attach coins of the campaign denom
    /// totalling exactly `total_obligation`. Pays every filled order its
    /// obligation and returns the collateral to the debtor.
    SettleCampaign {
        campaign_id: u64,
    },

    /// Distribute the collateral of a defaulted campaign pro-rata to the
    /// obligations of its filled orders. Callable by anyone at or after
    /// maturity while the campaign is still closed.
    ExecuteCollateral {
        campaign_id: u64,
    },

    /// Move funds from the sender's internal balance to their bank account.
    Withdraw {
        denom: String,
        amount: Uint256,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(mars_owner::OwnerResponse)]
    Owner {},

    #[returns(UserResponse)]
    User {
        address: String,
    },

    #[returns(CampaignResponse)]
    Campaign {
        id: u64,
    },

    #[returns(Vec<CampaignResponse>)]
    Campaigns {
        start_after: Option<u64>,
        limit: Option<u32>,
    },

    #[returns(Vec<CampaignResponse>)]
    CampaignsByDebtor {
        debtor: String,
    },

    /// Campaigns holding at least one order of the given investor
    #[returns(Vec<CampaignResponse>)]
    CampaignsByInvestor {
        investor: String,
    },

    /// Orders of a campaign, id-ascending, optionally filtered by state
    #[returns(Vec<Order>)]
    Orders {
        campaign_id: u64,
        state: Option<OrderState>,
    },

    /// Internal (withdrawable) balance; zero for unknown keys
    #[returns(BalanceResponse)]
    Balance {
        address: String,
        denom: String,
    },
}

#[cw_serde]
pub struct UserResponse {
    pub address: Addr,
    pub role: Role,
    pub registered_at: u64,
}

/// A campaign with its orders hydrated, id-ascending.
#[cw_serde]
pub struct CampaignResponse {
    pub id: u64,
    pub denom: String,
    pub debtor: Addr,
    pub collateral_denom: String,
    pub collateral_amount: Uint256,
    pub debt_issued: Uint256,
    pub max_interest_rate: Uint256,
    pub total_obligation: Uint256,
    pub total_raised: Uint256,
    pub state: CampaignState,
    pub orders: Vec<Order>,
    pub created_at: u64,
    pub closes_at: u64,
    pub maturity_at: u64,
    pub updated_at: u64,
}

impl CampaignResponse {
    pub fn new(campaign: Campaign, orders: Vec<Order>) -> Self {
        Self {
            id: campaign.id,
            denom: campaign.denom,
            debtor: campaign.debtor,
            collateral_denom: campaign.collateral_denom,
            collateral_amount: campaign.collateral_amount,
            debt_issued: campaign.debt_issued,
            max_interest_rate: campaign.max_interest_rate,
            total_obligation: campaign.total_obligation,
            total_raised: campaign.total_raised,
            state: campaign.state,
            orders,
            created_at: campaign.created_at,
            closes_at: campaign.closes_at,
            maturity_at: campaign.maturity_at,
            updated_at: campaign.updated_at,
        }
    }
}

/// The narrower view emitted by the creation notice. An ongoing campaign has
/// no totals and has never been updated, so `total_obligation`,
/// `total_raised` and `updated_at` are absent keys here rather than zeroes.
#[cw_serde]
pub struct CampaignCreatedResponse {
    pub id: u64,
    pub denom: String,
    pub debtor: Addr,
    pub collateral_denom: String,
    pub collateral_amount: Uint256,
    pub debt_issued: Uint256,
    pub max_interest_rate: Uint256,
    pub state: CampaignState,
    pub orders: Vec<Order>,
    pub created_at: u64,
    pub closes_at: u64,
    pub maturity_at: u64,
}

impl From<Campaign> for CampaignCreatedResponse {
    fn from(campaign: Campaign) -> Self {
        Self {
            id: campaign.id,
            denom: campaign.denom,
            debtor: campaign.debtor,
            collateral_denom: campaign.collateral_denom,
            collateral_amount: campaign.collateral_amount,
            debt_issued: campaign.debt_issued,
            max_interest_rate: campaign.max_interest_rate,
            state: campaign.state,
            orders: vec![],
            created_at: campaign.created_at,
            closes_at: campaign.closes_at,
            maturity_at: campaign.maturity_at,
        }
    }
}

#[cw_serde]
pub struct BalanceResponse {
    pub denom: String,
    pub amount: Uint256,
}
