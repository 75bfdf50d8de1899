use cosmwasm_std::{
    CheckedMultiplyRatioError, ConversionOverflowError, DivideByZeroError, OverflowError, StdError,
    Uint256,
};
use cw_utils::PaymentError;
use mars_owner::OwnerError;
use obligo_clearing::ClearingError;
use obligo_types::{campaign::CampaignState, user::Role};

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ContractError {
    #[error(transparent)]
    Std(#[from] StdError),

    #[error(transparent)]
    Owner(#[from] OwnerError),

    #[error(transparent)]
    Payment(#[from] PaymentError),

    #[error(transparent)]
    Overflow(#[from] OverflowError),

    #[error(transparent)]
    DivideByZero(#[from] DivideByZeroError),

    #[error(transparent)]
    CheckedMultiplyRatio(#[from] CheckedMultiplyRatioError),

    #[error(transparent)]
    ConversionOverflow(#[from] ConversionOverflowError),

    #[error(transparent)]
    Clearing(#[from] ClearingError),

    #[error("user `{user}` is not registered")]
    UserNotRegistered {
        user: String,
    },

    #[error("user `{user}` is already registered")]
    UserAlreadyRegistered {
        user: String,
    },

    #[error("sender does not hold the `{role}` role")]
    RoleRequired {
        role: Role,
    },

    #[error("campaign `{id}` not found")]
    CampaignNotFound {
        id: u64,
    },

    #[error("debtor `{debtor}` has no ongoing campaign")]
    NoOngoingCampaign {
        debtor: String,
    },

    #[error("debtor `{debtor}` already has a live campaign")]
    ActiveCampaignExists {
        debtor: String,
    },

    #[error("campaign is `{found}`, expected `{expected}`")]
    InvalidCampaignState {
        expected: CampaignState,
        found: CampaignState,
    },

    #[error("campaign closes at {closes_at}, current time {current_time}")]
    CloseTimeNotReached {
        closes_at: u64,
        current_time: u64,
    },

    #[error("bidding closed at {closes_at}, current time {current_time}")]
    BiddingClosed {
        closes_at: u64,
        current_time: u64,
    },

    #[error("campaign matures at {maturity_at}, current time {current_time}")]
    MaturityNotReached {
        maturity_at: u64,
        current_time: u64,
    },

    #[error("only the campaign debtor can settle")]
    NotCampaignDebtor {},

    #[error("deposit denom `{found}` does not match campaign denom `{expected}`")]
    DepositDenomMismatch {
        expected: String,
        found: String,
    },

    #[error("settlement must repay the obligation exactly: expected {expected}, found {found}")]
    SettlementAmountMismatch {
        expected: Uint256,
        found: Uint256,
    },

    #[error("interest rate too high: max {max}, found {found}")]
    InterestRateTooHigh {
        max: Uint256,
        found: Uint256,
    },

    #[error("invalid param: {reason}")]
    InvalidParam {
        reason: String,
    },

    #[error("insufficient balance of `{denom}`: requested {requested}, available {available}")]
    InsufficientBalance {
        denom: String,
        requested: Uint256,
        available: Uint256,
    },
}

pub type ContractResult<T> = Result<T, ContractError>;
