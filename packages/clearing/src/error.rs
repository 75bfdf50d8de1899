use cosmwasm_std::{CheckedMultiplyRatioError, OverflowError};
use thiserror::Error;

#[derive(Debug, PartialEq, Error)]
pub enum ClearingError {
    #[error(transparent)]
    Overflow(#[from] OverflowError),

    #[error(transparent)]
    CheckedMultiplyRatio(#[from] CheckedMultiplyRatioError),

    #[error("order {id} is not pending and cannot enter clearing")]
    NonPendingOrder {
        id: u64,
    },
}
