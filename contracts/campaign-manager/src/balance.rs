use cosmwasm_std::{coins, BankMsg, DepsMut, MessageInfo, Response, Uint128, Uint256};
use cw_utils::nonpayable;

use crate::{
    error::{ContractError, ContractResult},
    state::decrease_balance,
};

/// Move funds from the sender's internal balance to their bank account.
pub fn withdraw(
    deps: DepsMut,
    info: MessageInfo,
    denom: String,
    amount: Uint256,
) -> ContractResult<Response> {
    nonpayable(&info)?;
    if amount.is_zero() {
        return Err(ContractError::InvalidParam {
            reason: "withdraw amount must be positive".to_string(),
        });
    }

    decrease_balance(deps.storage, &info.sender, &denom, amount)?;

    // bank coins are 128-bit; larger internal balances leave in parts
    let send_amount = Uint128::try_from(amount)?;

    Ok(Response::new()
        .add_message(BankMsg::Send {
            to_address: info.sender.to_string(),
            amount: coins(send_amount.u128(), &denom),
        })
        .add_attribute("action", "withdraw")
        .add_attribute("user", info.sender)
        .add_attribute("denom", denom)
        .add_attribute("amount", amount.to_string()))
}
