use cosmwasm_std::{Addr, StdResult, Storage, Uint256};
use cw_storage_plus::{Item, Map};
use mars_owner::Owner;
use obligo_types::{
    campaign::{Campaign, Order},
    user::User,
};

use crate::error::{ContractError, ContractResult};

pub const OWNER: Owner = Owner::new("owner");

// registered participants and their role
pub const USERS: Map<&Addr, User> = Map::new("users");

// campaign id => campaign; orders are stored separately so views hydrate them
pub const CAMPAIGNS: Map<u64, Campaign> = Map::new("campaigns");

// (campaign id, order id) => order; ranging a prefix yields id-ascending
pub const ORDERS: Map<(u64, u64), Order> = Map::new("orders");

// last assigned ids, monotonically increasing
pub const CAMPAIGN_COUNT: Item<u64> = Item::new("campaign_count");
pub const ORDER_COUNT: Item<u64> = Item::new("order_count");

// (user, denom) => withdrawable balance
pub const BALANCES: Map<(&Addr, &str), Uint256> = Map::new("balances");

pub fn next_campaign_id(store: &mut dyn Storage) -> StdResult<u64> {
    let id = CAMPAIGN_COUNT.may_load(store)?.unwrap_or_default() + 1;
    CAMPAIGN_COUNT.save(store, &id)?;
    Ok(id)
}

pub fn next_order_id(store: &mut dyn Storage) -> StdResult<u64> {
    let id = ORDER_COUNT.may_load(store)?.unwrap_or_default() + 1;
    ORDER_COUNT.save(store, &id)?;
    Ok(id)
}

/// Credit `amount` of `denom` to a user's withdrawable balance.
/// Return the updated balance.
pub fn increase_balance(
    store: &mut dyn Storage,
    user: &Addr,
    denom: &str,
    amount: Uint256,
) -> ContractResult<Uint256> {
    let balance =
        BALANCES.may_load(store, (user, denom))?.unwrap_or_default().checked_add(amount)?;
    BALANCES.save(store, (user, denom), &balance)?;
    Ok(balance)
}

/// Debit `amount` of `denom` from a user's withdrawable balance.
/// Return the updated balance.
/// If the balance is reduced to zero, delete the entry from contract store.
pub fn decrease_balance(
    store: &mut dyn Storage,
    user: &Addr,
    denom: &str,
    amount: Uint256,
) -> ContractResult<Uint256> {
    let available = BALANCES.may_load(store, (user, denom))?.unwrap_or_default();
    if amount > available {
        return Err(ContractError::InsufficientBalance {
            denom: denom.to_string(),
            requested: amount,
            available,
        });
    }

    let balance = available.checked_sub(amount)?;
    if balance.is_zero() {
        BALANCES.remove(store, (user, denom));
    } else {
        BALANCES.save(store, (user, denom), &balance)?;
    }

    Ok(balance)
}
