use cosmwasm_std::{Addr, DepsMut, Env, MessageInfo, Response, Storage};
use cw_utils::nonpayable;
use obligo_types::user::{Role, User};

use crate::{
    error::{ContractError, ContractResult},
    state::{OWNER, USERS},
};

/// Register an address under a role. Owner-gated; an address holds at most
/// one role for its lifetime.
pub fn register_user(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    address: String,
    role: Role,
) -> ContractResult<Response> {
    nonpayable(&info)?;
    OWNER.assert_owner(deps.storage, &info.sender)?;

    let addr = deps.api.addr_validate(&address)?;
    if USERS.may_load(deps.storage, &addr)?.is_some() {
        return Err(ContractError::UserAlreadyRegistered {
            user: addr.to_string(),
        });
    }

    USERS.save(
        deps.storage,
        &addr,
        &User {
            role,
            registered_at: env.block.time.seconds(),
        },
    )?;

    Ok(Response::new()
        .add_attribute("action", "register_user")
        .add_attribute("user", addr)
        .add_attribute("role", role.to_string()))
}

/// Ensure `addr` is registered and holds `role`.
pub fn assert_role(store: &dyn Storage, addr: &Addr, role: Role) -> ContractResult<()> {
    let user = USERS.may_load(store, addr)?.ok_or_else(|| ContractError::UserNotRegistered {
        user: addr.to_string(),
    })?;

    if user.role != role {
        return Err(ContractError::RoleRequired {
            role,
        });
    }

    Ok(())
}
