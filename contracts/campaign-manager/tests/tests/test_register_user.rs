use cosmwasm_std::Addr;
use mars_owner::OwnerError;
use obligo_campaign_manager::error::ContractError;
use obligo_types::user::Role;

use super::helpers::{assert_err, MockEnv, BASE_TIME};

#[test]
fn owner_registers_users() {
    let mut mock = MockEnv::new().build().unwrap();
    let owner = mock.owner.clone();
    let debtor = Addr::unchecked("debtor");
    let investor = Addr::unchecked("investor");

    mock.register_user(&owner, &debtor, Role::Debtor).unwrap();
    mock.register_user(&owner, &investor, Role::Investor).unwrap();

    let user = mock.query_user(&debtor);
    assert_eq!(user.address, debtor);
    assert_eq!(user.role, Role::Debtor);
    assert_eq!(user.registered_at, BASE_TIME);

    let user = mock.query_user(&investor);
    assert_eq!(user.role, Role::Investor);
}

#[test]
fn non_owner_cannot_register() {
    let mut mock = MockEnv::new().build().unwrap();
    let anyone = Addr::unchecked("anyone");

    let res = mock.register_user(&anyone.clone(), &anyone, Role::Debtor);
    assert_err(res, ContractError::Owner(OwnerError::NotOwner {}));
}

#[test]
fn duplicate_registration_rejected() {
    let mut mock = MockEnv::new().build().unwrap();
    let owner = mock.owner.clone();
    let debtor = Addr::unchecked("debtor");

    mock.register_user(&owner, &debtor, Role::Debtor).unwrap();

    let res = mock.register_user(&owner, &debtor, Role::Investor);
    assert_err(
        res,
        ContractError::UserAlreadyRegistered {
            user: debtor.to_string(),
        },
    );
}
