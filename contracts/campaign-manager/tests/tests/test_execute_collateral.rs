use cosmwasm_std::{coin, Addr, Uint256};
use obligo_campaign_manager::error::ContractError;
use obligo_types::campaign::{CampaignState, OrderState};

use super::helpers::{
    assert_err, setup_accounts, setup_campaign, setup_cleared_campaign, u, MockEnv, CLOSES_AT,
    COLLATERAL_AMOUNT, COLLATERAL_DENOM, DENOM, MATURITY_AT, TOTAL_OBLIGATION,
};

#[test]
fn distributes_collateral_pro_rata() {
    let mut mock = MockEnv::new().build().unwrap();
    let accounts = setup_cleared_campaign(&mut mock);

    let executed_at = MATURITY_AT + 1;
    mock.set_block_time(executed_at);
    let anyone = Addr::unchecked("anyone");
    mock.execute_collateral(&anyone, 1).unwrap();

    let campaign = mock.query_campaign(1);
    assert_eq!(campaign.state, CampaignState::CollateralExecuted);
    assert_eq!(campaign.updated_at, executed_at);

    for order in &campaign.orders[..5] {
        assert_eq!(order.state, OrderState::SettledByCollateral);
        assert_eq!(order.updated_at, executed_at);
    }
    assert_eq!(campaign.orders[5].state, OrderState::Rejected);
    assert_eq!(campaign.orders[5].updated_at, CLOSES_AT);

    // floor(10000 * obligation / 108195) per filled order
    let expected = [5_994u128, 2_794, 192, 489, 528];
    for (investor, amount) in accounts.investors.iter().zip(expected) {
        assert_eq!(mock.query_ledger_balance(investor, COLLATERAL_DENOM), u(amount));
    }

    // 3 of the 10000 stay undistributed with the application
    assert_eq!(expected.iter().sum::<u128>(), 9_997);
    let escrow = mock.query_bank_balance(&mock.manager.clone(), COLLATERAL_DENOM);
    assert_eq!(escrow.amount.u128(), COLLATERAL_AMOUNT);

    // the debtor gets nothing back
    assert_eq!(
        mock.query_ledger_balance(&accounts.debtor, COLLATERAL_DENOM),
        Uint256::zero()
    );
}

#[test]
fn execute_before_maturity_rejected() {
    let mut mock = MockEnv::new().build().unwrap();
    setup_cleared_campaign(&mut mock);

    let anyone = Addr::unchecked("anyone");
    let res = mock.execute_collateral(&anyone, 1);
    assert_err(
        res,
        ContractError::MaturityNotReached {
            maturity_at: MATURITY_AT,
            current_time: CLOSES_AT + 2,
        },
    );
}

#[test]
fn execute_requires_a_closed_campaign() {
    let mut mock = MockEnv::new().build().unwrap();
    let accounts = setup_accounts(&mut mock);
    setup_campaign(&mut mock, &accounts);

    mock.set_block_time(MATURITY_AT);
    let anyone = Addr::unchecked("anyone");
    let res = mock.execute_collateral(&anyone, 1);
    assert_err(
        res,
        ContractError::InvalidCampaignState {
            expected: CampaignState::Closed,
            found: CampaignState::Ongoing,
        },
    );
}

#[test]
fn settled_campaign_cannot_be_executed() {
    let mut mock = MockEnv::new().build().unwrap();
    let accounts = setup_cleared_campaign(&mut mock);

    mock.set_block_time(MATURITY_AT);
    mock.settle_campaign(&accounts.debtor.clone(), 1, &[coin(TOTAL_OBLIGATION, DENOM)]).unwrap();

    let anyone = Addr::unchecked("anyone");
    let res = mock.execute_collateral(&anyone, 1);
    assert_err(
        res,
        ContractError::InvalidCampaignState {
            expected: CampaignState::Closed,
            found: CampaignState::Settled,
        },
    );
}

#[test]
fn double_execution_rejected() {
    let mut mock = MockEnv::new().build().unwrap();
    setup_cleared_campaign(&mut mock);

    mock.set_block_time(MATURITY_AT);
    let anyone = Addr::unchecked("anyone");
    mock.execute_collateral(&anyone, 1).unwrap();

    let res = mock.execute_collateral(&anyone, 1);
    assert_err(
        res,
        ContractError::InvalidCampaignState {
            expected: CampaignState::Closed,
            found: CampaignState::CollateralExecuted,
        },
    );
}

#[test]
fn unknown_campaign_rejected() {
    let mut mock = MockEnv::new().build().unwrap();

    let anyone = Addr::unchecked("anyone");
    let res = mock.execute_collateral(&anyone, 3);
    assert_err(
        res,
        ContractError::CampaignNotFound {
            id: 3,
        },
    );
}

#[test]
fn empty_campaign_executes_without_distribution() {
    let mut mock = MockEnv::new().build().unwrap();
    let accounts = setup_accounts(&mut mock);
    setup_campaign(&mut mock, &accounts);

    mock.set_block_time(CLOSES_AT);
    let anyone = Addr::unchecked("anyone");
    mock.close_campaign(&anyone, &accounts.debtor).unwrap();

    mock.set_block_time(MATURITY_AT);
    mock.execute_collateral(&anyone, 1).unwrap();

    // nothing to distribute; the collateral stays with the application
    let campaign = mock.query_campaign(1);
    assert_eq!(campaign.state, CampaignState::CollateralExecuted);
    assert_eq!(
        mock.query_ledger_balance(&accounts.debtor, COLLATERAL_DENOM),
        Uint256::zero()
    );
}
