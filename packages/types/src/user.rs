use cosmwasm_schema::cw_serde;
use strum::Display;

#[cw_serde]
#[derive(Copy, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Role {
    /// May open campaigns backed by collateral
    Debtor,

    /// May bid on ongoing campaigns
    Investor,
}

/// A registered participant. Registration is owner-gated; the role decides
/// which deposit-triggered operations the address may perform.
#[cw_serde]
pub struct User {
    pub role: Role,
    pub registered_at: u64,
}
