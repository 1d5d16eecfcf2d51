use crate::impl_msg_callbacks;
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128};
use cw_utils::Expiration;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

impl_msg_callbacks!();

#[cw_serde]
pub struct InstantiateMsg {
    pub name: String,
    pub symbol: String,
    /// The pair contract allowed to mint and burn positions.
    pub minter: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Minter only.
    Mint {
        owner: String,
        liquidity: Uint128,
        upper_tick_index: i32,
        lower_tick_index: i32,
    },
    /// Minter only.
    Burn { token_id: String },
    /// Owner or approved spender.
    Transfer { recipient: String, token_id: String },
    /// Moves the position to `contract` and has it execute `msg`.
    /// Owner or approved spender.
    Send {
        contract: String,
        token_id: String,
        msg: Binary,
    },
    Approve {
        spender: String,
        token_id: String,
        expires: Option<Expiration>,
    },
    Revoke { spender: String, token_id: String },
    /// Owner or the pair.
    ClaimReward { token_id: String },
    /// Minter (the pair) only.
    UpdateLiquidity {
        token_id: String,
        amount: Uint128,
        add: bool,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(OwnerOfResponse)]
    OwnerOf { token_id: String },
    #[returns(ConfigResponse)]
    Config {},
    #[returns(LiquidityInfoResponse)]
    LiquidityInfo { token_id: String },
    #[returns(TokensResponse)]
    Tokens {
        owner: String,
        start_after: Option<String>,
        limit: Option<u32>,
    },
    #[returns(TokensResponse)]
    AllTokens {
        start_after: Option<String>,
        limit: Option<u32>,
    },
    #[returns(MinterResponse)]
    Minter {},
    #[returns(RewardResponse)]
    Reward { token_id: String },
}

#[cw_serde]
pub struct OwnerOfResponse {
    pub owner: Addr,
}

#[cw_serde]
pub struct ConfigResponse {
    pub name: String,
    pub symbol: String,
    pub minter: Addr,
}

#[cw_serde]
pub struct Approval {
    pub spender: Addr,
    pub expires: Expiration,
}

#[cw_serde]
pub struct LiquidityInfoResponse {
    pub owner: Addr,
    pub approvals: Vec<Approval>,
    pub liquidity: Uint128,
    pub upper_tick_index: i32,
    pub lower_tick_index: i32,
}

#[cw_serde]
pub struct TokensResponse {
    pub tokens: Vec<String>,
}

#[cw_serde]
pub struct MinterResponse {
    pub minter: Addr,
}

#[cw_serde]
pub struct RewardResponse {
    pub rewards: [RewardAmount; 2],
}

impl RewardResponse {
    pub fn amounts(&self) -> [Uint128; 2] {
        self.rewards.map(Uint128::from)
    }
}

/// Reward amounts come back as plain JSON numbers, unlike every other amount.
/// String-encoded integers are accepted too.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, JsonSchema)]
#[serde(untagged)]
pub enum RewardAmount {
    Number(u128),
    Text(Uint128),
}

impl From<RewardAmount> for Uint128 {
    fn from(amount: RewardAmount) -> Self {
        match amount {
            RewardAmount::Number(amount) => Uint128::new(amount),
            RewardAmount::Text(amount) => amount,
        }
    }
}
