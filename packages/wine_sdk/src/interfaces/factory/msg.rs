use crate::{
    asset::{AssetInfo, AssetPair},
    codec::PriceAmount,
    impl_msg_callbacks,
};
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Addr;

impl_msg_callbacks!();

#[cw_serde]
pub struct InstantiateMsg {
    pub owner: String,
    pub pair_code_id: u64,
    pub token_code_id: u64,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Owner only.
    UpdateConfig {
        owner: Option<String>,
        token_code_id: Option<u64>,
        pair_code_id: Option<u64>,
    },
    /// Unless one side is the base stable asset, both assets need an existing
    /// pair against it. An existing (assets, pair type) combination is rejected.
    CreatePair {
        asset_infos: AssetPair,
        pair_type: String,
        initial_price: PriceAmount,
    },
    /// Owner only.
    AddPairType {
        type_name: String,
        tick_space: u64,
        fee_rate: PriceAmount,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},
    #[returns(PairsResponse)]
    Pair {
        asset_infos: AssetPair,
        pair_type: Option<String>,
    },
    #[returns(PairsResponse)]
    Pairs {
        start_after: Option<AssetInfosWithType>,
        limit: Option<u32>,
    },
    #[returns(PairTypeResponse)]
    PairType { type_name: String },
    #[returns(Vec<PairTypeResponse>)]
    PairTypes {
        start_after: Option<String>,
        limit: Option<u32>,
    },
}

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
    pub pair_code_id: u64,
    pub token_code_id: u64,
}

/// Pagination cursor for the `pairs` query.
#[cw_serde]
pub struct AssetInfosWithType {
    pub asset_infos: AssetPair,
    pub pair_type: String,
}

#[cw_serde]
pub struct PairsResponse {
    pub pairs: Vec<PairInfo>,
}

#[cw_serde]
pub struct PairInfo {
    pub asset_infos: AssetPair,
    pub contract_addr: Addr,
    #[serde(alias = "liqudity_token")]
    pub liquidity_token: Addr,
    pub pair_type: String,
}

impl PairInfo {
    pub fn has_asset(&self, info: &AssetInfo) -> bool {
        self.asset_infos.contains(info)
    }
}

#[cw_serde]
pub struct PairTypeResponse {
    pub type_name: String,
    /// Tick price is `1.0001 ^ (tick_index * tick_space)`.
    pub tick_space: u64,
    pub fee_rate: String,
}
