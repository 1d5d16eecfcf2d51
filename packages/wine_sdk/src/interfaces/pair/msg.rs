use crate::{
    asset::{Asset, AssetPair},
    codec::PriceAmount,
    error::WineResult,
    impl_msg_callbacks,
};
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

impl_msg_callbacks!();

#[cw_serde]
pub struct InstantiateMsg {
    pub asset_infos: AssetPair,
    pub token_code_id: u64,
    pub initial_price: PriceAmount,
    pub tick_space: u64,
    pub fee_rate: PriceAmount,
}

impl InstantiateMsg {
    pub fn new(
        asset_infos: AssetPair,
        token_code_id: u64,
        initial_price: f64,
        tick_space: u64,
        fee_rate: f64,
    ) -> WineResult<Self> {
        Ok(InstantiateMsg {
            asset_infos,
            token_code_id,
            initial_price: PriceAmount::new(initial_price)?,
            tick_space,
            fee_rate: PriceAmount::new(fee_rate)?,
        })
    }
}

/// Price range of a position: from `1.0001 ^ (lower_tick_index * tick_space)`
/// to `1.0001 ^ ((upper_tick_index + 1) * tick_space)`.
#[cw_serde]
#[derive(Copy, Eq)]
pub struct TickIndexes {
    pub upper_tick_index: i32,
    pub lower_tick_index: i32,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Requires `upper_tick_index > lower_tick_index`, a spread of at most 500
    /// ticks and non-zero resulting liquidity.
    ProvideLiquidity {
        assets: [Asset; 2],
        /// Adds to an existing position.
        token_id: Option<String>,
        /// Opens a new position.
        tick_indexes: Option<TickIndexes>,
    },
    /// Sender must own the position. Without `amount` the whole position is
    /// withdrawn and its token burned.
    WithdrawLiquidity {
        token_id: String,
        amount: Option<Uint128>,
    },
    /// Native offers only. Token offers go through the token's `send` with a
    /// [`SwapHook`].
    Swap {
        offer_asset: Asset,
        to: Option<String>,
        belief_price: Option<PriceAmount>,
        max_slippage: Option<PriceAmount>,
    },
    /// Sender must be the liquidity token.
    ClaimReward {
        token_id: String,
        rewards: [Asset; 2],
        effective_liquidity_diff: String,
    },
}

/// Payload of the `swap` callback a token contract forwards to the pair.
/// The offered amount is whatever the token contract moved.
#[cw_serde]
#[derive(Default)]
pub struct SwapHook {
    pub to: Option<String>,
    pub belief_price: Option<PriceAmount>,
    pub max_slippage: Option<PriceAmount>,
}

impl SwapHook {
    pub const ACTION: &'static str = "swap";
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(PairInfoResponse)]
    Config {},
    #[returns(TickInfoResponse)]
    TickInfo { tick_index: i32 },
    #[returns(Vec<TickInfoResponse>)]
    TickInfos {
        start_after: Option<i32>,
        /// The pair reads the page size under this misspelled key.
        #[serde(rename = "lmit")]
        limit: Option<u32>,
    },
    #[returns(ProvideCalculationResponse)]
    ProvideCalculation {
        asset: Asset,
        upper_tick_index: i32,
        lower_tick_index: i32,
    },
    #[returns(WithdrawCalculationResponse)]
    WithdrawCalculation { token_id: String },
    #[returns(SimulationResponse)]
    Simulation { offer_asset: Asset },
    #[returns(ReverseSimulationResponse)]
    ReverseSimulation { ask_asset: Asset },
    #[returns(CumulativeVolumeResponse)]
    CumulativeVolume {},
}

#[cw_serde]
pub struct PairInfoResponse {
    pub liquidity_token: Addr,
    pub asset_infos: AssetPair,
    pub tick_space: u64,
    pub fee_rate: String,
    pub price: String,
    pub current_tick_index: i32,
}

#[cw_serde]
pub struct TickInfo {
    pub last_fee_growth_0: String,
    pub last_fee_growth_1: String,
    pub total_liquidity: Uint128,
}

#[cw_serde]
pub struct TickInfoResponse {
    pub tick_index: i32,
    pub tick_info: TickInfo,
}

/// The other asset needed to match `asset` over the requested range.
#[cw_serde]
pub struct ProvideCalculationResponse {
    pub asset: Asset,
}

#[cw_serde]
pub struct WithdrawCalculationResponse {
    pub assets: [Asset; 2],
}

#[cw_serde]
pub struct SimulationResponse {
    pub return_amount: Uint128,
    pub commission_amount: Uint128,
}

#[cw_serde]
pub struct ReverseSimulationResponse {
    pub offer_amount: Uint128,
    pub commission_amount: Uint128,
}

/// Traded volume of each side of the pair since creation.
pub type CumulativeVolumeResponse = (Uint128, Uint128);
