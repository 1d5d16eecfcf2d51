//! The pair holds the liquidity of one asset pair over a tick range and
//! executes swaps against it.
//!
//! Provision and swaps are the only actions that move funds into the pair, so
//! they are the only ones routed through [`crate::transfer`].
//!
//! The `query_*` methods resolve synchronously through a `QuerierWrapper`.
//! Async callers build the request with [`crate::tx::Query::to_query_request`]
//! on the matching `QueryMsg` instead.
pub mod msg;

use cosmwasm_std::{Addr, QuerierWrapper, Uint128};

use crate::{
    asset::Asset,
    codec::PriceAmount,
    create_contract_client,
    error::WineResult,
    transfer::{attached_funds, execute_with_asset},
    tx::{ExecuteCallback, InstantiateCallback, MsgExecuteContract, MsgInstantiateContract, Query},
};
use msg::*;

create_contract_client!(PairContract);

/// Where provided liquidity goes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Position {
    /// Add to the position with this token id.
    Existing(String),
    /// Open a new position over this tick range.
    New(TickIndexes),
}

impl Position {
    pub fn new(upper_tick_index: i32, lower_tick_index: i32) -> Self {
        Position::New(TickIndexes {
            upper_tick_index,
            lower_tick_index,
        })
    }
}

/// Optional swap constraints. Unset values are left out of the payload.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SwapParams {
    /// Receiver of the returned asset, the sender by default.
    pub to: Option<String>,
    pub belief_price: Option<f64>,
    pub max_slippage: Option<f64>,
}

impl SwapParams {
    pub fn to(mut self, recipient: impl Into<String>) -> Self {
        self.to = Some(recipient.into());
        self
    }

    pub fn belief_price(mut self, price: f64) -> Self {
        self.belief_price = Some(price);
        self
    }

    pub fn max_slippage(mut self, slippage: f64) -> Self {
        self.max_slippage = Some(slippage);
        self
    }
}

impl PairContract {
    /// Pairs are normally deployed by the factory through `create_pair`.
    pub fn instantiate(
        sender: &Addr,
        code_id: u64,
        msg: &InstantiateMsg,
        label: impl Into<String>,
        admin: Option<String>,
    ) -> WineResult<MsgInstantiateContract> {
        msg.to_instantiate_msg(sender, code_id, label, admin, vec![])
    }

    fn execute(&self, msg: &ExecuteMsg) -> WineResult<MsgExecuteContract> {
        tracing::debug!(contract = %self.address, ?msg, "building pair message");
        msg.to_execute_msg(&self.sender, &self.address, vec![])
    }

    /// Native assets are attached as coins. Token-contract assets must already
    /// be approved for the pair to pull.
    pub fn provide_liquidity(
        &self,
        assets: [Asset; 2],
        position: Position,
    ) -> WineResult<MsgExecuteContract> {
        let funds = attached_funds(&assets)?;
        let (token_id, tick_indexes) = match position {
            Position::Existing(token_id) => (Some(token_id), None),
            Position::New(tick_indexes) => (None, Some(tick_indexes)),
        };
        let msg = ExecuteMsg::ProvideLiquidity {
            assets,
            token_id,
            tick_indexes,
        };
        tracing::debug!(contract = %self.address, ?funds, "building liquidity provision");
        msg.to_execute_msg(&self.sender, &self.address, funds)
    }

    /// Sender must own the position.
    pub fn withdraw_liquidity(
        &self,
        token_id: impl Into<String>,
        amount: Option<Uint128>,
    ) -> WineResult<MsgExecuteContract> {
        self.execute(&ExecuteMsg::WithdrawLiquidity {
            token_id: token_id.into(),
            amount,
        })
    }

    /// A native offer goes to the pair with the coin attached. A token offer
    /// goes to the token contract as a `send` carrying a [`SwapHook`].
    pub fn swap(&self, offer_asset: Asset, params: SwapParams) -> WineResult<MsgExecuteContract> {
        let hook = SwapHook {
            to: params.to,
            belief_price: PriceAmount::maybe(params.belief_price)?,
            max_slippage: PriceAmount::maybe(params.max_slippage)?,
        };
        let native = ExecuteMsg::Swap {
            offer_asset: offer_asset.clone(),
            to: hook.to.clone(),
            belief_price: hook.belief_price.clone(),
            max_slippage: hook.max_slippage.clone(),
        };
        execute_with_asset(
            &self.sender,
            &self.address,
            &offer_asset,
            &native,
            SwapHook::ACTION,
            &hook,
        )
    }

    /// Sender must be the liquidity token.
    pub fn claim_reward(
        &self,
        token_id: impl Into<String>,
        rewards: [Asset; 2],
        effective_liquidity_diff: impl Into<String>,
    ) -> WineResult<MsgExecuteContract> {
        self.execute(&ExecuteMsg::ClaimReward {
            token_id: token_id.into(),
            rewards,
            effective_liquidity_diff: effective_liquidity_diff.into(),
        })
    }

    pub fn query_pair_info(&self, querier: &QuerierWrapper) -> WineResult<PairInfoResponse> {
        QueryMsg::Config {}.query(querier, &self.address)
    }

    pub fn query_tick_info(
        &self,
        querier: &QuerierWrapper,
        tick_index: i32,
    ) -> WineResult<TickInfoResponse> {
        QueryMsg::TickInfo { tick_index }.query(querier, &self.address)
    }

    pub fn query_tick_infos(
        &self,
        querier: &QuerierWrapper,
        start_after: Option<i32>,
        limit: Option<u32>,
    ) -> WineResult<Vec<TickInfoResponse>> {
        QueryMsg::TickInfos { start_after, limit }.query(querier, &self.address)
    }

    pub fn query_provide_calculation(
        &self,
        querier: &QuerierWrapper,
        asset: Asset,
        upper_tick_index: i32,
        lower_tick_index: i32,
    ) -> WineResult<ProvideCalculationResponse> {
        QueryMsg::ProvideCalculation {
            asset,
            upper_tick_index,
            lower_tick_index,
        }
        .query(querier, &self.address)
    }

    pub fn query_withdraw_calculation(
        &self,
        querier: &QuerierWrapper,
        token_id: impl Into<String>,
    ) -> WineResult<WithdrawCalculationResponse> {
        QueryMsg::WithdrawCalculation {
            token_id: token_id.into(),
        }
        .query(querier, &self.address)
    }

    pub fn query_simulation(
        &self,
        querier: &QuerierWrapper,
        offer_asset: Asset,
    ) -> WineResult<SimulationResponse> {
        QueryMsg::Simulation { offer_asset }.query(querier, &self.address)
    }

    pub fn query_reverse_simulation(
        &self,
        querier: &QuerierWrapper,
        ask_asset: Asset,
    ) -> WineResult<ReverseSimulationResponse> {
        QueryMsg::ReverseSimulation { ask_asset }.query(querier, &self.address)
    }

    pub fn query_cumulative_volume(
        &self,
        querier: &QuerierWrapper,
    ) -> WineResult<CumulativeVolumeResponse> {
        QueryMsg::CumulativeVolume {}.query(querier, &self.address)
    }
}
