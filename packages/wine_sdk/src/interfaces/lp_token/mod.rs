//! Liquidity positions are non-fungible tokens minted by the pair. Each one
//! records its liquidity and tick range.
//!
//! The `query_*` methods resolve synchronously through a `QuerierWrapper`.
//! Async callers build the request with [`crate::tx::Query::to_query_request`]
//! on the matching `QueryMsg` instead.
pub mod msg;

use cosmwasm_std::{Addr, QuerierWrapper, Uint128};
use cw_utils::Expiration;
use serde::Serialize;

use crate::{
    codec::encode_msg,
    create_contract_client,
    error::WineResult,
    tx::{ExecuteCallback, InstantiateCallback, MsgExecuteContract, MsgInstantiateContract, Query},
};
use msg::*;

create_contract_client!(LpTokenContract);

impl LpTokenContract {
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
        tracing::debug!(contract = %self.address, ?msg, "building lp token message");
        msg.to_execute_msg(&self.sender, &self.address, vec![])
    }

    /// Sender must be the minter.
    pub fn mint(
        &self,
        owner: impl Into<String>,
        liquidity: impl Into<Uint128>,
        upper_tick_index: i32,
        lower_tick_index: i32,
    ) -> WineResult<MsgExecuteContract> {
        self.execute(&ExecuteMsg::Mint {
            owner: owner.into(),
            liquidity: liquidity.into(),
            upper_tick_index,
            lower_tick_index,
        })
    }

    /// Sender must be the minter.
    pub fn burn(&self, token_id: impl Into<String>) -> WineResult<MsgExecuteContract> {
        self.execute(&ExecuteMsg::Burn {
            token_id: token_id.into(),
        })
    }

    pub fn transfer(
        &self,
        recipient: impl Into<String>,
        token_id: impl Into<String>,
    ) -> WineResult<MsgExecuteContract> {
        self.execute(&ExecuteMsg::Transfer {
            recipient: recipient.into(),
            token_id: token_id.into(),
        })
    }

    /// Sends the position to `contract`, which then executes `msg`.
    ///
    /// `msg` is the full message the receiving contract expects, action tag
    /// included.
    pub fn send<M: Serialize + ?Sized>(
        &self,
        contract: impl Into<String>,
        token_id: impl Into<String>,
        msg: &M,
    ) -> WineResult<MsgExecuteContract> {
        self.execute(&ExecuteMsg::Send {
            contract: contract.into(),
            token_id: token_id.into(),
            msg: encode_msg(msg)?,
        })
    }

    /// Lets `spender` transfer or send the position on the owner's behalf.
    pub fn approve(
        &self,
        spender: impl Into<String>,
        token_id: impl Into<String>,
        expires: Option<Expiration>,
    ) -> WineResult<MsgExecuteContract> {
        self.execute(&ExecuteMsg::Approve {
            spender: spender.into(),
            token_id: token_id.into(),
            expires,
        })
    }

    pub fn revoke(
        &self,
        spender: impl Into<String>,
        token_id: impl Into<String>,
    ) -> WineResult<MsgExecuteContract> {
        self.execute(&ExecuteMsg::Revoke {
            spender: spender.into(),
            token_id: token_id.into(),
        })
    }

    pub fn claim_reward(&self, token_id: impl Into<String>) -> WineResult<MsgExecuteContract> {
        self.execute(&ExecuteMsg::ClaimReward {
            token_id: token_id.into(),
        })
    }

    /// Sender must be the minter (the pair).
    pub fn update_liquidity(
        &self,
        token_id: impl Into<String>,
        amount: impl Into<Uint128>,
        add: bool,
    ) -> WineResult<MsgExecuteContract> {
        self.execute(&ExecuteMsg::UpdateLiquidity {
            token_id: token_id.into(),
            amount: amount.into(),
            add,
        })
    }

    pub fn query_owner_of(
        &self,
        querier: &QuerierWrapper,
        token_id: impl Into<String>,
    ) -> WineResult<OwnerOfResponse> {
        QueryMsg::OwnerOf {
            token_id: token_id.into(),
        }
        .query(querier, &self.address)
    }

    pub fn query_config(&self, querier: &QuerierWrapper) -> WineResult<ConfigResponse> {
        QueryMsg::Config {}.query(querier, &self.address)
    }

    pub fn query_liquidity_info(
        &self,
        querier: &QuerierWrapper,
        token_id: impl Into<String>,
    ) -> WineResult<LiquidityInfoResponse> {
        QueryMsg::LiquidityInfo {
            token_id: token_id.into(),
        }
        .query(querier, &self.address)
    }

    pub fn query_tokens(
        &self,
        querier: &QuerierWrapper,
        owner: impl Into<String>,
        start_after: Option<String>,
        limit: Option<u32>,
    ) -> WineResult<TokensResponse> {
        QueryMsg::Tokens {
            owner: owner.into(),
            start_after,
            limit,
        }
        .query(querier, &self.address)
    }

    pub fn query_all_tokens(
        &self,
        querier: &QuerierWrapper,
        start_after: Option<String>,
        limit: Option<u32>,
    ) -> WineResult<TokensResponse> {
        QueryMsg::AllTokens { start_after, limit }.query(querier, &self.address)
    }

    pub fn query_minter(&self, querier: &QuerierWrapper) -> WineResult<MinterResponse> {
        QueryMsg::Minter {}.query(querier, &self.address)
    }

    pub fn query_reward(
        &self,
        querier: &QuerierWrapper,
        token_id: impl Into<String>,
    ) -> WineResult<RewardResponse> {
        QueryMsg::Reward {
            token_id: token_id.into(),
        }
        .query(querier, &self.address)
    }
}
