//! Transport-level messages and the callbacks that produce them.
//!
//! Signing and broadcasting happen elsewhere; these types only carry what the
//! ledger needs: who sends, which contract, the JSON payload and the coins
//! attached to it.
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    Addr, Binary, Coin, CosmosMsg, Empty, QuerierWrapper, QueryRequest, StdError, WasmMsg,
    WasmQuery,
};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::codec::encode_msg;
use crate::error::{WineError, WineResult};

#[cw_serde]
pub struct MsgInstantiateContract {
    pub sender: Addr,
    pub admin: Option<String>,
    pub code_id: u64,
    pub label: String,
    /// JSON payload.
    pub msg: Binary,
    pub funds: Vec<Coin>,
}

impl MsgInstantiateContract {
    pub fn msg_json(&self) -> WineResult<Value> {
        Ok(serde_json::from_slice(self.msg.as_slice())?)
    }

    pub fn into_cosmos_msg(self) -> CosmosMsg {
        CosmosMsg::Wasm(WasmMsg::Instantiate {
            admin: self.admin,
            code_id: self.code_id,
            msg: self.msg,
            funds: self.funds,
            label: self.label,
        })
    }
}

#[cw_serde]
pub struct MsgExecuteContract {
    pub sender: Addr,
    pub contract: Addr,
    /// JSON payload.
    pub msg: Binary,
    pub funds: Vec<Coin>,
}

impl MsgExecuteContract {
    pub fn new(sender: &Addr, contract: &Addr, msg: Binary, funds: Vec<Coin>) -> Self {
        MsgExecuteContract {
            sender: sender.clone(),
            contract: contract.clone(),
            msg,
            funds,
        }
    }

    pub fn msg_json(&self) -> WineResult<Value> {
        Ok(serde_json::from_slice(self.msg.as_slice())?)
    }

    pub fn into_cosmos_msg(self) -> CosmosMsg {
        CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: self.contract.into_string(),
            msg: self.msg,
            funds: self.funds,
        })
    }
}

pub trait InstantiateCallback: Serialize {
    fn to_instantiate_msg(
        &self,
        sender: &Addr,
        code_id: u64,
        label: impl Into<String>,
        admin: Option<String>,
        funds: Vec<Coin>,
    ) -> WineResult<MsgInstantiateContract> {
        Ok(MsgInstantiateContract {
            sender: sender.clone(),
            admin,
            code_id,
            label: label.into(),
            msg: encode_msg(self)?,
            funds,
        })
    }
}

pub trait ExecuteCallback: Serialize {
    fn to_execute_msg(
        &self,
        sender: &Addr,
        contract: &Addr,
        funds: Vec<Coin>,
    ) -> WineResult<MsgExecuteContract> {
        Ok(MsgExecuteContract::new(
            sender,
            contract,
            encode_msg(self)?,
            funds,
        ))
    }

    /// For use from inside another contract, where the sender is implicit.
    fn to_cosmos_msg(&self, contract: &Addr, funds: Vec<Coin>) -> WineResult<CosmosMsg> {
        Ok(CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: contract.to_string(),
            msg: encode_msg(self)?,
            funds,
        }))
    }
}

pub trait Query: Serialize {
    /// The smart query as the chain sees it. Off-chain callers with an async
    /// transport send this themselves and decode the response into the same
    /// response types.
    fn to_query_request(&self, contract: &Addr) -> WineResult<QueryRequest<Empty>> {
        Ok(QueryRequest::Wasm(WasmQuery::Smart {
            contract_addr: contract.to_string(),
            msg: encode_msg(self)?,
        }))
    }

    /// Resolves the query through `querier` and decodes the typed response.
    fn query<T: DeserializeOwned>(
        &self,
        querier: &QuerierWrapper,
        contract: &Addr,
    ) -> WineResult<T> {
        let request = self.to_query_request(contract)?;
        querier.query(&request).map_err(|err| match err {
            StdError::ParseErr {
                target_type, msg, ..
            } => {
                tracing::warn!(%contract, %target_type, "query response failed schema check");
                WineError::schema(target_type, msg)
            }
            other => {
                tracing::warn!(%contract, error = %other, "query rejected");
                WineError::Rejected {
                    contract: contract.clone(),
                    reason: other.to_string(),
                }
            }
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::unit_test_interface::{mock_querier, querier_wrapper};
    use cosmwasm_schema::cw_serde;
    use cosmwasm_std::{to_json_binary, ContractResult, SystemResult};
    use serde_json::json;

    #[cw_serde]
    enum PingMsg {
        Ping { note: Option<String> },
    }

    impl ExecuteCallback for PingMsg {}
    impl Query for PingMsg {}

    #[cw_serde]
    struct Pong {
        count: u32,
    }

    #[test]
    fn execute_msg_carries_sender_target_and_funds() {
        let sender = Addr::unchecked("wasm1sender");
        let contract = Addr::unchecked("wasm1contract");
        let msg = PingMsg::Ping { note: None }
            .to_execute_msg(&sender, &contract, vec![Coin::new(5, "uusd")])
            .unwrap();
        assert_eq!(msg.sender, sender);
        assert_eq!(msg.contract, contract);
        assert_eq!(msg.msg_json().unwrap(), json!({ "ping": {} }));
        assert_eq!(
            msg.into_cosmos_msg(),
            CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr: "wasm1contract".to_string(),
                msg: Binary::from(br#"{"ping":{}}"#.to_vec()),
                funds: vec![Coin::new(5, "uusd")],
            })
        );
    }

    #[test]
    fn query_request_omits_unset_fields() {
        let request = PingMsg::Ping { note: None }
            .to_query_request(&Addr::unchecked("wasm1contract"))
            .unwrap();
        assert_eq!(
            request,
            QueryRequest::Wasm(WasmQuery::Smart {
                contract_addr: "wasm1contract".to_string(),
                msg: Binary::from(br#"{"ping":{}}"#.to_vec()),
            })
        );
    }

    #[test]
    fn query_decodes_typed_response() {
        let querier = mock_querier(|_, _| {
            SystemResult::Ok(ContractResult::Ok(to_json_binary(&json!({ "count": 3 })).unwrap()))
        });
        let pong: Pong = PingMsg::Ping { note: None }
            .query(&querier_wrapper(&querier), &Addr::unchecked("wasm1contract"))
            .unwrap();
        assert_eq!(pong, Pong { count: 3 });
    }

    #[test]
    fn unexpected_response_shape_is_schema_error() {
        let querier = mock_querier(|_, _| {
            SystemResult::Ok(ContractResult::Ok(to_json_binary(&json!({ "total": 3 })).unwrap()))
        });
        let err = PingMsg::Ping { note: None }
            .query::<Pong>(&querier_wrapper(&querier), &Addr::unchecked("wasm1contract"))
            .unwrap_err();
        assert!(err.is_schema(), "{err}");
    }

    #[test]
    fn contract_errors_are_rejections() {
        let querier = mock_querier(|_, _| SystemResult::Ok(ContractResult::Err("not found".into())));
        let err = PingMsg::Ping { note: None }
            .query::<Pong>(&querier_wrapper(&querier), &Addr::unchecked("wasm1contract"))
            .unwrap_err();
        assert!(matches!(err, WineError::Rejected { contract, .. } if contract == "wasm1contract"));
    }
}
