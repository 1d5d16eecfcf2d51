use cosmwasm_std::{
    testing::MockQuerier, to_json_binary, ContractResult, QuerierResult, QuerierWrapper,
    SystemError, SystemResult, WasmQuery,
};
use serde::Serialize;
use serde_json::Value;

pub const SENDER: &str = "wasm1sender";
pub const FACTORY: &str = "wasm1factory";
pub const PAIR: &str = "wasm1pair";
pub const LP_TOKEN: &str = "wasm1lptoken";
pub const CW20_TOKEN: &str = "wasm1abc";

/// Mock chain querier that answers smart queries with `handler`, which
/// receives the target contract and the decoded query payload.
pub fn mock_querier<F>(handler: F) -> MockQuerier
where
    F: Fn(&str, &Value) -> QuerierResult + 'static,
{
    let mut querier: MockQuerier = MockQuerier::new(&[]);
    querier.update_wasm(move |request| match request {
        WasmQuery::Smart { contract_addr, msg } => {
            let payload: Value = serde_json::from_slice(msg.as_slice()).unwrap();
            handler(contract_addr, &payload)
        }
        _ => SystemResult::Err(SystemError::UnsupportedRequest {
            kind: "raw wasm query".to_string(),
        }),
    });
    querier
}

pub fn querier_wrapper(querier: &MockQuerier) -> QuerierWrapper<'_> {
    QuerierWrapper::new(querier)
}

pub fn respond<T: Serialize>(response: &T) -> QuerierResult {
    SystemResult::Ok(ContractResult::Ok(to_json_binary(response).unwrap()))
}
