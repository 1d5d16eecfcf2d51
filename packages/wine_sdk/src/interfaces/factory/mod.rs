//! The factory registers pair types (tick spacing plus fee rate) and deploys
//! one pair contract per (asset pair, pair type).
//!
//! The `query_*` methods resolve synchronously through a `QuerierWrapper`.
//! Async callers build the request with [`crate::tx::Query::to_query_request`]
//! on the matching `QueryMsg` instead.
pub mod msg;

use cosmwasm_std::{Addr, QuerierWrapper};

use crate::{
    asset::AssetPair,
    codec::PriceAmount,
    create_contract_client,
    error::WineResult,
    tx::{ExecuteCallback, InstantiateCallback, MsgExecuteContract, MsgInstantiateContract, Query},
};
use msg::*;

create_contract_client!(FactoryContract);

impl FactoryContract {
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
        tracing::debug!(contract = %self.address, ?msg, "building factory message");
        msg.to_execute_msg(&self.sender, &self.address, vec![])
    }

    /// Sender must be the factory owner.
    pub fn update_config(
        &self,
        owner: Option<String>,
        token_code_id: Option<u64>,
        pair_code_id: Option<u64>,
    ) -> WineResult<MsgExecuteContract> {
        self.execute(&ExecuteMsg::UpdateConfig {
            owner,
            token_code_id,
            pair_code_id,
        })
    }

    pub fn create_pair(
        &self,
        asset_infos: AssetPair,
        pair_type: impl Into<String>,
        initial_price: f64,
    ) -> WineResult<MsgExecuteContract> {
        self.execute(&ExecuteMsg::CreatePair {
            asset_infos,
            pair_type: pair_type.into(),
            initial_price: PriceAmount::new(initial_price)?,
        })
    }

    /// Sender must be the factory owner.
    pub fn add_pair_type(
        &self,
        type_name: impl Into<String>,
        tick_space: u64,
        fee_rate: f64,
    ) -> WineResult<MsgExecuteContract> {
        self.execute(&ExecuteMsg::AddPairType {
            type_name: type_name.into(),
            tick_space,
            fee_rate: PriceAmount::new(fee_rate)?,
        })
    }

    pub fn query_config(&self, querier: &QuerierWrapper) -> WineResult<ConfigResponse> {
        QueryMsg::Config {}.query(querier, &self.address)
    }

    pub fn query_pair(
        &self,
        querier: &QuerierWrapper,
        asset_infos: AssetPair,
        pair_type: Option<String>,
    ) -> WineResult<PairsResponse> {
        QueryMsg::Pair {
            asset_infos,
            pair_type,
        }
        .query(querier, &self.address)
    }

    pub fn query_pairs(
        &self,
        querier: &QuerierWrapper,
        start_after: Option<AssetInfosWithType>,
        limit: Option<u32>,
    ) -> WineResult<PairsResponse> {
        QueryMsg::Pairs { start_after, limit }.query(querier, &self.address)
    }

    pub fn query_pair_type(
        &self,
        querier: &QuerierWrapper,
        type_name: impl Into<String>,
    ) -> WineResult<PairTypeResponse> {
        QueryMsg::PairType {
            type_name: type_name.into(),
        }
        .query(querier, &self.address)
    }

    pub fn query_pair_types(
        &self,
        querier: &QuerierWrapper,
        start_after: Option<String>,
        limit: Option<u32>,
    ) -> WineResult<Vec<PairTypeResponse>> {
        QueryMsg::PairTypes { start_after, limit }.query(querier, &self.address)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        asset::AssetInfo,
        error::WineError,
        unit_test_interface::{mock_querier, querier_wrapper, respond, FACTORY, SENDER},
    };
    use serde_json::json;

    fn factory() -> FactoryContract {
        FactoryContract::new(FACTORY, SENDER)
    }

    #[test]
    fn instantiate_msg() {
        let msg = FactoryContract::instantiate(
            &Addr::unchecked(SENDER),
            11,
            &InstantiateMsg {
                owner: SENDER.to_string(),
                pair_code_id: 12,
                token_code_id: 13,
            },
            "wine factory",
            None,
        )
        .unwrap();
        assert_eq!(msg.code_id, 11);
        assert!(msg.funds.is_empty());
        assert_eq!(
            msg.msg.as_slice(),
            br#"{"owner":"wasm1sender","pair_code_id":12,"token_code_id":13}"#
        );
    }

    #[test]
    fn create_pair_scenario() {
        let msg = factory()
            .create_pair(
                [AssetInfo::native("uusd"), AssetInfo::token("wasm1abc")],
                "constant_product",
                1.5,
            )
            .unwrap();
        assert_eq!(msg.contract, Addr::unchecked(FACTORY));
        assert_eq!(msg.sender, Addr::unchecked(SENDER));
        assert!(msg.funds.is_empty());
        assert_eq!(
            msg.msg_json().unwrap(),
            json!({
                "create_pair": {
                    "asset_infos": [
                        { "native_token": { "denom": "uusd" } },
                        { "token": { "contract_addr": "wasm1abc" } }
                    ],
                    "pair_type": "constant_product",
                    "initial_price": "1.5000000000"
                }
            })
        );
    }

    #[test]
    fn add_pair_type_formats_fee_rate() {
        let msg = factory().add_pair_type("stable", 10, 0.0005).unwrap();
        assert_eq!(
            msg.msg.as_slice(),
            br#"{"add_pair_type":{"type_name":"stable","tick_space":10,"fee_rate":"0.0005000000"}}"#
        );
    }

    #[test]
    fn non_finite_price_builds_nothing() {
        let err = factory()
            .create_pair(
                [AssetInfo::native("uusd"), AssetInfo::native("uluna")],
                "constant_product",
                f64::NAN,
            )
            .unwrap_err();
        assert!(matches!(err, WineError::Encoding { .. }));
    }

    #[test]
    fn update_config_omits_unset_fields() {
        let msg = factory().update_config(None, Some(7), None).unwrap();
        assert_eq!(msg.msg.as_slice(), br#"{"update_config":{"token_code_id":7}}"#);
    }

    #[test]
    fn pair_query_round_trip() {
        let querier = mock_querier(|contract, payload| {
            assert_eq!(contract, FACTORY);
            assert_eq!(
                payload,
                &json!({
                    "pair": {
                        "asset_infos": [
                            { "native_token": { "denom": "uusd" } },
                            { "token": { "contract_addr": "wasm1abc" } }
                        ]
                    }
                })
            );
            respond(&json!({
                "pairs": [{
                    "asset_infos": [
                        { "native_token": { "denom": "uusd" } },
                        { "token": { "contract_addr": "wasm1abc" } }
                    ],
                    "contract_addr": "wasm1pair",
                    "liquidity_token": "wasm1lptoken",
                    "pair_type": "constant_product"
                }]
            }))
        });
        let resp = factory()
            .query_pair(
                &querier_wrapper(&querier),
                [AssetInfo::native("uusd"), AssetInfo::token("wasm1abc")],
                None,
            )
            .unwrap();
        assert_eq!(resp.pairs.len(), 1);
        assert_eq!(resp.pairs[0].contract_addr, Addr::unchecked("wasm1pair"));
        assert!(resp.pairs[0].has_asset(&AssetInfo::token("wasm1abc")));
    }

    #[test]
    fn misspelled_liquidity_token_is_accepted() {
        let info: PairInfo = serde_json::from_value(json!({
            "asset_infos": [
                { "native_token": { "denom": "uusd" } },
                { "native_token": { "denom": "uluna" } }
            ],
            "contract_addr": "wasm1pair",
            "liqudity_token": "wasm1lptoken",
            "pair_type": "constant_product"
        }))
        .unwrap();
        assert_eq!(info.liquidity_token, Addr::unchecked("wasm1lptoken"));
    }

    #[test]
    fn pair_types_query() {
        let querier = mock_querier(|_, payload| {
            assert_eq!(payload, &json!({ "pair_types": { "limit": 2 } }));
            respond(&json!([
                { "type_name": "constant_product", "tick_space": 60, "fee_rate": "0.0030000000" },
                { "type_name": "stable", "tick_space": 1, "fee_rate": "0.0005000000" }
            ]))
        });
        let types = factory()
            .query_pair_types(&querier_wrapper(&querier), None, Some(2))
            .unwrap();
        assert_eq!(types[1].tick_space, 1);
    }
}
