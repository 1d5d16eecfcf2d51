//! Deployment settings: which account signs and where the factory lives.
//!
//! ```json
//! { "sender": "wasm1...", "factory": "wasm1...", "pair_code_id": 2, "token_code_id": 3 }
//! ```
use std::{fs, path::Path};

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Api};

use crate::{
    error::{WineError, WineResult},
    interfaces::{factory::FactoryContract, lp_token::LpTokenContract, pair::PairContract},
};

/// Config as written by a user, addresses not yet validated.
#[cw_serde]
pub struct RawWineConfig {
    pub sender: String,
    pub factory: String,
    pub pair_code_id: Option<u64>,
    pub token_code_id: Option<u64>,
}

impl RawWineConfig {
    pub fn from_json(json: &str) -> WineResult<Self> {
        serde_json::from_str(json).map_err(|err| WineError::Config(err.to_string()))
    }

    pub fn from_file(path: impl AsRef<Path>) -> WineResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|err| WineError::Config(format!("{}: {err}", path.display())))?;
        Self::from_json(&contents)
    }

    pub fn into_valid(self, api: &dyn Api) -> WineResult<WineConfig> {
        Ok(WineConfig {
            sender: api.addr_validate(&self.sender)?,
            factory: api.addr_validate(&self.factory)?,
            pair_code_id: self.pair_code_id,
            token_code_id: self.token_code_id,
        })
    }

    pub fn into_unchecked(self) -> WineConfig {
        WineConfig {
            sender: Addr::unchecked(self.sender),
            factory: Addr::unchecked(self.factory),
            pair_code_id: self.pair_code_id,
            token_code_id: self.token_code_id,
        }
    }
}

#[cw_serde]
pub struct WineConfig {
    pub sender: Addr,
    pub factory: Addr,
    pub pair_code_id: Option<u64>,
    pub token_code_id: Option<u64>,
}

impl WineConfig {
    pub fn factory(&self) -> FactoryContract {
        FactoryContract::new(&self.factory, &self.sender)
    }

    /// Pair addresses come from the factory's `pair` or `pairs` query.
    pub fn pair(&self, address: impl Into<String>) -> PairContract {
        PairContract::new(address, &self.sender)
    }

    pub fn lp_token(&self, address: impl Into<String>) -> LpTokenContract {
        LpTokenContract::new(address, &self.sender)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use cosmwasm_std::testing::MockApi;

    const CONFIG: &str = r#"{ "sender": "wasm1sender", "factory": "wasm1factory", "pair_code_id": 2 }"#;

    #[test]
    fn parses_partial_config() {
        let raw = RawWineConfig::from_json(CONFIG).unwrap();
        assert_eq!(raw.pair_code_id, Some(2));
        assert_eq!(raw.token_code_id, None);
    }

    #[test]
    fn facades_share_sender() {
        let config = RawWineConfig::from_json(CONFIG).unwrap().into_unchecked();
        let factory = config.factory();
        assert_eq!(factory.address, Addr::unchecked("wasm1factory"));
        assert_eq!(factory.sender, config.sender);
        assert_eq!(config.pair("wasm1pair").sender, config.sender);
        assert_eq!(config.lp_token("wasm1lptoken").address, Addr::unchecked("wasm1lptoken"));
    }

    #[test]
    fn missing_factory_is_config_error() {
        let err = RawWineConfig::from_json(r#"{ "sender": "wasm1sender" }"#).unwrap_err();
        assert!(matches!(err, WineError::Config(_)));
    }

    #[test]
    fn missing_file_is_config_error() {
        let err = RawWineConfig::from_file("/nonexistent/wine.json").unwrap_err();
        assert!(matches!(err, WineError::Config(msg) if msg.starts_with("/nonexistent/wine.json")));
    }

    #[test]
    fn empty_address_fails_validation() {
        let raw = RawWineConfig {
            sender: String::new(),
            factory: "wasm1factory".to_string(),
            pair_code_id: None,
            token_code_id: None,
        };
        let err = raw.into_valid(&MockApi::default()).unwrap_err();
        assert!(matches!(err, WineError::Std(_)));
    }
}
