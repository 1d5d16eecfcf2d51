//! Asset representations shared by every Wine contract.
//!
//! On the wire an asset info is either `{"native_token": {"denom": ..}}` or
//! `{"token": {"contract_addr": ..}}`. Anything else is a schema mismatch with
//! the contracts and is rejected as [`WineError::Schema`].
use std::fmt;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Coin, Uint128};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{WineError, WineResult};

#[cw_serde]
#[derive(Eq, Hash)]
pub enum AssetInfo {
    /// Fungible unit managed by a separate token contract.
    Token { contract_addr: Addr },
    /// Ledger-native coin identified by its denomination.
    NativeToken { denom: String },
}

impl AssetInfo {
    pub fn native(denom: impl Into<String>) -> Self {
        AssetInfo::NativeToken {
            denom: denom.into(),
        }
    }

    pub fn token(contract_addr: impl Into<String>) -> Self {
        AssetInfo::Token {
            contract_addr: Addr::unchecked(contract_addr),
        }
    }

    pub fn is_native(&self) -> bool {
        match self {
            AssetInfo::NativeToken { .. } => true,
            AssetInfo::Token { .. } => false,
        }
    }

    pub fn denom(&self) -> Option<&str> {
        match self {
            AssetInfo::NativeToken { denom } => Some(denom),
            AssetInfo::Token { .. } => None,
        }
    }

    pub fn contract_addr(&self) -> Option<&Addr> {
        match self {
            AssetInfo::Token { contract_addr } => Some(contract_addr),
            AssetInfo::NativeToken { .. } => None,
        }
    }

    /// Decodes an asset info received as raw JSON.
    pub fn from_value(value: &Value) -> WineResult<Self> {
        from_schema_value("asset info", value)
    }
}

impl fmt::Display for AssetInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetInfo::NativeToken { denom } => write!(f, "{denom}"),
            AssetInfo::Token { contract_addr } => write!(f, "{contract_addr}"),
        }
    }
}

/// Ordered pair of asset infos identifying a trading pair.
pub type AssetPair = [AssetInfo; 2];

/// An amount of some asset, in the asset's base unit.
#[cw_serde]
#[derive(Eq)]
pub struct Asset {
    pub info: AssetInfo,
    pub amount: Uint128,
}

impl Asset {
    pub fn new(info: AssetInfo, amount: impl Into<Uint128>) -> Self {
        Asset {
            info,
            amount: amount.into(),
        }
    }

    pub fn native(denom: impl Into<String>, amount: impl Into<Uint128>) -> Self {
        Asset::new(AssetInfo::native(denom), amount)
    }

    pub fn token(contract_addr: impl Into<String>, amount: impl Into<Uint128>) -> Self {
        Asset::new(AssetInfo::token(contract_addr), amount)
    }

    pub fn is_native(&self) -> bool {
        self.info.is_native()
    }

    /// The coin that moves this asset when it is ledger-native.
    pub fn to_coin(&self) -> Option<Coin> {
        self.info.denom().map(|denom| Coin {
            denom: denom.to_string(),
            amount: self.amount,
        })
    }

    /// Decodes an asset received as raw JSON.
    pub fn from_value(value: &Value) -> WineResult<Self> {
        from_schema_value("asset", value)
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.info)
    }
}

fn from_schema_value<T: DeserializeOwned>(kind: &str, value: &Value) -> WineResult<T> {
    serde_json::from_value(value.clone()).map_err(|_| WineError::schema(kind, value))
}
