//! Typed message builders for the Wine concentrated-liquidity AMM.
//!
//! The protocol lives in three contracts: a factory, a trading pair and a
//! liquidity-position token. This crate only shapes their instantiate, execute
//! and query payloads and decides how funds travel with them. Everything else
//! (signing, broadcasting, price curves, tick accounting) belongs to the
//! transport and to the contracts themselves.
pub mod asset;
pub mod codec;
pub mod config;
pub mod error;
pub mod interfaces;
pub mod transfer;
pub mod tx;

#[cfg(test)]
pub mod unit_test_interface;

pub use asset::{Asset, AssetInfo, AssetPair};
pub use codec::PriceAmount;
pub use config::{RawWineConfig, WineConfig};
pub use error::{WineError, WineResult};
pub use interfaces::{factory::FactoryContract, lp_token::LpTokenContract, pair::PairContract};
pub use transfer::TransferPath;
pub use tx::{ExecuteCallback, InstantiateCallback, MsgExecuteContract, MsgInstantiateContract, Query};

pub use cosmwasm_std;

/// Implements the transport callbacks for the `InstantiateMsg`, `ExecuteMsg`
/// and `QueryMsg` in scope.
#[macro_export]
macro_rules! impl_msg_callbacks {
    () => {
        impl $crate::tx::InstantiateCallback for InstantiateMsg {}

        impl $crate::tx::ExecuteCallback for ExecuteMsg {}

        impl $crate::tx::Query for QueryMsg {}
    };
}

/// Generates the base of a contract facade: the target contract and the
/// account every message is issued on behalf of.
///
/// Example:
/// ```ignore
/// create_contract_client!(MyContract);
/// let client = MyContract::new("wasm1contract", "wasm1sender");
/// ```
#[macro_export]
macro_rules! create_contract_client {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq)]
        pub struct $name {
            pub address: $crate::cosmwasm_std::Addr,
            pub sender: $crate::cosmwasm_std::Addr,
        }

        impl $name {
            pub fn new(address: impl Into<String>, sender: impl Into<String>) -> Self {
                $name {
                    address: $crate::cosmwasm_std::Addr::unchecked(address),
                    sender: $crate::cosmwasm_std::Addr::unchecked(sender),
                }
            }

            /// Same contract, different signing account.
            pub fn with_sender(&self, sender: impl Into<String>) -> Self {
                $name {
                    address: self.address.clone(),
                    sender: $crate::cosmwasm_std::Addr::unchecked(sender),
                }
            }
        }

        impl From<$name> for $crate::cosmwasm_std::Addr {
            fn from(client: $name) -> Self {
                client.address
            }
        }
    };
}
