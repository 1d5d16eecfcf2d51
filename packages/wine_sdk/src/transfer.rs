//! Decides how value reaches a contract alongside an action.
//!
//! A native coin rides on the outer message as attached funds and the action
//! payload only declares intent. A token-contract asset cannot be attached, so
//! the message goes to the token contract's `send` entry point instead, which
//! moves the funds and forwards an embedded callback to the receiving contract.
use cosmwasm_std::{Addr, Binary, Coin, Uint128};
use cw20::Cw20ExecuteMsg;
use serde::Serialize;
use serde_json::Value;

use crate::asset::{Asset, AssetInfo};
use crate::codec::{encode_embedded_callback, encode_msg};
use crate::error::WineResult;
use crate::tx::{ExecuteCallback, MsgExecuteContract};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransferPath {
    /// Coin attached to the outer message.
    Native(Coin),
    /// Moved by the token contract's `send`, which notifies the recipient.
    ContractToken { token: Addr, amount: Uint128 },
}

impl TransferPath {
    pub fn resolve(asset: &Asset) -> Self {
        match &asset.info {
            AssetInfo::NativeToken { denom } => TransferPath::Native(Coin {
                denom: denom.clone(),
                amount: asset.amount,
            }),
            AssetInfo::Token { contract_addr } => TransferPath::ContractToken {
                token: contract_addr.clone(),
                amount: asset.amount,
            },
        }
    }

    /// Resolves an asset given as raw JSON. Unknown shapes fail here, before
    /// any message exists.
    pub fn resolve_value(value: &Value) -> WineResult<Self> {
        Ok(TransferPath::resolve(&Asset::from_value(value)?))
    }

    pub fn is_native(&self) -> bool {
        matches!(self, TransferPath::Native(_))
    }
}

/// Coins to attach for the native members of `assets`, one entry per denom,
/// sorted by denom. Token-contract assets contribute nothing.
pub fn attached_funds<'a>(assets: impl IntoIterator<Item = &'a Asset>) -> WineResult<Vec<Coin>> {
    let mut funds: Vec<Coin> = vec![];
    for coin in assets.into_iter().filter_map(Asset::to_coin) {
        match funds.iter_mut().find(|existing| existing.denom == coin.denom) {
            Some(existing) => existing.amount = existing.amount.checked_add(coin.amount)?,
            None => funds.push(coin),
        }
    }
    funds.sort_by(|a, b| a.denom.cmp(&b.denom));
    Ok(funds)
}

/// `send` on `token`, forwarding `amount` and `callback` to `recipient`.
///
/// The returned message targets the token contract.
pub fn send_and_execute(
    sender: &Addr,
    token: &Addr,
    recipient: &Addr,
    amount: Uint128,
    callback: Binary,
) -> WineResult<MsgExecuteContract> {
    let send = Cw20ExecuteMsg::Send {
        contract: recipient.to_string(),
        amount,
        msg: callback,
    };
    Ok(MsgExecuteContract::new(sender, token, encode_msg(&send)?, vec![]))
}

/// Builds the message that executes an action on `recipient` paid with `asset`.
///
/// Native assets send `native_msg` to `recipient` with the coin attached.
/// Token-contract assets send `{"<hook_action>": hook}` through the token
/// contract instead.
pub fn execute_with_asset<N, H>(
    sender: &Addr,
    recipient: &Addr,
    asset: &Asset,
    native_msg: &N,
    hook_action: &str,
    hook: &H,
) -> WineResult<MsgExecuteContract>
where
    N: ExecuteCallback,
    H: Serialize + ?Sized,
{
    let path = TransferPath::resolve(asset);
    tracing::debug!(%recipient, ?path, "resolved transfer path");
    match path {
        TransferPath::Native(coin) => native_msg.to_execute_msg(sender, recipient, vec![coin]),
        TransferPath::ContractToken { token, amount } => {
            let callback = encode_embedded_callback(hook_action, hook)?;
            send_and_execute(sender, &token, recipient, amount, callback)
        }
    }
}
