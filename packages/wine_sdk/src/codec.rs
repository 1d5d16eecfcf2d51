//! Canonical JSON encoding of contract payloads.
//!
//! Every payload is serialized through a `serde_json::Value` so that unset
//! optional members can be dropped before the bytes are produced. The
//! contracts tell an absent member apart from an explicit `null`, so a payload
//! leaving this module never carries `null` object members.
use std::fmt;

use cosmwasm_std::Binary;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{WineError, WineResult};

/// Serializes `payload` into its wire value with null members removed.
pub fn to_wire_value<T: Serialize + ?Sized>(payload: &T) -> WineResult<Value> {
    let mut value = serde_json::to_value(payload)?;
    prune_nulls(&mut value);
    Ok(value)
}

/// Removes every `null` member from the objects in `value`, at any depth.
/// Array elements are kept as they are positional.
pub fn prune_nulls(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.retain(|_, member| !member.is_null());
            map.values_mut().for_each(prune_nulls);
        }
        Value::Array(items) => items.iter_mut().for_each(prune_nulls),
        _ => {}
    }
}

/// Wraps `payload` under a single `action` key: `{"<action>": <payload>}`.
pub fn encode_action<T: Serialize + ?Sized>(action: &str, payload: &T) -> WineResult<Binary> {
    if action.is_empty() {
        return Err(WineError::encoding("action", "action name is empty"));
    }
    let mut wrapped = Map::new();
    wrapped.insert(action.to_string(), to_wire_value(payload)?);
    Ok(Binary::from(serde_json::to_vec(&Value::Object(wrapped))?))
}

/// Encodes a message that already carries its action tag, such as a
/// `#[cw_serde]` execute or query enum.
pub fn encode_msg<T: Serialize + ?Sized>(msg: &T) -> WineResult<Binary> {
    Ok(Binary::from(serde_json::to_vec(&to_wire_value(msg)?)?))
}

/// Encodes the callback a token contract forwards to the receiving contract
/// once it has moved the funds.
///
/// The bytes are compact JSON; they travel base64-encoded inside the outer
/// message (`Binary` serializes as base64, see [`Binary::to_base64`]).
pub fn encode_embedded_callback<T: Serialize + ?Sized>(
    action: &str,
    payload: &T,
) -> WineResult<Binary> {
    encode_action(action, payload)
}

/// Splits an encoded action back into its name and payload.
pub fn decode_action(bytes: &[u8]) -> WineResult<(String, Value)> {
    let value: Value = serde_json::from_slice(bytes)?;
    if let Value::Object(map) = &value {
        if map.len() == 1 {
            if let Some((action, payload)) = map.iter().next() {
                return Ok((action.clone(), payload.clone()));
            }
        }
    }
    Err(WineError::schema("action message", value))
}

/// A price, rate or slippage bound rendered with exactly ten decimal places.
///
/// Formatting is fixed so that the serialized value never depends on how the
/// host happens to print floats.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash, JsonSchema)]
pub struct PriceAmount(String);

impl PriceAmount {
    pub const PRECISION: usize = 10;

    pub fn new(value: f64) -> WineResult<Self> {
        if !value.is_finite() {
            return Err(WineError::encoding(
                "price amount",
                format!("{value} is not a finite number"),
            ));
        }
        // -0.0 would otherwise print with a sign
        let value = if value == 0.0 { 0.0 } else { value };
        Ok(PriceAmount(format!("{:.*}", Self::PRECISION, value)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn maybe(value: Option<f64>) -> WineResult<Option<Self>> {
        value.map(PriceAmount::new).transpose()
    }
}

impl TryFrom<f64> for PriceAmount {
    type Error = WineError;

    fn try_from(value: f64) -> WineResult<Self> {
        PriceAmount::new(value)
    }
}

impl fmt::Display for PriceAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
