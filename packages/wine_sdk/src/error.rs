use cosmwasm_std::{Addr, OverflowError, StdError};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum WineError {
    #[error("{0}")]
    Std(#[from] StdError),
    #[error("{0}")]
    Overflow(#[from] OverflowError),
    /// A value matches none of the shapes the contracts are known to speak.
    #[error("Unrecognized {kind}: {value}")]
    Schema { kind: String, value: String },
    #[error("Failed to encode {context}: {msg}")]
    Encoding { context: String, msg: String },
    #[error("Invalid configuration: {0}")]
    Config(String),
    /// Business rules are enforced on-chain only, so this is how they surface.
    #[error("Contract {contract} rejected the request: {reason}")]
    Rejected { contract: Addr, reason: String },
}

pub type WineResult<T> = core::result::Result<T, WineError>;

impl WineError {
    pub fn schema(kind: impl Into<String>, value: impl ToString) -> Self {
        WineError::Schema {
            kind: kind.into(),
            value: value.to_string(),
        }
    }

    pub fn encoding(context: impl Into<String>, msg: impl ToString) -> Self {
        WineError::Encoding {
            context: context.into(),
            msg: msg.to_string(),
        }
    }

    pub fn is_schema(&self) -> bool {
        matches!(self, WineError::Schema { .. })
    }
}

impl From<serde_json::Error> for WineError {
    fn from(err: serde_json::Error) -> Self {
        WineError::encoding("payload", err)
    }
}

#[allow(clippy::from_over_into)]
impl Into<StdError> for WineError {
    fn into(self) -> StdError {
        match self {
            WineError::Std(err) => err,
            other => StdError::generic_err(other.to_string()),
        }
    }
}
