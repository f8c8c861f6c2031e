//! Invocation and response messages exchanged with the host.

use serde::{Deserialize, Serialize};

/// Status code of a successful response.
pub const STATUS_OK: i32 = 200;

/// Status code of a failed response.
pub const STATUS_ERROR: i32 = 500;

/// A request to run one transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invocation {
    /// Transaction identifier. Assigned by the service loop when empty.
    #[serde(default)]
    pub tx_id: String,
    /// Function name, optionally qualified as `Contract:Function`.
    pub function: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new(
        tx_id: impl Into<String>,
        function: impl Into<String>,
        args: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            tx_id: tx_id.into(),
            function: function.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

/// The outcome of one invocation, reported back to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    #[serde(default)]
    pub tx_id: String,
    pub status: i32,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<String>,
}

impl Response {
    /// A successful response with an optional payload.
    pub fn success(tx_id: impl Into<String>, payload: Option<Vec<u8>>) -> Self {
        Self {
            tx_id: tx_id.into(),
            status: STATUS_OK,
            message: String::new(),
            payload: payload.map(|p| String::from_utf8_lossy(&p).into_owned()),
        }
    }

    /// A failed response carrying the error message verbatim.
    pub fn error(tx_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            tx_id: tx_id.into(),
            status: STATUS_ERROR,
            message: message.into(),
            payload: None,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }
}
