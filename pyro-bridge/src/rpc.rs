//! JSON-RPC 2.0 request and reply envelopes for the stdio protocol.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::BridgeError;

/// Fixed request id. Calls are strictly sequential and non-overlapping per
/// process invocation, so no reply correlation is needed.
const REQUEST_ID: u32 = 1;

/// Key under which a scalar or array `result` is wrapped so the resolved
/// reply is uniformly a map.
const SYNTHETIC_RESULT_KEY: &str = "result";

/// A single outbound JSON-RPC 2.0 request.
#[derive(Debug, Serialize)]
pub struct RpcRequest<'a> {
    jsonrpc: &'static str,
    id: u32,
    method: &'a str,
    params: Map<String, Value>,
}

impl<'a> RpcRequest<'a> {
    /// Build a request for the given method and params.
    #[must_use]
    pub fn new(method: &'a str, params: Map<String, Value>) -> Self {
        Self {
            jsonrpc: "2.0",
            id: REQUEST_ID,
            method,
            params,
        }
    }

    /// Serialize the request followed by a trailing newline, ready to write
    /// to the child's stdin.
    ///
    /// # Errors
    /// Returns [`BridgeError::EncodeRequest`] if serialization fails.
    pub fn to_wire(&self) -> Result<Vec<u8>, BridgeError> {
        let mut payload = serde_json::to_vec(self).map_err(BridgeError::EncodeRequest)?;
        payload.push(b'\n');
        Ok(payload)
    }
}

/// A JSON-RPC 2.0 reply as read from the child's stdout.
///
/// Exactly one of `result` and `error` is expected; the resolution rules in
/// [`RpcReply::into_result`] handle every other combination. The reply is
/// kept as a raw field map because key presence matters: an explicit
/// `"error": null` is still an error, and `"result": null` is a present
/// null result, not a missing one.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct RpcReply {
    fields: Map<String, Value>,
}

impl RpcReply {
    /// Parse a raw stdout stream as a reply.
    ///
    /// # Errors
    /// Returns [`BridgeError::MalformedResponse`] if the bytes are not a
    /// JSON object.
    pub fn parse(raw: &[u8]) -> Result<Self, BridgeError> {
        serde_json::from_slice(raw).map_err(BridgeError::MalformedResponse)
    }

    /// Resolve the reply into a result map.
    ///
    /// A present `error` key takes precedence even when `result` is also
    /// present, and even when its value is `null`. A non-object `result`
    /// (scalar, array, or `null`) is wrapped under a synthetic `"result"`
    /// key so callers always receive a map.
    ///
    /// # Errors
    /// Returns [`BridgeError::Rpc`] when the `error` key is present and
    /// [`BridgeError::MissingResult`] when neither key is present.
    pub fn into_result(mut self) -> Result<Map<String, Value>, BridgeError> {
        if let Some(error) = self.fields.remove("error") {
            return Err(BridgeError::Rpc(render_error(&error)));
        }
        match self.fields.remove("result") {
            Some(Value::Object(map)) => Ok(map),
            Some(other) => {
                let mut map = Map::new();
                map.insert(SYNTHETIC_RESULT_KEY.to_owned(), other);
                Ok(map)
            }
            None => Err(BridgeError::MissingResult),
        }
    }
}

/// Render an RPC error value as message text. Plain strings are used as-is;
/// structured errors keep their JSON form.
fn render_error(error: &Value) -> String {
    match error {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
