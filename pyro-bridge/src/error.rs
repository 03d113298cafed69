//! Error types for the bridge crate.

use std::path::PathBuf;
use std::process::ExitStatus;

/// Errors that can occur during a detector invocation.
///
/// Every failure is terminal for the call that produced it; callers do not
/// retry and do not distinguish between variants beyond the message.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BridgeError {
    /// The outbound JSON-RPC request could not be serialized.
    #[error("failed to encode detector request: {0}")]
    EncodeRequest(#[source] serde_json::Error),

    /// The detector binary could not be started.
    #[error("failed to start detector at {path}: {source}")]
    Spawn {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A stdio pipe to the child was not set up.
    #[error("detector {stream} pipe was not set up")]
    MissingPipe { stream: &'static str },

    /// Writing the request to the child's stdin failed.
    #[error("failed to write detector request: {0}")]
    WriteRequest(#[source] std::io::Error),

    /// Reading the child's stdout failed.
    #[error("failed to read detector response: {0}")]
    ReadResponse(#[source] std::io::Error),

    /// Waiting for the child to exit failed.
    #[error("failed to wait for detector exit: {0}")]
    Wait(#[source] std::io::Error),

    /// The detector exited with a non-zero status or was killed by a signal.
    #[error("detector exited with {status}")]
    ExitFailure { status: ExitStatus },

    /// The child's output was not a JSON-RPC reply object.
    #[error("failed to parse detector response: {0}")]
    MalformedResponse(#[source] serde_json::Error),

    /// The reply carried an explicit JSON-RPC `error` value.
    #[error("detector error: {0}")]
    Rpc(String),

    /// The reply carried neither `result` nor `error`.
    #[error("no result in response")]
    MissingResult,
}
