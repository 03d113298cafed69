//! Detector process client — one spawned child per invocation.
//!
//! The protocol is single-shot: write one JSON-RPC request to the child's
//! stdin, read its stdout to end-of-stream, then wait for exit. There is no
//! persistent session, no handshake, and no reply correlation.

use std::process::Stdio;

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::process::Command;

use crate::rpc::{RpcReply, RpcRequest};
use crate::{BridgeConfig, BridgeError};

/// Seam between the HTTP layer and the detector process.
///
/// Implementations must be `Send + Sync` so a single invoker can back
/// concurrent requests; invocations share nothing, so no locking is needed.
#[async_trait]
pub trait DetectorInvoker: Send + Sync {
    /// Call a detector method and return the resolved result map.
    ///
    /// # Errors
    /// Returns a [`BridgeError`] for any failure between serialization and
    /// reply resolution. Callers treat every variant as terminal.
    async fn invoke(
        &self,
        method: &str,
        params: Map<String, Value>,
    ) -> Result<Map<String, Value>, BridgeError>;
}

/// Invoker backed by the real detector binary.
#[derive(Debug, Clone)]
pub struct DetectorClient {
    config: BridgeConfig,
}

impl DetectorClient {
    /// Create a client for the configured detector binary.
    #[must_use]
    pub fn new(config: BridgeConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl DetectorInvoker for DetectorClient {
    async fn invoke(
        &self,
        method: &str,
        params: Map<String, Value>,
    ) -> Result<Map<String, Value>, BridgeError> {
        let payload = RpcRequest::new(method, params).to_wire()?;

        tracing::debug!(
            %method,
            detector = %self.config.detector_path.display(),
            "spawning detector"
        );

        // kill_on_drop guarantees the child is terminated when this scope
        // exits on any path, including a dropped future. Killing an already
        // reaped child is a no-op.
        let mut child = Command::new(&self.config.detector_path)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| BridgeError::Spawn {
                path: self.config.detector_path.clone(),
                source,
            })?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or(BridgeError::MissingPipe { stream: "stdin" })?;
        stdin
            .write_all(&payload)
            .await
            .map_err(BridgeError::WriteRequest)?;
        // Dropping the handle closes the pipe, signalling EOF to the child.
        drop(stdin);

        let mut stdout = child
            .stdout
            .take()
            .ok_or(BridgeError::MissingPipe { stream: "stdout" })?;
        let mut output = Vec::new();
        stdout
            .read_to_end(&mut output)
            .await
            .map_err(BridgeError::ReadResponse)?;

        let status = child.wait().await.map_err(BridgeError::Wait)?;
        if !status.success() {
            return Err(BridgeError::ExitFailure { status });
        }

        tracing::debug!(%method, bytes = output.len(), "detector replied");

        RpcReply::parse(&output)?.into_result()
    }
}
