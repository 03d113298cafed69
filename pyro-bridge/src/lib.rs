//! Stdio JSON-RPC client for the PYRO detector binary.
//!
//! Each call spawns the detector process, writes a single JSON-RPC 2.0
//! request to its stdin, reads its stdout to end-of-stream as the reply,
//! and relays the resolved result. The detector's own logic (detonators,
//! cases, PQL queries) lives entirely in the external binary.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod client;
pub mod config;
pub mod error;
pub mod rpc;

pub use client::{DetectorClient, DetectorInvoker};
pub use config::BridgeConfig;
pub use error::BridgeError;
pub use rpc::{RpcReply, RpcRequest};
