//! HTTP gateway for the PYRO detector bridge.
//!
//! Exposes the detector's detonator, case, agent, PQL, and health
//! operations as REST endpoints; every handler is a thin relay over a
//! single-shot JSON-RPC call into the detector binary.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod error;
pub mod routes;
