//! Fuzz target: parsing and resolving detector replies.
//!
//! Verifies that arbitrary child stdout never causes panics in the
//! reply parser or the result resolution rules.

#![no_main]

use libfuzzer_sys::fuzz_target;
use pyro_bridge::RpcReply;

fuzz_target!(|data: &[u8]| {
    // Errors are expected and fine; panics are not.
    if let Ok(reply) = RpcReply::parse(data) {
        let _ = reply.into_result();
    }
});
