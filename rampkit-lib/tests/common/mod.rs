//! Shared fixtures for integration tests.

#![allow(dead_code)]

use rampkit_lib::lookup::{LookupClient, LookupConfig};
use rampkit_lib::{PaymentPlatform, PlatformRegistry};
use serde_json::{json, Value};
use std::sync::Arc;

pub const INTENT_HASH: &str =
    "0x1f2e3d4c5b6a79881f2e3d4c5b6a79881f2e3d4c5b6a79881f2e3d4c5b6a7988";
pub const PROVIDER_HASH: &str =
    "0x0a1b2c3d4e5f60710a1b2c3d4e5f60710a1b2c3d4e5f60710a1b2c3d4e5f6071";

/// Serialized proof context around `params`.
pub fn proof_context(params: Value) -> String {
    json!({
        "extractedParameters": params,
        "contextMessage": INTENT_HASH,
        "providerHash": PROVIDER_HASH,
    })
    .to_string()
}

/// Lookup settings pointing every platform at `base_url`, with fast retries.
pub fn lookup_config(base_url: &str, max_retries: u32) -> LookupConfig {
    LookupConfig::new()
        .with_base_url(PaymentPlatform::CashApp, base_url)
        .with_base_url(PaymentPlatform::Venmo, base_url)
        .with_base_url(PaymentPlatform::Revolut, base_url)
        .with_timeout(1)
        .with_retries(max_retries, 1)
}

/// Registry whose validators talk to `base_url`.
pub fn registry_for(base_url: &str, max_retries: u32) -> PlatformRegistry {
    let client = LookupClient::new(lookup_config(base_url, max_retries)).unwrap();
    PlatformRegistry::new(Arc::new(client))
}

/// Registry with default lookup settings; for tests that never hit the network.
pub fn offline_registry() -> PlatformRegistry {
    PlatformRegistry::new(Arc::new(LookupClient::new(LookupConfig::new()).unwrap()))
}
