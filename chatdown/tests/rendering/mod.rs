//! Rendering pipeline tests
//!
//! Split by concern: `contract` pins the exact fragment for each recognized
//! construct, `ordering` pins the sequential-rewrite interactions,
//! `escaping` covers the opt-in hardened mode, `properties` covers totality
//! and identity invariants, `snapshots` covers composite replies.

mod contract;
mod escaping;
mod properties;
