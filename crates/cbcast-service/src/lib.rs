//! cbcast configuration service library entry.
//!
//! This crate wires preference and identity reads, the channel policy
//! evaluator, and the per-subscription directive applier behind a single
//! trigger. It is consumed by the binary (`main.rs`) and by integration tests.

pub mod apply;
pub mod config;
pub mod host;
pub mod obs;
pub mod policy;
pub mod service;

pub use service::{ChannelConfigService, ACTION_ENABLE_CHANNELS};
