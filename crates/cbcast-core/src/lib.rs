//! cbcast core: cell broadcast channel primitives, error types, and id tables.
//!
//! This crate defines the message-identifier constants, the carrier range
//! format, and the directive type shared by the configuration service and
//! host integrations. It carries no runtime or radio dependencies so the
//! same types can back a device daemon, a test harness, or an emulator.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Malformed carrier text surfaces as `CbError`/`Result` or is skipped by the
//! lenient parser, never as a crash.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod channel;
pub mod error;

/// Shared result type.
pub use error::{CbError, Result};
