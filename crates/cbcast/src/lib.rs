//! Top-level facade crate for cbcast.
//!
//! Re-exports the core channel types and the configuration service so users can depend on a single crate.

pub mod core {
    pub use cbcast_core::*;
}

pub mod service {
    pub use cbcast_service::*;
}
