//! Policy layer (preference derivation, channel table evaluation, classification).
//!
//! Turns fresh preference and identity reads into the ordered directive list
//! the applier hands to each radio.

pub mod classifier;
pub mod engine;
pub mod prefs;

pub use classifier::{is_emergency_alert_message, BroadcastMessage, CellBroadcast};
pub use engine::{evaluate, ChannelFlags};
pub use prefs::{carrier_emergency_range, IdentityContext, PreferenceSet};
