//! Channel primitives (message ids, ranges, directives).
//!
//! This module hosts the three pieces every configuration pass is built from:
//! - `ids`: the fixed 3GPP/3GPP2 message-identifier table.
//! - `range`: inclusive id intervals and the carrier range text format.
//! - `directive`: one enable/disable instruction for the radio.

pub mod directive;
pub mod ids;
pub mod range;

pub use directive::{Directive, Origin, RanType};
pub use ids::{AlertClass, ChannelEntry, CHANNEL_TABLE, PRESIDENTIAL_CHANNELS};
pub use range::{parse_carrier_ranges, parse_range_element, ChannelRange, MessageId};
