//! Emergency alert classification for received broadcasts.

use cbcast_core::channel::{parse_carrier_ranges, MessageId};

use super::prefs::{carrier_emergency_range, IdentityContext};
use crate::host::DeviceIdentity;

/// A received cell broadcast, as far as classification cares.
pub trait BroadcastMessage {
    /// The message's own category says it is an emergency alert.
    fn is_emergency_alert(&self) -> bool;
    /// GSM message id or CDMA service category.
    fn service_category(&self) -> MessageId;
}

/// Minimal owned message for hosts that already decoded the broadcast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellBroadcast {
    pub service_category: MessageId,
    pub emergency: bool,
}

impl BroadcastMessage for CellBroadcast {
    fn is_emergency_alert(&self) -> bool {
        self.emergency
    }

    fn service_category(&self) -> MessageId {
        self.service_category
    }
}

/// True for standard emergency alerts and for ids inside the carrier range.
pub fn is_emergency_alert_message(message: &dyn BroadcastMessage, device: &dyn DeviceIdentity) -> bool {
    if message.is_emergency_alert() {
        return true;
    }
    let identity = IdentityContext::read(device);
    let carrier = carrier_emergency_range(device, &identity);
    in_carrier_range(message.service_category(), carrier.as_deref())
}

/// Pure form of the carrier branch. `None` or empty text never matches.
pub fn in_carrier_range(category: MessageId, carrier_range: Option<&str>) -> bool {
    match carrier_range {
        Some(text) if !text.is_empty() => parse_carrier_ranges(text)
            .iter()
            .any(|r| r.contains(category)),
        _ => false,
    }
}
