//! Radio directives.
//!
//! A directive is declarative: issuing the same directive twice leaves the
//! radio in the same state as issuing it once.

use serde::Serialize;

use super::ids::AlertClass;
use super::range::{ChannelRange, MessageId};

/// Radio access technology numbering space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RanType {
    Gsm,
    Cdma,
}

impl RanType {
    pub fn as_str(self) -> &'static str {
        match self {
            RanType::Gsm => "gsm",
            RanType::Cdma => "cdma",
        }
    }
}

/// Where a directive came from. Informational only; the radio never sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "class", rename_all = "snake_case")]
pub enum Origin {
    /// Row of the standard channel table.
    Table(AlertClass),
    /// Carrier-defined emergency range.
    Carrier,
    /// Presidential enable issued alongside the carrier ranges.
    CarrierPresidential,
    /// Final presidential enable on the target subscription.
    PresidentialOverride,
}

/// One enable/disable instruction for a single id range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Directive {
    pub ran: RanType,
    pub range: ChannelRange,
    pub enable: bool,
    pub origin: Origin,
}

impl Directive {
    pub fn new(ran: RanType, range: ChannelRange, enable: bool, origin: Origin) -> Self {
        Self {
            ran,
            range,
            enable,
            origin,
        }
    }

    pub fn start(&self) -> MessageId {
        self.range.start()
    }

    pub fn end(&self) -> MessageId {
        self.range.end()
    }

    /// `"enable"` or `"disable"`.
    pub fn action(&self) -> &'static str {
        if self.enable {
            "enable"
        } else {
            "disable"
        }
    }
}
